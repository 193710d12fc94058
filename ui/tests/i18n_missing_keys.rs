use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Catalogue consistency test for the fallback `crophelper-ui.ftl`.
///
/// `fl!` already rejects unknown keys at compile time. This test covers the
/// other direction and the file itself:
/// - no key is defined twice
/// - every key is referenced by some `t!("...")` call under `src/`
///
/// The FTL parser is a lightweight heuristic:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
const EN_US: &str = include_str!("../i18n/en-US/crophelper-ui.ftl");

#[test]
fn fallback_catalogue_has_no_duplicate_keys() {
    assert!(
        !extract_keys(EN_US).is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");
}

#[test]
fn every_catalogue_key_is_used() {
    let used = used_keys();
    let mut unused: BTreeSet<String> = BTreeSet::new();
    for key in extract_keys(EN_US) {
        if !used.contains(&key) {
            unused.insert(key);
        }
    }

    assert!(
        unused.is_empty(),
        "Keys defined in en-US but never looked up:\n  {}",
        unused.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn every_screen_has_a_title() {
    let keys = extract_keys(EN_US);
    for tag in [
        "onboarding",
        "dashboard",
        "soil-health",
        "pest-detection",
        "weather",
        "pricing",
        "feedback",
    ] {
        let key = format!("screen-{tag}");
        assert!(keys.contains(&key), "missing `{key}`");
    }
}

/// Collect the literal keys passed to `t!(` across the crate sources.
fn used_keys() -> HashSet<String> {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut keys = HashSet::new();
    for file in rust_files(&src) {
        let text = fs::read_to_string(&file).unwrap();
        for (idx, _) in text.match_indices("t!(\"") {
            let rest = &text[idx + 4..];
            if let Some(end) = rest.find('"') {
                keys.insert(rest[..end].to_string());
            }
        }
    }
    keys
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
    out
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_key(key) {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

fn is_message_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@')
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_key(key) && !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
