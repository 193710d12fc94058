#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the selectors the shared screens render (header, tabs, cards, badges,
  scan overlay, rating stars) remain present in the unified theme:
  ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, preventing a silent styling
  regression in packaged desktop builds where the theme is embedded.

How it works:
- The theme is embedded with `include_str!` from the shared `ui/` location
  (mirrors `ui::THEME_CSS`, which the desktop binary inlines).
- A substring presence check over a curated list of selectors.
- If you intentionally rename or remove a selector, update the component markup
  and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".screen {",
    ".screen__body",
    ".stack {",
    ".grid--two",
    // Header & navigation chrome
    ".screen-header {",
    ".screen-header__back",
    ".screen-header__title",
    ".menu__item",
    ".quick-action",
    ".tabs__tab--active",
    // Cards & badges
    ".card {",
    ".card--center",
    ".card--success",
    ".badge--positive",
    ".badge--caution",
    ".badge--critical",
    ".badge--neutral",
    ".alert--critical",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--recording",
    // Pest scan
    ".scan__preview",
    ".scan__overlay",
    ".scan__result",
    // Weather
    ".hourly__slot",
    ".rain--low",
    ".rain--medium",
    ".rain--high",
    // Feedback
    ".rating__star--on",
    ".faq__question",
    ".channel__icon--chat",
    ".channel__icon--phone",
    ".channel__icon--email",
    // Motion used by the scan and recording indicators
    "@keyframes pulse",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn every_tone_has_a_badge_and_text_rule() {
    for tone in ["positive", "caution", "critical"] {
        let badge = format!(".badge--{tone}");
        let text = format!(".text--{tone}");
        assert!(
            THEME_CSS.contains(&badge) && THEME_CSS.contains(&text),
            "tone `{tone}` is missing a badge or text rule"
        );
    }
}
