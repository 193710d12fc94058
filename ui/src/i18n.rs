//! Localized UI chrome for `crophelper-ui`.
//!
//! Built on:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/crophelper-ui.ftl   (fallback/reference)
//! ```
//!
//! Only `en-US` ships. The language picked during onboarding is shown back to
//! the farmer as a label; it does not switch catalogues.
//!
//! Sample data (crop names, mandi names, advice text) is not routed through
//! here. It lives in `crate::data` as-is.
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let back = t!("nav-back");
//! let hello = t!("dashboard-greeting", name = "Kumar");
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro. Expands to `fl!(&*LOADER, ...)` so every lookup goes
/// through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "crophelper-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the embedded catalogues (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization loaded"),
            Err(err) => tracing::warn!(%err, "failed selecting languages; continuing with fallback"),
        }
        // Isolation marks around arguments render as stray glyphs in some
        // webviews. Applies to the bundles loaded above.
        LOADER.set_use_isolating(false);
    });
}

/// Language tags with an embedded catalogue.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-back");
        assert_eq!(s, "Back");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        init();
        let s = crate::t!("dashboard-greeting", name = "Kumar");
        assert_eq!(s, "Good Morning, Kumar");
    }
}
