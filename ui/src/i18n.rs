//! Internationalization (i18n) support for `shelfsight-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/shelfsight_ui.ftl   (fallback/reference)
//!   es-ES/shelfsight_ui.ftl   (additional locale)
//! ```
//!
//! Call `i18n::init()` once at app start, then use `t!("nav-dashboard")` in
//! components. Labels for dashboard enums live in `components::labels`.
//!
//! To add a new locale, copy `en-US/shelfsight_ui.ftl` to
//! `i18n/<lang-id>/shelfsight_ui.ftl`, translate each value (keep IDs and
//! placeholders identical) and run the tests to check completeness.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro routing every lookup through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "shelfsight_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select(&requested) {
            Ok(selected) => debug!(?selected, "[i18n] languages selected"),
            Err(err) => warn!("[i18n] Failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Loads `requested` and turns off bidi isolation on the fresh bundles, so
/// placeholders come out without U+2068/U+2069 around them.
fn select(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, i18n_embed::I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(selected)
}

/// Switch language at runtime. An unparsable `tag` is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    select(&[lang]).map(|_| ())
}

/// Embedded language identifiers, sorted.
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
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        set_language("en-US").unwrap();
        let s = fl!(&*LOADER, "nav-dashboard");
        assert_eq!(s, "Dashboard");
    }

    #[test]
    fn placeholders_are_not_isolated() {
        init();
        set_language("en-US").unwrap();
        let s = fl!(&*LOADER, "hint-focused", chart = "age");
        assert_eq!(s, "Tip: age focused, use + / − / R");
        assert!(!s.contains('\u{2068}'));
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let before = fl!(&*LOADER, "mode-compare");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "mode-compare");
        assert_eq!(before, after);
    }
}
