//! Localization for `basepath-ui`.
//!
//! Message bundles are Fluent files embedded at compile time:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/basepath-ui.ftl   (fallback/reference)
//!   es-ES/basepath-ui.ftl
//! ```
//!
//! Call `init()` once at startup (it is idempotent), then look strings up with
//! the `t!` macro:
//! ```ignore
//! crate::i18n::init();
//! let title = t!("scatter-title");
//! let banner = t!("dashboard-load-error", error = err.to_string());
//! ```
//!
//! Desktop builds pick the requested languages from the OS locale list; web
//! builds read `navigator.languages`. Assets are always embedded on WASM.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup routed through the shared loader.
///
/// ```text
/// t!("axis-wins")
/// t!("dashboard-load-error", error = message)
/// ```
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
const DOMAIN: &str = "basepath-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
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

    #[test]
    fn embedded_languages_include_fallback() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn unknown_language_keeps_current_strings() {
        init();
        let before = fl!(&*LOADER, "axis-wins");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "axis-wins");
        assert_eq!(before, after);
    }

    #[test]
    fn macro_domain_matches_loader_domain() {
        let manifest = include_str!("../i18n.toml");
        let expected = format!("domain = \"{DOMAIN}\"");
        assert!(manifest.lines().any(|line| line.trim() == expected));
        assert!(Localizations::get(&format!("en-US/{DOMAIN}.ftl")).is_some());
    }

    #[test]
    fn garbage_tag_is_ignored() {
        assert!(set_language("not a language tag!").is_ok());
    }
}
