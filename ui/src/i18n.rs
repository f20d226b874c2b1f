//! Localization of renderer-owned labels for `hermetic-ui`.
//!
//! Page Copy documents carry the marketing text. The handful of strings the
//! renderer itself owns (step ordinals, image alt text, captions) live in
//! Fluent bundles:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/hermetic-ui.ftl   (fallback/reference)
//!   bg-BG/hermetic-ui.ftl
//! ```
//!
//! Every [`Locale`] gets its own immutable loader. There is no process-wide
//! "current language": the locale travels with the copy being rendered, so
//! concurrent renders of different locales never observe each other.
//!
//! Usage in a component:
//! ```ignore
//! let label = crate::t!(copy.lang, "program-step", number = 1);
//! ```
use std::collections::BTreeMap;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;

use crate::copy::Locale;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Localized label lookup for a given locale.
/// Examples:
///     t!(Locale::En, "hero-image-caption")
///     t!(lang, "program-step", number = 2)
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; matches the package name and the FTL filename.
/// Must match `domain` in `i18n.toml`, which `fl!` reads at compile time.
const DOMAIN: &str = "hermetic-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static LOADERS: Lazy<BTreeMap<Locale, FluentLanguageLoader>> = Lazy::new(|| {
    Locale::ALL
        .into_iter()
        .map(|locale| (locale, build_loader(locale)))
        .collect()
});

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let fallback = Locale::En.language_id();
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);

    let requested = locale.language_id();
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
        tracing::warn!(%locale, %err, "failed loading label bundle; continuing with fallback");
    }
    // Applies to loaded bundles only, so it must follow `select`.
    loader.set_use_isolating(false);
    loader
}

/// The label loader for `locale`.
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    &LOADERS[&locale]
}

/// Displayed ordinal for the program step at zero-based `index`.
pub fn step_label(locale: Locale, index: usize) -> String {
    let number = index + 1;
    crate::t!(locale, "program-step", number = number)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
