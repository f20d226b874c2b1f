use std::fmt;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported page locales. Serialized as the `lang` tag of a copy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Bg,
}

impl Locale {
    /// Every supported locale, in locale switcher order.
    pub const ALL: [Locale; 2] = [Locale::Bg, Locale::En];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bg => "bg",
        }
    }

    /// Entry point path for this locale's page.
    pub fn path(self) -> &'static str {
        match self {
            Locale::En => "/en",
            Locale::Bg => "/bg",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Bg => "BG",
        }
    }

    /// Fluent bundle identifier backing renderer-owned labels.
    pub fn language_id(self) -> LanguageIdentifier {
        match self {
            Locale::En => unic_langid::langid!("en-US"),
            Locale::Bg => unic_langid::langid!("bg-BG"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
