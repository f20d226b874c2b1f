//! Locale Copy Sources.
//!
//! Each supported locale ships one authored JSON document under `ui/copy/`,
//! embedded into the binary with `rust-embed`. Documents are parsed and
//! checked once, on first access, and are immutable afterwards.
//!
//! To add a locale:
//! 1. Add a variant to [`Locale`].
//! 2. Author `ui/copy/<tag>.json` with the same shape as `en.json`.
//! 3. Add the matching Fluent bundle under `ui/i18n/`.
//!
//! The renderer needs no changes.
use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;

use super::{ContentDefect, Locale, PageCopy};

#[derive(Embed)]
#[folder = "copy"]
struct CopyDocuments;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("no copy document `{file}` embedded for locale `{locale}`")]
    Missing { locale: Locale, file: String },
    #[error("copy document for locale `{locale}` does not match the page schema: {source}")]
    Malformed {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("copy document for locale `{locale}` has content defects:\n{}", DefectList(.defects))]
    Invalid {
        locale: Locale,
        defects: Vec<ContentDefect>,
    },
}

struct DefectList<'a>(&'a [ContentDefect]);

impl fmt::Display for DefectList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for defect in self.0 {
            writeln!(f, "  - {defect}")?;
        }
        Ok(())
    }
}

pub fn document_name(locale: Locale) -> String {
    format!("{}.json", locale.tag())
}

/// Parse and check a copy document for `locale`.
pub fn parse(locale: Locale, bytes: &[u8]) -> Result<PageCopy, CopyError> {
    let copy: PageCopy =
        serde_json::from_slice(bytes).map_err(|source| CopyError::Malformed { locale, source })?;

    let mut defects = Vec::new();
    if copy.lang != locale {
        defects.push(ContentDefect::LocaleMismatch {
            expected: locale,
            found: copy.lang,
        });
    }
    defects.extend(copy.defects());

    if defects.is_empty() {
        Ok(copy)
    } else {
        Err(CopyError::Invalid { locale, defects })
    }
}

/// Load the embedded copy document for `locale`.
pub fn load(locale: Locale) -> Result<PageCopy, CopyError> {
    let file = document_name(locale);
    let document = CopyDocuments::get(&file).ok_or(CopyError::Missing { locale, file })?;
    parse(locale, &document.data)
}

static SOURCES: Lazy<BTreeMap<Locale, PageCopy>> = Lazy::new(|| {
    Locale::ALL
        .into_iter()
        .map(|locale| match load(locale) {
            Ok(copy) => {
                tracing::debug!(%locale, "loaded page copy");
                (locale, copy)
            }
            // Nonconforming copy is a content bug; there is nothing to fall back to.
            Err(err) => panic!("{err}"),
        })
        .collect()
});

/// The immutable copy instance for `locale`.
///
/// # Panics
///
/// On first access if any embedded document fails [`load`].
pub fn source(locale: Locale) -> &'static PageCopy {
    &SOURCES[&locale]
}
