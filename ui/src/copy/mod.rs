//! Page Copy schema: the localized content contract every locale document
//! must satisfy. The renderer consumes these types and nothing else.
//!
//! Wire keys match the authored JSON documents under `ui/copy/`. Every field
//! is required and unknown keys are rejected, so a locale that drifts from
//! the shared shape fails to load instead of rendering a partial page.

mod locale;
pub use locale::Locale;

mod validate;
pub use validate::ContentDefect;

pub mod sources;
pub use sources::{load, source, CopyError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageCopy {
    pub lang: Locale,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub sections: SectionsCopy,
    pub footer: FooterCopy,
}

/// Anchor navigation labels, one per linked section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavCopy {
    pub home: String,
    pub science: String,
    pub results: String,
    pub products: String,
    pub faq: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct HeroCopy {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionsCopy {
    pub science: ScienceCopy,
    pub benefits: BenefitsCopy,
    pub results: ResultsCopy,
    pub program: ProgramCopy,
    pub products: ProductsCopy,
    pub testimonials: TestimonialsCopy,
    pub faq: FaqCopy,
    pub cta: CtaCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScienceCopy {
    pub title: String,
    pub bullets: Vec<String>,
}

/// A titled card; used by benefit items and program steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenefitsCopy {
    pub title: String,
    pub items: Vec<Card>,
}

/// Headline figure. `value` is a pre-formatted display string ("+9.8%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultsCopy {
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
}

/// Program steps carry no ordinal; it is derived from position when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramCopy {
    pub title: String,
    pub steps: Vec<Card>,
}

/// Static product placeholder. `price` is opaque display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductsCopy {
    pub title: String,
    pub subtitle: String,
    pub note: String,
    pub cta: String,
    pub items: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestimonialsCopy {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqCopy {
    pub title: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtaCopy {
    pub title: String,
    pub text: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterCopy {
    pub disclaimer: String,
    pub address: String,
    pub email: String,
}
