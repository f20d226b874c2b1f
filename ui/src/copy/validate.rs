//! Content-authoring checks that serde's structural validation cannot express.

use thiserror::Error;

use super::{Locale, PageCopy};
use crate::site::PRODUCT_IMAGES;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentDefect {
    #[error("`{path}` is empty")]
    EmptyText { path: String },
    #[error("`{path}` needs at least one entry")]
    EmptySequence { path: &'static str },
    #[error("{count} products listed but only {images} product images are available")]
    TooManyProducts { count: usize, images: usize },
    #[error("document declares lang `{found}` but was loaded for `{expected}`")]
    LocaleMismatch { expected: Locale, found: Locale },
}

/// Accumulates defects while walking a copy document.
#[derive(Default)]
struct Checker {
    defects: Vec<ContentDefect>,
}

impl Checker {
    fn text(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.defects.push(ContentDefect::EmptyText {
                path: path.to_string(),
            });
        }
    }

    fn texts<'a>(&mut self, path: &str, values: impl IntoIterator<Item = &'a str>) {
        for (index, value) in values.into_iter().enumerate() {
            self.text(&format!("{path}[{index}]"), value);
        }
    }
}

impl PageCopy {
    /// Every authoring defect in this document, in document order.
    ///
    /// An empty result means the copy can be rendered without gaps: all
    /// display strings are present, science has bullets, and every product
    /// pairs with a renderer-owned image.
    pub fn defects(&self) -> Vec<ContentDefect> {
        let mut check = Checker::default();

        let nav = &self.nav;
        check.text("nav.home", &nav.home);
        check.text("nav.science", &nav.science);
        check.text("nav.results", &nav.results);
        check.text("nav.products", &nav.products);
        check.text("nav.faq", &nav.faq);
        check.text("nav.contact", &nav.contact);

        let hero = &self.hero;
        check.text("hero.eyebrow", &hero.eyebrow);
        check.text("hero.title", &hero.title);
        check.text("hero.subtitle", &hero.subtitle);
        check.text("hero.primaryCta", &hero.primary_cta);
        check.text("hero.secondaryCta", &hero.secondary_cta);
        check.texts("hero.badges", hero.badges.iter().map(String::as_str));

        let sections = &self.sections;
        check.text("sections.science.title", &sections.science.title);
        if sections.science.bullets.is_empty() {
            check.defects.push(ContentDefect::EmptySequence {
                path: "sections.science.bullets",
            });
        }
        check.texts(
            "sections.science.bullets",
            sections.science.bullets.iter().map(String::as_str),
        );

        check.text("sections.benefits.title", &sections.benefits.title);
        for (index, item) in sections.benefits.items.iter().enumerate() {
            check.text(&format!("sections.benefits.items[{index}].title"), &item.title);
            check.text(&format!("sections.benefits.items[{index}].text"), &item.text);
        }

        check.text("sections.results.title", &sections.results.title);
        check.text("sections.results.subtitle", &sections.results.subtitle);
        for (index, stat) in sections.results.stats.iter().enumerate() {
            check.text(&format!("sections.results.stats[{index}].value"), &stat.value);
            check.text(&format!("sections.results.stats[{index}].label"), &stat.label);
        }

        check.text("sections.program.title", &sections.program.title);
        for (index, step) in sections.program.steps.iter().enumerate() {
            check.text(&format!("sections.program.steps[{index}].title"), &step.title);
            check.text(&format!("sections.program.steps[{index}].text"), &step.text);
        }

        let products = &sections.products;
        check.text("sections.products.title", &products.title);
        check.text("sections.products.subtitle", &products.subtitle);
        check.text("sections.products.note", &products.note);
        check.text("sections.products.cta", &products.cta);
        for (index, product) in products.items.iter().enumerate() {
            let base = format!("sections.products.items[{index}]");
            check.text(&format!("{base}.name"), &product.name);
            check.text(&format!("{base}.description"), &product.description);
            check.text(&format!("{base}.price"), &product.price);
        }
        if products.items.len() > PRODUCT_IMAGES.len() {
            check.defects.push(ContentDefect::TooManyProducts {
                count: products.items.len(),
                images: PRODUCT_IMAGES.len(),
            });
        }

        check.text("sections.testimonials.title", &sections.testimonials.title);
        for (index, item) in sections.testimonials.items.iter().enumerate() {
            check.text(&format!("sections.testimonials.items[{index}].name"), &item.name);
            check.text(&format!("sections.testimonials.items[{index}].text"), &item.text);
        }

        check.text("sections.faq.title", &sections.faq.title);
        for (index, item) in sections.faq.items.iter().enumerate() {
            check.text(&format!("sections.faq.items[{index}].question"), &item.question);
            check.text(&format!("sections.faq.items[{index}].answer"), &item.answer);
        }

        check.text("sections.cta.title", &sections.cta.title);
        check.text("sections.cta.text", &sections.cta.text);
        check.text("sections.cta.button", &sections.cta.button);

        check.text("footer.disclaimer", &self.footer.disclaimer);
        check.text("footer.address", &self.footer.address);
        check.text("footer.email", &self.footer.email);

        check.defects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::{sources, Product};

    fn english() -> PageCopy {
        sources::load(Locale::En).unwrap()
    }

    #[test]
    fn authored_copy_has_no_defects() {
        assert!(english().defects().is_empty());
    }

    #[test]
    fn blank_nav_label_is_reported_with_its_path() {
        let mut copy = english();
        copy.nav.faq = "   ".into();
        assert_eq!(
            copy.defects(),
            vec![ContentDefect::EmptyText {
                path: "nav.faq".into()
            }]
        );
    }

    #[test]
    fn empty_badges_are_allowed_but_empty_bullets_are_not() {
        let mut copy = english();
        copy.hero.badges.clear();
        assert!(copy.defects().is_empty());

        copy.sections.science.bullets.clear();
        assert_eq!(
            copy.defects(),
            vec![ContentDefect::EmptySequence {
                path: "sections.science.bullets"
            }]
        );
    }

    #[test]
    fn products_beyond_the_image_set_are_a_defect() {
        let mut copy = english();
        while copy.sections.products.items.len() <= PRODUCT_IMAGES.len() {
            copy.sections.products.items.push(Product {
                name: "Extra".into(),
                description: "Unpaired".into(),
                price: "1 €".into(),
            });
        }
        assert!(copy.defects().contains(&ContentDefect::TooManyProducts {
            count: PRODUCT_IMAGES.len() + 1,
            images: PRODUCT_IMAGES.len(),
        }));
    }

    #[test]
    fn nested_item_paths_are_indexed() {
        let mut copy = english();
        copy.sections.faq.items[1].answer.clear();
        assert_eq!(
            copy.defects(),
            vec![ContentDefect::EmptyText {
                path: "sections.faq.items[1].answer".into()
            }]
        );
    }
}
