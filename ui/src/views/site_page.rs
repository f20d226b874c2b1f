use dioxus::prelude::*;

use crate::components::{
    ContactSection, FaqSection, HeroSection, ProductsSection, ProgramSection, ResultsSection,
    ScienceSection, SiteFooter, SiteHeader, TestimonialsSection,
};
use crate::copy::{PageCopy, SectionsCopy};

/// The landing page for one copy document.
///
/// A pure mapping from copy to markup: no hooks, no shared state, no I/O.
/// Section order is fixed; locales differ only in the copy they pass in.
#[component]
pub fn SitePage(copy: PageCopy) -> Element {
    tracing::debug!(lang = %copy.lang, "rendering site page");

    let PageCopy {
        lang,
        nav,
        hero,
        sections,
        footer,
    } = copy;
    let SectionsCopy {
        science,
        benefits,
        results,
        program,
        products,
        testimonials,
        faq,
        cta,
    } = sections;
    // Product cards reuse the hero call to action.
    let buy_label = hero.primary_cta.clone();

    rsx! {
        div { class: "site", lang: lang.tag(),
            SiteHeader { lang: lang, nav: nav }

            main {
                HeroSection { lang: lang, hero: hero }
                ScienceSection { science: science, benefits: benefits }
                ResultsSection { lang: lang, results: results }
                ProgramSection { lang: lang, program: program }
                ProductsSection { products: products, buy_label: buy_label }
                TestimonialsSection { testimonials: testimonials }
                FaqSection { faq: faq }
                ContactSection { cta: cta }
            }

            SiteFooter { footer: footer }
        }
    }
}
