//! Shared UI crate for the Pharma Hermetic site: the page copy schema, the
//! per-locale copy sources and the page renderer.

pub mod copy;
pub mod i18n;
pub mod site;
pub mod views;

pub mod components {
    mod section;
    pub use section::Section;

    mod site_header;
    pub use site_header::SiteHeader;

    mod hero;
    pub use hero::HeroSection;

    mod science;
    pub use science::ScienceSection;

    mod results;
    pub use results::ResultsSection;

    mod program;
    pub use program::ProgramSection;

    mod products;
    pub use products::ProductsSection;

    mod testimonials;
    pub use testimonials::TestimonialsSection;

    mod faq;
    pub use faq::FaqSection;

    mod contact;
    pub use contact::ContactSection;

    mod site_footer;
    pub use site_footer::SiteFooter;
}
