//! Renderer-owned references. Asset paths are resolved by whatever serves
//! the static files; this crate only emits them.

pub const BRAND_NAME: &str = "Pharma Hermetic";

pub const LOGO_SRC: &str = "/assets/logo.svg";
pub const HERO_IMAGE_SRC: &str = "/assets/hero.bmp";
pub const BEFORE_IMAGE_SRC: &str = "/assets/before-elena.avif";
pub const AFTER_IMAGE_SRC: &str = "/assets/after-elena.avif";

/// Product images, paired with `sections.products.items` by position.
pub const PRODUCT_IMAGES: [&str; 3] = [
    "/assets/product-nutra.avif",
    "/assets/product-oil.avif",
    "/assets/product-shampoo.avif",
];

/// Contact call-to-action target.
pub const CONTACT_MAILTO: &str = "mailto:hello@pharmahermetic.bg";

/// Section anchor ids; navigation links point at these.
pub mod anchor {
    pub const HOME: &str = "home";
    pub const SCIENCE: &str = "science";
    pub const RESULTS: &str = "results";
    pub const PRODUCTS: &str = "products";
    pub const FAQ: &str = "faq";
    pub const CONTACT: &str = "contact";

    pub fn href(id: &str) -> String {
        format!("#{id}")
    }
}
