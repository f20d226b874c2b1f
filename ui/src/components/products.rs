use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::ProductsCopy;
use crate::site::{anchor, PRODUCT_IMAGES};

/// Product grid. Items pair with [`PRODUCT_IMAGES`] by position.
///
/// Loaded copy never lists more products than images. Copy built by hand
/// can; the surplus cards render without an image.
#[component]
pub fn ProductsSection(products: ProductsCopy, buy_label: String) -> Element {
    rsx! {
        Section { id: anchor::PRODUCTS,
            div { class: "container products",
                div { class: "products__header",
                    div {
                        h2 { class: "section__title", "{products.title}" }
                        p { class: "products__subtitle", "{products.subtitle}" }
                    }
                    a { class: "products__cta", href: anchor::href(anchor::CONTACT), "{products.cta}" }
                }

                div { class: "products__grid",
                    {products.items.iter().enumerate().map(|(index, product)| {
                        let image = PRODUCT_IMAGES.get(index).copied();
                        if image.is_none() {
                            tracing::warn!(index, name = %product.name, "no product image for item");
                        }
                        rsx! {
                            div { key: "{index}", class: "product-card",
                                if let Some(src) = image {
                                    div { class: "product-card__media",
                                        img { class: "product-card__image", src: src, alt: "{product.name}" }
                                    }
                                }
                                h3 { class: "product-card__name", "{product.name}" }
                                p { class: "product-card__description", "{product.description}" }
                                div { class: "product-card__footer",
                                    span { class: "product-card__price", "{product.price}" }
                                    button { class: "button button--primary button--small", r#type: "button",
                                        "{buy_label}"
                                    }
                                }
                            }
                        }
                    })}
                }

                p { class: "products__note", "{products.note}" }
            }
        }
    }
}
