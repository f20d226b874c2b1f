use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::{HeroCopy, Locale};
use crate::site::{anchor, HERO_IMAGE_SRC};
use crate::t;

#[component]
pub fn HeroSection(lang: Locale, hero: HeroCopy) -> Element {
    let image_alt = t!(lang, "hero-image-alt");
    let caption = t!(lang, "hero-image-caption");

    rsx! {
        Section { id: anchor::HOME,
            div { class: "container hero",
                div { class: "hero__copy",
                    p { class: "hero__eyebrow", "{hero.eyebrow}" }
                    h1 { class: "hero__title", "{hero.title}" }
                    p { class: "hero__subtitle", "{hero.subtitle}" }

                    div { class: "hero__actions",
                        a {
                            class: "button button--primary",
                            href: anchor::href(anchor::PRODUCTS),
                            "{hero.primary_cta}"
                        }
                        a {
                            class: "button button--ghost",
                            href: anchor::href(anchor::SCIENCE),
                            "{hero.secondary_cta}"
                        }
                    }

                    div { class: "hero__badges",
                        for badge in hero.badges.iter() {
                            span { class: "hero__badge", "{badge}" }
                        }
                    }
                }

                figure { class: "hero__media",
                    img { class: "hero__image", src: HERO_IMAGE_SRC, alt: "{image_alt}" }
                    figcaption { class: "hero__caption", "{caption}" }
                }
            }
        }
    }
}
