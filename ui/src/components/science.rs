use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::{BenefitsCopy, ScienceCopy};
use crate::site::anchor;

/// Science bullets alongside the benefit cards.
#[component]
pub fn ScienceSection(science: ScienceCopy, benefits: BenefitsCopy) -> Element {
    rsx! {
        Section { id: anchor::SCIENCE,
            div { class: "container science",
                div { class: "science__claims",
                    h2 { class: "section__title", "{science.title}" }
                    ul { class: "science__bullets",
                        for bullet in science.bullets.iter() {
                            li { class: "science__bullet",
                                span { class: "science__dot", aria_hidden: "true" }
                                span { class: "science__bullet-text", "{bullet}" }
                            }
                        }
                    }
                }

                div { class: "benefits",
                    h3 { class: "benefits__title", "{benefits.title}" }
                    div { class: "benefits__grid",
                        for item in benefits.items.iter() {
                            div { class: "card",
                                h3 { class: "card__title", "{item.title}" }
                                p { class: "card__text", "{item.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
