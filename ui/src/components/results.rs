use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::{Locale, ResultsCopy};
use crate::site::{anchor, AFTER_IMAGE_SRC, BEFORE_IMAGE_SRC};
use crate::t;

#[component]
pub fn ResultsSection(lang: Locale, results: ResultsCopy) -> Element {
    let before_alt = t!(lang, "results-before-alt");
    let after_alt = t!(lang, "results-after-alt");

    rsx! {
        Section { id: anchor::RESULTS,
            div { class: "container",
                div { class: "results",
                    h2 { class: "section__title", "{results.title}" }
                    p { class: "results__subtitle", "{results.subtitle}" }

                    div { class: "results__stats",
                        for stat in results.stats.iter() {
                            div { class: "stat",
                                p { class: "stat__value", "{stat.value}" }
                                p { class: "stat__label", "{stat.label}" }
                            }
                        }
                    }

                    div { class: "results__comparison",
                        div { class: "results__photo",
                            img {
                                class: "results__image",
                                src: BEFORE_IMAGE_SRC,
                                alt: "{before_alt}",
                                width: "600",
                                height: "420",
                            }
                        }
                        div { class: "results__photo",
                            img {
                                class: "results__image",
                                src: AFTER_IMAGE_SRC,
                                alt: "{after_alt}",
                                width: "600",
                                height: "420",
                            }
                        }
                    }
                }
            }
        }
    }
}
