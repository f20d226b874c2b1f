use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::FaqCopy;
use crate::site::anchor;

#[component]
pub fn FaqSection(faq: FaqCopy) -> Element {
    rsx! {
        Section { id: anchor::FAQ,
            div { class: "container faq",
                h2 { class: "section__title", "{faq.title}" }
                div { class: "faq__grid",
                    for item in faq.items.iter() {
                        div { class: "card faq__item",
                            h3 { class: "faq__question", "{item.question}" }
                            p { class: "faq__answer", "{item.answer}" }
                        }
                    }
                }
            }
        }
    }
}
