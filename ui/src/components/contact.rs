use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::CtaCopy;
use crate::site::{anchor, CONTACT_MAILTO};

/// Closing call to action. Hands off to the visitor's mail client.
#[component]
pub fn ContactSection(cta: CtaCopy) -> Element {
    rsx! {
        Section { id: anchor::CONTACT,
            div { class: "container",
                div { class: "contact",
                    h2 { class: "section__title", "{cta.title}" }
                    p { class: "contact__text", "{cta.text}" }
                    a { class: "button button--primary contact__button", href: CONTACT_MAILTO,
                        "{cta.button}"
                    }
                }
            }
        }
    }
}
