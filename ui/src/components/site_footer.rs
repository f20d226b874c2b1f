use dioxus::prelude::*;

use crate::copy::FooterCopy;

#[component]
pub fn SiteFooter(footer: FooterCopy) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container footer__inner",
                p { class: "footer__disclaimer", "{footer.disclaimer}" }
                div { class: "footer__contact",
                    span { class: "footer__address", "{footer.address}" }
                    span { class: "footer__email", "{footer.email}" }
                }
            }
        }
    }
}
