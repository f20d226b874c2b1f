use dioxus::prelude::*;

use crate::copy::{Locale, NavCopy};
use crate::site::{anchor, LOGO_SRC};
use crate::t;

/// Sticky page header: logo, in-page anchor navigation and the locale switcher.
///
/// Anchor labels come from the page copy; the anchor targets and locale paths
/// are fixed by the renderer. Switching locale is a plain link to the other
/// entry point, no redirect or negotiation happens here.
#[component]
pub fn SiteHeader(lang: Locale, nav: NavCopy) -> Element {
    let logo_alt = t!(lang, "brand-logo-alt");
    let links = [
        (anchor::HOME, nav.home),
        (anchor::SCIENCE, nav.science),
        (anchor::RESULTS, nav.results),
        (anchor::PRODUCTS, nav.products),
        (anchor::FAQ, nav.faq),
        (anchor::CONTACT, nav.contact),
    ];

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    img {
                        class: "navbar__logo",
                        src: LOGO_SRC,
                        alt: "{logo_alt}",
                        width: "200",
                        height: "48",
                    }
                }

                nav { class: "navbar__links",
                    for (id, label) in links {
                        a { class: "navbar__link", href: anchor::href(id), "{label}" }
                    }
                }

                LocaleSwitch { active: lang }
            }
        }
    }
}

fn switch_class(is_active: bool) -> &'static str {
    if is_active {
        "locale-switch__link locale-switch__link--active"
    } else {
        "locale-switch__link"
    }
}

#[component]
fn LocaleSwitch(active: Locale) -> Element {
    let label = t!(active, "locale-switch-label");

    rsx! {
        div { class: "locale-switch", role: "group", aria_label: "{label}",
            for locale in Locale::ALL {
                a {
                    class: switch_class(locale == active),
                    href: locale.path(),
                    "{locale.switch_label()}"
                }
            }
        }
    }
}
