use dioxus::prelude::*;

/// Vertical page band. `id` doubles as the anchor navigation target.
#[component]
pub fn Section(id: Option<&'static str>, children: Element) -> Element {
    rsx! {
        section { id: id, class: "section", {children} }
    }
}
