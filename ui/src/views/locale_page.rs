use dioxus::prelude::*;

use crate::copy::{self, Locale};
use crate::views::SitePage;

/// Locale entry point: hands the locale's copy to [`SitePage`] unchanged.
#[component]
pub fn LocalePage(locale: Locale) -> Element {
    let copy = copy::source(locale).clone();

    rsx! {
        SitePage { copy: copy }
    }
}
