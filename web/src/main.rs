use dioxus::prelude::*;

use ui::copy::{self, Locale};
use ui::views::LocalePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::English {})]
    #[route("/en")]
    English {},
    #[route("/bg")]
    Bulgarian {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Entry point shared by every locale route.
#[component]
fn LocaleEntry(locale: Locale) -> Element {
    tracing::info!(%locale, path = locale.path(), "serving locale page");
    let title = copy::source(locale).hero.title.clone();

    rsx! {
        document::Title { "{title}" }
        LocalePage { locale: locale }
    }
}

#[component]
fn English() -> Element {
    rsx! { LocaleEntry { locale: Locale::En } }
}

#[component]
fn Bulgarian() -> Element {
    rsx! { LocaleEntry { locale: Locale::Bg } }
}
