use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::{Locale, ProgramCopy};
use crate::i18n;

/// Program steps. The "Step N" ordinal comes from each step's position.
#[component]
pub fn ProgramSection(lang: Locale, program: ProgramCopy) -> Element {
    rsx! {
        Section {
            div { class: "container program",
                h2 { class: "section__title", "{program.title}" }
                div { class: "program__steps",
                    {program.steps.iter().enumerate().map(|(index, step)| {
                        let ordinal = i18n::step_label(lang, index);
                        rsx! {
                            div { key: "{index}", class: "card program__step",
                                p { class: "program__step-label", "{ordinal}" }
                                h3 { class: "card__title", "{step.title}" }
                                p { class: "card__text", "{step.text}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
