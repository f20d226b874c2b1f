use dioxus::prelude::*;

use crate::components::Section;
use crate::copy::TestimonialsCopy;

#[component]
pub fn TestimonialsSection(testimonials: TestimonialsCopy) -> Element {
    rsx! {
        Section {
            div { class: "container testimonials",
                h2 { class: "section__title", "{testimonials.title}" }
                div { class: "testimonials__grid",
                    for item in testimonials.items.iter() {
                        blockquote { class: "card testimonial",
                            p { class: "testimonial__text", "“{item.text}”" }
                            p { class: "testimonial__name", "{item.name}" }
                        }
                    }
                }
            }
        }
    }
}
