use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

#[component]
pub fn Business() -> Element {
    rsx! {
        Title { "Business | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center text-center gap-4",
            h1 { class: "text-4xl font-bold", "Business Solutions" }
            p {
                class: "text-lg opacity-70",
                "Enterprise-grade coding solutions for your business"
            }
        }
    }
}
