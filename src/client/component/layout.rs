use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "relative min-h-screen",
        div { class: "page-gradient fixed inset-0 -z-10" }
        Header {  }
        main {
            class: "max-w-7xl mx-auto",
            Outlet::<Route> {}
        }
    })
}
