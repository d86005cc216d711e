use dioxus::prelude::*;

/// Terminal style progress card shown while a request is in flight.
#[component]
pub fn TerminalLoader(status: String) -> Element {
    rsx!(
        div {
            class: "mockup-code w-full max-w-md bg-neutral text-neutral-content shadow-lg",
            pre {
                "data-prefix": "$",
                code { "snapcode submit" }
            }
            pre {
                "data-prefix": ">",
                class: "text-warning",
                code {
                    "{status}"
                    span { class: "loading loading-dots loading-xs ml-2 align-middle" }
                }
            }
        }
    )
}
