use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-28 px-4 pb-12 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col gap-4 items-center justify-center text-center",
            p {
                class: "text-5xl font-bold opacity-60",
                "{status}"
            }
            p {
                class: "text-lg",
                "{message}"
            }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "홈으로 돌아가기"
            }
        }
    )
}
