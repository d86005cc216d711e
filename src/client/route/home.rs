use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center text-center gap-6",
            h2 {
                class: "text-lg sm:text-2xl opacity-80 animate-fade-up",
                "내 코드를 평가받는 가장 빠르고 정확한 방법"
            }
            h1 {
                class: "text-6xl sm:text-8xl font-extrabold tracking-tight animate-fade-up [animation-delay:0.3s]",
                "Snapcode"
            }
            Link {
                to: Route::Personal {},
                class: "btn btn-primary btn-lg rounded-full animate-fade-up [animation-delay:0.6s]",
                "Snap my code"
            }
        }
    }
}
