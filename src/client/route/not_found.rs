use dioxus::prelude::*;

use crate::client::{component::ErrorPage, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "404 | {SITE_NAME}" }
        ErrorPage { status: 404, message: format!("/{} 페이지를 찾을 수 없습니다.", path) }
    }
}
