use dioxus::prelude::*;

#[component]
pub fn GuidingBox(children: Element) -> Element {
    rsx!(
        div {
            role: "note",
            class: "alert bg-base-200 border-base-300 text-sm leading-relaxed",
            div { {children} }
        }
    )
}
