use dioxus::prelude::*;

/// Section heading with the button that fetches its contents.
#[component]
pub fn PanelHeader(
    title: &'static str,
    button_label: &'static str,
    loading: bool,
    on_fetch: EventHandler<()>,
) -> Element {
    rsx!(
        div {
            class: "flex justify-between items-center gap-4",
            h2 { class: "text-2xl font-semibold", "{title}" }
            button {
                class: "btn btn-primary btn-sm",
                disabled: loading,
                onclick: move |_| on_fetch.call(()),
                if loading {
                    span { class: "loading loading-spinner loading-xs" }
                }
                "{button_label}"
            }
        }
    )
}

#[component]
pub fn PanelHint(text: String) -> Element {
    rsx!(p { class: "py-10 text-center opacity-60", "{text}" })
}

#[component]
pub fn PanelError(text: String) -> Element {
    rsx!(div { role: "alert", class: "alert alert-error", "{text}" })
}

/// Outcome line of an admin action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

#[component]
pub fn NoticeLine(notice: Option<Notice>) -> Element {
    match notice {
        Some(Notice::Success(text)) => rsx!(div { role: "status", class: "alert alert-success", "{text}" }),
        Some(Notice::Failure(text)) => rsx!(PanelError { text }),
        None => rsx!(),
    }
}
