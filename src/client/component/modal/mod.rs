use dioxus::prelude::*;

pub mod confirmation_modal;

pub use confirmation_modal::ConfirmationModal;

#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    // Focus modal when it opens
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    show.set(false);
                }
            },
            div {
                class: "modal-box {class}",
                div {
                    class: "flex items-start justify-between gap-4 mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-ghost btn-circle",
                        disabled: prevent_close,
                        onclick: move |_| show.set(false),
                        "✕"
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        show.set(false);
                    }
                },
            }
        }
    )
}
