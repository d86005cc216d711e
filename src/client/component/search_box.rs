use dioxus::prelude::*;

/// Quiet period after the last keystroke before `on_search` fires.
#[cfg(feature = "web")]
const DEBOUNCE_MS: u32 = 300;

/// Text input that reports its value once typing pauses.
#[component]
pub fn SearchBox(
    on_search: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    #[props(default)] initial_value: String,
    class: Option<&'static str>,
) -> Element {
    let class: &str = class.unwrap_or_default();
    let mut query = use_signal(|| initial_value);

    // Each keystroke restarts the resource, dropping the pending sleep.
    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        let value = query();
        gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
        on_search.call(value);
    });

    #[cfg(not(feature = "web"))]
    use_effect(move || on_search.call(query()));

    rsx!(
        label {
            class: "input input-bordered flex items-center gap-2 w-full {class}",
            svg {
                class: "w-5 h-5 opacity-50",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
                }
            }
            input {
                r#type: "text",
                class: "grow",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
        }
    )
}
