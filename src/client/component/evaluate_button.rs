use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCheck, FaPlus},
    Icon,
};

/// Pill toggle for one evaluation criterion.
#[component]
pub fn EvaluateButton(label: String, checked: bool, on_toggle: EventHandler<()>) -> Element {
    let state = if checked {
        "btn-primary"
    } else {
        "btn-outline"
    };

    rsx!(
        button {
            r#type: "button",
            class: "btn btn-sm rounded-full gap-2 h-auto min-h-10 py-2 {state}",
            aria_pressed: "{checked}",
            onclick: move |_| on_toggle.call(()),
            if checked {
                Icon { width: 12, height: 12, icon: FaCheck }
            } else {
                Icon { width: 12, height: 12, icon: FaPlus }
            }
            span { class: "text-left", "{label}" }
        }
    )
}
