use dioxus::prelude::*;

use crate::model::submission::SubmissionStatus;

#[component]
pub fn StatusBadge(status: SubmissionStatus, #[props(default)] admin: bool) -> Element {
    let label = if admin { status.admin_label() } else { status.label() };

    rsx!(
        span {
            class: "badge badge-sm whitespace-nowrap {status.badge_class()}",
            "{label}"
        }
    )
}
