use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::panel::{PanelError, PanelHeader, PanelHint};
use crate::{
    client::model::cache::Cache,
    model::{admin::GradingQueueDto, format::format_date},
};

#[cfg(feature = "web")]
use crate::client::api::admin_submission::get_grading_queue;

#[component]
pub fn GradingQueueTab() -> Element {
    let mut queue = use_signal(|| Cache::<GradingQueueDto>::NotFetched);
    let mut should_fetch = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_fetch() {
            Some(get_grading_queue().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch grading queue: {}", err);
            }
            queue.set(result.clone().into());
            should_fetch.set(false);
        }
    });

    let state = queue();

    let loading = state.is_loading();

    rsx!(
        section {
            class: "flex flex-col gap-4",
            PanelHeader {
                title: "평가 대기열",
                button_label: "대기열 조회",
                loading,
                on_fetch: move |_| {
                    queue.set(Cache::Loading);
                    should_fetch.set(true);
                },
            }
            match state {
                Cache::NotFetched => rsx! { PanelHint { text: "대기열 조회 버튼을 눌러주세요." } },
                Cache::Loading => rsx! { PanelHint { text: "로딩 중..." } },
                Cache::Error(_) => rsx! { PanelError { text: "평가 대기열을 불러오는데 실패했습니다." } },
                Cache::Fetched(data) if data.queue.is_empty() => rsx! { PanelHint { text: "대기 중인 평가 항목이 없습니다." } },
                Cache::Fetched(data) => rsx! {
                    div {
                        class: "flex flex-col gap-2",
                        p { class: "text-sm opacity-70", "총 {data.total}개의 평가 항목이 대기 중입니다." }
                        for item in data.queue {
                            div {
                                key: "{item.submission_id}",
                                class: "flex flex-col sm:flex-row justify-between gap-2 p-4 rounded-box bg-base-200",
                                div {
                                    h3 { class: "font-semibold", {item.title.clone().unwrap_or_else(|| format!("#{}", item.submission_id))} }
                                    if let Some(team) = item.team_name.as_deref() {
                                        p { class: "text-sm opacity-70", "팀: {team}" }
                                    }
                                }
                                div {
                                    class: "flex flex-col sm:items-end text-sm",
                                    span { class: "badge badge-warning", "상태: {item.status}" }
                                    if let Some(queued_at) = item.queued_at.as_deref() {
                                        span { class: "opacity-60", "대기열 등록일: {format_date(queued_at)}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    )
}
