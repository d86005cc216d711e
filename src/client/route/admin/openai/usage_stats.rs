use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::{
    super::panel::{PanelError, PanelHint},
    SectionCard,
};
use crate::{
    client::{
        component::{Modal, TokenGauge},
        model::cache::Cache,
    },
    model::{
        format::{format_average_score, format_long_date_time, format_seconds, group_digits},
        openai::{
            token_gauge_capacity, ModelStatsDto, UsageStatsDto, MODAL_GAUGE_FLOOR,
            PANEL_GAUGE_FLOOR,
        },
    },
};

#[cfg(feature = "web")]
use crate::client::api::openai::get_usage_stats;

/// Usage overview, fetched as soon as the tab opens.
#[component]
pub fn UsageStats() -> Element {
    #[allow(unused_mut)]
    let mut stats = use_signal(|| Cache::<UsageStatsDto>::Loading);
    let mut show_details = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_usage_stats().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch OpenAI usage stats: {}", err);
            }
            stats.set(result.clone().into());
        }
    });

    rsx!(
        SectionCard {
            title: "OpenAI 사용량 통계",
            match stats() {
                Cache::NotFetched | Cache::Loading => rsx! { PanelHint { text: "통계를 불러오는 중..." } },
                Cache::Error(_) => rsx! { PanelError { text: "사용량 통계를 불러오는데 실패했습니다." } },
                Cache::Fetched(data) => rsx! {
                    OverallStats { stats: data.clone(), gauge_floor: PANEL_GAUGE_FLOOR }
                    div {
                        class: "flex justify-between items-center",
                        h4 { class: "font-semibold", "모델별 상세 통계" }
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| show_details.set(true),
                            "상세 보기"
                        }
                    }
                    div {
                        class: "grid gap-4 md:grid-cols-2",
                        for model in data.model_stats.iter() {
                            ModelStatsCard { key: "{model.model_name}", stats: model.clone() }
                        }
                    }
                    Modal {
                        show: show_details,
                        title: "OpenAI 사용량 상세 통계".to_string(),
                        prevent_close: false,
                        class: "max-w-4xl",
                        div {
                            class: "flex flex-col gap-6",
                            h4 { class: "font-semibold", "전체 통계" }
                            OverallStats { stats: data.clone(), gauge_floor: MODAL_GAUGE_FLOOR }
                            h4 { class: "font-semibold", "모델별 상세 통계" }
                            for model in data.model_stats.iter() {
                                ModelStatsCard { key: "{model.model_name}", stats: model.clone() }
                            }
                        }
                        div {
                            class: "modal-action",
                            button {
                                class: "btn",
                                onclick: move |_| show_details.set(false),
                                "닫기"
                            }
                        }
                    }
                },
            }
        }
    )
}

#[component]
fn OverallStats(stats: UsageStatsDto, gauge_floor: f64) -> Element {
    let overall = &stats.overall_stats;
    let capacity = token_gauge_capacity(overall.total_tokens_used, gauge_floor);

    rsx!(
        div {
            class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4 items-center",
            StatBlock { title: "전체 평가 수", value: group_digits(overall.total_evaluations) }
            div {
                class: "flex flex-col items-center gap-2",
                h5 { class: "text-sm opacity-70", "총 토큰 사용량" }
                TokenGauge { used_tokens: overall.total_tokens_used, capacity }
            }
            StatBlock { title: "사용된 모델 수", value: group_digits(overall.unique_models_used) }
            StatBlock {
                title: "평균 토큰/평가",
                value: group_digits(overall.average_tokens_per_evaluation()),
            }
        }
    )
}

#[component]
fn StatBlock(title: &'static str, value: String) -> Element {
    rsx!(
        div {
            class: "flex flex-col items-center gap-1 p-4 rounded-box bg-base-200",
            h5 { class: "text-sm opacity-70", "{title}" }
            span { class: "text-2xl font-bold", "{value}" }
        }
    )
}

#[component]
fn ModelStatsCard(stats: ModelStatsDto) -> Element {
    rsx!(
        div {
            class: "rounded-box border border-base-300 p-4 flex flex-col gap-3",
            div {
                class: "flex justify-between items-center",
                h5 { class: "font-semibold", "{stats.model_name}" }
                span { class: "text-sm opacity-70", "총 토큰 {group_digits(stats.total_tokens)}" }
            }
            dl {
                class: "grid grid-cols-2 gap-2 text-sm",
                StatPair { label: "사용 횟수", value: format!("{}회", group_digits(stats.usage_count)) }
                StatPair { label: "평균 점수", value: format_average_score(stats.avg_score) }
                StatPair { label: "평균 토큰", value: group_digits(stats.avg_tokens.round() as u64) }
                StatPair { label: "평균 처리 시간", value: format_seconds(stats.avg_processing_time) }
                StatPair { label: "첫 사용", value: format_long_date_time(&stats.first_used) }
                StatPair { label: "최근 사용", value: format_long_date_time(&stats.last_used) }
            }
        }
    )
}

#[component]
fn StatPair(label: &'static str, value: String) -> Element {
    rsx!(
        div {
            dt { class: "opacity-60", "{label}" }
            dd { class: "font-medium", "{value}" }
        }
    )
}
