use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::panel::{PanelError, PanelHeader, PanelHint};
use crate::{
    client::model::cache::Cache,
    model::{
        admin::{EvaluationStatisticsDto, RankingDto},
        format::{format_average_score, format_points, group_digits},
    },
};

#[cfg(feature = "web")]
use crate::client::api::evaluation::{get_rankings, get_statistics};

#[component]
pub fn EvaluationTab() -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-10",
            StatisticsPanel {}
            RankingsPanel {}
        }
    )
}

#[component]
fn StatisticsPanel() -> Element {
    let mut statistics = use_signal(|| Cache::<EvaluationStatisticsDto>::NotFetched);
    let mut should_fetch = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_fetch() {
            Some(get_statistics().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch evaluation statistics: {}", err);
            }
            statistics.set(result.clone().into());
            should_fetch.set(false);
        }
    });

    let state = statistics();

    let loading = state.is_loading();

    rsx!(
        section {
            class: "flex flex-col gap-4",
            PanelHeader {
                title: "평가 통계",
                button_label: "통계 조회",
                loading,
                on_fetch: move |_| {
                    statistics.set(Cache::Loading);
                    should_fetch.set(true);
                },
            }
            match state {
                Cache::NotFetched => rsx! { PanelHint { text: "통계 조회 버튼을 눌러주세요." } },
                Cache::Loading => rsx! { PanelHint { text: "로딩 중..." } },
                Cache::Error(_) => rsx! { PanelError { text: "평가 통계를 불러오는데 실패했습니다." } },
                Cache::Fetched(stats) => rsx! {
                    div {
                        class: "stats stats-vertical lg:stats-horizontal shadow",
                        Stat { title: "전체 제출", value: group_digits(stats.total_submissions) }
                        Stat { title: "평가 완료", value: group_digits(stats.graded_submissions) }
                        Stat { title: "평균 점수", value: format_average_score(stats.average_score) }
                        Stat { title: "최고 점수", value: format_points(stats.highest_score) }
                        Stat { title: "최저 점수", value: format_points(stats.lowest_score) }
                    }
                },
            }
        }
    )
}

#[component]
fn Stat(title: &'static str, value: String) -> Element {
    rsx!(
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
        }
    )
}

#[component]
fn RankingsPanel() -> Element {
    let mut rankings = use_signal(|| Cache::<Vec<RankingDto>>::NotFetched);
    let mut should_fetch = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_fetch() {
            Some(get_rankings().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch rankings: {}", err);
            }
            rankings.set(result.clone().into());
            should_fetch.set(false);
        }
    });

    let state = rankings();

    let loading = state.is_loading();

    rsx!(
        section {
            class: "flex flex-col gap-4",
            PanelHeader {
                title: "순위",
                button_label: "순위 조회",
                loading,
                on_fetch: move |_| {
                    rankings.set(Cache::Loading);
                    should_fetch.set(true);
                },
            }
            match state {
                Cache::NotFetched => rsx! { PanelHint { text: "순위 조회 버튼을 눌러주세요." } },
                Cache::Loading => rsx! { PanelHint { text: "로딩 중..." } },
                Cache::Error(_) => rsx! { PanelError { text: "순위를 불러오는데 실패했습니다." } },
                Cache::Fetched(list) if list.is_empty() => rsx! { PanelHint { text: "평가된 팀이 없습니다." } },
                Cache::Fetched(list) => rsx! {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra",
                            thead {
                                tr {
                                    th { "순위" }
                                    th { "팀명" }
                                    th { class: "text-right", "점수" }
                                }
                            }
                            tbody {
                                for ranking in list {
                                    tr {
                                        key: "{ranking.rank}-{ranking.team_name}",
                                        td { "{ranking.rank}" }
                                        td { "{ranking.team_name}" }
                                        td { class: "text-right", "{format_points(ranking.score)}" }
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
