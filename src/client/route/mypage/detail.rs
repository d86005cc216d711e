use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{EvaluateButton, LoadingPage, Page, StatusBadge},
        constant::SITE_NAME,
        model::{cache::Cache, error::ApiError},
        router::Route,
    },
    model::{
        format::{format_long_date_time, format_points, markdown_to_html},
        submission::{criterion_label, CriteriaResultDto, SubmissionDto, SubmissionStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::submission::get_submission_detail;

pub const DETAIL_FETCH_FAILED: &str = "제출 상세 정보를 불러오는데 실패했습니다.";

#[component]
pub fn SubmissionDetail(submission_id: i64) -> Element {
    #[allow(unused_mut)]
    let mut detail = use_signal(|| Cache::<SubmissionDto>::Loading);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|submission_id| async move {
        get_submission_detail(submission_id).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch submission {}: {}", submission_id, err);
            }
            detail.set(result.clone().into());
        }
    });

    rsx! {
        Title { "제출 상세 | {SITE_NAME}" }
        match detail() {
            Cache::NotFetched | Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { DetailError { err } },
            Cache::Fetched(submission) => rsx! { DetailView { submission } },
        }
    }
}

#[component]
fn DetailError(err: ApiError) -> Element {
    let message = if err.is_not_found() {
        "제출 내역을 찾을 수 없습니다.".to_string()
    } else {
        DETAIL_FETCH_FAILED.to_string()
    };

    rsx!(
        Page {
            class: "max-w-3xl mx-auto flex flex-col gap-4",
            div { role: "alert", class: "alert alert-error", "{message}" }
            Link { to: Route::MyPage {}, class: "btn btn-outline self-start", "돌아가기" }
        }
    )
}

#[component]
fn DetailView(submission: SubmissionDto) -> Element {
    let status = SubmissionStatus::parse(&submission.status);
    let completed = status == SubmissionStatus::Completed;
    let score = submission.display_score();
    let submitted_at = format_long_date_time(&submission.submitted_at);
    let evaluation = submission.evaluation_result.clone().unwrap_or_default();

    rsx!(
        Page {
            class: "max-w-3xl mx-auto flex flex-col gap-6",
            div {
                class: "flex justify-between items-center",
                h1 { class: "text-3xl font-bold", "제출 상세 정보" }
                Link { to: Route::MyPage {}, class: "btn btn-outline rounded-full", "돌아가기" }
            }
            div {
                class: "card bg-base-100 shadow",
                div {
                    class: "card-body gap-6",
                    DetailField {
                        label: "서비스명",
                        div {
                            class: "flex items-center gap-3",
                            p { class: "text-lg", "{submission.title}" }
                            StatusBadge { status }
                        }
                    }
                    if let Some(team) = submission.team_name.as_deref() {
                        DetailField { label: "팀명", p { "{team}" } }
                    }
                    DetailField {
                        label: "서비스 설명",
                        p { class: "whitespace-pre-wrap", "{submission.description}" }
                    }
                    DetailField {
                        label: "평가 항목",
                        div {
                            class: "flex flex-wrap gap-2",
                            for criterion in submission.evaluation_criteria.iter() {
                                EvaluateButton {
                                    key: "{criterion}",
                                    label: criterion_label(criterion).to_string(),
                                    checked: true,
                                    on_toggle: |_| {},
                                }
                            }
                        }
                    }
                    DetailField {
                        label: "레포지토리",
                        div {
                            class: "flex flex-col gap-2",
                            for (index, repo) in submission.repositories.iter().enumerate() {
                                a {
                                    key: "{index}",
                                    href: "{repo.repo_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "link link-primary break-all",
                                    "{repo.repo_url}"
                                }
                            }
                        }
                    }
                    if completed {
                        if let Some(score) = score {
                            DetailField {
                                label: "평가 점수",
                                p { class: "text-3xl font-bold text-primary", "{format_points(score)}" }
                            }
                        }
                        if let Some(feedback) = submission.feedback.as_deref().filter(|f| !f.is_empty()) {
                            DetailField {
                                label: "피드백",
                                Markdown { source: feedback.to_string() }
                            }
                        }
                    }
                    if !evaluation.code_summary.is_empty() {
                        DetailField {
                            label: "코드 요약",
                            Markdown { source: evaluation.code_summary.clone() }
                        }
                    }
                    if !evaluation.criteria_results.is_empty() {
                        DetailField {
                            label: "항목별 평가 결과",
                            div {
                                class: "flex flex-col gap-4",
                                for result in evaluation.criteria_results.iter() {
                                    CriteriaResultCard { key: "{result.name}", result: result.clone() }
                                }
                            }
                        }
                    }
                    DetailField { label: "제출일", p { "{submitted_at}" } }
                }
            }
        }
    )
}

#[component]
fn DetailField(label: &'static str, children: Element) -> Element {
    rsx!(
        div {
            h3 { class: "text-sm font-semibold opacity-60 mb-1", "{label}" }
            {children}
        }
    )
}

#[component]
fn Markdown(source: String) -> Element {
    let html = markdown_to_html(&source);
    rsx!(div { class: "prose max-w-none", dangerous_inner_html: "{html}" })
}

#[component]
fn CriteriaResultCard(result: CriteriaResultDto) -> Element {
    rsx!(
        div {
            class: "rounded-box bg-base-200 p-4 flex flex-col gap-2",
            div {
                class: "flex justify-between items-center",
                h4 { class: "font-semibold", "{criterion_label(&result.name)}" }
                span { class: "badge badge-primary", "{format_points(result.score)}" }
            }
            if let Some(feedback) = result.feedback.as_deref() {
                Markdown { source: feedback.to_string() }
            }
            PointList { title: "강점", items: result.strengths.clone() }
            PointList { title: "약점", items: result.weaknesses.clone() }
            PointList { title: "개선 사항", items: result.improvements.clone() }
        }
    )
}

#[component]
fn PointList(title: &'static str, items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }

    rsx!(
        div {
            h5 { class: "text-sm font-semibold", "{title}" }
            ul {
                class: "list-disc list-inside text-sm opacity-80",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}", "{item}" }
                }
            }
        }
    )
}
