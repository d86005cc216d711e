use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Page, StatusBadge},
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::{
        format::format_long_date_time,
        submission::{SubmissionListItemDto, SubmissionStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::submission::get_my_submissions;

mod detail;

pub use detail::SubmissionDetail;

pub const FETCH_FAILED: &str = "제출 내역을 불러오는데 실패했습니다.";

#[component]
pub fn MyPage() -> Element {
    let mut submissions = use_signal(|| Cache::<Vec<SubmissionListItemDto>>::NotFetched);
    let mut should_fetch = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_fetch() {
            Some(get_my_submissions().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch submissions: {}", err);
            }
            submissions.set(result.clone().into());
            should_fetch.set(false);
        }
    });

    let state = submissions();

    let loading = state.is_loading();

    rsx! {
        Title { "마이페이지 | {SITE_NAME}" }
        Page {
            class: "max-w-5xl mx-auto flex flex-col gap-8",
            div {
                class: "flex flex-col sm:flex-row justify-between sm:items-center gap-4",
                h1 { class: "text-4xl font-bold", "마이페이지" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "btn btn-primary rounded-full",
                        disabled: loading,
                        onclick: move |_| {
                            submissions.set(Cache::Loading);
                            should_fetch.set(true);
                        },
                        "제출 내역 조회"
                    }
                    Link { to: Route::Personal {}, class: "btn btn-outline rounded-full", "새로운 제출하기" }
                }
            }
            section {
                class: "flex flex-col gap-4",
                h2 { class: "text-2xl font-semibold", "제출 내역" }
                match state {
                    Cache::NotFetched => rsx! {
                        p { class: "py-12 text-center opacity-60", "제출 내역 조회 버튼을 눌러주세요." }
                    },
                    Cache::Loading => rsx! {
                        div {
                            class: "py-12 flex justify-center",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                    Cache::Error(_) => rsx! {
                        div { role: "alert", class: "alert alert-error", "{FETCH_FAILED}" }
                    },
                    Cache::Fetched(list) if list.is_empty() => rsx! { NoSubmissions {} },
                    Cache::Fetched(list) => rsx! {
                        div {
                            class: "grid gap-4 md:grid-cols-2",
                            for submission in list {
                                SubmissionCard { key: "{submission.submission_id}", submission }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn SubmissionCard(submission: SubmissionListItemDto) -> Element {
    let status = SubmissionStatus::parse(&submission.status);
    let submitted_at = format_long_date_time(&submission.submitted_at);

    rsx!(
        Link {
            to: Route::SubmissionDetail { submission_id: submission.submission_id },
            class: "card bg-base-100 shadow hover:shadow-lg transition-shadow",
            div {
                class: "card-body gap-3",
                div {
                    class: "flex justify-between items-start gap-2",
                    div {
                        h3 { class: "card-title", "{submission.title}" }
                        if let Some(team) = submission.team_name.as_deref() {
                            p { class: "text-sm opacity-60", "팀: {team}" }
                        }
                    }
                    StatusBadge { status }
                }
                p { class: "line-clamp-3 opacity-80", "{submission.description}" }
                if !submission.repositories.is_empty() {
                    div {
                        h4 { class: "text-sm font-semibold mb-1", "저장소:" }
                        ul {
                            class: "flex flex-col gap-1 text-sm",
                            for (index, repo) in submission.repositories.iter().enumerate() {
                                li {
                                    key: "{index}",
                                    class: "flex gap-2 min-w-0",
                                    span { class: "badge badge-outline badge-sm", "{repo.kind}" }
                                    span { class: "truncate opacity-70", "{repo.repo_url}" }
                                }
                            }
                        }
                    }
                }
                p { class: "text-xs opacity-50", "제출일: {submitted_at}" }
            }
        }
    )
}

#[component]
fn NoSubmissions() -> Element {
    rsx!(
        div {
            class: "py-12 flex flex-col items-center gap-2 text-center",
            h3 { class: "text-lg font-semibold", "No Submissions Yet" }
            p { class: "opacity-60", "아직 제출한 프로젝트가 없습니다." }
            Link { to: Route::Personal {}, class: "btn btn-sm btn-primary mt-2", "제출하러 가기" }
        }
    )
}
