use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::panel::{Notice, NoticeLine, PanelError, PanelHeader, PanelHint};
use crate::{
    client::{
        component::{Page, Pagination, PaginationData, StatusBadge},
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::{
        admin::AdminSubmissionDto,
        export::SelectionSet,
        format::{format_date_time, format_points},
        submission::{RepositoryDto, SubmissionStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::admin_submission::{get_submissions, update_submission_status};

const NOTHING_SELECTED: &str = "내보낼 항목을 선택해주세요.";

/// Statuses an admin can set by hand.
const EDITABLE_STATUSES: [&str; 4] = ["submitted", "grading", "completed", "failed"];

/// `"backend 저장소"`, or `None` when the submission has no repository.
fn repository_summary(repositories: &[RepositoryDto]) -> Option<(String, usize)> {
    let first = repositories.first()?;
    Some((format!("{} 저장소", first.kind), repositories.len() - 1))
}

#[component]
pub fn AdminSubmissions() -> Element {
    let mut submissions = use_signal(|| Cache::<Vec<AdminSubmissionDto>>::NotFetched);
    let mut should_fetch = use_signal(|| false);
    let mut selection = use_signal(SelectionSet::default);
    let mut notice = use_signal(|| None::<Notice>);
    let page = use_signal(|| 0usize);
    let per_page = use_signal(|| 10usize);

    let mut status_request = use_signal(|| None::<(i64, String)>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_fetch() {
            Some(get_submissions().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => selection
                    .write()
                    .retain_existing(list.iter().map(|item| item.submission_id)),
                Err(err) => tracing::error!("Failed to fetch submissions: {}", err),
            }
            submissions.set(result.clone().into());
            should_fetch.set(false);
        }
    });

    #[cfg(feature = "web")]
    let status_future = use_resource(move || async move {
        match status_request() {
            Some((submission_id, status)) => {
                Some(update_submission_status(submission_id, status).await)
            }
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = status_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    notice.set(Some(Notice::Success("상태가 변경되었습니다.".to_string())));
                    should_fetch.set(true);
                }
                Err(err) => {
                    tracing::error!("Failed to update submission status: {}", err);
                    notice.set(Some(Notice::Failure(err.message_or("상태 변경에 실패했습니다."))));
                }
            }
            status_request.set(None);
        }
    });

    let export = move |_: MouseEvent| {
        let selected = selection.read().clone();
        if selected.is_empty() {
            notice.set(Some(Notice::Failure(NOTHING_SELECTED.to_string())));
            return;
        }
        if let Some(list) = submissions.read().data() {
            notice.set(Some(export_selected(list, &selected)));
        }
    };

    let state = submissions();

    let loading = state.is_loading();
    let updating = status_request.read().is_some();

    rsx! {
        Title { "제출 내역 관리 | {SITE_NAME}" }
        Page {
            class: "max-w-7xl mx-auto flex flex-col gap-6",
            div {
                class: "flex items-center gap-3",
                Link { to: Route::Admin {}, class: "btn btn-ghost btn-sm", "←" }
                h1 { class: "text-3xl font-bold", "제출 내역 관리" }
            }
            PanelHeader {
                title: "전체 제출 내역",
                button_label: "제출 내역 조회",
                loading,
                on_fetch: move |_| {
                    notice.set(None);
                    selection.write().clear();
                    submissions.set(Cache::Loading);
                    should_fetch.set(true);
                },
            }
            NoticeLine { notice: notice() }
            match state {
                Cache::NotFetched => rsx! { PanelHint { text: "제출 내역 조회 버튼을 눌러주세요." } },
                Cache::Loading => rsx! { PanelHint { text: "제출 내역을 불러오는 중..." } },
                Cache::Error(err) => rsx! {
                    PanelError { text: format!("제출 내역을 불러오는데 실패했습니다: {}", err) }
                },
                Cache::Fetched(list) if list.is_empty() => rsx! { PanelHint { text: "제출된 프로젝트가 없습니다." } },
                Cache::Fetched(list) => {
                    let data = PaginationData::new(page(), per_page(), list.len());
                    let rows = data.slice(&list).to_vec();
                    let all_ids: Vec<i64> = list.iter().map(|s| s.submission_id).collect();
                    let all_selected = selection.read().all_selected(list.len());
                    let selected_count = selection.read().len();

                    rsx! {
                        div {
                            class: "flex justify-between items-center gap-4",
                            span { class: "text-sm opacity-70", "{selected_count}개 선택됨" }
                            button {
                                class: "btn btn-success btn-sm",
                                onclick: export,
                                "Excel 내보내기"
                            }
                        }
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-sm",
                                thead {
                                    tr {
                                        th {
                                            input {
                                                r#type: "checkbox",
                                                class: "checkbox checkbox-sm",
                                                checked: all_selected,
                                                onchange: move |evt| {
                                                    selection.write().set_all(all_ids.clone(), evt.checked());
                                                },
                                            }
                                        }
                                        th { "ID" }
                                        th { "프로젝트명" }
                                        th { "팀명" }
                                        th { "제출일" }
                                        th { "상태" }
                                        th { "저장소" }
                                        th { "점수" }
                                        th { "상태 변경" }
                                    }
                                }
                                tbody {
                                    for submission in rows {
                                        SubmissionRow {
                                            key: "{submission.submission_id}",
                                            checked: selection.read().contains(submission.submission_id),
                                            updating,
                                            submission,
                                            on_check: move |(id, checked)| selection.write().set(id, checked),
                                            on_status: move |request| {
                                                notice.set(None);
                                                status_request.set(Some(request));
                                            },
                                        }
                                    }
                                }
                            }
                        }
                        Pagination { page, per_page, data }
                    }
                }
            }
        }
    }
}

#[component]
fn SubmissionRow(
    submission: AdminSubmissionDto,
    checked: bool,
    updating: bool,
    on_check: EventHandler<(i64, bool)>,
    on_status: EventHandler<(i64, String)>,
) -> Element {
    let submission_id = submission.submission_id;
    let status = SubmissionStatus::for_admin_table(
        &submission.status,
        &submission.evaluation_result.status,
    );
    let score = submission
        .evaluation_result
        .completed_score()
        .map(format_points)
        .unwrap_or_else(|| "-".to_string());
    let current = submission.status.to_lowercase();

    rsx!(
        tr {
            td {
                input {
                    r#type: "checkbox",
                    class: "checkbox checkbox-sm",
                    checked,
                    onchange: move |evt| on_check.call((submission_id, evt.checked())),
                }
            }
            td { "{submission_id}" }
            td { class: "font-medium", "{submission.title}" }
            td { {submission.team_name.clone().unwrap_or_else(|| "-".to_string())} }
            td { class: "whitespace-nowrap", {format_date_time(&submission.submitted_at)} }
            td { StatusBadge { status, admin: true } }
            td {
                match repository_summary(&submission.repositories) {
                    Some((label, 0)) => rsx! { span { "{label}" } },
                    Some((label, more)) => rsx! {
                        span { "{label}" }
                        span { class: "ml-1 text-xs opacity-60", "+{more}개 더" }
                    },
                    None => rsx! { span { class: "opacity-60", "저장소 없음" } },
                }
            }
            td { "{score}" }
            td {
                select {
                    class: "select select-bordered select-xs",
                    disabled: updating,
                    onchange: move |evt| on_status.call((submission_id, evt.value())),
                    if !EDITABLE_STATUSES.contains(&current.as_str()) {
                        option { value: "", selected: true, disabled: true, "{submission.status}" }
                    }
                    for value in EDITABLE_STATUSES {
                        option {
                            value,
                            selected: value == current,
                            {SubmissionStatus::parse(value).label().to_string()}
                        }
                    }
                }
            }
        }
    )
}

/// Builds the workbook for the selected rows and starts the download.
fn export_selected(submissions: &[AdminSubmissionDto], selection: &SelectionSet) -> Notice {
    use crate::{
        client::export::build_workbook,
        model::export::{export_file_name, selected_rows},
    };

    let rows = selected_rows(submissions, selection);
    let file_name = export_file_name(chrono::Local::now().date_naive(), rows.len());

    let bytes = match build_workbook(&rows) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to build workbook: {}", err);
            return Notice::Failure("Excel 파일 생성에 실패했습니다.".to_string());
        }
    };

    #[cfg(feature = "web")]
    if let Err(err) = crate::client::export::download_xlsx(&file_name, bytes) {
        tracing::error!("{}", err);
        return Notice::Failure("Excel 파일 다운로드에 실패했습니다.".to_string());
    }
    #[cfg(not(feature = "web"))]
    let _ = (file_name, bytes);

    Notice::Success(format!("{}개의 항목을 Excel 파일로 내보냈습니다.", rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(kind: &str) -> RepositoryDto {
        RepositoryDto {
            kind: kind.to_string(),
            repo_url: format!("https://github.com/nowjiin/{}", kind),
        }
    }

    #[test]
    fn summarizes_repositories() {
        assert_eq!(repository_summary(&[]), None);
        assert_eq!(
            repository_summary(&[repo("backend")]),
            Some(("backend 저장소".to_string(), 0))
        );
        assert_eq!(
            repository_summary(&[repo("frontend"), repo("backend"), repo("infra")]),
            Some(("frontend 저장소".to_string(), 2))
        );
    }
}
