use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            input::truncate_chars, DescriptionInput, EvaluateButton, GuidingBox, InputBox, Page,
            TerminalLoader,
        },
        constant::SITE_NAME,
        model::submission::LastSubmission,
        router::Route,
    },
    model::submission::{
        toggle_criterion, CreateSubmissionDto, RepositoryDto, EVALUATION_CRITERIA,
    },
};

mod complete;

pub use complete::PersonalComplete;

pub const TITLE_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;
pub const SUBMIT_FAILED: &str = "Failed to submit. Please try again.";

/// The loader stays up at least this long so a fast response does not flash it.
#[cfg(feature = "web")]
const MINIMUM_SUBMIT_MS: u32 = 1000;

#[derive(Clone, PartialEq)]
struct PersonalForm {
    title: String,
    description: String,
    criteria: Vec<String>,
    repositories: Vec<RepositoryDto>,
}

impl Default for PersonalForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            criteria: Vec::new(),
            repositories: vec![RepositoryDto::default()],
        }
    }
}

impl PersonalForm {
    fn add_repository(&mut self) {
        self.repositories.push(RepositoryDto::default());
    }

    /// The last remaining row cannot be removed.
    fn remove_repository(&mut self, index: usize) {
        if self.repositories.len() > 1 && index < self.repositories.len() {
            self.repositories.remove(index);
        }
    }

    fn to_payload(&self) -> Result<CreateSubmissionDto, String> {
        CreateSubmissionDto::personal(
            &self.title,
            &self.description,
            &self.repositories,
            &self.criteria,
        )
    }
}

/// Milliseconds still to wait so that the whole submit takes `minimum_ms`.
pub fn remaining_delay(elapsed_ms: i64, minimum_ms: u32) -> u32 {
    let remaining = i64::from(minimum_ms) - elapsed_ms.max(0);
    remaining.clamp(0, i64::from(minimum_ms)) as u32
}

/// Sends the submission, holding the result until the minimum delay passed.
#[cfg(feature = "web")]
async fn submit_with_minimum_delay(
    payload: &CreateSubmissionDto,
) -> Result<(), crate::client::model::error::ApiError> {
    use crate::client::api::submission::create_submission;
    use gloo_timers::future::TimeoutFuture;

    let started = chrono::Utc::now();
    let result = create_submission(payload).await;
    let elapsed = (chrono::Utc::now() - started).num_milliseconds();
    TimeoutFuture::new(remaining_delay(elapsed, MINIMUM_SUBMIT_MS)).await;

    result
}

#[component]
pub fn Personal() -> Element {
    let nav = navigator();
    let mut last_submission = use_context::<Signal<LastSubmission>>();

    let mut form = use_signal(PersonalForm::default);
    let mut submit_data = use_signal(|| None::<CreateSubmissionDto>);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match submit_data() {
            Some(payload) => Some(submit_with_minimum_delay(&payload).await.map(|_| payload)),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(payload) => {
                    last_submission.set(LastSubmission {
                        submission: Some(payload.clone()),
                    });
                    nav.push(Route::PersonalComplete {});
                }
                Err(err) => {
                    tracing::error!("Failed to submit: {}", err);
                    error.set(Some(SUBMIT_FAILED.to_string()));
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submit_data.read().is_some() {
            return;
        }
        error.set(None);
        match form.read().to_payload() {
            Ok(payload) => submit_data.set(Some(payload)),
            Err(message) => error.set(Some(message)),
        }
    };

    let is_submitting = submit_data.read().is_some();
    let fields = form();
    let can_remove = fields.repositories.len() > 1;

    rsx! {
        Title { "Personal | {SITE_NAME}" }
        Page {
            class: "max-w-5xl mx-auto flex flex-col gap-8",
            h1 { class: "text-4xl font-bold", "Snap your code!" }
            GuidingBox {
                "서비스의 개요를 작성할 수 있습니다."
                br {}
                "설명은 구체적일수록 꼼꼼한 평가를 받을 수 있습니다."
            }
            if let Some(message) = error() {
                div { role: "alert", class: "alert alert-error", "{message}" }
            }
            if is_submitting {
                TerminalLoader { status: "제출중" }
            }
            form {
                class: "max-w-2xl flex flex-col gap-6",
                onsubmit: on_submit,
                InputBox {
                    title: "서비스명",
                    value: fields.title,
                    required: true,
                    placeholder: "서비스명을 입력해주세요.(최대 {TITLE_MAX_LENGTH}자)",
                    max_length: TITLE_MAX_LENGTH,
                    on_input: move |value: String| {
                        form.write().title = truncate_chars(&value, TITLE_MAX_LENGTH);
                    },
                }
                DescriptionInput {
                    title: "서비스 설명",
                    value: fields.description,
                    required: true,
                    placeholder: "서비스에 대한 간단한 설명을 입력해주세요.(최대 {DESCRIPTION_MAX_LENGTH}자)",
                    max_length: DESCRIPTION_MAX_LENGTH,
                    on_input: move |value: String| {
                        form.write().description = truncate_chars(&value, DESCRIPTION_MAX_LENGTH);
                    },
                }
                GuidingBox {
                    "평가 항목을 선택하고 1개 이상의 레포지토리 URL을 입력할 수 있습니다."
                    br {}
                    "URL 형식이 올바른지 꼭 체크해주세요!"
                }
                div {
                    class: "flex flex-col gap-4",
                    h3 {
                        class: "text-lg font-semibold",
                        "평가 항목"
                        span { class: "text-error ml-1", "*" }
                    }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-3",
                        for criterion in EVALUATION_CRITERIA {
                            EvaluateButton {
                                key: "{criterion.value}",
                                label: criterion.label.to_string(),
                                checked: fields.criteria.iter().any(|c| c == criterion.value),
                                on_toggle: move |_| toggle_criterion(&mut form.write().criteria, criterion.value),
                            }
                        }
                    }
                }
                div {
                    class: "flex flex-col gap-4",
                    div {
                        class: "flex justify-between items-center",
                        h3 {
                            class: "text-lg font-semibold",
                            "레포지토리"
                            span { class: "text-error ml-1", "*" }
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-sm btn-outline rounded-full",
                            onclick: move |_| form.write().add_repository(),
                            "+ 저장소 추가"
                        }
                    }
                    for (index, repo) in fields.repositories.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "flex flex-col sm:flex-row gap-4 sm:items-end p-4 rounded-box bg-base-200",
                            div {
                                class: "sm:w-1/3",
                                InputBox {
                                    title: "저장소 타입",
                                    value: repo.kind,
                                    placeholder: "저장소 타입을 입력해주세요.",
                                    on_input: move |value| {
                                        if let Some(repo) = form.write().repositories.get_mut(index) {
                                            repo.kind = value;
                                        }
                                    },
                                }
                            }
                            div {
                                class: "flex-1",
                                InputBox {
                                    title: "저장소 URL",
                                    value: repo.repo_url,
                                    required: true,
                                    placeholder: "https://example.com/",
                                    on_input: move |value| {
                                        if let Some(repo) = form.write().repositories.get_mut(index) {
                                            repo.repo_url = value;
                                        }
                                    },
                                }
                            }
                            if can_remove {
                                button {
                                    r#type: "button",
                                    class: "btn btn-error btn-outline",
                                    onclick: move |_| form.write().remove_repository(index),
                                    "삭제"
                                }
                            }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-lg rounded-full self-end",
                    disabled: is_submitting,
                    if is_submitting { "제출 중..." } else { "Snap my code!" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::submission::DEFAULT_REPOSITORY_TYPE;

    #[test]
    fn minimum_delay_covers_only_the_remainder() {
        assert_eq!(remaining_delay(0, 1000), 1000);
        assert_eq!(remaining_delay(350, 1000), 650);
        assert_eq!(remaining_delay(1500, 1000), 0);
        assert_eq!(remaining_delay(-20, 1000), 1000);
    }

    #[test]
    fn last_repository_row_is_kept() {
        let mut form = PersonalForm::default();
        form.remove_repository(0);
        assert_eq!(form.repositories.len(), 1);

        form.add_repository();
        form.remove_repository(0);
        assert_eq!(form.repositories.len(), 1);
    }

    #[test]
    fn blank_repository_type_is_sent_as_default() {
        let mut form = PersonalForm::default();
        form.title = "On-device-AI".to_string();
        form.description = "RAG on Ollama".to_string();
        form.repositories[0].repo_url = "https://github.com/nowjiin/on-device-ai".to_string();
        toggle_criterion(&mut form.criteria, "Product Excellence & UX");

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.repositories[0].kind, DEFAULT_REPOSITORY_TYPE);
        assert_eq!(payload.competition_name, "default");
        assert_eq!(payload.team_name, None);
        assert_eq!(payload.evaluation_criteria, vec!["Product Excellence & UX"]);
    }

    #[test]
    fn invalid_repository_url_blocks_submission() {
        let mut form = PersonalForm::default();
        form.repositories[0].repo_url = "github.com/nowjiin".to_string();
        assert_eq!(
            form.to_payload(),
            Err("올바른 URL 형식을 입력해주세요.".to_string())
        );
    }
}
