use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::panel::{Notice, NoticeLine};

/// One-shot admin commands on the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    StartGrading,
    StartEvaluation,
    CreateTestUsers,
    CreateTestSubmissions,
}

impl SettingsAction {
    pub fn success_message(self) -> &'static str {
        match self {
            SettingsAction::StartGrading => "평가가 시작되었습니다.",
            SettingsAction::StartEvaluation => "평가 항목 처리가 시작되었습니다.",
            SettingsAction::CreateTestUsers => "테스트 사용자가 생성되었습니다.",
            SettingsAction::CreateTestSubmissions => "테스트 제출물이 생성되었습니다.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            SettingsAction::StartGrading => "평가 시작에 실패했습니다.",
            SettingsAction::StartEvaluation => "평가 항목 처리 시작에 실패했습니다.",
            SettingsAction::CreateTestUsers => "테스트 사용자 생성에 실패했습니다.",
            SettingsAction::CreateTestSubmissions => "테스트 제출물 생성에 실패했습니다.",
        }
    }

    fn notice(self, succeeded: bool) -> Notice {
        if succeeded {
            Notice::Success(self.success_message().to_string())
        } else {
            Notice::Failure(self.failure_message().to_string())
        }
    }
}

#[cfg(feature = "web")]
async fn run(action: SettingsAction) -> Result<(), crate::client::model::error::ApiError> {
    use crate::client::api::{admin_submission, test_data};

    match action {
        SettingsAction::StartGrading => admin_submission::start_grading_all().await,
        SettingsAction::StartEvaluation => admin_submission::start_evaluation().await,
        SettingsAction::CreateTestUsers => test_data::create_test_users().await,
        SettingsAction::CreateTestSubmissions => test_data::create_test_submissions().await,
    }
}

#[component]
pub fn SettingsTab() -> Element {
    let mut pending = use_signal(|| None::<SettingsAction>);
    let mut notice = use_signal(|| None::<Notice>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match pending() {
            Some(action) => Some((action, run(action).await)),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some((action, result))) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("{:?} failed: {}", action, err);
            }
            notice.set(Some(action.notice(result.is_ok())));
            pending.set(None);
        }
    });

    let busy = pending().is_some();
    let mut trigger = move |action: SettingsAction| {
        notice.set(None);
        pending.set(Some(action));
    };

    rsx!(
        section {
            class: "flex flex-col gap-6",
            h2 { class: "text-2xl font-semibold", "평가 설정" }
            NoticeLine { notice: notice() }
            ActionRow {
                description: "대기 중인 모든 제출물에 대한 평가를 시작합니다.",
                label: "평가 시작",
                busy,
                on_click: move |_| trigger(SettingsAction::StartGrading),
            }
            ActionRow {
                description: "대기 중인 평가 항목들을 처리합니다.",
                label: "평가 항목 처리",
                busy,
                on_click: move |_| trigger(SettingsAction::StartEvaluation),
            }
            div { class: "divider", "개발 도구" }
            ActionRow {
                description: "테스트용 사용자 계정을 생성합니다.",
                label: "테스트 사용자 생성",
                busy,
                on_click: move |_| trigger(SettingsAction::CreateTestUsers),
            }
            ActionRow {
                description: "테스트용 제출물을 생성합니다.",
                label: "테스트 제출물 생성",
                busy,
                on_click: move |_| trigger(SettingsAction::CreateTestSubmissions),
            }
        }
    )
}

#[component]
fn ActionRow(
    description: &'static str,
    label: &'static str,
    busy: bool,
    on_click: EventHandler<()>,
) -> Element {
    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between sm:items-center gap-3 p-4 rounded-box bg-base-200",
            p { "{description}" }
            button {
                class: "btn btn-primary btn-sm",
                disabled: busy,
                onclick: move |_| on_click.call(()),
                "{label}"
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grading_notices() {
        assert_eq!(
            SettingsAction::StartGrading.notice(true),
            Notice::Success("평가가 시작되었습니다.".to_string())
        );
        assert_eq!(
            SettingsAction::StartEvaluation.notice(false),
            Notice::Failure("평가 항목 처리 시작에 실패했습니다.".to_string())
        );
    }
}
