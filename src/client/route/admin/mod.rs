use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

mod evaluation;
mod openai;
mod panel;
mod queue;
mod settings;
mod submissions;
mod users;
mod users_tab;

pub use submissions::AdminSubmissions;
pub use users::AdminUsers;

use evaluation::EvaluationTab;
use openai::OpenAiTab;
use queue::GradingQueueTab;
use settings::SettingsTab;
use users_tab::UsersTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Grading,
    Settings,
    OpenAi,
    Evaluation,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Users,
        AdminTab::Grading,
        AdminTab::Settings,
        AdminTab::OpenAi,
        AdminTab::Evaluation,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Users => "사용자 관리",
            AdminTab::Grading => "평가 대기열",
            AdminTab::Settings => "설정",
            AdminTab::OpenAi => "OpenAI 관리",
            AdminTab::Evaluation => "평가 결과",
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let mut active = use_signal(|| AdminTab::Users);

    rsx! {
        Title { "관리자 | {SITE_NAME}" }
        Page {
            class: "max-w-6xl mx-auto flex flex-col gap-6",
            div {
                class: "flex flex-col sm:flex-row justify-between sm:items-center gap-4",
                h1 { class: "text-4xl font-bold", "관리자 페이지" }
                div {
                    class: "flex gap-2",
                    Link { to: Route::AdminUsers {}, class: "btn btn-outline btn-sm", "사용자 관리 페이지" }
                    Link { to: Route::AdminSubmissions {}, class: "btn btn-outline btn-sm", "전체 제출 내역" }
                }
            }
            div {
                role: "tablist",
                class: "tabs tabs-bordered overflow-x-auto",
                for tab in AdminTab::ALL {
                    button {
                        key: "{tab.label()}",
                        role: "tab",
                        class: if active() == tab { "tab tab-active" } else { "tab" },
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            // Switching tabs drops whatever the previous tab fetched
            match active() {
                AdminTab::Users => rsx! { UsersTab {} },
                AdminTab::Grading => rsx! { GradingQueueTab {} },
                AdminTab::Settings => rsx! { SettingsTab {} },
                AdminTab::OpenAi => rsx! { OpenAiTab {} },
                AdminTab::Evaluation => rsx! { EvaluationTab {} },
            }
        }
    }
}
