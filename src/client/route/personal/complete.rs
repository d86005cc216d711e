use dioxus::prelude::*;

use crate::{
    client::{
        component::{EvaluateButton, GuidingBox, Page},
        constant::SITE_NAME,
        model::submission::LastSubmission,
        router::Route,
    },
    model::submission::criterion_label,
};

#[component]
pub fn PersonalComplete() -> Element {
    let nav = navigator();
    let last_submission = use_context::<Signal<LastSubmission>>();

    let submission = last_submission.read().submission.clone();
    let nothing_submitted = submission.is_none();

    // Reached without submitting, e.g. by reloading the page
    use_effect(use_reactive!(|nothing_submitted| {
        if nothing_submitted {
            nav.replace(Route::Personal {});
        }
    }));

    let Some(submission) = submission else {
        return rsx! {};
    };

    rsx! {
        Title { "제출 완료 | {SITE_NAME}" }
        Page {
            class: "max-w-5xl mx-auto flex flex-col gap-8",
            h1 { class: "text-4xl font-bold", "제출이 완료되었습니다!" }
            GuidingBox {
                "제출하신 내용이 성공적으로 저장되었습니다."
                br {}
                "평가 결과는 마이페이지에서 확인하실 수 있습니다."
            }
            div {
                class: "card bg-base-100 shadow max-w-2xl",
                div {
                    class: "card-body gap-6",
                    div {
                        h3 { class: "font-semibold opacity-70", "서비스명" }
                        p { class: "text-lg", "{submission.title}" }
                    }
                    div {
                        h3 { class: "font-semibold opacity-70", "서비스 설명" }
                        p { class: "whitespace-pre-wrap", "{submission.description}" }
                    }
                    div {
                        h3 { class: "font-semibold opacity-70 mb-2", "평가 항목" }
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
                    div {
                        h3 { class: "font-semibold opacity-70 mb-2", "레포지토리" }
                        div {
                            class: "flex flex-col gap-2",
                            for (index, repo) in submission.repositories.iter().enumerate() {
                                div {
                                    key: "{index}",
                                    class: "p-3 rounded-box bg-base-200 text-sm",
                                    p { "타입: {repo.kind}" }
                                    p { class: "break-all", "URL: {repo.repo_url}" }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "flex gap-4",
                Link { to: Route::Personal {}, class: "btn btn-outline rounded-full", "새로운 제출하기" }
                Link { to: Route::MyPage {}, class: "btn btn-primary rounded-full", "마이페이지로 이동" }
            }
        }
    }
}
