use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::{
    super::panel::{Notice, NoticeLine, PanelError, PanelHint},
    SectionCard,
};
use crate::{client::model::cache::Cache, model::openai::OpenAiModelsDto};

#[cfg(feature = "web")]
use crate::client::{
    api::openai::{change_model, get_current_model, get_models},
    model::error::ApiError,
};

/// Switches the active model and returns the name the backend now reports.
///
/// The read-back only refines the name; once the change succeeded a failed
/// read-back falls back to the requested model.
#[cfg(feature = "web")]
async fn change_and_confirm(model_name: String) -> Result<String, ApiError> {
    change_model(model_name.clone()).await?;

    match get_current_model().await {
        Ok(current) if !current.current_model.is_empty() => Ok(current.current_model),
        Ok(_) => Ok(model_name),
        Err(err) => {
            tracing::warn!("Model changed but reading it back failed: {}", err);
            Ok(model_name)
        }
    }
}

#[component]
pub fn ModelSelector() -> Element {
    let mut models = use_signal(|| Cache::<OpenAiModelsDto>::NotFetched);
    let mut selected = use_signal(String::new);
    let mut should_fetch = use_signal(|| false);
    let mut change_request = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<Notice>);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        if should_fetch() {
            Some(get_models().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = fetch_future.read_unchecked().as_ref() {
            match result {
                Ok(data) => selected.set(data.current_model.clone()),
                Err(err) => tracing::error!("Failed to fetch OpenAI models: {}", err),
            }
            models.set(result.clone().into());
            should_fetch.set(false);
        }
    });

    #[cfg(feature = "web")]
    let change_future = use_resource(move || async move {
        match change_request() {
            Some(model_name) => Some(change_and_confirm(model_name).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = change_future.read_unchecked().as_ref() {
            match result {
                Ok(current_model) => {
                    selected.set(current_model.clone());
                    if let Cache::Fetched(data) = &mut *models.write() {
                        data.set_current_model(current_model);
                    }
                    notice.set(Some(Notice::Success("모델이 성공적으로 변경되었습니다.".to_string())));
                }
                Err(err) => {
                    tracing::error!("Failed to change OpenAI model: {}", err);
                    notice.set(Some(Notice::Failure("모델 변경에 실패했습니다.".to_string())));
                }
            }
            change_request.set(None);
        }
    });

    let state = models();
    let changing = change_request.read().is_some();
    let busy = state.is_loading() || changing;

    rsx!(
        SectionCard {
            title: "OpenAI 모델 관리",
            div {
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: busy,
                    onclick: move |_| {
                        notice.set(None);
                        models.set(Cache::Loading);
                        should_fetch.set(true);
                    },
                    "모델 조회"
                }
            }
            NoticeLine { notice: notice() }
            match state {
                Cache::NotFetched => rsx! { PanelHint { text: "모델 조회 버튼을 눌러주세요." } },
                Cache::Loading => rsx! { PanelHint { text: "로딩 중..." } },
                Cache::Error(_) => rsx! { PanelError { text: "모델 정보를 불러오는데 실패했습니다." } },
                Cache::Fetched(data) => {
                    let current_label = data
                        .find(&data.current_model)
                        .map(|model| model.display_name.clone())
                        .unwrap_or_else(|| "알 수 없음".to_string());
                    let is_changed = !selected().is_empty() && selected() != data.current_model;

                    rsx! {
                        div {
                            class: "flex flex-col gap-3",
                            p { class: "font-medium", "현재 모델: {current_label}" }
                            label {
                                class: "form-control",
                                div { class: "label", span { class: "label-text", "변경할 모델 선택:" } }
                                select {
                                    class: "select select-bordered",
                                    disabled: busy,
                                    value: "{selected}",
                                    onchange: move |evt| selected.set(evt.value()),
                                    for model in data.available_models.iter() {
                                        option {
                                            key: "{model.model_name}",
                                            value: "{model.model_name}",
                                            selected: model.model_name == selected(),
                                            "{model.option_label()}"
                                        }
                                    }
                                }
                            }
                            button {
                                class: "btn btn-primary btn-sm self-start",
                                disabled: busy || !is_changed,
                                onclick: move |_| {
                                    notice.set(None);
                                    change_request.set(Some(selected()));
                                },
                                if changing {
                                    span { class: "loading loading-spinner loading-xs" }
                                }
                                "모델 변경"
                            }
                        }
                    }
                }
            }
        }
    )
}
