use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::panel::{PanelError, PanelHeader, PanelHint};
use crate::{
    client::model::cache::Cache,
    model::{admin::AdminUserDto, format::format_date},
};

#[cfg(feature = "web")]
use crate::client::api::admin_user::get_users;

#[component]
pub fn UsersTab() -> Element {
    let mut users = use_signal(|| Cache::<Vec<AdminUserDto>>::NotFetched);
    let mut should_fetch = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_fetch() {
            Some(get_users().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch users: {}", err);
            }
            users.set(result.clone().into());
            should_fetch.set(false);
        }
    });

    let state = users();

    let loading = state.is_loading();

    rsx!(
        section {
            class: "flex flex-col gap-4",
            PanelHeader {
                title: "사용자 목록",
                button_label: "사용자 조회",
                loading,
                on_fetch: move |_| {
                    users.set(Cache::Loading);
                    should_fetch.set(true);
                },
            }
            match state {
                Cache::NotFetched => rsx! { PanelHint { text: "사용자 조회 버튼을 눌러주세요." } },
                Cache::Loading => rsx! { PanelHint { text: "로딩 중..." } },
                Cache::Error(_) => rsx! { PanelError { text: "사용자 목록을 불러오는데 실패했습니다." } },
                Cache::Fetched(list) if list.is_empty() => rsx! { PanelHint { text: "등록된 사용자가 없습니다." } },
                Cache::Fetched(list) => rsx! {
                    div {
                        class: "flex flex-col gap-2",
                        for user in list {
                            div {
                                key: "{user.id}",
                                class: "flex justify-between items-center p-4 rounded-box bg-base-200",
                                div {
                                    h3 { class: "font-semibold", "{user.email}" }
                                    p { class: "text-sm opacity-70", "역할: {user.role.label()}" }
                                }
                                if let Some(created_at) = user.created_at.as_deref() {
                                    span { class: "text-sm opacity-60", "가입일: {format_date(created_at)}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    )
}
