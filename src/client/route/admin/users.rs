use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::panel::{Notice, NoticeLine, PanelError, PanelHint};
use crate::{
    client::{
        component::{ConfirmationModal, Modal, Page, SearchBox},
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::{
        admin::{filter_users, AdminUserDto, UserFormData},
        auth::UserRole,
    },
};

#[cfg(feature = "web")]
use crate::client::api::admin_user::{
    assign_role, create_user, delete_user, get_user, get_users, update_user,
};

#[component]
pub fn AdminUsers() -> Element {
    #[allow(unused_mut)]
    let mut users = use_signal(|| Cache::<Vec<AdminUserDto>>::Loading);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut query = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<AdminUserDto>);
    let mut edit_request = use_signal(|| None::<i64>);

    let mut show_delete = use_signal(|| false);
    let mut delete_target = use_signal(|| None::<AdminUserDto>);
    let mut is_deleting = use_signal(|| false);

    let mut role_request = use_signal(|| None::<(i64, UserRole)>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_users().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch users: {}", err);
            }
            users.set(result.clone().into());
        }
    });

    // The edit form is seeded from a fresh copy of the user
    #[cfg(feature = "web")]
    let edit_future = use_resource(move || async move {
        match edit_request() {
            Some(user_id) => Some(get_user(user_id).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = edit_future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    editing.set(Some(user.clone()));
                    show_form.set(true);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch user: {}", err);
                    notice.set(Some(Notice::Failure(err.message_or("사용자 정보를 불러오는데 실패했습니다."))));
                }
            }
            edit_request.set(None);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let user_id = delete_target.peek().as_ref().map(|user| user.id);
        match user_id {
            Some(user_id) => Some(delete_user(user_id).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    show_delete.set(false);
                    delete_target.set(None);
                    notice.set(Some(Notice::Success("사용자가 삭제되었습니다.".to_string())));
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete user: {}", err);
                    show_delete.set(false);
                    notice.set(Some(Notice::Failure(err.message_or("사용자 삭제에 실패했습니다."))));
                }
            }
            is_deleting.set(false);
        }
    });

    #[cfg(feature = "web")]
    let role_future = use_resource(move || async move {
        match role_request() {
            Some((user_id, role)) => Some(assign_role(user_id, role).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = role_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    notice.set(Some(Notice::Success("역할이 변경되었습니다.".to_string())));
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to assign role: {}", err);
                    notice.set(Some(Notice::Failure(err.message_or("역할 변경에 실패했습니다."))));
                }
            }
            role_request.set(None);
        }
    });

    let state = users();
    let assigning = role_request.read().is_some();
    let opening_edit = edit_request.read().is_some();
    let delete_message = delete_target
        .read()
        .as_ref()
        .map(|user| format!("{} ({})", user.username, user.email));

    rsx! {
        Title { "사용자 관리 | {SITE_NAME}" }
        Page {
            class: "max-w-6xl mx-auto flex flex-col gap-6",
            div {
                class: "flex flex-col sm:flex-row justify-between sm:items-center gap-4",
                div {
                    class: "flex items-center gap-3",
                    Link { to: Route::Admin {}, class: "btn btn-ghost btn-sm", "←" }
                    h1 { class: "text-3xl font-bold", "사용자 관리" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "사용자 추가"
                }
            }
            SearchBox {
                placeholder: "이름, 이메일, 또는 역할로 검색...",
                class: "max-w-md",
                on_search: move |value| query.set(value),
            }
            NoticeLine { notice: notice() }
            match state {
                Cache::NotFetched | Cache::Loading => rsx! { PanelHint { text: "사용자 목록을 불러오는 중..." } },
                Cache::Error(err) => rsx! {
                    PanelError { text: format!("사용자 목록을 불러오는데 실패했습니다: {}", err) }
                },
                Cache::Fetched(list) => {
                    let visible = filter_users(&list, &query());
                    rsx! {
                        if visible.is_empty() {
                            PanelHint { text: "검색 결과가 없습니다." }
                        } else {
                            div {
                                class: "overflow-x-auto",
                                table {
                                    class: "table",
                                    thead {
                                        tr {
                                            th { "사용자 이름" }
                                            th { "이메일" }
                                            th { "역할" }
                                            th { class: "text-right", "Actions" }
                                        }
                                    }
                                    tbody {
                                        for user in visible {
                                            UserRow {
                                                key: "{user.id}",
                                                user: user.clone(),
                                                assigning,
                                                opening_edit,
                                                on_edit: move |user_id| {
                                                    notice.set(None);
                                                    edit_request.set(Some(user_id));
                                                },
                                                on_delete: move |user| {
                                                    delete_target.set(Some(user));
                                                    show_delete.set(true);
                                                },
                                                on_assign: move |request| {
                                                    notice.set(None);
                                                    role_request.set(Some(request));
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        UserFormModal { show: show_form, editing: editing(), refetch_trigger }
        ConfirmationModal {
            show: show_delete,
            title: "사용자 삭제",
            message: "정말로 이 사용자를 삭제하시겠습니까?",
            detail: delete_message,
            confirm_text: "삭제",
            is_processing: is_deleting(),
            on_confirm: move |_| is_deleting.set(true),
        }
    }
}

#[component]
fn UserRow(
    user: AdminUserDto,
    assigning: bool,
    opening_edit: bool,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<AdminUserDto>,
    on_assign: EventHandler<(i64, UserRole)>,
) -> Element {
    let user_id = user.id;
    let delete_target = user.clone();

    rsx!(
        tr {
            td { "{user.username}" }
            td { "{user.email}" }
            td {
                select {
                    class: "select select-bordered select-sm",
                    disabled: assigning,
                    value: "{user.role.as_str()}",
                    onchange: move |evt| on_assign.call((user_id, UserRole::from(evt.value()))),
                    for role in UserRole::ASSIGNABLE {
                        option {
                            value: "{role.as_str()}",
                            selected: role == user.role,
                            "{role.label()}"
                        }
                    }
                    if let UserRole::Other(other) = &user.role {
                        option { value: "{other}", selected: true, "{other}" }
                    }
                }
            }
            td {
                class: "text-right whitespace-nowrap",
                button {
                    class: "btn btn-ghost btn-sm",
                    disabled: opening_edit,
                    onclick: move |_| on_edit.call(user_id),
                    "수정"
                }
                button {
                    class: "btn btn-ghost btn-sm text-error",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "삭제"
                }
            }
        }
    )
}

/// Create or edit form. `editing` selects edit mode and seeds the fields.
#[component]
fn UserFormModal(
    mut show: Signal<bool>,
    editing: Option<AdminUserDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form = use_signal(UserFormData::default);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut target = use_signal(|| None::<i64>);

    let editing_id = editing.as_ref().map(|user| user.id);

    // Reset the fields each time the modal opens
    use_effect(use_reactive!(|editing| {
        if show() {
            form.set(editing.as_ref().map(UserFormData::from).unwrap_or_default());
            target.set(editing.as_ref().map(|user| user.id));
            should_submit.set(false);
            error.set(None);
        }
    }));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }
        let data = form.peek().clone();
        let user_id = *target.peek();
        let result = match user_id {
            Some(user_id) => update_user(user_id, data.into_update()).await,
            None => match data.into_create() {
                Ok(payload) => create_user(payload).await,
                Err(message) => Err(crate::client::model::error::ApiError::new(400, message)),
            },
        };
        Some(result)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to save user: {}", err);
                    error.set(Some(err.message_or("사용자 저장에 실패했습니다.")));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        error.set(None);
        // Checked here as well so the message shows without a round trip
        if editing_id.is_none() {
            if let Err(message) = form.read().clone().into_create() {
                error.set(Some(message.to_string()));
                return;
            }
        }
        should_submit.set(true);
    };

    let is_edit = editing_id.is_some();
    let submitting = should_submit();
    let fields = form();
    let title = if is_edit { "사용자 수정" } else { "사용자 추가" };

    rsx!(
        Modal {
            show,
            title: title.to_string(),
            prevent_close: submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                if let Some(message) = error() {
                    div { role: "alert", class: "alert alert-error", "{message}" }
                }
                label {
                    class: "form-control",
                    div { class: "label", span { class: "label-text", "사용자 이름" } }
                    input {
                        r#type: "text",
                        class: "input input-bordered",
                        required: true,
                        value: "{fields.username}",
                        oninput: move |evt| form.write().username = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    div { class: "label", span { class: "label-text", "이메일" } }
                    input {
                        r#type: "email",
                        class: "input input-bordered",
                        required: true,
                        value: "{fields.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    div {
                        class: "label",
                        span {
                            class: "label-text",
                            "비밀번호"
                            if is_edit {
                                " (변경하지 않으려면 비워두세요)"
                            }
                        }
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered",
                        required: !is_edit,
                        value: "{fields.password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    div { class: "label", span { class: "label-text", "역할" } }
                    select {
                        class: "select select-bordered",
                        value: "{fields.role.as_str()}",
                        onchange: move |evt| form.write().role = UserRole::from(evt.value()),
                        for role in UserRole::ASSIGNABLE {
                            option {
                                value: "{role.as_str()}",
                                selected: role == fields.role,
                                "{role.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: submitting,
                        onclick: move |_| show.set(false),
                        "취소"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting,
                        if submitting {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        if is_edit { "수정하기" } else { "추가하기" }
                    }
                }
            }
        }
    )
}
