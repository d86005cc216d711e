use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::auth::{get_role, login},
        model::{auth::TokenStore, error::ApiError},
    },
    model::auth::RoleDto,
};

pub const LOGIN_FAILED: &str = "An error occurred during login";

/// Admins land on the console, everyone else on the home page.
pub fn landing_route(state: &AuthState) -> Route {
    if state.is_admin() {
        Route::Admin {}
    } else {
        Route::Home {}
    }
}

/// Stores the issued token, then resolves the account's role.
#[cfg(feature = "web")]
async fn login_and_fetch_role(email: String, password: String) -> Result<RoleDto, ApiError> {
    let token = login(email, password).await?;
    TokenStore::save(&token);
    let user = get_role().await?;
    TokenStore::save_role(&user.role);
    Ok(user)
}

#[component]
pub fn Login() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            let email = email.peek().clone();
            let password = password.peek().clone();
            Some(login_and_fetch_role(email, password).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    auth.set(AuthState::Authenticated(user.clone()));
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    TokenStore::clear();
                    error.set(Some(err.message_or(LOGIN_FAILED)));
                }
            }
            should_submit.set(false);
        }
    });

    // Covers both a fresh login and a signed-in user opening /login by hand
    use_effect(move || {
        let state = auth.read();
        if state.is_authenticated() {
            nav.push(landing_route(&state));
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        error.set(None);
        should_submit.set(true);
    };

    let is_initializing = auth.read().is_initializing();
    let is_submitting = should_submit();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if is_initializing {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col items-center justify-center",
                AuthCard {
                    subtitle: "로그인",
                    error: error(),
                    form {
                        class: "flex flex-col gap-4",
                        onsubmit: on_submit,
                        AuthField {
                            label: "Email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            autocomplete: "email",
                            value: email(),
                            on_input: move |value| email.set(value),
                        }
                        AuthField {
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            autocomplete: "current-password",
                            value: password(),
                            on_input: move |value| password.set(value),
                        }
                        SubmitButton { is_submitting, label: "로그인" }
                    }
                    p {
                        class: "text-sm text-center mt-4",
                        "아직 계정이 없으신가요? "
                        Link { to: Route::Signup {}, class: "link link-primary", "회원가입하기" }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn AuthCard(subtitle: &'static str, error: Option<String>, children: Element) -> Element {
    rsx!(
        div {
            class: "card w-full max-w-md bg-base-100 shadow-xl",
            div {
                class: "card-body",
                h1 { class: "text-3xl font-bold text-center text-primary", "{SITE_NAME}" }
                h2 { class: "text-lg text-center opacity-70 mb-4", "{subtitle}" }
                if let Some(error) = error {
                    div { role: "alert", class: "alert alert-error mb-2", "{error}" }
                }
                {children}
            }
        }
    )
}

#[component]
pub(super) fn AuthField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    #[props(default)] autocomplete: &'static str,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx!(
        label {
            class: "form-control w-full",
            div { class: "label", span { class: "label-text", "{label}" } }
            input {
                r#type: input_type,
                class: "input input-bordered w-full",
                placeholder,
                autocomplete,
                required: true,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}

#[component]
pub(super) fn SubmitButton(is_submitting: bool, label: &'static str) -> Element {
    rsx!(
        button {
            r#type: "submit",
            class: "btn btn-primary w-full mt-2",
            disabled: is_submitting,
            if is_submitting {
                span { class: "loading loading-spinner loading-sm" }
            }
            "{label}"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::{RoleDto, UserRole};

    fn signed_in(role: UserRole) -> AuthState {
        AuthState::Authenticated(RoleDto {
            id: Some(3),
            email: Some("judge@snapcode.dev".to_string()),
            username: None,
            role,
        })
    }

    #[test]
    fn admins_land_on_the_console() {
        assert_eq!(landing_route(&signed_in(UserRole::Admin)), Route::Admin {});
    }

    #[test]
    fn other_roles_land_on_home() {
        assert_eq!(landing_route(&signed_in(UserRole::Judge)), Route::Home {});
        assert_eq!(landing_route(&signed_in(UserRole::User)), Route::Home {});
    }
}
