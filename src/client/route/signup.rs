use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::login::{AuthCard, AuthField, SubmitButton};
use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::auth::{AuthContext, AuthState},
        router::Route,
    },
    model::auth::RegisterDto,
};

#[cfg(feature = "web")]
use crate::client::{
    api::auth::{get_role, register},
    model::{auth::TokenStore, error::ApiError},
};

pub const PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";
pub const SIGNUP_FAILED: &str = "회원가입 중 오류가 발생했습니다.";

#[derive(Clone, Default, PartialEq)]
struct SignupForm {
    email: String,
    username: String,
    password: String,
    confirm_password: String,
}

impl SignupForm {
    /// Registration payload, or the error to show without sending anything.
    fn validate(&self) -> Result<RegisterDto, &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(RegisterDto {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registers, stores the issued token and resolves the new account.
#[cfg(feature = "web")]
async fn register_and_fetch_role(payload: RegisterDto) -> Result<AuthState, ApiError> {
    let token = register(payload).await?;
    TokenStore::save(&token);
    let result = get_role().await;
    if let Ok(user) = &result {
        TokenStore::save_role(&user.role);
    }
    // The account exists either way, so a failed role lookup is not a failed signup.
    Ok(AuthState::from(result))
}

#[component]
pub fn Signup() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut form = use_signal(SignupForm::default);
    let mut submit_data = use_signal(|| None::<RegisterDto>);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match submit_data() {
            Some(payload) => Some(register_and_fetch_role(payload).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(state) => {
                    auth.set(state.clone());
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("Signup failed: {}", err);
                    error.set(Some(err.message_or(SIGNUP_FAILED)));
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        error.set(None);
        match form.read().validate() {
            Ok(payload) => submit_data.set(Some(payload)),
            Err(message) => error.set(Some(message.to_string())),
        }
    };

    let is_submitting = submit_data.read().is_some();
    let fields = form();

    rsx! {
        Title { "Sign up | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            AuthCard {
                subtitle: "회원가입",
                error: error(),
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_submit,
                    AuthField {
                        label: "Email",
                        input_type: "email",
                        placeholder: "Enter your email",
                        autocomplete: "email",
                        value: fields.email,
                        on_input: move |value| form.write().email = value,
                    }
                    AuthField {
                        label: "Username",
                        input_type: "text",
                        placeholder: "Enter your username",
                        value: fields.username,
                        on_input: move |value| form.write().username = value,
                    }
                    AuthField {
                        label: "Password",
                        input_type: "password",
                        placeholder: "Enter your password",
                        autocomplete: "new-password",
                        value: fields.password,
                        on_input: move |value| form.write().password = value,
                    }
                    AuthField {
                        label: "Confirm Password",
                        input_type: "password",
                        placeholder: "Confirm your password",
                        autocomplete: "new-password",
                        value: fields.confirm_password,
                        on_input: move |value| form.write().confirm_password = value,
                    }
                    SubmitButton { is_submitting, label: "가입하기" }
                }
                p {
                    class: "text-sm text-center mt-4",
                    "이미 계정이 있으신가요? "
                    Link { to: Route::Login {}, class: "link link-primary", "로그인하기" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm_password: &str) -> SignupForm {
        SignupForm {
            email: " jiin@snapcode.dev ".to_string(),
            username: "jiin".to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    #[test]
    fn mismatched_passwords_are_rejected_locally() {
        assert_eq!(form("secret1", "secret2").validate(), Err(PASSWORD_MISMATCH));
    }

    #[test]
    fn matching_passwords_build_the_payload() {
        let payload = form("secret1", "secret1").validate().unwrap();
        assert_eq!(payload.email, "jiin@snapcode.dev");
        assert_eq!(payload.username, "jiin");
        assert_eq!(payload.password, "secret1");
    }
}
