use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

fn check_permissions(state: &AuthState, required_permissions: &[Permission]) -> bool {
    if !state.is_authenticated() {
        return false;
    }

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Admin => state.is_admin(),
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth.read().clone();
    let logged_out = matches!(state, AuthState::NotLoggedIn);
    let has_required_permissions = check_permissions(&state, &permissions);

    use_effect(use_reactive!(|logged_out| {
        if logged_out {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        match state {
            AuthState::Initializing => rsx! { LoadingPage {  } },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            AuthState::Authenticated(_) if !has_required_permissions => rsx! {
                ErrorPage { status: 403, message: "이 페이지에 접근할 권한이 없습니다." }
            },
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            // Rendered empty while the effect redirects to login
            AuthState::NotLoggedIn => rsx! {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::{RoleDto, UserRole};

    fn signed_in(role: UserRole) -> AuthState {
        AuthState::Authenticated(RoleDto {
            id: Some(7),
            email: None,
            username: None,
            role,
        })
    }

    #[test]
    fn logged_in_pages_accept_any_role() {
        let required = [Permission::LoggedIn];
        assert!(check_permissions(&signed_in(UserRole::User), &required));
        assert!(check_permissions(&signed_in(UserRole::Judge), &required));
        assert!(!check_permissions(&AuthState::NotLoggedIn, &required));
    }

    #[test]
    fn admin_pages_require_admin_role() {
        let required = [Permission::Admin];
        assert!(check_permissions(&signed_in(UserRole::Admin), &required));
        assert!(!check_permissions(&signed_in(UserRole::Judge), &required));
        assert!(!check_permissions(&AuthState::Initializing, &required));
    }
}
