use dioxus::prelude::*;

use crate::{
    client::model::error::ApiError,
    model::auth::{RoleDto, TokenDto, UserRole},
};

#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    /// Drops the stored token and marks the session as logged out.
    pub fn logout(&mut self) {
        TokenStore::clear();
        self.inner.set(AuthState::NotLoggedIn);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Token present but role not fetched yet
    Initializing,
    Authenticated(RoleDto),
    /// No stored token
    NotLoggedIn,
    /// Token present but the role lookup failed
    Error(ApiError),
}

impl From<Result<RoleDto, ApiError>> for AuthState {
    fn from(result: Result<RoleDto, ApiError>) -> Self {
        match result {
            Ok(user) => AuthState::Authenticated(user),
            // An expired or revoked token reads as logged out.
            Err(e) if e.is_unauthorized() => AuthState::NotLoggedIn,
            Err(e) => AuthState::Error(e),
        }
    }
}

impl AuthState {
    pub fn is_initializing(&self) -> bool {
        matches!(self, AuthState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&UserRole::Admin)
    }

    pub fn has_role(&self, role: &UserRole) -> bool {
        self.user().is_some_and(|user| &user.role == role)
    }

    pub fn user(&self) -> Option<&RoleDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Access token persisted in browser local storage.
pub struct TokenStore;

impl TokenStore {
    const ACCESS_TOKEN: &'static str = "access_token";
    const TOKEN_TYPE: &'static str = "token_type";
    const USER_ROLE: &'static str = "user_role";

    #[cfg(feature = "web")]
    pub fn save(token: &TokenDto) {
        use dioxus_logger::tracing;
        use gloo_storage::{LocalStorage, Storage};

        if let Err(e) = LocalStorage::set(Self::ACCESS_TOKEN, &token.access_token)
            .and_then(|_| LocalStorage::set(Self::TOKEN_TYPE, &token.token_type))
        {
            tracing::error!("Failed to store access token: {}", e);
        }
    }

    #[cfg(not(feature = "web"))]
    pub fn save(_token: &TokenDto) {}

    #[cfg(feature = "web")]
    pub fn load() -> Option<TokenDto> {
        use gloo_storage::{LocalStorage, Storage};

        let access_token: String = LocalStorage::get(Self::ACCESS_TOKEN).ok()?;
        if access_token.is_empty() {
            return None;
        }
        let token_type: String =
            LocalStorage::get(Self::TOKEN_TYPE).unwrap_or_else(|_| "bearer".to_string());

        Some(TokenDto {
            access_token,
            token_type,
        })
    }

    #[cfg(not(feature = "web"))]
    pub fn load() -> Option<TokenDto> {
        None
    }

    #[cfg(feature = "web")]
    pub fn save_role(role: &UserRole) {
        use gloo_storage::{LocalStorage, Storage};

        let _ = LocalStorage::set(Self::USER_ROLE, role.as_str());
    }

    #[cfg(not(feature = "web"))]
    pub fn save_role(_role: &UserRole) {}

    #[cfg(feature = "web")]
    pub fn clear() {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::delete(Self::ACCESS_TOKEN);
        LocalStorage::delete(Self::TOKEN_TYPE);
        LocalStorage::delete(Self::USER_ROLE);
    }

    #[cfg(not(feature = "web"))]
    pub fn clear() {}

    pub fn has_token() -> bool {
        Self::load().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated(role: UserRole) -> AuthState {
        AuthState::Authenticated(RoleDto {
            id: Some(1),
            email: Some("jiin@snapcode.dev".to_string()),
            username: Some("jiin".to_string()),
            role,
        })
    }

    #[test]
    fn role_checks_require_authentication() {
        assert!(!AuthState::NotLoggedIn.is_admin());
        assert!(!AuthState::Initializing.has_role(&UserRole::User));

        let admin = authenticated(UserRole::Admin);
        assert!(admin.is_authenticated());
        assert!(admin.is_admin());

        let judge = authenticated(UserRole::Judge);
        assert!(!judge.is_admin());
        assert!(judge.has_role(&UserRole::Judge));
    }

    #[test]
    fn unauthorized_role_lookup_means_logged_out() {
        let state = AuthState::from(Err(ApiError::new(401, "Not authenticated")));
        assert!(matches!(state, AuthState::NotLoggedIn));

        let state = AuthState::from(Err(ApiError::new(500, "boom")));
        assert!(matches!(state, AuthState::Error(_)));
    }
}
