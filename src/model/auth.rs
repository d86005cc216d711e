use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to an account by the backend.
///
/// Roles the client does not know about are kept verbatim in `Other` so that a
/// newer backend does not break deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Judge,
    User,
    Other(String),
}

impl UserRole {
    /// Roles offered in the admin user form, in display order.
    pub const ASSIGNABLE: [UserRole; 3] = [UserRole::User, UserRole::Judge, UserRole::Admin];

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Judge => "judge",
            UserRole::User => "user",
            UserRole::Other(role) => role,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            UserRole::Admin => "관리자",
            UserRole::Judge => "심사위원",
            UserRole::User => "일반 사용자",
            UserRole::Other(role) => role,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "judge" => UserRole::Judge,
            "user" => UserRole::User,
            _ => UserRole::Other(value),
        }
    }
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        UserRole::from(value.to_string())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Access token issued by `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDto {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl TokenDto {
    /// Value for the `Authorization` header, e.g. `bearer eyJ...`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

/// Response of `GET /auth/get_role`, the caller's own account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_known_and_unknown_values() {
        let roles: Vec<UserRole> =
            serde_json::from_str(r#"["admin", "JUDGE", "user", "reviewer"]"#).unwrap();
        assert_eq!(
            roles,
            vec![
                UserRole::Admin,
                UserRole::Judge,
                UserRole::User,
                UserRole::Other("reviewer".to_string())
            ]
        );
        assert_eq!(
            serde_json::to_string(&roles).unwrap(),
            r#"["admin","judge","user","reviewer"]"#
        );
    }

    #[test]
    fn role_labels_are_localized() {
        assert_eq!(UserRole::Admin.label(), "관리자");
        assert_eq!(UserRole::Judge.label(), "심사위원");
        assert_eq!(UserRole::Other("mentor".into()).label(), "mentor");
    }

    #[test]
    fn token_builds_authorization_header() {
        let token: TokenDto = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(token.authorization_header(), "bearer abc");
    }

    #[test]
    fn role_response_tolerates_missing_fields() {
        let role: RoleDto = serde_json::from_str(r#"{"role": "admin"}"#).unwrap();
        assert_eq!(role.role, UserRole::Admin);
        assert_eq!(role.email, None);
    }
}
