use serde::{Deserialize, Serialize};

use crate::model::{
    auth::UserRole,
    submission::{EvaluationResultDto, RepositoryDto},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserDto {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Partial update, fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignRoleDto {
    pub user_id: i64,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingQueueItemDto {
    pub submission_id: i64,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub status: String,
    #[serde(default)]
    pub queued_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingQueueDto {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub queue: Vec<GradingQueueItemDto>,
}

/// Submission as listed by `GET /admin/submissions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSubmissionDto {
    pub submission_id: i64,
    #[serde(default)]
    pub team_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub competition_name: Option<String>,
    pub submitted_at: String,
    pub status: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub repositories: Vec<RepositoryDto>,
    #[serde(default)]
    pub evaluation_criteria: Vec<String>,
    #[serde(default)]
    pub evaluation_result: EvaluationResultDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionStatusUpdateDto {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingDto {
    pub team_name: String,
    pub score: f64,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStatisticsDto {
    pub total_submissions: u64,
    pub graded_submissions: u64,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
}

pub const PASSWORD_REQUIRED: &str = "비밀번호를 입력해주세요.";

/// Values of the admin create/edit user form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFormData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl From<&AdminUserDto> for UserFormData {
    fn from(user: &AdminUserDto) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.clone(),
        }
    }
}

impl UserFormData {
    /// A new account needs a password.
    pub fn into_create(self) -> Result<CreateUserDto, &'static str> {
        if self.password.is_empty() {
            return Err(PASSWORD_REQUIRED);
        }
        Ok(CreateUserDto {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            role: self.role,
        })
    }

    /// An empty password leaves the current one unchanged.
    pub fn into_update(self) -> UpdateUserDto {
        UpdateUserDto {
            username: Some(self.username.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            password: Some(self.password).filter(|password| !password.is_empty()),
            role: Some(self.role),
        }
    }
}

/// Users whose username, email or role contains `query`, ignoring case.
pub fn filter_users(users: &[AdminUserDto], query: &str) -> Vec<AdminUserDto> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return users.to_vec();
    }

    users
        .iter()
        .filter(|user| {
            user.username.to_lowercase().contains(&query)
                || user.email.to_lowercase().contains(&query)
                || user.role.as_str().to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str, email: &str, role: UserRole) -> AdminUserDto {
        AdminUserDto {
            id,
            username: username.to_string(),
            email: email.to_string(),
            role,
            created_at: None,
        }
    }

    fn users() -> Vec<AdminUserDto> {
        vec![
            user(1, "Jiin", "jiin@snapcode.dev", UserRole::Admin),
            user(2, "minsu", "MINSU@example.com", UserRole::Judge),
            user(3, "hana", "hana@example.com", UserRole::User),
        ]
    }

    #[test]
    fn blank_query_keeps_every_user() {
        assert_eq!(filter_users(&users(), "   ").len(), 3);
    }

    #[test]
    fn matches_username_email_and_role_ignoring_case() {
        let ids = |query: &str| -> Vec<i64> {
            filter_users(&users(), query).iter().map(|u| u.id).collect()
        };

        assert_eq!(ids("JIIN"), vec![1]);
        assert_eq!(ids("minsu@"), vec![2]);
        assert_eq!(ids("judge"), vec![2]);
        assert_eq!(ids("example.com"), vec![2, 3]);
        assert!(ids("nobody").is_empty());
    }

    #[test]
    fn update_skips_unset_fields() {
        let dto = UpdateUserDto {
            email: Some("new@example.com".to_string()),
            role: Some(UserRole::Judge),
            ..UpdateUserDto::default()
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"email":"new@example.com","role":"judge"}"#
        );
    }

    #[test]
    fn admin_submission_defaults_missing_evaluation() {
        let dto: AdminSubmissionDto = serde_json::from_str(
            r#"{"submission_id": 11, "title": "On-device-AI", "submitted_at": "2025-06-07T20:30:15", "status": "submitted"}"#,
        )
        .unwrap();
        assert_eq!(dto.evaluation_result.status, "waiting");
        assert!(dto.evaluation_result.criteria_results.is_empty());
    }

    #[test]
    fn creating_a_user_requires_a_password() {
        let form = UserFormData {
            username: "hana".to_string(),
            email: "hana@example.com".to_string(),
            ..UserFormData::default()
        };
        assert_eq!(form.clone().into_create(), Err(PASSWORD_REQUIRED));

        let created = UserFormData {
            password: "pw1234".to_string(),
            ..form
        }
        .into_create()
        .unwrap();
        assert_eq!(created.role, UserRole::User);
        assert_eq!(created.password, "pw1234");
    }

    #[test]
    fn blank_password_is_left_out_of_updates() {
        let form = UserFormData::from(&user(2, "minsu", "minsu@example.com", UserRole::Judge));
        let body = serde_json::to_value(form.into_update()).unwrap();

        assert_eq!(body["role"], "judge");
        assert!(body.get("password").is_none());
    }
}
