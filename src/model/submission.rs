use serde::{Deserialize, Serialize};

use crate::model::format::is_valid_url;

/// Competition every personal submission is filed under.
pub const DEFAULT_COMPETITION: &str = "default";

/// Repository type sent when the submitter leaves the field blank.
pub const DEFAULT_REPOSITORY_TYPE: &str = "string";

/// Backend message returned with a 404 when the user has not submitted anything.
const NOTHING_SUBMITTED_MARKER: &str = "아직 제출한";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDto {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub repo_url: String,
}

impl RepositoryDto {
    fn normalized(&self) -> Self {
        let kind = self.kind.trim();
        Self {
            kind: if kind.is_empty() {
                DEFAULT_REPOSITORY_TYPE.to_string()
            } else {
                kind.to_string()
            },
            repo_url: self.repo_url.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubmissionDto {
    pub team_name: Option<String>,
    pub title: String,
    pub description: String,
    pub competition_name: String,
    pub repositories: Vec<RepositoryDto>,
    pub evaluation_criteria: Vec<String>,
}

impl CreateSubmissionDto {
    /// Builds the payload for a personal submission.
    ///
    /// Fails with the message shown to the user when any repository URL is not
    /// an absolute URL.
    pub fn personal(
        title: &str,
        description: &str,
        repositories: &[RepositoryDto],
        evaluation_criteria: &[String],
    ) -> Result<Self, String> {
        if repositories
            .iter()
            .any(|repo| !is_valid_url(repo.repo_url.trim()))
        {
            return Err("올바른 URL 형식을 입력해주세요.".to_string());
        }

        Ok(Self {
            team_name: None,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            competition_name: DEFAULT_COMPETITION.to_string(),
            repositories: repositories.iter().map(RepositoryDto::normalized).collect(),
            evaluation_criteria: evaluation_criteria.to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaResultDto {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResultDto {
    pub status: String,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub code_summary: String,
    #[serde(default)]
    pub criteria_results: Vec<CriteriaResultDto>,
}

impl Default for EvaluationResultDto {
    fn default() -> Self {
        Self {
            status: "waiting".to_string(),
            total_score: None,
            code_summary: String::new(),
            criteria_results: Vec::new(),
        }
    }
}

impl EvaluationResultDto {
    /// Total score, only once the evaluation completed.
    pub fn completed_score(&self) -> Option<f64> {
        if self.status.eq_ignore_ascii_case("completed") {
            self.total_score
        } else {
            None
        }
    }
}

/// Full submission as returned by `GET /submissions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDto {
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
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub repositories: Vec<RepositoryDto>,
    #[serde(default)]
    pub evaluation_criteria: Vec<String>,
    #[serde(default)]
    pub evaluation_result: Option<EvaluationResultDto>,
}

impl SubmissionDto {
    /// Score to display: the top-level score, else the evaluation total.
    pub fn display_score(&self) -> Option<f64> {
        self.score.or_else(|| {
            self.evaluation_result
                .as_ref()
                .and_then(EvaluationResultDto::completed_score)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionListItemDto {
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
    pub score: Option<f64>,
    #[serde(default)]
    pub repositories: Vec<RepositoryDto>,
}

/// Response of `GET /submissions/me`.
///
/// The endpoint has answered with a wrapped list, a bare list, a single
/// submission, and a message-only object over time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MySubmissionsDto {
    Wrapped {
        submissions: Vec<SubmissionListItemDto>,
    },
    List(Vec<SubmissionListItemDto>),
    Single(SubmissionListItemDto),
    Message {
        message: String,
    },
}

impl MySubmissionsDto {
    pub fn into_items(self) -> Vec<SubmissionListItemDto> {
        match self {
            MySubmissionsDto::Wrapped { submissions } => submissions,
            MySubmissionsDto::List(submissions) => submissions,
            MySubmissionsDto::Single(submission) => vec![submission],
            MySubmissionsDto::Message { .. } => Vec::new(),
        }
    }
}

/// Whether an error message means "no submissions yet" rather than a failure.
pub fn is_nothing_submitted(message: &str) -> bool {
    message.contains(NOTHING_SUBMITTED_MARKER)
}

/// A criterion the submitter can ask the backend to score against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationCriterion {
    /// Label shown on the toggle button.
    pub label: &'static str,
    /// Value sent to the backend.
    pub value: &'static str,
}

pub const EVALUATION_CRITERIA: [EvaluationCriterion; 5] = [
    EvaluationCriterion {
        label: "혁신성 & 시장 파괴력",
        value: "Innovation & Market Disruption",
    },
    EvaluationCriterion {
        label: "기술 우수성 & 코드 품질",
        value: "Technical Excellence & Code Quality",
    },
    EvaluationCriterion {
        label: "확장성 & 성장 잠재력",
        value: "Scalability & Growth Potential",
    },
    EvaluationCriterion {
        label: "제품 우수성 & 사용성",
        value: "Product Excellence & UX",
    },
    EvaluationCriterion {
        label: "경쟁 우위 & 경쟁력",
        value: "Competitive Advantage & Moats",
    },
];

/// Display label for a criterion value, or the value itself when unknown.
pub fn criterion_label(value: &str) -> &str {
    EVALUATION_CRITERIA
        .iter()
        .find(|criterion| criterion.value == value)
        .map(|criterion| criterion.label)
        .unwrap_or(value)
}

/// Adds the criterion when absent, removes it when present. Selection order is kept.
pub fn toggle_criterion(selected: &mut Vec<String>, value: &str) {
    if let Some(index) = selected.iter().position(|v| v == value) {
        selected.remove(index);
    } else {
        selected.push(value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Submitted,
    Grading,
    Waiting,
    Pending,
    Completed,
    Failed,
    Other(String),
}

impl SubmissionStatus {
    pub fn parse(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "submitted" => SubmissionStatus::Submitted,
            "grading" | "running" => SubmissionStatus::Grading,
            "waiting" => SubmissionStatus::Waiting,
            "pending" => SubmissionStatus::Pending,
            "completed" => SubmissionStatus::Completed,
            "failed" => SubmissionStatus::Failed,
            _ => SubmissionStatus::Other(status.to_string()),
        }
    }

    /// Status shown in the admin submissions table.
    ///
    /// A waiting evaluation overrides the submission status and statuses the
    /// table has no badge for render as pending.
    pub fn for_admin_table(status: &str, evaluation_status: &str) -> Self {
        if evaluation_status.eq_ignore_ascii_case("waiting") {
            return SubmissionStatus::Waiting;
        }
        match SubmissionStatus::parse(status) {
            SubmissionStatus::Other(_) | SubmissionStatus::Grading | SubmissionStatus::Failed => {
                SubmissionStatus::Pending
            }
            status => status,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SubmissionStatus::Submitted => "제출됨",
            SubmissionStatus::Grading => "평가 중",
            SubmissionStatus::Waiting => "평가대기",
            SubmissionStatus::Pending => "대기중",
            SubmissionStatus::Completed => "완료됨",
            SubmissionStatus::Failed => "실패",
            SubmissionStatus::Other(status) => status,
        }
    }

    /// Label used in the admin submissions table, where a completed
    /// submission reads as evaluated.
    pub fn admin_label(&self) -> &str {
        match self {
            SubmissionStatus::Completed => "평가완료",
            status => status.label(),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "badge-info",
            SubmissionStatus::Grading | SubmissionStatus::Waiting => "badge-warning",
            SubmissionStatus::Completed => "badge-success",
            SubmissionStatus::Failed => "badge-error",
            SubmissionStatus::Pending | SubmissionStatus::Other(_) => "badge-ghost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json(id: i64) -> String {
        format!(
            r#"{{"submission_id": {id}, "title": "On-device-AI", "submitted_at": "2025-06-07T20:30:15.462598", "status": "submitted"}}"#
        )
    }

    #[test]
    fn my_submissions_accepts_every_response_shape() {
        let wrapped = format!(r#"{{"submissions": [{}, {}]}}"#, item_json(1), item_json(2));
        let list = format!("[{}]", item_json(3));
        let single = item_json(4);
        let message = r#"{"message": "아직 제출한 프로젝트가 없습니다"}"#;

        let ids = |body: &str| -> Vec<i64> {
            serde_json::from_str::<MySubmissionsDto>(body)
                .unwrap()
                .into_items()
                .iter()
                .map(|s| s.submission_id)
                .collect()
        };

        assert_eq!(ids(&wrapped), vec![1, 2]);
        assert_eq!(ids(&list), vec![3]);
        assert_eq!(ids(&single), vec![4]);
        assert!(ids(message).is_empty());
    }

    #[test]
    fn detects_nothing_submitted_message() {
        assert!(is_nothing_submitted("아직 제출한 프로젝트가 없습니다"));
        assert!(!is_nothing_submitted("Not authenticated"));
    }

    #[test]
    fn personal_submission_fills_defaults() {
        let repos = vec![
            RepositoryDto {
                kind: " ".to_string(),
                repo_url: "https://github.com/nowjiin/on-device-ai ".to_string(),
            },
            RepositoryDto {
                kind: "frontend".to_string(),
                repo_url: "https://github.com/nowjiin/web".to_string(),
            },
        ];
        let criteria = vec!["Product Excellence & UX".to_string()];

        let dto = CreateSubmissionDto::personal("  On Device AI ", "RAG", &repos, &criteria).unwrap();

        assert_eq!(dto.team_name, None);
        assert_eq!(dto.title, "On Device AI");
        assert_eq!(dto.competition_name, DEFAULT_COMPETITION);
        assert_eq!(dto.repositories[0].kind, DEFAULT_REPOSITORY_TYPE);
        assert_eq!(dto.repositories[0].repo_url, "https://github.com/nowjiin/on-device-ai");
        assert_eq!(dto.repositories[1].kind, "frontend");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["repositories"][0]["type"], "string");
        assert!(json["team_name"].is_null());
    }

    #[test]
    fn personal_submission_rejects_invalid_urls() {
        let repos = vec![RepositoryDto {
            kind: "backend".to_string(),
            repo_url: "github.com/no-scheme".to_string(),
        }];
        let err = CreateSubmissionDto::personal("t", "d", &repos, &[]).unwrap_err();
        assert_eq!(err, "올바른 URL 형식을 입력해주세요.");
    }

    #[test]
    fn toggling_criteria_keeps_click_order() {
        let mut selected = Vec::new();
        toggle_criterion(&mut selected, EVALUATION_CRITERIA[2].value);
        toggle_criterion(&mut selected, EVALUATION_CRITERIA[0].value);
        toggle_criterion(&mut selected, EVALUATION_CRITERIA[4].value);
        toggle_criterion(&mut selected, EVALUATION_CRITERIA[0].value);

        assert_eq!(
            selected,
            vec![
                "Scalability & Growth Potential".to_string(),
                "Competitive Advantage & Moats".to_string()
            ]
        );
    }

    #[test]
    fn criterion_labels_fall_back_to_value() {
        assert_eq!(criterion_label("Product Excellence & UX"), "제품 우수성 & 사용성");
        assert_eq!(criterion_label("Security"), "Security");
    }

    #[test]
    fn admin_table_status_prefers_waiting_evaluation() {
        assert_eq!(
            SubmissionStatus::for_admin_table("submitted", "waiting"),
            SubmissionStatus::Waiting
        );
        assert_eq!(
            SubmissionStatus::for_admin_table("completed", "completed"),
            SubmissionStatus::Completed
        );
        assert_eq!(
            SubmissionStatus::for_admin_table("archived", "completed"),
            SubmissionStatus::Pending
        );
    }

    #[test]
    fn admin_table_labels_completed_as_evaluated() {
        let completed = SubmissionStatus::for_admin_table("completed", "completed");
        assert_eq!(completed.admin_label(), "평가완료");
        assert_eq!(completed.label(), "완료됨");
        assert_eq!(
            SubmissionStatus::for_admin_table("submitted", "waiting").admin_label(),
            "평가대기"
        );
        assert_eq!(
            SubmissionStatus::for_admin_table("grading", "pending").admin_label(),
            "대기중"
        );
        assert_eq!(SubmissionStatus::Submitted.admin_label(), "제출됨");
    }

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(SubmissionStatus::parse("COMPLETED"), SubmissionStatus::Completed);
        assert_eq!(SubmissionStatus::parse("Grading").label(), "평가 중");
        assert_eq!(SubmissionStatus::parse("queued").label(), "queued");
    }

    #[test]
    fn display_score_falls_back_to_completed_evaluation() {
        let mut detail: SubmissionDto = serde_json::from_str(&item_json(9)).unwrap();
        assert_eq!(detail.display_score(), None);

        detail.evaluation_result = Some(EvaluationResultDto {
            status: "completed".to_string(),
            total_score: Some(85.0),
            ..EvaluationResultDto::default()
        });
        assert_eq!(detail.display_score(), Some(85.0));

        detail.score = Some(90.0);
        assert_eq!(detail.display_score(), Some(90.0));
    }
}
