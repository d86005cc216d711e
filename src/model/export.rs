//! Spreadsheet export of admin submissions.
//!
//! Maps each [`AdminSubmissionDto`] to one row of fourteen columns and tracks
//! which table rows are selected for export.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::model::{
    admin::AdminSubmissionDto,
    format::{compact_date, format_date_time},
};

pub const SHEET_NAME: &str = "제출내역";

const NOT_EVALUATED: &str = "평가 전";
const NO_REPOSITORY: &str = "없음";

/// Header text and column width (in characters), in column order.
pub const COLUMNS: [(&str, f64); 14] = [
    ("제출ID", 10.0),
    ("프로젝트명", 30.0),
    ("팀명", 15.0),
    ("사용자ID", 10.0),
    ("대회명", 15.0),
    ("제출일", 20.0),
    ("상태", 12.0),
    ("평가상태", 12.0),
    ("총점", 10.0),
    ("설명", 50.0),
    ("저장소개수", 12.0),
    ("첫번째저장소", 40.0),
    ("평가항목개수", 12.0),
    ("평가세부점수", 50.0),
];

#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Number(f64),
    Text(String),
}

impl From<&str> for ExportCell {
    fn from(value: &str) -> Self {
        ExportCell::Text(value.to_string())
    }
}

impl From<String> for ExportCell {
    fn from(value: String) -> Self {
        ExportCell::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub cells: Vec<ExportCell>,
}

impl From<&AdminSubmissionDto> for ExportRow {
    fn from(submission: &AdminSubmissionDto) -> Self {
        let evaluation = &submission.evaluation_result;

        // A zero total is reported as not evaluated, matching the grading sheet.
        let total_score = match evaluation.total_score {
            Some(score) if score != 0.0 => ExportCell::Number(score),
            _ => NOT_EVALUATED.into(),
        };

        let criteria_scores = if evaluation.criteria_results.is_empty() {
            NOT_EVALUATED.to_string()
        } else {
            evaluation
                .criteria_results
                .iter()
                .map(|result| format!("{}: {}점", result.name, result.score))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let user_id = match submission.user_id {
            Some(id) => ExportCell::Number(id as f64),
            None => "".into(),
        };

        let first_repository = submission
            .repositories
            .first()
            .map(|repo| repo.repo_url.clone())
            .unwrap_or_else(|| NO_REPOSITORY.to_string());

        Self {
            cells: vec![
                ExportCell::Number(submission.submission_id as f64),
                submission.title.clone().into(),
                submission.team_name.clone().unwrap_or_default().into(),
                user_id,
                submission.competition_name.clone().unwrap_or_default().into(),
                format_date_time(&submission.submitted_at).into(),
                submission.status.clone().into(),
                evaluation.status.clone().into(),
                total_score,
                submission.description.clone().into(),
                ExportCell::Number(submission.repositories.len() as f64),
                first_repository.into(),
                ExportCell::Number(submission.evaluation_criteria.len() as f64),
                criteria_scores.into(),
            ],
        }
    }
}

/// Rows for the selected submissions, in table order.
pub fn selected_rows(submissions: &[AdminSubmissionDto], selection: &SelectionSet) -> Vec<ExportRow> {
    submissions
        .iter()
        .filter(|submission| selection.contains(submission.submission_id))
        .map(ExportRow::from)
        .collect()
}

/// `제출내역_20250607_3건.xlsx`
pub fn export_file_name(date: NaiveDate, count: usize) -> String {
    format!("{}_{}_{}건.xlsx", SHEET_NAME, compact_date(date), count)
}

/// Submission ids checked in the admin table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn set(&mut self, id: i64, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Checks every id when `checked`, otherwise clears the selection.
    pub fn set_all(&mut self, ids: impl IntoIterator<Item = i64>, checked: bool) {
        self.ids.clear();
        if checked {
            self.ids.extend(ids);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids that are not in the refreshed list.
    pub fn retain_existing(&mut self, ids: impl IntoIterator<Item = i64>) {
        let existing: BTreeSet<i64> = ids.into_iter().collect();
        self.ids.retain(|id| existing.contains(id));
    }

    /// True when there is at least one row and every row is selected.
    pub fn all_selected(&self, total: usize) -> bool {
        total > 0 && self.ids.len() == total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::submission::{CriteriaResultDto, EvaluationResultDto, RepositoryDto};

    fn submission(id: i64) -> AdminSubmissionDto {
        AdminSubmissionDto {
            submission_id: id,
            team_name: Some("personal".to_string()),
            title: "On Device AI".to_string(),
            description: "RAG on Ollama".to_string(),
            competition_name: Some("default".to_string()),
            submitted_at: "2025-05-30T14:05:44.942940".to_string(),
            status: "completed".to_string(),
            user_id: Some(9),
            repositories: vec![RepositoryDto {
                kind: "backend".to_string(),
                repo_url: "https://github.com/nowjiin/on-device-ai".to_string(),
            }],
            evaluation_criteria: vec![
                "Technical Excellence & Code Quality".to_string(),
                "Innovation & Market Disruption".to_string(),
            ],
            evaluation_result: EvaluationResultDto {
                status: "completed".to_string(),
                total_score: Some(85.0),
                code_summary: String::new(),
                criteria_results: vec![
                    CriteriaResultDto {
                        name: "Innovation & Market Disruption".to_string(),
                        score: 90.0,
                        feedback: None,
                        improvements: vec![],
                        strengths: vec![],
                        weaknesses: vec![],
                    },
                    CriteriaResultDto {
                        name: "Technical Excellence & Code Quality".to_string(),
                        score: 80.0,
                        feedback: None,
                        improvements: vec![],
                        strengths: vec![],
                        weaknesses: vec![],
                    },
                ],
            },
        }
    }

    #[test]
    fn evaluated_submission_maps_to_all_columns() {
        let row = ExportRow::from(&submission(10));

        assert_eq!(row.cells.len(), COLUMNS.len());
        assert_eq!(row.cells[0], ExportCell::Number(10.0));
        assert_eq!(row.cells[3], ExportCell::Number(9.0));
        assert_eq!(row.cells[5], "2025. 5. 30. 오후 2:05:44".into());
        assert_eq!(row.cells[8], ExportCell::Number(85.0));
        assert_eq!(row.cells[10], ExportCell::Number(1.0));
        assert_eq!(row.cells[11], "https://github.com/nowjiin/on-device-ai".into());
        assert_eq!(row.cells[12], ExportCell::Number(2.0));
        assert_eq!(
            row.cells[13],
            "Innovation & Market Disruption: 90점, Technical Excellence & Code Quality: 80점".into()
        );
    }

    #[test]
    fn unevaluated_submission_uses_placeholders() {
        let mut pending = submission(11);
        pending.repositories.clear();
        pending.evaluation_result = EvaluationResultDto::default();

        let row = ExportRow::from(&pending);

        assert_eq!(row.cells[7], "waiting".into());
        assert_eq!(row.cells[8], "평가 전".into());
        assert_eq!(row.cells[11], "없음".into());
        assert_eq!(row.cells[13], "평가 전".into());
    }

    #[test]
    fn zero_total_counts_as_not_evaluated() {
        let mut zero = submission(12);
        zero.evaluation_result.total_score = Some(0.0);
        assert_eq!(ExportRow::from(&zero).cells[8], "평가 전".into());
    }

    #[test]
    fn only_selected_rows_are_exported_in_table_order() {
        let submissions = vec![submission(3), submission(1), submission(2)];
        let mut selection = SelectionSet::default();
        selection.set(2, true);
        selection.set(3, true);

        let ids: Vec<ExportCell> = selected_rows(&submissions, &selection)
            .into_iter()
            .map(|row| row.cells[0].clone())
            .collect();

        assert_eq!(ids, vec![ExportCell::Number(3.0), ExportCell::Number(2.0)]);
    }

    #[test]
    fn select_all_tracks_row_count() {
        let mut selection = SelectionSet::default();
        assert!(!selection.all_selected(0));

        selection.set_all([10, 11], true);
        assert!(selection.all_selected(2));

        selection.set(11, false);
        assert!(!selection.all_selected(2));
        assert_eq!(selection.len(), 1);

        selection.set_all([10, 11], false);
        assert!(selection.is_empty());
    }

    #[test]
    fn refresh_keeps_surviving_selection() {
        let mut selection = SelectionSet::default();
        selection.set(1, true);
        selection.set(2, true);
        selection.set(5, true);

        let refreshed = vec![submission(1), submission(2), submission(3)];
        selection.retain_existing(refreshed.iter().map(|item| item.submission_id));

        assert!(selection.contains(1));
        assert!(selection.contains(2));
        assert!(!selection.contains(5));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn file_name_contains_date_and_count() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        assert_eq!(export_file_name(date, 3), "제출내역_20250607_3건.xlsx");
    }
}
