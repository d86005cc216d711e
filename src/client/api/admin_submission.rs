use crate::{
    client::model::error::ApiError,
    model::admin::{AdminSubmissionDto, GradingQueueDto, SubmissionStatusUpdateDto},
};

use super::helper::{
    get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Every submission with its evaluation result
pub async fn get_submissions() -> Result<Vec<AdminSubmissionDto>, ApiError> {
    let response = send_request(get("/api/v1/admin/submissions")).await?;
    parse_response(response).await
}

pub async fn get_grading_queue() -> Result<GradingQueueDto, ApiError> {
    let response = send_request(get("/api/v1/admin/grading-queue")).await?;
    parse_response(response).await
}

pub async fn start_grading_all() -> Result<(), ApiError> {
    let response = send_request(post("/api/v1/admin/start-grading-all")).await?;
    parse_empty_response(response).await
}

pub async fn start_evaluation() -> Result<(), ApiError> {
    let response = send_request(post("/api/v1/admin/start-evaluation")).await?;
    parse_empty_response(response).await
}

pub async fn update_submission_status(submission_id: i64, status: String) -> Result<(), ApiError> {
    let url = format!("/api/v1/admin/submissions/{}/status", submission_id);
    let body = serialize_json(&SubmissionStatusUpdateDto { status })?;

    let response = send_request(put(&url).body(body)).await?;
    parse_empty_response(response).await
}
