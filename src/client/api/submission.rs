use crate::{
    client::model::error::ApiError,
    model::submission::{
        is_nothing_submitted, CreateSubmissionDto, MySubmissionsDto, SubmissionDto,
        SubmissionListItemDto,
    },
};

use super::helper::{
    get, parse_empty_response, parse_response, post, send_request, serialize_json,
};

/// Any 2xx means the submission was stored; the body is not read.
pub async fn create_submission(payload: &CreateSubmissionDto) -> Result<(), ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post("/api/v1/submission/submit").body(body)).await?;
    parse_empty_response(response).await
}

/// Own submissions, newest shape of the response normalized to a list.
///
/// The backend answers 404 when nothing was submitted yet, which is reported
/// here as an empty list.
pub async fn get_my_submissions() -> Result<Vec<SubmissionListItemDto>, ApiError> {
    let response = send_request(get("/api/v1/submissions/me")).await?;

    match parse_response::<MySubmissionsDto>(response).await {
        Ok(submissions) => Ok(submissions.into_items()),
        Err(err) if err.is_not_found() && is_nothing_submitted(&err.message) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

pub async fn get_submission_detail(submission_id: i64) -> Result<SubmissionDto, ApiError> {
    let url = format!("/api/v1/submissions/{}", submission_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
