//! Development helpers that seed the backend with sample data.

use crate::client::model::error::ApiError;

use super::helper::{parse_empty_response, post, send_request};

pub async fn create_test_users() -> Result<(), ApiError> {
    let response = send_request(post("/api/v1/test/test-data/users")).await?;
    parse_empty_response(response).await
}

pub async fn create_test_submissions() -> Result<(), ApiError> {
    let response = send_request(post("/api/v1/test/test-data/submissions")).await?;
    parse_empty_response(response).await
}
