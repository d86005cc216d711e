use crate::{
    client::model::error::ApiError,
    model::openai::{ChangeModelDto, OpenAiModelsDto, UsageStatsDto},
};

use super::helper::{
    get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

pub async fn get_models() -> Result<OpenAiModelsDto, ApiError> {
    let response = send_request(get("/api/v1/admin/openai/models")).await?;
    parse_response(response).await
}

pub async fn get_current_model() -> Result<OpenAiModelsDto, ApiError> {
    let response = send_request(get("/api/v1/admin/openai/current-model")).await?;
    parse_response(response).await
}

pub async fn change_model(model_name: String) -> Result<(), ApiError> {
    let body = serialize_json(&ChangeModelDto { model_name })?;

    let response = send_request(put("/api/v1/admin/openai/model").body(body)).await?;
    parse_empty_response(response).await
}

pub async fn get_usage_stats() -> Result<UsageStatsDto, ApiError> {
    let response = send_request(get("/api/v1/admin/openai/usage-stats")).await?;
    parse_response(response).await
}

/// Makes the backend reload its configuration, including the active model
pub async fn clear_config_cache() -> Result<(), ApiError> {
    let response = send_request(post("/api/v1/admin/config/clear-cache")).await?;
    parse_empty_response(response).await
}
