use crate::{
    client::model::error::ApiError,
    model::auth::{LoginDto, RegisterDto, RoleDto, TokenDto},
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

pub async fn login(email: String, password: String) -> Result<TokenDto, ApiError> {
    let body = serialize_json(&LoginDto { email, password })?;

    let response = send_request(post("/api/v1/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn register(payload: RegisterDto) -> Result<TokenDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/v1/auth/register").body(body)).await?;
    parse_response(response).await
}

/// Account and role of the stored token's owner
pub async fn get_role() -> Result<RoleDto, ApiError> {
    let response = send_request(get("/api/v1/auth/get_role")).await?;
    parse_response(response).await
}
