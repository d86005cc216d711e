use crate::{
    client::model::error::ApiError,
    model::{
        admin::{AdminUserDto, AssignRoleDto, CreateUserDto, UpdateUserDto},
        auth::UserRole,
    },
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

pub async fn get_users() -> Result<Vec<AdminUserDto>, ApiError> {
    let response = send_request(get("/api/v1/admin/users")).await?;
    parse_response(response).await
}

pub async fn get_user(user_id: i64) -> Result<AdminUserDto, ApiError> {
    let url = format!("/api/v1/admin/users/{}", user_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_user(payload: CreateUserDto) -> Result<AdminUserDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/v1/admin/users").body(body)).await?;
    parse_response(response).await
}

pub async fn update_user(user_id: i64, payload: UpdateUserDto) -> Result<AdminUserDto, ApiError> {
    let url = format!("/api/v1/admin/users/{}", user_id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_user(user_id: i64) -> Result<(), ApiError> {
    let url = format!("/api/v1/admin/users/{}", user_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn assign_role(user_id: i64, role: UserRole) -> Result<(), ApiError> {
    let body = serialize_json(&AssignRoleDto { user_id, role })?;

    let response = send_request(post("/api/v1/admin/assign-role").body(body)).await?;
    parse_empty_response(response).await
}
