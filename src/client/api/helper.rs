use crate::{
    client::{
        constant::api_url,
        model::{
            auth::TokenStore,
            error::{expect_success, is_success, ApiError, NO_RESPONSE},
        },
    },
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Attach the stored bearer token, if any
fn authorized(request: Request) -> Request {
    match TokenStore::load() {
        Some(token) => request.header("Authorization", &token.authorization_header()),
        None => request,
    }
}

/// Read the error body once and turn it into an ApiError
async fn error_from_response(status: u64, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    ApiError::from_body(status, &body)
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if is_success(status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from_response(status, response).await)
    }
}

/// Helper function for responses whose success body is not used (204 No Content, 201 Created, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;
    let body = response.text().await.unwrap_or_default();

    expect_success(status, &body)
}

/// Create an authorized GET request for a backend path
pub fn get(path: &str) -> Request {
    authorized(Request::get(&api_url(path)))
}

/// Create an authorized POST request with JSON content type
pub fn post(path: &str) -> Request {
    authorized(Request::post(&api_url(path))).header("Content-Type", "application/json")
}

/// Create an authorized PUT request with JSON content type
pub fn put(path: &str) -> Request {
    authorized(Request::put(&api_url(path))).header("Content-Type", "application/json")
}

/// Create an authorized DELETE request
pub fn delete(path: &str) -> Request {
    authorized(Request::delete(&api_url(path)))
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: NO_RESPONSE,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
