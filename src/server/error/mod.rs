//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error of the server. It wraps configuration and
//! upstream failures and implements `IntoResponse` so handlers can return it
//! directly.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The backend could not be reached or its response could not be read.
    ///
    /// Results in 502 Bad Gateway.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ReqwestErr(err) => {
                tracing::error!("Backend request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Backend unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_keeps_its_message() {
        let response = AppError::BadRequest("Invalid path".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_errors_are_internal() {
        let err = AppError::from(ConfigError::MissingEnvVar("SNAPCODE_BACKEND_URL".to_string()));
        assert_eq!(err.to_string(), "Missing required environment variable: SNAPCODE_BACKEND_URL");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
