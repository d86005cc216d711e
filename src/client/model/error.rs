use crate::model::api::BackendErrorDto;

/// Message used when an error response carries no readable body.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Status for failures that never produced an HTTP response.
pub const NO_RESPONSE: u64 = 0;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Error for a non-2xx response, carrying the backend's message when the
    /// body has one.
    pub fn from_body(status: u64, body: &str) -> Self {
        let message = BackendErrorDto::message_from_body(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                body.to_string()
            }
        });

        Self { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// The backend's own message, or `fallback` when the request never got a
    /// response or the response body explained nothing.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.status == NO_RESPONSE || self.message.is_empty() || self.message == UNKNOWN_ERROR {
            fallback.to_string()
        } else {
            self.message.clone()
        }
    }
}

pub fn is_success(status: u64) -> bool {
    (200..300).contains(&status)
}

/// Outcome of a call whose success body is not used. Any 2xx counts, whatever
/// it carries.
pub fn expect_success(status: u64, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::from_body(status, body))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ApiError::new(400, "Email already registered");
        assert_eq!(err.message_or("회원가입 중 오류가 발생했습니다."), "Email already registered");
    }

    #[test]
    fn fallback_when_backend_said_nothing() {
        let fallback = "An error occurred during login";
        assert_eq!(ApiError::new(500, UNKNOWN_ERROR).message_or(fallback), fallback);
        assert_eq!(
            ApiError::new(NO_RESPONSE, "Failed to send request: offline").message_or(fallback),
            fallback
        );
    }

    #[test]
    fn success_body_is_ignored() {
        let body = r#"{"submission_id": 12, "message": "submitted"}"#;
        assert_eq!(expect_success(201, body), Ok(()));
        assert_eq!(expect_success(200, ""), Ok(()));
        assert_eq!(expect_success(204, "not json"), Ok(()));
    }

    #[test]
    fn error_status_reads_backend_message() {
        let err = expect_success(422, r#"{"detail": "title is required"}"#).unwrap_err();
        assert_eq!(err, ApiError::new(422, "title is required"));

        let err = expect_success(502, "").unwrap_err();
        assert_eq!(err.message, UNKNOWN_ERROR);

        let err = expect_success(500, "Internal Server Error").unwrap_err();
        assert_eq!(err.message, "Internal Server Error");
    }
}
