use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body produced by the `server` host when it answers a request itself.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body returned by the grading backend.
///
/// Depending on the endpoint the backend answers with `{"message": ...}`,
/// `{"detail": "..."}`, a validation list under `detail`, or `{"error": ...}`.
#[derive(Debug, Default, Deserialize)]
pub struct BackendErrorDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BackendErrorDto {
    /// Message carried by a raw error body, if the body is a recognized JSON error.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<BackendErrorDto>(body)
            .ok()
            .and_then(BackendErrorDto::into_message)
    }

    /// Picks the most specific human readable message out of the body.
    pub fn into_message(self) -> Option<String> {
        if let Some(message) = self.message {
            return Some(message);
        }

        match self.detail {
            Some(Value::String(detail)) => return Some(detail),
            Some(Value::Array(items)) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect();
                if !messages.is_empty() {
                    return Some(messages.join(", "));
                }
            }
            _ => (),
        }

        self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<BackendErrorDto>(body)
            .unwrap()
            .into_message()
    }

    #[test]
    fn prefers_message_field() {
        assert_eq!(
            parse(r#"{"message": "아직 제출한 프로젝트가 없습니다", "detail": "ignored"}"#),
            Some("아직 제출한 프로젝트가 없습니다".to_string())
        );
    }

    #[test]
    fn reads_string_detail() {
        assert_eq!(
            parse(r#"{"detail": "Incorrect email or password"}"#),
            Some("Incorrect email or password".to_string())
        );
    }

    #[test]
    fn joins_validation_detail() {
        let body = r#"{"detail": [
            {"loc": ["body", 0], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", 1], "msg": "invalid email", "type": "value_error.email"}
        ]}"#;
        assert_eq!(
            parse(body),
            Some("field required, invalid email".to_string())
        );
    }

    #[test]
    fn falls_back_to_error_field() {
        assert_eq!(parse(r#"{"error": "Bad gateway"}"#), Some("Bad gateway".to_string()));
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn non_json_bodies_carry_no_message() {
        assert_eq!(BackendErrorDto::message_from_body("Internal Server Error"), None);
        assert_eq!(BackendErrorDto::message_from_body(""), None);
        assert_eq!(
            BackendErrorDto::message_from_body(r#"{"detail": "Not authenticated"}"#),
            Some("Not authenticated".to_string())
        );
    }
}
