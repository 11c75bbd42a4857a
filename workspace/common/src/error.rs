use serde_json::Value;
use thiserror::Error;
use tracing::error;

/// Message used when a failed response carries no usable explanation.
pub const GENERIC_REQUEST_FAILURE: &str = "Request failed";

/// Error types for talking to the users API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure, undecodable body, or non-success status.
    /// The payload is the text shown to the operator.
    #[error("{0}")]
    RequestFailed(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed(msg) => msg,
        }
    }

    /// Builds the error for a non-success response from its raw body.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let msg = error_message_from_body(body);
        error!(status, %msg, "API responded with an error");
        ApiError::RequestFailed(msg)
    }

    /// Wraps a lower-level failure (network, decoding) keeping its message.
    pub fn from_cause(cause: impl std::fmt::Display) -> Self {
        let msg = cause.to_string();
        error!(%msg, "API request did not complete");
        if msg.trim().is_empty() {
            ApiError::RequestFailed(GENERIC_REQUEST_FAILURE.to_string())
        } else {
            ApiError::RequestFailed(msg)
        }
    }
}

/// Picks the `message` field of an error body, then `error`, else the
/// generic failure text. Non-JSON bodies fall through to the generic text.
pub fn error_message_from_body(body: &str) -> String {
    let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    ["message", "error"]
        .iter()
        .filter_map(|key| json.get(key).and_then(Value::as_str))
        .find(|msg| !msg.is_empty())
        .unwrap_or(GENERIC_REQUEST_FAILURE)
        .to_string()
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let body = r#"{"message":"Users unavailable","error":"E_DOWN"}"#;
        assert_eq!(error_message_from_body(body), "Users unavailable");
    }

    #[test]
    fn test_error_field_used_without_message() {
        assert_eq!(error_message_from_body(r#"{"error":"Forbidden"}"#), "Forbidden");
        assert_eq!(error_message_from_body(r#"{"message":"","error":"Forbidden"}"#), "Forbidden");
    }

    #[test]
    fn test_fallback_for_unusable_bodies() {
        assert_eq!(error_message_from_body(""), GENERIC_REQUEST_FAILURE);
        assert_eq!(error_message_from_body("<html>502</html>"), GENERIC_REQUEST_FAILURE);
        assert_eq!(error_message_from_body(r#"{"message":42}"#), GENERIC_REQUEST_FAILURE);
        assert_eq!(error_message_from_body("[]"), GENERIC_REQUEST_FAILURE);
    }

    #[test]
    fn test_display_is_bare_message() {
        let err = ApiError::from_error_body(500, r#"{"message":"boom"}"#);
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_from_cause_keeps_underlying_message() {
        let err = ApiError::from_cause("Network down");
        assert_eq!(err, ApiError::RequestFailed("Network down".into()));
        assert_eq!(ApiError::from_cause("  ").message(), GENERIC_REQUEST_FAILURE);
    }
}
