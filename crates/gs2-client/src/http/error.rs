/*
[INPUT]:  Error sources (HTTP status, transport, serialization, credentials)
[OUTPUT]: Structured error types carrying the decoded server error payload
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Decoded error payload returned by the server
///
/// Renders as its compact JSON form.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPayload(pub Value);

impl ErrorPayload {
    /// Payload used when no response is available or the status is unknown
    pub fn message(message: impl Into<String>) -> Self {
        Self(serde_json::json!({ "message": message.into() }))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Value> for ErrorPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Main error type for the GS2 client
#[derive(Error, Debug)]
pub enum Gs2Error {
    /// 400
    #[error("{0}")]
    BadRequest(ErrorPayload),

    /// 401
    #[error("{0}")]
    Unauthorized(ErrorPayload),

    /// 402
    #[error("{0}")]
    QuotaExceeded(ErrorPayload),

    /// 404
    #[error("{0}")]
    NotFound(ErrorPayload),

    /// 409
    #[error("{0}")]
    Conflict(ErrorPayload),

    /// 500, unknown statuses and transport failures with no response
    #[error("{0}")]
    InternalServerError(ErrorPayload),

    /// 502
    #[error("{0}")]
    BadGateway(ErrorPayload),

    /// 503
    #[error("{0}")]
    ServiceUnavailable(ErrorPayload),

    /// 504
    #[error("{0}")]
    RequestTimeout(ErrorPayload),

    /// POST/PUT issued without a body
    #[error("request body is required")]
    MissingBody,

    /// Client secret is not valid base64
    #[error("Invalid client secret: {0}")]
    InvalidSecret(#[source] base64::DecodeError),

    /// Header name or value cannot be sent
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Gs2Error {
    /// Build the error matching an HTTP status
    ///
    /// Statuses outside the known set become `InternalServerError`.
    pub fn from_status(status: StatusCode, payload: ErrorPayload) -> Self {
        match status.as_u16() {
            400 => Gs2Error::BadRequest(payload),
            401 => Gs2Error::Unauthorized(payload),
            402 => Gs2Error::QuotaExceeded(payload),
            404 => Gs2Error::NotFound(payload),
            409 => Gs2Error::Conflict(payload),
            502 => Gs2Error::BadGateway(payload),
            503 => Gs2Error::ServiceUnavailable(payload),
            504 => Gs2Error::RequestTimeout(payload),
            _ => Gs2Error::InternalServerError(payload),
        }
    }

    /// HTTP status this error stands for, if any
    pub fn status(&self) -> Option<StatusCode> {
        let status = match self {
            Gs2Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Gs2Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Gs2Error::QuotaExceeded(_) => StatusCode::PAYMENT_REQUIRED,
            Gs2Error::NotFound(_) => StatusCode::NOT_FOUND,
            Gs2Error::Conflict(_) => StatusCode::CONFLICT,
            Gs2Error::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Gs2Error::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Gs2Error::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Gs2Error::RequestTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => return None,
        };
        Some(status)
    }

    /// Decoded server error payload, if this error carries one
    pub fn errors(&self) -> Option<&Value> {
        match self {
            Gs2Error::BadRequest(payload)
            | Gs2Error::Unauthorized(payload)
            | Gs2Error::QuotaExceeded(payload)
            | Gs2Error::NotFound(payload)
            | Gs2Error::Conflict(payload)
            | Gs2Error::InternalServerError(payload)
            | Gs2Error::BadGateway(payload)
            | Gs2Error::ServiceUnavailable(payload)
            | Gs2Error::RequestTimeout(payload) => Some(payload.value()),
            _ => None,
        }
    }

    /// Check if the error is worth retrying
    ///
    /// The client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Gs2Error::InternalServerError(_)
                | Gs2Error::BadGateway(_)
                | Gs2Error::ServiceUnavailable(_)
                | Gs2Error::RequestTimeout(_)
        )
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Gs2Error::Unauthorized(_) | Gs2Error::InvalidSecret(_))
    }
}

/// Result type alias for GS2 operations
pub type Result<T> = std::result::Result<T, Gs2Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_is_payload_json() {
        let err = Gs2Error::BadRequest(ErrorPayload(json!({ "a": "b" })));
        assert_eq!(err.to_string(), r#"{"a":"b"}"#);
    }

    #[test]
    fn test_from_status_unknown_is_internal() {
        let err = Gs2Error::from_status(StatusCode::IM_A_TEAPOT, ErrorPayload::message("x"));
        assert!(matches!(err, Gs2Error::InternalServerError(_)));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_status_roundtrip() {
        for code in [400u16, 401, 402, 404, 409, 500, 502, 503, 504] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = Gs2Error::from_status(status, ErrorPayload(Value::Null));
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_local_errors_have_no_status() {
        assert_eq!(Gs2Error::MissingBody.status(), None);
        assert_eq!(Gs2Error::MissingBody.errors(), None);
        assert_eq!(
            Gs2Error::MissingBody.to_string(),
            "request body is required"
        );
    }

    #[test]
    fn test_error_retryable() {
        assert!(Gs2Error::ServiceUnavailable(ErrorPayload(Value::Null)).is_retryable());
        assert!(!Gs2Error::Conflict(ErrorPayload(Value::Null)).is_retryable());
        assert!(!Gs2Error::MissingBody.is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(Gs2Error::Unauthorized(ErrorPayload(Value::Null)).is_auth_error());
        assert!(!Gs2Error::NotFound(ErrorPayload(Value::Null)).is_auth_error());
    }

    #[test]
    fn test_errors_accessor() {
        let err = Gs2Error::NotFound(ErrorPayload::message("gone"));
        assert_eq!(err.errors(), Some(&json!({ "message": "gone" })));
    }
}
