/*
[INPUT]:  HTTP status code and raw response body
[OUTPUT]: Decoded JSON on success, typed Gs2Error otherwise
[POS]:    HTTP layer - response classification shared by every call path
[UPDATE]: When status mapping or error envelope format changes
*/

use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

use crate::http::{ErrorPayload, Gs2Error, Result};

/// Map a response to its decoded body or the matching error
///
/// Only 200 counts as success; every other status is an error.
pub fn classify(status: StatusCode, body: &[u8]) -> Result<Value> {
    match status.as_u16() {
        200 => decode_success(body),
        400 | 401 | 402 | 404 | 409 | 500 | 502 | 503 | 504 => {
            Err(Gs2Error::from_status(status, decode_error_payload(body)))
        }
        code => {
            warn!(status = code, "unexpected response status");
            Err(Gs2Error::InternalServerError(ErrorPayload::message(
                format!("[{code}] unknown error"),
            )))
        }
    }
}

fn decode_success(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Unwrap the error envelope
///
/// The server sends `{"message": "<json string>"}`, so `message` is decoded
/// a second time. Anything that does not fit that shape is kept as-is.
pub fn decode_error_payload(body: &[u8]) -> ErrorPayload {
    let envelope: Value = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(_) => return ErrorPayload(Value::String(String::from_utf8_lossy(body).into_owned())),
    };

    match envelope.get("message") {
        Some(Value::String(inner)) => ErrorPayload(
            serde_json::from_str(inner).unwrap_or_else(|_| Value::String(inner.clone())),
        ),
        Some(message) => ErrorPayload(message.clone()),
        None => ErrorPayload(envelope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const ERROR_BODY: &str = r#"{"message":"{\"a\":\"b\"}"}"#;

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn test_success_decodes_body() {
        let value = classify(status(200), br#"{"a":1}"#).unwrap();
        assert_eq!(value, json!({ "a": 1 }));
    }

    #[test]
    fn test_success_empty_body_is_null() {
        assert_eq!(classify(status(200), b"").unwrap(), Value::Null);
    }

    #[test]
    fn test_success_invalid_json() {
        let err = classify(status(200), b"not json").unwrap_err();
        assert!(matches!(err, Gs2Error::Serialization(_)));
    }

    #[test]
    fn test_bad_request_double_decodes_message() {
        let err = classify(status(400), ERROR_BODY.as_bytes()).unwrap_err();
        match err {
            Gs2Error::BadRequest(payload) => assert_eq!(payload.0, json!({ "a": "b" })),
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[rstest]
    #[case(401, "Unauthorized")]
    #[case(402, "QuotaExceeded")]
    #[case(404, "NotFound")]
    #[case(409, "Conflict")]
    #[case(500, "InternalServerError")]
    #[case(502, "BadGateway")]
    #[case(503, "ServiceUnavailable")]
    #[case(504, "RequestTimeout")]
    fn test_status_mapping(#[case] code: u16, #[case] variant: &str) {
        let err = classify(status(code), ERROR_BODY.as_bytes()).unwrap_err();
        assert!(format!("{err:?}").starts_with(variant), "{code} -> {err:?}");
        assert_eq!(err.errors(), Some(&json!({ "a": "b" })));
    }

    #[rstest]
    #[case(418)]
    #[case(201)]
    #[case(429)]
    fn test_unknown_status(#[case] code: u16) {
        let err = classify(status(code), ERROR_BODY.as_bytes()).unwrap_err();
        let expected = format!("[{code}] unknown error");
        match err {
            Gs2Error::InternalServerError(payload) => {
                assert_eq!(payload.0, json!({ "message": expected }))
            }
            other => panic!("Expected InternalServerError, got {other:?}"),
        }
    }

    #[test]
    fn test_error_payload_renders_as_json() {
        let err = classify(status(404), ERROR_BODY.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), r#"{"a":"b"}"#);
    }

    #[test]
    fn test_error_payload_fallbacks() {
        assert_eq!(
            decode_error_payload(br#"{"message":"plain text"}"#).0,
            json!("plain text")
        );
        assert_eq!(
            decode_error_payload(br#"{"message":{"a":1}}"#).0,
            json!({ "a": 1 })
        );
        assert_eq!(
            decode_error_payload(br#"{"errors":[]}"#).0,
            json!({ "errors": [] })
        );
        assert_eq!(decode_error_payload(b"Bad Gateway").0, json!("Bad Gateway"));
    }
}
