//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`ApiError::Api`]) and `ServiceResponse` decoding so
//! the directories stay focused on request construction and response mapping.

use qtag_core::wire::{ResponseEnvelope, ServiceResponse};
use serde_json::Value;

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ApiError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`ApiError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ApiError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read a successful response body as JSON.
pub async fn read_json(resp: reqwest::Response) -> Result<Value, ApiError> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        ApiError::Parse(format!("response is not JSON ({e}): {}", preview(&text)))
    })
}

/// Decode a `{"ServiceResponse": ...}` body and reject non-success codes.
pub fn decode_service_response(body: Value) -> Result<ServiceResponse, ApiError> {
    let envelope: ResponseEnvelope = serde_json::from_value(body)
        .map_err(|e| ApiError::Parse(format!("unexpected ServiceResponse shape: {e}")))?;
    let response = envelope.service_response;
    response
        .check()
        .map_err(|(code, message)| ApiError::Service { code, message })?;
    Ok(response)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

fn preview(text: &str) -> String {
    text.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_keeps_status_and_body() {
        let resp = mock_response(401, "Bad Login/Password");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Bad Login/Password");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn read_json_rejects_xml_body() {
        let resp = mock_response(200, "<ServiceResponse/>");
        let err = read_json(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(msg) if msg.contains("<ServiceResponse/>")));
    }

    #[tokio::test]
    async fn read_json_parses_body() {
        let resp = mock_response(200, r#"{"ServiceResponse":{"responseCode":"SUCCESS"}}"#);
        let body = read_json(resp).await.unwrap();
        assert_eq!(body["ServiceResponse"]["responseCode"], "SUCCESS");
    }

    #[test]
    fn decode_service_response_maps_service_error() {
        let err = decode_service_response(json!({
            "ServiceResponse": {
                "responseCode": "UNAUTHORIZED",
                "responseErrorDetails": { "errorMessage": "no permission" }
            }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Service { ref code, ref message }
                if code == "UNAUTHORIZED" && message == "no permission"
        ));
    }

    #[test]
    fn decode_service_response_rejects_missing_envelope() {
        let err = decode_service_response(json!({ "data": [] })).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
