//! HTTP API handlers.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::error::WebhookError;
use crate::metrics;

/// Version reported by the health endpoint.
pub const API_VERSION: &str = "1.0.0";

/// ISO-8601 without offset, microsecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always "healthy".
    pub status: &'static str,
    /// UTC time the check was answered.
    pub timestamp: String,
    /// Service version.
    pub version: &'static str,
}

impl HealthStatus {
    /// Build a health status stamped with the current UTC time.
    pub fn now() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            version: API_VERSION,
        }
    }
}

/// Acknowledgement returned by the webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookResponse {
    /// "ok" or "error".
    pub status: &'static str,
    /// Human readable outcome.
    pub message: &'static str,
}

impl WebhookResponse {
    pub fn received() -> Self {
        Self {
            status: "ok",
            message: "Webhook received successfully",
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: "error",
            message: "Internal server error",
        }
    }
}

/// Root discovery response.
#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub message: &'static str,
    /// Route path to description, serialized in sorted key order.
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

static ROOT_INFO: Lazy<RootInfo> = Lazy::new(|| RootInfo {
    message: "DevOps Interview API",
    endpoints: BTreeMap::from([
        ("/health", "Health check"),
        ("/api/webhook", "Webhook receiver"),
    ]),
});

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::now()))
}

/// Root handler - lists the available endpoints.
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(&*ROOT_INFO))
}

/// Webhook handler - logs the JSON payload and acknowledges receipt.
///
/// Any failure to read or parse the body is logged and answered with a
/// generic 500.
pub async fn webhook(headers: HeaderMap, body: Result<Bytes, BytesRejection>) -> Response {
    match parse_payload(&headers, body) {
        Ok(payload) => {
            info!("Received webhook: {}", payload);
            metrics::inc_webhooks_received();
            (StatusCode::OK, Json(WebhookResponse::received())).into_response()
        }
        Err(e) => {
            error!("Error processing webhook: {}", e);
            metrics::inc_webhooks_failed();
            e.into_response()
        }
    }
}

/// Prometheus scrape handler.
pub async fn prometheus() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::render(),
    )
}

fn parse_payload(
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Value, WebhookError> {
    if !is_json_content_type(headers) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        return Err(WebhookError::UnsupportedMediaType(content_type));
    }

    let body = body?;
    Ok(serde_json::from_slice(&body)?)
}

/// Accepts `application/json` and any `+json` structured syntax suffix.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).unwrap(),
        );
        headers
    }

    #[test]
    fn json_content_types() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with(
            "application/json; charset=utf-8"
        )));
        assert!(is_json_content_type(&headers_with("Application/JSON")));
        assert!(is_json_content_type(&headers_with(
            "application/vnd.github+json"
        )));
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn parse_payload_accepts_any_json_value() {
        let headers = headers_with("application/json");
        let value = parse_payload(&headers, Ok(Bytes::from_static(b"[1, 2, 3]"))).unwrap();
        assert_eq!(value, serde_json::json!([1, 2, 3]));

        let value = parse_payload(&headers, Ok(Bytes::from_static(b"null"))).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn parse_payload_rejects_empty_body() {
        let headers = headers_with("application/json");
        let err = parse_payload(&headers, Ok(Bytes::new())).unwrap_err();
        assert!(matches!(err, WebhookError::Json(_)));
    }

    #[test]
    fn parse_payload_rejects_missing_content_type() {
        let err = parse_payload(&HeaderMap::new(), Ok(Bytes::from_static(b"{}"))).unwrap_err();
        assert!(matches!(err, WebhookError::UnsupportedMediaType(None)));
    }

    #[test]
    fn health_status_fields() {
        let health = HealthStatus::now();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "1.0.0");
        assert!(
            chrono::NaiveDateTime::parse_from_str(&health.timestamp, TIMESTAMP_FORMAT).is_ok()
        );
    }

    #[test]
    fn root_info_lists_endpoints_sorted() {
        let json = serde_json::to_string(&*ROOT_INFO).unwrap();
        assert_eq!(
            json,
            r#"{"message":"DevOps Interview API","endpoints":{"/api/webhook":"Webhook receiver","/health":"Health check"}}"#
        );
    }
}
