//! Unified error types for the webhook service.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::handlers::WebhookResponse;

/// Unified error type for service startup and operation.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while processing an inbound webhook.
///
/// Every variant is reported to the caller as the same generic 500 body; the
/// detail only reaches the server log.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Request did not declare a JSON content type.
    #[error("unsupported media type: {}", .0.as_deref().unwrap_or("<none>"))]
    UnsupportedMediaType(Option<String>),

    /// Request body could not be read.
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    /// Request body is not valid JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(WebhookResponse::internal_error()),
        )
            .into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_error_messages() {
        let err = WebhookError::UnsupportedMediaType(None);
        assert_eq!(err.to_string(), "unsupported media type: <none>");

        let err = WebhookError::UnsupportedMediaType(Some("text/plain".into()));
        assert_eq!(err.to_string(), "unsupported media type: text/plain");

        let parse = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        assert!(WebhookError::from(parse).to_string().starts_with("invalid json:"));
    }

    #[test]
    fn webhook_error_renders_500() {
        let response = WebhookError::UnsupportedMediaType(None).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
