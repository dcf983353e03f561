//! Prometheus metrics for request latency and webhook throughput.

use std::sync::OnceLock;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::Result;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Webhooks accepted counter metric name.
pub const METRIC_WEBHOOKS_RECEIVED: &str = "webhooks_received_total";
/// Webhooks rejected counter metric name.
pub const METRIC_WEBHOOKS_FAILED: &str = "webhooks_failed_total";

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup.
pub fn init_metrics() -> Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    if METRICS_HANDLE.set(handle).is_err() {
        debug!("Metrics recorder already initialized");
    }

    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(
        METRIC_WEBHOOKS_RECEIVED,
        "Total number of webhooks received successfully"
    );
    describe_counter!(
        METRIC_WEBHOOKS_FAILED,
        "Total number of webhooks that failed processing"
    );

    debug!("Metrics initialized");
    Ok(())
}

/// Render all metrics in the Prometheus text format.
pub fn render() -> String {
    METRICS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record HTTP request latency and count the request.
pub fn record_http_latency(start: Instant, endpoint: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment webhooks received counter.
pub fn inc_webhooks_received() {
    counter!(METRIC_WEBHOOKS_RECEIVED).increment(1);
}

/// Increment webhooks failed counter.
pub fn inc_webhooks_failed() {
    counter!(METRIC_WEBHOOKS_FAILED).increment(1);
}
