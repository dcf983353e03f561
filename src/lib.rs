//! Minimal webhook receiver API.
//!
//! Serves three JSON endpoints over HTTP:
//!
//! ```text
//! GET  /             route discovery
//! GET  /health       liveness probe
//! POST /api/webhook  log and acknowledge a JSON payload
//! ```
//!
//! Payloads are never validated, stored or forwarded.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers and router
//! - [`metrics`]: Prometheus metrics
//! - [`telemetry`]: Logging setup
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError, WebhookError};
