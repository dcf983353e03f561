//! HTTP API module for health, webhook, discovery and metrics endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{HealthStatus, RootInfo, WebhookResponse};
pub use routes::create_router;
