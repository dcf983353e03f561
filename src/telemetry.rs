//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, LogFormat};

/// Filter used when `--verbose` is passed.
const VERBOSE_FILTER: &str = "webhook_api=debug,tower_http=debug,info";

/// Build the log filter: verbose flag wins, then `RUST_LOG` from config.
pub fn build_filter(config: &Config, verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &Config, verbose: bool) {
    let filter = build_filter(config, verbose);

    match config.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }
}
