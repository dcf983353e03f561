//! Webhook receiver API entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};

use webhook_api::api::create_router;
use webhook_api::config::Config;
use webhook_api::metrics;
use webhook_api::telemetry::init_logging;
use webhook_api::utils::shutdown_signal;

/// Health probe and webhook receiver HTTP service.
#[derive(Parser, Debug)]
#[command(name = "webhook-api")]
#[command(about = "Minimal HTTP service with a health probe and a webhook receiver")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Load and print the effective configuration.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // An invalid PORT aborts startup here
    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config, args.verbose).await,
    }
}

/// Print the effective configuration.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("WEBHOOK API - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  Bind Address: {}", config.bind_addr());
    println!("  Log Filter:   {}", config.rust_log);
    println!("  Log Format:   {:?}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config, verbose: bool) -> anyhow::Result<()> {
    init_logging(&config, verbose);
    metrics::init_metrics()?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
