//! Greeting demo server.
//!
//! ```text
//!     Client Request
//!     ─────────────▶ request id ─▶ trace ─▶ timeout ─▶ router
//!                                                         │
//!                        ┌────────────────┬───────────────┼──────────────────┐
//!                        ▼                ▼               ▼                  ▼
//!                       GET /        GET /SayHello   GET /SayHello2/{n}  GET /searchArtist/{a}
//!                    "Hello World"        │               │                  │
//!                                         └──▶ dispatcher ◀┘           artist directory
//!                                              (registry)               → view | JSON
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use greeting_server::config::{load_config, validation::validate_config, AppConfig, ConfigError};
use greeting_server::lifecycle::{wait_for_signal, Shutdown};
use greeting_server::observability::{logging, metrics};
use greeting_server::HttpServer;

#[derive(Parser)]
#[command(name = "greeting-server")]
#[command(about = "Demo greeting and artist search web service", long_about = None)]
struct Args {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "greeting-server starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        config_file = ?args.config,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signals");
        }
        signal_shutdown.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
