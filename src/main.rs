//! Fixture HTTP server binary.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::Listener ──▶ http::HttpServer ──▶ tower layers
//!                                                              │
//!                                                              ▼
//!     Client Response                                   fixtures::catalog
//!     ◀──────────────────────────────────────────────── (canned responses)
//!
//!     Cross-cutting: config │ observability │ lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

use fixture_server::lifecycle::{signals, startup, Shutdown};
use fixture_server::net::Listener;
use fixture_server::observability::{logging, metrics};
use fixture_server::{HttpServer, ServerError};

#[derive(Parser)]
#[command(name = "fixture-server")]
#[command(about = "HTTP fixture server for exercising client behavior", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level, overriding the configuration
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();

    let overrides = startup::Overrides {
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = startup::resolve_config(cli.config.as_deref(), &overrides)?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        "fixture-server starting"
    );

    if config.observability.metrics_enabled {
        // Validation has already checked the address.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr)?;
        }
    }

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
