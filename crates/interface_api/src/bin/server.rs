//! Insurance Dashboard - API Server Binary
//!
//! This binary starts the HTTP API server for the insurance dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin insurance-dashboard
//!
//! # Run with environment variables
//! DASHBOARD_PORT=9090 DASHBOARD_DATA_DIR=/srv/dashboard cargo run --bin insurance-dashboard
//! ```
//!
//! # Environment Variables
//!
//! * `DASHBOARD_HOST` - Server host (default: 0.0.0.0)
//! * `DASHBOARD_PORT` - Server port (default: 8080)
//! * `DASHBOARD_DATA_DIR` - Directory holding the JSON data files (default: data)
//! * `DASHBOARD_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `DASHBOARD_TIMEZONE` - IANA timezone for monthly reports (default: UTC)
//! * `DASHBOARD_RISK__MAX_RECENT_CLAIMS` - High-risk claim count threshold (default: 3)
//! * `DASHBOARD_RISK__MAX_CLAIM_RATIO` - High-risk claim ratio threshold (default: 0.8)

use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_store::{JsonFileBackend, RecordStore, StorageBackend};
use interface_api::{config::AppConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, opens the record store,
/// and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_dir = %config.data_dir.display(),
        timezone = %config.timezone.0.name(),
        "Starting Insurance Dashboard API Server"
    );

    let backend: Box<dyn StorageBackend> = Box::new(JsonFileBackend::new(&config.data_dir));
    let store = RecordStore::open(backend);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address '{}'", config.server_addr()))?;

    let app = create_router(AppState::new(store, config));

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from `DASHBOARD_*` environment variables.
///
/// Missing variables fall back to defaults; malformed ones are an error.
fn load_config() -> anyhow::Result<AppConfig> {
    let config = AppConfig::from_env().context("failed to read configuration")?;
    config.validate()?;
    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
