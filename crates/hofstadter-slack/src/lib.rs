//! Hofstadter Slack Service
//!
//! HTTP front end for the Hofstadter delay estimator. Receives slash-command
//! payloads, parses the parameter text, and replies with a three-point
//! completion estimate. The service is stateless: every request stands
//! alone.

#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod handlers;

use config::SlackConfig;
use handlers::create_router;
use tokio::net::TcpListener;
use tracing::info;

/// Service error
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the slash-command HTTP server
///
/// Initializes tracing, binds the configured address, and serves the
/// estimator endpoint until the process exits.
pub async fn start_server(config: SlackConfig) -> Result<(), ServiceError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Hofstadter delay estimator");
    info!("Bind address: {}", config.bind_addr());

    let app = create_router();

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServiceError::Server(e.to_string()))?;

    Ok(())
}
