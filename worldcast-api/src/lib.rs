//! worldcast REST API
//!
//! Serves the static world geography tables over HTTP.

pub mod config;
pub mod handlers;

use config::ApiConfig;
use handlers::create_router;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Bind or serve failure
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the HTTP server and serve until shutdown.
pub async fn start_server(config: ApiConfig) -> Result<(), ServerError> {
    info!("Starting worldcast API");
    info!("Bind address: {}", config.bind_addr());

    let app = create_router();

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
