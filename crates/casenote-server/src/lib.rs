//! # Casenote Server
//!
//! HTTP front end for the judgment extraction pipeline. The server accepts a
//! link to a judgment document, downloads the text, runs it through the
//! chunking and extraction pipeline, and returns the aggregated record.
//!
//! ## Endpoints
//!
//! - `POST /process-judgment` - Download and process a judgment document
//! - `GET /health` - Health check
//!
//! ## Usage
//!
//! ```bash
//! casenote-server --config config.toml
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

pub use config::ServerConfig;

use handlers::{create_router, AppState};

use casenote_extractor::JudgmentExtractor;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Provider construction failed
    #[error("Provider error: {0}")]
    Provider(#[from] casenote_llm::LlmError),

    /// The listen address could not be bound
    #[error("Failed to bind server address: {0}")]
    Bind(#[from] std::io::Error),

    /// Serving failed after startup
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the extraction server with the given configuration
///
/// Builds the configured provider, wires it into a [`JudgmentExtractor`],
/// and serves the HTTP API until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting casenote server");
    info!("Extraction model: {}", config.model.model_name());

    let client = config.model.build()?;
    let extractor = JudgmentExtractor::new(client, config.extractor.clone())
        .with_model_name(config.model.model_name());

    let state = AppState {
        extractor: Arc::new(extractor),
        http: reqwest::Client::new(),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
