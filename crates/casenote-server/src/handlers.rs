//! HTTP request handlers for the casenote server

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use casenote_domain::JudgmentRecord;
use casenote_extractor::JudgmentExtractor;
use casenote_llm::LlmClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Extraction pipeline shared across requests
    pub extractor: Arc<JudgmentExtractor<LlmClient>>,
    /// Client used to download judgment documents
    pub http: reqwest::Client,
}

/// Request to process a judgment document
#[derive(Debug, Deserialize)]
pub struct ProcessJudgmentRequest {
    /// Link to the judgment text, typically a presigned S3 URL
    pub s3_link: Option<String>,
}

/// Response for a processed judgment
#[derive(Debug, Serialize)]
pub struct ProcessJudgmentResponse {
    /// Aggregated record extracted from the document
    pub processed_data: JudgmentRecord,
    /// Number of chunks the document was split into
    pub chunks: usize,
    /// Number of chunks whose extraction failed
    pub failed_chunks: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Model the extractor runs against
    pub model: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request did not include a document link
    MissingLink,
    /// Document could not be downloaded
    Download(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingLink => {
                (StatusCode::BAD_REQUEST, "No S3 link provided".to_string())
            }
            AppError::Download(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Failed to download file: {}", msg),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /process-judgment - Download a judgment document and extract its components
pub async fn process_judgment(
    State(state): State<AppState>,
    Json(request): Json<ProcessJudgmentRequest>,
) -> Result<Json<ProcessJudgmentResponse>, AppError> {
    let link = request
        .s3_link
        .filter(|link| !link.is_empty())
        .ok_or(AppError::MissingLink)?;

    info!("Downloading judgment document");
    let response = state
        .http
        .get(&link)
        .send()
        .await
        .map_err(|e| AppError::Download(e.to_string()))?;

    if !response.status().is_success() {
        warn!("Document download returned HTTP {}", response.status());
        return Err(AppError::Download(format!("HTTP {}", response.status())));
    }

    let text = response
        .text()
        .await
        .map_err(|e| AppError::Download(e.to_string()))?;

    let result = state.extractor.process(&text).await;
    info!(
        "Processed judgment: {} chunks, {} failed",
        result.metadata.chunk_count,
        result.failures.len()
    );

    Ok(Json(ProcessJudgmentResponse {
        processed_data: result.record,
        chunks: result.metadata.chunk_count,
        failed_chunks: result.failures.len(),
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        model: state.extractor.model_name().to_string(),
    })
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/process-judgment", post(process_judgment))
        .route("/health", get(health_check))
        .with_state(state)
}
