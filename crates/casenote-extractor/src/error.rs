//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur while extracting one chunk
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Extraction timeout
    #[error("Extraction timeout")]
    Timeout,

    /// Model response was not the expected JSON shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}
