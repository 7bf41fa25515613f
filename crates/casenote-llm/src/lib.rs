//! Casenote LLM Provider Layer
//!
//! Pluggable backends implementing the `LlmProvider` trait from
//! `casenote-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//! - `OpenAiProvider`: OpenAI chat completions API
//!
//! Callers that only know the backend at runtime go through
//! [`ProviderConfig::build`], which yields an [`LlmClient`] dispatching to
//! the configured provider.
//!
//! # Examples
//!
//! ```
//! use casenote_llm::MockProvider;
//! use casenote_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("{\"rulings\": [\"Appeal allowed.\"]}");
//! let response = provider.generate("test prompt").unwrap();
//! assert_eq!(response.content(), "{\"rulings\": [\"Appeal allowed.\"]}");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod ollama;
pub mod openai;

use casenote_domain::traits::{LlmProvider as LlmProviderTrait, LlmResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use config::{LlmClient, ProviderConfig, ProviderKind};
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key configured for a backend that requires one
    #[error("Missing API key for {0}")]
    MissingApiKey(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-scripted responses in call order without making any network
/// calls. Extraction runs one call per chunk, so a scripted queue lets a test
/// shape the outcome of each chunk independently; once the queue is empty the
/// provider falls back to its default response.
///
/// Clones share the script and the call counter.
///
/// # Examples
///
/// ```
/// use casenote_llm::MockProvider;
/// use casenote_domain::traits::LlmProvider;
///
/// let provider = MockProvider::default();
/// provider.push_response("{\"citations\": [\"X v. Y, 2020\"]}");
/// provider.push_error("model offline");
///
/// assert!(provider.generate("first chunk").is_ok());
/// assert!(provider.generate("second chunk").is_err());
/// // Script exhausted, default response from here on.
/// assert_eq!(provider.generate("third chunk").unwrap().content(), "{}");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful response for the next unscripted call
    pub fn push_response(&self, response: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue an error for the next unscripted call
    pub fn push_error(&self, message: impl Into<String>) {
        self.script.lock().unwrap().push_back(Err(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        // An empty JSON object parses as a valid, empty extraction payload.
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _prompt: &str) -> Result<LlmResponse, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        match self.script.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(LlmResponse::Text(response)),
            Some(Err(message)) => Err(LlmError::Other(message)),
            None => Ok(LlmResponse::Text(self.default_response.clone())),
        }
    }
}
