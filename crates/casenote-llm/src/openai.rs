//! OpenAI Provider Implementation
//!
//! Integration with the OpenAI chat completions API. The extraction prompt
//! already carries every instruction the model needs, so each request sends
//! it as a single system-role message.
//!
//! # Examples
//!
//! ```no_run
//! use casenote_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("sk-...", "gpt-4o");
//! ```

use crate::LlmError;
use casenote_domain::traits::{LlmProvider as LlmProviderTrait, LlmResponse};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model for judgment extraction
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default timeout for LLM requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// OpenAI chat completions provider
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    max_retries: u32,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider against the public API
    ///
    /// # Parameters
    ///
    /// - `api_key`: Bearer token for the API
    /// - `model`: Model to use (e.g., "gpt-4o")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Point the provider at a compatible server (proxy, Azure, local)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The model this provider runs
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text using the chat completions API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API rejects the request or the key
    /// - The model is not available
    /// - Rate limits are exhausted across all retries
    /// - The response body does not carry a message
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": [{"role": "system", "content": prompt}],
            "temperature": 0,
        });

        debug!(model = %self.model, "OpenAI request to {}", url);

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    if response.status().is_success() {
                        let resp: serde_json::Value = response.json().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        let content = resp["choices"][0]["message"]["content"]
                            .as_str()
                            .ok_or_else(|| {
                                LlmError::InvalidResponse(
                                    "missing choices[0].message.content".to_string(),
                                )
                            })?;
                        return Ok(content.to_string());
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<LlmResponse, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate(prompt).await })
            .map(|content| LlmResponse::Message { content })
    }
}
