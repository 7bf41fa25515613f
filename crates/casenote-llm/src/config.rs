//! Provider selection and construction.
//!
//! Deployments pick their backend in configuration, so the server and CLI
//! construct providers from a [`ProviderConfig`] rather than naming a
//! concrete type. [`ProviderConfig::build`] resolves defaults and returns an
//! [`LlmClient`] that dispatches to the selected backend.

use crate::{ollama, openai, LlmError, MockProvider, OllamaProvider, OpenAiProvider};
use casenote_domain::traits::{LlmProvider as LlmProviderTrait, LlmResponse};
use serde::{Deserialize, Serialize};

/// Which LLM backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Local Ollama instance
    Ollama,
    /// OpenAI chat completions API
    OpenAi,
    /// Deterministic mock, for tests and dry runs
    Mock,
}

/// Configuration for constructing an LLM provider
///
/// Every field except `provider` is optional; unset fields fall back to the
/// backend's defaults. For OpenAI, a missing `api_key` falls back to the
/// `OPENAI_API_KEY` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Backend to construct
    pub provider: ProviderKind,
    /// Model name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Endpoint or base URL override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// API key, for backends that require one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Retry attempt override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Ollama,
            model: None,
            endpoint: None,
            api_key: None,
            max_retries: None,
        }
    }
}

impl ProviderConfig {
    /// The model name [`build`](Self::build) would select, for display and
    /// run metadata.
    pub fn model_name(&self) -> String {
        match (&self.model, self.provider) {
            (Some(model), _) => model.clone(),
            (None, ProviderKind::Ollama) => ollama::DEFAULT_MODEL.to_string(),
            (None, ProviderKind::OpenAi) => openai::DEFAULT_MODEL.to_string(),
            (None, ProviderKind::Mock) => "mock".to_string(),
        }
    }

    /// Construct the configured provider.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingApiKey` when the OpenAI backend is selected
    /// without a key in the config or the environment.
    pub fn build(&self) -> Result<LlmClient, LlmError> {
        match self.provider {
            ProviderKind::Ollama => {
                let mut provider = match &self.endpoint {
                    Some(endpoint) => OllamaProvider::new(endpoint, self.model_name()),
                    None => OllamaProvider::default_endpoint(self.model_name()),
                };
                if let Some(max_retries) = self.max_retries {
                    provider = provider.with_max_retries(max_retries);
                }
                Ok(LlmClient::Ollama(provider))
            }
            ProviderKind::OpenAi => {
                let api_key = match &self.api_key {
                    Some(key) => key.clone(),
                    None => std::env::var("OPENAI_API_KEY")
                        .map_err(|_| LlmError::MissingApiKey("OpenAI".to_string()))?,
                };
                let mut provider = OpenAiProvider::new(api_key, self.model_name());
                if let Some(endpoint) = &self.endpoint {
                    provider = provider.with_base_url(endpoint);
                }
                if let Some(max_retries) = self.max_retries {
                    provider = provider.with_max_retries(max_retries);
                }
                Ok(LlmClient::OpenAi(provider))
            }
            ProviderKind::Mock => Ok(LlmClient::Mock(MockProvider::default())),
        }
    }
}

/// A provider chosen at runtime
///
/// Wraps the concrete backends behind one `LlmProvider` implementation so
/// pipeline types stay monomorphic over a single client type.
pub enum LlmClient {
    /// Local Ollama backend
    Ollama(OllamaProvider),
    /// OpenAI backend
    OpenAi(OpenAiProvider),
    /// Canned-response backend
    Mock(MockProvider),
}

impl LlmClient {
    /// The model the wrapped provider runs
    pub fn model(&self) -> &str {
        match self {
            LlmClient::Ollama(provider) => provider.model(),
            LlmClient::OpenAi(provider) => provider.model(),
            LlmClient::Mock(_) => "mock",
        }
    }
}

impl LlmProviderTrait for LlmClient {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<LlmResponse, Self::Error> {
        match self {
            LlmClient::Ollama(provider) => LlmProviderTrait::generate(provider, prompt),
            LlmClient::OpenAi(provider) => LlmProviderTrait::generate(provider, prompt),
            LlmClient::Mock(provider) => LlmProviderTrait::generate(provider, prompt),
        }
    }
}
