//! Configuration management for the casenote server

use casenote_extractor::ExtractorConfig;
use casenote_llm::ProviderConfig;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file
    #[error("Failed to parse config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration
///
/// The `[model]` and `[extractor]` sections are optional; when omitted the
/// server runs against a local Ollama instance with the default word band.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    pub bind_address: String,
    /// Port to bind the HTTP server to
    pub bind_port: u16,
    /// LLM backend the extractor runs against
    #[serde(default)]
    pub model: ProviderConfig,
    /// Chunking and timeout settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.extractor.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            model: ProviderConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }

    /// Get the full bind address as a string
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
