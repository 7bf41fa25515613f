//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Minimum words per chunk before the chunker closes it
    pub min_chunk_words: usize,

    /// Word budget a chunk buffer may not exceed without a forced split
    pub max_chunk_words: usize,

    /// Maximum time for a single chunk's extraction call (seconds)
    pub extraction_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_chunk_words == 0 {
            return Err("min_chunk_words must be greater than 0".to_string());
        }
        if self.max_chunk_words < self.min_chunk_words {
            return Err("max_chunk_words cannot be less than min_chunk_words".to_string());
        }
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Defaults sized for judgment-length documents
    fn default() -> Self {
        Self {
            min_chunk_words: crate::chunking::DEFAULT_MIN_WORDS,
            max_chunk_words: crate::chunking::DEFAULT_MAX_WORDS,
            extraction_timeout_secs: 120,
        }
    }
}
