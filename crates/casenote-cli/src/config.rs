//! Configuration management for the CLI.

use crate::cli::PipelineOverrides;
use crate::error::{CliError, Result};
use casenote_extractor::ExtractorConfig;
use casenote_llm::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// LLM backend the pipeline runs against
    #[serde(default)]
    pub model: ProviderConfig,

    /// Chunking and timeout settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary table
    Table,
    /// Full case note as JSON
    Json,
    /// Minimal output
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".casenote").join("config.toml"))
    }

    /// Load configuration from the default path, or fall back to defaults
    /// when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Fold command-line overrides into the configuration.
    pub fn apply_overrides(&mut self, overrides: &PipelineOverrides) {
        if let Some(provider) = overrides.provider {
            self.model.provider = provider.into();
        }
        if let Some(model) = &overrides.model {
            self.model.model = Some(model.clone());
        }
        if let Some(endpoint) = &overrides.endpoint {
            self.model.endpoint = Some(endpoint.clone());
        }
        if let Some(api_key) = &overrides.api_key {
            self.model.api_key = Some(api_key.clone());
        }
        if let Some(min) = overrides.min_chunk_words {
            self.extractor.min_chunk_words = min;
        }
        if let Some(max) = overrides.max_chunk_words {
            self.extractor.max_chunk_words = max;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.extractor.extraction_timeout_secs = timeout;
        }
    }

    /// Validate the effective configuration after overrides.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
