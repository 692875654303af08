use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Model name used for translation (e.g., "translategemma:12b")
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the model service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Source language display name
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Source language ISO code
    #[serde(default = "default_source_code")]
    pub source_code: String,

    /// Target language display name
    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    /// Target language ISO code
    #[serde(default = "default_target_code")]
    pub target_code: String,

    /// Characters per text chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlapping characters between adjacent chunks
    #[serde(default)]
    pub chunk_overlap: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_model() -> String {
    "translategemma:12b".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_source_lang() -> String {
    "English".to_string()
}

fn default_source_code() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "Spanish".to_string()
}

fn default_target_code() -> String {
    "es".to_string()
}

fn default_chunk_size() -> usize {
    1000
}

impl Config {
    /// Validate the configuration for consistency and required values
    ///
    /// Called before any translation starts; the rest of the pipeline may
    /// assume a validated configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }

        if self.endpoint.trim().is_empty() {
            return Err(anyhow!("Service endpoint must not be empty"));
        }
        Url::parse(&self.endpoint)
            .map_err(|e| anyhow!("Invalid service endpoint '{}': {}", self.endpoint, e))?;

        // Validate languages
        language_utils::validate_language_code(&self.source_code)?;
        language_utils::validate_language_code(&self.target_code)?;
        if self.source_lang.trim().is_empty() || self.target_lang.trim().is_empty() {
            return Err(anyhow!("Language names must not be empty"));
        }

        if self.chunk_size == 0 {
            return Err(anyhow!("Chunk size must be greater than zero"));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(anyhow!(
                "Chunk overlap ({}) must be smaller than chunk size ({})",
                self.chunk_overlap,
                self.chunk_size
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            model: default_model(),
            endpoint: default_endpoint(),
            source_lang: default_source_lang(),
            source_code: default_source_code(),
            target_lang: default_target_lang(),
            target_code: default_target_code(),
            chunk_size: default_chunk_size(),
            chunk_overlap: 0,
            log_level: LogLevel::default(),
        }
    }
}
