//! Configuration management for absurda
//!
//! This module handles loading, parsing, and validating configuration
//! from an optional YAML file, with environment fallbacks for the API key.

use crate::error::{AbsurdaError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for absurda
///
/// Every field has a sensible default; a missing config file is not an
/// error, so the binary works out of the box with just an API key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// History store settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Share link settings
    #[serde(default)]
    pub share: ShareConfig,
}

/// Gemini provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model to use for generation
    #[serde(default = "default_model")]
    pub model: String,

    /// Optional API base URL (useful for tests and local mocks)
    ///
    /// When set, this base replaces the public Gemini endpoint, which
    /// allows tests to point the provider at a mock server.
    #[serde(default)]
    pub api_base: Option<String>,

    /// API key override from the config file
    ///
    /// Takes precedence over the stored credential and the environment.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: None,
            api_key: None,
        }
    }
}

/// History store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Override for the data directory holding the per-kind history files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Share link configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL used when rendering full share links
    ///
    /// The web app derives this from `window.location`; a CLI has no
    /// origin, so without this setting `share` prints only the token.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file yields the default configuration; a present but
    /// malformed file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| AbsurdaError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Config = serde_yaml::from_str(&contents).map_err(AbsurdaError::Yaml)?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the model name is empty or a configured API key
    /// does not look like a Gemini key.
    pub fn validate(&self) -> Result<()> {
        if self.provider.model.trim().is_empty() {
            return Err(AbsurdaError::Config("provider.model must not be empty".into()).into());
        }

        if let Some(key) = &self.provider.api_key {
            if !validate_api_key(key) {
                return Err(AbsurdaError::Config(
                    "provider.api_key does not look like a Gemini API key".into(),
                )
                .into());
            }
        }

        Ok(())
    }

    /// Resolve the API key to use for generation
    ///
    /// Priority: config file override, then the stored credential, then
    /// the `GEMINI_API_KEY` environment variable. A user-entered key wins
    /// over the environment, matching the original app's behavior.
    pub fn resolve_api_key(&self, stored: Option<String>) -> Option<String> {
        if let Some(key) = &self.provider.api_key {
            return Some(key.clone());
        }
        if let Some(key) = stored {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

/// Check whether a string looks like a Gemini API key
///
/// Gemini keys start with `AIza` and are longer than 30 characters.
pub fn validate_api_key(api_key: &str) -> bool {
    let trimmed = api_key.trim();
    if trimmed.len() <= 30 {
        return false;
    }
    // The pattern is a compile-time constant, so unwrap cannot fail.
    let re = Regex::new(r"^AIza[A-Za-z0-9_-]+$").unwrap();
    re.is_match(trimmed)
}
