//! Error types for absurda
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for absurda operations
///
/// This enum encompasses all possible errors that can occur during
/// generation, configuration loading, credential handling, and
/// history persistence.
#[derive(Error, Debug)]
pub enum AbsurdaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key available from config, stored credentials, or environment
    #[error("No Gemini API key configured. Run `absurda auth <key>` or set GEMINI_API_KEY")]
    MissingCredentials,

    /// Authentication errors (401/403 from the generation service)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Upstream rate limiting (429 from the generation service)
    #[error("Rate limited by the generation service: {0}")]
    RateLimited(String),

    /// Any other provider failure (network errors, 5xx, malformed replies)
    #[error("Provider error: {0}")]
    Provider(String),

    /// A 2xx reply that contained no generated text
    #[error("The generation service returned an empty completion")]
    EmptyCompletion,

    /// Share token errors (unsupported kind, malformed token)
    #[error("Share error: {0}")]
    Share(String),

    /// History storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for absurda operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
