//! Test utilities for absurda
//!
//! This module provides common test utilities: temporary directory
//! management, a scripted generator, and a config helper pointing at a
//! temporary data directory.

use crate::config::Config;
use crate::error::{AbsurdaError, Result};
use crate::providers::{GenerationRequest, TextGenerator};
use async_trait::async_trait;
use std::sync::Mutex;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Default config with its history rooted in the given directory
pub fn temp_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.history.data_dir = Some(dir.path().to_path_buf());
    config
}

/// A scripted [`TextGenerator`] that replays canned outcomes
///
/// Each call to `generate` pops the next scripted result; requests are
/// recorded for assertions.
pub struct StubGenerator {
    responses: Mutex<Vec<Result<String>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubGenerator {
    /// Stub that always answers with the same text
    pub fn with_text(text: &str) -> Self {
        Self {
            responses: Mutex::new(vec![Ok(text.to_string())]),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Stub that fails with the given error on the first call
    pub fn with_error(error: AbsurdaError) -> Self {
        Self {
            responses: Mutex::new(vec![Err(error.into())]),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The requests seen so far
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());
        self.responses
            .lock()
            .expect("lock poisoned")
            .pop()
            .unwrap_or_else(|| Err(AbsurdaError::Provider("stub exhausted".to_string()).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_replays_text_and_records_request() {
        let stub = StubGenerator::with_text("De trol trapte.");
        let request = GenerationRequest::new("prompt");
        let text = stub.generate(&request).await.unwrap();
        assert_eq!(text, "De trol trapte.");
        assert_eq!(stub.requests().len(), 1);
        assert_eq!(stub.requests()[0].prompt, "prompt");
    }

    #[tokio::test]
    async fn test_stub_exhaustion_errors() {
        let stub = StubGenerator::with_text("een keer");
        let request = GenerationRequest::new("prompt");
        stub.generate(&request).await.unwrap();
        assert!(stub.generate(&request).await.is_err());
    }
}
