//! Generation provider boundary for absurda
//!
//! This module contains the text generation abstraction and the Gemini
//! implementation. The core only ever asks a provider for one thing: turn
//! a prompt plus sampling parameters into generated text.

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiProvider};

use crate::error::Result;
use async_trait::async_trait;

/// A single generation request
///
/// Carries the full prompt (system prompt and user prompt are joined by
/// the content kind) and the per-kind sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Full prompt text sent as the sole content part
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling parameter
    pub top_k: u32,
    /// Top-p sampling parameter
    pub top_p: f32,
    /// Optional hard cap on output tokens
    pub max_output_tokens: Option<u32>,
    /// Optional thinking budget (0 disables thinking, -1 lets the model decide)
    pub thinking_budget: Option<i32>,
    /// Harm blocking threshold applied to all safety categories
    pub safety_threshold: SafetyThreshold,
}

/// Harm blocking threshold for the safety settings
///
/// Most content kinds disable blocking entirely; the condoleance kind
/// keeps high-severity blocking on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafetyThreshold {
    #[default]
    BlockNone,
    BlockOnlyHigh,
}

impl SafetyThreshold {
    /// Wire value for the Gemini `safetySettings` entries
    pub fn as_str(self) -> &'static str {
        match self {
            SafetyThreshold::BlockNone => "BLOCK_NONE",
            SafetyThreshold::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
        }
    }
}

impl GenerationRequest {
    /// Create a request with the default sampling parameters
    ///
    /// All content kinds use top-k 40 and top-p 0.95 unless they say
    /// otherwise, so those are the defaults here.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 1.0,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: None,
            thinking_budget: None,
            safety_threshold: SafetyThreshold::default(),
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the top-k sampling parameter
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Cap the number of output tokens
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Set the thinking budget
    pub fn with_thinking_budget(mut self, budget: i32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }

    /// Set the harm blocking threshold
    pub fn with_safety_threshold(mut self, threshold: SafetyThreshold) -> Self {
        self.safety_threshold = threshold;
        self
    }
}

/// Text generation capability consumed by the content kinds
///
/// The only suspending operation in the application. Implementations
/// classify upstream failures into the error taxonomy in
/// [`crate::error::AbsurdaError`]: `Authentication`, `RateLimited`,
/// `Provider`, and `EmptyCompletion`. No retries, no caching.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
