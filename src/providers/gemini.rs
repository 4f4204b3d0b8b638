//! Gemini provider implementation for absurda
//!
//! This module implements the [`TextGenerator`] trait against Google's
//! `generateContent` endpoint. It builds the request envelope the original
//! web app sends (contents, generationConfig, safetySettings, key as a
//! query parameter) and classifies the three upstream failure conditions
//! for user-facing messaging.

use crate::error::{AbsurdaError, Result};
use crate::providers::{GenerationRequest, SafetyThreshold, TextGenerator};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Gemini API base
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, passed as the `key` query parameter
    pub api_key: String,
    /// Model name (e.g. `gemini-2.5-flash`)
    pub model: String,
    /// Optional API base override, used by tests to point at a mock server
    pub api_base: Option<String>,
}

/// Gemini API provider
///
/// # Examples
///
/// ```no_run
/// use absurda::providers::{GeminiConfig, GeminiProvider, GenerationRequest, TextGenerator};
///
/// # async fn example() -> absurda::error::Result<()> {
/// let provider = GeminiProvider::new(GeminiConfig {
///     api_key: "AIza...".to_string(),
///     model: "gemini-2.5-flash".to_string(),
///     api_base: None,
/// })?;
/// let text = provider
///     .generate(&GenerationRequest::new("Genereer 1 tongbreker.").with_temperature(1.2))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: i32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// All four harm categories at the kind's threshold
fn safety_settings(threshold: SafetyThreshold) -> Vec<SafetySetting> {
    const CATEGORIES: [&str; 4] = [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ];
    CATEGORIES
        .iter()
        .map(|category| SafetySetting {
            category,
            threshold: threshold.as_str(),
        })
        .collect()
}

/// Response envelope from `generateContent`
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    error: GeminiErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider instance
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("absurda/0.2.0")
            .build()
            .map_err(AbsurdaError::Http)?;

        tracing::debug!("Initialized Gemini provider: model={}", config.model);

        Ok(Self { client, config })
    }

    /// Endpoint URL including the key query parameter
    fn endpoint(&self) -> String {
        let base = self
            .config
            .api_base
            .as_deref()
            .unwrap_or(GEMINI_API_BASE);
        format!(
            "{}/models/{}:generateContent?key={}",
            base, self.config.model, self.config.api_key
        )
    }

    /// Build the wire request body from a generation request
    fn build_body(&self, request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                top_k: request.top_k,
                top_p: request.top_p,
                max_output_tokens: request.max_output_tokens,
                thinking_config: request
                    .thinking_budget
                    .map(|thinking_budget| ThinkingConfig { thinking_budget }),
            },
            safety_settings: safety_settings(request.safety_threshold),
        }
    }

    /// Pull the generated text out of a response envelope, failing closed
    fn extract_text(response: GeminiResponse) -> Result<String> {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty());

        match text {
            Some(text) => Ok(text),
            None => Err(AbsurdaError::EmptyCompletion.into()),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = self.endpoint();
        let body = self.build_body(request);

        tracing::debug!(
            "Sending Gemini request: model={}, temperature={}, prompt_chars={}",
            self.config.model,
            request.temperature,
            request.prompt.len()
        );

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            tracing::error!("Gemini request failed: {}", e);
            AbsurdaError::Provider(format!("Gemini request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body: GeminiErrorBody = response.json().await.unwrap_or_default();
            let message = if error_body.error.message.is_empty() {
                "Onbekende fout".to_string()
            } else {
                error_body.error.message
            };
            tracing::error!("Gemini returned error {}: {}", status, message);

            let error = match status.as_u16() {
                401 | 403 => AbsurdaError::Authentication(message),
                429 => AbsurdaError::RateLimited(message),
                code => AbsurdaError::Provider(format!("API fout: {} - {}", code, message)),
            };
            return Err(error.into());
        }

        let envelope: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            AbsurdaError::Provider(format!("Failed to parse Gemini response: {}", e))
        })?;

        Self::extract_text(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> GeminiProvider {
        GeminiProvider::new(GeminiConfig {
            api_key: "AIzaTest".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_base: None,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_uses_public_base_by_default() {
        let provider = test_provider();
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=AIzaTest"
        );
    }

    #[test]
    fn test_endpoint_honors_api_base_override() {
        let provider = GeminiProvider::new(GeminiConfig {
            api_key: "AIzaTest".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_base: Some("http://127.0.0.1:9999/v1beta".to_string()),
        })
        .unwrap();
        assert!(provider.endpoint().starts_with("http://127.0.0.1:9999/v1beta/models/"));
    }

    #[test]
    fn test_build_body_serializes_camel_case() {
        let provider = test_provider();
        let request = GenerationRequest::new("hallo")
            .with_temperature(1.2)
            .with_max_output_tokens(150)
            .with_thinking_budget(0);
        let body = provider.build_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hallo");
        assert_eq!(json["generationConfig"]["temperature"], 1.2);
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["topP"], 0.95);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 150);
        assert_eq!(json["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
        assert_eq!(json["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(json["safetySettings"][0]["threshold"], "BLOCK_NONE");
    }

    #[test]
    fn test_build_body_honors_safety_threshold() {
        let provider = test_provider();
        let request = GenerationRequest::new("hallo")
            .with_safety_threshold(SafetyThreshold::BlockOnlyHigh);
        let json = serde_json::to_value(provider.build_body(&request)).unwrap();
        assert_eq!(json["safetySettings"][2]["threshold"], "BLOCK_ONLY_HIGH");
    }

    #[test]
    fn test_build_body_omits_optional_fields() {
        let provider = test_provider();
        let body = provider.build_body(&GenerationRequest::new("hallo"));
        let json = serde_json::to_value(&body).unwrap();

        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
        assert!(json["generationConfig"].get("thinkingConfig").is_none());
    }

    #[test]
    fn test_extract_text_happy_path() {
        let envelope: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  De trol trapte.  "}]}}]}"#,
        )
        .unwrap();
        let text = GeminiProvider::extract_text(envelope).unwrap();
        assert_eq!(text, "De trol trapte.");
    }

    #[test]
    fn test_extract_text_fails_closed_on_missing_candidates() {
        let envelope: GeminiResponse = serde_json::from_str("{}").unwrap();
        let err = GeminiProvider::extract_text(envelope).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AbsurdaError>(),
            Some(AbsurdaError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_extract_text_fails_closed_on_empty_part() {
        let envelope: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#)
                .unwrap();
        assert!(GeminiProvider::extract_text(envelope).is_err());
    }

    #[test]
    fn test_error_body_tolerates_garbage() {
        let body: GeminiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.message.is_empty());
    }
}
