//! Gemini Provider - Implementation of AiProvider for Google's Gemini API.
//!
//! Talks to the `generateContent` REST endpoint. Image inputs are passed as
//! inline base64 parts alongside the prompt text.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_base_url("https://generativelanguage.googleapis.com");
//!
//! let provider = GeminiProvider::new(config);
//! ```
//!
//! Requests are not retried: a failure surfaces to the route contract on the
//! first attempt.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AiError, AiProvider, FinishReason, GenerationRequest, GenerationResponse, ProviderInfo,
    TokenUsage,
};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(&self, request: &GenerationRequest) -> GeminiRequest {
        let mut parts = vec![Part {
            text: Some(request.prompt.clone()),
            inline_data: None,
        }];

        if let Some(image) = &request.image {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: image.mime_type.clone(),
                    data: BASE64.encode(&image.data),
                }),
            });
        }

        let generation_config = if request.temperature.is_some()
            || request.max_output_tokens.is_some()
        {
            Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![Content { parts }],
            generation_config,
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, request: &GenerationRequest) -> Result<Response, AiError> {
        let gemini_request = self.to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AiError::AuthenticationFailed),
            429 => Err(AiError::rate_limited(30)),
            400 => Err(AiError::InvalidRequest(error_body)),
            500..=599 => Err(AiError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AiError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AiError> {
        let response = self.send_request(&request).await?;
        let response = self.handle_response_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AiError::network(e.to_string()))?;

        parse_generate_response(&body, &self.config.model)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

/// Parses a generateContent response body.
fn parse_generate_response(body: &str, model: &str) -> Result<GenerationResponse, AiError> {
    let gemini_response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

    let Some(candidate) = gemini_response.candidates.into_iter().next() else {
        // No candidates at all: either the prompt was blocked or the
        // response is unusable.
        if let Some(reason) = gemini_response
            .prompt_feedback
            .and_then(|f| f.block_reason)
        {
            return Err(AiError::content_filtered(reason));
        }
        return Err(AiError::parse("Response contained no candidates"));
    };

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") => FinishReason::ContentFilter,
        Some(_) => FinishReason::Error,
    };

    if text.is_empty() && finish_reason == FinishReason::ContentFilter {
        return Err(AiError::content_filtered(
            "Candidate was blocked before any text was generated",
        ));
    }

    let usage = gemini_response
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    Ok(GenerationResponse {
        text,
        model: model.to_string(),
        usage,
        finish_reason,
    })
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}
