//! AI Provider Port - Interface for generative-AI integrations.
//!
//! Abstracts the single-shot generation call the backend makes against the
//! Gemini API: a templated text prompt, optionally accompanied by one inline
//! image (screenshots arrive from the extension as base64 data URLs).
//!
//! # Design
//!
//! - One request, one response; no streaming and no retries. Route contracts
//!   surface the first failure directly.
//! - Provider-agnostic request format so tests can swap in a mock.
//! - Error types for the common failure modes (rate limits, auth, network).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for generative-AI provider interactions.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate a single completion for the given request.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AiError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Fully templated prompt text.
    pub prompt: String,
    /// Optional inline image to analyze alongside the prompt.
    pub image: Option<InlineImage>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Creates a text-only request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Attaches an inline image.
    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

/// Raw image bytes plus their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// MIME type, e.g. "image/png".
    pub mime_type: String,
    /// Decoded image bytes.
    pub data: Vec<u8>,
}

impl InlineImage {
    /// Creates an inline image.
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// Response from AI generation.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Generated text.
    pub text: String,
    /// Model that generated the response.
    pub model: String,
    /// Token usage reported by the provider.
    pub usage: TokenUsage,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Creates new token usage.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }

    /// Creates zero usage.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit the output-token limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
    /// An error occurred.
    Error,
}

/// Provider information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini").
    pub name: String,
    /// Model identifier (e.g., "gemini-2.5-flash").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Content was filtered for safety.
    #[error("content filtered: {reason}")]
    ContentFiltered {
        /// Reason for filtering.
        reason: String,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl AiError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates a content filtered error.
    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            reason: reason.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_builder_works() {
        let request = GenerationRequest::new("Hello")
            .with_image(InlineImage::new("image/png", vec![1, 2, 3]))
            .with_temperature(0.7)
            .with_max_output_tokens(100);

        assert_eq!(request.prompt, "Hello");
        assert_eq!(request.image.as_ref().unwrap().mime_type, "image/png");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_output_tokens, Some(100));
    }

    #[test]
    fn token_usage_calculates_total() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn token_usage_zero_is_empty() {
        let usage = TokenUsage::zero();
        assert_eq!(usage.total_tokens, 0);
    }

    #[test]
    fn finish_reason_serializes_snake_case() {
        let json = serde_json::to_string(&FinishReason::ContentFilter).unwrap();
        assert_eq!(json, "\"content_filter\"");
    }

    #[test]
    fn ai_error_displays_correctly() {
        let err = AiError::rate_limited(30);
        assert_eq!(err.to_string(), "rate limited: retry after 30s");

        let err = AiError::unavailable("down for maintenance");
        assert_eq!(err.to_string(), "provider unavailable: down for maintenance");
    }
}
