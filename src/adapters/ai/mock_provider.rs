//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AiProvider port,
//! allowing tests to run without calling the real Gemini API.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAiProvider::new().with_response("Mock analysis");
//!
//! let response = provider.generate(request).await?;
//! assert_eq!(response.text, "Mock analysis");
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AiError, AiProvider, FinishReason, GenerationRequest, GenerationResponse, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful generation.
    Success { text: String },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate content filtering.
    ContentFiltered { reason: String },
    /// Simulate network error.
    Network { message: String },
}

impl From<MockError> for AiError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AiError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AiError::unavailable(message),
            MockError::AuthenticationFailed => AiError::AuthenticationFailed,
            MockError::ContentFiltered { reason } => AiError::content_filtered(reason),
            MockError::Network { message } => AiError::network(message),
        }
    }
}

impl MockAiProvider {
    /// Creates a new mock provider with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push_response(text);
        self
    }

    /// Adds a successful response to the queue of an already-shared mock.
    ///
    /// Clones share the queue, so enqueuing through any handle is visible to
    /// the provider wired into the router.
    pub fn push_response(&self, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success { text: text.into() });
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Number of generate calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns a copy of all requests seen so far.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success { text }) => Ok(GenerationResponse {
                text,
                model: "mock-model".to_string(),
                usage: TokenUsage::new(10, 20),
                finish_reason: FinishReason::Stop,
            }),
            Some(MockResponse::Error(err)) => Err(err.into()),
            // Queue exhausted: answer with a generic canned response so tests
            // only need to enqueue what they assert on.
            None => Ok(GenerationResponse {
                text: "mock response".to_string(),
                model: "mock-model".to_string(),
                usage: TokenUsage::zero(),
                finish_reason: FinishReason::Stop,
            }),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let provider = MockAiProvider::new()
            .with_response("first")
            .with_response("second");

        let a = provider.generate(GenerationRequest::new("x")).await.unwrap();
        let b = provider.generate(GenerationRequest::new("y")).await.unwrap();

        assert_eq!(a.text, "first");
        assert_eq!(b.text, "second");
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn errors_are_injected() {
        let provider = MockAiProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });

        let result = provider.generate(GenerationRequest::new("x")).await;
        assert!(matches!(result, Err(AiError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn calls_record_prompts() {
        let provider = MockAiProvider::new();
        provider
            .generate(GenerationRequest::new("the prompt"))
            .await
            .unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "the prompt");
    }
}
