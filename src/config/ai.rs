//! Gemini API configuration

use serde::Deserialize;
use std::time::Duration;

/// Gemini API configuration
///
/// A missing API key is not an error: AI-backed routes degrade to their
/// documented fallback responses instead.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Model used for all generation calls
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if the Gemini API is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.has_gemini());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_has_gemini_rejects_empty_key() {
        let config = AiConfig {
            gemini_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_gemini());

        let config = AiConfig {
            gemini_api_key: Some("AIza-test".to_string()),
            ..Default::default()
        };
        assert!(config.has_gemini());
    }
}
