//! HTTP DTOs for hybrid endpoints.

use serde::{Deserialize, Serialize};

/// Request for hybrid prompt handling.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridPromptRequest {
    pub prompt: String,
    #[serde(default)]
    pub use_cloud: bool,
    #[serde(default)]
    pub accessibility_mode: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Request for hybrid text simplification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridSimplifyRequest {
    pub text: String,
    #[serde(default)]
    pub use_cloud: bool,
    #[serde(default)]
    pub accessibility_mode: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response when the prompt was processed in the cloud.
#[derive(Debug, Clone, Serialize)]
pub struct CloudPromptResponse {
    pub success: bool,
    pub response: String,
    pub source: &'static str,
}

/// Response instructing the extension to run on-device inference.
#[derive(Debug, Clone, Serialize)]
pub struct OnDevicePromptResponse {
    pub success: bool,
    pub source: &'static str,
    pub instruction: &'static str,
}

/// Response when the text was simplified in the cloud.
#[derive(Debug, Clone, Serialize)]
pub struct CloudSimplifyResponse {
    pub success: bool,
    pub simplified: String,
    pub source: &'static str,
}

/// Response deferring simplification to the device.
#[derive(Debug, Clone, Serialize)]
pub struct OnDeviceSimplifyResponse {
    pub success: bool,
    pub source: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_request_accepts_camel_case() {
        let json = r#"{"prompt": "hello", "useCloud": true, "accessibilityMode": "adhd"}"#;
        let req: HybridPromptRequest = serde_json::from_str(json).unwrap();
        assert!(req.use_cloud);
        assert_eq!(req.accessibility_mode.as_deref(), Some("adhd"));
    }

    #[test]
    fn use_cloud_defaults_to_false() {
        let json = r#"{"prompt": "hello"}"#;
        let req: HybridPromptRequest = serde_json::from_str(json).unwrap();
        assert!(!req.use_cloud);
    }
}
