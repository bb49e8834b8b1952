//! HTTP DTOs for multimodal endpoints.

use serde::{Deserialize, Serialize};

/// Request to analyze an image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    /// Base64 data URL of the screenshot/image.
    pub image: String,
    #[serde(default = "default_query")]
    pub query: String,
    #[serde(default)]
    pub accessibility_mode: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_query() -> String {
    "Analyze this image".to_string()
}

/// Request to extract and translate text from an image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrTranslateRequest {
    pub image: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_target_language() -> String {
    "English".to_string()
}

/// Response for image analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeImageResponse {
    pub success: bool,
    pub analysis: String,
    pub source: &'static str,
    pub accessibility_mode: Option<String>,
}

/// Response for OCR translation.
#[derive(Debug, Clone, Serialize)]
pub struct OcrTranslateResponse {
    pub success: bool,
    pub result: String,
    pub source: &'static str,
}
