//! HTTP DTOs for document endpoints.

use serde::{Deserialize, Serialize};

/// Response after a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
}

/// Request naming a previously uploaded document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRequest {
    pub filename: String,
    /// Processing action for /process-document: "summarize", "proofread" or
    /// "both" (the default).
    #[serde(default)]
    pub action: Option<String>,
}

/// Response for /summarize.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
    pub source: &'static str,
}

/// Response for /proofread.
#[derive(Debug, Clone, Serialize)]
pub struct ProofreadResponse {
    pub success: bool,
    pub proofread: String,
    pub source: &'static str,
}

/// Response for /process-document; fields present according to the action.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proofread: Option<String>,
    pub source: &'static str,
}
