//! HTTP DTOs for accessibility profile endpoints.

use serde::{Deserialize, Serialize};

/// Request to save (upsert) a profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    pub user_id: String,
    /// Opaque profile blob owned by the extension.
    pub profile: serde_json::Value,
}

/// Response after saving a profile.
#[derive(Debug, Clone, Serialize)]
pub struct SaveProfileResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Response carrying a stored profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: serde_json::Value,
}

/// Static response when profile sync is disabled for privacy.
#[derive(Debug, Clone, Serialize)]
pub struct SyncDisabledResponse {
    pub success: bool,
    pub status: &'static str,
}

impl SyncDisabledResponse {
    pub fn new() -> Self {
        Self {
            success: true,
            status: "disabled",
        }
    }
}

impl Default for SyncDisabledResponse {
    fn default() -> Self {
        Self::new()
    }
}
