//! HTTP DTOs for analytics endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::analytics::UsageCount;

/// Session metadata reported by the extension.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub features_used: Vec<String>,
    /// Session length in seconds.
    #[serde(default)]
    pub duration: i64,
}

/// Bare success acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// AI-generated insights over recent sessions.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    pub success: bool,
    pub insights: String,
    pub session_count: usize,
}

impl InsightsResponse {
    /// Static insights body used for the degraded/no-data paths.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            success: true,
            insights: message.into(),
            session_count: 0,
        }
    }
}

/// Aggregate session statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub total_sessions: u64,
    pub feature_usage: Vec<UsageCount>,
    pub document_types: Vec<UsageCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_request_accepts_camel_case() {
        let json = r#"{
            "userId": "u1",
            "documentType": "pdf",
            "featuresUsed": ["summarize", "simplify"],
            "duration": 300
        }"#;
        let req: SessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.document_type.as_deref(), Some("pdf"));
        assert_eq!(req.features_used.len(), 2);
        assert_eq!(req.duration, 300);
    }

    #[test]
    fn session_request_defaults_everything() {
        let req: SessionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.user_id.is_none());
        assert!(req.features_used.is_empty());
        assert_eq!(req.duration, 0);
    }

    #[test]
    fn stats_response_serializes_counts() {
        let response = StatsResponse {
            success: true,
            total_sessions: 3,
            feature_usage: vec![UsageCount {
                name: "summarize".to_string(),
                count: 2,
            }],
            document_types: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["feature_usage"][0]["name"], "summarize");
        assert_eq!(json["feature_usage"][0]["count"], 2);
    }
}
