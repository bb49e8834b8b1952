//! Analytics record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A learning session reported by the extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    pub document_type: Option<String>,
    pub features_used: Vec<String>,
    /// Session length in seconds.
    pub duration: i64,
    pub timestamp: DateTime<Utc>,
}

/// A single feature-usage event, recorded best-effort alongside most routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    pub user_id: String,
    pub feature: String,
    pub metadata: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl UsageRecord {
    /// Builds a usage record stamped with the current time.
    pub fn new(user_id: impl Into<String>, feature: impl Into<String>, metadata: serde_json::Value) -> Self {
        Self {
            user_id: user_id.into(),
            feature: feature.into(),
            metadata,
            timestamp: Utc::now(),
        }
    }
}

/// Grouped count returned by the stats aggregations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCount {
    pub name: String,
    pub count: u64,
}

/// Aggregate statistics for a user's stored sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_sessions: u64,
    pub feature_usage: Vec<UsageCount>,
    pub document_types: Vec<UsageCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn usage_record_carries_metadata() {
        let record = UsageRecord::new("user-1", "proofread", json!({"text_length": 42}));
        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.feature, "proofread");
        assert_eq!(record.metadata["text_length"], 42);
    }

    #[test]
    fn session_record_serializes_snake_case() {
        let record = SessionRecord {
            user_id: "user-1".to_string(),
            document_type: Some("pdf".to_string()),
            features_used: vec!["summarize".to_string()],
            duration: 120,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["document_type"], "pdf");
        assert_eq!(json["features_used"][0], "summarize");
    }
}
