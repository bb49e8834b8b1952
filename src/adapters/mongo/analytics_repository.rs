//! MongoDB implementation of the AnalyticsRepository port.
//!
//! Session reads use a sorted, limited find; the stats route is computed with
//! aggregation pipelines (`$match` / `$unwind` / `$group` / `$sort`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::analytics::{SessionRecord, SessionStats, UsageCount};
use crate::ports::{AnalyticsRepository, RepositoryError};

/// Session record as stored in the `sessions` collection.
#[derive(Debug, Serialize, Deserialize)]
struct SessionDocument {
    user_id: String,
    document_type: Option<String>,
    #[serde(default)]
    features_used: Vec<String>,
    #[serde(default)]
    duration: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    timestamp: DateTime<Utc>,
}

impl From<&SessionRecord> for SessionDocument {
    fn from(record: &SessionRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            document_type: record.document_type.clone(),
            features_used: record.features_used.clone(),
            duration: record.duration,
            timestamp: record.timestamp,
        }
    }
}

impl From<SessionDocument> for SessionRecord {
    fn from(document: SessionDocument) -> Self {
        Self {
            user_id: document.user_id,
            document_type: document.document_type,
            features_used: document.features_used,
            duration: document.duration,
            timestamp: document.timestamp,
        }
    }
}

/// Session analytics repository backed by MongoDB.
#[derive(Debug, Clone)]
pub struct MongoAnalyticsRepository {
    sessions: Collection<SessionDocument>,
}

impl MongoAnalyticsRepository {
    /// Creates the repository over the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            sessions: database.collection("sessions"),
        }
    }

    /// Runs a group-by-count pipeline and shapes the result documents.
    async fn grouped_counts(
        &self,
        user_id: &str,
        group_key: &str,
        unwind: bool,
    ) -> Result<Vec<UsageCount>, RepositoryError> {
        let mut pipeline = vec![doc! {"$match": {"user_id": user_id}}];
        if unwind {
            pipeline.push(doc! {"$unwind": group_key});
        }
        pipeline.push(doc! {"$group": {"_id": group_key, "count": {"$sum": 1}}});
        pipeline.push(doc! {"$sort": {"count": -1}});

        let mut cursor = self
            .sessions
            .aggregate(pipeline, None)
            .await
            .map_err(RepositoryError::backend)?;

        let mut counts = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(RepositoryError::backend)? {
            counts.push(shape_count(&document));
        }
        Ok(counts)
    }
}

/// Maps one `{_id, count}` aggregation document to a UsageCount.
fn shape_count(document: &Document) -> UsageCount {
    let name = match document.get("_id") {
        Some(Bson::String(s)) => s.clone(),
        _ => "unknown".to_string(),
    };
    let count = match document.get("count") {
        Some(Bson::Int32(n)) => *n as u64,
        Some(Bson::Int64(n)) => *n as u64,
        _ => 0,
    };
    UsageCount { name, count }
}

#[async_trait]
impl AnalyticsRepository for MongoAnalyticsRepository {
    async fn insert_session(&self, session: &SessionRecord) -> Result<(), RepositoryError> {
        self.sessions
            .insert_one(SessionDocument::from(session), None)
            .await
            .map_err(RepositoryError::backend)?;
        Ok(())
    }

    async fn recent_sessions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<SessionRecord>, RepositoryError> {
        let options = FindOptions::builder()
            .sort(doc! {"timestamp": -1})
            .limit(limit as i64)
            .build();

        let mut cursor = self
            .sessions
            .find(doc! {"user_id": user_id}, options)
            .await
            .map_err(RepositoryError::backend)?;

        let mut sessions = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(RepositoryError::backend)? {
            sessions.push(document.into());
        }
        Ok(sessions)
    }

    async fn session_stats(&self, user_id: &str) -> Result<SessionStats, RepositoryError> {
        let total_sessions = self
            .sessions
            .count_documents(doc! {"user_id": user_id}, None)
            .await
            .map_err(RepositoryError::backend)?;

        let feature_usage = self
            .grouped_counts(user_id, "$features_used", true)
            .await?;
        let document_types = self
            .grouped_counts(user_id, "$document_type", false)
            .await?;

        Ok(SessionStats {
            total_sessions,
            feature_usage,
            document_types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_count_reads_string_groups() {
        let document = doc! {"_id": "summarize", "count": 4_i32};
        assert_eq!(
            shape_count(&document),
            UsageCount {
                name: "summarize".to_string(),
                count: 4
            }
        );
    }

    #[test]
    fn shape_count_handles_null_group_and_long_counts() {
        let document = doc! {"_id": Bson::Null, "count": 7_i64};
        let count = shape_count(&document);
        assert_eq!(count.name, "unknown");
        assert_eq!(count.count, 7);
    }
}
