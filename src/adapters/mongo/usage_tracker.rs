//! MongoDB implementation of the UsageTracker port.

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::domain::analytics::UsageRecord;
use crate::ports::{RepositoryError, UsageTracker};

/// Feature-usage tracker writing to the `usage_logs` collection.
#[derive(Debug, Clone)]
pub struct MongoUsageTracker {
    usage_logs: Collection<Document>,
}

impl MongoUsageTracker {
    /// Creates the tracker over the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            usage_logs: database.collection("usage_logs"),
        }
    }
}

#[async_trait]
impl UsageTracker for MongoUsageTracker {
    async fn record(&self, usage: &UsageRecord) -> Result<(), RepositoryError> {
        let metadata = bson::to_bson(&usage.metadata).map_err(RepositoryError::backend)?;

        self.usage_logs
            .insert_one(
                doc! {
                    "user_id": &usage.user_id,
                    "feature": &usage.feature,
                    "metadata": metadata,
                    "timestamp": bson::DateTime::from_chrono(usage.timestamp),
                },
                None,
            )
            .await
            .map_err(RepositoryError::backend)?;

        Ok(())
    }
}
