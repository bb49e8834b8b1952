//! MongoDB implementation of the ProfileRepository port.

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::UpdateOptions;
use mongodb::{Collection, Database};

use crate::ports::{ProfileRepository, RepositoryError};

/// Accessibility profile repository backed by MongoDB.
///
/// Profiles are opaque JSON blobs upserted by `user_id`.
#[derive(Debug, Clone)]
pub struct MongoProfileRepository {
    profiles: Collection<Document>,
}

impl MongoProfileRepository {
    /// Creates the repository over the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            profiles: database.collection("accessibility_profiles"),
        }
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn upsert(
        &self,
        user_id: &str,
        profile: serde_json::Value,
    ) -> Result<(), RepositoryError> {
        let profile_bson = bson::to_bson(&profile).map_err(RepositoryError::backend)?;

        self.profiles
            .update_one(
                doc! {"user_id": user_id},
                doc! {
                    "$set": {
                        "user_id": user_id,
                        "profile": profile_bson,
                        "updated_at": bson::DateTime::now(),
                    }
                },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .map_err(RepositoryError::backend)?;

        Ok(())
    }

    async fn find(&self, user_id: &str) -> Result<Option<serde_json::Value>, RepositoryError> {
        let document = self
            .profiles
            .find_one(doc! {"user_id": user_id}, None)
            .await
            .map_err(RepositoryError::backend)?;

        Ok(document.map(|d| {
            d.get("profile")
                .cloned()
                .unwrap_or(Bson::Null)
                .into_relaxed_extjson()
        }))
    }
}
