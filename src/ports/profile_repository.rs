//! Profile repository port - accessibility profile blobs keyed by user id.

use async_trait::async_trait;

use super::repository::RepositoryError;

/// Port for accessibility profile persistence.
///
/// The profile itself is an opaque JSON blob owned by the extension; the
/// backend only upserts and returns it.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts or replaces the profile stored for `user_id`.
    async fn upsert(&self, user_id: &str, profile: serde_json::Value)
        -> Result<(), RepositoryError>;

    /// Fetches the stored profile, if any.
    async fn find(&self, user_id: &str) -> Result<Option<serde_json::Value>, RepositoryError>;
}
