//! MongoDB adapters.
//!
//! Implementations of the persistence ports over the MongoDB driver. One
//! adapter per port; collection names match the deployment the extension's
//! earlier backends wrote to (`users`, `accessibility_profiles`, `sessions`,
//! `usage_logs`).

mod analytics_repository;
mod profile_repository;
mod usage_tracker;
mod user_repository;

pub use analytics_repository::MongoAnalyticsRepository;
pub use profile_repository::MongoProfileRepository;
pub use usage_tracker::MongoUsageTracker;
pub use user_repository::MongoUserRepository;

use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::DatabaseConfig;
use crate::ports::RepositoryError;

/// Connects to MongoDB and verifies the connection with a ping.
///
/// Callers treat a failure here as "database disabled" and degrade the
/// dependent routes rather than aborting startup.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, RepositoryError> {
    let uri = config
        .uri
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| RepositoryError::Backend("no MongoDB URI configured".to_string()))?;

    let client = Client::with_uri_str(uri)
        .await
        .map_err(RepositoryError::backend)?;

    // Verify the server is actually reachable before reporting success.
    client
        .database("admin")
        .run_command(doc! {"ping": 1}, None)
        .await
        .map_err(RepositoryError::backend)?;

    Ok(client.database(&config.name))
}
