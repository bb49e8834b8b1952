//! MongoDB implementation of the UserRepository port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::credentials::PasswordRecord;
use crate::ports::{RepositoryError, StoredUser, UserRepository};

/// Credential record as stored in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    email: String,
    password_hash: String,
    password_salt: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

/// User credential repository backed by MongoDB.
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Creates the repository over the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            users: database.collection("users"),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(
        &self,
        email: &str,
        password: &PasswordRecord,
    ) -> Result<(), RepositoryError> {
        // Check-then-insert mirrors the deployment's existing behavior; the
        // unique email index makes the race a backend error, not silent data.
        let existing = self
            .users
            .find_one(doc! {"email": email}, None)
            .await
            .map_err(RepositoryError::backend)?;

        if existing.is_some() {
            return Err(RepositoryError::Duplicate(email.to_string()));
        }

        let document = UserDocument {
            email: email.to_string(),
            password_hash: password.hash.clone(),
            password_salt: password.salt.clone(),
            created_at: Utc::now(),
        };

        self.users
            .insert_one(document, None)
            .await
            .map_err(RepositoryError::backend)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, RepositoryError> {
        let document = self
            .users
            .find_one(doc! {"email": email}, None)
            .await
            .map_err(RepositoryError::backend)?;

        Ok(document.map(|d| StoredUser {
            email: d.email,
            password: PasswordRecord::from_stored(d.password_salt, d.password_hash),
            created_at: d.created_at,
        }))
    }
}
