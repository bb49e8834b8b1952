//! User repository port - credential records for register/login.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::credentials::PasswordRecord;

use super::repository::RepositoryError;

/// A stored user credential record.
#[derive(Debug, Clone)]
pub struct StoredUser {
    /// Lowercased email, unique per user.
    pub email: String,
    pub password: PasswordRecord,
    pub created_at: DateTime<Utc>,
}

/// Port for user credential persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user. Fails with [`RepositoryError::Duplicate`] when the
    /// email is already registered.
    async fn create(&self, email: &str, password: &PasswordRecord)
        -> Result<(), RepositoryError>;

    /// Looks up a user by (lowercased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, RepositoryError>;
}
