//! Analytics repository port - session records and aggregate statistics.

use async_trait::async_trait;

use crate::domain::analytics::{SessionRecord, SessionStats};

use super::repository::RepositoryError;

/// Port for session analytics persistence.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Inserts a session record.
    async fn insert_session(&self, session: &SessionRecord) -> Result<(), RepositoryError>;

    /// Fetches the most recent sessions for a user, newest first.
    async fn recent_sessions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<SessionRecord>, RepositoryError>;

    /// Computes grouped usage statistics over a user's stored sessions.
    async fn session_stats(&self, user_id: &str) -> Result<SessionStats, RepositoryError>;
}
