//! Usage tracker port - best-effort feature-usage records.

use async_trait::async_trait;

use crate::domain::analytics::UsageRecord;

use super::repository::RepositoryError;

/// Port for recording feature usage.
///
/// Callers treat recording as fire-and-forget: a failed write is logged and
/// never fails the request that produced it.
#[async_trait]
pub trait UsageTracker: Send + Sync {
    /// Records one usage event.
    async fn record(&self, usage: &UsageRecord) -> Result<(), RepositoryError>;
}
