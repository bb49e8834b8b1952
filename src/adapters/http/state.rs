//! Shared handler state.
//!
//! `AppState` is the process-wide context handed to every route: optional
//! handles for the Gemini provider and the MongoDB-backed repositories
//! (absent when the dependency is unconfigured or unreachable at startup),
//! plus always-available upload storage and text extraction.

use std::sync::Arc;

use crate::adapters::ai::{GeminiConfig, GeminiProvider};
use crate::adapters::document::FileTextExtractor;
use crate::adapters::mongo::{
    self, MongoAnalyticsRepository, MongoProfileRepository, MongoUsageTracker,
    MongoUserRepository,
};
use crate::adapters::storage::LocalUploadStorage;
use crate::config::AppConfig;
use crate::domain::analytics::UsageRecord;
use crate::ports::{
    AiProvider, AnalyticsRepository, ProfileRepository, TextExtractor, UploadStorage,
    UsageTracker, UserRepository,
};

/// Dependency handles shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub ai: Option<Arc<dyn AiProvider>>,
    pub users: Option<Arc<dyn UserRepository>>,
    pub profiles: Option<Arc<dyn ProfileRepository>>,
    pub analytics: Option<Arc<dyn AnalyticsRepository>>,
    pub usage: Option<Arc<dyn UsageTracker>>,
    pub uploads: Arc<dyn UploadStorage>,
    pub extractor: Arc<dyn TextExtractor>,
    /// Cloud-dispatch threshold for /api/hybrid/prompt (chars).
    pub prompt_threshold: usize,
    /// Cloud-dispatch threshold for /api/hybrid/simplify (chars).
    pub simplify_threshold: usize,
    /// Whether accessibility profiles are persisted server-side.
    pub profile_sync: bool,
}

impl AppState {
    /// Builds the state from configuration, connecting to whichever external
    /// services are configured. A dependency that is unconfigured or fails to
    /// connect leaves its handle `None` and the server starts anyway.
    pub async fn initialize(config: &AppConfig) -> Self {
        let ai: Option<Arc<dyn AiProvider>> = if config.ai.has_gemini() {
            let key = config.ai.gemini_api_key.clone().unwrap_or_default();
            let gemini_config = GeminiConfig::new(key)
                .with_model(&config.ai.model)
                .with_base_url(&config.ai.base_url)
                .with_timeout(config.ai.timeout());
            Some(Arc::new(GeminiProvider::new(gemini_config)))
        } else {
            tracing::warn!("Gemini API key not found; AI features disabled");
            None
        };

        let database = if config.database.is_configured() {
            match mongo::connect(&config.database).await {
                Ok(database) => {
                    tracing::info!(name = %config.database.name, "MongoDB connected");
                    Some(database)
                }
                Err(error) => {
                    tracing::error!(%error, "MongoDB connection failed");
                    None
                }
            }
        } else {
            tracing::warn!("MongoDB URI not found; profile sync and analytics disabled");
            None
        };

        let (users, profiles, analytics, usage) = match &database {
            Some(db) => (
                Some(Arc::new(MongoUserRepository::new(db)) as Arc<dyn UserRepository>),
                Some(Arc::new(MongoProfileRepository::new(db)) as Arc<dyn ProfileRepository>),
                Some(Arc::new(MongoAnalyticsRepository::new(db)) as Arc<dyn AnalyticsRepository>),
                Some(Arc::new(MongoUsageTracker::new(db)) as Arc<dyn UsageTracker>),
            ),
            None => (None, None, None, None),
        };

        Self {
            ai,
            users,
            profiles,
            analytics,
            usage,
            uploads: Arc::new(LocalUploadStorage::new(
                config.storage.upload_dir.clone(),
                config.storage.max_upload_bytes,
            )),
            extractor: Arc::new(FileTextExtractor::new()),
            prompt_threshold: config.hybrid.prompt_threshold,
            simplify_threshold: config.hybrid.simplify_threshold,
            profile_sync: config.features.profile_sync,
        }
    }

    /// Whether the Gemini API is available.
    pub fn gemini_enabled(&self) -> bool {
        self.ai.is_some()
    }

    /// Whether MongoDB is available.
    pub fn mongodb_enabled(&self) -> bool {
        self.users.is_some()
    }

    /// Records feature usage, best-effort. Failures are logged and swallowed
    /// so tracking never fails the request that produced it.
    pub async fn log_usage(&self, user_id: &str, feature: &str, metadata: serde_json::Value) {
        if let Some(tracker) = &self.usage {
            let record = UsageRecord::new(user_id, feature, metadata);
            if let Err(error) = tracker.record(&record).await {
                tracing::warn!(%error, feature, "Failed to record usage");
            }
        }
    }
}
