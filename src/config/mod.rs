//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CLARITY_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use clarity_backend::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod database;
mod error;
mod features;
mod hybrid;
mod server;
mod storage;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use hybrid::HybridConfig;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Clarity backend.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini API configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// MongoDB configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Uploaded-document storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Hybrid dispatch thresholds
    #[serde(default)]
    pub hybrid: HybridConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CLARITY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CLARITY__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `CLARITY__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `CLARITY__DATABASE__URI=...` -> `database.uri = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Missing Gemini key or MongoDB URI is NOT an error; the affected
    /// features run in their degraded mode.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLARITY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.storage.validate()?;
        self.hybrid.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("CLARITY__SERVER__PORT");
        env::remove_var("CLARITY__SERVER__ENVIRONMENT");
        env::remove_var("CLARITY__AI__GEMINI_API_KEY");
        env::remove_var("CLARITY__DATABASE__URI");
        env::remove_var("CLARITY__HYBRID__PROMPT_THRESHOLD");
    }

    #[test]
    fn test_load_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.ai.has_gemini());
        assert!(!config.database.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CLARITY__AI__GEMINI_API_KEY", "AIza-test");
        env::set_var("CLARITY__DATABASE__URI", "mongodb://localhost:27017");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_gemini());
        assert_eq!(
            config.database.uri.as_deref(),
            Some("mongodb://localhost:27017")
        );
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CLARITY__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CLARITY__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_custom_threshold() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CLARITY__HYBRID__PROMPT_THRESHOLD", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.hybrid.prompt_threshold, 3000);
    }
}
