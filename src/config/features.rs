//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Persist accessibility profiles server-side. When disabled, the profile
    /// routes answer with a static disabled response and never touch MongoDB.
    #[serde(default = "default_profile_sync")]
    pub profile_sync: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            profile_sync: default_profile_sync(),
            verbose_errors: false,
        }
    }
}

fn default_profile_sync() -> bool {
    true
}
