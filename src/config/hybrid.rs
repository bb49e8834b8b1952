//! Hybrid dispatch thresholds
//!
//! Input lengths above these cutoffs route to the cloud; shorter inputs are
//! handed back to the extension for on-device inference.

use serde::Deserialize;

use super::error::ValidationError;

/// Size cutoffs for cloud vs on-device dispatch
#[derive(Debug, Clone, Deserialize)]
pub struct HybridConfig {
    /// Prompt length (chars) above which /api/hybrid/prompt goes to the cloud
    #[serde(default = "default_prompt_threshold")]
    pub prompt_threshold: usize,

    /// Text length (chars) above which /api/hybrid/simplify goes to the cloud
    #[serde(default = "default_simplify_threshold")]
    pub simplify_threshold: usize,
}

impl HybridConfig {
    /// Validate hybrid configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt_threshold == 0 || self.simplify_threshold == 0 {
            return Err(ValidationError::InvalidThreshold);
        }
        Ok(())
    }
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            prompt_threshold: default_prompt_threshold(),
            simplify_threshold: default_simplify_threshold(),
        }
    }
}

fn default_prompt_threshold() -> usize {
    10_000
}

fn default_simplify_threshold() -> usize {
    5_000
}
