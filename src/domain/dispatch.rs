//! Hybrid cloud/on-device dispatch rule.
//!
//! The extension can run small prompts through the browser's on-device model.
//! A request goes to the cloud when the caller asks for it explicitly or when
//! the input exceeds the configured character threshold.

/// Where a hybrid request should be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Forward to the Gemini API.
    Cloud,
    /// Instruct the extension to use on-device inference.
    OnDevice,
}

impl Dispatch {
    /// Returns true for the cloud branch.
    pub fn is_cloud(self) -> bool {
        self == Dispatch::Cloud
    }
}

/// Applies the dispatch rule: cloud iff explicitly requested or the input is
/// longer than `threshold` characters.
pub fn choose(input_len: usize, use_cloud: bool, threshold: usize) -> Dispatch {
    if use_cloud || input_len > threshold {
        Dispatch::Cloud
    } else {
        Dispatch::OnDevice
    }
}
