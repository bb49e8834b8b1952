//! Accessibility modes and their canned prompt templates.
//!
//! A mode is a named user-need tag sent by the extension. Each maps to a fixed
//! prompt-modification suffix; strings outside the table leave prompts
//! untouched, matching the extension's permissive contract.

use serde::{Deserialize, Serialize};

/// Named accessibility need selected in the extension's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityMode {
    Dyslexia,
    Adhd,
    VisualImpairment,
    NonNative,
}

impl AccessibilityMode {
    /// Parses the extension's mode tag. Unknown tags yield `None` and the
    /// prompt passes through unmodified.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "dyslexia" => Some(Self::Dyslexia),
            "adhd" => Some(Self::Adhd),
            "visual_impairment" => Some(Self::VisualImpairment),
            "non_native" => Some(Self::NonNative),
            _ => None,
        }
    }

    /// Wire tag for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dyslexia => "dyslexia",
            Self::Adhd => "adhd",
            Self::VisualImpairment => "visual_impairment",
            Self::NonNative => "non_native",
        }
    }

    /// Formatting instructions appended to analysis/prompt requests.
    fn prompt_instructions(self) -> &'static str {
        match self {
            Self::Dyslexia => {
                "Format for dyslexia: short sentences, simple words, bullet points, clear spacing."
            }
            Self::Adhd => {
                "Format for ADHD: concise chunks, numbered lists, key points highlighted."
            }
            Self::VisualImpairment => {
                "Format for screen readers: describe visuals, clear hierarchy, no vague references."
            }
            Self::NonNative => {
                "Format for language learners: simple vocabulary, define terms, avoid idioms."
            }
        }
    }

    /// Extra simplification guidance, where the mode has any.
    fn simplify_instructions(self) -> Option<&'static str> {
        match self {
            Self::Dyslexia => Some("Use short sentences, simple words, and bullet points."),
            Self::Adhd => Some("Use concise chunks, numbered lists, and highlight key points."),
            Self::NonNative => Some("Use simple vocabulary and define terms."),
            Self::VisualImpairment => None,
        }
    }
}

/// Appends the mode's formatting instructions to a query. A `None` mode (absent
/// or unrecognized tag) returns the query unchanged.
pub fn build_prompt(query: &str, mode: Option<AccessibilityMode>) -> String {
    match mode {
        Some(mode) => format!("{}\n\n{}", query, mode.prompt_instructions()),
        None => query.to_string(),
    }
}

/// Builds the simplification prompt used by the hybrid simplify route.
pub fn build_simplify_prompt(text: &str, mode: Option<AccessibilityMode>) -> String {
    let audience = mode.map(AccessibilityMode::as_str).unwrap_or("general");
    let mut prompt = format!(
        "Simplify this text for someone with {} reading needs:\n\n{}",
        audience, text
    );
    if let Some(extra) = mode.and_then(AccessibilityMode::simplify_instructions) {
        prompt.push_str("\n\n");
        prompt.push_str(extra);
    }
    prompt
}
