use serde::Serialize;

use super::platform::Category;
use super::request::SynthesisMode;

/// Provider tag identifying local synthesis output in analytics.
pub const PROVIDER: &str = "promptnx-local";

/// Fixed model identifier for the offline engine.
pub const MODEL: &str = "offline-synthesizer-v1";

/// Response envelope returned by the synthesis engine.
///
/// `success` is always `true`: the engine is total over structurally valid
/// requests, so there is no failure variant to encode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResponse {
    pub success: bool,
    /// The assembled Markdown document.
    pub prompt: String,
    /// Bounded quality score.
    pub score: u32,
    pub metadata: SynthesisMetadata,
}

/// Diagnostic metadata distinguishing local output from live-model output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisMetadata {
    pub provider: &'static str,
    pub model: &'static str,
    pub mode: SynthesisMode,
    /// Always `true`: this engine only serves as the fallback tier.
    pub fallback: bool,
    /// Caller-supplied reason the remote tier was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Category resolved from the requested platform.
    pub category: Category,
}
