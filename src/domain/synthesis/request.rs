use serde::{Deserialize, Serialize};

/// Whether the engine drafts a new prompt or revises a supplied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisMode {
    /// Draft a new prompt from the request fields.
    #[default]
    Generate,
    /// Revise the supplied `existing_prompt`.
    Enhance,
}

impl SynthesisMode {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisMode::Generate => "generate",
            SynthesisMode::Enhance => "enhance",
        }
    }

    /// Parse a mode string. Unknown values default to `Generate`.
    pub fn from_key(key: &str) -> SynthesisMode {
        match key.trim().to_lowercase().as_str() {
            "enhance" => SynthesisMode::Enhance,
            _ => SynthesisMode::Generate,
        }
    }
}

/// A structured synthesis request.
///
/// Field names serialize in camelCase to stay wire-compatible with the
/// generator payload produced by the web client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    /// Free-text objective. The engine tolerates an empty string but
    /// callers are expected to validate it away first.
    pub user_input: String,
    /// Prompt-type category key (e.g. "marketing").
    pub prompt_type: String,
    /// Target platform key (e.g. "chatgpt").
    pub ai_platform: String,
    /// Formatting style key (e.g. "markdown").
    pub output_format: String,
    /// Locale key (e.g. "english").
    pub language: String,
    /// Optional reference material; whitespace-only counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_reference: Option<String>,
    /// Label for the reference material (e.g. "sketch").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    #[serde(default)]
    pub mode: SynthesisMode,
    /// Prompt to revise; consulted only when `mode` is `Enhance`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_prompt: Option<String>,
}

impl SynthesisRequest {
    /// Create a request from the five required fields.
    pub fn new(
        user_input: impl Into<String>,
        prompt_type: impl Into<String>,
        ai_platform: impl Into<String>,
        output_format: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            user_input: user_input.into(),
            prompt_type: prompt_type.into(),
            ai_platform: ai_platform.into(),
            output_format: output_format.into(),
            language: language.into(),
            visual_reference: None,
            reference_type: None,
            mode: SynthesisMode::Generate,
            existing_prompt: None,
        }
    }

    /// Attach reference material with an optional type label.
    pub fn with_reference(
        mut self,
        reference: impl Into<String>,
        reference_type: Option<String>,
    ) -> Self {
        self.visual_reference = Some(reference.into());
        self.reference_type = reference_type;
        self
    }

    /// Switch to enhance mode with the prompt to revise.
    pub fn with_existing_prompt(mut self, existing: impl Into<String>) -> Self {
        self.mode = SynthesisMode::Enhance;
        self.existing_prompt = Some(existing.into());
        self
    }

    pub fn with_mode(mut self, mode: SynthesisMode) -> Self {
        self.mode = mode;
        self
    }

    /// The reference text, trimmed; `None` when absent or whitespace-only.
    pub fn reference_trimmed(&self) -> Option<&str> {
        self.visual_reference.as_deref().map(str::trim).filter(|text| !text.is_empty())
    }

    /// The existing prompt, trimmed; `None` when absent or whitespace-only.
    pub fn existing_prompt_trimmed(&self) -> Option<&str> {
        self.existing_prompt.as_deref().map(str::trim).filter(|text| !text.is_empty())
    }

    /// Whether the enhancement section applies: enhance mode with a
    /// non-blank existing prompt.
    pub fn wants_enhancement(&self) -> bool {
        self.mode == SynthesisMode::Enhance && self.existing_prompt_trimmed().is_some()
    }
}
