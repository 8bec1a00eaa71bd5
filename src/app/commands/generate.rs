//! Generate / enhance command execution.
//!
//! Builds a `SynthesisRequest` from CLI flags or a JSON/YAML request file,
//! applies the same gating the hosted generator endpoint applied, runs the
//! engine, and renders the chosen output style.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::config::load_score_config;
use crate::domain::{
    AppError, SynthesisEngine, SynthesisMode, SynthesisRequest, SynthesisResponse,
};

/// How the synthesized response is rendered to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Just the assembled Markdown document.
    #[default]
    Text,
    /// The full response envelope as pretty-printed JSON.
    Json,
}

/// Options for the generate and enhance commands.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Load the request from this file instead of the field flags.
    pub request_file: Option<PathBuf>,
    pub input: Option<String>,
    pub prompt_type: Option<String>,
    pub platform: Option<String>,
    pub output_format: Option<String>,
    pub language: Option<String>,
    pub reference: Option<String>,
    pub reference_type: Option<String>,
    /// Forced to `Enhance` by the enhance command.
    pub mode: SynthesisMode,
    pub existing_prompt: Option<String>,
    pub existing_prompt_file: Option<PathBuf>,
    /// Why the caller fell back to local synthesis.
    pub reason: Option<String>,
    /// Scoring constant overrides (TOML).
    pub score_config: Option<PathBuf>,
    pub style: OutputStyle,
}

/// Execute the command and return what should be printed.
pub fn execute(options: GenerateOptions) -> Result<String, AppError> {
    let request = resolve_request(&options)?;

    let engine = match &options.score_config {
        Some(path) => SynthesisEngine::with_score_config(load_score_config(path)?),
        None => SynthesisEngine::new(),
    };

    let response = engine.synthesize_with_reason(&request, options.reason.as_deref());
    render_response(&response, options.style)
}

fn resolve_request(options: &GenerateOptions) -> Result<SynthesisRequest, AppError> {
    let mut request = match &options.request_file {
        Some(path) => load_request(path)?,
        None => request_from_flags(options)?,
    };

    if options.mode == SynthesisMode::Enhance {
        request.mode = SynthesisMode::Enhance;
    }

    if let Some(existing) = resolve_existing_prompt(options)? {
        request.existing_prompt = Some(existing);
    }

    if request.mode == SynthesisMode::Enhance && request.existing_prompt_trimmed().is_none() {
        return Err(AppError::MissingExistingPrompt);
    }

    if request.user_input.trim().is_empty() {
        return Err(AppError::EmptyUserInput);
    }

    Ok(request)
}

fn request_from_flags(options: &GenerateOptions) -> Result<SynthesisRequest, AppError> {
    let required = |value: &Option<String>, flag: &str| {
        value
            .clone()
            .ok_or_else(|| AppError::Validation(format!("--{flag} is required without --request")))
    };

    let mut request = SynthesisRequest::new(
        required(&options.input, "input")?,
        required(&options.prompt_type, "type")?,
        required(&options.platform, "platform")?,
        required(&options.output_format, "output-format")?,
        required(&options.language, "language")?,
    );
    request.mode = options.mode;

    if let Some(reference) = &options.reference {
        request = request.with_reference(reference.clone(), options.reference_type.clone());
    }

    Ok(request)
}

/// Load a request file, picking the parser by extension.
fn load_request(path: &Path) -> Result<SynthesisRequest, AppError> {
    let content = fs::read_to_string(path)?;
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    match extension {
        "json" => serde_json::from_str(&content).map_err(|err| AppError::ParseError {
            what: format!("request file {}", path.display()),
            details: err.to_string(),
        }),
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|err| AppError::ParseError {
            what: format!("request file {}", path.display()),
            details: err.to_string(),
        }),
        other => Err(AppError::UnsupportedRequestFormat(other.to_string())),
    }
}

fn resolve_existing_prompt(options: &GenerateOptions) -> Result<Option<String>, AppError> {
    if let Some(existing) = &options.existing_prompt {
        return Ok(Some(existing.clone()));
    }
    if let Some(path) = &options.existing_prompt_file {
        return Ok(Some(fs::read_to_string(path)?));
    }
    Ok(None)
}

fn render_response(response: &SynthesisResponse, style: OutputStyle) -> Result<String, AppError> {
    match style {
        OutputStyle::Text => Ok(response.prompt.clone()),
        OutputStyle::Json => {
            serde_json::to_string_pretty(response).map_err(|err| AppError::ParseError {
                what: "response envelope".to_string(),
                details: err.to_string(),
            })
        }
    }
}
