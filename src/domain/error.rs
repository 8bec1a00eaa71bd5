use std::io;

use thiserror::Error;

/// Library-wide error type for promptnx operations.
///
/// The synthesis engine itself is total and never fails; these variants
/// cover the application surface around it (request files, CLI gating,
/// interactive prompts).
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input validation or interaction issue.
    #[error("{0}")]
    Validation(String),

    /// Request or config file could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Request file has an extension the loader does not recognize.
    #[error("Unsupported request file extension '{0}': expected .json, .yml, or .yaml")]
    UnsupportedRequestFormat(String),

    /// Enhance mode was requested without a prompt to revise.
    #[error("existingPrompt is required when mode is enhance")]
    MissingExistingPrompt,

    /// The objective is empty after trimming.
    #[error("userInput must not be empty")]
    EmptyUserInput,

    /// Scoring config file not found at the given path.
    #[error("Score config not found: {0}")]
    ScoreConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers branching on class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Validation(_)
            | AppError::ParseError { .. }
            | AppError::UnsupportedRequestFormat(_)
            | AppError::MissingExistingPrompt
            | AppError::EmptyUserInput
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ScoreConfigMissing(_) => io::ErrorKind::NotFound,
        }
    }
}
