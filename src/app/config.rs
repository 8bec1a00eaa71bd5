//! Scoring configuration loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, ScoreConfig};

/// Load scoring constant overrides from a TOML file.
///
/// Missing keys keep their defaults, so a file may override a single
/// constant:
///
/// ```toml
/// [score]
/// floor = 70
/// checklist_bonus = 10
/// ```
pub fn load_score_config(path: &Path) -> Result<ScoreConfig, AppError> {
    if !path.exists() {
        return Err(AppError::ScoreConfigMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let dto: EngineConfigDto = toml::from_str(&content)?;
    Ok(dto.score)
}

#[derive(Debug, Default, Deserialize)]
struct EngineConfigDto {
    #[serde(default)]
    score: ScoreConfig,
}
