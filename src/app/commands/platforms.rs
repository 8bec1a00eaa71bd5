//! Platform registry listing.
//!
//! The registry is the same table the engine resolves against, so whatever
//! a caller presents to users stays consistent with synthesis behavior.

use serde::Serialize;

use crate::domain::{AppError, PLATFORM_REGISTRY};

/// Options for the platforms command.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformsOptions {
    /// Include the per-platform description line.
    pub detail: bool,
    /// Emit JSON instead of the text listing.
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PlatformRow {
    key: &'static str,
    label: &'static str,
    category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
}

/// Render the platform listing.
pub fn execute(options: PlatformsOptions) -> Result<String, AppError> {
    let rows: Vec<PlatformRow> = PLATFORM_REGISTRY
        .iter()
        .map(|entry| PlatformRow {
            key: entry.key,
            label: entry.label,
            category: entry.category.key(),
            description: options.detail.then_some(entry.description),
        })
        .collect();

    if options.json {
        return serde_json::to_string_pretty(&rows).map_err(|err| AppError::ParseError {
            what: "platform listing".to_string(),
            details: err.to_string(),
        });
    }

    let mut lines = Vec::with_capacity(rows.len());
    for row in &rows {
        match row.description {
            Some(description) => {
                lines.push(format!("{} — {} [{}]", row.key, row.label, row.category));
                lines.push(format!("    {description}"));
            }
            None => lines.push(format!("{} — {} [{}]", row.key, row.label, row.category)),
        }
    }
    Ok(lines.join("\n"))
}
