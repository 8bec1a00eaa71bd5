use serde::Deserialize;

/// Tuning constants for the quality heuristic.
///
/// The shape of the formula is fixed (monotonic in length and structure,
/// clamped range); the constants are tuning values with no deeper meaning
/// and may be overridden from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Fixed offset every document starts from.
    pub base: u32,
    /// Characters per length point.
    pub length_divisor: u32,
    /// Maximum points the length contribution can add.
    pub length_cap: u32,
    /// Points per `## ` heading occurrence.
    pub heading_bonus: u32,
    /// Points when at least one `- [ ]` marker is present.
    pub checklist_bonus: u32,
    /// Lower clamp; no well-formed document scores below this.
    pub floor: u32,
    /// Upper clamp.
    pub ceiling: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            base: 62,
            length_divisor: 50,
            length_cap: 40,
            heading_bonus: 3,
            checklist_bonus: 8,
            floor: 72,
            ceiling: 100,
        }
    }
}

/// Score a document deterministically.
///
/// Pure function of the text and config: identical input always yields the
/// identical score. The empty document scores the floor.
pub fn estimate_score(text: &str, config: &ScoreConfig) -> u32 {
    if text.is_empty() {
        return config.floor;
    }

    let length_points =
        (text.chars().count() as u32 / config.length_divisor.max(1)).min(config.length_cap);
    let heading_points = text.matches("## ").count() as u32 * config.heading_bonus;
    let checklist_points = if text.contains("- [ ]") { config.checklist_bonus } else { 0 };

    (config.base + length_points + heading_points + checklist_points)
        .clamp(config.floor, config.ceiling)
}
