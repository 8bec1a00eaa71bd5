use std::fmt;

use serde::Serialize;

/// Coarse capability category of a target AI platform.
///
/// Drives which quality-checklist and follow-up buckets a synthesized
/// document draws from. The set is closed; arbitrary category strings are
/// normalized through [`Category::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Conversational / text-first models (ChatGPT, Claude, Gemini, ...)
    Text,
    /// Image generators (Midjourney, DALL·E, Leonardo)
    Image,
    /// Video generators (Sora, Runway)
    Video,
    /// Coding and scaffolding assistants (Copilot, Lovable)
    Development,
    /// Platform-agnostic catch-all
    General,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Text,
        Category::Image,
        Category::Video,
        Category::Development,
        Category::General,
    ];

    /// Lowercase key for this category.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Image => "image",
            Category::Video => "video",
            Category::Development => "development",
            Category::General => "general",
        }
    }

    /// Normalize an arbitrary category string to a `Category`.
    ///
    /// Total over any input: near-synonyms map to their canonical bucket
    /// ("research" is text-shaped) and everything unrecognized degrades to
    /// `General` rather than failing.
    pub fn from_key(key: &str) -> Category {
        match key.trim().to_lowercase().as_str() {
            "text" | "research" => Category::Text,
            "image" => Category::Image,
            "video" => Category::Video,
            "development" => Category::Development,
            _ => Category::General,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Resolved display identity for a target AI platform.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformProfile {
    /// Human-readable platform name shown in the persona section.
    pub label: String,
    /// One-line prompting posture for the platform.
    pub description: String,
    /// Capability category used for checklist and follow-up selection.
    pub category: Category,
}

/// A platform registry entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformEntry {
    /// Lowercase registry key.
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: Category,
}

impl PlatformEntry {
    fn profile(&self) -> PlatformProfile {
        PlatformProfile {
            label: self.label.to_string(),
            description: self.description.to_string(),
            category: self.category,
        }
    }
}

/// The platform registry. Must stay consistent with the platform choices
/// the generator UI presents to users.
pub const PLATFORM_REGISTRY: [PlatformEntry; 12] = [
    PlatformEntry {
        key: "chatgpt",
        label: "ChatGPT / GPT-4",
        description: "System + user style with precise role instructions.",
        category: Category::Text,
    },
    PlatformEntry {
        key: "claude",
        label: "Claude (Anthropic)",
        description: "Constitutional style, emphasize safety guardrails.",
        category: Category::Text,
    },
    PlatformEntry {
        key: "gemini",
        label: "Google Gemini",
        description: "Multimodal aware with references and reasoning.",
        category: Category::Text,
    },
    PlatformEntry {
        key: "lovable",
        label: "Lovable.dev",
        description: "Full-stack scaffolding + roadmap cues.",
        category: Category::Development,
    },
    PlatformEntry {
        key: "midjourney",
        label: "Midjourney",
        description: "v6 syntax, stylize, aspect ratios.",
        category: Category::Image,
    },
    PlatformEntry {
        key: "dalle",
        label: "DALL·E",
        description: "Composition, camera, and styling keywords.",
        category: Category::Image,
    },
    PlatformEntry {
        key: "leonardo",
        label: "Leonardo AI",
        description: "Art direction with fine-grained controls.",
        category: Category::Image,
    },
    PlatformEntry {
        key: "sora",
        label: "Sora",
        description: "Cinematic shots with motion + pacing.",
        category: Category::Video,
    },
    PlatformEntry {
        key: "runway",
        label: "Runway",
        description: "Storyboard beats with transitions.",
        category: Category::Video,
    },
    PlatformEntry {
        key: "copilot",
        label: "GitHub Copilot",
        description: "Inline code + expected behavior.",
        category: Category::Development,
    },
    PlatformEntry {
        key: "perplexity",
        label: "Perplexity AI",
        description: "Retrieval cues and citation instructions.",
        category: Category::Text,
    },
    PlatformEntry {
        key: "universal",
        label: "Universal AI",
        description: "Platform agnostic with explicit structure.",
        category: Category::General,
    },
];

/// Fallback description when a platform is not in the registry.
const UNKNOWN_PLATFORM_DESCRIPTION: &str = "Apply best practices for any LLM.";

/// Resolve a platform identifier to its profile.
///
/// Lookup is case-insensitive. Unknown identifiers resolve to a generic
/// profile that keeps the caller-supplied name as the label (or
/// "Universal AI" when the identifier is blank) so resolution never fails.
pub fn resolve_platform(ai_platform: &str) -> PlatformProfile {
    let key = ai_platform.trim().to_lowercase();

    if let Some(entry) = PLATFORM_REGISTRY.iter().find(|entry| entry.key == key) {
        return entry.profile();
    }

    let label = if key.is_empty() { "Universal AI".to_string() } else { ai_platform.trim().to_string() };
    PlatformProfile {
        label,
        description: UNKNOWN_PLATFORM_DESCRIPTION.to_string(),
        category: Category::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_are_lowercase() {
        for category in Category::ALL {
            assert_eq!(category.key(), category.key().to_lowercase());
        }
    }

    #[test]
    fn category_from_key_roundtrips() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), category);
        }
    }

    #[test]
    fn category_aliases_normalize() {
        assert_eq!(Category::from_key("research"), Category::Text);
        assert_eq!(Category::from_key("  Research "), Category::Text);
    }

    #[test]
    fn category_unknown_degrades_to_general() {
        assert_eq!(Category::from_key("audio"), Category::General);
        assert_eq!(Category::from_key(""), Category::General);
    }

    #[test]
    fn registry_keys_are_lowercase_and_unique() {
        for entry in &PLATFORM_REGISTRY {
            assert_eq!(entry.key, entry.key.to_lowercase());
        }
        let mut keys: Vec<&str> = PLATFORM_REGISTRY.iter().map(|e| e.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), PLATFORM_REGISTRY.len());
    }

    #[test]
    fn resolve_known_platform() {
        let profile = resolve_platform("midjourney");
        assert_eq!(profile.label, "Midjourney");
        assert_eq!(profile.category, Category::Image);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let profile = resolve_platform("ChatGPT");
        assert_eq!(profile.label, "ChatGPT / GPT-4");
        assert_eq!(profile.category, Category::Text);
    }

    #[test]
    fn resolve_unknown_platform_keeps_name() {
        let profile = resolve_platform("mistral");
        assert_eq!(profile.label, "mistral");
        assert_eq!(profile.category, Category::General);
        assert!(!profile.description.is_empty());
    }

    #[test]
    fn resolve_blank_platform_is_universal() {
        let profile = resolve_platform("   ");
        assert_eq!(profile.label, "Universal AI");
        assert_eq!(profile.category, Category::General);
    }
}
