//! Static guidance tables consumed by the section composer.
//!
//! Every lookup is total: a hit returns the table entry, a miss returns the
//! table's designated default. No key shape can make a lookup fail.

use super::platform::Category;

/// Prompt-type keys known to the generator UI.
pub const PROMPT_TYPE_KEYS: [&str; 10] = [
    "app-development",
    "content-writing",
    "marketing",
    "design",
    "coding",
    "data-analysis",
    "automation",
    "creative",
    "video-generation",
    "image-generation",
];

/// Output-format keys known to the generator UI.
pub const OUTPUT_FORMAT_KEYS: [&str; 7] =
    ["casual", "professional", "detailed", "role-based", "json", "markdown", "code-ready"];

/// Language keys known to the generator UI.
pub const LANGUAGE_KEYS: [&str; 8] =
    ["english", "urdu", "hindi", "arabic", "spanish", "french", "german", "chinese"];

/// Scenario guidance for a prompt type.
pub fn prompt_type_guidance(key: &str) -> &'static str {
    match key {
        "app-development" => "Explain architecture, APIs, testing, and rollout steps.",
        "content-writing" => "Call out audience, tone, SEO keywords, and CTAs.",
        "marketing" => "Include campaign goals, channels, messaging pillars, and KPIs.",
        "design" => "Describe layout, typography, color palette, and accessibility needs.",
        "coding" => "Request concrete code snippets with edge cases and validation.",
        "data-analysis" => "List dataset assumptions, analytical techniques, and visualization cues.",
        "automation" => "Detail triggers, integrations, guardrails, and monitoring.",
        "creative" => "Encourage narrative beats, pacing, and originality.",
        "video-generation" => "Outline scenes, camera motion, timing, and render specs.",
        "image-generation" => "Cover subject, composition, lighting, style, and negative prompts.",
        _ => "Deliver a structured, high-impact prompt with measurable outcomes.",
    }
}

/// Formatting guidance for an output format.
pub fn output_format_guidance(key: &str) -> &'static str {
    match key {
        "casual" => "Use a friendly voice with short paragraphs.",
        "professional" => "Keep a structured tone with numbered sections.",
        "detailed" => "Provide exhaustive instructions with sub-sections.",
        "role-based" => "Begin with \"You are...\" persona framing then directives.",
        "json" => "Return JSON with persona, context, instructions, quality_checks, follow_ups.",
        "markdown" => "Use Markdown headings, bullets, and code fences when relevant.",
        "code-ready" => "Focus on commands, code snippets, and inline comments.",
        _ => "Return the answer using Markdown headings and bullet lists.",
    }
}

/// Display label for a language key. Unknown keys fall back to English.
pub fn language_label(key: &str) -> &'static str {
    match key {
        "english" => "English",
        "urdu" => "Urdu",
        "hindi" => "Hindi",
        "arabic" => "Arabic",
        "spanish" => "Spanish",
        "french" => "French",
        "german" => "German",
        "chinese" => "Chinese",
        _ => "English",
    }
}

/// Per-platform voice line woven into the persona section.
pub fn platform_voice(key: &str) -> &'static str {
    match key {
        "chatgpt" => "Act like OpenAI ChatGPT/GPT-4 with precise system -> user framing.",
        "claude" => "Follow Anthropic Claude constitutional style with balanced reasoning.",
        "gemini" => "Use Google Gemini multi-modal friendly tone with explicit references.",
        "lovable" => "Behave like Lovable.dev copilot that scaffolds full-stack projects fast.",
        "midjourney" => "Speak in Midjourney v6 syntax with stylize and aspect ratios.",
        "dalle" => "Deliver crisp DALL·E prompts emphasizing composition and details.",
        "leonardo" => "Craft art-director instructions optimized for Leonardo AI.",
        "sora" => "Write cinematic video prompts for Sora including motion + timing notes.",
        "runway" => "Structure Runway shots with numbered beats and effects.",
        "copilot" => "Provide GitHub Copilot guidance with inline code instructions.",
        "perplexity" => "Use retrieval-friendly phrasing and cite references for Perplexity.",
        _ => "Be platform agnostic but insist on explicit structure.",
    }
}

/// Quality-checklist bucket for a category.
///
/// Image, video, and development have dedicated buckets; text and general
/// share the default bucket.
pub fn quality_checklist(category: Category) -> &'static [&'static str] {
    match category {
        Category::Image => &[
            "Subject, environment, and lighting are explicit.",
            "Style keywords + negative prompts included.",
            "Resolution / aspect ratio defined.",
        ],
        Category::Video => &[
            "Scenes broken into beats with timing.",
            "Camera motion + lighting cues described.",
            "Output duration / format noted.",
        ],
        Category::Development => &[
            "Tech stack, dependencies, and environments listed.",
            "Testing, validation, and monitoring captured.",
            "Security & rollout safeguards included.",
        ],
        Category::Text | Category::General => &[
            "Persona + objective clearly defined.",
            "Numbered steps with success metrics.",
            "Edge cases and follow-up prompts provided.",
        ],
    }
}

/// Follow-up idea bucket for a category. General is its own fallback.
pub fn follow_up_ideas(category: Category) -> &'static [&'static str] {
    match category {
        Category::Text => &[
            "Ask for three alternate tones or voices.",
            "Request a TL;DR executive summary.",
            "Generate probing questions to refine requirements.",
        ],
        Category::Image => &[
            "Explore alternate art styles or lighting setups.",
            "Vary camera lenses or aspect ratios.",
            "Generate mood board variations.",
        ],
        Category::Video => &[
            "Try faster pacing for social shorts.",
            "Swap camera rigs (handheld vs drone).",
            "Request shot-by-shot annotations.",
        ],
        Category::Development => &[
            "Ask for code snippets of the critical module.",
            "Request integration tests or monitoring hooks.",
        ],
        Category::General => &[
            "Brainstorm risks and mitigations.",
            "Identify datasets or references to include.",
        ],
    }
}
