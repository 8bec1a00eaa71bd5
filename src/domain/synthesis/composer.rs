//! Section composition: turns a request and a resolved platform profile
//! into the ordered Markdown document.

use super::guidance;
use super::platform::PlatformProfile;
use super::request::SynthesisRequest;

/// A named document section. The body is empty only for the conditional
/// enhancement section when its gate is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedSection {
    pub heading: &'static str,
    pub body: String,
}

impl ComposedSection {
    fn new(heading: &'static str, body: String) -> Self {
        Self { heading, body }
    }
}

/// Reference line when no usable reference material was supplied.
const NO_REFERENCE_LINE: &str =
    "Reference material: none provided. Ask follow-up questions if unclear.";

/// Compose the ordered section list for a request.
///
/// Section order is fixed: Persona & Mission, Context & Goal, What to
/// Improve (conditional), Instruction Flow, Quality Checklist, Follow-up
/// Ideas.
pub fn compose(request: &SynthesisRequest, profile: &PlatformProfile) -> Vec<ComposedSection> {
    let language = guidance::language_label(&request.language);
    let voice = guidance::platform_voice(&request.ai_platform.trim().to_lowercase());
    let type_guidance = guidance::prompt_type_guidance(&request.prompt_type);
    let format_guidance = guidance::output_format_guidance(&request.output_format);

    let persona = format!(
        "Act as {label}. {description}\n{voice}\nRespond in {language} and keep tone {tone}.",
        label = profile.label,
        description = profile.description,
        voice = voice,
        language = language,
        tone = request.output_format,
    );

    let reference_line = match request.reference_trimmed() {
        Some(reference) => format!(
            "Reference material ({}): {}",
            request.reference_type.as_deref().unwrap_or("general"),
            reference
        ),
        None => NO_REFERENCE_LINE.to_string(),
    };
    let context = format!(
        "Objective:\n\"\"\"{objective}\"\"\"\n\n{reference_line}",
        objective = request.user_input.trim(),
    );

    let enhancement = match request.existing_prompt_trimmed() {
        Some(existing) if request.wants_enhancement() => format!(
            "\"\"\"\n{existing}\n\"\"\"\n\nTighten structure, remove redundancies, and keep all critical facts intact."
        ),
        _ => String::new(),
    };

    let instruction_flow = numbered_list(&[
        format!(
            "Frame the assistant as {} tuned for the \"{}\" scenario.",
            profile.label, request.prompt_type
        ),
        format!("Summarize the mission in {}: {}", language, request.user_input.trim()),
        format!("Lay out detailed steps following: {type_guidance}"),
        format!("Embed formatting guidance: {format_guidance}"),
        if request.reference_trimmed().is_some() {
            "Weave in the provided reference and call out missing details.".to_string()
        } else {
            "List clarifying questions when data feels incomplete.".to_string()
        },
        "Close with success metrics, risks, and next best actions.".to_string(),
    ]);

    let checklist_items = guidance::quality_checklist(profile.category);
    let follow_up_items = guidance::follow_up_ideas(profile.category);

    vec![
        ComposedSection::new("Persona & Mission", persona),
        ComposedSection::new("Context & Goal", context),
        ComposedSection::new("What to Improve", enhancement),
        ComposedSection::new("Instruction Flow", instruction_flow),
        ComposedSection::new("Quality Checklist", checklist(checklist_items)),
        ComposedSection::new("Follow-up Ideas", numbered_list(follow_up_items)),
    ]
}

/// Join sections into the final document.
///
/// Sections render as `## heading` followed by the body, separated by one
/// blank line. Empty bodies are skipped entirely so no orphan heading
/// appears.
pub fn render(sections: &[ComposedSection]) -> String {
    sections
        .iter()
        .filter(|section| !section.body.is_empty())
        .map(|section| format!("## {}\n{}", section.heading, section.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Number the non-empty items 1..N in order.
fn numbered_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| !item.is_empty())
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the non-empty items as checkbox lines.
fn checklist<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| !item.is_empty())
        .map(|item| format!("- [ ] {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
