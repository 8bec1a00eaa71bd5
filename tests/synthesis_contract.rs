//! Public-API contract for the synthesis engine.

use promptnx::{Category, SynthesisMode, SynthesisRequest, synthesize, synthesize_with_reason};

mod common;

use common::landing_page_request;

#[test]
fn end_to_end_document_shape() {
    let response = synthesize(&landing_page_request());

    assert!(response.success);
    assert!((72..=100).contains(&response.score));
    assert!(response.metadata.fallback);
    assert_eq!(response.metadata.provider, "promptnx-local");
    assert_eq!(response.metadata.model, "offline-synthesizer-v1");
    assert_eq!(response.metadata.mode, SynthesisMode::Generate);

    let prompt = &response.prompt;
    assert!(prompt.contains("Write a landing page"));

    // Headings appear in the fixed order.
    let positions: Vec<usize> = [
        "## Persona & Mission",
        "## Context & Goal",
        "## Instruction Flow",
        "## Quality Checklist",
        "## Follow-up Ideas",
    ]
    .iter()
    .map(|heading| prompt.find(heading).unwrap_or_else(|| panic!("missing {heading}")))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn generate_mode_has_no_enhancement_heading() {
    let response = synthesize(&landing_page_request());
    assert!(!response.prompt.contains("## What to Improve"));
}

#[test]
fn enhance_mode_embeds_the_existing_prompt() {
    let request = landing_page_request().with_existing_prompt("X");
    let response = synthesize(&request);
    assert!(response.prompt.contains("## What to Improve"));
    assert!(response.prompt.contains("X"));
    assert_eq!(response.metadata.mode, SynthesisMode::Enhance);
}

#[test]
fn enhance_mode_with_blank_prompt_behaves_like_generate() {
    let request = landing_page_request()
        .with_mode(SynthesisMode::Enhance);
    let response = synthesize(&request);
    assert!(!response.prompt.contains("## What to Improve"));
}

#[test]
fn reference_gating_is_verbatim() {
    let without = synthesize(&landing_page_request());
    assert!(
        without
            .prompt
            .contains("Reference material: none provided. Ask follow-up questions if unclear.")
    );

    let with = synthesize(
        &landing_page_request().with_reference("ref", Some("sketch".to_string())),
    );
    assert!(with.prompt.contains("Reference material (sketch): ref"));
}

#[test]
fn unknown_prompt_type_falls_back_to_default_guidance() {
    let mut request = landing_page_request();
    request.prompt_type = "nonexistent-category".to_string();
    let response = synthesize(&request);
    assert!(
        response
            .prompt
            .contains("Deliver a structured, high-impact prompt with measurable outcomes.")
    );
}

#[test]
fn unknown_platform_resolves_to_general_buckets() {
    let mut request = landing_page_request();
    request.ai_platform = "some-future-model".to_string();
    let response = synthesize(&request);

    assert_eq!(response.metadata.category, Category::General);
    assert!(response.prompt.contains("- [ ] Persona + objective clearly defined."));
    assert!(response.prompt.contains("Brainstorm risks and mitigations."));
}

#[test]
fn category_buckets_follow_the_platform() {
    let image = synthesize(&SynthesisRequest::new(
        "Poster art",
        "image-generation",
        "midjourney",
        "detailed",
        "english",
    ));
    assert_eq!(image.metadata.category, Category::Image);
    assert!(image.prompt.contains("- [ ] Subject, environment, and lighting are explicit."));
    assert!(image.prompt.contains("Explore alternate art styles or lighting setups."));

    let development = synthesize(&SynthesisRequest::new(
        "Build a REST API",
        "app-development",
        "copilot",
        "code-ready",
        "english",
    ));
    assert_eq!(development.metadata.category, Category::Development);
    assert!(development.prompt.contains("- [ ] Tech stack, dependencies, and environments listed."));
}

#[test]
fn diagnostic_reason_is_forwarded() {
    let response = synthesize_with_reason(&landing_page_request(), "upstream timed out");
    assert_eq!(response.metadata.reason.as_deref(), Some("upstream timed out"));

    let silent = synthesize(&landing_page_request());
    assert_eq!(silent.metadata.reason, None);
}

#[test]
fn repeated_calls_are_byte_identical() {
    let request = landing_page_request()
        .with_reference("brand palette", None)
        .with_existing_prompt("Old prompt");
    let first = synthesize(&request);
    let second = synthesize(&request);
    assert_eq!(first.prompt, second.prompt);
    assert_eq!(first.score, second.score);
}
