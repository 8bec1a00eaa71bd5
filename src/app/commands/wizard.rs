//! Interactive request builder.
//!
//! Walks the same choices the generator form presents (platform, prompt
//! type, output format, language) and synthesizes the document locally.

use dialoguer::{Input, Select};

use crate::domain::synthesis::guidance::{LANGUAGE_KEYS, OUTPUT_FORMAT_KEYS, PROMPT_TYPE_KEYS};
use crate::domain::{AppError, PLATFORM_REGISTRY, SynthesisRequest, synthesize};

/// Run the wizard. Returns `None` when the user cancels a selection.
pub fn execute() -> Result<Option<String>, AppError> {
    let objective: String = Input::new()
        .with_prompt("What should the prompt accomplish?")
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read objective: {err}")))?;

    let Some(platform) = select("Select target platform", &platform_items())? else {
        return Ok(None);
    };
    let platform = PLATFORM_REGISTRY[platform].key;

    let Some(prompt_type) = select("Select prompt type", &PROMPT_TYPE_KEYS)? else {
        return Ok(None);
    };
    let Some(output_format) = select("Select output format", &OUTPUT_FORMAT_KEYS)? else {
        return Ok(None);
    };
    let Some(language) = select("Select language", &LANGUAGE_KEYS)? else {
        return Ok(None);
    };

    let reference: String = Input::new()
        .with_prompt("Reference material (leave empty to skip)")
        .allow_empty(true)
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read reference: {err}")))?;

    let Some(mode_index) = select("Select mode", &["generate", "enhance"])? else {
        return Ok(None);
    };

    let mut request = SynthesisRequest::new(
        objective,
        PROMPT_TYPE_KEYS[prompt_type],
        platform,
        OUTPUT_FORMAT_KEYS[output_format],
        LANGUAGE_KEYS[language],
    );

    if !reference.trim().is_empty() {
        request = request.with_reference(reference, None);
    }

    if mode_index == 1 {
        let existing: String = Input::new()
            .with_prompt("Paste the prompt to improve")
            .interact_text()
            .map_err(|err| AppError::Validation(format!("Failed to read prompt: {err}")))?;
        request = request.with_existing_prompt(existing);
    }

    let response = synthesize(&request);
    Ok(Some(response.prompt))
}

fn platform_items() -> Vec<String> {
    PLATFORM_REGISTRY
        .iter()
        .map(|entry| format!("{}: {}", entry.key, entry.label))
        .collect()
}

fn select<S: ToString>(prompt: &str, items: &[S]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Selection failed: {err}")))
}
