//! CLI flows for the promptnx binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn promptnx() -> Command {
    Command::cargo_bin("promptnx").expect("binary builds")
}

const FLAG_ARGS: [&str; 10] = [
    "--input",
    "Write a landing page",
    "--type",
    "marketing",
    "--platform",
    "chatgpt",
    "--output-format",
    "markdown",
    "--language",
    "english",
];

#[test]
fn generate_from_flags_prints_the_document() {
    promptnx()
        .arg("generate")
        .args(FLAG_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Persona & Mission"))
        .stdout(predicate::str::contains("Write a landing page"))
        .stdout(predicate::str::contains("## Follow-up Ideas"));
}

#[test]
fn generate_json_emits_the_envelope() {
    let output = promptnx()
        .arg("generate")
        .args(FLAG_ARGS)
        .args(["--format", "json", "--reason", "provider offline"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["metadata"]["provider"], "promptnx-local");
    assert_eq!(value["metadata"]["fallback"], true);
    assert_eq!(value["metadata"]["reason"], "provider offline");
    let score = value["score"].as_u64().unwrap();
    assert!((72..=100).contains(&score));
}

#[test]
fn generate_from_json_request_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    std::fs::write(
        &path,
        r#"{
            "userInput": "Design a logo",
            "promptType": "design",
            "aiPlatform": "midjourney",
            "outputFormat": "detailed",
            "language": "english",
            "visualReference": "pencil sketch",
            "referenceType": "sketch"
        }"#,
    )
    .unwrap();

    promptnx()
        .args(["generate", "--request"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Design a logo"))
        .stdout(predicate::str::contains("Reference material (sketch): pencil sketch"));
}

#[test]
fn generate_from_yaml_request_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.yml");
    std::fs::write(
        &path,
        "userInput: Storyboard a teaser\npromptType: video-generation\naiPlatform: sora\noutputFormat: detailed\nlanguage: english\n",
    )
    .unwrap();

    promptnx()
        .args(["generate", "--request"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Storyboard a teaser"))
        .stdout(predicate::str::contains("Sora"));
}

#[test]
fn enhance_requires_an_existing_prompt() {
    promptnx()
        .arg("enhance")
        .args(FLAG_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("existingPrompt is required"));
}

#[test]
fn enhance_embeds_the_existing_prompt() {
    promptnx()
        .arg("enhance")
        .args(FLAG_ARGS)
        .args(["--existing-prompt", "Old prompt body"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## What to Improve"))
        .stdout(predicate::str::contains("Old prompt body"));
}

#[test]
fn missing_required_flags_fail_fast() {
    promptnx()
        .args(["generate", "--input", "Just an objective"])
        .assert()
        .failure();
}

#[test]
fn platforms_lists_the_registry() {
    promptnx()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatgpt"))
        .stdout(predicate::str::contains("Universal AI"));
}

#[test]
fn platforms_json_is_machine_readable() {
    let output = promptnx().args(["platforms", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().any(|row| row["key"] == "claude"));
}

#[test]
fn score_config_override_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.toml");
    std::fs::write(&path, "[score]\nfloor = 95\n").unwrap();

    let output = promptnx()
        .arg("generate")
        .args(FLAG_ARGS)
        .args(["--format", "json", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["score"].as_u64().unwrap() >= 95);
}
