use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Every test runs in a scratch directory with no API key so the CLI
/// exercises the offline/heuristic-only paths deterministically.
fn augur(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("augur");
    cmd.current_dir(temp.path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("AUGUR_DEBUG");
    cmd
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("augur"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scam Omen Reader"));
}

#[test]
fn test_empty_text_short_circuits() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .args(["text", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a message."));
}

#[test]
fn test_text_without_gateway_degrades() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .args(["text", "you won a prize, claim now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis failed."));
}

#[test]
fn test_link_always_carries_spelling_tip() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .args(["link", "https://paypa1-secure.example", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("misspellings"));
}

#[test]
fn test_image_heuristics_flag_edited_screenshot() {
    let temp = TempDir::new().unwrap();
    let meta_path = temp.path().join("meta.json");
    fs::write(
        &meta_path,
        r#"{"software": "Adobe Photoshop CC", "isAlteredTimestamp": true}"#,
    )
    .unwrap();

    // 40 (tool) + 30 (timestamp) + 20 (ratio) = 90: High under the
    // fallback table, so the process exits 1.
    augur(&temp)
        .args([
            "image",
            "--width",
            "1080",
            "--height",
            "1920",
            "--platform",
            "Google Pay",
            "--metadata",
            "meta.json",
            "--format",
            "json",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"score\": 90"))
        .stdout(predicate::str::contains("\"riskLevel\": \"High\""))
        .stdout(predicate::str::contains("Adobe Photoshop CC"))
        .stdout(predicate::str::contains("\"layoutCheck\": \"Failed\""));
}

#[test]
fn test_image_clean_metadata_passes() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .args([
            "image",
            "--width",
            "1080",
            "--height",
            "2340",
            "--platform",
            "Google Pay",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("LOW RISK"))
        .stdout(predicate::str::contains("Passed"));
}

#[test]
fn test_image_unknown_platform_skips_geometry() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .args([
            "image",
            "--width",
            "1080",
            "--height",
            "1920",
            "--platform",
            "Venmo",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 0"));
}

#[test]
fn test_image_invalid_metadata_json_is_an_error() {
    let temp = TempDir::new().unwrap();
    let meta_path = temp.path().join("meta.json");
    fs::write(&meta_path, "{not json").unwrap();

    augur(&temp)
        .args([
            "image",
            "--width",
            "100",
            "--height",
            "100",
            "--metadata",
            "meta.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid metadata JSON"));
}

#[test]
fn test_templates_lists_known_platforms() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google Pay"))
        .stdout(predicate::str::contains("PayPal"));
}

#[test]
fn test_unknown_format_rejected() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .args(["text", "hello", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_markdown_output() {
    let temp = TempDir::new().unwrap();
    augur(&temp)
        .args([
            "image",
            "--width",
            "1080",
            "--height",
            "2340",
            "--format",
            "markdown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Augur Risk Report"));
}
