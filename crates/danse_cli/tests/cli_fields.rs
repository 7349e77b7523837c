use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture_path(name: &str) -> String {
    workspace_root()
        .join(format!("tests/fixtures/{name}.json"))
        .to_string_lossy()
        .to_string()
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_danse-sheet"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run danse-sheet CLI")
}

#[test]
fn cli_prints_single_field() {
    let path = fixture_path("arkanis");
    let output = run_cli(&["--ac", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "armor_class=14");
}

#[test]
fn cli_prints_multiple_requested_fields_in_fixed_order() {
    let path = fixture_path("arkanis");
    let output = run_cli(&["--initiative", "--hp", "--name", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["name=Arkanis", "hit_points=9", "initiative=+2"]);
}

#[test]
fn cli_reports_missing_armor_and_power_difficulty() {
    let path = fixture_path("minimal");
    let output = run_cli(&["--armor", "--power-dc", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["power_difficulty=none", "armor=none"]);
}

#[test]
fn cli_lists_mastered_skills() {
    let path = fixture_path("arkanis");
    let output = run_cli(&["--skills", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 18);
    assert!(stdout.contains("skill=Arcanes=+6 [Mastered]"));
    assert!(stdout.contains("skill=Athlétisme=-1\n"));
}

#[test]
fn cli_without_flags_prints_html_page() {
    let path = fixture_path("arkanis");
    let output = run_cli(&[&path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(stdout.contains("id=\"stats-block\""));
    assert!(stdout.contains("<title>Arkanis</title>"));
}

#[test]
fn cli_json_outputs_full_view_model() {
    let path = fixture_path("arkanis");
    let output = run_cli(&["--json", &path]);
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(json["name"], "Arkanis");
    assert_eq!(json["armor_class"], 14);
    assert_eq!(json["mastery_bonus"], 2);
}

#[test]
fn cli_json_with_fields_outputs_subset() {
    let path = fixture_path("arkanis");
    let output = run_cli(&["--json", "--saves", "--weapons", &path]);
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let keys: Vec<&str> = json
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["saves", "weapons"]);
}

#[test]
fn cli_text_prints_terminal_sheet() {
    let path = fixture_path("arkanis");
    let output = run_cli(&["--text", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DANSE MACABRE"));
    assert!(stdout.contains(" ::: Équipement :::"));
}

#[test]
fn cli_writes_output_file() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let out_path = dir.path().join("arkanis.html");
    let out = out_path.to_string_lossy().to_string();
    let path = fixture_path("arkanis");

    let output = run_cli(&["--stylesheet", "style.css", "--output", &out, &path]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let html = fs::read_to_string(&out_path).expect("output file should exist");
    assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
}

#[test]
fn cli_fails_on_missing_document() {
    let path = fixture_path("does-not-exist");
    let output = run_cli(&[&path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading"));
}

#[test]
fn cli_fails_on_malformed_document() {
    let path = fixture_path("malformed");
    let output = run_cli(&[&path]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse character document"));
}

#[test]
fn cli_rejects_json_with_text() {
    let path = fixture_path("arkanis");
    let output = run_cli(&["--json", "--text", &path]);
    assert_eq!(output.status.code(), Some(2));
}
