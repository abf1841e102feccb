//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::{Command, Output};

use httpmock::prelude::*;

/// Run `ontrack` isolated from the user's config and environment.
fn run_ontrack(args: &[&str]) -> (Output, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_ontrack"))
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env_remove("ONTRACK_ENDPOINT_URL")
        .env_remove("ONTRACK_AUTH_TOKEN")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute ontrack");
    (output, temp_dir)
}

fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{} failed with exit code {:?}. stderr: {}",
        what,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_preview_prints_sample_widget() {
    let (output, _dir) = run_ontrack(&["preview"]);
    assert_success(&output, "ontrack preview");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("800  +20"), "got: {}", stdout);
    assert!(stdout.contains("10.3 days left"), "got: {}", stdout);
    assert!(stdout.contains("next refresh after"), "got: {}", stdout);
}

#[test]
fn test_stdout_is_clean_by_default() {
    let (output, _dir) = run_ontrack(&["preview"]);
    assert_success(&output, "ontrack preview");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
}

#[test]
fn test_verbose_emits_json_logs_on_stderr() {
    let (output, _dir) = run_ontrack(&["-v", "preview"]);
    assert_success(&output, "ontrack -v preview");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""event":"core.refresh.cycle_completed""#),
        "Verbose mode should log cycle completion, got: {}",
        stderr
    );
}

#[test]
fn test_render_sample_is_drawable_json() {
    let (output, _dir) = run_ontrack(&["render", "--sample"]);
    assert_success(&output, "ontrack render --sample");

    let scene: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("render output should be JSON");
    let drawables = scene["drawables"].as_array().unwrap();
    assert_eq!(drawables.len(), 6);

    let kinds: Vec<_> = drawables
        .iter()
        .map(|d| d["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["ring", "text", "text", "ring", "ring", "text"]);
    assert_eq!(drawables[5]["content"], "10.3 days left");
}

#[test]
fn test_snapshot_from_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/budget_stat")
            .header("Auth-Token", "test-token");
        then.status(200).json_body(serde_json::json!({
            "budget_amount": 1000,
            "total_balance": 800,
            "balance_deviation": -20,
            "budget_days_to_expiration": 4.26
        }));
    });

    let url = server.url("/budget_stat");
    let (output, _dir) = run_ontrack(&[
        "snapshot",
        "--json",
        "--url",
        &url,
        "--token",
        "test-token",
    ]);
    assert_success(&output, "ontrack snapshot");
    mock.assert();

    let timeline: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &timeline["entries"][0];
    assert_eq!(entry["outcome"], "rendered");
    assert_eq!(entry["snapshot"]["deviation_color"], "negative");
    assert_eq!(entry["snapshot"]["deviation_label"], "-20");
    assert_eq!(entry["snapshot"]["days_left_label"], "4.3");
    assert_eq!(timeline["policy"]["policy"], "after");
}

#[test]
fn test_snapshot_unreachable_endpoint_shows_placeholder() {
    let (output, _dir) = run_ontrack(&[
        "snapshot",
        "--json",
        "--url",
        "http://127.0.0.1:1/budget_stat",
        "--token",
        "t",
    ]);
    assert_success(&output, "ontrack snapshot (unreachable)");

    let timeline: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &timeline["entries"][0];
    assert_eq!(entry["outcome"], "rendered_with_fallback");
    assert_eq!(entry["snapshot"]["spent_fraction"], 0.0);
    assert_eq!(entry["snapshot"]["days_left_label"], "0.0");
}

#[test]
fn test_snapshot_without_token_fails() {
    let (output, _dir) = run_ontrack(&[
        "snapshot",
        "--url",
        "https://budget.example.com/budget_stat",
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing auth token"), "got: {}", stderr);
}
