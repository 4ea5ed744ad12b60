//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run. Each test gets its own HOME
//! so tests never touch the developer's real configuration or each
//! other's state.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command under `home` and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "dawam-cli", "--quiet", "--"])
        .args(args)
        .env("HOME", home)
        .env("DAWAM_ENV", "dev")
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

fn parse_json(raw: &str) -> serde_json::Value {
    // Skip any notification lines printed ahead of the JSON payload.
    let start = raw.find(['{', '[']).expect("JSON in output");
    serde_json::from_str(&raw[start..]).expect("valid JSON output")
}

#[test]
fn help_works() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["--help"]);
    assert_eq!(code, 0);
}

#[test]
fn classify_applies_precedence() {
    let home = TempDir::new().unwrap();

    // 2024-12-02 (National Day) is a Monday: a holiday under the default
    // UAE configuration.
    let stdout = run_cli_success(home.path(), &["classify", "2024-12-02"]);
    assert_eq!(parse_json(&stdout)["kind"], "holiday");

    // 2024-01-05 is a Friday: weekend, and weekend beats holiday.
    let stdout = run_cli_success(home.path(), &["classify", "2024-01-05"]);
    assert_eq!(parse_json(&stdout)["kind"], "weekend");

    // 2024-01-08 is a plain Monday.
    let stdout = run_cli_success(home.path(), &["classify", "2024-01-08"]);
    assert_eq!(parse_json(&stdout)["kind"], "work");
}

#[test]
fn classify_rejects_malformed_dates() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["classify", "not-a-date"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid date"), "stderr: {stderr}");
}

#[test]
fn shift_set_then_preview() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &[
        "shift", "set",
        "--start-date", "2024-01-01",
        "--work-days", "4",
        "--leave-days", "2",
    ]);

    let stdout = run_cli_success(
        home.path(),
        &["shift", "preview", "--days", "12", "--from", "2024-01-01"],
    );
    let parsed = parse_json(&stdout);
    assert_eq!(parsed["cycle_length"], 6);

    let months = parsed["months"].as_array().expect("months array");
    let days: Vec<&serde_json::Value> = months
        .iter()
        .flat_map(|m| m["days"].as_array().unwrap().iter())
        .collect();
    assert_eq!(days.len(), 12);
    assert_eq!(days[0]["is_work_day"], true);
    assert_eq!(days[4]["is_work_day"], false);
    assert_eq!(days[5]["is_work_day"], false);
    assert_eq!(days[6]["is_work_day"], true);
}

#[test]
fn shift_set_rejects_out_of_bounds_blocks() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["shift", "set", "--work-days", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("work-days"), "stderr: {stderr}");
}

#[test]
fn stats_counters_sum_to_window() {
    let home = TempDir::new().unwrap();
    let stdout = run_cli_success(home.path(), &["stats", "--period", "month"]);
    let parsed = parse_json(&stdout);
    let stats = &parsed["stats"];
    let sum = stats["work_days"].as_u64().unwrap()
        + stats["weekend_days"].as_u64().unwrap()
        + stats["holiday_days"].as_u64().unwrap()
        + stats["personal_leave_days"].as_u64().unwrap();
    assert_eq!(sum, parsed["total_days"].as_u64().unwrap());
}

#[test]
fn note_lifecycle() {
    let home = TempDir::new().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["note", "add", "Buy groceries", "--content", "milk"],
    );
    let id = parse_json(&stdout)["note"]["id"]
        .as_str()
        .expect("note id")
        .to_string();

    let stdout = run_cli_success(home.path(), &["note", "list"]);
    let notes = parse_json(&stdout);
    assert!(notes.as_array().unwrap().iter().any(|n| n["id"] == id.as_str()));

    run_cli_success(home.path(), &["note", "complete", &id]);
    run_cli_success(home.path(), &["note", "delete", &id]);

    let (_, _, code) = run_cli(home.path(), &["note", "delete", &id]);
    assert_ne!(code, 0);
}

#[test]
fn past_due_reminder_fires_on_add() {
    let home = TempDir::new().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["note", "add", "Standup", "--remind-at", "2020-01-01 09:00"],
    );
    // The notification itself prints before the JSON payload.
    assert!(stdout.contains("Standup"), "stdout: {stdout}");
    assert_eq!(parse_json(&stdout)["reminder"]["outcome"], "fired_immediately");
}

#[test]
fn config_set_round_trips() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["config", "set", "work.country", "sa"]);
    let stdout = run_cli_success(home.path(), &["config", "get", "work.country"]);
    assert!(stdout.contains("sa"), "stdout: {stdout}");
}
