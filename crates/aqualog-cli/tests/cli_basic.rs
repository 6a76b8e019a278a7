//! CLI E2E tests.
//!
//! Each test runs the compiled binary against its own data directory
//! (via `AQUALOG_DATA_DIR`) and verifies outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run the CLI and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_aqualog"))
        .env("AQUALOG_DATA_DIR", data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run the CLI and expect success.
fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

fn parse_json(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).expect("Failed to parse JSON output")
}

#[test]
fn add_reports_running_total() {
    let dir = TempDir::new().unwrap();
    let first = parse_json(&run_cli_success(dir.path(), &["drink", "add", "250"]));
    assert_eq!(first["type"], "DrinkAdded");
    assert_eq!(first["amount_ml"], 250);
    assert_eq!(first["total_ml"], 250);

    let second = parse_json(&run_cli_success(dir.path(), &["drink", "add", "500"]));
    assert_eq!(second["total_ml"], 750);
}

#[test]
fn status_json_reports_progress() {
    let dir = TempDir::new().unwrap();
    for amount in ["250", "500", "150"] {
        run_cli_success(dir.path(), &["drink", "add", amount]);
    }

    let snapshot = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(snapshot["type"], "StateSnapshot");
    assert_eq!(snapshot["total_ml"], 900);
    assert_eq!(snapshot["target_ml"], 2000);
    assert_eq!(snapshot["entry_count"], 3);
    assert_eq!(snapshot["progress_pct"].as_f64(), Some(45.0));
    assert_eq!(snapshot["progress"], "behind");
    assert_eq!(snapshot["urgency"], "ok");
}

#[test]
fn first_run_status_has_no_data() {
    let dir = TempDir::new().unwrap();
    let snapshot = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(snapshot["total_ml"], 0);
    assert_eq!(snapshot["urgency"], "no-data");
    assert!(snapshot["elapsed_min"].is_null());
    assert!(snapshot["last_drink_at"].is_null());
}

#[test]
fn delete_removes_one_entry_and_preserves_order() {
    let dir = TempDir::new().unwrap();
    for amount in ["100", "200", "300"] {
        run_cli_success(dir.path(), &["drink", "add", amount]);
    }

    let entries = parse_json(&run_cli_success(dir.path(), &["drink", "list", "--json"]));
    let id = entries[1]["id"].as_str().unwrap().to_string();

    let deleted = parse_json(&run_cli_success(dir.path(), &["drink", "delete", &id]));
    assert_eq!(deleted["type"], "EntryDeleted");
    assert_eq!(deleted["total_ml"], 400);

    let remaining = parse_json(&run_cli_success(dir.path(), &["drink", "list", "--json"]));
    let amounts: Vec<u64> = remaining
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["amount"].as_u64().unwrap())
        .collect();
    assert_eq!(amounts, vec![100, 300]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["drink", "add", "100"]);
    let out = run_cli_success(dir.path(), &["drink", "delete", "drink-0-missing"]);
    assert!(out.contains("noop"));

    let snapshot = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(snapshot["total_ml"], 100);
}

#[test]
fn zero_amount_is_noop() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(dir.path(), &["drink", "add", "0"]);
    assert!(out.contains("noop"));

    let snapshot = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(snapshot["total_ml"], 0);
    assert_eq!(snapshot["entry_count"], 0);
}

#[test]
fn reset_clears_entries_and_keeps_settings() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["settings", "target", "2500"]);
    run_cli_success(dir.path(), &["drink", "add", "300"]);

    let reset = parse_json(&run_cli_success(dir.path(), &["reset"]));
    assert_eq!(reset["type"], "DayReset");

    let snapshot = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(snapshot["total_ml"], 0);
    assert_eq!(snapshot["target_ml"], 2500);
}

#[test]
fn settings_persist_across_invocations() {
    let dir = TempDir::new().unwrap();
    let target = parse_json(&run_cli_success(dir.path(), &["settings", "target", "2500"]));
    assert_eq!(target["type"], "TargetChanged");
    assert_eq!(target["target_ml"], 2500);

    let interval = parse_json(&run_cli_success(dir.path(), &["settings", "interval", "90"]));
    assert_eq!(interval["interval_min"], 90);

    let shown = run_cli_success(dir.path(), &["settings", "show"]);
    assert!(shown.contains("target: 2500 ml"));
    assert!(shown.contains("reminder interval: 90 min"));
}

#[test]
fn out_of_range_settings_are_clamped() {
    let dir = TempDir::new().unwrap();
    let target = parse_json(&run_cli_success(dir.path(), &["settings", "target", "100"]));
    assert_eq!(target["target_ml"], 500);

    let interval = parse_json(&run_cli_success(dir.path(), &["settings", "interval", "999"]));
    assert_eq!(interval["interval_min"], 180);
}

#[test]
fn quick_preset_volumes_come_from_config() {
    let dir = TempDir::new().unwrap();
    let event = parse_json(&run_cli_success(dir.path(), &["drink", "quick", "glass"]));
    assert_eq!(event["amount_ml"], 250);

    run_cli_success(dir.path(), &["config", "set", "quick_add.glass_ml", "330"]);
    let event = parse_json(&run_cli_success(dir.path(), &["drink", "quick", "glass"]));
    assert_eq!(event["amount_ml"], 330);
}

#[test]
fn config_get_set_roundtrip() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(dir.path(), &["config", "get", "notifications.repeat_when_overdue"]);
    assert_eq!(out.trim(), "false");

    run_cli_success(
        dir.path(),
        &["config", "set", "notifications.repeat_when_overdue", "true"],
    );
    let out = run_cli_success(dir.path(), &["config", "get", "notifications.repeat_when_overdue"]);
    assert_eq!(out.trim(), "true");
}

#[test]
fn unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));

    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "no.such.key", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown configuration key"));
}

#[test]
fn watch_once_reports_reminder_state() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(dir.path(), &["watch", "--once"]);
    assert!(out.contains("no drinks yet today"));

    run_cli_success(dir.path(), &["drink", "add", "250"]);
    let out = run_cli_success(dir.path(), &["watch", "--once"]);
    assert!(out.contains("last drink"));
    assert!(out.contains("(ok)"));
}
