//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "resteleven-cli", "--"])
        .args(args)
        .env("RESTELEVEN_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_entry_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["entry", "add", "--date", "2025-01-06", "--start", "08:00", "--end", "16:30", "--break", "30"],
    );
    assert_eq!(code, 0, "entry add failed");
    assert!(stdout.contains("Entry recorded:"));

    let (code, stdout, _) = run_cli(dir.path(), &["entry", "list", "--json"]);
    assert_eq!(code, 0, "entry list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], "2025-01-06");
    assert_eq!(entries[0]["break_minutes"], 30);
}

#[test]
fn test_entry_add_rejects_inverted_shift() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(
        dir.path(),
        &["entry", "add", "--date", "2025-01-06", "--start", "16:00", "--end", "08:00"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("must be after start"));
}

#[test]
fn test_suggest_without_history() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["suggest", "--date", "2025-01-07", "--json"]);
    assert_eq!(code, 0, "suggest failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["suggestion"].is_null());
}

#[test]
fn test_suggest_moves_start_after_late_shift() {
    let dir = tempfile::tempdir().unwrap();
    for args in [
        ["entry", "add", "--date", "2024-12-31", "--start", "06:00", "--end", "14:00"],
        ["entry", "add", "--date", "2025-01-06", "--start", "10:00", "--end", "20:00"],
    ] {
        let (code, _, _) = run_cli(dir.path(), &args);
        assert_eq!(code, 0);
    }

    let (code, stdout, _) = run_cli(dir.path(), &["suggest", "--date", "2025-01-07", "--json"]);
    assert_eq!(code, 0, "suggest failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["suggestion"]["start"], "07:00:00");
    assert_eq!(parsed["suggestion"]["respects_rest"], false);
}

#[test]
fn test_entry_edit_latest() {
    let dir = tempfile::tempdir().unwrap();
    for args in [
        ["entry", "add", "--date", "2025-01-03", "--start", "08:00", "--end", "12:00"],
        ["entry", "add", "--date", "2025-01-06", "--start", "08:00", "--end", "12:00"],
    ] {
        let (code, _, _) = run_cli(dir.path(), &args);
        assert_eq!(code, 0);
    }

    let (code, stdout, _) = run_cli(dir.path(), &["entry", "edit", "--end", "13:30", "--comment", "late"]);
    assert_eq!(code, 0, "entry edit failed");
    assert!(stdout.contains("Entry updated:"));

    let (_, stdout, _) = run_cli(dir.path(), &["entry", "list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["end"], "12:00:00");
    assert_eq!(parsed[1]["end"], "13:30:00");
    assert_eq!(parsed[1]["comment"], "late");
    assert!(!parsed[1]["modified_at"].is_null());
}

#[test]
fn test_entry_edit_rejects_inverted_shift() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(
        dir.path(),
        &["entry", "add", "--date", "2025-01-06", "--start", "08:00", "--end", "12:00"],
    );
    assert_eq!(code, 0);

    let (code, _, stderr) = run_cli(dir.path(), &["entry", "edit", "--end", "07:00"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("must be after start"));

    let (code, _, stderr) = run_cli(dir.path(), &["entry", "edit", "00000000-0000-4000-8000-000000000000"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("entry not found"));
}

#[test]
fn test_suggest_cold_start_is_not_reported_as_adjusted() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(
        dir.path(),
        &["entry", "add", "--date", "2025-01-06", "--start", "08:00", "--end", "16:00"],
    );
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(dir.path(), &["suggest", "--date", "2025-01-07"]);
    assert_eq!(code, 0, "suggest failed");
    assert!(stdout.contains("no pattern for this weekday yet"));
    assert!(!stdout.contains("adjusted"));
}

#[test]
fn test_config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "learning.alpha", "0.5"]);
    assert_eq!(code, 0, "config set failed");

    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "learning.alpha"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "0.5");

    let (code, _, _) = run_cli(dir.path(), &["config", "get", "learning.beta"]);
    assert_ne!(code, 0);
}

#[test]
fn test_pattern_show_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(
        dir.path(),
        &["entry", "add", "--date", "2025-01-06", "--start", "08:00", "--end", "16:00", "--break", "30"],
    );
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(dir.path(), &["pattern", "show", "--day", "mon", "--json"]);
    assert_eq!(code, 0, "pattern show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["samples"], 1);
    assert_eq!(parsed[0]["confidence"], 0.35);
}
