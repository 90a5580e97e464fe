use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn preview() -> Command {
    let mut cmd = Command::cargo_bin("tessera-duration-preview").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_output(args: &[&str]) -> Value {
    let output = preview().args(args).arg("--format").arg("json").output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_rows_for_a_full_day() {
    preview()
        .args(["rows", "--max", "86400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hours: 25"))
        .stdout(predicate::str::contains("minutes: 60"))
        .stdout(predicate::str::contains("seconds: 60"));
}

#[test]
fn test_rows_json_for_ninety_seconds() {
    let rows = json_output(&["rows", "--max", "90"]);
    assert_eq!(rows["hours"], 1);
    assert_eq!(rows["minutes"], 1);
    assert_eq!(rows["seconds"], 60);
    assert_eq!(rows["maximum_secs"], 90.0);
}

#[test]
fn test_select_reports_selection() {
    preview()
        .args(["select", "1h2m5s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1h 2m 5s (3725s)"))
        .stdout(predicate::str::contains("hours -> 1 h"));
}

#[test]
fn test_select_below_minimum_fails() {
    preview()
        .args(["select", "30", "--min", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("less than the minimum"));
}

#[test]
fn test_scroll_past_maximum_is_corrected() {
    preview()
        .args(["scroll", "hours", "24", "--at", "3725"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Corrected"))
        .stdout(predicate::str::contains("23 h"))
        .stdout(predicate::str::contains("listener: not notified"));
}

#[test]
fn test_scroll_correction_json() {
    let report = json_output(&["scroll", "h", "24", "--at", "3725"]);
    assert_eq!(report["event"], "corrected");
    assert_eq!(report["wheel"], "hours");
    assert_eq!(report["requested_row"], 24);
    assert_eq!(report["row"], 23);
    assert_eq!(report["selection"]["duration_secs"], 82925.0);
}

#[test]
fn test_scroll_valid_row_notifies_listener() {
    preview()
        .args(["scroll", "minutes", "0", "--max", "59"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed"))
        .stdout(predicate::str::contains("on_duration_selected(0s)"));
}

#[test]
fn test_scroll_below_minimum_still_commits() {
    let report = json_output(&["scroll", "seconds", "5", "--min", "10m"]);
    assert_eq!(report["event"], "committed");
    assert_eq!(report["notified_secs"][0], 5.0);
    assert_eq!(report["reloads"], 1);
}

#[test]
fn test_inverted_bounds_are_rejected() {
    preview()
        .args(["rows", "--min", "100", "--max", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("greater than the maximum"));
}

#[test]
fn test_clamp_to_day() {
    let clamped = json_output(&["rows", "--max", "100000", "--clamp-to-day"]);
    assert_eq!(clamped["hours"], 25);
    assert_eq!(clamped["maximum_secs"], 86400.0);

    let unbounded = json_output(&["rows", "--max", "100000"]);
    assert_eq!(unbounded["hours"], 28);
}

#[test]
fn test_config_file_sets_bounds() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("picker.toml");
    fs::write(
        &config_path,
        "[picker]\nminimum = 0\nmaximum = \"1h\"\nanimated = false\n",
    )
    .unwrap();

    preview()
        .arg("--config")
        .arg(&config_path)
        .arg("rows")
        .assert()
        .success()
        .stdout(predicate::str::contains("hours: 2"));

    let report = json_output(&[
        "--config",
        config_path.to_str().unwrap(),
        "scroll",
        "minutes",
        "59",
        "--at",
        "1h",
    ]);
    assert_eq!(report["event"], "corrected");
    assert_eq!(report["row"], 0);
    assert_eq!(report["animated"], false);
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    preview()
        .args(["rows", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_show_renders_wheels() {
    preview()
        .args(["show", "--at", "3725", "--window", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hours (25)"))
        .stdout(predicate::str::contains("> 1 h"))
        .stdout(predicate::str::contains("> 5 s"));
}

#[test]
fn test_invalid_duration_argument() {
    preview()
        .args(["select", "1h30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}
