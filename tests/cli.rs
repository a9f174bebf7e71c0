//! CLI tests for the headless commands.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `pomo` command isolated from the user's home and environment.
fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("POMO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_simulate_default_scenario_json() {
    let home = TempDir::new().unwrap();
    let output = pomo(&home)
        .args(["simulate", "--ticks", "1501", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["alerts"], 1);
    assert_eq!(value["snapshot"]["is_running"], true);
    assert_eq!(value["snapshot"]["session"]["state"], "on_break");
    assert_eq!(value["snapshot"]["session"]["remaining_seconds"], 300);
}

#[test]
fn test_simulate_stop_is_absent() {
    let home = TempDir::new().unwrap();
    let output = pomo(&home)
        .args(["simulate", "--ticks", "1501", "--stop", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["snapshot"]["is_running"], false);
    assert_eq!(value["snapshot"]["session"]["state"], "absent");
}

#[test]
fn test_simulate_pretty() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["simulate", "--focus", "5", "--break", "1", "--ticks", "30", "--pause"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation (30 ticks, 0 alerts)"))
        .stdout(predicate::str::contains("04:30 remaining"))
        .stdout(predicate::str::contains("PAUSED"));
}

#[test]
fn test_out_of_range_focus_rejected() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["simulate", "--focus", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("65"));
}

#[test]
fn test_config_show_defaults_without_file() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interval_ms: 1000"));
}

#[test]
fn test_config_path_uses_home() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomo/config.yaml"));
}

#[test]
fn test_invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.yaml");
    std::fs::write(&config, "tick:\n  interval_ms: 0\n").unwrap();

    pomo(&home)
        .arg("--config")
        .arg(&config)
        .args(["simulate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("tick.interval_ms"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"));
}
