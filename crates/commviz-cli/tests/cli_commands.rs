//! CLI command tests
//!
//! Every test gets its own data directory, so progress and config never
//! leak between runs.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_list_shows_all_topics() {
    let env = TestEnv::new();
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encryption/Decryption"))
        .stdout(predicate::str::contains("Multiplexing/Demultiplexing"))
        .stdout(predicate::str::contains("Progress: 0/4 (0%)"));
}

#[test]
fn test_describe_prints_panel_values() {
    let env = TestEnv::new();
    env.cmd()
        .args(["describe", "encryption"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HELLO"))
        .stdout(predicate::str::contains("KHOOR"))
        .stdout(predicate::str::contains("KEY: 3"))
        .stdout(predicate::str::contains("Insecure Channel"));
}

#[test]
fn test_describe_accepts_topic_id() {
    let env = TestEnv::new();
    env.cmd()
        .args(["describe", "Encoding-Decoding"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01000001"));
}

#[test]
fn test_invalid_topic_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["describe", "compression"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Invalid argument: unknown topic"));

    env.cmd()
        .args(["show", "compression"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument: unknown topic"));
}

#[test]
fn test_complete_toggles_and_persists() {
    let env = TestEnv::new();

    env.cmd()
        .args(["complete", "modulation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modulation/Demodulation"));
    assert!(env.path().join("progress.json").exists());

    env.cmd()
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("25%"));

    env.cmd().args(["complete", "modulation"]).assert().success();

    env.cmd()
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("0%"));
}

#[test]
fn test_progress_shows_completion_date() {
    let env = TestEnv::new();
    env.write_progress(r#"{"completed":{"multiplexing":"2026-03-14T09:30:00Z"}}"#);

    env.cmd()
        .env("TZ", "UTC")
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiplexing/Demultiplexing"))
        .stdout(predicate::str::contains("2026-03-14 09:30"));
}

#[test]
fn test_complete_json_reports_state() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["--format", "json", "complete", "encoding"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["name"], "encoding");
    assert_eq!(json["content"]["completed"], true);
    assert_eq!(json["content"]["percent"], 25);
}

#[test]
fn test_ask_routes_to_topic() {
    let env = TestEnv::new();
    env.cmd()
        .args(["ask", "how", "does", "multiplexing", "work?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commviz show multiplexing"));
}

#[test]
fn test_ask_progress_counts_completed() {
    let env = TestEnv::new();
    env.cmd().args(["complete", "encryption"]).assert().success();
    env.cmd()
        .args(["ask", "what's my progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You've completed 1 out of 4 frameworks (25%). Keep going!",
        ));
}

#[test]
fn test_init_writes_default_config() {
    let env = TestEnv::new();
    env.cmd().arg("init").assert().success();

    let config = std::fs::read_to_string(env.path().join("config.toml")).unwrap();
    assert!(config.contains("tick_interval_ms = 1500"));
    assert!(config.contains("default_topic = \"encryption\""));
}

#[test]
fn test_init_keeps_existing_config_unless_forced() {
    let env = TestEnv::new();
    let config_path = env.path().join("config.toml");
    std::fs::write(&config_path, "tick_interval_ms = 700\n").unwrap();

    env.cmd().arg("init").assert().success();
    let kept = std::fs::read_to_string(&config_path).unwrap();
    assert!(kept.contains("700"));

    env.cmd().args(["init", "--force"]).assert().success();
    let replaced = std::fs::read_to_string(&config_path).unwrap();
    assert!(replaced.contains("1500"));
}

#[test]
fn test_zero_interval_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", "encoding", "--interval-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--interval-ms must be greater than 0"));
}

#[test]
fn test_log_file_is_written() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--log-level", "debug", "complete", "encoding"])
        .assert()
        .success();

    let log = std::fs::read_to_string(env.path().join("commviz.log")).unwrap();
    assert!(log.contains("topic marked complete"));
}
