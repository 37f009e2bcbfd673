//! Show command without a terminal
//!
//! assert_cmd pipes stdout, so `show` takes the console playback path.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn step_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.starts_with("step "))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_show_plays_one_cycle() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["show", "encryption", "--interval-ms", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let steps = step_lines(&output.stdout);
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0], "step 1/4  SENDER emits HELLO");
    assert_eq!(steps[1], "step 2/4  ENCRYPTOR [KEY: 3] turns HELLO into KHOOR");
    assert_eq!(
        steps[2],
        "step 3/4  KHOOR crosses the Insecure Channel to the RECEIVER"
    );
    assert_eq!(steps[3], "step 4/4  DECRYPTOR [KEY: 3] restores HELLO");
}

#[test]
fn test_show_multiple_cycles() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["show", "multiplexing", "--interval-ms", "5", "--cycles", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let steps = step_lines(&output.stdout);
    assert_eq!(steps.len(), 8);
    assert!(steps[4].starts_with("step 1/4  MULTIPLE SOURCES emits Signal A"));
}

#[test]
fn test_no_subcommand_uses_configured_topic() {
    let env = TestEnv::new();
    std::fs::write(
        env.path().join("config.toml"),
        "tick_interval_ms = 5\ndefault_topic = \"modulation\"\n",
    )
    .unwrap();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Modulation/Demodulation (modulation)"))
        .stdout(predicate::str::contains("MODULATOR [Carrier Signal]"));
}
