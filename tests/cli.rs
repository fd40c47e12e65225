//! Tests for the sdb binary surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn eval_prints_the_value() {
    Command::cargo_bin("sdb")
        .unwrap()
        .args(["eval", "1+2*3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7"));
}

#[test]
fn eval_points_at_the_offending_byte() {
    Command::cargo_bin("sdb")
        .unwrap()
        .args(["eval", "1 + ?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("byte 4"));
}

#[test]
fn eval_reports_structural_errors() {
    Command::cargo_bin("sdb")
        .unwrap()
        .args(["eval", "(1+2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no operator"));
}

#[test]
fn tokens_dumps_the_sequence() {
    Command::cargo_bin("sdb")
        .unwrap()
        .args(["tokens", "*0x10+1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deref Hex(0x10) + Uint(1)"));
}

#[test]
fn tokens_emits_json_on_request() {
    Command::cargo_bin("sdb")
        .unwrap()
        .args(["tokens", "0x10", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"Hex\""));
}

#[test]
fn limits_file_is_honored() {
    let dir = std::env::temp_dir().join("sdb-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("limits.yaml");
    std::fs::write(&path, "max_tokens: 3\n").unwrap();

    Command::cargo_bin("sdb")
        .unwrap()
        .args(["eval", "1+1+1", "--limits"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("token limit"));
}
