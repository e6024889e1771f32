// Integration tests for the greenaudit CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes and help output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the greenaudit binary.
fn greenaudit() -> Command {
    Command::cargo_bin("greenaudit").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    greenaudit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("greenaudit"));
}

#[test]
fn cli_help_flag() {
    greenaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("policy talk versus financial walk"));
}

#[test]
fn audit_requires_path() {
    greenaudit()
        .arg("audit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn show_requires_company() {
    greenaudit()
        .args(["show", "/tmp/reports"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn audit_rejects_unknown_format() {
    greenaudit()
        .args(["audit", "/tmp/reports", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    greenaudit()
        .args(["-q", "-v", "audit", "/tmp/reports"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
