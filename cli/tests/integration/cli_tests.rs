//! Integration tests for the CLI skeleton: help, version and global flags.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

pub fn node_bootstrapper() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("node-bootstrapper"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("NODE_BOOTSTRAPPER_CONFIG");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    node_bootstrapper()
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Render node bootstrap artifacts from a node configuration",
        ));
}

#[test]
fn test_cli_help_flag_lists_commands() {
    node_bootstrapper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("decode"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    node_bootstrapper()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("node-bootstrapper"));
}

#[test]
fn test_version_command_shows_version() {
    node_bootstrapper()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command_json() {
    let out = node_bootstrapper()
        .args(["--json", "version"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_subcommand_fails() {
    node_bootstrapper()
        .arg("provision")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
