//! Integration tests for `node-bootstrapper decode`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::cli_tests::node_bootstrapper;

#[test]
fn test_decode_ulimit_payload() {
    node_bootstrapper()
        .args(["decode", "W1NlcnZpY2VdCg=="])
        .assert()
        .success()
        .stdout("[Service]\n");
}

#[test]
fn test_decode_show_encoded_output_recovers_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("node.json");
    std::fs::write(&config, "{}").expect("write config");

    let encoded = node_bootstrapper()
        .args(["show", "sysctl", "--encoded", "--config"])
        .arg(&config)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let encoded = String::from_utf8(encoded).expect("utf8");

    node_bootstrapper()
        .args(["decode", encoded.trim()])
        .assert()
        .success()
        .stdout(predicate::str::contains("net.core.somaxconn=16384"));
}

#[test]
fn test_decode_json_output() {
    let stdout = node_bootstrapper()
        .args(["--json", "decode", "W1NlcnZpY2VdCg=="])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(v["content"], "[Service]\n");
}

#[test]
fn test_decode_invalid_payload_fails() {
    node_bootstrapper()
        .args(["decode", "not base64!"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: decoding payload"))
        .stderr(predicate::str::contains("not valid base64"));
}

#[test]
fn test_decode_invalid_payload_json_error_is_render_error() {
    let stdout = node_bootstrapper()
        .args(["--json", "decode", "not base64!"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "RENDER_ERROR");
}

#[test]
fn test_decode_non_utf8_payload_is_render_error() {
    // 0xff 0xfe
    let stdout = node_bootstrapper()
        .args(["--json", "decode", "//4="])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(v["code"], "RENDER_ERROR");
}
