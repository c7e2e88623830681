//! Integration tests for `node-bootstrapper show`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::cli_tests::node_bootstrapper;

fn empty_config() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("node.json");
    std::fs::write(&path, "{}").expect("write config");
    (dir, path)
}

#[test]
fn test_show_ulimit_default_is_header_only() {
    let (_dir, config) = empty_config();
    node_bootstrapper()
        .args(["show", "ulimit", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("[Service]\n");
}

#[test]
fn test_show_ulimit_encoded() {
    let (_dir, config) = empty_config();
    node_bootstrapper()
        .args(["show", "ulimit", "--encoded", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("W1NlcnZpY2VdCg==\n");
}

#[test]
fn test_show_sysctl_default_baseline() {
    let (_dir, config) = empty_config();
    node_bootstrapper()
        .args(["show", "sysctl", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("net.core.message_burst=80\n"))
        .stdout(predicate::str::ends_with("net.ipv4.tcp_retries2=8\n"));
}

#[test]
fn test_show_kubenet_template_keeps_placeholders() {
    let (_dir, config) = empty_config();
    node_bootstrapper()
        .args(["show", "kubenet-template", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(".PodCIDRRanges"));
}

#[test]
fn test_show_json_includes_digest() {
    let (_dir, config) = empty_config();
    let stdout = node_bootstrapper()
        .args(["--json", "show", "environment", "--config"])
        .arg(&config)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(v["kind"], "environment");
    assert_eq!(v["path"], "/opt/azure/containers/provision.env");
    assert_eq!(v["sha256"].as_str().map(str::len), Some(64));
    assert!(
        v["content"]
            .as_str()
            .is_some_and(|c| c.contains("TARGET_CLOUD='AzurePublicCloud'\n"))
    );
}

#[test]
fn test_show_unknown_kind_is_usage_error() {
    let (_dir, config) = empty_config();
    node_bootstrapper()
        .args(["show", "kubelet", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown artifact kind: kubelet"));
}
