//! Unit tests for the filesystem `ArtifactWriter`.

#![allow(clippy::expect_used)]

use nbcontract::Configuration;
use node_bootstrapper::application::ports::ArtifactWriter;
use node_bootstrapper::application::services::render_bundle::render_bundle;
use node_bootstrapper::domain::ArtifactKind;
use node_bootstrapper::infra::fs::{LocalFs, MANIFEST_FILE};

#[tokio::test]
async fn test_local_fs_writes_node_tree_and_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = render_bundle(&Configuration::default());

    let written = LocalFs
        .write_bundle(dir.path(), &bundle)
        .await
        .expect("write");
    assert_eq!(written.len(), ArtifactKind::ALL.len() + 1);

    let containerd = dir.path().join("etc/containerd/config.toml");
    let on_disk = std::fs::read_to_string(&containerd).expect("read config.toml");
    assert_eq!(
        on_disk,
        bundle.get(ArtifactKind::Containerd).expect("containerd").text
    );

    let manifest = std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).expect("manifest");
    let entries: serde_json::Value = serde_json::from_str(&manifest).expect("json");
    let entries = entries.as_array().expect("array");
    assert_eq!(entries.len(), ArtifactKind::ALL.len());
    assert_eq!(entries[0]["kind"], "sysctl");
    assert_eq!(entries[0]["path"], "/etc/sysctl.d/999-sysctl-aks.conf");
    assert_eq!(
        entries[4]["sha256"],
        bundle.get(ArtifactKind::Environment).expect("env").sha256()
    );
}

#[tokio::test]
async fn test_local_fs_overwrites_previous_render() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sysctl = dir.path().join("etc/sysctl.d/999-sysctl-aks.conf");
    std::fs::create_dir_all(sysctl.parent().expect("parent")).expect("mkdir");
    std::fs::write(&sysctl, "stale").expect("seed");

    let bundle = render_bundle(&Configuration::default());
    LocalFs
        .write_bundle(dir.path(), &bundle)
        .await
        .expect("write");

    let on_disk = std::fs::read_to_string(&sysctl).expect("read");
    assert!(on_disk.starts_with("net.core.message_burst=80"));
}
