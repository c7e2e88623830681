//! Unit tests for the render_bundle application service.

#![allow(clippy::expect_used)]

use std::path::Path;

use nbcontract::{
    Configuration, CustomLinuxOsConfig, HttpProxyConfig, NetworkConfig, NetworkPlugin,
    NetworkPolicy, SysctlConfig, UlimitConfig,
};
use node_bootstrapper::application::services::render_bundle::{
    render_artifact, render_bundle, render_to_dir,
};
use node_bootstrapper::domain::ArtifactKind;
use node_bootstrapper::domain::render::{decode, provision_environment};

use crate::mocks::{FailingWriter, FixedConfig, MissingConfig, RecordingWriter};

fn tuned_config() -> Configuration {
    Configuration {
        kubernetes_version: "1.29.2".to_string(),
        vm_size: "Standard_DC4s_v2".to_string(),
        needs_cgroupv2: Some(true),
        custom_linux_os_config: Some(CustomLinuxOsConfig {
            sysctl_config: Some(SysctlConfig {
                net_ipv4_tcp_max_syn_backlog: Some(9999),
                net_ipv4_ip_local_port_range: Some("32768 62535".to_string()),
                ..SysctlConfig::default()
            }),
            ulimit_config: Some(UlimitConfig {
                no_file: Some("1048576".to_string()),
                max_locked_memory: None,
            }),
            ..CustomLinuxOsConfig::default()
        }),
        network_config: Some(NetworkConfig {
            network_plugin: NetworkPlugin::Kubenet,
            network_policy: NetworkPolicy::None,
            ..NetworkConfig::default()
        }),
        http_proxy_config: Some(HttpProxyConfig {
            https_proxy: "https://proxy.internal:3129".to_string(),
            ..HttpProxyConfig::default()
        }),
        ..Configuration::default()
    }
}

// ── render_bundle ────────────────────────────────────────────────────────────

#[test]
fn test_render_bundle_sysctl_override_changes_only_its_line() {
    let bundle = render_bundle(&tuned_config());
    let sysctl = &bundle.get(ArtifactKind::Sysctl).expect("sysctl").text;
    assert!(sysctl.contains("net.ipv4.tcp_max_syn_backlog=9999"));
    assert!(sysctl.contains("net.core.somaxconn=16384"));
    assert!(sysctl.contains("net.ipv4.ip_local_port_range=32768 62535"));
}

#[test]
fn test_render_bundle_ulimit_and_containerd_follow_config() {
    let bundle = render_bundle(&tuned_config());
    assert_eq!(
        bundle.get(ArtifactKind::Ulimit).expect("ulimit").text,
        "[Service]\nLimitNOFILE=1048576"
    );
    let containerd = &bundle.get(ArtifactKind::Containerd).expect("containerd").text;
    assert!(containerd.contains("SystemdCgroup = true"));
    assert!(containerd.contains("conf_template = \"/etc/containerd/kubenet_template.conf\""));
}

#[test]
fn test_render_bundle_environment_embeds_encoded_artifacts() {
    let cfg = tuned_config();
    let bundle = render_bundle(&cfg);
    let env = provision_environment(&cfg);

    for (key, kind) in [
        ("SYSCTL_CONTENT", ArtifactKind::Sysctl),
        ("ULIMIT_CONTENT", ArtifactKind::Ulimit),
        ("CONTAINERD_CONFIG_CONTENT", ArtifactKind::Containerd),
        ("KUBENET_TEMPLATE", ArtifactKind::KubenetTemplate),
    ] {
        let artifact = bundle.get(kind).expect("artifact");
        let payload = env.get(key).expect("env key");
        assert_eq!(decode(payload).expect("decodes"), artifact.text, "{key}");
    }
    assert_eq!(env.get("SGX_NODE").map(String::as_str), Some("true"));
    assert_eq!(env.get("IP_LOCAL_PORT_RANGE_END").map(String::as_str), Some("62535"));
    assert_eq!(
        env.get("SHOULD_CONFIGURE_HTTP_PROXY").map(String::as_str),
        Some("true")
    );
}

#[test]
fn test_render_artifact_matches_bundle_entry() {
    let cfg = tuned_config();
    let bundle = render_bundle(&cfg);
    for kind in ArtifactKind::ALL {
        assert_eq!(Some(&render_artifact(&cfg, kind)), bundle.get(kind));
    }
}

// ── render_to_dir ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_render_to_dir_writes_full_bundle() {
    let writer = RecordingWriter::default();
    let outcome = render_to_dir(&FixedConfig(tuned_config()), &writer, Path::new("/out"))
        .await
        .expect("render");

    let recorded = writer.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, Path::new("/out"));
    assert_eq!(recorded[0].1, render_bundle(&tuned_config()));

    assert_eq!(outcome.manifest.len(), ArtifactKind::ALL.len());
    assert_eq!(outcome.written.len(), ArtifactKind::ALL.len() + 1);
    assert_eq!(
        outcome.written.last().map(|p| p.as_path()),
        Some(Path::new("/out/manifest.json"))
    );
}

#[tokio::test]
async fn test_render_to_dir_config_error_skips_writer() {
    let writer = RecordingWriter::default();
    let err = render_to_dir(&MissingConfig, &writer, Path::new("/out"))
        .await
        .expect_err("missing config");
    assert!(format!("{err:#}").contains("loading node configuration"));
    assert!(writer.recorded().is_empty());
}

#[tokio::test]
async fn test_render_to_dir_writer_failure_is_reported_with_dir() {
    let err = render_to_dir(
        &FixedConfig(Configuration::default()),
        &FailingWriter,
        Path::new("/out"),
    )
    .await
    .expect_err("writer fails");
    let msg = format!("{err:#}");
    assert!(msg.contains("writing artifacts to /out"));
    assert!(msg.contains("disk full"));
}
