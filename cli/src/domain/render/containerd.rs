//! containerd `config.toml` renderer.
//!
//! A fixed template: two-space indentation and key order are part of the
//! output contract, so the document is written line by line rather than
//! through a TOML serializer.

#![allow(clippy::format_push_string)]

use nbcontract::{Configuration, NetworkPlugin, NetworkPolicy, is_kubernetes_version_ge};

use super::encoding::encode;
use super::kubenet::KUBENET_TEMPLATE_PATH;

const CRI: &str = r#"[plugins."io.containerd.grpc.v1.cri"]"#;
const CRI_PREFIX: &str = r#"plugins."io.containerd.grpc.v1.cri""#;

/// Kubernetes version from which containerd reads per-registry hosts files.
pub const REGISTRY_CONFIG_PATH_MIN_VERSION: &str = "1.22.0";

pub const METRICS_ADDRESS: &str = "0.0.0.0:10257";

/// Plain-text containerd configuration.
#[must_use]
pub fn containerd_config_text(config: &Configuration) -> String {
    let sandbox_image = config
        .k8s_components
        .as_ref()
        .map_or("", |k| k.pod_infra_container_image_url.as_str());
    let systemd_cgroup = config.needs_cgroupv2 == Some(true);

    let mut out = String::new();
    out.push_str("version = 2\n");
    out.push_str("oom_score = 0\n");
    out.push_str(&format!("{CRI}\n"));
    out.push_str(&format!("  sandbox_image = \"{sandbox_image}\"\n"));
    out.push_str(&format!("  [{CRI_PREFIX}.containerd]\n"));
    out.push_str("    default_runtime_name = \"runc\"\n");
    out.push_str(&format!("    [{CRI_PREFIX}.containerd.runtimes.runc]\n"));
    out.push_str("      runtime_type = \"io.containerd.runc.v2\"\n");
    out.push_str(&format!("    [{CRI_PREFIX}.containerd.runtimes.runc.options]\n"));
    out.push_str("      BinaryName = \"/usr/bin/runc\"\n");
    if systemd_cgroup {
        out.push_str("      SystemdCgroup = true\n");
    }
    out.push_str(&format!("    [{CRI_PREFIX}.containerd.runtimes.untrusted]\n"));
    out.push_str("      runtime_type = \"io.containerd.runc.v2\"\n");
    out.push_str(&format!(
        "    [{CRI_PREFIX}.containerd.runtimes.untrusted.options]\n"
    ));
    out.push_str("      BinaryName = \"/usr/bin/runc\"\n");

    if uses_kubenet_cni_template(config) {
        out.push_str(&format!("  [{CRI_PREFIX}.cni]\n"));
        out.push_str("    bin_dir = \"/opt/cni/bin\"\n");
        out.push_str("    conf_dir = \"/etc/cni/net.d\"\n");
        out.push_str(&format!("    conf_template = \"{KUBENET_TEMPLATE_PATH}\"\n"));
    }

    if is_kubernetes_version_ge(&config.kubernetes_version, REGISTRY_CONFIG_PATH_MIN_VERSION) {
        out.push_str(&format!("  [{CRI_PREFIX}.registry]\n"));
        out.push_str("    config_path = \"/etc/containerd/certs.d\"\n");
    }

    out.push_str(&format!("  [{CRI_PREFIX}.registry.headers]\n"));
    out.push_str("    X-Meta-Source-Client = [\"azure/aks\"]\n");
    out.push_str("[metrics]\n");
    out.push_str(&format!("  address = \"{METRICS_ADDRESS}\"\n"));
    out
}

/// Base64-encoded containerd configuration.
#[must_use]
pub fn containerd_config(config: &Configuration) -> String {
    encode(&containerd_config_text(config))
}

// Calico ships its own CNI config; only plain kubenet uses the template.
fn uses_kubenet_cni_template(config: &Configuration) -> bool {
    config.network_config.as_ref().is_some_and(|n| {
        n.network_plugin == NetworkPlugin::Kubenet && n.network_policy != NetworkPolicy::Calico
    })
}
