// lib/crates/nbcontract/src/contract.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{NetworkPlugin, NetworkPolicy};

/// Node-bootstrapping contract.
///
/// Every sub-message is an `Option` so that "not provided" stays distinct from
/// a zero value. Renderers decide the defaults; the contract carries none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Contract version tag, e.g. `"v0"`.
    pub version: String,
    pub kubernetes_version: String,
    pub vm_size: String,
    pub linux_admin_username: String,
    /// Overrides the default outbound connectivity probe when non-empty.
    pub outbound_command: String,
    pub custom_linux_os_config: Option<CustomLinuxOsConfig>,
    pub network_config: Option<NetworkConfig>,
    pub http_proxy_config: Option<HttpProxyConfig>,
    pub custom_cloud_config: Option<CustomCloudConfig>,
    pub custom_search_domain: Option<CustomSearchDomainConfig>,
    pub custom_ca_certs: Vec<String>,
    pub needs_cgroupv2: Option<bool>,
    pub kubelet_config: Option<KubeletConfig>,
    pub k8s_components: Option<K8sComponents>,
}

impl Configuration {
    /// Sysctl overrides, if a custom Linux OS config carries any.
    #[must_use]
    pub fn sysctl_config(&self) -> Option<&SysctlConfig> {
        self.custom_linux_os_config
            .as_ref()
            .and_then(|c| c.sysctl_config.as_ref())
    }

    /// Ulimit overrides, if a custom Linux OS config carries any.
    #[must_use]
    pub fn ulimit_config(&self) -> Option<&UlimitConfig> {
        self.custom_linux_os_config
            .as_ref()
            .and_then(|c| c.ulimit_config.as_ref())
    }

    /// Custom cloud environment name, or `""` when no custom cloud is configured.
    #[must_use]
    pub fn custom_cloud_env_name(&self) -> &str {
        self.custom_cloud_config
            .as_ref()
            .map_or("", |c| c.custom_cloud_env_name.as_str())
    }
}

/// Kernel and process-limit tuning for the node OS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomLinuxOsConfig {
    pub sysctl_config: Option<SysctlConfig>,
    pub ulimit_config: Option<UlimitConfig>,
    pub enable_swap_config: bool,
    pub swap_file_size: i32,
    pub transparent_hugepage_support: String,
    pub transparent_defrag: String,
}

/// Sysctl overrides. An unset field keeps the node baseline (or is not
/// written at all when the baseline has no entry for it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SysctlConfig {
    pub net_core_somaxconn: Option<i32>,
    pub net_core_netdev_max_backlog: Option<i32>,
    pub net_core_rmem_default: Option<i32>,
    pub net_core_rmem_max: Option<i32>,
    pub net_core_wmem_default: Option<i32>,
    pub net_core_wmem_max: Option<i32>,
    pub net_core_optmem_max: Option<i32>,
    pub net_ipv4_tcp_max_syn_backlog: Option<i32>,
    pub net_ipv4_tcp_max_tw_buckets: Option<i32>,
    pub net_ipv4_tcp_fin_timeout: Option<i32>,
    pub net_ipv4_tcp_keepalive_time: Option<i32>,
    pub net_ipv4_tcp_keepalive_probes: Option<i32>,
    pub net_ipv4_tcpkeepalive_intvl: Option<i32>,
    pub net_ipv4_tcp_tw_reuse: Option<bool>,
    /// Two space-separated ports, e.g. `"32768 60999"`.
    pub net_ipv4_ip_local_port_range: Option<String>,
    pub net_ipv4_neigh_default_gc_thresh1: Option<i32>,
    pub net_ipv4_neigh_default_gc_thresh2: Option<i32>,
    pub net_ipv4_neigh_default_gc_thresh3: Option<i32>,
    pub net_netfilter_nf_conntrack_max: Option<i32>,
    pub net_netfilter_nf_conntrack_buckets: Option<i32>,
    pub fs_inotify_max_user_watches: Option<i32>,
    pub fs_file_max: Option<i32>,
    pub fs_aio_max_nr: Option<i32>,
    pub fs_nr_open: Option<i32>,
    pub kernel_threads_max: Option<i32>,
    pub vm_max_map_count: Option<i32>,
    pub vm_swappiness: Option<i32>,
    pub vm_vfs_cache_pressure: Option<i32>,
}

/// Ulimit overrides applied to the container runtime service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UlimitConfig {
    pub no_file: Option<String>,
    pub max_locked_memory: Option<String>,
}

/// Network plugin and policy selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfig {
    pub network_plugin: NetworkPlugin,
    pub network_policy: NetworkPolicy,
    pub cni_plugins_url: String,
    pub vnet_cni_plugins_url: String,
}

/// Outbound HTTP proxy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpProxyConfig {
    pub http_proxy: String,
    pub https_proxy: String,
    pub no_proxy_entries: Vec<String>,
    /// Base64-encoded PEM bundle trusted for proxy TLS interception.
    pub proxy_trusted_ca: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomCloudConfig {
    pub custom_cloud_env_name: String,
}

/// Realm credentials used to join a custom DNS search domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSearchDomainConfig {
    pub domain_name: String,
    pub realm_user: String,
    pub realm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeletConfig {
    /// Command-line flags keyed by flag name including the leading `--`.
    pub kubelet_flags: HashMap<String, String>,
    pub kubelet_node_labels: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct K8sComponents {
    pub pod_infra_container_image_url: String,
}
