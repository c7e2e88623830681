//! Small decision functions over the contract.
//!
//! Each returns a plain value (never an error) and falls back to a fixed
//! default or sentinel when its input is absent or malformed.

use nbcontract::{
    AKS_CUSTOM_CLOUD_ENV_FILEPATH, AKS_CUSTOM_CLOUD_NAME, AZURE_STACK_CLOUD, Configuration,
    CustomSearchDomainConfig, DEFAULT_CLOUD_NAME, DEFAULT_LINUX_USER, NetworkConfig,
    NetworkPlugin, NetworkPolicy, SGX_ENABLED_VM_SIZES,
};

/// Returned by [`port_range_end_value`] for any malformed range.
pub const INVALID_PORT_RANGE: i32 = -1;

/// Registry probed by the default outbound connectivity check.
pub const DEFAULT_OUTBOUND_REGISTRY: &str = "mcr.microsoft.com";

// ── Cloud environment ────────────────────────────────────────────────────────

/// Path of the custom-cloud environment file, or `""` outside the AKS custom cloud.
#[must_use]
pub fn azure_environment_filepath(config: &Configuration) -> &'static str {
    if config.custom_cloud_env_name() == AKS_CUSTOM_CLOUD_NAME {
        AKS_CUSTOM_CLOUD_ENV_FILEPATH
    } else {
        ""
    }
}

/// Target environment: the custom cloud name when set, else the public cloud.
#[must_use]
pub fn target_environment(config: &Configuration) -> &str {
    match config.custom_cloud_env_name() {
        "" => DEFAULT_CLOUD_NAME,
        name => name,
    }
}

/// Target cloud: every custom cloud reports as Azure Stack, otherwise the
/// public cloud. Not interchangeable with [`target_environment`].
#[must_use]
pub fn target_cloud(config: &Configuration) -> &'static str {
    if config.custom_cloud_env_name().is_empty() {
        DEFAULT_CLOUD_NAME
    } else {
        AZURE_STACK_CLOUD
    }
}

// ── Network ──────────────────────────────────────────────────────────────────

/// Whether the node must guard against two bridges in promiscuous mode:
/// kubenet's `cbr0` without calico taking over the dataplane.
#[must_use]
pub fn ensure_no_dupe_promiscuous_bridge(network: Option<&NetworkConfig>) -> bool {
    network.is_some_and(|n| {
        n.network_plugin == NetworkPlugin::Kubenet && n.network_policy != NetworkPolicy::Calico
    })
}

/// End port of a `"start end"` range, or [`INVALID_PORT_RANGE`].
///
/// Requires exactly two single-space-separated non-negative integers with
/// `start < end`.
#[must_use]
pub fn port_range_end_value(port_range: &str) -> i32 {
    let mut parts = port_range.split(' ');
    let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return INVALID_PORT_RANGE;
    };
    match (start.parse::<i32>(), end.parse::<i32>()) {
        (Ok(start), Ok(end)) if start >= 0 && end >= 0 && start < end => end,
        _ => INVALID_PORT_RANGE,
    }
}

/// Connectivity probe run before provisioning. An explicit command in the
/// contract wins; custom clouds get none.
#[must_use]
pub fn outbound_command(config: &Configuration) -> String {
    if !config.outbound_command.is_empty() {
        return config.outbound_command.clone();
    }
    if !config.custom_cloud_env_name().is_empty() {
        return String::new();
    }
    format!(
        "curl -v --insecure --proto '=https' --max-time 10 https://{DEFAULT_OUTBOUND_REGISTRY}/v2/"
    )
}

// ── Identity and trust ───────────────────────────────────────────────────────

/// All of domain, realm user and realm password must be non-empty.
#[must_use]
pub fn has_search_domain(search_domain: Option<&CustomSearchDomainConfig>) -> bool {
    search_domain.is_some_and(|d| {
        !d.domain_name.is_empty() && !d.realm_user.is_empty() && !d.realm_password.is_empty()
    })
}

#[must_use]
pub fn has_custom_ca_certs(certs: &[String]) -> bool {
    !certs.is_empty()
}

#[must_use]
pub fn linux_admin_username(username: &str) -> &str {
    if username.is_empty() {
        DEFAULT_LINUX_USER
    } else {
        username
    }
}

// ── SKU ──────────────────────────────────────────────────────────────────────

/// Whether the VM size is an SGX-capable confidential-computing SKU.
#[must_use]
pub fn is_sgx_enabled_sku(vm_size: &str) -> bool {
    SGX_ENABLED_VM_SIZES.contains(&vm_size)
}
