//! Provisioning environment descriptor.
//!
//! The provisioning scripts on the node source every decision made here from
//! one `KEY=value` file. File-content payloads are embedded base64-encoded.
//! Values are shell-quoted so that no contract value can add a line or
//! another assignment to the file.

use std::collections::HashMap;

use nbcontract::Configuration;

use super::containerd::containerd_config;
use super::kubelet::{kubelet_flags, kubelet_node_labels};
use super::kubenet::kubenet_template;
use super::kv::{deref, sorted_key_value_pairs, stringified_array};
use super::predicates::{
    azure_environment_filepath, ensure_no_dupe_promiscuous_bridge, has_custom_ca_certs,
    has_search_domain, is_sgx_enabled_sku, linux_admin_username, outbound_command,
    port_range_end_value, target_cloud, target_environment,
};
use super::proxy::{proxy_variables, should_configure_http_proxy, should_configure_http_proxy_ca};
use super::sysctl::sysctl_content;
use super::ulimit::ulimit_content;

/// Variables exported to the provisioning scripts, unordered.
#[must_use]
pub fn provision_environment(config: &Configuration) -> HashMap<String, String> {
    let proxy = config.http_proxy_config.as_ref();
    let search_domain = config.custom_search_domain.as_ref();
    let network = config.network_config.as_ref();
    let port_range: String = deref(
        config
            .sysctl_config()
            .and_then(|s| s.net_ipv4_ip_local_port_range.as_ref()),
    );

    let mut env: HashMap<String, String> = HashMap::new();
    let mut set = |key: &str, value: String| {
        env.insert(key.to_string(), value);
    };

    set("KUBERNETES_VERSION", config.kubernetes_version.clone());
    set("VM_SIZE", config.vm_size.clone());
    set(
        "ADMINUSER",
        linux_admin_username(&config.linux_admin_username).to_string(),
    );
    set("SGX_NODE", is_sgx_enabled_sku(&config.vm_size).to_string());
    set("NEEDS_CGROUPV2", deref(config.needs_cgroupv2.as_ref()).to_string());

    set("TARGET_ENVIRONMENT", target_environment(config).to_string());
    set("TARGET_CLOUD", target_cloud(config).to_string());
    set(
        "AZURE_ENVIRONMENT_FILEPATH",
        azure_environment_filepath(config).to_string(),
    );
    set("OUTBOUND_COMMAND", outbound_command(config));

    set(
        "NETWORK_PLUGIN",
        network.map_or("none", |n| n.network_plugin.as_str()).to_string(),
    );
    set(
        "NETWORK_POLICY",
        network.map_or("none", |n| n.network_policy.as_str()).to_string(),
    );
    set(
        "ENSURE_NO_DUPE_PROMISCUOUS_BRIDGE",
        ensure_no_dupe_promiscuous_bridge(network).to_string(),
    );
    set(
        "IP_LOCAL_PORT_RANGE_END",
        port_range_end_value(&port_range).to_string(),
    );

    set(
        "SHOULD_CONFIGURE_HTTP_PROXY",
        should_configure_http_proxy(proxy).to_string(),
    );
    set(
        "SHOULD_CONFIGURE_HTTP_PROXY_CA",
        should_configure_http_proxy_ca(proxy).to_string(),
    );
    set("HTTP_PROXY_URLS", proxy.map(|p| p.http_proxy.clone()).unwrap_or_default());
    set("HTTPS_PROXY_URLS", proxy.map(|p| p.https_proxy.clone()).unwrap_or_default());
    set(
        "NO_PROXY_URLS",
        proxy
            .map(|p| stringified_array(&p.no_proxy_entries, ","))
            .unwrap_or_default(),
    );
    set(
        "HTTP_PROXY_TRUSTED_CA",
        proxy.map(|p| p.proxy_trusted_ca.clone()).unwrap_or_default(),
    );
    set("PROXY_VARS", proxy_variables(proxy));

    set(
        "HAS_CUSTOM_SEARCH_DOMAIN",
        has_search_domain(search_domain).to_string(),
    );
    set(
        "CUSTOM_SEARCH_DOMAIN_NAME",
        search_domain.map(|d| d.domain_name.clone()).unwrap_or_default(),
    );
    set(
        "CUSTOM_SEARCH_REALM_USER",
        search_domain.map(|d| d.realm_user.clone()).unwrap_or_default(),
    );
    set(
        "CUSTOM_SEARCH_REALM_PASSWORD",
        search_domain.map(|d| d.realm_password.clone()).unwrap_or_default(),
    );

    set(
        "SHOULD_CONFIGURE_CUSTOM_CA_TRUST",
        has_custom_ca_certs(&config.custom_ca_certs).to_string(),
    );
    set(
        "CUSTOM_CA_TRUST_COUNT",
        config.custom_ca_certs.len().to_string(),
    );
    for (i, cert) in config.custom_ca_certs.iter().enumerate() {
        set(&format!("CUSTOM_CA_CERT_{i}"), cert.clone());
    }

    set("KUBELET_FLAGS", kubelet_flags(config));
    set("KUBELET_NODE_LABELS", kubelet_node_labels(config));

    set("SYSCTL_CONTENT", sysctl_content(config.sysctl_config()));
    set("ULIMIT_CONTENT", ulimit_content(config.ulimit_config()));
    set("CONTAINERD_CONFIG_CONTENT", containerd_config(config));
    set("KUBENET_TEMPLATE", kubenet_template());

    env
}

/// Environment file text: sorted `KEY=value` lines with a trailing newline,
/// each value passed through [`shell_quote`].
#[must_use]
pub fn provision_environment_text(config: &Configuration) -> String {
    let quoted = provision_environment(config)
        .into_iter()
        .map(|(key, value)| (key, shell_quote(&value)));
    format!("{}\n", sorted_key_value_pairs(quoted, "\n"))
}

/// Quote `value` for a bash `source`.
///
/// Plain values are single-quoted with `'` written as `'\''`. Values holding
/// a control character use ANSI-C `$'...'` quoting with escapes, so the
/// result never spans more than one line.
#[must_use]
pub fn shell_quote(value: &str) -> String {
    if !value.chars().any(char::is_control) {
        return format!("'{}'", value.replace('\'', r"'\''"));
    }

    let mut out = String::with_capacity(value.len() + 3);
    out.push_str("$'");
    for c in value.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\'' => out.push_str(r"\'"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            c if c.is_control() => out.push_str(&format!(r"\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
