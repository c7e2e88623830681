//! Kubelet command-line fragments.

use nbcontract::Configuration;

use super::kv::sorted_key_value_pairs;

/// Space-separated `--flag=value` pairs, sorted by flag name.
#[must_use]
pub fn kubelet_flags(config: &Configuration) -> String {
    config
        .kubelet_config
        .as_ref()
        .map(|k| sorted_key_value_pairs(&k.kubelet_flags, " "))
        .unwrap_or_default()
}

/// Comma-separated `key=value` node labels, sorted by key.
#[must_use]
pub fn kubelet_node_labels(config: &Configuration) -> String {
    config
        .kubelet_config
        .as_ref()
        .map(|k| sorted_key_value_pairs(&k.kubelet_node_labels, ","))
        .unwrap_or_default()
}
