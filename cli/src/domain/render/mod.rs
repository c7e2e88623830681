//! Pure renderers — contract in, artifact text out.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! Every function is deterministic: the same `Configuration` always yields
//! byte-identical output, regardless of map iteration order.

pub mod containerd;
pub mod encoding;
pub mod environment;
pub mod kubelet;
pub mod kubenet;
pub mod kv;
pub mod predicates;
pub mod proxy;
pub mod sysctl;
pub mod ulimit;

pub use containerd::{containerd_config, containerd_config_text};
pub use encoding::{decode, encode};
pub use environment::{provision_environment, provision_environment_text, shell_quote};
pub use kubelet::{kubelet_flags, kubelet_node_labels};
pub use kubenet::{expand_kubenet_template, kubenet_template, kubenet_template_text};
pub use kv::{deref, sorted_key_value_pairs, stringified_array};
pub use predicates::{
    azure_environment_filepath, ensure_no_dupe_promiscuous_bridge, has_custom_ca_certs,
    has_search_domain, is_sgx_enabled_sku, linux_admin_username, outbound_command,
    port_range_end_value, target_cloud, target_environment,
};
pub use proxy::{proxy_variables, should_configure_http_proxy, should_configure_http_proxy_ca};
pub use sysctl::{sysctl_content, sysctl_text};
pub use ulimit::{ulimit_content, ulimit_text};
