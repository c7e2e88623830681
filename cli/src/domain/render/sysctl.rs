//! Sysctl drop-in renderer.
//!
//! A fixed table of known kernel parameters. Parameters with a baseline are
//! always written; the contract can override them. Parameters without a
//! baseline are written only when the contract sets them. Anything not in
//! the table is never written.

use std::fmt;

use nbcontract::SysctlConfig;

use super::encoding::encode;
use super::kv::sorted_key_value_pairs;

/// A single sysctl value: kernel parameters are either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SysctlValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for SysctlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

fn int(v: Option<i32>) -> Option<SysctlValue> {
    v.map(|v| SysctlValue::Int(i64::from(v)))
}

struct SysctlParam {
    name: &'static str,
    baseline: Option<i64>,
    value: fn(&SysctlConfig) -> Option<SysctlValue>,
}

#[rustfmt::skip]
const SYSCTL_PARAMS: &[SysctlParam] = &[
    SysctlParam { name: "net.ipv4.tcp_retries2", baseline: Some(8), value: |_| None },
    SysctlParam { name: "net.core.message_burst", baseline: Some(80), value: |_| None },
    SysctlParam { name: "net.core.message_cost", baseline: Some(40), value: |_| None },
    SysctlParam { name: "net.core.somaxconn", baseline: Some(16384), value: |s| int(s.net_core_somaxconn) },
    SysctlParam { name: "net.ipv4.tcp_max_syn_backlog", baseline: Some(16384), value: |s| int(s.net_ipv4_tcp_max_syn_backlog) },
    SysctlParam { name: "net.ipv4.neigh.default.gc_thresh1", baseline: Some(4096), value: |s| int(s.net_ipv4_neigh_default_gc_thresh1) },
    SysctlParam { name: "net.ipv4.neigh.default.gc_thresh2", baseline: Some(8192), value: |s| int(s.net_ipv4_neigh_default_gc_thresh2) },
    SysctlParam { name: "net.ipv4.neigh.default.gc_thresh3", baseline: Some(16384), value: |s| int(s.net_ipv4_neigh_default_gc_thresh3) },
    SysctlParam { name: "net.core.netdev_max_backlog", baseline: None, value: |s| int(s.net_core_netdev_max_backlog) },
    SysctlParam { name: "net.core.rmem_default", baseline: None, value: |s| int(s.net_core_rmem_default) },
    SysctlParam { name: "net.core.rmem_max", baseline: None, value: |s| int(s.net_core_rmem_max) },
    SysctlParam { name: "net.core.wmem_default", baseline: None, value: |s| int(s.net_core_wmem_default) },
    SysctlParam { name: "net.core.wmem_max", baseline: None, value: |s| int(s.net_core_wmem_max) },
    SysctlParam { name: "net.core.optmem_max", baseline: None, value: |s| int(s.net_core_optmem_max) },
    SysctlParam { name: "net.ipv4.tcp_max_tw_buckets", baseline: None, value: |s| int(s.net_ipv4_tcp_max_tw_buckets) },
    SysctlParam { name: "net.ipv4.tcp_fin_timeout", baseline: None, value: |s| int(s.net_ipv4_tcp_fin_timeout) },
    SysctlParam { name: "net.ipv4.tcp_keepalive_time", baseline: None, value: |s| int(s.net_ipv4_tcp_keepalive_time) },
    SysctlParam { name: "net.ipv4.tcp_keepalive_probes", baseline: None, value: |s| int(s.net_ipv4_tcp_keepalive_probes) },
    SysctlParam { name: "net.ipv4.tcp_keepalive_intvl", baseline: None, value: |s| int(s.net_ipv4_tcpkeepalive_intvl) },
    SysctlParam { name: "net.ipv4.tcp_tw_reuse", baseline: None, value: |s| s.net_ipv4_tcp_tw_reuse.map(|on| SysctlValue::Int(i64::from(on))) },
    SysctlParam { name: "net.ipv4.ip_local_port_range", baseline: None, value: |s| s.net_ipv4_ip_local_port_range.clone().map(SysctlValue::Text) },
    SysctlParam { name: "net.netfilter.nf_conntrack_max", baseline: None, value: |s| int(s.net_netfilter_nf_conntrack_max) },
    SysctlParam { name: "net.netfilter.nf_conntrack_buckets", baseline: None, value: |s| int(s.net_netfilter_nf_conntrack_buckets) },
    SysctlParam { name: "fs.inotify.max_user_watches", baseline: None, value: |s| int(s.fs_inotify_max_user_watches) },
    SysctlParam { name: "fs.file-max", baseline: None, value: |s| int(s.fs_file_max) },
    SysctlParam { name: "fs.aio-max-nr", baseline: None, value: |s| int(s.fs_aio_max_nr) },
    SysctlParam { name: "fs.nr_open", baseline: None, value: |s| int(s.fs_nr_open) },
    SysctlParam { name: "kernel.threads-max", baseline: None, value: |s| int(s.kernel_threads_max) },
    SysctlParam { name: "vm.max_map_count", baseline: None, value: |s| int(s.vm_max_map_count) },
    SysctlParam { name: "vm.swappiness", baseline: None, value: |s| int(s.vm_swappiness) },
    SysctlParam { name: "vm.vfs_cache_pressure", baseline: None, value: |s| int(s.vm_vfs_cache_pressure) },
];

/// Plain-text sysctl drop-in: newline-separated `name=value`, sorted, no
/// trailing newline.
#[must_use]
pub fn sysctl_text(config: Option<&SysctlConfig>) -> String {
    let entries = SYSCTL_PARAMS.iter().filter_map(|param| {
        config
            .and_then(|s| (param.value)(s))
            .or_else(|| param.baseline.map(SysctlValue::Int))
            .map(|v| (param.name, v))
    });
    sorted_key_value_pairs(entries, "\n")
}

/// Base64-encoded sysctl drop-in.
#[must_use]
pub fn sysctl_content(config: Option<&SysctlConfig>) -> String {
    encode(&sysctl_text(config))
}
