//! Ulimit override renderer: a systemd `[Service]` drop-in for the
//! container runtime.

use nbcontract::UlimitConfig;

use super::encoding::encode;
use super::kv::sorted_key_value_pairs;

const SERVICE_HEADER: &str = "[Service]\n";

/// Plain-text drop-in. Only the header when no limit is set; otherwise a
/// second line of space-separated `LimitXXX=value` tokens sorted by name.
#[must_use]
pub fn ulimit_text(config: Option<&UlimitConfig>) -> String {
    let mut limits: Vec<(&str, &str)> = Vec::new();
    if let Some(u) = config {
        if let Some(no_file) = &u.no_file {
            limits.push(("LimitNOFILE", no_file.as_str()));
        }
        if let Some(memlock) = &u.max_locked_memory {
            limits.push(("LimitMEMLOCK", memlock.as_str()));
        }
    }
    format!("{SERVICE_HEADER}{}", sorted_key_value_pairs(limits, " "))
}

/// Base64-encoded ulimit drop-in.
#[must_use]
pub fn ulimit_content(config: Option<&UlimitConfig>) -> String {
    encode(&ulimit_text(config))
}
