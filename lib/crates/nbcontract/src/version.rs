//! Kubernetes version parsing and comparison.
//!
//! Versions are compared numerically component by component via `semver`.
//! Short forms such as `1.29` or `v1` are padded with zero components.

use semver::Version;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,

    #[error("version '{0}' has more than three numeric components")]
    TooManyComponents(String),

    #[error("invalid version '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Parse a Kubernetes version such as `1.29.2`, `v1.29` or `1.24.5-hotfix.1`.
///
/// # Errors
///
/// Returns an error when the string is empty, has more than three numeric
/// components, or is not a valid version after padding.
pub fn parse_kubernetes_version(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(VersionError::Empty);
    }

    let split_at = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(split_at);

    let mut parts: Vec<&str> = core.split('.').collect();
    if parts.len() > 3 {
        return Err(VersionError::TooManyComponents(input.to_string()));
    }
    while parts.len() < 3 {
        parts.push("0");
    }

    let normalized = format!("{}{suffix}", parts.join("."));
    Version::parse(&normalized).map_err(|e| VersionError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Returns `true` when `actual_version >= version`.
///
/// An unparsable side compares as `0.0.0`, so a garbage `actual_version`
/// is never considered newer than a real one.
#[must_use]
pub fn is_kubernetes_version_ge(actual_version: &str, version: &str) -> bool {
    let zero = Version::new(0, 0, 0);
    let actual = parse_kubernetes_version(actual_version).unwrap_or_else(|_| zero.clone());
    let wanted = parse_kubernetes_version(version).unwrap_or(zero);
    actual >= wanted
}
