//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.
//!
//! The renderers themselves never fail. These errors come from decoding
//! payloads, expanding the kubenet template and loading input.

use thiserror::Error;

// ── Render errors ─────────────────────────────────────────────────────────────

/// Errors raised around (not inside) artifact rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Decoded payload is not valid UTF-8: {0}")]
    NotUtf8(String),

    #[error("Unknown artifact kind: {kind}\n\nValid kinds: {valid}")]
    UnknownArtifactKind { kind: String, valid: String },

    #[error("Kubenet template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to locating and decoding the input configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported configuration format: {path}\n\nValid extensions: {valid}")]
    UnsupportedFormat { path: String, valid: String },

    #[error("No configuration file given. Pass --config or set NODE_BOOTSTRAPPER_CONFIG.")]
    Missing,
}
