//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the contract crate —
//! never from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use nbcontract::Configuration;

use crate::domain::ArtifactBundle;

// ── Input ─────────────────────────────────────────────────────────────────────

/// Supplies the node configuration to render.
pub trait ConfigSource {
    /// Load and decode the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or decoded.
    fn load(&self) -> Result<Configuration>;
}

// ── Output ────────────────────────────────────────────────────────────────────

/// Persists a rendered bundle.
#[allow(async_fn_in_trait)]
pub trait ArtifactWriter {
    /// Write every artifact of `bundle` under `out_dir`, mirroring each
    /// artifact's node path, plus a `manifest.json`. Returns the written
    /// paths in bundle order, manifest last.
    async fn write_bundle(&self, out_dir: &Path, bundle: &ArtifactBundle) -> Result<Vec<PathBuf>>;
}
