//! Application service — render a configuration into the node's file bundle.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nbcontract::{Configuration, parse_kubernetes_version};

use crate::application::ports::{ArtifactWriter, ConfigSource};
use crate::domain::{Artifact, ArtifactBundle, ArtifactKind, ManifestEntry};

/// Result of a render-and-write run.
#[derive(Debug)]
pub struct RenderOutcome {
    /// Paths written, in bundle order, manifest last.
    pub written: Vec<PathBuf>,
    pub manifest: Vec<ManifestEntry>,
}

/// Render a single artifact.
#[must_use]
pub fn render_artifact(config: &Configuration, kind: ArtifactKind) -> Artifact {
    let artifact = Artifact::new(kind, kind.render(config));
    tracing::debug!(
        kind = %kind,
        bytes = artifact.text.len(),
        path = kind.node_path(),
        "rendered artifact"
    );
    artifact
}

/// Render every artifact: sysctl, ulimit, containerd, kubenet template,
/// then the environment descriptor.
#[must_use]
pub fn render_bundle(config: &Configuration) -> ArtifactBundle {
    if !config.kubernetes_version.is_empty()
        && let Err(e) = parse_kubernetes_version(&config.kubernetes_version)
    {
        tracing::warn!(
            version = %config.kubernetes_version,
            error = %e,
            "kubernetes version is not parseable; version-gated settings are off"
        );
    }

    let mut bundle = ArtifactBundle::default();
    for kind in ArtifactKind::ALL {
        bundle.push(render_artifact(config, kind));
    }
    bundle
}

/// Load the configuration, render the bundle and write it under `out_dir`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or any file
/// write fails.
pub async fn render_to_dir(
    source: &impl ConfigSource,
    writer: &impl ArtifactWriter,
    out_dir: &Path,
) -> Result<RenderOutcome> {
    let config = source.load().context("loading node configuration")?;
    let bundle = render_bundle(&config);
    let written = writer
        .write_bundle(out_dir, &bundle)
        .await
        .with_context(|| format!("writing artifacts to {}", out_dir.display()))?;
    tracing::info!(count = bundle.len(), dir = %out_dir.display(), "bundle written");
    Ok(RenderOutcome {
        written,
        manifest: bundle.manifest(),
    })
}
