//! Filesystem infrastructure — implements `ArtifactWriter`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ArtifactWriter;
use crate::domain::ArtifactBundle;

/// File name of the manifest written next to the artifact tree.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes bundles to the local filesystem.
pub struct LocalFs;

impl ArtifactWriter for LocalFs {
    async fn write_bundle(&self, out_dir: &Path, bundle: &ArtifactBundle) -> Result<Vec<PathBuf>> {
        let files: Vec<(PathBuf, String)> = bundle
            .iter()
            .map(|a| (staged_path(out_dir, a.node_path()), a.text.clone()))
            .collect();
        let manifest = serde_json::to_string_pretty(&bundle.manifest())
            .context("serializing manifest")?;
        let manifest_path = out_dir.join(MANIFEST_FILE);

        tokio::task::spawn_blocking(move || {
            let mut written = Vec::with_capacity(files.len() + 1);
            for (path, content) in files {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating directory {}", parent.display()))?;
                }
                std::fs::write(&path, content)
                    .with_context(|| format!("writing artifact {}", path.display()))?;
                tracing::debug!(path = %path.display(), "wrote artifact");
                written.push(path);
            }
            std::fs::write(&manifest_path, format!("{manifest}\n"))
                .with_context(|| format!("writing {}", manifest_path.display()))?;
            tracing::debug!(path = %manifest_path.display(), "wrote manifest");
            written.push(manifest_path);
            Ok::<Vec<PathBuf>, anyhow::Error>(written)
        })
        .await
        .context("spawn_blocking for write_bundle")?
    }
}

/// Location of a node path inside the output directory.
#[must_use]
pub fn staged_path(out_dir: &Path, node_path: &str) -> PathBuf {
    out_dir.join(node_path.trim_start_matches('/'))
}
