//! Shared mock infrastructure for unit tests.
//!
//! Provides canned [`ConfigSource`] and in-memory [`ArtifactWriter`]
//! implementations so each test file doesn't have to re-define the same
//! boilerplate.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use nbcontract::Configuration;
use node_bootstrapper::application::ports::{ArtifactWriter, ConfigSource};
use node_bootstrapper::domain::{ArtifactBundle, ConfigError};

// ── Config sources ────────────────────────────────────────────────────────────

/// Always yields the wrapped configuration.
pub struct FixedConfig(pub Configuration);

impl ConfigSource for FixedConfig {
    fn load(&self) -> Result<Configuration> {
        Ok(self.0.clone())
    }
}

/// Always fails as if no configuration path was supplied.
pub struct MissingConfig;

impl ConfigSource for MissingConfig {
    fn load(&self) -> Result<Configuration> {
        Err(ConfigError::Missing.into())
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

/// Records every bundle it is asked to write.
#[derive(Default)]
pub struct RecordingWriter {
    pub writes: Mutex<Vec<(PathBuf, ArtifactBundle)>>,
}

impl RecordingWriter {
    pub fn recorded(&self) -> Vec<(PathBuf, ArtifactBundle)> {
        self.writes.lock().expect("lock").clone()
    }
}

impl ArtifactWriter for RecordingWriter {
    async fn write_bundle(&self, out_dir: &Path, bundle: &ArtifactBundle) -> Result<Vec<PathBuf>> {
        self.writes
            .lock()
            .expect("lock")
            .push((out_dir.to_path_buf(), bundle.clone()));
        Ok(bundle
            .iter()
            .map(|a| out_dir.join(a.node_path().trim_start_matches('/')))
            .chain(std::iter::once(out_dir.join("manifest.json")))
            .collect())
    }
}

/// Fails every write.
pub struct FailingWriter;

impl ArtifactWriter for FailingWriter {
    async fn write_bundle(&self, _: &Path, _: &ArtifactBundle) -> Result<Vec<PathBuf>> {
        anyhow::bail!("disk full")
    }
}
