//! Infrastructure implementation of the `ConfigSource` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nbcontract::Configuration;

use crate::application::ports::ConfigSource;
use crate::domain::ConfigError;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "NODE_BOOTSTRAPPER_CONFIG";

const VALID_EXTENSIONS: &str = "json, yaml, yml";

/// Document syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from `path`'s extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
                valid: VALID_EXTENSIONS.to_string(),
            }),
        }
    }
}

/// Reads the configuration from a JSON or YAML file on disk.
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the path from an explicit argument, falling back to
    /// `NODE_BOOTSTRAPPER_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when neither is set.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        explicit
            .or_else(|| {
                std::env::var(CONFIG_ENV_VAR)
                    .ok()
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .map(Self::new)
            .ok_or(ConfigError::Missing)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<Configuration> {
        let format = ConfigFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        let config = parse_config(&content, format)
            .with_context(|| format!("cannot parse {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), ?format, "loaded configuration");
        Ok(config)
    }
}

/// Decode a configuration document.
///
/// # Errors
///
/// Returns an error if `content` is not a valid document of `format`.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Configuration> {
    match format {
        ConfigFormat::Json => serde_json::from_str(content).context("invalid JSON"),
        ConfigFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML"),
    }
}
