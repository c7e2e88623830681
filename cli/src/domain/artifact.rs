//! Artifact model — the files a node receives and where they land.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.

use std::fmt;
use std::str::FromStr;

use nbcontract::Configuration;
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::error::RenderError;
use super::render::{
    containerd_config_text, encode, kubenet_template_text, provision_environment_text,
    sysctl_text, ulimit_text,
};

/// One kind of rendered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Sysctl,
    Ulimit,
    Containerd,
    KubenetTemplate,
    Environment,
}

impl ArtifactKind {
    /// Every kind, in render order.
    pub const ALL: [Self; 5] = [
        Self::Sysctl,
        Self::Ulimit,
        Self::Containerd,
        Self::KubenetTemplate,
        Self::Environment,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sysctl => "sysctl",
            Self::Ulimit => "ulimit",
            Self::Containerd => "containerd",
            Self::KubenetTemplate => "kubenet-template",
            Self::Environment => "environment",
        }
    }

    /// Absolute path of the file on the node.
    #[must_use]
    pub fn node_path(self) -> &'static str {
        match self {
            Self::Sysctl => "/etc/sysctl.d/999-sysctl-aks.conf",
            Self::Ulimit => "/etc/systemd/system/containerd.service.d/10-ulimits.conf",
            Self::Containerd => "/etc/containerd/config.toml",
            Self::KubenetTemplate => "/etc/containerd/kubenet_template.conf",
            Self::Environment => "/opt/azure/containers/provision.env",
        }
    }

    /// Render this kind's plain text from the contract.
    #[must_use]
    pub fn render(self, config: &Configuration) -> String {
        match self {
            Self::Sysctl => sysctl_text(config.sysctl_config()),
            Self::Ulimit => ulimit_text(config.ulimit_config()),
            Self::Containerd => containerd_config_text(config),
            Self::KubenetTemplate => kubenet_template_text().to_string(),
            Self::Environment => provision_environment_text(config),
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| RenderError::UnknownArtifactKind {
                kind: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// A rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub text: String,
}

impl Artifact {
    #[must_use]
    pub fn new(kind: ArtifactKind, text: String) -> Self {
        Self { kind, text }
    }

    #[must_use]
    pub fn node_path(&self) -> &'static str {
        self.kind.node_path()
    }

    /// Base64 form, as embedded in the environment descriptor.
    #[must_use]
    pub fn encoded(&self) -> String {
        encode(&self.text)
    }

    /// Lowercase hex SHA-256 of the plain text.
    #[must_use]
    pub fn sha256(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Manifest row describing one written artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub kind: ArtifactKind,
    pub path: &'static str,
    pub sha256: String,
    pub bytes: usize,
}

/// Every artifact rendered from one configuration, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactBundle {
    artifacts: Vec<Artifact>,
}

impl ArtifactBundle {
    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    #[must_use]
    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.artifacts
            .iter()
            .map(|a| ManifestEntry {
                kind: a.kind,
                path: a.node_path(),
                sha256: a.sha256(),
                bytes: a.text.len(),
            })
            .collect()
    }
}
