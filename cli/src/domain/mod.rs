//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifact;
pub mod error;
pub mod render;

pub use artifact::{Artifact, ArtifactBundle, ArtifactKind, ManifestEntry};
pub use error::{ConfigError, RenderError};
