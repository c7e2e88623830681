//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: reading the configuration
//! document and writing the rendered bundle to disk.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod fs;
