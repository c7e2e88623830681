//! Command implementations

pub mod decode;
pub mod render;
pub mod show;
pub mod version;
