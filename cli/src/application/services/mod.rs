//! Application services — use-case orchestration.

pub mod render_bundle;
