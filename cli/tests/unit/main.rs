//! Unit tests for node-bootstrapper
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod local_fs;
mod mocks;
mod render_service;
