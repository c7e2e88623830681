//! Integration tests for node-bootstrapper
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! They are slower and should be run separately from unit tests.

mod cli_tests;
mod decode_command;
mod show_command;
