//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Artifact directory fixtures
//! - Access to the built binary
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::ArtifactDir;
//!
//! let old = ArtifactDir::new().unwrap();
//! old.write("Foo.json", "0x00000000", "0x0000").unwrap();
//! ```

pub mod fixtures;

use assert_cmd::Command;

/// Helper to get the bytecode-diff binary command
#[allow(dead_code)]
pub fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bytecode-diff"));
    cmd.arg("--no-color");
    cmd
}
