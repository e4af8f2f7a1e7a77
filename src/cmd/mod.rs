//! Command handlers for bytecode-diff CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod compare;
pub mod completions;
pub mod extract;

use std::path::{Path, PathBuf};

use crate::error::BytecodeDiffError;
use crate::infra::resolve_path;

/// Resolve a command-line path against the working directory
pub(crate) fn resolve_input(path: &Path) -> Result<PathBuf, BytecodeDiffError> {
    resolve_path(path).map_err(|source| BytecodeDiffError::Io {
        context: format!("resolving {}", path.display()),
        source,
    })
}

// Re-export command functions for convenient access
pub use compare::{cmd_compare, cmd_compare_with};
pub use completions::cmd_completions;
pub use extract::{cmd_extract, ExtractArgs};
