#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bytecode-diff library
//!
//! This library compares two directories of compiled contract artifacts and reports
//! per-contract changes in constructor and runtime code size, plus the deployment gas
//! those changes cost. It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Diffing two artifacts:
//!
//! ```
//! use bytecode_diff::artifact::Artifact;
//! use bytecode_diff::compare::FileDiff;
//!
//! let old = Artifact {
//!     bytecode: "0x60806040".to_string(),
//!     deployed_bytecode: "0x6080".to_string(),
//! };
//! let new = Artifact {
//!     bytecode: "0x6080604052".to_string(),
//!     deployed_bytecode: "0x608060".to_string(),
//! };
//!
//! let diff = FileDiff::between("Token.json", &old, &new);
//! assert_eq!(diff.deployed_code_bytes, 1);
//! assert_eq!(diff.init_code_bytes, 0);
//! assert_eq!(diff.gas_cost(), 200);
//! ```
//!
//! # Advanced Example: Comparing Directories
//!
//! Running the engine over real directories and rendering the report:
//!
//! ```
//! use bytecode_diff::artifact::ArtifactKeys;
//! use bytecode_diff::compare::{CompareOptions, DiffEngine};
//! use bytecode_diff::infra::RealFileSystem;
//! use bytecode_diff::report::{MemorySink, ReportFormatter};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let old = TempDir::new().unwrap();
//! let new = TempDir::new().unwrap();
//! fs::write(old.path().join("Token.json"), r#"{"bytecode":"0x00","deployedBytecode":"0x00"}"#).unwrap();
//! fs::write(new.path().join("Token.json"), r#"{"bytecode":"0x0000","deployedBytecode":"0x0000"}"#).unwrap();
//!
//! let options = CompareOptions::default();
//! let sink = MemorySink::new();
//! let engine = DiffEngine::new(RealFileSystem, ArtifactKeys::default());
//! let result = engine.compare(old.path(), new.path(), &options, &sink).unwrap();
//!
//! ReportFormatter::new(&options).emit(&result, old.path(), new.path(), &sink);
//! assert!(sink.tables()[0].contains("200 more gas"));
//! ```

/// Build artifact loading
pub mod artifact;
/// Command handlers for CLI operations
pub mod cmd;
/// Directory pairing and the diff engine
pub mod compare;
/// Configuration file support
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Artifact extraction from compiler output
pub mod extract;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Report shaping, table layout and output sinks
pub mod report;
