//! Artifact extraction
//!
//! Copies the two code fields out of full compiler artifacts into a slim directory
//! that `compare` can read. Compiler artifacts carry ABI, AST and source maps too, so
//! the extracted copies are what gets checked in and diffed between builds.

pub mod truffle;

use std::path::PathBuf;
use thiserror::Error;

use crate::artifact::ArtifactKeys;
use crate::report::ReportSink;

pub use truffle::{locate_truffle, TruffleExtractor};

/// Default directory of Truffle build artifacts
pub const DEFAULT_BUILD_DIR: &str = "build/contracts";

/// Default directory for extracted artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "bytecode";

/// Errors that abort an extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O error while preparing or writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Build directory is missing
    #[error("Build directory not found: {}", .0.display())]
    BuildDirNotFound(PathBuf),

    /// Compiler is not installed
    #[error("Required tool missing: {0}")]
    ToolMissing(String),

    /// Compiler ran and failed
    #[error("Compilation failed: {0}")]
    CompileFailed(String),

    /// An extracted document could not be serialized
    #[error("Failed to serialize {name}")]
    Serialize {
        /// Artifact file name
        name: String,
        #[source]
        /// Serializer error
        source: serde_json::Error,
    },
}

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Directory holding compiler artifacts
    pub build_dir: PathBuf,
    /// Directory receiving the extracted artifacts
    pub output_dir: PathBuf,
    /// Run the compiler first
    pub compile: bool,
    /// Warn about artifacts lacking a requested key
    pub warnings: bool,
    /// Announce each file
    pub verbose: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            compile: true,
            warnings: true,
            verbose: false,
        }
    }
}

/// Outcome of an extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Number of artifacts written
    pub written: usize,
    /// Artifacts that could not be extracted
    pub skipped: Vec<String>,
}

/// Produces an artifact directory for the diff engine
pub trait ArtifactExtractor {
    /// Extract `keys` from every artifact under `config.build_dir` into `config.output_dir`.
    ///
    /// Per-file problems go to `sink` and do not abort the run.
    fn extract(
        &self,
        keys: &ArtifactKeys,
        config: &ExtractConfig,
        sink: &dyn ReportSink,
    ) -> Result<ExtractSummary, ExtractError>;
}
