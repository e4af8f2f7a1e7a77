//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for scripts and CI
//!
//! Per-file problems (unreadable or incomplete artifacts) are not errors at this level;
//! see [`crate::artifact::ArtifactError`]. Everything here aborts the run.
//!
//! # Examples
//!
//! ```no_run
//! use bytecode_diff::compare::{CompareOptions, DiffEngine};
//! use bytecode_diff::artifact::ArtifactKeys;
//! use bytecode_diff::infra::RealFileSystem;
//! use bytecode_diff::report::MemorySink;
//! use std::path::Path;
//!
//! let engine = DiffEngine::new(RealFileSystem, ArtifactKeys::default());
//! let sink = MemorySink::new();
//!
//! match engine.compare(Path::new("old"), Path::new("new"), &CompareOptions::default(), &sink) {
//!     Ok(result) => println!("{} contracts compared", result.diffs.len()),
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::extract::ExtractError;

/// Errors that abort a bytecode-diff run
#[derive(Error, Debug)]
pub enum BytecodeDiffError {
    /// An input path is missing or not a readable directory
    #[error("{} is not a directory or could not be read", path.display())]
    NotADirectory {
        /// Offending path
        path: PathBuf,
        /// Which input it was ("old", "new", "build")
        role: String,
    },

    /// Configuration file is present but unusable
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Extraction failed
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),
}

impl BytecodeDiffError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytecode_diff::error::BytecodeDiffError;
    /// use std::path::PathBuf;
    ///
    /// let error = BytecodeDiffError::NotADirectory {
    ///     path: PathBuf::from("/tmp/old-bytecode"),
    ///     role: "old".to_string(),
    /// };
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("bytecode-diff extract"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotADirectory { role, .. } if role == "build" => Some(
                "Compile the project first, or pass --build-dir pointing at the build output"
                    .to_string(),
            ),
            Self::NotADirectory { role, .. } => Some(format!(
                "Check the {} directory path; run 'bytecode-diff extract' to create one",
                role
            )),
            Self::InvalidConfig { .. } => Some(format!(
                "Fix or remove {} in the working directory",
                crate::config::CONFIG_FILE_NAME
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::Extract(e) => match e {
                ExtractError::ToolMissing(tool) => {
                    Some(format!("Install {tool}, or run extract with --compile false"))
                }
                ExtractError::CompileFailed(_) => {
                    Some("Check the compiler errors above and fix compilation issues".to_string())
                }
                ExtractError::BuildDirNotFound(_) => Some(
                    "Compile the project first, or pass --build-dir pointing at the build output"
                        .to_string(),
                ),
                ExtractError::Io(_) | ExtractError::Serialize { .. } => {
                    Some("Check that the output directory is writable".to_string())
                }
            },
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytecode_diff::error::BytecodeDiffError;
    /// use std::path::PathBuf;
    ///
    /// let error = BytecodeDiffError::NotADirectory {
    ///     path: PathBuf::from("old"),
    ///     role: "old".to_string(),
    /// };
    /// assert_eq!(error.exit_code(), 66); // EX_NOINPUT
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotADirectory { .. } => 66, // EX_NOINPUT (sysexits.h)
            Self::InvalidConfig { .. } => 78, // EX_CONFIG
            Self::Io { .. } => 74,           // EX_IOERR
            Self::Extract(e) => match e {
                ExtractError::ToolMissing(_) => 127, // Command not found (Unix convention)
                ExtractError::BuildDirNotFound(_) => 66,
                ExtractError::Io(_) => 74,
                ExtractError::CompileFailed(_) | ExtractError::Serialize { .. } => 1,
            },
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            style("error:").red().bold().for_stderr(),
            error
        ));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow().for_stderr(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(diff_error) = Self::find(error) {
            if let Some(suggestion) = diff_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold().for_stderr(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, BytecodeDiffError::exit_code)
    }

    // Commands wrap errors with `.context`, so look through the whole chain
    fn find(error: &anyhow::Error) -> Option<&BytecodeDiffError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<BytecodeDiffError>())
    }
}
