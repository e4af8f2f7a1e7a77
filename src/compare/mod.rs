//! Bytecode comparison between two artifact directories
//!
//! Pipeline:
//! 1. [`DirectoryPairing`] lines up file names across both directories
//! 2. [`DiffEngine`] loads each comparable pair and computes a [`FileDiff`]
//! 3. The results land in a [`ComparisonResult`] for the report formatter

pub mod engine;
pub mod pairing;

pub use engine::{ComparisonResult, DiffEngine, FileDiff, GAS_COST_PER_BYTE};
pub use pairing::DirectoryPairing;

/// Flags controlling a comparison run and its report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Hide contracts whose init and deployed sizes are both unchanged
    pub suppress_same: bool,
    /// Emit warnings for incomparable and orphaned files
    pub warnings: bool,
    /// Announce each file before it is compared
    pub verbose: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            suppress_same: true,
            warnings: true,
            verbose: false,
        }
    }
}
