//! Bytecode diff engine
//!
//! Reads each comparable artifact pair and turns their code lengths into byte deltas
//! and a deployment gas estimate.

use std::path::Path;

use super::pairing::DirectoryPairing;
use super::CompareOptions;
use crate::artifact::{Artifact, ArtifactError, ArtifactKeys};
use crate::error::BytecodeDiffError;
use crate::infra::FileSystem;
use crate::report::ReportSink;

/// Gas charged per byte of deployed code stored on-chain
pub const GAS_COST_PER_BYTE: i64 = 200;

/// Size change of one contract between the old and new build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Artifact file name
    pub name: String,
    /// Constructor-only code delta in bytes (creation delta minus deployed delta)
    pub init_code_bytes: i64,
    /// Deployed (runtime) code delta in bytes
    pub deployed_code_bytes: i64,
}

impl FileDiff {
    /// Compute the deltas from `old` to `new`.
    ///
    /// Creation code contains the deployed code, so the deployed delta is subtracted
    /// from the creation delta to isolate constructor growth.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytecode_diff::artifact::Artifact;
    /// use bytecode_diff::compare::FileDiff;
    ///
    /// let old = Artifact { bytecode: "0x00000000".into(), deployed_bytecode: "0x0000".into() };
    /// let new = Artifact { bytecode: "0x0000000000".into(), deployed_bytecode: "0x000000".into() };
    ///
    /// let diff = FileDiff::between("Foo.json", &old, &new);
    /// assert_eq!(diff.deployed_code_bytes, 1);
    /// assert_eq!(diff.init_code_bytes, 0);
    /// assert_eq!(diff.gas_cost(), 200);
    /// ```
    pub fn between(name: impl Into<String>, old: &Artifact, new: &Artifact) -> Self {
        let creation_chars = char_delta(&old.bytecode, &new.bytecode);
        let deployed_chars = char_delta(&old.deployed_bytecode, &new.deployed_bytecode);

        // Artifact fields have even length, so these halve exactly
        Self {
            name: name.into(),
            init_code_bytes: (creation_chars - deployed_chars) / 2,
            deployed_code_bytes: deployed_chars / 2,
        }
    }

    /// Deployment gas delta (positive = more expensive than before)
    pub fn gas_cost(&self) -> i64 {
        self.deployed_code_bytes * GAS_COST_PER_BYTE
    }

    /// Neither component changed size
    pub fn is_unchanged(&self) -> bool {
        self.init_code_bytes == 0 && self.deployed_code_bytes == 0
    }
}

fn char_delta(old: &str, new: &str) -> i64 {
    new.len() as i64 - old.len() as i64
}

/// Everything one comparison run found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Diffs of comparable files, in old-listing order
    pub diffs: Vec<FileDiff>,
    /// Files only present in the old directory
    pub only_old: Vec<String>,
    /// Files only present in the new directory
    pub only_new: Vec<String>,
    /// Files missing a code field on either side
    pub incomparable: Vec<String>,
    /// Files that could not be read or parsed
    pub failed: Vec<String>,
}

impl ComparisonResult {
    /// True if any file is present on one side only
    pub fn has_orphans(&self) -> bool {
        !self.only_old.is_empty() || !self.only_new.is_empty()
    }
}

/// Compares two artifact directories
pub struct DiffEngine<FS: FileSystem> {
    fs: FS,
    keys: ArtifactKeys,
}

impl<FS: FileSystem> DiffEngine<FS> {
    /// Create an engine reading the fields named by `keys`
    pub fn new(fs: FS, keys: ArtifactKeys) -> Self {
        Self { fs, keys }
    }

    /// Compare every artifact present in both directories.
    ///
    /// Files are processed sequentially in old-listing order. Progress lines (verbose),
    /// missing-field warnings (if enabled) and per-file errors go to `sink` as they
    /// happen; none of them stop the run.
    ///
    /// # Errors
    ///
    /// Returns [`BytecodeDiffError::NotADirectory`] if either directory is unusable.
    pub fn compare(
        &self,
        old_dir: &Path,
        new_dir: &Path,
        options: &CompareOptions,
        sink: &dyn ReportSink,
    ) -> Result<ComparisonResult, BytecodeDiffError> {
        let DirectoryPairing {
            comparable,
            only_old,
            only_new,
        } = DirectoryPairing::scan(&self.fs, old_dir, new_dir)?;

        let mut result = ComparisonResult {
            only_old,
            only_new,
            ..ComparisonResult::default()
        };

        for name in comparable {
            if options.verbose {
                sink.progress(&format!("Comparing {}...", name));
            }

            match self.diff_file(old_dir, new_dir, &name) {
                Ok(diff) => {
                    log::debug!(
                        "{}: init {:+} bytes, deployed {:+} bytes",
                        name,
                        diff.init_code_bytes,
                        diff.deployed_code_bytes
                    );
                    result.diffs.push(diff);
                }
                Err(e) if e.is_missing_field() => {
                    log::debug!("{}", e);
                    if options.warnings {
                        sink.warning(&format!(
                            "Warning: {} could not be compared due to missing bytecode",
                            name
                        ));
                    }
                    result.incomparable.push(name);
                }
                Err(e) => {
                    sink.error(&format!("Unable to compare {}: {}", name, error_chain(&e)));
                    result.failed.push(name);
                }
            }
        }

        Ok(result)
    }

    /// Diff a single file present in both directories.
    ///
    /// Both sides are loaded before deciding; a read or parse failure on either side
    /// takes precedence over a missing field.
    pub fn diff_file(
        &self,
        old_dir: &Path,
        new_dir: &Path,
        name: &str,
    ) -> Result<FileDiff, ArtifactError> {
        let old = Artifact::load(&self.fs, &old_dir.join(name), &self.keys);
        let new = Artifact::load(&self.fs, &new_dir.join(name), &self.keys);

        match (old, new) {
            (Ok(old), Ok(new)) => Ok(FileDiff::between(name, &old, &new)),
            (Err(old), Err(new)) if old.is_missing_field() => Err(new),
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }
}

fn error_chain(error: &ArtifactError) -> String {
    use std::error::Error;

    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}
