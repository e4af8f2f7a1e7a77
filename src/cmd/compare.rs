//! Compare command implementation
//!
//! Handles the `bytecode-diff compare` command which compares two artifact directories
//! and reports how much deployment gas each contract gained or lost.

use anyhow::Result;
use std::path::Path;

use super::resolve_input;
use crate::compare::{CompareOptions, ComparisonResult, DiffEngine};
use crate::config::{ConfigFile, ConfigLoader};
use crate::infra::{FileSystem, RealFileSystem};
use crate::report::{ConsoleSink, ReportFormatter, ReportSink};

/// Compare two artifact directories and print the report
///
/// Relative paths are resolved against the working directory, so reports name
/// absolute directories.
///
/// # Examples
///
/// ```no_run
/// use bytecode_diff::cmd::compare::cmd_compare;
/// use bytecode_diff::compare::CompareOptions;
/// use std::path::Path;
///
/// cmd_compare(
///     Path::new("bytecode-main"),
///     Path::new("bytecode"),
///     CompareOptions::default(),
///     false,
/// )?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either path is not a readable directory
/// - `.bytecode-diff.toml` exists but is invalid
pub fn cmd_compare(old: &Path, new: &Path, options: CompareOptions, json: bool) -> Result<()> {
    let old = resolve_input(old)?;
    let new = resolve_input(new)?;
    let config = ConfigLoader::load(Path::new("."))?;
    let sink = ConsoleSink::stdio();
    cmd_compare_with(RealFileSystem, &config, &old, &new, options, json, &sink)?;
    Ok(())
}

/// Run a comparison against any filesystem and sink
pub fn cmd_compare_with<FS: FileSystem>(
    fs: FS,
    config: &ConfigFile,
    old: &Path,
    new: &Path,
    mut options: CompareOptions,
    json: bool,
    sink: &dyn ReportSink,
) -> Result<ComparisonResult> {
    // stdout must stay a single parseable document
    if json {
        options.verbose = false;
    }

    let engine = DiffEngine::new(fs, config.keys.clone());
    let result = engine.compare(old, new, &options, sink)?;

    let formatter = ReportFormatter::new(&options).with_name_width(config.report.name_width);
    if json {
        formatter.emit_json(&result, old, new, sink);
    } else {
        formatter.emit(&result, old, new, sink);
    }

    Ok(result)
}
