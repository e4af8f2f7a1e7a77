//! Extract command implementation
//!
//! Handles the `bytecode-diff extract` command which slims compiler artifacts down to
//! the two code fields `compare` needs.

use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};

use super::resolve_input;
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::BytecodeDiffError;
use crate::extract::{
    locate_truffle, ArtifactExtractor, ExtractConfig, ExtractSummary, TruffleExtractor,
    DEFAULT_BUILD_DIR, DEFAULT_OUTPUT_DIR,
};
use crate::infra::{RealCommandExecutor, RealFileSystem};
use crate::report::{ConsoleSink, ReportSink};

/// Command-line overrides for `extract`
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
    /// `--build-dir`
    pub build_dir: Option<PathBuf>,
    /// `--output`
    pub output: Option<PathBuf>,
    /// `--compile`
    pub compile: bool,
    /// Global `--warning`
    pub warnings: bool,
    /// Global `--verbose`
    pub verbose: bool,
}

/// Resolve extraction settings: flags, then the config file, then built-in defaults
pub fn resolve_config(args: &ExtractArgs, config: &ConfigFile) -> ExtractConfig {
    ExtractConfig {
        build_dir: args
            .build_dir
            .clone()
            .or_else(|| config.extract.build_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR)),
        output_dir: args
            .output
            .clone()
            .or_else(|| config.extract.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        compile: args.compile,
        warnings: args.warnings,
        verbose: args.verbose,
    }
}

/// Extract bytecode from Truffle build artifacts
///
/// # Errors
///
/// Returns an error if:
/// - `truffle` is missing or compilation fails (when compiling)
/// - The build directory does not exist
/// - The output directory cannot be written
pub fn cmd_extract(args: &ExtractArgs) -> Result<()> {
    let config = ConfigLoader::load(Path::new("."))?;
    let mut extract_config = resolve_config(args, &config);
    extract_config.build_dir = resolve_input(&extract_config.build_dir)?;
    extract_config.output_dir = resolve_input(&extract_config.output_dir)?;

    let mut extractor = TruffleExtractor::new(RealFileSystem, RealCommandExecutor);
    if extract_config.compile {
        extractor = extractor.with_program(locate_truffle().map_err(BytecodeDiffError::from)?);
    }

    let sink = ConsoleSink::stdio();
    let summary = run_extract(&extractor, &config, &extract_config, &sink)?;

    if args.verbose {
        sink.progress(&format!(
            "{} Extracted {} artifacts to {}",
            style("✓").green(),
            summary.written,
            extract_config.output_dir.display()
        ));
    }
    Ok(())
}

/// Run any extractor with the configured keys
pub fn run_extract(
    extractor: &dyn ArtifactExtractor,
    config: &ConfigFile,
    extract_config: &ExtractConfig,
    sink: &dyn ReportSink,
) -> Result<ExtractSummary> {
    let summary = extractor
        .extract(&config.keys, extract_config, sink)
        .map_err(BytecodeDiffError::from)
        .with_context(|| format!("Failed to extract from {}", extract_config.build_dir.display()))?;

    log::debug!(
        "extract wrote {} files, skipped {}",
        summary.written,
        summary.skipped.len()
    );
    Ok(summary)
}
