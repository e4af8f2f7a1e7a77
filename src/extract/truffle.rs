//! Truffle artifact extraction
//!
//! Optionally runs `truffle compile`, then copies the requested keys out of every
//! artifact in the build directory.

use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};

use super::{ArtifactExtractor, ExtractConfig, ExtractError, ExtractSummary};
use crate::artifact::ArtifactKeys;
use crate::infra::{CommandExecutor, FileSystem};
use crate::report::ReportSink;

const TRUFFLE: &str = "truffle";

/// Find the truffle binary in PATH.
///
/// Resolves shims such as `truffle.cmd` that a bare `Command::new("truffle")` misses on
/// Windows.
pub fn locate_truffle() -> Result<PathBuf, ExtractError> {
    which::which(TRUFFLE).map_err(|e| {
        log::debug!("which {} failed: {}", TRUFFLE, e);
        ExtractError::ToolMissing(TRUFFLE.to_string())
    })
}

/// Extractor for Truffle build output
pub struct TruffleExtractor<FS: FileSystem, CE: CommandExecutor> {
    fs: FS,
    cmd_executor: CE,
    program: PathBuf,
}

impl<FS: FileSystem, CE: CommandExecutor> TruffleExtractor<FS, CE> {
    /// Create an extractor that invokes `truffle` from PATH
    pub fn new(fs: FS, cmd_executor: CE) -> Self {
        Self {
            fs,
            cmd_executor,
            program: PathBuf::from(TRUFFLE),
        }
    }

    /// Invoke the compiler at `program` instead
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn compile(&self) -> Result<(), ExtractError> {
        let program = self.program.to_string_lossy().into_owned();
        log::debug!("running {} compile", program);

        let status = self
            .cmd_executor
            .run(|cmd| cmd.arg("compile"), &program)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ExtractError::ToolMissing(TRUFFLE.to_string()),
                _ => ExtractError::Io(e),
            })?;

        if !status.success() {
            return Err(ExtractError::CompileFailed(format!(
                "{} compile exited with {}",
                TRUFFLE, status
            )));
        }
        Ok(())
    }

    /// Slim one artifact. `Ok(None)` means the file was reported and skipped.
    fn extract_file(
        &self,
        name: &str,
        keys: &ArtifactKeys,
        config: &ExtractConfig,
        sink: &dyn ReportSink,
    ) -> Result<Option<String>, ExtractError> {
        let path = config.build_dir.join(name);
        let document = match self.read_document(&path) {
            Ok(document) => document,
            Err(reason) => {
                sink.error(&format!("Unable to extract {}: {}", name, reason));
                return Ok(None);
            }
        };

        let mut slim = Map::new();
        for key in keys.as_slice() {
            match document.get(key) {
                Some(value) => {
                    slim.insert(key.to_string(), value.clone());
                }
                None if config.warnings => {
                    sink.warning(&format!("Warning: {} has no `{}` field", name, key));
                }
                None => {}
            }
        }

        serde_json::to_string_pretty(&Value::Object(slim))
            .map(Some)
            .map_err(|source| ExtractError::Serialize {
                name: name.to_string(),
                source,
            })
    }

    fn read_document(&self, path: &Path) -> Result<Map<String, Value>, String> {
        let contents = self.fs.read_to_string(path).map_err(|e| e.to_string())?;
        match serde_json::from_str(&contents).map_err(|e| e.to_string())? {
            Value::Object(map) => Ok(map),
            _ => Err("not a JSON object".to_string()),
        }
    }
}

impl<FS: FileSystem, CE: CommandExecutor> ArtifactExtractor for TruffleExtractor<FS, CE> {
    fn extract(
        &self,
        keys: &ArtifactKeys,
        config: &ExtractConfig,
        sink: &dyn ReportSink,
    ) -> Result<ExtractSummary, ExtractError> {
        if !config.verbose {
            sink.progress("Extracting...");
        }

        if config.compile {
            self.compile()?;
        }

        if !self.fs.is_dir(&config.build_dir) {
            return Err(ExtractError::BuildDirNotFound(config.build_dir.clone()));
        }
        self.fs.create_dir_all(&config.output_dir)?;

        let names: Vec<String> = self
            .fs
            .list_files(&config.build_dir)?
            .into_iter()
            .filter(|name| name.ends_with(".json"))
            .collect();
        log::debug!(
            "extracting {} artifacts from {} to {}",
            names.len(),
            config.build_dir.display(),
            config.output_dir.display()
        );

        let mut summary = ExtractSummary::default();
        for name in names {
            if config.verbose {
                sink.progress(&format!("Extracting {}...", name));
            }

            match self.extract_file(&name, keys, config, sink)? {
                Some(json) => {
                    self.fs.write(&config.output_dir.join(&name), json)?;
                    summary.written += 1;
                }
                None => summary.skipped.push(name),
            }
        }

        Ok(summary)
    }
}
