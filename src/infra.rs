//! Infrastructure traits for abstracting I/O operations.
//!
//! This module provides trait abstractions for filesystem and command execution operations,
//! so the diff engine and the extractor can be driven by in-memory mocks in tests.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Trait for abstracting filesystem operations.
///
/// This trait allows for dependency injection of filesystem operations,
/// making code more testable and allowing for alternative implementations
/// (e.g., in-memory filesystems for testing).
pub trait FileSystem {
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the names of the regular entries directly inside `path`.
    ///
    /// Subdirectories are skipped and nothing is recursed into. Names are returned in a
    /// deterministic order.
    fn list_files(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    fn list_files(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // read_dir order is platform dependent
        names.sort();
        Ok(names)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// Resolve `path` against the current working directory.
///
/// Absolute paths are returned unchanged. Nothing is canonicalized, so the path does not
/// have to exist.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Trait for abstracting command execution.
///
/// This trait allows for dependency injection of command execution operations,
/// enabling testing without running real commands (e.g. `truffle compile`).
pub trait CommandExecutor {
    /// Execute a command and return its exit status.
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus>;

    /// Execute a command built with a closure and return its exit status.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bytecode_diff::infra::{CommandExecutor, RealCommandExecutor};
    /// use std::path::Path;
    ///
    /// let executor = RealCommandExecutor;
    /// let status = executor.run(|cmd| {
    ///     cmd.current_dir(Path::new("."))
    ///        .arg("compile")
    /// }, "truffle")?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    fn run<F>(&self, builder: F, program: &str) -> io::Result<ExitStatus>
    where
        F: FnOnce(&mut Command) -> &mut Command,
    {
        let mut cmd = Command::new(program);
        builder(&mut cmd);
        self.status(&mut cmd)
    }
}

/// Real command executor that delegates to std::process::Command.
#[derive(Debug, Clone, Copy)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus> {
        cmd.status()
    }
}

/// Create an ExitStatus with the given exit code for use in test mocks.
///
/// This avoids spawning actual processes (like `Command::new("true")`) in tests.
#[cfg(all(test, unix))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8) // Unix stores exit code in upper bits
}

#[cfg(all(test, windows))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}
