//! Test fixture helpers for creating artifact directories
//!
//! Provides utilities for laying out old/new artifact directories and Truffle build
//! output inside temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of artifact JSON files
pub struct ArtifactDir {
    dir: TempDir,
}

impl ArtifactDir {
    /// Create an empty artifact directory
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Directory path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an artifact with both code fields
    pub fn write(&self, name: &str, bytecode: &str, deployed: &str) -> anyhow::Result<PathBuf> {
        self.write_raw(name, &artifact_json(bytecode, deployed))
    }

    /// Write arbitrary contents under `name`
    pub fn write_raw(&self, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Artifact JSON with the default key names
pub fn artifact_json(bytecode: &str, deployed: &str) -> String {
    format!(
        r#"{{
  "bytecode": "{}",
  "deployedBytecode": "{}"
}}"#,
        bytecode, deployed
    )
}

/// A full Truffle artifact as found under build/contracts
pub fn truffle_artifact(name: &str, bytecode: &str, deployed: &str) -> String {
    format!(
        r#"{{
  "contractName": "{name}",
  "abi": [],
  "bytecode": "{bytecode}",
  "deployedBytecode": "{deployed}",
  "sourceMap": "",
  "compiler": {{ "name": "solc", "version": "0.8.19" }}
}}"#
    )
}

/// Old/new directory pair covering every comparison outcome:
///
/// - `Foo.json` grows by one deployed byte
/// - `Bar.json` only exists in the old directory
/// - `Baz.json` is identical on both sides
/// - `Qux.json` lacks `deployedBytecode` in the new copy
pub fn scenario_dirs() -> anyhow::Result<(ArtifactDir, ArtifactDir)> {
    let old = ArtifactDir::new()?;
    let new = ArtifactDir::new()?;

    old.write("Foo.json", "0x00000000", "0x0000")?;
    new.write("Foo.json", "0x0000000000", "0x000000")?;

    old.write("Bar.json", "0x6080", "0x60")?;

    old.write("Baz.json", "0x60806040", "0x6080")?;
    new.write("Baz.json", "0x60806040", "0x6080")?;

    old.write("Qux.json", "0x60806040", "0x6080")?;
    new.write_raw("Qux.json", r#"{"bytecode": "0x60806040"}"#)?;

    Ok((old, new))
}
