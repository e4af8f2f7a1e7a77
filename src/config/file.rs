//! Configuration file data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::artifact::ArtifactKeys;
use crate::error::BytecodeDiffError;
use crate::report::DEFAULT_NAME_WIDTH;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bytecode-diff.toml";

/// Narrowest name column that still fits a character and the ellipsis
pub const MIN_NAME_WIDTH: usize = 4;

/// bytecode-diff configuration file structure
///
/// ```toml
/// [keys]
/// bytecode = "bytecode"
/// deployed-bytecode = "deployedBytecode"
///
/// [extract]
/// build-dir = "build/contracts"
/// output = "bytecode"
///
/// [report]
/// name-width = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Artifact field names
    #[serde(default)]
    pub keys: ArtifactKeys,

    /// Defaults for the `extract` command
    #[serde(default)]
    pub extract: ExtractSettings,

    /// Report layout
    #[serde(default)]
    pub report: ReportSettings,
}

/// `[extract]` table. Command-line flags win over these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtractSettings {
    /// Compiler output directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_dir: Option<PathBuf>,

    /// Extracted artifact directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// `[report]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReportSettings {
    /// Maximum width of the contract name column
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            name_width: default_name_width(),
        }
    }
}

impl ConfigFile {
    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), BytecodeDiffError> {
        let invalid = |reason: String| BytecodeDiffError::InvalidConfig { reason };

        for (name, value) in [
            ("keys.bytecode", &self.keys.bytecode),
            ("keys.deployed-bytecode", &self.keys.deployed_bytecode),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} must not be empty", name)));
            }
        }

        if self.keys.bytecode == self.keys.deployed_bytecode {
            return Err(invalid(format!(
                "keys.bytecode and keys.deployed-bytecode are both `{}`",
                self.keys.bytecode
            )));
        }

        if self.report.name_width < MIN_NAME_WIDTH {
            return Err(invalid(format!(
                "report.name-width must be at least {} (got {})",
                MIN_NAME_WIDTH, self.report.name_width
            )));
        }

        Ok(())
    }
}
