//! Build artifact loading
//!
//! An artifact is a JSON document (one per contract) carrying two hex-encoded code
//! fields: the creation bytecode, which includes constructor logic, and the deployed
//! (runtime) bytecode that ends up on-chain.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infra::FileSystem;

/// Default key of the creation bytecode in Truffle artifacts
pub const BYTECODE_KEY: &str = "bytecode";

/// Default key of the deployed (runtime) bytecode in Truffle artifacts
pub const DEPLOYED_BYTECODE_KEY: &str = "deployedBytecode";

/// Names of the two code fields read from each artifact.
///
/// Shared between the extractor (which copies these keys out of compiler output) and
/// the diff engine (which reads them back).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactKeys {
    /// Key of the creation bytecode
    #[serde(default = "default_bytecode_key")]
    pub bytecode: String,
    /// Key of the deployed bytecode
    #[serde(default = "default_deployed_bytecode_key")]
    pub deployed_bytecode: String,
}

fn default_bytecode_key() -> String {
    BYTECODE_KEY.to_string()
}

fn default_deployed_bytecode_key() -> String {
    DEPLOYED_BYTECODE_KEY.to_string()
}

impl Default for ArtifactKeys {
    fn default() -> Self {
        Self {
            bytecode: default_bytecode_key(),
            deployed_bytecode: default_deployed_bytecode_key(),
        }
    }
}

impl ArtifactKeys {
    /// Both keys, creation bytecode first
    pub fn as_slice(&self) -> [&str; 2] {
        [self.bytecode.as_str(), self.deployed_bytecode.as_str()]
    }
}

/// Per-file failure while loading an artifact.
///
/// None of these abort a comparison run; the file is skipped.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// File could not be read
    #[error("failed to read {}", path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// File is not valid JSON
    #[error("{} is not valid JSON", path.display())]
    Parse {
        /// Artifact path
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// A required code field is absent (or not a string)
    #[error("{} has no string field `{key}`", path.display())]
    MissingField {
        /// Artifact path
        path: PathBuf,
        /// Missing key
        key: String,
    },

    /// A hex field has an odd number of characters
    #[error("`{key}` in {} has odd length {len}", path.display())]
    OddLength {
        /// Artifact path
        path: PathBuf,
        /// Offending key
        key: String,
        /// Character length found
        len: usize,
    },
}

impl ArtifactError {
    /// Missing fields make a file incomparable rather than broken
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

/// The two code fields of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Creation bytecode, hex encoded
    pub bytecode: String,
    /// Deployed bytecode, hex encoded
    pub deployed_bytecode: String,
}

impl Artifact {
    /// Load an artifact from `path`, reading the fields named by `keys`.
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if the file cannot be read, is not JSON, lacks one of
    /// the fields, or has a field of odd length.
    pub fn load<FS: FileSystem>(
        fs: &FS,
        path: &Path,
        keys: &ArtifactKeys,
    ) -> Result<Self, ArtifactError> {
        let contents = fs.read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &contents, keys)
    }

    /// Parse an artifact from JSON text. `path` is only used for error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytecode_diff::artifact::{Artifact, ArtifactKeys};
    /// use std::path::Path;
    ///
    /// let json = r#"{"bytecode": "0x6080", "deployedBytecode": "0x60"}"#;
    /// let artifact = Artifact::from_json(Path::new("Foo.json"), json, &ArtifactKeys::default())?;
    /// assert_eq!(artifact.bytecode.len(), 6);
    /// # Ok::<(), bytecode_diff::artifact::ArtifactError>(())
    /// ```
    pub fn from_json(path: &Path, contents: &str, keys: &ArtifactKeys) -> Result<Self, ArtifactError> {
        let document: Value =
            serde_json::from_str(contents).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            bytecode: hex_field(&document, path, &keys.bytecode)?,
            deployed_bytecode: hex_field(&document, path, &keys.deployed_bytecode)?,
        })
    }
}

fn hex_field(document: &Value, path: &Path, key: &str) -> Result<String, ArtifactError> {
    let value = document
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ArtifactError::MissingField {
            path: path.to_path_buf(),
            key: key.to_string(),
        })?;

    // Lengths are halved into bytes later
    if value.len() % 2 != 0 {
        return Err(ArtifactError::OddLength {
            path: path.to_path_buf(),
            key: key.to_string(),
            len: value.len(),
        });
    }

    Ok(value.to_string())
}
