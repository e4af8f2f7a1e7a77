//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::BytecodeDiffError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .bytecode-diff.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bytecode_diff::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Reading `{}` and `{}`", config.keys.bytecode, config.keys.deployed_bytecode);
    /// # Ok::<(), bytecode_diff::error::BytecodeDiffError>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile, BytecodeDiffError> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation.
    ///
    /// A missing file yields the defaults.
    pub fn load_with_fs<FS: FileSystem>(
        project_root: &Path,
        fs: &FS,
    ) -> Result<ConfigFile, BytecodeDiffError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read file atomically - no TOCTOU race window
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(BytecodeDiffError::Io {
                    context: config_path.display().to_string(),
                    source: e,
                });
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).map_err(|e| BytecodeDiffError::InvalidConfig {
                reason: format!("{}: {}", CONFIG_FILE_NAME, e.to_string().trim_end()),
            })?;
        config.validate()?;

        log::debug!("loaded {}", config_path.display());
        Ok(config)
    }
}
