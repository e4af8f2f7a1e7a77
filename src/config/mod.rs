//! Configuration for bytecode-diff
//!
//! This module provides:
//! - .bytecode-diff.toml config file support
//! - Validation of values the file format cannot express

pub mod file;
pub mod loader;

pub use file::{ConfigFile, ExtractSettings, ReportSettings, CONFIG_FILE_NAME, MIN_NAME_WIDTH};
pub use loader::ConfigLoader;
