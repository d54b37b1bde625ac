//! Configuration management for jpegify.
//!
//! Configuration is loaded from the platform config directory with defaults
//! for every field, so running without a config file behaves like the
//! classic "drop images into `input/`, collect them from `output/`" tool.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for jpegify.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input/output folder locations
    pub paths: PathsConfig,

    /// Processing settings
    pub processing: ProcessingConfig,

    /// JPEG output settings
    pub output: OutputConfig,

    /// Console interaction settings
    pub prompt: PromptConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.jpegify.jpegify/config.toml
    /// - Linux: ~/.config/jpegify/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\jpegify\jpegify\config\config.toml
    ///
    /// Falls back to ~/.jpegify/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "jpegify", "jpegify")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".jpegify").join("config.toml")
            })
    }

    /// Directory holding the running executable.
    ///
    /// Falls back to the current working directory when the executable path
    /// cannot be determined.
    pub fn base_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolved input directory (with ~ expansion, relative to `base`).
    pub fn input_dir(&self, base: &Path) -> PathBuf {
        resolve_dir(base, &self.paths.input_dir)
    }

    /// Resolved output directory (with ~ expansion, relative to `base`).
    pub fn output_dir(&self, base: &Path) -> PathBuf {
        resolve_dir(base, &self.paths.output_dir)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Expand `~` and anchor relative paths at `base`.
pub fn resolve_dir(base: &Path, dir: &Path) -> PathBuf {
    let raw = dir.to_string_lossy();
    let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
