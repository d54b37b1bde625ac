//! Error types for the jpegify conversion pipeline.
//!
//! Errors are organized by stage so a failed conversion can say where it
//! broke (read, decode, encode, write) even though the batch result only
//! records success or failure.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for jpegify operations.
#[derive(Error, Debug)]
pub enum JpegifyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input directory is missing or not a directory
    #[error("Input directory not found: {0}")]
    InputDirMissing(PathBuf),

    /// Output directory could not be created
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Worker count outside `1..=max`
    #[error("Worker count must be between 1 and {max}, got {requested}")]
    InvalidWorkers { requested: usize, max: usize },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Conversion errors for a single file, organized by stage.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source file could not be read
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// JPEG encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Output file could not be written
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Worker thread panicked before returning a result
    #[error("Worker failed for {path}: {message}")]
    Worker { path: PathBuf, message: String },
}

/// Convenience type alias for jpegify results.
pub type Result<T> = std::result::Result<T, JpegifyError>;

/// Convenience type alias for per-file conversion results.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
