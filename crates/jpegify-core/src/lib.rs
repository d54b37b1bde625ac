//! jpegify core - batch conversion of WebP/AVIF images to JPEG.
//!
//! # Architecture
//!
//! ```text
//! input/ → Discover (by extension) → Dispatch (N workers)
//!        → Decode → RGB → JPEG → output/<basename>.jpg → Summary
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use jpegify_core::{Config, Jpegify, SilentReporter};
//!
//! #[tokio::main]
//! async fn main() -> jpegify_core::Result<()> {
//!     let config = Config::load()?;
//!     let jpegify = Jpegify::new(config, &Config::base_dir());
//!
//!     let files = jpegify.prepare()?;
//!     let (_, summary) = jpegify.convert_all(&files, 4, SilentReporter).await;
//!     println!("{} converted, {} failed", summary.succeeded, summary.failed);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

use std::path::{Path, PathBuf};

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, ConvertError, ConvertResult, JpegifyError, Result};
pub use pipeline::{
    available_workers, validate_workers, Converter, DiscoveredFile, Dispatcher, FileDiscovery,
    ProgressReporter, SilentReporter,
};
pub use types::{ConversionOutcome, ConversionSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Batch converter bound to one input and one output folder.
pub struct Jpegify {
    config: Config,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl Jpegify {
    /// Resolve the configured folders against `base_dir`.
    pub fn new(config: Config, base_dir: &Path) -> Self {
        let input_dir = config.input_dir(base_dir);
        let output_dir = config.output_dir(base_dir);
        Self::with_dirs(config, input_dir, output_dir)
    }

    /// Use explicit folders instead of the configured ones.
    pub fn with_dirs(config: Config, input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            config,
            input_dir,
            output_dir,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output folder and list the files to convert.
    ///
    /// Fails when the output folder cannot be created or the input folder is
    /// missing. An input folder with no matching files yields an empty list.
    pub fn prepare(&self) -> Result<Vec<DiscoveredFile>> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| JpegifyError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        if !self.input_dir.is_dir() {
            return Err(JpegifyError::InputDirMissing(self.input_dir.clone()));
        }

        let discovery = FileDiscovery::new(self.config.processing.clone());
        let files = discovery.discover(&self.input_dir);
        tracing::debug!("Found {} file(s) in {:?}", files.len(), self.input_dir);
        Ok(files)
    }

    /// Convert `files` using `workers` parallel workers.
    pub async fn convert_all<R>(
        &self,
        files: &[DiscoveredFile],
        workers: usize,
        reporter: R,
    ) -> (Vec<ConversionOutcome>, ConversionSummary)
    where
        R: ProgressReporter + 'static,
    {
        let converter = Converter::new(
            self.input_dir.clone(),
            self.output_dir.clone(),
            self.config.output.clone(),
        );
        Dispatcher::new(converter, workers).run(files, reporter).await
    }
}
