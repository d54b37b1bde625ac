//! Conversion pipeline components.
//!
//! - **discovery**: Find convertible files in the input folder
//! - **decode**: Load and decode source images
//! - **encode**: Encode RGB images as JPEG
//! - **converter**: One file from input folder to output folder
//! - **progress**: Shared completion counter and reporter seam
//! - **dispatcher**: Worker-pool fan-out over a batch

pub mod converter;
pub mod decode;
pub mod discovery;
pub mod dispatcher;
pub mod encode;
pub mod progress;

// Re-exports for convenient access
pub use converter::Converter;
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use dispatcher::{available_workers, validate_workers, Dispatcher};
pub use encode::JpegEncoder;
pub use progress::{ProgressCounter, ProgressReporter, SilentReporter};
