//! Single-file conversion: decode → RGB → JPEG → write.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::config::OutputConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::types::ConversionOutcome;

use super::decode::{format_to_string, ImageDecoder};
use super::discovery::output_name_for;
use super::encode::JpegEncoder;

/// Converts files from an input folder into JPEGs in an output folder.
pub struct Converter {
    input_dir: PathBuf,
    output_dir: PathBuf,
    decoder: ImageDecoder,
    encoder: JpegEncoder,
}

impl Converter {
    /// Create a converter reading from `input_dir` and writing to `output_dir`.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, output: OutputConfig) -> Self {
        Self {
            input_dir,
            output_dir,
            decoder: ImageDecoder,
            encoder: JpegEncoder::new(output),
        }
    }

    /// Output path for an input file name.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(output_name_for(file_name))
    }

    /// Convert one file, returning the path of the written JPEG.
    ///
    /// The JPEG is encoded fully in memory, written to a temporary file in the
    /// output folder and renamed over the destination. A failed conversion
    /// leaves no partial file, and two inputs racing for the same output
    /// leave one complete JPEG.
    pub fn convert(&self, file_name: &str) -> ConvertResult<PathBuf> {
        let input_path = self.input_dir.join(file_name);
        let output_path = self.output_path(file_name);

        let decoded = self.decoder.decode(&input_path)?;
        tracing::trace!(
            "Decoded {} ({}x{} {})",
            file_name,
            decoded.width,
            decoded.height,
            format_to_string(decoded.format)
        );

        let bytes = self
            .encoder
            .encode(&decoded.image)
            .map_err(|e| ConvertError::Encode {
                path: input_path.clone(),
                message: e.to_string(),
            })?;

        self.write_atomic(&output_path, &bytes)
            .map_err(|source| ConvertError::Write {
                path: output_path.clone(),
                source,
            })?;

        Ok(output_path)
    }

    fn write_atomic(&self, output_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.output_dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(output_path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Convert one file and reduce the result to success or failure.
    ///
    /// Error detail only reaches the debug log.
    pub fn convert_outcome(&self, file_name: &str) -> ConversionOutcome {
        match self.convert(file_name) {
            Ok(output_path) => {
                tracing::debug!("Converted {} -> {:?}", file_name, output_path);
                ConversionOutcome {
                    file_name: file_name.to_string(),
                    output_path,
                    success: true,
                }
            }
            Err(e) => {
                tracing::debug!("Failed to convert {}: {}", file_name, e);
                self.failed(file_name)
            }
        }
    }

    /// Failure outcome for `file_name`.
    pub fn failed(&self, file_name: &str) -> ConversionOutcome {
        ConversionOutcome {
            file_name: file_name.to_string(),
            output_path: self.output_path(file_name),
            success: false,
        }
    }

    /// Folder inputs are read from.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Folder JPEGs are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};

    fn setup() -> (tempfile::TempDir, Converter) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        let output = dir.path().join("output");
        std::fs::create_dir_all(&input).unwrap();
        std::fs::create_dir_all(&output).unwrap();
        let converter = Converter::new(input, output, OutputConfig::default());
        (dir, converter)
    }

    fn write_webp(dir: &Path, name: &str) {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            20,
            10,
            image::Rgba([0, 128, 255, 200]),
        ));
        img.save_with_format(dir.join(name), ImageFormat::WebP)
            .unwrap();
    }

    #[test]
    fn test_convert_writes_jpeg_with_same_basename() {
        let (_dir, converter) = setup();
        write_webp(converter.input_dir(), "sunset.webp");

        let out = converter.convert("sunset.webp").unwrap();
        assert_eq!(out, converter.output_dir().join("sunset.jpg"));

        let written = image::open(&out).unwrap();
        assert_eq!(written.dimensions(), (20, 10));
        assert_eq!(
            image::guess_format(&std::fs::read(&out).unwrap()).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_corrupt_input_is_failure_without_output() {
        let (_dir, converter) = setup();
        std::fs::write(converter.input_dir().join("broken.webp"), b"RIFF....WEBPjunk").unwrap();

        let outcome = converter.convert_outcome("broken.webp");
        assert!(!outcome.success);
        assert!(!outcome.output_path.exists());
    }

    #[test]
    fn test_missing_input_is_failure() {
        let (_dir, converter) = setup();
        let result = converter.convert("ghost.webp");
        assert!(matches!(result, Err(ConvertError::Read { .. })));
    }

    #[test]
    fn test_unwritable_output_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        std::fs::create_dir_all(&input).unwrap();
        // Output folder never created
        let converter = Converter::new(
            input,
            dir.path().join("missing").join("output"),
            OutputConfig::default(),
        );
        write_webp(converter.input_dir(), "a.webp");

        let result = converter.convert("a.webp");
        assert!(matches!(result, Err(ConvertError::Write { .. })));
    }

    #[test]
    fn test_convert_leaves_only_the_jpeg() {
        let (_dir, converter) = setup();
        write_webp(converter.input_dir(), "a.webp");
        std::fs::write(converter.input_dir().join("b.webp"), b"junk").unwrap();

        converter.convert("a.webp").unwrap();
        assert!(converter.convert("b.webp").is_err());

        let entries: Vec<String> = std::fs::read_dir(converter.output_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["a.jpg"]);
    }

    #[test]
    fn test_convert_replaces_existing_output() {
        let (_dir, converter) = setup();
        write_webp(converter.input_dir(), "a.webp");
        std::fs::write(converter.output_dir().join("a.jpg"), b"stale").unwrap();

        let out = converter.convert("a.webp").unwrap();
        assert_eq!(image::open(&out).unwrap().dimensions(), (20, 10));
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let (_dir, converter) = setup();
        assert_eq!(
            converter.output_path("trip.day1.avif"),
            converter.output_dir().join("trip.day1.jpg")
        );
    }
}
