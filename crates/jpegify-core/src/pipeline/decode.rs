//! Image decoding with content-based format detection.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// Decodes source images from disk.
///
/// Decoding is synchronous; the dispatcher runs it on a blocking worker.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDecoder;

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageDecoder {
    /// Read and decode the file at `path`.
    pub fn decode(&self, path: &Path) -> ConvertResult<DecodedImage> {
        let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.decode_bytes(bytes, path)
    }

    /// Decode an image from an in-memory byte buffer.
    ///
    /// The format is detected from the content first and only falls back to
    /// the extension when the signature is unknown.
    pub fn decode_bytes(&self, bytes: Vec<u8>, path: &Path) -> ConvertResult<DecodedImage> {
        let mut reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ConvertError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;

        let format = match reader.format() {
            Some(f) => f,
            None => ImageFormat::from_path(path).map_err(|_| ConvertError::Decode {
                path: path.to_path_buf(),
                message: format!(
                    "Unsupported format: {}",
                    path.extension()
                        .and_then(|e| e.to_str())
                        .unwrap_or("unknown")
                ),
            })?,
        };

        reader.set_format(format);
        let image = reader.decode().map_err(|e| ConvertError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Avif => "avif".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn webp_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([10, 200, 30, 128]),
        ));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::WebP).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_format_to_string() {
        assert_eq!(format_to_string(ImageFormat::WebP), "webp");
        assert_eq!(format_to_string(ImageFormat::Avif), "avif");
        assert_eq!(format_to_string(ImageFormat::Jpeg), "jpeg");
    }

    #[test]
    fn test_decode_webp_bytes() {
        let decoded = ImageDecoder
            .decode_bytes(webp_bytes(12, 7), Path::new("x.webp"))
            .unwrap();
        assert_eq!(decoded.format, ImageFormat::WebP);
        assert_eq!((decoded.width, decoded.height), (12, 7));
    }

    #[test]
    fn test_format_detected_by_content() {
        // WebP content behind an .avif name still decodes as WebP
        let decoded = ImageDecoder
            .decode_bytes(webp_bytes(4, 4), Path::new("misnamed.avif"))
            .unwrap();
        assert_eq!(decoded.format, ImageFormat::WebP);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result =
            ImageDecoder.decode_bytes(b"definitely not pixels".to_vec(), Path::new("bad.webp"));
        assert!(matches!(result, Err(ConvertError::Decode { .. })));
    }

    #[test]
    fn test_decode_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImageDecoder.decode(&dir.path().join("gone.webp"));
        assert!(matches!(result, Err(ConvertError::Read { .. })));
    }
}
