//! JPEG encoding.

use image::codecs::jpeg::JpegEncoder as ImageJpegEncoder;
use image::DynamicImage;
use std::io::Cursor;

use crate::config::OutputConfig;

/// Encodes decoded images as baseline JPEG.
pub struct JpegEncoder {
    config: OutputConfig,
}

impl JpegEncoder {
    /// Create a new encoder with the given output settings.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Encode `image` to JPEG bytes.
    ///
    /// The image is flattened to 8-bit RGB first; any alpha channel is dropped.
    pub fn encode(&self, image: &DynamicImage) -> image::ImageResult<Vec<u8>> {
        let rgb = image.to_rgb8();
        let mut buffer = Cursor::new(Vec::new());
        let encoder = ImageJpegEncoder::new_with_quality(&mut buffer, self.config.quality);
        rgb.write_with_encoder(encoder)?;
        Ok(buffer.into_inner())
    }
}
