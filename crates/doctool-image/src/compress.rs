//! Image re-encoding for the compress endpoint.

use crate::error::ImageOpError;
use crate::flatten::flatten_to_rgb;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use std::io::Cursor;

/// Target codec for a compression request, chosen from the upload's file
/// extension. Anything that is not a PNG goes through JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressedFormat {
    Jpeg,
    Png,
}

impl CompressedFormat {
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("png") => CompressedFormat::Png,
            _ => CompressedFormat::Jpeg,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CompressedFormat::Jpeg => "jpg",
            CompressedFormat::Png => "png",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            CompressedFormat::Jpeg => "image/jpeg",
            CompressedFormat::Png => "image/png",
        }
    }
}

/// Re-encode an image.
///
/// JPEG output is flattened to RGB and encoded at the given quality, clamped
/// to 1..=100 rather than handing an out-of-range value to the encoder. PNG
/// output is lossless: pixels pass through untouched at the strongest
/// compression level and the quality parameter is ignored.
pub fn compress_image(
    bytes: &[u8],
    format: CompressedFormat,
    quality: u8,
) -> Result<Vec<u8>, ImageOpError> {
    let img = image::load_from_memory(bytes).map_err(|e| ImageOpError::Decode(e.to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    match format {
        CompressedFormat::Jpeg => {
            let quality = quality.clamp(1, 100);
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            flatten_to_rgb(img)
                .write_with_encoder(encoder)
                .map_err(|e| ImageOpError::Encode(format!("JPEG encode failed: {}", e)))?;
        }
        CompressedFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
            img.write_with_encoder(encoder)
                .map_err(|e| ImageOpError::Encode(format!("PNG encode failed: {}", e)))?;
        }
    }

    Ok(buf.into_inner())
}
