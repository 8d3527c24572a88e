//! Image operations for the upload endpoints: color-model flattening,
//! image-to-PDF assembly and JPEG/PNG re-encoding.

pub mod compress;
pub mod error;
pub mod flatten;
pub mod pdf;

pub use compress::{compress_image, CompressedFormat};
pub use error::ImageOpError;
pub use flatten::flatten_to_rgb;
pub use pdf::images_to_pdf;

/// Decode an uploaded image and normalise it to 8-bit RGB.
pub fn decode_to_rgb(bytes: &[u8]) -> Result<image::RgbImage, ImageOpError> {
    let img = image::load_from_memory(bytes).map_err(|e| ImageOpError::Decode(e.to_string()))?;
    Ok(flatten_to_rgb(img))
}
