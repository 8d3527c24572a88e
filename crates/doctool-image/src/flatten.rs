//! Color-model normalisation.
//!
//! PDF page content and JPEG output both want plain 3-channel RGB. Decoded
//! uploads can arrive as RGBA, gray-alpha or 16-bit variants (paletted PNGs
//! decode to RGB/RGBA directly), so anything carrying an alpha channel is
//! composited onto an opaque white background before conversion.

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

/// Normalise a decoded image to 8-bit RGB, flattening transparency onto
/// white.
pub fn flatten_to_rgb(img: DynamicImage) -> RgbImage {
    if img.color().has_alpha() {
        composite_on_white(&img)
    } else {
        img.to_rgb8()
    }
}

fn composite_on_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();

    ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
        let image::Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let blend = |c: u8| -> u8 {
            // Source-over onto white: c*a + 255*(1-a), in u16 to avoid
            // overflow.
            ((c as u16 * a as u16 + 255 * (255 - a as u16)) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}
