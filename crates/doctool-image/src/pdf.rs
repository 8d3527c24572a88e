//! Image-to-PDF assembly using `printpdf` 0.8.
//!
//! printpdf 0.8 is data-oriented: pages are `PdfPage` structs holding
//! `Vec<Op>` operation lists, serialised via `PdfDocument::save()`. Each
//! input image becomes one page sized to the image at 72 DPI, so the image
//! fills the page edge to edge.

use crate::error::ImageOpError;
use image::RgbImage;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// Assemble RGB images into a multi-page PDF, one page per image in input
/// order.
pub fn images_to_pdf(images: Vec<RgbImage>) -> Result<Vec<u8>, ImageOpError> {
    if images.is_empty() {
        return Err(ImageOpError::Operation("no images to convert".into()));
    }

    let mut doc = PdfDocument::new("Converted Images");
    let mut pages = Vec::with_capacity(images.len());

    for img in images {
        let (width_px, height_px) = (img.width() as usize, img.height() as usize);

        let raw = RawImage {
            pixels: RawImageData::U8(img.into_raw()),
            width: width_px,
            height: height_px,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        // Page dimensions match the image at 72 DPI (1 px = 1 pt).
        let page_w = Mm(width_px as f32 * MM_PER_INCH / POINTS_PER_INCH);
        let page_h = Mm(height_px as f32 * MM_PER_INCH / POINTS_PER_INCH);

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: None,
                scale_y: None,
                dpi: Some(POINTS_PER_INCH),
                rotate: None,
            },
        }];

        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}
