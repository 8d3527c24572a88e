//! PDF page extraction.
//!
//! Extraction works by reduction: for each requested page the source
//! document is cloned and every other page deleted, yielding a standalone
//! single-page document with only the resources that page needs. Multi-page
//! requests assemble those single-page documents in the requested order,
//! which is what lets a selection repeat a page or list pages out of
//! document order.

use crate::error::PdfError;
use crate::merge::merge_loaded;
use lopdf::Document;

/// Extract the given 1-based pages, in the given order (duplicates allowed),
/// into one output document.
pub fn extract_pages(bytes: &[u8], pages: &[u32]) -> Result<Vec<u8>, PdfError> {
    if pages.is_empty() {
        return Err(PdfError::InvalidSelection("no pages selected".into()));
    }

    let source = load(bytes)?;
    let page_count = source.get_pages().len() as u32;

    for &page in pages {
        if page < 1 || page > page_count {
            return Err(PdfError::InvalidSelection(format!(
                "page {} does not exist (document has {} pages)",
                page, page_count
            )));
        }
    }

    let singles: Vec<Document> = pages
        .iter()
        .map(|&page| reduce_to_page(&source, page, page_count))
        .collect();

    let assembled = merge_loaded(singles)?;
    crate::save_document(assembled)
}

/// Split a document into one single-page document per source page,
/// in source page order.
pub fn split_into_pages(bytes: &[u8]) -> Result<Vec<Vec<u8>>, PdfError> {
    let source = load(bytes)?;
    let page_count = source.get_pages().len() as u32;

    (1..=page_count)
        .map(|page| crate::save_document(reduce_to_page(&source, page, page_count)))
        .collect()
}

fn load(bytes: &[u8]) -> Result<Document, PdfError> {
    Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))
}

/// Clone the source and delete everything but `page`.
fn reduce_to_page(source: &Document, page: u32, page_count: u32) -> Document {
    let mut doc = source.clone();

    // Delete in reverse so earlier deletions do not shift the numbering
    // of pages still waiting to be deleted.
    for victim in (1..=page_count).rev() {
        if victim != page {
            doc.delete_pages(&[victim]);
        }
    }

    doc.prune_objects();
    doc.compress();
    doc
}
