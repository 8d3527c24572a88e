//! PDF page operations on in-memory byte buffers, built on lopdf.
//!
//! - [`merge_documents`]: append several documents' pages into one
//! - [`extract_pages`] / [`split_into_pages`]: pull pages out of a document
//! - [`SplitSelection`]: parse and resolve page/range selectors
//! - [`bundle_pages`]: package single-page documents as a ZIP archive

pub mod archive;
pub mod error;
pub mod merge;
mod page_tree;
pub mod selector;
pub mod split;

pub use archive::bundle_pages;
pub use error::PdfError;
pub use merge::merge_documents;
pub use selector::{SelectorPolicy, SplitSelection};
pub use split::{extract_pages, split_into_pages};

/// Parse PDF bytes and return the page count.
pub fn page_count(bytes: &[u8]) -> Result<u32, PdfError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}

/// Serialize a document to bytes.
pub(crate) fn save_document(mut doc: lopdf::Document) -> Result<Vec<u8>, PdfError> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PdfError::Operation(format!("failed to save PDF: {}", e)))?;
    Ok(buffer)
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use lopdf::{content::Content, content::Operation, Dictionary, Document, Object, Stream};

    /// Build a minimal valid PDF with `num_pages` pages, each carrying a
    /// short identifying content stream.
    pub fn sample_pdf(num_pages: u32) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut page_ids = Vec::new();
        for i in 0..num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new(
                        "Tf",
                        vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                    ),
                    Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            format!("Page {}", i + 1).into_bytes(),
                            lopdf::StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(num_pages as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::sample_pdf;

    #[test]
    fn test_page_count() {
        let pdf = sample_pdf(7);
        assert_eq!(page_count(&pdf).unwrap(), 7);
    }

    #[test]
    fn test_page_count_rejects_garbage() {
        assert!(matches!(page_count(b"%%nope"), Err(PdfError::Parse(_))));
    }
}
