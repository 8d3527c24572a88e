//! PDF merge.
//!
//! Appends the pages of several documents into one, in the order given.
//! Object IDs of each appended document are offset past the destination's
//! current maximum so references never collide, then the destination page
//! tree is rebuilt with the combined page list.

use crate::error::PdfError;
use crate::page_tree;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Merge PDF byte buffers into a single document, preserving input order
/// and each document's internal page order.
pub fn merge_documents(documents: Vec<Vec<u8>>) -> Result<Vec<u8>, PdfError> {
    if documents.is_empty() {
        return Err(PdfError::Operation("no documents to merge".into()));
    }

    let mut loaded = Vec::with_capacity(documents.len());
    for (i, bytes) in documents.iter().enumerate() {
        let doc = Document::load_mem(bytes)
            .map_err(|e| PdfError::Parse(format!("failed to load document {}: {}", i + 1, e)))?;
        loaded.push(doc);
    }

    let merged = merge_loaded(loaded)?;
    crate::save_document(merged)
}

/// Merge already-parsed documents. The first document becomes the
/// destination; the others are appended into it.
pub(crate) fn merge_loaded(mut documents: Vec<Document>) -> Result<Document, PdfError> {
    if documents.is_empty() {
        return Err(PdfError::Operation("no documents to merge".into()));
    }
    if documents.len() == 1 {
        return Ok(documents.pop().unwrap());
    }

    let mut dest = documents.remove(0);
    let mut page_refs = ordered_page_refs(&dest);
    let pages_root = page_tree::pages_root_id(&dest)?;

    for source in documents {
        let source_pages = ordered_page_refs(&source);
        let offset = dest.max_id;

        // Bring every source object over with shifted IDs.
        let mut imported = BTreeMap::new();
        for (old_id, object) in source.objects.into_iter() {
            let new_id = (old_id.0 + offset, old_id.1);
            imported.insert(new_id, shift_references(object, offset));
        }
        dest.objects.extend(imported);

        for old_ref in source_pages {
            let new_ref = (old_ref.0 + offset, old_ref.1);
            // Reparent onto the destination page tree so the appended page
            // does not point at its now-orphaned source Pages node.
            if let Some(Object::Dictionary(page_dict)) = dest.objects.get_mut(&new_ref) {
                page_dict.set("Parent", Object::Reference(pages_root));
            }
            page_refs.push(new_ref);
        }

        dest.max_id = (source.max_id + offset).max(dest.max_id);
    }

    page_tree::set_page_list(&mut dest, pages_root, &page_refs)?;
    dest.prune_objects();
    dest.compress();

    Ok(dest)
}

/// Page object references in document page order (1, 2, ...).
fn ordered_page_refs(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// Recursively shift every object reference by `offset`.
fn shift_references(obj: Object, offset: u32) -> Object {
    match obj {
        Object::Reference(id) => Object::Reference((id.0 + offset, id.1)),
        Object::Array(items) => Object::Array(
            items
                .into_iter()
                .map(|o| shift_references(o, offset))
                .collect(),
        ),
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}
