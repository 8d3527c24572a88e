//! Page tree plumbing shared by merge and split.

use crate::error::PdfError;
use lopdf::{Document, Object, ObjectId};

/// Resolve the document's root Pages node via the trailer and catalog.
pub(crate) fn pages_root_id(doc: &Document) -> Result<ObjectId, PdfError> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .map_err(|_| PdfError::Operation("no Root in trailer".into()))?
        .as_reference()
        .map_err(|_| PdfError::Operation("Root is not a reference".into()))?;

    let catalog = doc
        .objects
        .get(&catalog_id)
        .ok_or_else(|| PdfError::Operation("catalog not found".into()))?
        .as_dict()
        .map_err(|_| PdfError::Operation("invalid catalog".into()))?;

    catalog
        .get(b"Pages")
        .map_err(|_| PdfError::Operation("no Pages in catalog".into()))?
        .as_reference()
        .map_err(|_| PdfError::Operation("Pages is not a reference".into()))
}

/// Rewrite the Kids array and Count of the root Pages node.
pub(crate) fn set_page_list(
    doc: &mut Document,
    pages_id: ObjectId,
    page_refs: &[ObjectId],
) -> Result<(), PdfError> {
    match doc.objects.get_mut(&pages_id) {
        Some(Object::Dictionary(pages_dict)) => {
            let kids = page_refs
                .iter()
                .map(|&id| Object::Reference(id))
                .collect::<Vec<_>>();
            pages_dict.set("Kids", Object::Array(kids));
            pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
            Ok(())
        }
        _ => Err(PdfError::Operation("invalid pages dictionary".into())),
    }
}
