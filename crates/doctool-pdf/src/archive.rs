//! ZIP packaging for split-all output.

use crate::error::PdfError;
use std::io::{Cursor, Write};

/// Bundle single-page documents into a deflated ZIP archive with entries
/// named `page_1.pdf`, `page_2.pdf`, ... in input order.
pub fn bundle_pages(pages: &[Vec<u8>]) -> Result<Vec<u8>, PdfError> {
    let mut buffer = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options = zip::write::FileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for (i, page) in pages.iter().enumerate() {
            zip.start_file(format!("page_{}.pdf", i + 1), options)
                .map_err(|e| PdfError::Archive(e.to_string()))?;
            zip.write_all(page)
                .map_err(|e| PdfError::Archive(e.to_string()))?;
        }

        zip.finish().map_err(|e| PdfError::Archive(e.to_string()))?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_bundle_names_entries_by_page_number() {
        let pages = vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()];
        let bytes = bundle_pages(&pages).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);

        for (i, expected) in pages.iter().enumerate() {
            let mut entry = archive.by_name(&format!("page_{}.pdf", i + 1)).unwrap();
            let mut contents = Vec::new();
            entry.read_to_end(&mut contents).unwrap();
            assert_eq!(&contents, expected);
        }
    }

    #[test]
    fn test_bundle_empty_input_yields_empty_archive() {
        let bytes = bundle_pages(&[]).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
