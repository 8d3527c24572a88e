use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Invalid page selection: {0}")]
    InvalidSelection(String),

    #[error("PDF operation failed: {0}")]
    Operation(String),

    #[error("Archive error: {0}")]
    Archive(String),
}
