use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageOpError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Image operation failed: {0}")]
    Operation(String),
}
