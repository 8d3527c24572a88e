//! Error types for the doctool API.
//!
//! Every handler failure funnels into [`ApiError`], which maps the taxonomy
//! onto status codes: 400 for input validation, 413 for oversized bodies,
//! 500 for codec-layer failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use doctool_image::ImageOpError;
use doctool_pdf::PdfError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("File too large. Maximum size is {0} bytes.")]
    PayloadTooLarge(usize),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("Image error: {0}")]
    Image(#[from] ImageOpError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            // Selector problems are the caller's input, not a codec failure.
            ApiError::Pdf(PdfError::InvalidSelection(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Pdf(e) => {
                tracing::error!("PDF processing failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Image(e) => {
                tracing::error!("Image processing failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
