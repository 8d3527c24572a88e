//! File-download responses.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

/// Wrap a byte buffer as a download attachment.
pub fn attachment(bytes: Vec<u8>, mime: &str, filename: &str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Short random token appended to generated filenames so repeated downloads
/// do not collide in the client's cache.
pub fn download_token() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_short_hex() {
        let token = download_token();
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_attachment_sets_disposition() {
        let response = attachment(vec![1, 2, 3], "application/pdf", "out.pdf");
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"out.pdf\"");
    }
}
