//! Multipart intake and upload spooling.
//!
//! Uploaded bodies are held either in memory or in scratch temp files, a
//! strategy handlers never see past [`UploadedFile::read`]. Temp files are
//! removed when the request's form is dropped, on every exit path; removal
//! failures are swallowed.

use anyhow::Context;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::error::ApiError;

/// Where an upload's bytes live while the request is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoolMode {
    Memory,
    Disk,
}

/// One uploaded file: the form field it arrived under, its declared
/// filename, and its spooled body.
pub struct UploadedFile {
    pub field: String,
    pub name: String,
    body: Spool,
}

enum Spool {
    Memory(Bytes),
    // NamedTempFile deletes on drop; deletion errors never surface.
    Disk(NamedTempFile),
}

impl UploadedFile {
    fn spool(field: String, name: String, bytes: Bytes, mode: SpoolMode) -> Result<Self, ApiError> {
        let body = match mode {
            SpoolMode::Memory => Spool::Memory(bytes),
            SpoolMode::Disk => {
                let mut file = NamedTempFile::new().context("failed to create scratch file")?;
                file.write_all(&bytes).context("failed to spool upload")?;
                tracing::debug!(path = %file.path().display(), "upload spooled to disk");
                Spool::Disk(file)
            }
        };
        Ok(Self { field, name, body })
    }

    /// The upload's bytes, regardless of spool strategy.
    pub fn read(&self) -> Result<Vec<u8>, ApiError> {
        match &self.body {
            Spool::Memory(bytes) => Ok(bytes.to_vec()),
            Spool::Disk(file) => {
                std::fs::read(file.path()).context("failed to read spooled upload").map_err(Into::into)
            }
        }
    }

    /// Case-insensitive extension check against the declared filename.
    pub fn has_extension(&self, ext: &str) -> bool {
        self.name
            .rsplit_once('.')
            .is_some_and(|(_, e)| e.eq_ignore_ascii_case(ext))
    }
}

/// A parsed multipart form: uploaded files plus plain-text fields.
pub struct UploadForm {
    pub files: Vec<UploadedFile>,
    values: HashMap<String, String>,
}

impl UploadForm {
    /// Drain the whole multipart stream, spooling file parts and collecting
    /// text parts. Body-limit overruns surface as 413.
    pub async fn read(
        mut multipart: Multipart,
        mode: SpoolMode,
        limit: usize,
    ) -> Result<Self, ApiError> {
        let mut files = Vec::new();
        let mut values = HashMap::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| map_multipart_error(e, limit))?
        {
            let field_name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name() {
                let name = file_name.to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| map_multipart_error(e, limit))?;
                files.push(UploadedFile::spool(field_name, name, bytes, mode)?);
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| map_multipart_error(e, limit))?;
                values.insert(field_name, value);
            }
        }

        Ok(Self { files, values })
    }

    /// All files uploaded under the given form field, in upload order.
    pub fn files_named(&self, field: &str) -> Vec<&UploadedFile> {
        self.files.iter().filter(|f| f.field == field).collect()
    }

    /// The single file under the given field, if present.
    pub fn file_named(&self, field: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.field == field)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

fn map_multipart_error(err: MultipartError, limit: usize) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(limit)
    } else {
        ApiError::Validation(format!("malformed multipart request: {}", err.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(mode: SpoolMode) -> UploadedFile {
        UploadedFile::spool(
            "file".into(),
            "report.pdf".into(),
            Bytes::from_static(b"%PDF-fake"),
            mode,
        )
        .unwrap()
    }

    #[test]
    fn test_memory_spool_round_trips() {
        let file = upload(SpoolMode::Memory);
        assert_eq!(file.read().unwrap(), b"%PDF-fake");
    }

    #[test]
    fn test_disk_spool_round_trips_and_cleans_up() {
        let file = upload(SpoolMode::Disk);
        assert_eq!(file.read().unwrap(), b"%PDF-fake");

        let path = match &file.body {
            Spool::Disk(f) => f.path().to_path_buf(),
            _ => unreachable!(),
        };
        assert!(path.exists());
        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let file = UploadedFile::spool(
            "file".into(),
            "SCAN.PDF".into(),
            Bytes::new(),
            SpoolMode::Memory,
        )
        .unwrap();
        assert!(file.has_extension("pdf"));
        assert!(!file.has_extension("png"));
    }

    #[test]
    fn test_missing_extension_does_not_match() {
        let file =
            UploadedFile::spool("file".into(), "noext".into(), Bytes::new(), SpoolMode::Memory)
                .unwrap();
        assert!(!file.has_extension("pdf"));
    }
}
