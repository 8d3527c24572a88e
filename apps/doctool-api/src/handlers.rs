//! HTTP handlers, one per document operation.
//!
//! Each handler follows the same shape: drain the multipart form, validate,
//! hand the bytes to the codec crates, return the result as a download
//! attachment. All failures convert to a JSON error via `ApiError`.

use axum::{
    extract::{Multipart, State},
    response::{Html, Response},
};
use std::path::Path;
use std::sync::Arc;

use doctool_image::CompressedFormat;
use doctool_pdf::SplitSelection;

use crate::error::ApiError;
use crate::response::{attachment, download_token};
use crate::state::AppState;
use crate::upload::{UploadForm, UploadedFile};

const DEFAULT_JPEG_QUALITY: i64 = 60;

/// Landing page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// `POST /merge` — combine uploaded PDFs into one, in upload order.
pub async fn merge_pdfs(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = read_form(&state, multipart).await?;
    let files = form.files_named("files[]");

    if files.len() < 2 {
        return Err(ApiError::Validation(
            "At least 2 PDF files are required for merging".into(),
        ));
    }
    for file in &files {
        require_pdf(file)?;
    }

    let documents = files
        .iter()
        .map(|f| f.read())
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(count = documents.len(), "merging PDFs");
    let merged = doctool_pdf::merge_documents(documents)?;

    let filename = format!("merged_pdf_{}.pdf", download_token());
    Ok(attachment(merged, "application/pdf", &filename))
}

/// `POST /split` — extract pages from one PDF.
///
/// `mode=all` returns every page as its own document inside a ZIP archive;
/// `mode=pages` and `mode=ranges` return a single PDF assembled from the
/// selector, in listed order.
pub async fn split_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = read_form(&state, multipart).await?;
    let file = form
        .file_named("file")
        .ok_or_else(|| ApiError::Validation("No file uploaded".into()))?;
    require_pdf(file)?;

    let mode = form.value("mode").unwrap_or("all");
    let selection = match mode {
        "all" => SplitSelection::All,
        "pages" => SplitSelection::Pages(form.value("pages").unwrap_or_default().to_string()),
        "ranges" => SplitSelection::Ranges(form.value("ranges").unwrap_or_default().to_string()),
        other => {
            return Err(ApiError::Validation(format!("Invalid mode: {:?}", other)));
        }
    };

    let bytes = file.read()?;
    tracing::info!(mode, "splitting PDF");

    match selection {
        SplitSelection::All => {
            let pages = doctool_pdf::split_into_pages(&bytes)?;
            let archive = doctool_pdf::bundle_pages(&pages)?;
            let filename = format!("split_pages_{}.zip", download_token());
            Ok(attachment(archive, "application/zip", &filename))
        }
        selection => {
            let total = doctool_pdf::page_count(&bytes)?;
            let pages = selection.resolve(total, state.config.selector_policy)?;
            let output = doctool_pdf::extract_pages(&bytes, &pages)?;

            let prefix = match selection {
                SplitSelection::Ranges(_) => "extracted_ranges",
                _ => "extracted_pages",
            };
            let filename = format!("{}_{}.pdf", prefix, download_token());
            Ok(attachment(output, "application/pdf", &filename))
        }
    }
}

/// `POST /images-to-pdf` — assemble uploaded images into a multi-page PDF,
/// one page per image in upload order. Transparency is flattened onto white.
pub async fn images_to_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = read_form(&state, multipart).await?;
    let files = form.files_named("images[]");

    if files.is_empty() {
        return Err(ApiError::Validation("No images uploaded".into()));
    }

    let mut images = Vec::with_capacity(files.len());
    for file in &files {
        let bytes = file.read()?;
        images.push(doctool_image::decode_to_rgb(&bytes)?);
    }

    tracing::info!(count = images.len(), "converting images to PDF");
    let pdf = doctool_image::images_to_pdf(images)?;

    let filename = format!("images_to_pdf_{}.pdf", download_token());
    Ok(attachment(pdf, "application/pdf", &filename))
}

/// `POST /image-compress/process` — re-encode one image. PNG sources are
/// re-encoded losslessly; everything else becomes a JPEG at the requested
/// quality (default 60, clamped to 1-100).
pub async fn compress_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = read_form(&state, multipart).await?;
    let file = form
        .file_named("image")
        .ok_or_else(|| ApiError::Validation("No image uploaded".into()))?;

    let quality: i64 = match form.value("quality") {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ApiError::Validation(format!("Invalid quality value: {:?}", raw)))?,
        None => DEFAULT_JPEG_QUALITY,
    };
    let quality = quality.clamp(1, 100) as u8;

    let safe_name = sanitize_filename::sanitize(&file.name);
    let path = Path::new(&safe_name);
    let format = CompressedFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    let base = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => stem,
        _ => "image",
    };

    let bytes = file.read()?;
    tracing::info!(?format, quality, "compressing image");
    let output = doctool_image::compress_image(&bytes, format, quality)?;

    let filename = format!("{}_compressed.{}", base, format.extension());
    Ok(attachment(output, format.mime_type(), &filename))
}

async fn read_form(state: &AppState, multipart: Multipart) -> Result<UploadForm, ApiError> {
    UploadForm::read(
        multipart,
        state.config.spool_mode,
        state.config.max_upload_bytes,
    )
    .await
}

fn require_pdf(file: &UploadedFile) -> Result<(), ApiError> {
    if file.has_extension("pdf") {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "{} is not a PDF file",
            file.name
        )))
    }
}
