//! doctool API — HTTP endpoints for PDF merge/split, image-to-PDF
//! conversion and image compression.
//!
//! Exposed as a library so integration tests can drive the router directly.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod state;
pub mod upload;

pub use config::Config;
use state::AppState;

/// Build the application router for the given configuration.
pub fn app(config: Config) -> Router {
    let max_upload_bytes = config.max_upload_bytes;
    let state = Arc::new(AppState { config });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/merge", post(handlers::merge_pdfs))
        .route("/split", post(handlers::split_pdf))
        .route("/images-to-pdf", post(handlers::images_to_pdf))
        .route("/image-compress/process", post(handlers::compress_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
