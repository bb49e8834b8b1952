//! HTTP routes for document endpoints.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{process_document, proofread, summarize, upload};

/// Router-level body cap for multipart uploads. The storage adapter enforces
/// the configured per-file limit.
const UPLOAD_BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

/// Creates the documents router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload))
        .route("/summarize", post(summarize))
        .route("/proofread", post(proofread))
        .route("/process-document", post(process_document))
        // Earlier extension builds call the PDF-era route name.
        .route("/process-pdf", post(process_document))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT_BYTES))
}
