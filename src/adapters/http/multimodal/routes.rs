//! HTTP routes for multimodal endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{analyze_image, ocr_translate};

/// Creates the multimodal router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analyze-image", post(analyze_image))
        .route("/ocr-translate", post(ocr_translate))
}
