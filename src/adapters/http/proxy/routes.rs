//! HTTP routes for proxy endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{log_proofread, log_summarize, log_translate};

/// Creates the proxy router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/proofread", post(log_proofread))
        .route("/summarize", post(log_summarize))
        .route("/translate", post(log_translate))
}
