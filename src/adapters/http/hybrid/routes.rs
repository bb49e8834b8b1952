//! HTTP routes for hybrid endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{hybrid_prompt, hybrid_simplify};

/// Creates the hybrid router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/prompt", post(hybrid_prompt))
        .route("/simplify", post(hybrid_simplify))
}
