//! HTTP routes for analytics endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_insights, get_stats, log_session};

/// Creates the analytics router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(log_session))
        .route("/insights/:user_id", get(get_insights))
        .route("/stats/:user_id", get(get_stats))
}
