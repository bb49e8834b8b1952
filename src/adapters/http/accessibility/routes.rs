//! HTTP routes for accessibility profile endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_profile, save_profile};

/// Creates the accessibility router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile/save", post(save_profile))
        .route("/profile/get/:user_id", get(get_profile))
}
