//! HTTP routes for auth endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{login, register};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
