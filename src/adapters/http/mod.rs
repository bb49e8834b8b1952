//! HTTP adapters - the extension-facing REST API.
//!
//! Each feature area has its own module with DTOs, handlers and routes, all
//! sharing the same [`AppState`].

pub mod accessibility;
pub mod analytics;
pub mod auth;
pub mod documents;
pub mod error;
pub mod health;
pub mod hybrid;
pub mod multimodal;
pub mod proxy;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the full API router.
///
/// CORS is permissive: requests come from extension contexts, not a fixed
/// web origin.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .nest("/api/auth", auth::routes())
        .nest("/api/multimodal", multimodal::routes())
        .nest("/api/hybrid", hybrid::routes())
        .nest("/api/proxy", proxy::routes())
        .nest("/api/accessibility", accessibility::routes())
        .nest("/api/analytics", analytics::routes())
        .merge(documents::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
