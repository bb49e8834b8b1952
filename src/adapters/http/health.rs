//! Liveness endpoint reporting the dependency feature flags.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::state::AppState;

/// Health response with the two configured-dependency flags.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub gemini_enabled: bool,
    pub mongodb_enabled: bool,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Clarity backend running",
        gemini_enabled: state.gemini_enabled(),
        mongodb_enabled: state.mongodb_enabled(),
    })
}

/// Creates the health router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes_flags() {
        let response = HealthResponse {
            status: "healthy",
            message: "Clarity backend running",
            gemini_enabled: true,
            mongodb_enabled: false,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["gemini_enabled"], true);
        assert_eq!(json["mongodb_enabled"], false);
    }
}
