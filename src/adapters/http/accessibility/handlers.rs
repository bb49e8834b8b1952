//! HTTP handlers for accessibility profile endpoints.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{ProfileResponse, SaveProfileRequest, SaveProfileResponse, SyncDisabledResponse};

/// POST /api/accessibility/profile/save
pub async fn save_profile(
    State(state): State<AppState>,
    Json(req): Json<SaveProfileRequest>,
) -> Result<Response, ApiError> {
    if !state.profile_sync {
        return Ok(Json(SyncDisabledResponse::new()).into_response());
    }

    let profiles = state
        .profiles
        .as_ref()
        .ok_or_else(ApiError::mongodb_disabled)?;

    profiles.upsert(&req.user_id, req.profile).await?;

    Ok(Json(SaveProfileResponse {
        success: true,
        message: "Profile saved",
    })
    .into_response())
}

/// GET /api/accessibility/profile/get/:user_id
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    if !state.profile_sync {
        return Ok(Json(SyncDisabledResponse::new()).into_response());
    }

    let profiles = state
        .profiles
        .as_ref()
        .ok_or_else(|| ApiError::not_found("MongoDB not configured"))?;

    match profiles.find(&user_id).await? {
        Some(profile) => Ok(Json(ProfileResponse {
            success: true,
            profile,
        })
        .into_response()),
        None => Err(ApiError::not_found("Profile not found")),
    }
}
