//! HTTP handlers for auth endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::credentials::PasswordRecord;
use crate::ports::RepositoryError;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{AuthResponse, CredentialsRequest};

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let users = state.users.as_ref().ok_or_else(ApiError::mongodb_disabled)?;

    let email = req.email.trim().to_lowercase();
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let password = PasswordRecord::derive(&req.password);
    match users.create(&email, &password).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(AuthResponse {
                success: true,
                message: "User registered successfully",
                user_id: email,
            }),
        )),
        Err(RepositoryError::Duplicate(_)) => Err(ApiError::Conflict(
            "User already exists. Please log in instead.".to_string(),
        )),
        Err(error) => Err(error.into()),
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let users = state.users.as_ref().ok_or_else(ApiError::mongodb_disabled)?;

    let email = req.email.trim().to_lowercase();
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let user = users.find_by_email(&email).await?;
    let verified = user.is_some_and(|u| u.password.verify(&req.password));

    if verified {
        Ok(Json(AuthResponse {
            success: true,
            message: "Login successful",
            user_id: email,
        }))
    } else {
        Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ))
    }
}
