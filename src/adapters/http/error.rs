//! HTTP error mapping.
//!
//! Every failure leaves the API as `{success: false, error: <message>}` with a
//! status code chosen by cause: missing dependency or bad input 400, bad
//! credentials 401, unknown resource 404, duplicate registration 409,
//! everything else 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::ports::{AiError, ExtractError, RepositoryError, StorageError};

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Uniform API error, rendered as `{success: false, error}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    /// 400 for routes that hard-require the Gemini API.
    pub fn gemini_disabled() -> Self {
        Self::BadRequest("Gemini API not configured".to_string())
    }

    /// 400 for routes that hard-require MongoDB.
    pub fn mongodb_disabled() -> Self {
        Self::BadRequest("MongoDB not configured".to_string())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest(m)
            | Self::Unauthorized(m)
            | Self::NotFound(m)
            | Self::Conflict(m)
            | Self::Internal(m) => m,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<AiError> for ApiError {
    fn from(error: AiError) -> Self {
        // The route contract treats every provider failure uniformly.
        Self::Internal(error.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Duplicate(message) => Self::Conflict(message),
            RepositoryError::NotFound(message) => Self::NotFound(message),
            RepositoryError::Backend(message) => Self::Internal(message),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        match &error {
            StorageError::NotFound(name) => Self::NotFound(format!("File not found: {}", name)),
            StorageError::FileTooLarge { .. } | StorageError::InvalidFilename(_) => {
                Self::BadRequest(error.to_string())
            }
            StorageError::PermissionDenied(_) | StorageError::Io(_) => {
                Self::Internal(error.to_string())
            }
        }
    }
}

impl From<ExtractError> for ApiError {
    fn from(error: ExtractError) -> Self {
        match error {
            ExtractError::UnsupportedFormat(_)
            | ExtractError::NoText
            | ExtractError::Malformed(_) => Self::BadRequest(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_causes() {
        assert_eq!(ApiError::gemini_disabled().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Unauthorized("nope".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("missing").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn duplicate_repository_error_maps_to_conflict() {
        let error: ApiError = RepositoryError::Duplicate("a@b.c".into()).into();
        assert_eq!(error.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn no_text_maps_to_bad_request() {
        let error: ApiError = ExtractError::NoText.into();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert!(error.message().contains("no text"));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let error: ApiError = StorageError::not_found("doc.pdf").into();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_body_has_uniform_shape() {
        let body = serde_json::to_value(ErrorResponse::new("oops")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "oops");
    }
}
