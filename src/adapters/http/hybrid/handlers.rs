//! HTTP handlers for hybrid endpoints.
//!
//! A request goes to the cloud when the extension asks for it explicitly or
//! the input exceeds the configured threshold; otherwise the response tells
//! the extension to run its on-device model.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::accessibility::{self, AccessibilityMode};
use crate::domain::dispatch::{self, Dispatch};
use crate::ports::GenerationRequest;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    CloudPromptResponse, CloudSimplifyResponse, HybridPromptRequest, HybridSimplifyRequest,
    OnDevicePromptResponse, OnDeviceSimplifyResponse,
};

/// POST /api/hybrid/prompt
pub async fn hybrid_prompt(
    State(state): State<AppState>,
    Json(req): Json<HybridPromptRequest>,
) -> Result<Response, ApiError> {
    let user_id = req.user_id.as_deref().unwrap_or("anonymous").to_string();

    let prompt_chars = req.prompt.chars().count();
    match dispatch::choose(prompt_chars, req.use_cloud, state.prompt_threshold) {
        Dispatch::Cloud => {
            let ai = state.ai.as_ref().ok_or_else(|| {
                ApiError::bad_request(
                    "Cloud AI not available. Prompt too long for on-device processing.",
                )
            })?;

            let mode = req
                .accessibility_mode
                .as_deref()
                .and_then(AccessibilityMode::parse);
            let prompt = accessibility::build_prompt(&req.prompt, mode);

            let response = ai.generate(GenerationRequest::new(prompt)).await?;

            state
                .log_usage(&user_id, "hybrid_prompt_cloud", json!({}))
                .await;

            Ok(Json(CloudPromptResponse {
                success: true,
                response: response.text,
                source: "cloud",
            })
            .into_response())
        }
        Dispatch::OnDevice => {
            state
                .log_usage(&user_id, "hybrid_prompt_ondevice", json!({}))
                .await;

            Ok(Json(OnDevicePromptResponse {
                success: true,
                source: "on-device",
                instruction: "use_prompt_api",
            })
            .into_response())
        }
    }
}

/// POST /api/hybrid/simplify
pub async fn hybrid_simplify(
    State(state): State<AppState>,
    Json(req): Json<HybridSimplifyRequest>,
) -> Result<Response, ApiError> {
    let user_id = req.user_id.as_deref().unwrap_or("anonymous").to_string();

    let text_chars = req.text.chars().count();
    match dispatch::choose(text_chars, req.use_cloud, state.simplify_threshold) {
        Dispatch::Cloud => {
            let ai = state.ai.as_ref().ok_or_else(|| {
                ApiError::bad_request(
                    "Cloud AI not available. Text too long for on-device processing.",
                )
            })?;

            let mode = req
                .accessibility_mode
                .as_deref()
                .and_then(AccessibilityMode::parse);
            let prompt = accessibility::build_simplify_prompt(&req.text, mode);

            let response = ai.generate(GenerationRequest::new(prompt)).await?;

            state.log_usage(&user_id, "simplify_cloud", json!({})).await;

            Ok(Json(CloudSimplifyResponse {
                success: true,
                simplified: response.text,
                source: "cloud",
            })
            .into_response())
        }
        Dispatch::OnDevice => {
            state
                .log_usage(&user_id, "simplify_ondevice", json!({}))
                .await;

            Ok(Json(OnDeviceSimplifyResponse {
                success: true,
                source: "on-device",
            })
            .into_response())
        }
    }
}
