//! HTTP handlers for analytics endpoints.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use crate::domain::analytics::SessionRecord;
use crate::ports::GenerationRequest;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{InsightsResponse, SessionRequest, SessionResponse, StatsResponse};

/// How many stored sessions feed the insights route.
const INSIGHTS_SESSION_LIMIT: usize = 30;

/// How many of those are serialized into the summarizer prompt.
const INSIGHTS_PROMPT_SESSIONS: usize = 10;

/// POST /api/analytics/session
pub async fn log_session(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    // Without a database the session is dropped silently; the extension
    // should not surface an error for lost telemetry.
    let Some(analytics) = &state.analytics else {
        return Ok(Json(SessionResponse { success: true }));
    };

    let session = SessionRecord {
        user_id: req.user_id.unwrap_or_else(|| "anonymous".to_string()),
        document_type: req.document_type,
        features_used: req.features_used,
        duration: req.duration,
        timestamp: Utc::now(),
    };

    analytics.insert_session(&session).await?;

    Ok(Json(SessionResponse { success: true }))
}

/// GET /api/analytics/insights/:user_id
pub async fn get_insights(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let Some(analytics) = &state.analytics else {
        return Ok(Json(InsightsResponse::unavailable(
            "Analytics not available (MongoDB not configured)",
        )));
    };

    let Some(ai) = &state.ai else {
        return Ok(Json(InsightsResponse::unavailable(
            "AI insights not available (Gemini not configured)",
        )));
    };

    let sessions = analytics
        .recent_sessions(&user_id, INSIGHTS_SESSION_LIMIT)
        .await?;

    if sessions.is_empty() {
        return Ok(Json(InsightsResponse::unavailable(
            "Not enough data yet. Keep using Clarity to unlock personalized insights!",
        )));
    }

    let sample = &sessions[..sessions.len().min(INSIGHTS_PROMPT_SESSIONS)];
    let sessions_json = serde_json::to_string_pretty(sample)
        .map_err(|e| ApiError::internal(format!("Failed to serialize sessions: {}", e)))?;

    let prompt = format!(
        "Analyze these learning session patterns and provide personalized insights:\n\n\
         {}\n\n\
         Provide:\n\
         1. Most used features\n\
         2. Learning patterns\n\
         3. Recommendations for improvement\n\
         4. Accessibility needs analysis\n\n\
         Keep it concise and actionable.",
        sessions_json
    );

    let response = ai.generate(GenerationRequest::new(prompt)).await?;

    Ok(Json(InsightsResponse {
        success: true,
        insights: response.text,
        session_count: sessions.len(),
    }))
}

/// GET /api/analytics/stats/:user_id
pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StatsResponse>, ApiError> {
    let analytics = state
        .analytics
        .as_ref()
        .ok_or_else(ApiError::mongodb_disabled)?;

    let stats = analytics.session_stats(&user_id).await?;

    Ok(Json(StatsResponse {
        success: true,
        total_sessions: stats.total_sessions,
        feature_usage: stats.feature_usage,
        document_types: stats.document_types,
    }))
}
