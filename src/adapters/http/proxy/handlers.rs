//! HTTP handlers for proxy endpoints.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use super::super::state::AppState;
use super::dto::{
    ProofreadLogRequest, SuccessResponse, SummarizeLogRequest, TranslateLogRequest,
};

/// POST /api/proxy/proofread
pub async fn log_proofread(
    State(state): State<AppState>,
    Json(req): Json<ProofreadLogRequest>,
) -> Json<SuccessResponse> {
    let user_id = req.user_id.as_deref().unwrap_or("anonymous");
    state
        .log_usage(
            user_id,
            "proofread",
            json!({
                "document_type": req.document_type,
                "text_length": req.text.as_deref().map_or(0, str::len),
            }),
        )
        .await;

    Json(SuccessResponse::ok())
}

/// POST /api/proxy/summarize
pub async fn log_summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeLogRequest>,
) -> Json<SuccessResponse> {
    let user_id = req.user_id.as_deref().unwrap_or("anonymous");
    state
        .log_usage(
            user_id,
            "summarize",
            json!({
                "url": req.url,
                "content_length": req.content.as_deref().map_or(0, str::len),
            }),
        )
        .await;

    Json(SuccessResponse::ok())
}

/// POST /api/proxy/translate
pub async fn log_translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateLogRequest>,
) -> Json<SuccessResponse> {
    let user_id = req.user_id.as_deref().unwrap_or("anonymous");
    state
        .log_usage(
            user_id,
            "translate",
            json!({
                "source_lang": req.source_language,
                "target_lang": req.target_language,
            }),
        )
        .await;

    Json(SuccessResponse::ok())
}
