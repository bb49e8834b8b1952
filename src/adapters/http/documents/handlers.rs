//! HTTP handlers for document endpoints.
//!
//! Uploads are restricted to .pdf/.docx and rejected before any filesystem
//! access. Processing extracts the document's text and runs it through
//! Gemini; without a configured provider the routes fall back to a truncated
//! raw-text preview instead of failing.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::adapters::document::DocumentKind;
use crate::ports::GenerationRequest;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    DocumentRequest, ProcessResponse, ProofreadResponse, SummarizeResponse, UploadResponse,
};

/// Characters of raw text returned when the AI provider is unavailable.
const PREVIEW_CHAR_LIMIT: usize = 1_000;

/// Source tag for AI-processed output.
const SOURCE_CLOUD: &str = "cloud";

/// Source tag for the degraded preview fallback.
const SOURCE_FALLBACK: &str = "local-truncation";

/// POST /upload
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|n| n.to_string()) else {
            continue;
        };

        // Extension check happens before any bytes are read or written.
        if DocumentKind::from_filename(&filename).is_none() {
            return Err(ApiError::bad_request(
                "Only .pdf and .docx files are accepted",
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

        if data.is_empty() {
            return Err(ApiError::bad_request("Uploaded file is empty"));
        }

        let stored = state.uploads.save(&filename, &data).await?;
        tracing::info!(filename = %stored, bytes = data.len(), "document uploaded");

        return Ok(Json(UploadResponse {
            success: true,
            filename: stored,
        }));
    }

    Err(ApiError::bad_request("No file provided"))
}

/// POST /summarize
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let text = extract_stored_text(&state, &req.filename).await?;
    let (summary, source) = summarize_text(&state, &text).await?;

    Ok(Json(SummarizeResponse {
        success: true,
        summary,
        source,
    }))
}

/// POST /proofread
pub async fn proofread(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<ProofreadResponse>, ApiError> {
    let text = extract_stored_text(&state, &req.filename).await?;
    let (proofread, source) = proofread_text(&state, &text).await?;

    Ok(Json(ProofreadResponse {
        success: true,
        proofread,
        source,
    }))
}

/// POST /process-document (also mounted as /process-pdf)
pub async fn process_document(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let action = match req.action.as_deref() {
        None | Some("both") => Action::Both,
        Some("summarize") => Action::Summarize,
        Some("proofread") => Action::Proofread,
        Some(other) => {
            return Err(ApiError::bad_request(format!("Unknown action: {}", other)));
        }
    };

    let text = extract_stored_text(&state, &req.filename).await?;

    let mut summary = None;
    let mut proofread = None;
    let mut source = SOURCE_FALLBACK;

    if matches!(action, Action::Summarize | Action::Both) {
        let (output, tag) = summarize_text(&state, &text).await?;
        summary = Some(output);
        source = tag;
    }
    if matches!(action, Action::Proofread | Action::Both) {
        let (output, tag) = proofread_text(&state, &text).await?;
        proofread = Some(output);
        source = tag;
    }

    Ok(Json(ProcessResponse {
        success: true,
        summary,
        proofread,
        source,
    }))
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Summarize,
    Proofread,
    Both,
}

/// Reads a stored upload and extracts its text.
async fn extract_stored_text(state: &AppState, filename: &str) -> Result<String, ApiError> {
    let data = state.uploads.read(filename).await?;
    let text = state.extractor.extract(filename, data).await?;
    Ok(text)
}

/// Summarizes via Gemini, or returns a truncated preview when it is off.
async fn summarize_text(
    state: &AppState,
    text: &str,
) -> Result<(String, &'static str), ApiError> {
    match &state.ai {
        Some(ai) => {
            let prompt = format!(
                "Summarize this document concisely, highlighting the key points:\n\n{}",
                text
            );
            let response = ai.generate(GenerationRequest::new(prompt)).await?;
            Ok((response.text, SOURCE_CLOUD))
        }
        None => Ok((truncate_preview(text), SOURCE_FALLBACK)),
    }
}

/// Proofreads via Gemini, or returns a truncated preview when it is off.
async fn proofread_text(
    state: &AppState,
    text: &str,
) -> Result<(String, &'static str), ApiError> {
    match &state.ai {
        Some(ai) => {
            let prompt = format!(
                "Proofread this text and return a corrected version. Fix grammar, spelling \
                 and punctuation without changing the meaning:\n\n{}",
                text
            );
            let response = ai.generate(GenerationRequest::new(prompt)).await?;
            Ok((response.text, SOURCE_CLOUD))
        }
        None => Ok((truncate_preview(text), SOURCE_FALLBACK)),
    }
}

/// First `PREVIEW_CHAR_LIMIT` characters of the raw text.
fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHAR_LIMIT {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(PREVIEW_CHAR_LIMIT).collect();
    preview.push_str("...");
    preview
}
