//! Integration tests for the document upload and processing flows.
//!
//! Uses the real upload storage and text extractor against a temp directory;
//! DOCX fixtures are built in memory.

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use docx_rs::{Docx, Paragraph, Run};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use clarity_backend::adapters::ai::MockAiProvider;
use clarity_backend::adapters::document::FileTextExtractor;
use clarity_backend::adapters::http::{api_router, AppState};
use clarity_backend::adapters::storage::LocalUploadStorage;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

struct TestBackend {
    state: AppState,
    mock_ai: MockAiProvider,
    upload_dir: TempDir,
}

fn backend(with_ai: bool) -> TestBackend {
    let mock_ai = MockAiProvider::new();
    let upload_dir = TempDir::new().unwrap();

    let ai: Option<Arc<dyn clarity_backend::ports::AiProvider>> = if with_ai {
        Some(Arc::new(mock_ai.clone()))
    } else {
        None
    };

    let state = AppState {
        ai,
        users: None,
        profiles: None,
        analytics: None,
        usage: None,
        uploads: Arc::new(LocalUploadStorage::new(upload_dir.path(), 1024 * 1024)),
        extractor: Arc::new(FileTextExtractor::new()),
        prompt_threshold: 10_000,
        simplify_threshold: 5_000,
        profile_sync: true,
    };

    TestBackend {
        state,
        mock_ai,
        upload_dir,
    }
}

fn router(backend: &TestBackend) -> Router {
    api_router(backend.state.clone())
}

/// Builds a DOCX file in memory with one paragraph per entry.
fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for paragraph in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*paragraph)));
    }
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

/// Builds a multipart/form-data body with a single file field.
fn multipart_body(filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn upload(app: Router, filename: &str, content: &[u8]) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(filename, content)))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// =============================================================================
// Upload
// =============================================================================

#[tokio::test]
async fn upload_stores_docx_and_returns_filename() {
    let backend = backend(false);
    let bytes = docx_bytes(&["Hello upload"]);

    let (status, body) = upload(router(&backend), "notes.docx", &bytes).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["filename"], "notes.docx");
    assert!(backend.upload_dir.path().join("notes.docx").exists());
}

#[tokio::test]
async fn upload_rejects_disallowed_extension_before_writing() {
    let backend = backend(false);

    let (status, body) = upload(router(&backend), "script.txt", b"plain text").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains(".pdf and .docx"));

    // Nothing was written.
    let entries: Vec<_> = std::fs::read_dir(backend.upload_dir.path())
        .unwrap()
        .collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn upload_sanitizes_traversal_filenames() {
    let backend = backend(false);
    let bytes = docx_bytes(&["content"]);

    let (status, body) = upload(router(&backend), "../../evil.docx", &bytes).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "evil.docx");
    assert!(backend.upload_dir.path().join("evil.docx").exists());
}

#[tokio::test]
async fn upload_rejects_empty_file() {
    let backend = backend(false);

    let (status, _) = upload(router(&backend), "empty.docx", b"").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Summarize / proofread
// =============================================================================

#[tokio::test]
async fn summarize_without_ai_returns_truncated_preview() {
    let backend = backend(false);
    let bytes = docx_bytes(&["This report covers quarterly results."]);
    upload(router(&backend), "report.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/summarize",
        json!({"filename": "report.docx"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local-truncation");
    assert!(body["summary"]
        .as_str()
        .unwrap()
        .contains("quarterly results"));
}

#[tokio::test]
async fn summarize_with_ai_uses_cloud() {
    let backend = backend(true);
    backend.mock_ai.push_response("A compact summary.");
    let bytes = docx_bytes(&["Long document body."]);
    upload(router(&backend), "doc.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/summarize",
        json!({"filename": "doc.docx"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "A compact summary.");
    assert_eq!(body["source"], "cloud");

    let calls = backend.mock_ai.calls();
    assert!(calls[0].prompt.contains("Long document body."));
}

#[tokio::test]
async fn proofread_with_ai_uses_cloud() {
    let backend = backend(true);
    backend.mock_ai.push_response("Corrected text.");
    let bytes = docx_bytes(&["Teh quick brown fox."]);
    upload(router(&backend), "typo.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/proofread",
        json!({"filename": "typo.docx"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["proofread"], "Corrected text.");
    assert_eq!(body["source"], "cloud");
}

#[tokio::test]
async fn summarize_missing_file_is_not_found() {
    let backend = backend(false);

    let (status, body) = post_json(
        router(&backend),
        "/summarize",
        json!({"filename": "missing.docx"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn document_without_text_is_explicit_error() {
    let backend = backend(true);
    let bytes = docx_bytes(&["", "   "]);
    upload(router(&backend), "blank.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/summarize",
        json!({"filename": "blank.docx"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("no text"));
    assert_eq!(backend.mock_ai.call_count(), 0);
}

// =============================================================================
// Process document
// =============================================================================

#[tokio::test]
async fn process_document_both_returns_summary_and_proofread() {
    let backend = backend(true);
    backend.mock_ai.push_response("The summary.");
    backend.mock_ai.push_response("The corrected text.");
    let bytes = docx_bytes(&["Document body."]);
    upload(router(&backend), "doc.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/process-document",
        json!({"filename": "doc.docx", "action": "both"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "The summary.");
    assert_eq!(body["proofread"], "The corrected text.");
    assert_eq!(body["source"], "cloud");
}

#[tokio::test]
async fn process_document_summarize_only_omits_proofread() {
    let backend = backend(true);
    backend.mock_ai.push_response("Only the summary.");
    let bytes = docx_bytes(&["Document body."]);
    upload(router(&backend), "doc.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/process-document",
        json!({"filename": "doc.docx", "action": "summarize"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "Only the summary.");
    assert!(body.get("proofread").is_none());
}

#[tokio::test]
async fn process_document_unknown_action_is_rejected() {
    let backend = backend(true);
    let bytes = docx_bytes(&["Document body."]);
    upload(router(&backend), "doc.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/process-document",
        json!({"filename": "doc.docx", "action": "rewrite"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Unknown action"));
}

#[tokio::test]
async fn process_pdf_alias_reaches_same_handler() {
    let backend = backend(false);
    let bytes = docx_bytes(&["Legacy route body."]);
    upload(router(&backend), "legacy.docx", &bytes).await;

    let (status, body) = post_json(
        router(&backend),
        "/process-pdf",
        json!({"filename": "legacy.docx"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local-truncation");
    assert!(body["summary"].as_str().unwrap().contains("Legacy route body."));
}
