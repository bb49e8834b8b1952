//! HTTP handlers for multimodal endpoints.

use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;

use crate::domain::accessibility::{self, AccessibilityMode};
use crate::ports::{GenerationRequest, InlineImage};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    AnalyzeImageRequest, AnalyzeImageResponse, OcrTranslateRequest, OcrTranslateResponse,
};

/// Decodes a base64 data URL (`data:image/png;base64,...`) into image bytes.
///
/// Bare base64 without the data-URL header is accepted and assumed to be PNG.
fn parse_data_url(image: &str) -> Result<InlineImage, ApiError> {
    let (mime_type, payload) = match image.split_once(',') {
        Some((header, payload)) => {
            let mime = header
                .strip_prefix("data:")
                .and_then(|h| h.split(';').next())
                .filter(|m| !m.is_empty())
                .unwrap_or("image/png");
            (mime.to_string(), payload)
        }
        None => ("image/png".to_string(), image),
    };

    let data = BASE64
        .decode(payload.trim())
        .map_err(|e| ApiError::bad_request(format!("Invalid base64 image: {}", e)))?;

    if data.is_empty() {
        return Err(ApiError::bad_request("Empty image payload"));
    }

    Ok(InlineImage::new(mime_type, data))
}

/// POST /api/multimodal/analyze-image
pub async fn analyze_image(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeImageRequest>,
) -> Result<Json<AnalyzeImageResponse>, ApiError> {
    let ai = state.ai.as_ref().ok_or_else(ApiError::gemini_disabled)?;

    let mode = req
        .accessibility_mode
        .as_deref()
        .and_then(AccessibilityMode::parse);
    let prompt = accessibility::build_prompt(&req.query, mode);
    let image = parse_data_url(&req.image)?;

    let response = ai
        .generate(GenerationRequest::new(prompt).with_image(image))
        .await?;

    let user_id = req.user_id.as_deref().unwrap_or("anonymous");
    state
        .log_usage(
            user_id,
            "multimodal_image_analysis",
            json!({
                "query": req.query,
                "accessibility_mode": req.accessibility_mode,
            }),
        )
        .await;

    Ok(Json(AnalyzeImageResponse {
        success: true,
        analysis: response.text,
        source: "cloud-gemini-vision",
        accessibility_mode: req.accessibility_mode,
    }))
}

/// POST /api/multimodal/ocr-translate
pub async fn ocr_translate(
    State(state): State<AppState>,
    Json(req): Json<OcrTranslateRequest>,
) -> Result<Json<OcrTranslateResponse>, ApiError> {
    let ai = state.ai.as_ref().ok_or_else(ApiError::gemini_disabled)?;

    let prompt = format!(
        "Extract all text from this image and translate it to {}.\n\n\
         Format:\n\
         ORIGINAL TEXT:\n\
         [extracted text]\n\n\
         TRANSLATION:\n\
         [translated text]",
        req.target_language
    );
    let image = parse_data_url(&req.image)?;

    let response = ai
        .generate(GenerationRequest::new(prompt).with_image(image))
        .await?;

    let user_id = req.user_id.as_deref().unwrap_or("anonymous");
    state.log_usage(user_id, "ocr_translate", json!({})).await;

    Ok(Json(OcrTranslateResponse {
        success: true,
        result: response.text,
        source: "cloud-gemini-ocr",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_data_url_extracts_mime_and_bytes() {
        let encoded = BASE64.encode(b"image-bytes");
        let url = format!("data:image/jpeg;base64,{}", encoded);

        let image = parse_data_url(&url).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, b"image-bytes");
    }

    #[test]
    fn parse_data_url_accepts_bare_base64() {
        let encoded = BASE64.encode(b"raw");

        let image = parse_data_url(&encoded).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, b"raw");
    }

    #[test]
    fn parse_data_url_rejects_invalid_base64() {
        let result = parse_data_url("data:image/png;base64,@@not-base64@@");
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn parse_data_url_rejects_empty_payload() {
        let result = parse_data_url("data:image/png;base64,");
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
