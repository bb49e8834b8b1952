//! File text extraction - Implementation of the TextExtractor port.
//!
//! PDF text comes from `pdf-extract`; DOCX text is collected by walking
//! paragraphs, runs and text nodes in document order. Parsing is CPU-bound
//! and runs on the blocking pool.

use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tokio::task;

use crate::ports::{ExtractError, TextExtractor};

/// Supported uploaded-document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Determines the document kind from a filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit_once('.').map(|(_, ext)| ext)?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Text extractor for stored uploads.
#[derive(Debug, Clone, Default)]
pub struct FileTextExtractor;

impl FileTextExtractor {
    /// Creates the extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for FileTextExtractor {
    async fn extract(&self, filename: &str, data: Vec<u8>) -> Result<String, ExtractError> {
        let kind = DocumentKind::from_filename(filename)
            .ok_or_else(|| ExtractError::UnsupportedFormat(filename.to_string()))?;

        let text = task::spawn_blocking(move || match kind {
            DocumentKind::Pdf => extract_pdf(&data),
            DocumentKind::Docx => extract_docx(&data),
        })
        .await
        .map_err(|e| ExtractError::Malformed(format!("extraction task failed: {}", e)))??;

        if text.trim().is_empty() {
            return Err(ExtractError::NoText);
        }

        Ok(text)
    }
}

fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| ExtractError::Malformed(format!("PDF parse failed: {}", e)))
}

fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data)
        .map_err(|e| ExtractError::Malformed(format!("DOCX parse failed: {}", e)))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            lines.push(line);
        }
    }

    Ok(lines.join("\n"))
}
