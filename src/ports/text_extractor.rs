//! Text extractor port - plain text from uploaded document bytes.

use async_trait::async_trait;
use thiserror::Error;

/// Port for extracting text from an uploaded document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extracts the document's text. The filename's extension selects the
    /// parser; a document without any non-whitespace text is an error, never
    /// an empty success.
    async fn extract(&self, filename: &str, data: Vec<u8>) -> Result<String, ExtractError>;
}

/// Text extraction errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Extension not in the supported set.
    #[error("unsupported document type: {0}")]
    UnsupportedFormat(String),

    /// Parsed fine but contained no text.
    #[error("no text could be extracted from the document")]
    NoText,

    /// The document could not be parsed.
    #[error("malformed document: {0}")]
    Malformed(String),
}
