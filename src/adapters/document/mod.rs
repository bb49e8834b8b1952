//! Document adapters - text extraction from uploaded files.

mod text_extractor;

pub use text_extractor::{DocumentKind, FileTextExtractor};
