//! Multimodal endpoints - image analysis and OCR translation.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
