//! Document endpoints - upload, text extraction, AI processing.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
