//! Clarity Backend - HTTP relay for the Clarity accessibility browser extension.
//!
//! Receives requests from the extension, forwards content to the Gemini API
//! with templated prompts, persists usage and analytics records in MongoDB,
//! and stores uploaded documents for text extraction.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
