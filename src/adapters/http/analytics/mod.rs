//! Analytics endpoints - session logging, AI insights, aggregate stats.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
