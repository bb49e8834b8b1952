//! Proxy endpoints - usage logging for on-device features.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
