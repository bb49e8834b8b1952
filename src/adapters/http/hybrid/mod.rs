//! Hybrid endpoints - cloud vs on-device dispatch.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
