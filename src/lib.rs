//! binary-decoder: converts text to and from ASCII binary over HTTP.
//!
//! `service` holds the conversions, `routes` the axum handlers and router,
//! and `http` the server lifecycle.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod service;

pub use error::ApiError;
pub use routes::create_router;
pub use service::ConversionError;
