//! Health check endpoint.
//!
//! Liveness only: a 200 with a fixed phrase means the process can answer HTTP.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::config::TEXT_CONTENT_TYPE;
use crate::service;

/// Health check handler.
///
/// Also installed as the method fallback for `/api/health`, so any method
/// other than OPTIONS gets the status text.
pub async fn health() -> impl IntoResponse {
    ([(CONTENT_TYPE, TEXT_CONTENT_TYPE)], service::health_check())
}
