//! Handlers for the decode and encode endpoints.

use axum::body::Bytes;
use tracing::instrument;

use super::request::{body_text, extract_input};
use super::response::JsonBody;
use crate::config::{DECODE_FIELD, ENCODE_FIELD};
use crate::error::ApiError;
use crate::service;

/// Decode a binary string sent as `{"binary":"..."}` or as the raw body.
#[instrument(name = "convert::decode", skip(body), fields(body_len = body.len()))]
pub async fn decode(body: Bytes) -> Result<JsonBody, ApiError> {
    let raw = body_text(&body);
    let input = extract_input(&raw, DECODE_FIELD);

    let text = service::decode(input).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected binary input");
    })?;
    tracing::debug!(chars = text.chars().count(), "Decoded binary input");

    Ok(JsonBody::decoded(&text))
}

/// Encode text sent as `{"text":"..."}` or as the raw body.
#[instrument(name = "convert::encode", skip(body), fields(body_len = body.len()))]
pub async fn encode(body: Bytes) -> Result<JsonBody, ApiError> {
    let raw = body_text(&body);
    let input = extract_input(&raw, ENCODE_FIELD);

    let binary = service::encode(input).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected text input");
    })?;
    tracing::debug!(chars = input.chars().count(), "Encoded text input");

    Ok(JsonBody::encoded(&binary))
}

/// Fallback for any method the conversion routes do not handle.
pub async fn method_not_allowed() -> ApiError {
    ApiError::UnsupportedMethod
}
