//! JSON response bodies for the conversion routes.
//!
//! Bodies are assembled by hand to keep the exact layout clients already
//! parse, and string values go through [`escape_json`], which escapes only
//! backslash, double quote, newline, carriage return and tab.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::{DECODE_SUCCESS_MESSAGE, ENCODE_SUCCESS_MESSAGE, JSON_CONTENT_TYPE};

/// Escape the characters that would break a JSON string literal.
///
/// Other control characters pass through unchanged.
pub fn escape_json(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A pre-rendered JSON body with its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody {
    pub status: StatusCode,
    pub body: String,
}

impl JsonBody {
    /// Successful decode: `{"text": ..., "success": true, "message": ...}`
    pub fn decoded(text: &str) -> Self {
        Self::success("text", text, DECODE_SUCCESS_MESSAGE)
    }

    /// Successful encode: `{"binary": ..., "success": true, "message": ...}`
    pub fn encoded(binary: &str) -> Self {
        Self::success("binary", binary, ENCODE_SUCCESS_MESSAGE)
    }

    /// Failure: `{"success": false, "message": ...}`
    pub fn failure(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: format!(
                r#"{{"success": false, "message": "{}"}}"#,
                escape_json(message)
            ),
        }
    }

    fn success(field: &str, value: &str, message: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: format!(
                r#"{{"{}": "{}", "success": true, "message": "{}"}}"#,
                field,
                escape_json(value),
                escape_json(message)
            ),
        }
    }
}

impl IntoResponse for JsonBody {
    fn into_response(self) -> Response {
        (
            self.status,
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            self.body,
        )
            .into_response()
    }
}
