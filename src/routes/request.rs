//! Request body parsing for the conversion routes.
//!
//! Clients send either a small JSON object (`{"binary":"..."}`,
//! `{"text":"..."}`) or the raw input as the whole body. Extraction is a
//! substring search rather than a JSON parse: a body that starts with `{` is
//! searched for `"<field>":"` and the value runs to the next `"`. Escape
//! sequences are not interpreted, and whitespace around the colon defeats the
//! match. Whenever extraction fails the whole trimmed body is used instead.

use axum::body::Bytes;

use crate::service::trim_control;

/// Decode a request body as text, replacing invalid UTF-8 sequences.
pub fn body_text(body: &Bytes) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(body)
}

/// Pull the input value for `field` out of a request body.
///
/// Returns the field's value when the body looks like a JSON object carrying a
/// non-empty string for `field`, and the trimmed body otherwise.
pub fn extract_input<'a>(body: &'a str, field: &str) -> &'a str {
    match find_field(body, field) {
        Some(value) => value,
        None => trim_control(body),
    }
}

fn find_field<'a>(body: &'a str, field: &str) -> Option<&'a str> {
    if !body.starts_with('{') {
        return None;
    }

    let marker = format!("\"{}\":\"", field);
    let start = body.find(&marker)? + marker.len();
    let len = body[start..].find('"')?;

    (len > 0).then(|| &body[start..start + len])
}
