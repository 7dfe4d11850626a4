//! Text/binary conversion.
//!
//! A binary string is a sequence of whitespace-separated 8-digit tokens made
//! of `0` and `1`, one token per byte. Plain text is limited to code points
//! 0-255 so that every character fits in a single token.

use std::ops::RangeInclusive;

use crate::config::HEALTH_STATUS;

/// Number of binary digits per token
pub const BYTE_WIDTH: usize = 8;

/// Code points kept by [`decode`]; everything else is dropped from the output
pub const PRINTABLE_ASCII: RangeInclusive<u8> = 32..=126;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Entrada vazia")]
    EmptyInput,

    #[error("Entrada inválida - use apenas 0, 1 e espaços")]
    InvalidFormat,

    #[error("Byte inválido: {0} (deve ter 8 dígitos)")]
    InvalidByteLength(String),

    #[error("Caractere não suportado: {0}")]
    UnsupportedCharacter(char),
}

/// Strip leading and trailing characters at or below U+0020.
///
/// This is the trimming rule existing clients were built against: it removes
/// ASCII control characters as well as spaces, but leaves Unicode whitespace
/// such as U+00A0 in place.
pub fn trim_control(input: &str) -> &str {
    input.trim_matches(|c: char| c <= ' ')
}

/// Characters that separate tokens in a binary string.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Decode a binary string into text.
///
/// Bytes outside [`PRINTABLE_ASCII`] are dropped rather than rejected, so the
/// result may be shorter than the number of tokens, or empty.
pub fn decode(input: &str) -> Result<String, ConversionError> {
    let trimmed = trim_control(input);
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    if !trimmed
        .chars()
        .all(|c| c == '0' || c == '1' || is_separator(c))
    {
        return Err(ConversionError::InvalidFormat);
    }

    let mut text = String::new();
    for token in trimmed.split(is_separator).filter(|t| !t.is_empty()) {
        if token.len() != BYTE_WIDTH {
            return Err(ConversionError::InvalidByteLength(token.to_string()));
        }

        // Eight binary digits always fit in a u8
        let byte = u8::from_str_radix(token, 2).map_err(|_| ConversionError::InvalidFormat)?;
        if PRINTABLE_ASCII.contains(&byte) {
            text.push(char::from(byte));
        }
    }

    Ok(text)
}

/// Encode text as space-separated 8-digit binary tokens.
///
/// Emptiness is judged on the trimmed input, but every character of the
/// original input is encoded, including surrounding whitespace.
pub fn encode(input: &str) -> Result<String, ConversionError> {
    if trim_control(input).is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let tokens = input
        .chars()
        .map(|c| {
            u8::try_from(c)
                .map(|byte| format!("{:0width$b}", byte, width = BYTE_WIDTH))
                .map_err(|_| ConversionError::UnsupportedCharacter(c))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(tokens.join(" "))
}

/// Liveness status phrase.
pub fn health_check() -> &'static str {
    HEALTH_STATUS
}
