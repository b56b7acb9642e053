//! Percent-decoding of raw query strings.
//!
//! Query strings are decoded by hand rather than as form data: `+` stays a
//! plus sign, and every `%` must introduce exactly two hex digits. The bytes
//! produced by the escapes are then read as UTF-8.

use crate::core::{QueryDecoder, Result};
use crate::utils::error::PyramidError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PercentDecoder;

impl QueryDecoder for PercentDecoder {
    fn decode(&self, raw: &[u8]) -> Result<String> {
        decode(raw)
    }
}

pub fn decode(raw: &[u8]) -> Result<String> {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut index = 0;

    while index < raw.len() {
        if raw[index] == b'%' {
            let high = raw.get(index + 1).and_then(|&b| hex_value(b));
            let low = raw.get(index + 2).and_then(|&b| hex_value(b));
            match (high, low) {
                (Some(high), Some(low)) => bytes.push((high << 4) | low),
                _ => return Err(PyramidError::MalformedEscape { position: index }),
            }
            index += 3;
        } else {
            bytes.push(raw[index]);
            index += 1;
        }
    }

    Ok(String::from_utf8(bytes)?)
}

/// Escapes every byte outside the unreserved set as `%XX`.
pub fn encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
