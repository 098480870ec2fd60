//! Hexadecimal helpers for tag identifiers and log output.
//!
//! Tag identifiers travel as hex strings (the reader's `LastScanData` is one),
//! so parsing is strict: pairs of ASCII hex digits only, no separators.

use crate::{Error, Result};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

fn push_byte(out: &mut String, b: u8) {
    out.push(char::from(DIGITS[usize::from(b >> 4)]));
    out.push(char::from(DIGITS[usize::from(b & 0x0f)]));
}

/// Lowercase hex, the form a tag id takes in `LastScanData`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    bytes.iter().for_each(|&b| push_byte(&mut out, b));
    out
}

/// Space separated hex, for extension object bodies in debug logs.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_byte(&mut out, b);
    }
    out
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a hex string into bytes, consuming digit pairs left to right.
///
/// Fails with [`Error::MalformedHex`] on odd length or on any character that
/// is not a hex digit.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let raw = s.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(Error::MalformedHex(format!(
            "odd length {} in '{}'",
            raw.len(),
            s
        )));
    }

    let mut out = Vec::with_capacity(raw.len() / 2);
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            _ => {
                return Err(Error::MalformedHex(format!(
                    "invalid hex pair at offset {} in '{}'",
                    i * 2,
                    s
                )));
            }
        }
    }

    Ok(out)
}
