//! Hex text codec.

use crate::error::{BufferError, Result};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes bytes as lowercase hex, two digits per byte.
///
/// # Example
///
/// ```
/// use bytebuf::hex::to_hex;
///
/// assert_eq!(to_hex(&[0x01, 0xab, 0xff]), "01abff");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(DIGITS[(byte >> 4) as usize] as char);
        out.push(DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Decodes hex text, two characters per byte. Both digit cases are accepted.
///
/// Odd-length input and non-hex characters fail with
/// [`BufferError::MalformedInput`].
pub fn from_hex(data: &str) -> Result<Vec<u8>> {
    let bytes = data.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(BufferError::MalformedInput(format!(
            "hex string length must be even, got {}",
            bytes.len()
        )));
    }
    bytes
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(BufferError::MalformedInput(format!(
                "invalid hex pair at position {}",
                i * 2
            ))),
        })
        .collect()
}

fn nibble(code: u8) -> Option<u8> {
    match code {
        b'0'..=b'9' => Some(code - b'0'),
        b'a'..=b'f' => Some(code - b'a' + 10),
        b'A'..=b'F' => Some(code - b'A' + 10),
        _ => None,
    }
}
