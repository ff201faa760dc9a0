//! Extended UTF-8 codec.
//!
//! Encodes code points up to 31 bits into 1 to 6 byte sequences, a superset
//! of standard UTF-8. For every Unicode scalar value the output is identical
//! to standard UTF-8.
//!
//! Decoding is arithmetic only: the lead byte selects the sequence length and
//! the payload bits of the following bytes are combined without checking the
//! `10` continuation prefix or rejecting overlong forms. Malformed input
//! therefore decodes to unexpected code points instead of failing.

/// Largest code point the encoder accepts (31 bits).
pub const MAX_CODE_POINT: u32 = 0x7FFF_FFFF;

/// Returns the sequence length announced by a lead byte.
///
/// Bytes `0xFE` and `0xFF` announce nothing and yield 0.
///
/// # Example
///
/// ```
/// use bytebuf::utf8::sequence_length;
///
/// assert_eq!(sequence_length(b'a'), 1);
/// assert_eq!(sequence_length(0xE2), 3);
/// assert_eq!(sequence_length(0xFC), 6);
/// assert_eq!(sequence_length(0xFF), 0);
/// ```
pub fn sequence_length(lead: u8) -> usize {
    match lead {
        0..=127 => 1,
        128..=223 => 2,
        224..=239 => 3,
        240..=247 => 4,
        248..=251 => 5,
        252..=253 => 6,
        _ => 0,
    }
}

/// Appends the extended UTF-8 encoding of `code` to `out`.
///
/// Code points above [`MAX_CODE_POINT`] produce no output.
pub fn encode_code_point(code: u32, out: &mut Vec<u8>) {
    let cont = |shift: u32| ((code >> shift) & 63) as u8 | 128;
    if code <= 0x7F {
        out.push(code as u8);
    } else if code <= 0x7FF {
        out.extend_from_slice(&[(code >> 6) as u8 | 192, cont(0)]);
    } else if code <= 0xFFFF {
        out.extend_from_slice(&[(code >> 12) as u8 | 224, cont(6), cont(0)]);
    } else if code <= 0x1F_FFFF {
        out.extend_from_slice(&[(code >> 18) as u8 | 240, cont(12), cont(6), cont(0)]);
    } else if code <= 0x3FF_FFFF {
        out.extend_from_slice(&[
            (code >> 24) as u8 | 248,
            cont(18),
            cont(12),
            cont(6),
            cont(0),
        ]);
    } else if code <= MAX_CODE_POINT {
        out.extend_from_slice(&[
            (code >> 30) as u8 | 252,
            cont(24),
            cont(18),
            cont(12),
            cont(6),
            cont(0),
        ]);
    }
}

/// Encodes a sequence of code points.
///
/// # Example
///
/// ```
/// use bytebuf::utf8::encode_code_points;
///
/// assert_eq!(encode_code_points(&[0x41, 0x7FFF_FFFF]), vec![0x41, 0xFD, 0xBF, 0xBF, 0xBF, 0xBF, 0xBF]);
/// ```
pub fn encode_code_points(codes: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len());
    for &code in codes {
        encode_code_point(code, &mut out);
    }
    out
}

/// Encodes a string, one sequence per `char`.
///
/// # Example
///
/// ```
/// use bytebuf::utf8::encode;
///
/// assert_eq!(encode("hello"), b"hello".to_vec());
/// assert_eq!(encode("日本"), vec![0xE6, 0x97, 0xA5, 0xE6, 0x9C, 0xAC]);
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        encode_code_point(ch as u32, &mut out);
    }
    out
}

/// Decodes bytes into raw code points.
///
/// Continuation bytes missing at the end of input read as 0. Lead bytes
/// `0xFE` and `0xFF` are skipped.
pub fn decode_code_points(bytes: &[u8]) -> Vec<u32> {
    let mut codes = Vec::with_capacity(bytes.len());
    let mut x = 0;
    while x < bytes.len() {
        let lead = bytes[x];
        x += 1;
        let len = sequence_length(lead);
        if len == 0 {
            continue;
        }
        let mut code = if len == 1 {
            u32::from(lead)
        } else {
            u32::from(lead) & (0x7F >> len)
        };
        for _ in 1..len {
            let next = bytes.get(x).copied().unwrap_or(0);
            code = (code << 6) | u32::from(next & 63);
            x += 1;
        }
        codes.push(code);
    }
    codes
}

/// Decodes bytes into a string.
///
/// Code points that are not Unicode scalar values (surrogates, values above
/// `U+10FFFF`) become `U+FFFD`.
///
/// # Example
///
/// ```
/// use bytebuf::utf8::decode;
///
/// assert_eq!(decode(&[0xE2, 0x82, 0xAC]), "€");
/// assert_eq!(decode(&[0xF8, 0x88, 0x80, 0x80, 0x80]), "\u{FFFD}");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    decode_code_points(bytes)
        .into_iter()
        .map(|code| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_std() {
        for s in ["", "hello", "héllo", "日本語", "\u{1F600}", "\u{10FFFF}"] {
            assert_eq!(encode(s), s.as_bytes());
        }
    }

    #[test]
    fn test_encode_thresholds() {
        let lengths: Vec<usize> = [
            0x7F,
            0x80,
            0x7FF,
            0x800,
            0xFFFF,
            0x1_0000,
            0x1F_FFFF,
            0x20_0000,
            0x3FF_FFFF,
            0x400_0000,
            MAX_CODE_POINT,
        ]
        .iter()
        .map(|&code| encode_code_points(&[code]).len())
        .collect();
        assert_eq!(lengths, vec![1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6]);
    }

    #[test]
    fn test_encode_above_max_is_empty() {
        assert!(encode_code_points(&[0x8000_0000]).is_empty());
    }

    #[test]
    fn test_decode_extended_sequences() {
        let codes = [0x20_0000, 0x3FF_FFFF, 0x400_0000, MAX_CODE_POINT];
        assert_eq!(decode_code_points(&encode_code_points(&codes)), codes);
    }

    #[test]
    fn test_decode_truncated_sequence() {
        // 0xE2 announces three bytes; the missing one reads as zero.
        assert_eq!(decode_code_points(&[0xE2, 0x82]), vec![0x2080]);
    }

    #[test]
    fn test_decode_is_permissive() {
        // Overlong encoding of '/' is accepted.
        assert_eq!(decode_code_points(&[0xC0, 0xAF]), vec![0x2F]);
        // A stray continuation byte is read as a two-byte lead.
        assert_eq!(decode_code_points(&[0x80, 0x41]), vec![0x01]);
        // 0xFE and 0xFF are skipped.
        assert_eq!(decode_code_points(&[0xFE, 0x41, 0xFF]), vec![0x41]);
    }

    #[test]
    fn test_decode_surrogate_replaced() {
        assert_eq!(decode(&[0xED, 0xA0, 0x80]), "\u{FFFD}");
    }
}
