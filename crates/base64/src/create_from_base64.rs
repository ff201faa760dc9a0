//! Factory function for creating base64 decoders with custom alphabets.

use crate::constants::{reverse_table, ALPHABET, INVALID, PAD};
use crate::Base64Error;

/// Creates a base64 decoder function with a custom alphabet.
///
/// The returned decoder requires the input length to be a multiple of four.
/// The padding character may only appear as the last one or two symbols;
/// each one removes a decoded byte from the final group.
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 64 ASCII characters long.
///
/// # Example
///
/// ```
/// use bytebuf_base64::create_from_base64;
///
/// let decode = create_from_base64(None).unwrap();
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base64Error>, Base64Error> {
    let chars = chars.unwrap_or(ALPHABET);
    if chars.len() != 64 || !chars.is_ascii() {
        return Err(Base64Error::InvalidCharSetLength);
    }
    let table = reverse_table(chars.as_bytes());
    Ok(move |encoded: &str| decode_with_table(&table, encoded))
}

/// Decodes `encoded` using an ASCII-indexed reverse lookup table.
pub(crate) fn decode_with_table(table: &[u8; 128], encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = encoded.as_bytes();
    let length = bytes.len();

    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength(length));
    }
    if length == 0 {
        return Ok(Vec::new());
    }

    let pad = PAD as u8;
    let mut missing = 0;
    if bytes[length - 1] == pad {
        missing += 1;
        if bytes[length - 2] == pad {
            missing += 1;
        }
    }

    let group_count = length / 4 - usize::from(missing > 0);
    let mut out = Vec::with_capacity(group_count * 3 + 2);
    let sextet = |index: usize| lookup(table, encoded, index);

    for group in 0..group_count {
        let x = group * 4;
        let c0 = sextet(x)?;
        let c1 = sextet(x + 1)?;
        let c2 = sextet(x + 2)?;
        let c3 = sextet(x + 3)?;
        out.push((c0 << 2) | (c1 >> 4));
        out.push((c1 << 4) | (c2 >> 2));
        out.push((c2 << 6) | c3);
    }

    let x = group_count * 4;
    match missing {
        1 => {
            let c0 = sextet(x)?;
            let c1 = sextet(x + 1)?;
            let c2 = sextet(x + 2)?;
            out.push((c0 << 2) | (c1 >> 4));
            out.push((c1 << 4) | (c2 >> 2));
        }
        2 => {
            let c0 = sextet(x)?;
            let c1 = sextet(x + 1)?;
            out.push((c0 << 2) | (c1 >> 4));
        }
        _ => {}
    }

    Ok(out)
}

fn lookup(table: &[u8; 128], encoded: &str, index: usize) -> Result<u8, Base64Error> {
    let code = encoded.as_bytes()[index];
    let value = if code < 128 { table[code as usize] } else { INVALID };
    if value == INVALID {
        let ch = encoded
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(Base64Error::IllegalCharacter(ch));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_variants() {
        let decode = create_from_base64(None).unwrap();
        assert_eq!(decode("QQ==").unwrap(), vec![0x41]);
        assert_eq!(decode("QQE=").unwrap(), vec![0x41, 0x01]);
        assert_eq!(decode("QQEB").unwrap(), vec![0x41, 0x01, 0x01]);
    }

    #[test]
    fn test_length_must_be_multiple_of_four() {
        let decode = create_from_base64(None).unwrap();
        assert_eq!(decode("QQ="), Err(Base64Error::InvalidLength(3)));
    }

    #[test]
    fn test_illegal_character() {
        let decode = create_from_base64(None).unwrap();
        assert_eq!(decode("QQ-B"), Err(Base64Error::IllegalCharacter('-')));
        assert_eq!(decode("Q=QB"), Err(Base64Error::IllegalCharacter('=')));
        assert_eq!(decode("===="), Err(Base64Error::IllegalCharacter('=')));
    }

    #[test]
    fn test_non_ascii_character() {
        let decode = create_from_base64(None).unwrap();
        assert_eq!(decode("Qé="), Err(Base64Error::IllegalCharacter('é')));
    }

    #[test]
    fn test_custom_alphabet() {
        let decode =
            create_from_base64(Some("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"))
                .unwrap();
        assert_eq!(decode("-_8=").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode("+/8="), Err(Base64Error::IllegalCharacter('+')));
    }
}
