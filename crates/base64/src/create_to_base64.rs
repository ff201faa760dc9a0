//! Factory function for creating base64 encoders with custom alphabets.

use crate::constants::{ALPHABET, PAD};
use crate::Base64Error;

/// Creates a base64 encoder function with a custom alphabet and padding character.
///
/// # Arguments
///
/// * `chars` - A 64-character ASCII string representing the base64 alphabet. Defaults to standard base64.
/// * `pad` - The padding character. Defaults to '='. Use empty string for no padding.
///
/// # Returns
///
/// A function that encodes a `&[u8]` to a base64 `String`.
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 64 ASCII characters long.
///
/// # Example
///
/// ```
/// use bytebuf_base64::create_to_base64;
///
/// let encode = create_to_base64(None, None).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8=");
///
/// let encode_url = create_to_base64(
///     Some("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"),
///     Some(""),
/// )
/// .unwrap();
/// assert_eq!(encode_url(&[0xfb, 0xff]), "-_8");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String, Base64Error> {
    let chars = chars.unwrap_or(ALPHABET);
    let pad = pad.map(str::to_owned).unwrap_or_else(|| PAD.to_string());

    if chars.len() != 64 || !chars.is_ascii() {
        return Err(Base64Error::InvalidCharSetLength);
    }

    let mut table = [0u8; 64];
    table.copy_from_slice(chars.as_bytes());
    Ok(move |uint8: &[u8]| encode_with_table(&table, &pad, uint8))
}

/// Encodes `uint8` with a 64-symbol ASCII alphabet, appending `pad` once
/// for a two-byte tail and twice for a one-byte tail.
pub(crate) fn encode_with_table(table: &[u8; 64], pad: &str, uint8: &[u8]) -> String {
    let symbol = |index: u8| table[usize::from(index & 63)] as char;
    let mut out = String::with_capacity((uint8.len() + 2) / 3 * 4);
    let mut chunks = uint8.chunks_exact(3);

    for group in &mut chunks {
        let (b0, b1, b2) = (group[0], group[1], group[2]);
        out.push(symbol(b0 >> 2));
        out.push(symbol((b0 << 4) | (b1 >> 4)));
        out.push(symbol((b1 << 2) | (b2 >> 6)));
        out.push(symbol(b2));
    }

    match *chunks.remainder() {
        [b0] => {
            out.push(symbol(b0 >> 2));
            out.push(symbol(b0 << 4));
            out.push_str(pad);
            out.push_str(pad);
        }
        [b0, b1] => {
            out.push(symbol(b0 >> 2));
            out.push(symbol((b0 << 4) | (b1 >> 4)));
            out.push(symbol(b1 << 2));
            out.push_str(pad);
        }
        _ => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_alphabet() {
        assert_eq!(
            create_to_base64(Some("abc"), None).err(),
            Some(Base64Error::InvalidCharSetLength)
        );
    }

    #[test]
    fn test_remainders() {
        let encode = create_to_base64(None, None).unwrap();
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"A"), "QQ==");
        assert_eq!(encode(&[0x41, 0x01]), "QQE=");
        assert_eq!(encode(&[0x41, 0x01, 0x01]), "QQEB");
    }

    #[test]
    fn test_multi_char_padding() {
        let encode = create_to_base64(None, Some("%3D")).unwrap();
        assert_eq!(encode(b"A"), "QQ%3D%3D");
        assert_eq!(encode(b"AB"), "QUI%3D");
    }

    #[test]
    fn test_no_padding() {
        let encode = create_to_base64(None, Some("")).unwrap();
        assert_eq!(encode(b"A"), "QQ");
        assert_eq!(encode(b"AB"), "QUI");
    }
}
