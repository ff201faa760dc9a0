//! Standard base64 encoding function.

use crate::constants::{ENCODE_TABLE, PAD};
use crate::create_to_base64::encode_with_table;

/// Encodes bytes to a padded, standard-alphabet base64 string.
///
/// # Example
///
/// ```
/// use bytebuf_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut pad = [0u8; 4];
    encode_with_table(&ENCODE_TABLE, PAD.encode_utf8(&mut pad), uint8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base64() {
        assert_eq!(to_base64(b""), "");
        assert_eq!(to_base64(b"f"), "Zg==");
        assert_eq!(to_base64(b"fo"), "Zm8=");
        assert_eq!(to_base64(b"foo"), "Zm9v");
        assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
        assert_eq!(to_base64(&[0xff, 0xfe, 0xfd]), "//79");
    }
}
