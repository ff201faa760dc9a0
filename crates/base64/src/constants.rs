/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Marks an ASCII code that is not part of the alphabet.
pub const INVALID: u8 = 0xFF;

/// [`ALPHABET`] as a fixed-size byte table.
pub const ENCODE_TABLE: [u8; 64] = {
    let mut table = [0u8; 64];
    let alphabet = ALPHABET.as_bytes();
    let mut i = 0;
    while i < 64 {
        table[i] = alphabet[i];
        i += 1;
    }
    table
};

/// Reverse lookup for [`ALPHABET`]: ASCII code to 6-bit value.
pub const DECODE_TABLE: [u8; 128] = reverse_table(ALPHABET.as_bytes());

/// Builds an ASCII-indexed reverse lookup table for a 64-symbol alphabet.
///
/// Entries for codes outside the alphabet hold [`INVALID`]. Non-ASCII
/// symbols are ignored; callers validate the alphabet beforehand.
pub const fn reverse_table(alphabet: &[u8]) -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < alphabet.len() {
        let code = alphabet[i];
        if code < 128 {
            table[code as usize] = i as u8;
        }
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_table() {
        assert_eq!(ENCODE_TABLE[0], b'A');
        assert_eq!(ENCODE_TABLE[63], b'/');
        assert_eq!(DECODE_TABLE[b'A' as usize], 0);
        assert_eq!(DECODE_TABLE[b'z' as usize], 51);
        assert_eq!(DECODE_TABLE[b'+' as usize], 62);
        assert_eq!(DECODE_TABLE[b'/' as usize], 63);
        assert_eq!(DECODE_TABLE[b'=' as usize], INVALID);
        assert_eq!(DECODE_TABLE[b'-' as usize], INVALID);
    }
}
