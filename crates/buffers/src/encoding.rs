//! Encoding selector for text conversions.

use std::fmt;
use std::str::FromStr;

use bytebuf_base64::{from_base64, to_base64};

use crate::error::{BufferError, Result};
use crate::{hex, utf8};

/// The closed set of text encodings a buffer converts to and from.
///
/// Parsing is case-insensitive; anything else is rejected with
/// [`BufferError::UnsupportedEncoding`].
///
/// # Example
///
/// ```
/// use bytebuf::Encoding;
///
/// assert_eq!("HEX".parse::<Encoding>().unwrap(), Encoding::Hex);
/// assert!("ucs2".parse::<Encoding>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    Base64,
    Hex,
    #[default]
    Utf8,
}

impl Encoding {
    /// Resolves an optional selector, defaulting to UTF-8.
    pub fn resolve(selector: Option<&str>) -> Result<Self> {
        selector.map_or(Ok(Encoding::Utf8), str::parse)
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
            Encoding::Utf8 => "utf8",
        }
    }

    /// Decodes text in this encoding into bytes.
    pub fn decode(self, data: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Base64 => Ok(from_base64(data)?),
            Encoding::Hex => hex::from_hex(data),
            Encoding::Utf8 => Ok(utf8::encode(data)),
        }
    }

    /// Encodes bytes as text in this encoding.
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base64 => to_base64(bytes),
            Encoding::Hex => hex::to_hex(bytes),
            Encoding::Utf8 => utf8::decode(bytes),
        }
    }
}

impl FromStr for Encoding {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            "utf8" => Ok(Encoding::Utf8),
            _ => Err(BufferError::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
