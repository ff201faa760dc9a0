//! Buffer error type.

use bytebuf_base64::Base64Error;
use thiserror::Error;

/// Error type for buffer construction, codec and accessor operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BufferError {
    /// The construction input is not one of the accepted shapes.
    #[error("first argument needs to be a number, array, buffer, data view or string, got {0}")]
    InvalidSource(String),
    /// The encoding selector is not one of `base64`, `hex` or `utf8`.
    #[error("unknown encoding: {0}")]
    UnsupportedEncoding(String),
    /// Encoded text has the wrong shape (length or digits).
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A base64 symbol outside the alphabet.
    #[error("illegal character {0:?}")]
    IllegalCharacter(char),
    /// An offset or value outside the representable bounds.
    #[error("{0}")]
    Range(&'static str),
    /// A value that is not a number where one is required.
    #[error("{0}")]
    Type(&'static str),
    /// An integer write given a non-integral number.
    #[error("value has a fractional component: {0}")]
    FractionalValue(f64),
}

impl From<Base64Error> for BufferError {
    fn from(err: Base64Error) -> Self {
        match err {
            Base64Error::IllegalCharacter(ch) => BufferError::IllegalCharacter(ch),
            other => BufferError::MalformedInput(other.to_string()),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base64_error() {
        assert_eq!(
            BufferError::from(Base64Error::IllegalCharacter('*')),
            BufferError::IllegalCharacter('*')
        );
        assert_eq!(
            BufferError::from(Base64Error::InvalidLength(3)),
            BufferError::MalformedInput("string length must be a multiple of four, got 3".into())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            BufferError::UnsupportedEncoding("ucs2".into()).to_string(),
            "unknown encoding: ucs2"
        );
        assert_eq!(
            BufferError::Range("trying to read beyond buffer length").to_string(),
            "trying to read beyond buffer length"
        );
    }
}
