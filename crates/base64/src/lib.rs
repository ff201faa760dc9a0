//! Base64 encoding and decoding for bytebuf.
//!
//! # Overview
//!
//! - [`to_base64`] / [`from_base64`] - standard alphabet (`A-Z a-z 0-9 + /`), `=` padding
//! - [`create_to_base64`] / [`create_from_base64`] - factories for custom alphabets
//!
//! The decoder is strict about shape: the input length must be a multiple of
//! four and every symbol other than trailing padding must belong to the
//! alphabet.
//!
//! # Example
//!
//! ```
//! use bytebuf_base64::{from_base64, to_base64};
//!
//! let encoded = to_base64(&[0x41, 0x01]);
//! assert_eq!(encoded, "QQE=");
//! assert_eq!(from_base64(&encoded).unwrap(), vec![0x41, 0x01]);
//! ```

pub mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod to_base64;

pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::from_base64;
pub use to_base64::to_base64;

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The custom alphabet is not exactly 64 ASCII characters.
    #[error("base64 alphabet must be exactly 64 ASCII characters")]
    InvalidCharSetLength,
    /// The encoded string length is not a multiple of four.
    #[error("string length must be a multiple of four, got {0}")]
    InvalidLength(usize),
    /// A symbol outside the alphabet was found.
    #[error("illegal character {0:?}")]
    IllegalCharacter(char),
}
