//! Fixed-length byte buffer with precise binary codecs.
//!
//! # Overview
//!
//! - [`Buffer`] - a fixed-length, exclusively owned byte container
//! - [`Source`] - the accepted construction inputs (byte count, encoded text,
//!   byte sequence, foreign view)
//! - [`Encoding`] - the `base64` / `hex` / `utf8` text codecs
//! - [`ieee754`] / [`int`] - float and fixed-width integer packing
//! - [`utf8`] - extended UTF-8 (code points up to 31 bits, 1-6 byte sequences)
//! - [`ByteView`] / `DataView` - foreign binary view interop (`data-view` feature)
//!
//! # Example
//!
//! ```
//! use bytebuf::{Buffer, Source};
//!
//! let mut buf = Buffer::from_source(Source::Size(8)).unwrap();
//! buf.write_f64_be(1.5, 0, true).unwrap();
//! assert_eq!(buf.read_f64_be(0, true).unwrap(), 1.5);
//! assert_eq!(buf.to_string(Some("base64"), None, None).unwrap(), "P/gAAAAAAAA=");
//!
//! let text = Buffer::from_source(Source::Text("QQE=", Some("BASE64"))).unwrap();
//! assert_eq!(text.as_bytes(), &[0x41, 0x01]);
//! ```
//!
//! # Features
//!
//! - `data-view` (default) - the concrete `DataView` type and `Buffer::to_data_view`
//! - `tracing` - debug/trace events for construction and truncating copies

mod accessors;
mod buffer;
mod encoding;
mod error;
pub mod hex;
pub mod ieee754;
pub mod int;
mod json;
mod tracing_compat;
pub mod utf8;
mod view;

pub use buffer::{Buffer, FillValue, Source};
pub use encoding::Encoding;
pub use error::{BufferError, Result};
pub use json::BufferJson;
pub use view::ByteView;
#[cfg(feature = "data-view")]
pub use view::DataView;
