//! Foreign binary views.
//!
//! A host may provide its own fixed-width binary container. Anything that
//! exposes a byte length and an 8-bit unsigned accessor can be copied into a
//! [`Buffer`](crate::Buffer) through [`ByteView`]. The concrete [`DataView`]
//! type is available with the `data-view` feature.

/// Read access to a foreign fixed-width binary container.
pub trait ByteView {
    /// Number of bytes in the view.
    fn byte_length(&self) -> usize;

    /// Byte at `index`; `index < byte_length()`.
    fn get_uint8(&self, index: usize) -> u8;
}

impl ByteView for crate::Buffer {
    fn byte_length(&self) -> usize {
        self.len()
    }

    fn get_uint8(&self, index: usize) -> u8 {
        self.as_bytes()[index]
    }
}

#[cfg(feature = "data-view")]
pub use data_view::DataView;

#[cfg(feature = "data-view")]
mod data_view {
    use super::ByteView;

    /// An owned, fixed-length binary view with 8-bit accessors.
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::{Buffer, DataView};
    ///
    /// let mut view = DataView::new(2);
    /// view.set_uint8(1, 0xff);
    /// let buf = Buffer::from_view(&view);
    /// assert_eq!(buf.as_bytes(), &[0x00, 0xff]);
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct DataView {
        bytes: Box<[u8]>,
    }

    impl DataView {
        /// Creates a zero-filled view of `byte_length` bytes.
        pub fn new(byte_length: usize) -> Self {
            Self {
                bytes: vec![0; byte_length].into_boxed_slice(),
            }
        }

        /// Sets the byte at `index`; out-of-range writes are ignored.
        pub fn set_uint8(&mut self, index: usize, value: u8) {
            if let Some(slot) = self.bytes.get_mut(index) {
                *slot = value;
            }
        }

        /// The backing bytes.
        pub fn as_bytes(&self) -> &[u8] {
            &self.bytes
        }
    }

    impl From<Vec<u8>> for DataView {
        fn from(bytes: Vec<u8>) -> Self {
            Self {
                bytes: bytes.into_boxed_slice(),
            }
        }
    }

    impl ByteView for DataView {
        fn byte_length(&self) -> usize {
            self.bytes.len()
        }

        fn get_uint8(&self, index: usize) -> u8 {
            self.bytes[index]
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_data_view() {
            let mut view = DataView::new(3);
            view.set_uint8(0, 7);
            view.set_uint8(5, 9);
            assert_eq!(view.byte_length(), 3);
            assert_eq!(view.get_uint8(0), 7);
            assert_eq!(view.as_bytes(), &[7, 0, 0]);
        }
    }
}
