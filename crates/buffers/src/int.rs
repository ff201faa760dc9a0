//! Fixed-width integer packing and value verification.

use crate::error::{BufferError, Result};

/// Width, signedness and byte order of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntFormat {
    /// Width in bytes: 1, 2 or 4.
    pub size: usize,
    pub signed: bool,
    pub big_endian: bool,
}

impl IntFormat {
    pub const fn new(size: usize, signed: bool, big_endian: bool) -> Self {
        Self {
            size,
            signed,
            big_endian,
        }
    }

    pub const fn bits(self) -> u32 {
        self.size as u32 * 8
    }

    /// Smallest writable value.
    pub fn min(self) -> f64 {
        if self.signed {
            -pow2(self.bits() - 1)
        } else {
            0.0
        }
    }

    /// Largest writable value.
    pub fn max(self) -> f64 {
        if self.signed {
            pow2(self.bits() - 1) - 1.0
        } else {
            pow2(self.bits()) - 1.0
        }
    }
}

fn pow2(n: u32) -> f64 {
    (1u64 << n) as f64
}

/// Combines `bytes` into an unsigned value by weighted sum in the given order.
///
/// # Example
///
/// ```
/// use bytebuf::int::unpack_uint;
///
/// assert_eq!(unpack_uint(&[0x12, 0x34], true), 0x1234);
/// assert_eq!(unpack_uint(&[0x12, 0x34], false), 0x3412);
/// ```
pub fn unpack_uint(bytes: &[u8], big_endian: bool) -> u32 {
    let fold = |acc: u32, &byte: &u8| (acc << 8) | u32::from(byte);
    if big_endian {
        bytes.iter().fold(0, fold)
    } else {
        bytes.iter().rev().fold(0, fold)
    }
}

/// Splits `value` into `out`, most-significant byte first when `big_endian`.
pub fn pack_uint(value: u32, out: &mut [u8], big_endian: bool) {
    let n = out.len();
    for k in 0..n {
        let byte = (value >> (8 * k)) as u8;
        if big_endian {
            out[n - 1 - k] = byte;
        } else {
            out[k] = byte;
        }
    }
}

/// Reinterprets the low `bits` of `value` as two's complement.
///
/// # Example
///
/// ```
/// use bytebuf::int::to_signed;
///
/// assert_eq!(to_signed(0xFF, 8), -1);
/// assert_eq!(to_signed(0x7FFF, 16), 32767);
/// assert_eq!(to_signed(0x8000_0000, 32), i32::MIN);
/// ```
pub fn to_signed(value: u32, bits: u32) -> i32 {
    let value = i64::from(value);
    let half = 1i64 << (bits - 1);
    if value >= half {
        (value - (1i64 << bits)) as i32
    } else {
        value as i32
    }
}

/// Maps a number onto the unsigned bit pattern of a `bits`-wide field.
///
/// Negative values become `2^bits + value`. The fractional part is dropped
/// and values outside the field wrap modulo `2^bits`; NaN maps to 0.
pub fn to_unsigned(value: f64, bits: u32) -> u32 {
    (value as i64).rem_euclid(1i64 << bits) as u32
}

/// Checks that `value` is an integral number within `[min, max]`.
///
/// # Errors
///
/// - [`BufferError::Type`] for NaN
/// - [`BufferError::Range`] for values outside the bounds
/// - [`BufferError::FractionalValue`] for non-integral values
pub fn verify_int(value: f64, format: IntFormat) -> Result<()> {
    if value.is_nan() {
        return Err(BufferError::Type("cannot write a non-number as a number"));
    }
    let (min, max) = (format.min(), format.max());
    if format.signed {
        if value < min {
            return Err(BufferError::Range("value smaller than minimum allowed value"));
        }
        if value > max {
            return Err(BufferError::Range("value larger than maximum allowed value"));
        }
    } else {
        if value < 0.0 {
            return Err(BufferError::Range(
                "specified a negative value for writing an unsigned value",
            ));
        }
        if value > max {
            return Err(BufferError::Range("value is larger than maximum value for type"));
        }
    }
    if value.floor() != value {
        return Err(BufferError::FractionalValue(value));
    }
    Ok(())
}

/// Checks that a finite `value` does not exceed `max` in magnitude.
///
/// NaN and the infinities are accepted: they have dedicated encodings.
pub fn verify_ieee754(value: f64, max: f64) -> Result<()> {
    if value.is_finite() {
        if value > max {
            return Err(BufferError::Range("value larger than maximum allowed value"));
        }
        if value < -max {
            return Err(BufferError::Range("value smaller than minimum allowed value"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const U8: IntFormat = IntFormat::new(1, false, false);
    const I16: IntFormat = IntFormat::new(2, true, false);
    const U32: IntFormat = IntFormat::new(4, false, true);
    const I32: IntFormat = IntFormat::new(4, true, true);

    #[test]
    fn test_bounds() {
        assert_eq!((U8.min(), U8.max()), (0.0, 255.0));
        assert_eq!((I16.min(), I16.max()), (-32768.0, 32767.0));
        assert_eq!((U32.min(), U32.max()), (0.0, 4294967295.0));
        assert_eq!((I32.min(), I32.max()), (-2147483648.0, 2147483647.0));
    }

    #[test]
    fn test_pack_unpack() {
        let mut out = [0u8; 4];
        pack_uint(0x0102_0304, &mut out, true);
        assert_eq!(out, [1, 2, 3, 4]);
        assert_eq!(unpack_uint(&out, true), 0x0102_0304);
        pack_uint(0x0102_0304, &mut out, false);
        assert_eq!(out, [4, 3, 2, 1]);
        assert_eq!(unpack_uint(&out, false), 0x0102_0304);
    }

    #[test]
    fn test_to_unsigned() {
        assert_eq!(to_unsigned(-1.0, 8), 255);
        assert_eq!(to_unsigned(-32768.0, 16), 0x8000);
        assert_eq!(to_unsigned(-1.0, 32), u32::MAX);
        assert_eq!(to_unsigned(300.0, 8), 44);
        assert_eq!(to_unsigned(f64::NAN, 16), 0);
    }

    #[test]
    fn test_verify_int() {
        assert!(verify_int(255.0, U8).is_ok());
        assert_eq!(
            verify_int(256.0, U8),
            Err(BufferError::Range("value is larger than maximum value for type"))
        );
        assert!(matches!(verify_int(-1.0, U8), Err(BufferError::Range(_))));
        assert!(matches!(verify_int(-32769.0, I16), Err(BufferError::Range(_))));
        assert_eq!(verify_int(1.5, I16), Err(BufferError::FractionalValue(1.5)));
        assert!(matches!(verify_int(f64::NAN, U32), Err(BufferError::Type(_))));
        assert!(matches!(verify_int(f64::INFINITY, I32), Err(BufferError::Range(_))));
    }

    #[test]
    fn test_verify_ieee754() {
        assert!(verify_ieee754(f64::NAN, 1.0).is_ok());
        assert!(verify_ieee754(f64::NEG_INFINITY, 1.0).is_ok());
        assert!(verify_ieee754(-1.0, 1.0).is_ok());
        assert!(verify_ieee754(1.5, 1.0).is_err());
        assert!(verify_ieee754(-1.5, 1.0).is_err());
    }
}
