//! IEEE-754 packing and unpacking for single (4-byte) and double (8-byte)
//! precision.
//!
//! Both directions do the mantissa/exponent arithmetic by hand rather than
//! reinterpreting bits, so the same routine serves both widths. The width is
//! chosen by the byte array type: `[u8; 4]` for single, `[u8; 8]` for double.

/// Mantissa length of a single-precision float.
pub const F32_MANTISSA_BITS: u32 = 23;
/// Mantissa length of a double-precision float.
pub const F64_MANTISSA_BITS: u32 = 52;

/// Largest finite single-precision magnitude.
pub const F32_MAX: f64 = 3.4028234663852886e38;
/// Largest finite double-precision magnitude.
pub const F64_MAX: f64 = f64::MAX;

mod sealed {
    pub trait Sealed {}

    impl Sealed for [u8; 4] {}
    impl Sealed for [u8; 8] {}
}

/// Byte arrays that hold a packed float: `[u8; 4]` and `[u8; 8]`.
pub trait FloatBytes: sealed::Sealed + AsRef<[u8]> + AsMut<[u8]> {
    /// Mantissa length in bits.
    const MANT_LEN: u32;
    /// Largest finite magnitude.
    const MAX: f64;
}

impl FloatBytes for [u8; 4] {
    const MANT_LEN: u32 = F32_MANTISSA_BITS;
    const MAX: f64 = F32_MAX;
}

impl FloatBytes for [u8; 8] {
    const MANT_LEN: u32 = F64_MANTISSA_BITS;
    const MAX: f64 = F64_MAX;
}

/// Exact `2^n` over the whole double range, including subnormals.
fn pow2(n: i32) -> f64 {
    if n > 1023 {
        f64::INFINITY
    } else if n >= -1022 {
        f64::from_bits(((n + 1023) as u64) << 52)
    } else if n >= -1074 {
        f64::from_bits(1u64 << (n + 1074))
    } else {
        0.0
    }
}

struct Layout {
    n_bytes: usize,
    mant_len: u32,
    e_max: i32,
    e_bias: i32,
}

impl Layout {
    fn of<B: FloatBytes>() -> Self {
        let n_bytes = std::mem::size_of::<B>();
        let e_len = n_bytes as u32 * 8 - B::MANT_LEN - 1;
        let e_max = (1i32 << e_len) - 1;
        Self {
            n_bytes,
            mant_len: B::MANT_LEN,
            e_max,
            e_bias: e_max >> 1,
        }
    }
}

/// Unpacks a float from a 4- or 8-byte array.
///
/// # Example
///
/// ```
/// use bytebuf::ieee754::read_ieee754;
///
/// assert_eq!(read_ieee754(&[0x3fu8, 0x80, 0x00, 0x00], true), 1.0);
/// assert_eq!(read_ieee754(&[0x00u8, 0x00, 0x80, 0x3f], false), 1.0);
/// assert_eq!(read_ieee754(&[0u8, 0, 0, 0, 0, 0, 0xf0, 0xbf], false), -1.0);
/// ```
pub fn read_ieee754<B: FloatBytes>(bytes: &B, big_endian: bool) -> f64 {
    let layout = Layout::of::<B>();
    let mant_len = layout.mant_len;
    let bytes = bytes.as_ref();
    let fold = |acc: u64, &byte: &u8| (acc << 8) | u64::from(byte);
    let bits = if big_endian {
        bytes.iter().fold(0, fold)
    } else {
        bytes.iter().rev().fold(0, fold)
    };

    let negative = (bits >> (layout.n_bytes * 8 - 1)) & 1 == 1;
    let mut e = ((bits >> mant_len) as i32) & layout.e_max;
    let mut m = bits & ((1u64 << mant_len) - 1);

    if e == 0 {
        e = 1 - layout.e_bias;
    } else if e == layout.e_max {
        return if m != 0 {
            f64::NAN
        } else if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    } else {
        m += 1u64 << mant_len;
        e -= layout.e_bias;
    }

    let magnitude = m as f64 * pow2(e - mant_len as i32);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Packs `value` into a 4- or 8-byte array.
///
/// Single precision rounds to nearest through a precomputed rounding term;
/// values beyond the width's range become infinities.
///
/// # Example
///
/// ```
/// use bytebuf::ieee754::write_ieee754;
///
/// let mut out = [0u8; 8];
/// write_ieee754(&mut out, -2.0, true);
/// assert_eq!(out, [0xc0, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn write_ieee754<B: FloatBytes>(out: &mut B, value: f64, big_endian: bool) {
    let layout = Layout::of::<B>();
    let mant_len = layout.mant_len;
    let out = out.as_mut();
    let rt = if mant_len == F32_MANTISSA_BITS {
        pow2(-24) - pow2(-77)
    } else {
        0.0
    };
    let negative = value < 0.0 || (value == 0.0 && value.is_sign_negative());
    let mut value = value.abs();

    let (e, m): (i32, u64) = if value.is_nan() {
        (layout.e_max, 1)
    } else if value.is_infinite() {
        (layout.e_max, 0)
    } else if value == 0.0 {
        (0, 0)
    } else {
        let mut e = value.log2().floor() as i32;
        let mut c = pow2(-e);
        if value * c < 1.0 {
            e -= 1;
            c *= 2.0;
        }
        if e + layout.e_bias >= 1 {
            value += rt / c;
        } else {
            value += rt * pow2(1 - layout.e_bias);
        }
        if value * c >= 2.0 {
            e += 1;
            c /= 2.0;
        }

        if e + layout.e_bias >= layout.e_max {
            (layout.e_max, 0)
        } else if e + layout.e_bias >= 1 {
            let m = (value * c - 1.0) * pow2(mant_len as i32);
            (e + layout.e_bias, m as u64)
        } else {
            let m = value * pow2(layout.e_bias - 1) * pow2(mant_len as i32);
            (0, m as u64)
        }
    };

    let sign_bit = u64::from(negative) << (layout.n_bytes * 8 - 1);
    let bits = sign_bit | ((e as u64) << mant_len) | m;
    for k in 0..layout.n_bytes {
        let byte = (bits >> (8 * k)) as u8;
        if big_endian {
            out[layout.n_bytes - 1 - k] = byte;
        } else {
            out[k] = byte;
        }
    }
}
