//! Positional integer and float accessors.
//!
//! Every accessor takes an `assert` flag. With it set, the offset is checked
//! against the buffer length and written values against the field's range
//! before any byte is touched. Without it nothing is validated: bytes past
//! the end read as 0, writes past the end are dropped and out-of-range
//! integers wrap modulo the field width.

use crate::buffer::Buffer;
use crate::error::{BufferError, Result};
use crate::ieee754::{self, FloatBytes};
use crate::int::{self, IntFormat};

const U8: IntFormat = IntFormat::new(1, false, false);
const I8: IntFormat = IntFormat::new(1, true, false);
const U16_LE: IntFormat = IntFormat::new(2, false, false);
const U16_BE: IntFormat = IntFormat::new(2, false, true);
const I16_LE: IntFormat = IntFormat::new(2, true, false);
const I16_BE: IntFormat = IntFormat::new(2, true, true);
const U32_LE: IntFormat = IntFormat::new(4, false, false);
const U32_BE: IntFormat = IntFormat::new(4, false, true);
const I32_LE: IntFormat = IntFormat::new(4, true, false);
const I32_BE: IntFormat = IntFormat::new(4, true, true);

impl Buffer {
    fn check_bounds(&self, offset: usize, size: usize, message: &'static str) -> Result<()> {
        match offset.checked_add(size) {
            Some(end) if end <= self.len() => Ok(()),
            _ => Err(BufferError::Range(message)),
        }
    }

    /// Copies `N` bytes starting at `offset`; missing bytes read as 0.
    fn gather<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        for (k, slot) in out.iter_mut().enumerate() {
            if let Some(&byte) = offset.checked_add(k).and_then(|i| self.data.get(i)) {
                *slot = byte;
            }
        }
        out
    }

    /// Stores `bytes` starting at `offset`; bytes past the end are dropped.
    fn scatter(&mut self, offset: usize, bytes: &[u8]) {
        for (k, &byte) in bytes.iter().enumerate() {
            if let Some(slot) = offset.checked_add(k).and_then(|i| self.data.get_mut(i)) {
                *slot = byte;
            }
        }
    }

    fn read_uint<const N: usize>(&self, offset: usize, big_endian: bool, assert: bool) -> Result<u32> {
        if assert {
            self.check_bounds(offset, N, "trying to read beyond buffer length")?;
        }
        Ok(int::unpack_uint(&self.gather::<N>(offset), big_endian))
    }

    fn read_int<const N: usize>(&self, offset: usize, big_endian: bool, assert: bool) -> Result<i32> {
        let value = self.read_uint::<N>(offset, big_endian, assert)?;
        Ok(int::to_signed(value, N as u32 * 8))
    }

    fn write_int<const N: usize>(
        &mut self,
        value: f64,
        offset: usize,
        format: IntFormat,
        assert: bool,
    ) -> Result<()> {
        if assert {
            self.check_bounds(offset, N, "trying to write beyond buffer length")?;
            int::verify_int(value, format)?;
        }
        let mut bytes = [0u8; N];
        int::pack_uint(int::to_unsigned(value, format.bits()), &mut bytes, format.big_endian);
        self.scatter(offset, &bytes);
        Ok(())
    }

    fn read_float<const N: usize>(&self, offset: usize, big_endian: bool, assert: bool) -> Result<f64>
    where
        [u8; N]: FloatBytes,
    {
        if assert {
            self.check_bounds(offset, N, "trying to read beyond buffer length")?;
        }
        Ok(ieee754::read_ieee754(&self.gather::<N>(offset), big_endian))
    }

    fn write_float<const N: usize>(
        &mut self,
        value: f64,
        offset: usize,
        big_endian: bool,
        assert: bool,
    ) -> Result<()>
    where
        [u8; N]: FloatBytes,
    {
        if assert {
            self.check_bounds(offset, N, "trying to write beyond buffer length")?;
            int::verify_ieee754(value, <[u8; N] as FloatBytes>::MAX)?;
        }
        let mut bytes = [0u8; N];
        ieee754::write_ieee754(&mut bytes, value, big_endian);
        self.scatter(offset, &bytes);
        Ok(())
    }

    // -- reads ---------------------------------------------------------------

    pub fn read_u8(&self, offset: usize, assert: bool) -> Result<u8> {
        Ok(self.read_uint::<1>(offset, false, assert)? as u8)
    }

    pub fn read_i8(&self, offset: usize, assert: bool) -> Result<i8> {
        Ok(self.read_int::<1>(offset, false, assert)? as i8)
    }

    pub fn read_u16_le(&self, offset: usize, assert: bool) -> Result<u16> {
        Ok(self.read_uint::<2>(offset, false, assert)? as u16)
    }

    pub fn read_u16_be(&self, offset: usize, assert: bool) -> Result<u16> {
        Ok(self.read_uint::<2>(offset, true, assert)? as u16)
    }

    pub fn read_i16_le(&self, offset: usize, assert: bool) -> Result<i16> {
        Ok(self.read_int::<2>(offset, false, assert)? as i16)
    }

    pub fn read_i16_be(&self, offset: usize, assert: bool) -> Result<i16> {
        Ok(self.read_int::<2>(offset, true, assert)? as i16)
    }

    pub fn read_u32_le(&self, offset: usize, assert: bool) -> Result<u32> {
        self.read_uint::<4>(offset, false, assert)
    }

    pub fn read_u32_be(&self, offset: usize, assert: bool) -> Result<u32> {
        self.read_uint::<4>(offset, true, assert)
    }

    pub fn read_i32_le(&self, offset: usize, assert: bool) -> Result<i32> {
        self.read_int::<4>(offset, false, assert)
    }

    pub fn read_i32_be(&self, offset: usize, assert: bool) -> Result<i32> {
        self.read_int::<4>(offset, true, assert)
    }

    pub fn read_f32_le(&self, offset: usize, assert: bool) -> Result<f32> {
        Ok(self.read_float::<4>(offset, false, assert)? as f32)
    }

    pub fn read_f32_be(&self, offset: usize, assert: bool) -> Result<f32> {
        Ok(self.read_float::<4>(offset, true, assert)? as f32)
    }

    pub fn read_f64_le(&self, offset: usize, assert: bool) -> Result<f64> {
        self.read_float::<8>(offset, false, assert)
    }

    pub fn read_f64_be(&self, offset: usize, assert: bool) -> Result<f64> {
        self.read_float::<8>(offset, true, assert)
    }

    // -- writes --------------------------------------------------------------

    pub fn write_u8(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<1>(value.into(), offset, U8, assert)
    }

    pub fn write_i8(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<1>(value.into(), offset, I8, assert)
    }

    pub fn write_u16_le(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<2>(value.into(), offset, U16_LE, assert)
    }

    pub fn write_u16_be(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<2>(value.into(), offset, U16_BE, assert)
    }

    pub fn write_i16_le(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<2>(value.into(), offset, I16_LE, assert)
    }

    pub fn write_i16_be(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<2>(value.into(), offset, I16_BE, assert)
    }

    pub fn write_u32_le(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<4>(value.into(), offset, U32_LE, assert)
    }

    pub fn write_u32_be(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<4>(value.into(), offset, U32_BE, assert)
    }

    pub fn write_i32_le(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<4>(value.into(), offset, I32_LE, assert)
    }

    pub fn write_i32_be(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_int::<4>(value.into(), offset, I32_BE, assert)
    }

    pub fn write_f32_le(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_float::<4>(value.into(), offset, false, assert)
    }

    pub fn write_f32_be(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_float::<4>(value.into(), offset, true, assert)
    }

    pub fn write_f64_le(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_float::<8>(value.into(), offset, false, assert)
    }

    pub fn write_f64_be(&mut self, value: impl Into<f64>, offset: usize, assert: bool) -> Result<()> {
        self.write_float::<8>(value.into(), offset, true, assert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u8_bounds() {
        let buf = Buffer::alloc(5);
        assert!(buf.read_u8(4, true).is_ok());
        assert_eq!(
            buf.read_u8(5, true),
            Err(BufferError::Range("trying to read beyond buffer length"))
        );
    }

    #[test]
    fn test_unchecked_read_past_end_is_zero() {
        let buf = Buffer::from_bytes(&[0x12]);
        assert_eq!(buf.read_u16_be(0, false), Ok(0x1200));
        assert_eq!(buf.read_u32_le(usize::MAX, false), Ok(0));
    }

    #[test]
    fn test_unchecked_write_past_end_is_dropped() {
        let mut buf = Buffer::alloc(2);
        buf.write_u32_be(0x0102_0304, 0, false).unwrap();
        assert_eq!(buf.as_bytes(), &[1, 2]);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_unchecked_write_wraps_value() {
        let mut buf = Buffer::alloc(1);
        buf.write_u8(300, 0, false).unwrap();
        assert_eq!(buf[0], 44);
    }

    #[test]
    fn test_failed_write_leaves_buffer_untouched() {
        let mut buf = Buffer::from_bytes(&[0xAA; 4]);
        assert!(buf.write_u32_le(-1, 0, true).is_err());
        assert!(buf.write_u16_be(1, 3, true).is_err());
        assert_eq!(buf.as_bytes(), &[0xAA; 4]);
    }

    #[test]
    fn test_check_bounds_overflow() {
        let buf = Buffer::alloc(4);
        assert!(buf.check_bounds(usize::MAX, 2, "overflow").is_err());
    }
}
