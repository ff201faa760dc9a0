//! The fixed-length byte container and its construction, view and copy
//! operations.

use std::any::Any;
use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::encoding::Encoding;
use crate::error::{BufferError, Result};
use crate::int;
use crate::tracing_compat::{debug, trace};
use crate::view::ByteView;

/// Number of bytes shown by the `Debug` representation.
const DEBUG_MAX_BYTES: usize = 50;

/// Input accepted by [`Buffer::from_source`].
#[derive(Clone, Copy)]
pub enum Source<'a> {
    /// A zero-filled buffer of this many bytes.
    Size(usize),
    /// Text decoded with an encoding selector (`utf8` when `None`).
    Text(&'a str, Option<&'a str>),
    /// A byte sequence copied element-wise.
    Bytes(&'a [u8]),
    /// A foreign binary view copied through its 8-bit accessor.
    View(&'a dyn ByteView),
}

impl Source<'_> {
    /// Short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Size(_) => "size",
            Source::Text(..) => "text",
            Source::Bytes(_) => "bytes",
            Source::View(_) => "view",
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(data: &'a str) -> Self {
        Source::Text(data, None)
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(bytes)
    }
}

impl From<usize> for Source<'_> {
    fn from(size: usize) -> Self {
        Source::Size(size)
    }
}

/// A fixed-length, exclusively owned sequence of bytes.
///
/// The length is set at construction and never changes. Derived buffers
/// ([`slice`](Buffer::slice), [`concat`](Buffer::concat)) always own fresh
/// storage.
///
/// # Example
///
/// ```
/// use bytebuf::Buffer;
///
/// let mut buf = Buffer::alloc(4);
/// buf.write_u16_be(0xCAFE, 0, true).unwrap();
/// assert_eq!(buf.to_string(Some("hex"), None, None).unwrap(), "cafe0000");
///
/// let copy = buf.slice(None, Some(2));
/// buf.fill(0, None, None).unwrap();
/// assert_eq!(copy.as_bytes(), &[0xCA, 0xFE]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Buffer {
    pub(crate) data: Box<[u8]>,
}

impl Buffer {
    /// Builds a buffer from any accepted source.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnsupportedEncoding`], [`BufferError::MalformedInput`] or
    /// [`BufferError::IllegalCharacter`] when decoding text fails.
    pub fn from_source(source: Source<'_>) -> Result<Self> {
        let buf = match source {
            Source::Size(size) => Self::alloc(size),
            Source::Text(data, encoding) => Self::from_string(data, encoding)?,
            Source::Bytes(bytes) => Self::from_bytes(bytes),
            Source::View(view) => Self::from_view(view),
        };
        trace!(source = source.kind(), len = buf.len(), "constructed buffer");
        Ok(buf)
    }

    /// A zero-filled buffer of `size` bytes.
    pub fn alloc(size: usize) -> Self {
        Self {
            data: vec![0; size].into_boxed_slice(),
        }
    }

    /// Decodes `data` with the given encoding selector (`utf8` when `None`).
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// assert_eq!(Buffer::from_string("QQE=", Some("base64")).unwrap().as_bytes(), &[0x41, 0x01]);
    /// assert!(Buffer::from_string("abc", Some("latin1")).is_err());
    /// ```
    pub fn from_string(data: &str, encoding: Option<&str>) -> Result<Self> {
        let encoding = Encoding::resolve(encoding)?;
        Ok(Self::from(encoding.decode(data)?))
    }

    /// Copies a byte sequence.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from(bytes)
    }

    /// Copies a foreign view byte by byte.
    pub fn from_view(view: &(impl ByteView + ?Sized)) -> Self {
        let data: Vec<u8> = (0..view.byte_length()).map(|i| view.get_uint8(i)).collect();
        Self::from(data)
    }

    /// Returns `true` when `value` is a [`Buffer`].
    pub fn is_buffer(value: &dyn Any) -> bool {
        value.is::<Buffer>()
    }

    /// Byte length of the buffer `source` would construct.
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::{Buffer, Source};
    ///
    /// assert_eq!(Buffer::byte_length(Source::Text("héllo", None)).unwrap(), 6);
    /// assert_eq!(Buffer::byte_length(Source::Text("00ff", Some("hex"))).unwrap(), 2);
    /// ```
    pub fn byte_length(source: Source<'_>) -> Result<usize> {
        Ok(Self::from_source(source)?.len())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_vec()
    }

    /// Copies `[source_start, source_end)` of this buffer into `target` at
    /// `target_start`.
    ///
    /// Returns 0 when there is nothing to copy, otherwise the target's
    /// (unchanged) length. A range larger than the room left in the target is
    /// truncated to fit.
    ///
    /// # Errors
    ///
    /// [`BufferError::Range`] when `source_end < source_start` or a position
    /// falls outside its buffer.
    pub fn copy(
        &self,
        target: &mut Buffer,
        target_start: Option<usize>,
        source_start: Option<usize>,
        source_end: Option<usize>,
    ) -> Result<usize> {
        let target_len = target.len();
        match copy_range(self.len(), target_len, target_start, source_start, source_end)? {
            Some((to, from)) => {
                target.data[to..to + from.len()].copy_from_slice(&self.data[from]);
                Ok(target_len)
            }
            None => Ok(0),
        }
    }

    /// [`copy`](Buffer::copy) with this buffer as its own target.
    ///
    /// Overlapping ranges are handled as if the source were snapshotted first.
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let mut buf = Buffer::from_bytes(&[1, 2, 3, 4, 5]);
    /// buf.copy_within(Some(1), Some(0), Some(4)).unwrap();
    /// assert_eq!(buf.as_bytes(), &[1, 1, 2, 3, 4]);
    /// ```
    pub fn copy_within(
        &mut self,
        target_start: Option<usize>,
        source_start: Option<usize>,
        source_end: Option<usize>,
    ) -> Result<usize> {
        let len = self.len();
        match copy_range(len, len, target_start, source_start, source_end)? {
            Some((to, from)) => {
                self.data.copy_within(from, to);
                Ok(len)
            }
            None => Ok(0),
        }
    }

    /// Clamps `start`/`end` to the buffer, yielding an empty range when
    /// `end < start`.
    fn clamp(&self, start: Option<usize>, end: Option<usize>) -> Range<usize> {
        let len = self.len();
        let start = start.unwrap_or(0).min(len);
        let end = end.unwrap_or(len).min(len).max(start);
        start..end
    }

    /// Encodes `[start, end)` as text (`utf8` when `encoding` is `None`).
    ///
    /// Positions are clamped to the buffer.
    pub fn to_string(
        &self,
        encoding: Option<&str>,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<String> {
        let encoding = Encoding::resolve(encoding)?;
        Ok(encoding.encode(&self.data[self.clamp(start, end)]))
    }

    /// Copies `[start, end)` into a plain vector. Positions are clamped.
    pub fn to_array(&self, start: Option<usize>, end: Option<usize>) -> Vec<u8> {
        self.data[self.clamp(start, end)].to_vec()
    }

    /// Copies `[start, end)` into a foreign view. Positions are clamped.
    #[cfg(feature = "data-view")]
    pub fn to_data_view(&self, start: Option<usize>, end: Option<usize>) -> crate::DataView {
        crate::DataView::from(self.to_array(start, end))
    }

    /// A new, independently owned buffer holding a copy of `[start, end)`.
    /// Positions are clamped.
    pub fn slice(&self, start: Option<usize>, end: Option<usize>) -> Buffer {
        Buffer::from(self.to_array(start, end))
    }

    /// Decodes `data` and copies it in at `offset`.
    ///
    /// At most `length` bytes (default: the room left after `offset`) are
    /// written. Returns the number of bytes actually written.
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let mut buf = Buffer::alloc(4);
    /// assert_eq!(buf.write("abcdef", Some(1), None, None).unwrap(), 3);
    /// assert_eq!(buf.as_bytes(), b"\0abc");
    /// ```
    pub fn write(
        &mut self,
        data: &str,
        offset: Option<usize>,
        length: Option<usize>,
        encoding: Option<&str>,
    ) -> Result<usize> {
        let scratch = Buffer::from_source(Source::Text(data, encoding))?;
        let offset = offset.unwrap_or(0);
        if offset > self.len() {
            return Err(BufferError::Range("offset out of bounds"));
        }
        let remaining = self.len() - offset;
        let length = length.map_or(remaining, |length| length.min(remaining));
        let written = length.min(scratch.len());
        if written < scratch.len() {
            debug!(
                decoded = scratch.len(),
                written, "write truncated to fit the buffer"
            );
        }
        self.data[offset..offset + written].copy_from_slice(&scratch.data[..written]);
        Ok(written)
    }

    /// Sets every byte of `[start, end)` to `value`.
    ///
    /// The value is truncated to its low 8 bits.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Type`] for a NaN value
    /// - [`BufferError::Range`] when `end < start` or a position is outside the buffer
    pub fn fill(
        &mut self,
        value: impl Into<FillValue>,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<()> {
        let byte = value.into().to_byte()?;
        let len = self.len();
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(len);

        if end < start {
            return Err(BufferError::Range("end < start"));
        }
        if end == start || len == 0 {
            return Ok(());
        }
        if start >= len {
            return Err(BufferError::Range("start out of bounds"));
        }
        if end > len {
            return Err(BufferError::Range("end out of bounds"));
        }

        self.data[start..end].fill(byte);
        Ok(())
    }

    /// Joins `list` into one buffer.
    ///
    /// An empty list yields an empty buffer and a single-element list yields
    /// that element itself. Otherwise the bytes are copied into fresh storage
    /// of `total_length` bytes (default: the sum of the lengths), truncating
    /// or zero-filling as needed.
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let joined = Buffer::concat(vec![Buffer::from_bytes(&[1, 2]), Buffer::from_bytes(&[3])], None);
    /// assert_eq!(joined.as_bytes(), &[1, 2, 3]);
    /// ```
    pub fn concat(mut list: Vec<Buffer>, total_length: Option<usize>) -> Buffer {
        if list.len() <= 1 {
            return list.pop().unwrap_or_default();
        }

        let total = total_length.unwrap_or_else(|| list.iter().map(Buffer::len).sum());
        let mut out = Buffer::alloc(total);
        let mut pos = 0;
        for buf in &list {
            let n = buf.len().min(total - pos);
            out.data[pos..pos + n].copy_from_slice(&buf.data[..n]);
            pos += n;
            if pos == total {
                break;
            }
        }
        trace!(parts = list.len(), len = total, "concatenated buffers");
        out
    }
}

/// Resolves copy positions into `(target_start, source_range)`, or `None`
/// when there is nothing to copy.
fn copy_range(
    source_len: usize,
    target_len: usize,
    target_start: Option<usize>,
    source_start: Option<usize>,
    source_end: Option<usize>,
) -> Result<Option<(usize, Range<usize>)>> {
    let target_start = target_start.unwrap_or(0);
    let source_start = source_start.unwrap_or(0);
    let mut source_end = source_end.unwrap_or(source_len);

    if source_end < source_start {
        return Err(BufferError::Range("sourceEnd < sourceStart"));
    }
    if source_end == source_start || target_len == 0 || source_len == 0 {
        return Ok(None);
    }
    if target_start >= target_len {
        return Err(BufferError::Range("targetStart out of bounds"));
    }
    if source_start >= source_len {
        return Err(BufferError::Range("sourceStart out of bounds"));
    }
    if source_end > source_len {
        return Err(BufferError::Range("sourceEnd out of bounds"));
    }

    let room = target_len - target_start;
    if room < source_end - source_start {
        debug!(
            requested = source_end - source_start,
            room, "copy truncated to fit the target"
        );
        source_end = source_start + room;
    }
    Ok(Some((target_start, source_start..source_end)))
}

/// Value accepted by [`Buffer::fill`]: a number or a character.
///
/// A number stores its low 8 bits. A character stores the low 8 bits of its
/// first UTF-16 code unit: the code point itself inside the Basic
/// Multilingual Plane, the high surrogate outside it (`'\u{1F600}'` stores
/// `0x3D` from `0xD83D`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillValue {
    Number(f64),
    Char(char),
}

impl FillValue {
    fn to_byte(self) -> Result<u8> {
        match self {
            FillValue::Number(n) if n.is_nan() => Err(BufferError::Type("value is not a number")),
            FillValue::Number(n) => Ok(int::to_unsigned(n, 8) as u8),
            FillValue::Char(ch) => Ok(ch.encode_utf16(&mut [0u16; 2])[0] as u8),
        }
    }
}

impl Default for FillValue {
    fn default() -> Self {
        FillValue::Number(0.0)
    }
}

impl From<f64> for FillValue {
    fn from(n: f64) -> Self {
        FillValue::Number(n)
    }
}

impl From<i32> for FillValue {
    fn from(n: i32) -> Self {
        FillValue::Number(f64::from(n))
    }
}

impl From<u8> for FillValue {
    fn from(n: u8) -> Self {
        FillValue::Number(f64::from(n))
    }
}

impl From<char> for FillValue {
    fn from(ch: char) -> Self {
        FillValue::Char(ch)
    }
}

/// The first character is used, under the [`FillValue::Char`] rule; an empty
/// string fills with 0.
impl From<&str> for FillValue {
    fn from(s: &str) -> Self {
        s.chars().next().map_or_else(FillValue::default, FillValue::Char)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            data: bytes.into(),
        }
    }
}

impl From<Buffer> for Vec<u8> {
    fn from(buf: Buffer) -> Self {
        buf.into_vec()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Index<usize> for Buffer {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Buffer {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.data[index]
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Buffer")?;
        for byte in self.data.iter().take(DEBUG_MAX_BYTES) {
            write!(f, " {byte:02x}")?;
        }
        if self.len() > DEBUG_MAX_BYTES {
            write!(f, " ... {} more bytes", self.len() - DEBUG_MAX_BYTES)?;
        }
        f.write_str(">")
    }
}
