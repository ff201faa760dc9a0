//! JSON interop: the `{"type":"Buffer","data":[..]}` shape and dynamic
//! construction from arbitrary JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::buffer::{Buffer, Source};
use crate::error::{BufferError, Result};

/// Serialized form of a [`Buffer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferJson {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<u8>,
}

impl From<Buffer> for BufferJson {
    fn from(buf: Buffer) -> Self {
        Self {
            kind: "Buffer".to_string(),
            data: buf.into_vec(),
        }
    }
}

impl TryFrom<BufferJson> for Buffer {
    type Error = BufferError;

    fn try_from(json: BufferJson) -> Result<Self> {
        if json.kind != "Buffer" {
            return Err(BufferError::InvalidSource(format!("object of type {:?}", json.kind)));
        }
        Ok(Buffer::from(json.data))
    }
}

impl Serialize for Buffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        BufferJson::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Buffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = BufferJson::deserialize(deserializer)?;
        Buffer::try_from(json).map_err(serde::de::Error::custom)
    }
}

impl Buffer {
    /// Builds a buffer from a JSON value of any shape.
    ///
    /// - a non-negative integer: zero-filled buffer of that many bytes
    /// - a string: text decoded with `encoding` (`utf8` when `None`)
    /// - an array of integers: one byte per element, wrapped modulo 256
    /// - `{"type":"Buffer","data":[..]}`: the listed bytes
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidSource`] for any other shape, plus the decoding
    /// errors of [`Buffer::from_string`].
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::Buffer;
    /// use serde_json::json;
    ///
    /// assert_eq!(Buffer::from_json(&json!(2), None).unwrap().as_bytes(), &[0, 0]);
    /// assert_eq!(Buffer::from_json(&json!([1, 256, -1]), None).unwrap().as_bytes(), &[1, 0, 255]);
    /// assert_eq!(Buffer::from_json(&json!("ff"), Some("hex")).unwrap().as_bytes(), &[255]);
    /// assert!(Buffer::from_json(&json!(true), None).is_err());
    /// ```
    pub fn from_json(value: &Value, encoding: Option<&str>) -> Result<Self> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(size) => Ok(Buffer::alloc(size as usize)),
                None => Err(BufferError::InvalidSource(format!("number {n}"))),
            },
            Value::String(s) => Buffer::from_source(Source::Text(s, encoding)),
            Value::Array(items) => {
                let bytes = items.iter().map(json_byte).collect::<Result<Vec<u8>>>()?;
                Buffer::from_source(Source::Bytes(&bytes))
            }
            Value::Object(_) => {
                let json = BufferJson::deserialize(value)
                    .map_err(|_| BufferError::InvalidSource("object".to_string()))?;
                Buffer::try_from(json)
            }
            Value::Bool(b) => Err(BufferError::InvalidSource(format!("boolean {b}"))),
            Value::Null => Err(BufferError::InvalidSource("null".to_string())),
        }
    }
}

fn json_byte(item: &Value) -> Result<u8> {
    item.as_i64()
        .map(|n| (n & 0xFF) as u8)
        .or_else(|| item.as_u64().map(|n| (n & 0xFF) as u8))
        .ok_or_else(|| BufferError::InvalidSource(format!("array element {item}")))
}
