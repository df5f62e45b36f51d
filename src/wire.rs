//! Wire-level primitives for the Bebop length-prefixed convention.
//!
//! Strings are written as a 4-byte little-endian unsigned byte length followed
//! by the raw UTF-8 bytes, with no terminator. `u32` values are fixed-width
//! little-endian. Record logic goes through the [`WireWrite`]/[`WireRead`]
//! traits so the backing buffer implementation can be swapped independently.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Minimum encoded size of one string: its 4-byte length prefix.
pub(crate) const LEN_PREFIX_SIZE: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A string or sequence longer than `u32::MAX` cannot be length-prefixed.
    #[error("value of {0} bytes/elements does not fit a u32 length prefix")]
    TooLong(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated buffer: needed {needed} more bytes, {remaining} available")]
    Truncated { needed: usize, remaining: usize },
    #[error("string length prefix {length} exceeds remaining buffer ({remaining} bytes)")]
    LengthOutOfBounds { length: u32, remaining: usize },
    #[error("sequence count {count} cannot fit in remaining buffer ({remaining} bytes)")]
    CountOutOfBounds { count: u32, remaining: usize },
    /// Strings must be valid UTF-8; malformed bytes are rejected, never replaced.
    #[error("invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Writer side of the wire primitive interface.
pub trait WireWrite {
    fn write_uint32(&mut self, n: u32) -> Result<(), EncodeError>;
    fn write_string(&mut self, s: &str) -> Result<(), EncodeError>;
}

/// Reader side of the wire primitive interface. Implementations maintain an
/// internal cursor advanced by each read.
pub trait WireRead {
    fn read_uint32(&mut self) -> Result<u32, DecodeError>;
    fn read_string(&mut self) -> Result<String, DecodeError>;
    /// Bytes left between the cursor and the end of the input.
    fn remaining(&self) -> usize;
}

/// Growable byte-buffer writer.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Writer::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Writer { buf: Vec::with_capacity(capacity) }
    }

    /// Consume the writer and return the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

impl WireWrite for Writer {
    fn write_uint32(&mut self, n: u32) -> Result<(), EncodeError> {
        self.buf.extend_from_slice(&n.to_le_bytes());
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<(), EncodeError> {
        let len = u32::try_from(s.len()).map_err(|_| EncodeError::TooLong(s.len()))?;
        self.write_uint32(len)?;
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Cursor-backed reader over a borrowed input buffer. Decoded strings are
/// owned copies; nothing aliases the input after decoding completes.
#[derive(Debug)]
pub struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Reader { cursor: Cursor::new(bytes) }
    }
}

impl WireRead for Reader<'_> {
    fn read_uint32(&mut self) -> Result<u32, DecodeError> {
        let remaining = self.remaining();
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| DecodeError::Truncated { needed: LEN_PREFIX_SIZE - remaining, remaining })
    }

    fn read_string(&mut self) -> Result<String, DecodeError> {
        let length = self.read_uint32()?;
        let remaining = self.remaining();
        if length as usize > remaining {
            return Err(DecodeError::LengthOutOfBounds { length, remaining });
        }
        let pos = self.cursor.position() as usize;
        let bytes = self.cursor.get_ref()[pos..pos + length as usize].to_vec();
        self.cursor.set_position((pos + length as usize) as u64);
        Ok(String::from_utf8(bytes)?)
    }

    fn remaining(&self) -> usize {
        let total = self.cursor.get_ref().len();
        total.saturating_sub(self.cursor.position() as usize)
    }
}
