//! Position-tracked byte stream reader and writer.
//!
//! The decoder and encoder consume only these two types: a cursor over a
//! borrowed byte slice supporting line reads, whitespace-delimited token
//! reads and raw byte-range reads, and a growable sink supporting raw and
//! ASCII-decimal writes.

use alloc::vec::Vec;

use crate::error::PgmError;

/// Read cursor over a byte slice.
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> ByteReader<'a> {
        ByteReader { data, position: 0 }
    }

    /// Current cursor offset from the start of the stream.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the stream.
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Whether the cursor has reached the end of the stream.
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The byte under the cursor, without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Consume and return one byte.
    pub fn get_u8(&mut self) -> Result<u8, PgmError> {
        let byte = self.peek_u8().ok_or(PgmError::UnexpectedEof)?;
        self.position += 1;
        Ok(byte)
    }

    /// Read up to and excluding the next `\n`, consuming the `\n` itself.
    /// Without a trailing `\n` the rest of the stream is the line. Fails only
    /// when the stream is already exhausted.
    pub fn read_line(&mut self) -> Result<&'a [u8], PgmError> {
        if self.is_exhausted() {
            return Err(PgmError::UnexpectedEof);
        }
        let rest = &self.data[self.position..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(end) => {
                self.position += end + 1;
                Ok(&rest[..end])
            }
            None => {
                self.position = self.data.len();
                Ok(rest)
            }
        }
    }

    /// Advance the cursor past any ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek_u8() {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
    }

    /// Skip leading ASCII whitespace, then read one token up to (and
    /// excluding) the next whitespace byte or the end of the stream. The
    /// delimiter is left unconsumed. An exhausted stream yields no token.
    pub fn next_token(&mut self) -> Result<&'a [u8], PgmError> {
        self.skip_whitespace();
        let start = self.position;
        while let Some(b) = self.peek_u8() {
            if b.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
        if self.position == start {
            return Err(PgmError::UnexpectedEof);
        }
        Ok(&self.data[start..self.position])
    }

    /// Fill `buffer` from the stream. A short read leaves the cursor at the
    /// end of the stream and fails.
    pub fn read_exact(&mut self, buffer: &mut [u8]) -> Result<(), PgmError> {
        match self.data.get(self.position..self.position + buffer.len()) {
            Some(bytes) => {
                buffer.copy_from_slice(bytes);
                self.position += buffer.len();
                Ok(())
            }
            None => {
                self.position = self.data.len();
                Err(PgmError::UnexpectedEof)
            }
        }
    }
}

/// Write cursor over a growable byte buffer.
///
/// Nothing is flushed or closed; the caller takes the bytes back with
/// [`Self::into_inner`].
#[derive(Default)]
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> ByteWriter {
        ByteWriter::default()
    }

    pub fn with_capacity(capacity: usize) -> ByteWriter {
        ByteWriter {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    pub fn write_u8(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    pub fn write_all(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Write `value` as ASCII decimal, no padding, no separator.
    pub fn write_decimal(&mut self, value: u32) {
        let mut digits = [0u8; 10];
        let mut i = digits.len();
        let mut v = value;
        loop {
            i -= 1;
            digits[i] = b'0' + (v % 10) as u8;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        self.buffer.extend_from_slice(&digits[i..]);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
