//! Position-tracked sequential access to a fixed-capacity byte buffer.
//!
//! A [`Cursor`] never grows its buffer. Reads and writes that would cross the
//! end fail with [`CursorError::BufferOverrun`] and leave the position
//! untouched. Encoding allocates the exact output size up front with
//! [`Cursor::with_capacity`]; decoding wraps the borrowed input.

use crate::CursorError;

type Result<T> = std::result::Result<T, CursorError>;

#[derive(Debug, Clone)]
pub struct Cursor<B> {
    buf: B,
    position: usize,
}

impl Cursor<Vec<u8>> {
    /// Allocates a zeroed buffer of exactly `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Cursor::new(vec![0u8; capacity])
    }
}

impl<B: AsRef<[u8]>> Cursor<B> {
    pub fn new(buf: B) -> Self {
        Cursor { buf, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn capacity(&self) -> usize {
        self.buf.as_ref().len()
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.capacity() {
            return Err(CursorError::PositionOutOfBounds {
                position,
                capacity: self.capacity(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// The whole underlying buffer, regardless of position.
    pub fn as_slice(&self) -> &[u8] {
        self.buf.as_ref()
    }

    pub fn into_inner(self) -> B {
        self.buf
    }

    fn check(&self, requested: usize) -> Result<usize> {
        let capacity = self.capacity();
        match self.position.checked_add(requested) {
            Some(end) if end <= capacity => Ok(end),
            _ => Err(CursorError::BufferOverrun {
                position: self.position,
                requested,
                capacity,
            }),
        }
    }

    pub fn inspect_byte(&self) -> Result<u8> {
        self.check(1)?;
        Ok(self.buf.as_ref()[self.position])
    }

    /// Returns the next `n` bytes without advancing.
    pub fn inspect_bytes(&self, n: usize) -> Result<&[u8]> {
        let end = self.check(n)?;
        Ok(&self.buf.as_ref()[self.position..end])
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let byte = self.inspect_byte()?;
        self.position += 1;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8]> {
        let start = self.position;
        let end = self.check(n)?;
        self.position = end;
        Ok(&self.buf.as_ref()[start..end])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_byte()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u24(&mut self) -> Result<u32> {
        let b = self.read_bytes(3)?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Cursor<B> {
    pub fn push_byte(&mut self, byte: u8) -> Result<()> {
        self.check(1)?;
        self.buf.as_mut()[self.position] = byte;
        self.position += 1;
        Ok(())
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.check(bytes.len())?;
        self.buf.as_mut()[self.position..end].copy_from_slice(bytes);
        self.position = end;
        Ok(())
    }

    pub fn push_u8(&mut self, value: u8) -> Result<()> {
        self.push_byte(value)
    }

    pub fn push_u16(&mut self, value: u16) -> Result<()> {
        self.push_bytes(&value.to_be_bytes())
    }

    /// Writes the low three bytes of `value`, big-endian.
    pub fn push_u24(&mut self, value: u32) -> Result<()> {
        self.push_bytes(&value.to_be_bytes()[1..])
    }

    pub fn push_u32(&mut self, value: u32) -> Result<()> {
        self.push_bytes(&value.to_be_bytes())
    }
}
