//! Bounds-checked little-endian reads over a borrowed buffer.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{ContainerError, Result};

/// Fixed-width element of a length-prefixed array.
pub trait ArrayElement: Sized {
    const WIDTH: usize;

    /// Decode one element from exactly `WIDTH` little-endian bytes.
    fn from_le(bytes: &[u8]) -> Self;
}

impl ArrayElement for u8 {
    const WIDTH: usize = 1;

    fn from_le(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl ArrayElement for u32 {
    const WIDTH: usize = 4;

    fn from_le(bytes: &[u8]) -> Self {
        LittleEndian::read_u32(bytes)
    }
}

impl ArrayElement for u64 {
    const WIDTH: usize = 8;

    fn from_le(bytes: &[u8]) -> Self {
        LittleEndian::read_u64(bytes)
    }
}

/// Sequential reader. `base` is the absolute offset of `bytes[0]` in the
/// outermost input, so errors from sub-readers still point into the file.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_base(bytes, 0)
    }

    pub fn with_base(bytes: &'a [u8], base: usize) -> Self {
        Self { bytes, pos: 0, base }
    }

    /// Absolute offset of the next byte to be read.
    #[inline]
    pub fn position(&self) -> usize {
        self.base + self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(ContainerError::Truncated {
                offset: self.position(),
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let out = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_bytes(len).map(|_| ())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    /// Read a `u32` count followed by that many `T`s.
    ///
    /// The whole payload is bounds-checked before anything is allocated, so a
    /// garbage count fails fast instead of reserving gigabytes.
    pub fn read_typed_array<T: ArrayElement>(&mut self) -> Result<Vec<T>> {
        let count = self.read_u32()? as usize;
        let needed = count.checked_mul(T::WIDTH).unwrap_or(usize::MAX);
        let payload = self.read_bytes(needed)?;
        Ok(payload.chunks_exact(T::WIDTH).map(T::from_le).collect())
    }

    /// Split off the next `len` bytes as an independent reader.
    pub fn sub_reader(&mut self, len: usize) -> Result<ByteReader<'a>> {
        let base = self.position();
        let bytes = self.read_bytes(len)?;
        Ok(ByteReader::with_base(bytes, base))
    }
}
