//! Growable byte buffer and read cursor used by the Zero codec.

use bytes::Bytes;
use tracing::trace;

use super::metrics::Metrics;
use super::{CHUNK_SIZE, Error, Result};

/// Append-only byte sink with chunked growth.
///
/// When an append does not fit, the buffer is reallocated to
/// `capacity + max(CHUNK_SIZE, incoming)` and the written prefix is copied
/// over in order.
#[derive(Debug, Clone)]
pub struct GrowableBuffer {
    data: Vec<u8>,
    capacity: usize,
    reallocations: usize,
}

impl GrowableBuffer {
    /// Create a buffer with one chunk of capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(CHUNK_SIZE)
    }

    /// Create a buffer with the given initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            reallocations: 0,
        }
    }

    /// Append bytes, growing the buffer if they do not fit.
    pub fn append(&mut self, bytes: &[u8]) {
        if bytes.len() > self.remaining() {
            self.grow(bytes.len());
        }
        self.data.extend_from_slice(bytes);
    }

    /// Append a single byte.
    pub fn put_u8(&mut self, value: u8) {
        self.append(&[value]);
    }

    /// Append a big-endian 16-bit value.
    pub fn put_u16(&mut self, value: u16) {
        self.append(&value.to_be_bytes());
    }

    /// Append a big-endian 32-bit value.
    pub fn put_u32(&mut self, value: u32) {
        self.append(&value.to_be_bytes());
    }

    /// Append a big-endian 64-bit value.
    pub fn put_u64(&mut self, value: u64) {
        self.append(&value.to_be_bytes());
    }

    fn grow(&mut self, incoming: usize) {
        let new_capacity = self.capacity + CHUNK_SIZE.max(incoming);
        trace!(
            from = self.capacity,
            to = new_capacity,
            written = self.data.len(),
            "growing encode buffer"
        );

        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend_from_slice(&self.data);
        self.data = grown;
        self.capacity = new_capacity;
        self.reallocations += 1;
        Metrics::record_reallocation();
    }

    /// Number of bytes written so far (the write position).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes that can be appended before the next reallocation.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Number of reallocations performed so far.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Written bytes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copy of exactly the written bytes.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Consume the buffer, returning exactly the written bytes.
    #[must_use]
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward-only cursor over encoded bytes with checked big-endian reads.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the first byte.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Move the cursor back by `count` bytes, stopping at the start.
    pub fn rewind(&mut self, count: usize) {
        self.pos = self.pos.saturating_sub(count);
    }

    /// Read `len` raw bytes belonging to `field`.
    pub fn read_bytes(&mut self, field: &'static str, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::TruncatedInput {
                field,
                offset: self.pos,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(field, N)?);
        Ok(out)
    }

    /// Read one byte.
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.read_array::<1>(field)?[0])
    }

    /// Read a big-endian signed 16-bit value.
    pub fn read_i16(&mut self, field: &'static str) -> Result<i16> {
        self.read_array(field).map(i16::from_be_bytes)
    }

    /// Read a big-endian signed 32-bit value.
    pub fn read_i32(&mut self, field: &'static str) -> Result<i32> {
        self.read_array(field).map(i32::from_be_bytes)
    }

    /// Read a big-endian signed 64-bit value.
    pub fn read_i64(&mut self, field: &'static str) -> Result<i64> {
        self.read_array(field).map(i64::from_be_bytes)
    }

    /// Read a big-endian IEEE-754 single.
    pub fn read_f32(&mut self, field: &'static str) -> Result<f32> {
        self.read_array(field).map(f32::from_be_bytes)
    }

    /// Read a big-endian IEEE-754 double.
    pub fn read_f64(&mut self, field: &'static str) -> Result<f64> {
        self.read_array(field).map(f64::from_be_bytes)
    }
}
