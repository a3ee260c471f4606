use crate::data_types::Scalar;
use crate::status::NgmeshError;

/// Output buffer for NG mesh serialization.
///
/// The buffer is zero-initialized to its full size up front and filled
/// through a write cursor. A write that would run past the reserved end
/// fails with [`NgmeshError::BufferTooSmall`] instead of growing the buffer,
/// so the encoded length computed ahead of time is authoritative. After a
/// failed write the contents are unspecified.
#[derive(Debug, Clone)]
pub struct EncoderBuffer {
    buffer: Vec<u8>,
    pos: usize,
}

impl EncoderBuffer {
    /// Creates an empty buffer. Writes fail until [`EncoderBuffer::resize`]
    /// reserves space.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            pos: 0,
        }
    }

    /// Creates a zero-initialized buffer of exactly `nbytes`.
    pub fn with_size(nbytes: usize) -> Self {
        Self {
            buffer: vec![0; nbytes],
            pos: 0,
        }
    }

    /// Resizes the reservation, zero-filling any new tail.
    pub fn resize(&mut self, nbytes: usize) {
        self.buffer.resize(nbytes, 0);
        self.pos = self.pos.min(nbytes);
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Current write position in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the reserved end.
    pub fn remaining_size(&self) -> usize {
        self.buffer.len().saturating_sub(self.pos)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    fn encode_bytes(&mut self, bytes: &[u8]) -> Result<(), NgmeshError> {
        if self.remaining_size() < bytes.len() {
            return Err(NgmeshError::BufferTooSmall(format!(
                "write of {} bytes at position {} exceeds buffer of {} bytes",
                bytes.len(),
                self.pos,
                self.buffer.len()
            )));
        }
        self.buffer[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Writes a little-endian u32 at the cursor.
    pub fn encode_u32(&mut self, value: u32) -> Result<(), NgmeshError> {
        self.encode_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian f32 at the cursor.
    pub fn encode_f32(&mut self, value: f32) -> Result<(), NgmeshError> {
        self.encode_bytes(&value.to_le_bytes())
    }

    /// Writes any tagged scalar at the cursor, little-endian.
    pub fn encode_scalar(&mut self, value: Scalar) -> Result<(), NgmeshError> {
        let size = value.byte_length();
        if self.remaining_size() < size {
            return Err(NgmeshError::BufferTooSmall(format!(
                "write of {} bytes at position {} exceeds buffer of {} bytes",
                size,
                self.pos,
                self.buffer.len()
            )));
        }
        value.write_to(&mut self.buffer[self.pos..self.pos + size])?;
        self.pos += size;
        Ok(())
    }
}

impl Default for EncoderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
