use crate::data_types::{DataType, Scalar};
use crate::status::NgmeshError;

/// Input buffer for reading NG mesh data.
///
/// Borrows the encoded bytes and provides sequential bounds-checked typed
/// reads, little-endian. Reading never mutates the underlying data.
///
/// # Example
///
/// ```
/// use ngmesh_core::DecoderBuffer;
///
/// let data = 7u32.to_le_bytes();
/// let mut buffer = DecoderBuffer::new(&data);
/// assert_eq!(buffer.decode_u32().unwrap(), 7);
/// assert_eq!(buffer.remaining_size(), 0);
/// ```
pub struct DecoderBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DecoderBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining in the buffer.
    pub fn remaining_size(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn decode_bytes(&mut self, out: &mut [u8]) -> Result<(), NgmeshError> {
        let size = out.len();
        if self.pos + size > self.data.len() {
            return Err(NgmeshError::MalformedBuffer(format!(
                "unexpected end of buffer: need {} bytes, have {}",
                size,
                self.remaining_size()
            )));
        }
        out.copy_from_slice(&self.data[self.pos..self.pos + size]);
        self.pos += size;
        Ok(())
    }

    /// Decodes a little-endian u32.
    pub fn decode_u32(&mut self) -> Result<u32, NgmeshError> {
        let mut bytes = [0u8; 4];
        self.decode_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Decodes a little-endian f32.
    pub fn decode_f32(&mut self) -> Result<f32, NgmeshError> {
        let mut bytes = [0u8; 4];
        self.decode_bytes(&mut bytes)?;
        Ok(f32::from_le_bytes(bytes))
    }

    /// Decodes one value of the given kind, little-endian.
    pub fn decode_scalar(&mut self, data_type: DataType) -> Result<Scalar, NgmeshError> {
        let value = data_type.read_scalar(&self.data[self.pos..])?;
        self.pos += data_type.byte_length();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let mut data = Vec::new();
        data.extend_from_slice(&3u32.to_le_bytes());
        data.extend_from_slice(&1.5f32.to_le_bytes());

        let mut buffer = DecoderBuffer::new(&data);
        assert_eq!(buffer.decode_u32().unwrap(), 3);
        assert_eq!(buffer.decode_f32().unwrap(), 1.5);
        assert_eq!(buffer.position(), 8);
        assert_eq!(buffer.remaining_size(), 0);
    }

    #[test]
    fn test_read_past_end_fails() {
        let data = [1u8, 2];
        let mut buffer = DecoderBuffer::new(&data);
        let err = buffer.decode_u32().unwrap_err();
        assert!(matches!(err, NgmeshError::MalformedBuffer(_)));
        // Failed read does not advance.
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn test_scalar_dispatch() {
        let data = 0x0102u16.to_le_bytes();
        let mut buffer = DecoderBuffer::new(&data);
        assert_eq!(
            buffer.decode_scalar(DataType::Uint16).unwrap(),
            Scalar::Uint16(0x0102)
        );
        assert!(buffer.decode_scalar(DataType::Uint16).is_err());
    }
}
