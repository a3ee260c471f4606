use crate::status::NgmeshError;

/// The closed set of numeric element kinds the wire accessors are defined for.
///
/// Every kind is bound statically to its little-endian read/write accessor in
/// [`DataType::read_scalar`] and [`Scalar::write_to`]; there is no runtime
/// lookup by type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
}

impl DataType {
    pub fn byte_length(&self) -> usize {
        match self {
            DataType::Int8 | DataType::Uint8 => 1,
            DataType::Int16 | DataType::Uint16 => 2,
            DataType::Int32 | DataType::Uint32 | DataType::Float32 => 4,
            DataType::Float64 => 8,
        }
    }

    pub fn is_integral(&self) -> bool {
        !matches!(self, DataType::Float32 | DataType::Float64)
    }

    /// Reads one value of this kind from the start of `bytes`, little-endian.
    pub fn read_scalar(&self, bytes: &[u8]) -> Result<Scalar, NgmeshError> {
        let size = self.byte_length();
        if bytes.len() < size {
            return Err(NgmeshError::MalformedBuffer(format!(
                "need {} bytes for {:?}, have {}",
                size,
                self,
                bytes.len()
            )));
        }
        let value = match self {
            DataType::Int8 => Scalar::Int8(i8::from_le_bytes([bytes[0]])),
            DataType::Uint8 => Scalar::Uint8(bytes[0]),
            DataType::Int16 => Scalar::Int16(i16::from_le_bytes([bytes[0], bytes[1]])),
            DataType::Uint16 => Scalar::Uint16(u16::from_le_bytes([bytes[0], bytes[1]])),
            DataType::Int32 => Scalar::Int32(i32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ])),
            DataType::Uint32 => Scalar::Uint32(u32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ])),
            DataType::Float32 => Scalar::Float32(f32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ])),
            DataType::Float64 => Scalar::Float64(f64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
        };
        Ok(value)
    }
}

/// One numeric value tagged with its element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Int8(_) => DataType::Int8,
            Scalar::Uint8(_) => DataType::Uint8,
            Scalar::Int16(_) => DataType::Int16,
            Scalar::Uint16(_) => DataType::Uint16,
            Scalar::Int32(_) => DataType::Int32,
            Scalar::Uint32(_) => DataType::Uint32,
            Scalar::Float32(_) => DataType::Float32,
            Scalar::Float64(_) => DataType::Float64,
        }
    }

    pub fn byte_length(&self) -> usize {
        self.data_type().byte_length()
    }

    /// Writes this value to the start of `out`, little-endian.
    pub fn write_to(&self, out: &mut [u8]) -> Result<(), NgmeshError> {
        let size = self.byte_length();
        if out.len() < size {
            return Err(NgmeshError::BufferTooSmall(format!(
                "need {} bytes for {:?}, have {}",
                size,
                self.data_type(),
                out.len()
            )));
        }
        match self {
            Scalar::Int8(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
            Scalar::Uint8(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
            Scalar::Int16(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
            Scalar::Uint16(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
            Scalar::Int32(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
            Scalar::Uint32(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
            Scalar::Float32(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
            Scalar::Float64(v) => out[..size].copy_from_slice(&v.to_le_bytes()),
        }
        Ok(())
    }
}
