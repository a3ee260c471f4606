use crate::decoder_buffer::DecoderBuffer;
use crate::format::{HEADER_BYTE_LENGTH, TRIANGLE_BYTE_LENGTH, VERTEX_BYTE_LENGTH};
use crate::mesh::Mesh;
use crate::status::NgmeshError;

/// Deserializes NG mesh bytes back into a [`Mesh`].
///
/// Exact left inverse of [`crate::mesh_encoder::MeshEncoder`]: for any buffer
/// it produced, decoding reproduces the mesh bit for bit. Unlike the format's
/// reference consumer, a buffer whose sections do not line up is rejected
/// with [`NgmeshError::MalformedBuffer`] instead of being read as garbage.
#[derive(Debug, Default)]
pub struct MeshDecoder;

impl MeshDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, data: &[u8]) -> Result<Mesh, NgmeshError> {
        if data.len() < HEADER_BYTE_LENGTH {
            return Err(NgmeshError::MalformedBuffer(format!(
                "{} bytes is shorter than the {}-byte header",
                data.len(),
                HEADER_BYTE_LENGTH
            )));
        }

        let mut buffer = DecoderBuffer::new(data);
        let num_vertices = buffer.decode_u32()? as usize;

        let vertex_section = num_vertices as u64 * VERTEX_BYTE_LENGTH as u64;
        if vertex_section > buffer.remaining_size() as u64 {
            return Err(NgmeshError::MalformedBuffer(format!(
                "declared vertex section of {} bytes exceeds the {} bytes remaining",
                vertex_section,
                buffer.remaining_size()
            )));
        }

        let mut vertices = Vec::with_capacity(num_vertices * 3);
        for _ in 0..num_vertices * 3 {
            vertices.push(buffer.decode_f32()?);
        }

        let remaining = buffer.remaining_size();
        if remaining % TRIANGLE_BYTE_LENGTH != 0 {
            return Err(NgmeshError::MalformedBuffer(format!(
                "trailing {} bytes do not form whole {}-byte triangles",
                remaining, TRIANGLE_BYTE_LENGTH
            )));
        }
        let num_triangles = remaining / TRIANGLE_BYTE_LENGTH;

        let mut triangles = Vec::with_capacity(num_triangles * 3);
        for _ in 0..num_triangles * 3 {
            triangles.push(buffer.decode_u32()?);
        }

        Ok(Mesh::new(vertices, triangles))
    }
}

/// Decodes NG mesh bytes into an owned mesh.
pub fn decode(data: &[u8]) -> Result<Mesh, NgmeshError> {
    MeshDecoder::new().decode(data)
}
