use crate::encoder_buffer::EncoderBuffer;
use crate::format::encoded_byte_length;
use crate::mesh::Mesh;
use crate::status::NgmeshError;

/// Serializes a [`Mesh`] into the NG mesh byte layout.
///
/// The output is the 4-byte vertex count, the flattened f32 positions, and
/// the flattened u32 triangle indices, all little-endian with no padding
/// (see [`crate::format`]). Encoding is deterministic, never mutates the
/// mesh, and only the returned buffer is allocated.
#[derive(Debug, Default)]
pub struct MeshEncoder;

impl MeshEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, mesh: &Mesh) -> Result<EncoderBuffer, NgmeshError> {
        let num_vertices = mesh.vertex_count();
        let num_triangles = mesh.triangle_count();
        let header = u32::try_from(num_vertices).map_err(|_| {
            NgmeshError::InvalidParameter(format!(
                "vertex count {} does not fit the u32 header",
                num_vertices
            ))
        })?;

        // Only whole triples are encoded; a trailing partial triple would
        // otherwise land in the triangle section and break decoding.
        let mut buffer = EncoderBuffer::with_size(encoded_byte_length(num_vertices, num_triangles));
        buffer.encode_u32(header)?;
        for &position in &mesh.vertices()[..num_vertices * 3] {
            buffer.encode_f32(position)?;
        }
        for &index in &mesh.triangles()[..num_triangles * 3] {
            buffer.encode_u32(index)?;
        }
        debug_assert_eq!(buffer.remaining_size(), 0);
        Ok(buffer)
    }
}

/// Encodes a mesh into an owned byte vector.
pub fn encode(mesh: &Mesh) -> Result<Vec<u8>, NgmeshError> {
    MeshEncoder::new().encode(mesh).map(EncoderBuffer::into_vec)
}
