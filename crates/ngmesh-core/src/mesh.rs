use num_traits::AsPrimitive;

/// Triangle mesh in the shape the NG format models it: a flat buffer of
/// vertex position floats and a flat buffer of triangle vertex indices.
///
/// Each consecutive (x, y, z) triple in `vertices` is one vertex, indexed
/// from 0 in insertion order. Each consecutive (a, b, c) triple in
/// `triangles` references three vertices in the winding order the caller
/// supplied. Whether every index actually falls inside the vertex buffer is
/// a caller invariant; the codec does not check topology.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<f32>,
    triangles: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<f32>, triangles: Vec<u32>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Builds a mesh from buffers of any numeric type, narrowing each element
    /// to the wire types (f32 positions, u32 indices).
    ///
    /// The narrowing is the `as`-cast semantics: f64 positions lose precision
    /// beyond f32, signed indices wrap into u32. Callers holding already
    /// typed buffers should use [`Mesh::new`] instead.
    pub fn from_lossy<V, T>(vertices: &[V], triangles: &[T]) -> Self
    where
        V: AsPrimitive<f32>,
        T: AsPrimitive<u32>,
    {
        Self {
            vertices: vertices.iter().map(|v| v.as_()).collect(),
            triangles: triangles.iter().map(|t| t.as_()).collect(),
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [f32] {
        &mut self.vertices
    }

    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// Number of whole (x, y, z) triples. A trailing partial triple does not
    /// count and is never encoded.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of whole (a, b, c) index triples.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }
}
