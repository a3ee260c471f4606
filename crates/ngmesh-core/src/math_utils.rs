//! Math helpers applied to vertex buffers before encoding.

/// Applies a 4x4 homogeneous transform to every (x, y, z) triple of
/// `vertices`, in place.
///
/// `matrix` is flattened column-major with the translation in the last
/// column, so each triple becomes `M * [x, y, z, 1]`. Elements past the last
/// whole triple are left untouched. This runs upstream of the codec and is
/// not part of its contract.
///
/// # Examples
/// ```
/// use ngmesh_core::math_utils::apply_affine_transform;
///
/// // Pure translation by (10, 20, 30).
/// let mut vertices = [1.0, 2.0, 3.0];
/// let matrix = [
///     1.0, 0.0, 0.0, 0.0, //
///     0.0, 1.0, 0.0, 0.0, //
///     0.0, 0.0, 1.0, 0.0, //
///     10.0, 20.0, 30.0, 1.0,
/// ];
/// apply_affine_transform(&mut vertices, &matrix);
/// assert_eq!(vertices, [11.0, 22.0, 33.0]);
/// ```
pub fn apply_affine_transform(vertices: &mut [f32], matrix: &[f32; 16]) {
    for triple in vertices.chunks_exact_mut(3) {
        let (x, y, z) = (triple[0], triple[1], triple[2]);
        triple[0] = matrix[0] * x + matrix[4] * y + matrix[8] * z + matrix[12];
        triple[1] = matrix[1] * x + matrix[5] * y + matrix[9] * z + matrix[13];
        triple[2] = matrix[2] * x + matrix[6] * y + matrix[10] * z + matrix[14];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    #[test]
    fn test_identity_is_noop() {
        let mut vertices = [1.0, -2.0, 3.5, 0.0, 4.0, -1.0];
        let expected = vertices;
        apply_affine_transform(&mut vertices, &IDENTITY);
        assert_eq!(vertices, expected);
    }

    #[test]
    fn test_scale() {
        let mut vertices = [1.0, 2.0, 3.0];
        let mut matrix = IDENTITY;
        matrix[0] = 2.0;
        matrix[5] = 3.0;
        matrix[10] = 4.0;
        apply_affine_transform(&mut vertices, &matrix);
        assert_eq!(vertices, [2.0, 6.0, 12.0]);
    }

    #[test]
    fn test_column_major_off_diagonal() {
        // y' picks up x through m[1], the first column's second row.
        let mut vertices = [1.0, 0.0, 0.0];
        let mut matrix = IDENTITY;
        matrix[1] = 5.0;
        apply_affine_transform(&mut vertices, &matrix);
        assert_eq!(vertices, [1.0, 5.0, 0.0]);
    }

    #[test]
    fn test_partial_tail_untouched() {
        let mut vertices = [1.0, 2.0, 3.0, 9.0];
        let mut matrix = IDENTITY;
        matrix[12] = 1.0;
        apply_affine_transform(&mut vertices, &matrix);
        assert_eq!(vertices, [2.0, 2.0, 3.0, 9.0]);
    }
}
