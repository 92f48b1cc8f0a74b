use crate::error::Result;
use crate::math::{Mat, PointV};

/// Builds the 4×4 homogeneous translation matrix for a displacement vector.
#[must_use]
pub fn translation_matrix(vector: &PointV) -> Mat {
    let mut m = Mat::identity(4);
    m[(0, 3)] = vector.x;
    m[(1, 3)] = vector.y;
    m[(2, 3)] = vector.z;
    m
}

/// Applies a 4×4 translation matrix to a homogeneous point or vector.
///
/// Free vectors (homogeneous coordinate 0) pass through unchanged.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the matrix cannot multiply a 4×1 column.
pub fn apply_translation_point(pt: &PointV, matrix: &Mat) -> Result<PointV> {
    debug_assert!(matrix.rows() == 4 && matrix.cols() == 4, "translation matrix must be 4x4");
    let col = Mat::column(&pt.to_array());
    let moved = matrix.try_mul(&col)?;
    Ok(PointV::from_array([
        moved[(0, 0)],
        moved[(1, 0)],
        moved[(2, 0)],
        moved[(3, 0)],
    ]))
}
