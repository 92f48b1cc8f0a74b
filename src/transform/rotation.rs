use crate::error::Result;
use crate::math::{Mat, PointV};

/// Builds the 4×4 homogeneous rotation matrix for `angle` radians about an
/// arbitrary `axis` through the origin (Rodrigues form).
///
/// The angle is negated internally so that a positive input angle rotates
/// counter-clockwise about the axis under the right-hand rule.
///
/// # Errors
///
/// Returns `DegenerateInput` for a zero-length axis.
pub fn rotation_matrix(angle: f64, axis: &PointV) -> Result<Mat> {
    let angle = -angle;
    let cos = angle.cos();
    let sin = angle.sin();
    let cos_minus = 1.0 - cos;

    let axis = axis.unit()?;
    let u = axis.x;
    let v = axis.y;
    let w = axis.z;

    let mut m = Mat::zeros(4, 4);
    m[(0, 0)] = cos + u * u * cos_minus;
    m[(0, 1)] = u * v * cos_minus + w * sin;
    m[(0, 2)] = u * w * cos_minus - v * sin;

    m[(1, 0)] = u * v * cos_minus - w * sin;
    m[(1, 1)] = cos + v * v * cos_minus;
    m[(1, 2)] = w * v * cos_minus + u * sin;

    m[(2, 0)] = u * w * cos_minus + v * sin;
    m[(2, 1)] = v * w * cos_minus - u * sin;
    m[(2, 2)] = cos + w * w * cos_minus;

    m[(3, 3)] = 1.0;
    Ok(m)
}

/// Applies a 4×4 rotation matrix to a single homogeneous point or vector.
///
/// The rotation block leaves the homogeneous coordinate untouched, so the
/// operand's point/vector kind carries through.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the matrix cannot multiply a 4×1 column.
pub fn apply_rotation_point(pt: &PointV, matrix: &Mat) -> Result<PointV> {
    debug_assert!(matrix.rows() == 4 && matrix.cols() == 4, "rotation matrix must be 4x4");
    let col = Mat::column(&pt.to_array());
    let rotated = matrix.try_mul(&col)?;
    Ok(PointV::from_array([
        rotated[(0, 0)],
        rotated[(1, 0)],
        rotated[(2, 0)],
        rotated[(3, 0)],
    ]))
}

/// Applies a 4×4 rotation matrix to a point set.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the matrix cannot multiply a 4×1 column.
pub fn apply_rotation(pts: &[PointV], matrix: &Mat) -> Result<Vec<PointV>> {
    pts.iter().map(|p| apply_rotation_point(p, matrix)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn quarter_turn_about_z() {
        let m = rotation_matrix(PI / 2.0, &PointV::Z_AXIS).unwrap();
        let p = apply_rotation_point(&PointV::point(1.0, 0.0, 0.0), &m).unwrap();
        assert!(p.eq_coords(&PointV::point(0.0, 1.0, 0.0), 1e-9), "p={p:?}");
        assert!(p.is_point());
    }

    #[test]
    fn rotation_preserves_vector_kind() {
        let m = rotation_matrix(1.0, &PointV::vector(1.0, 1.0, 1.0)).unwrap();
        let v = apply_rotation_point(&PointV::vector(0.0, 1.0, 0.0), &m).unwrap();
        assert!(v.is_vector());
        // Rotation preserves length.
        assert!((v.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_angles_cancel() {
        let axis = PointV::vector(0.3, -0.7, 0.2);
        let fwd = rotation_matrix(0.8, &axis).unwrap();
        let back = rotation_matrix(-0.8, &axis).unwrap();
        let pts = vec![
            PointV::point(1.0, 2.0, 3.0),
            PointV::point(-4.0, 0.5, 0.0),
        ];
        let there = apply_rotation(&pts, &fwd).unwrap();
        let home = apply_rotation(&there, &back).unwrap();
        for (orig, round) in pts.iter().zip(&home) {
            assert!(round.eq_coords(orig, 1e-9), "round={round:?}");
        }
    }

    #[test]
    fn zero_axis_rejected() {
        assert!(rotation_matrix(1.0, &PointV::vector(0.0, 0.0, 0.0)).is_err());
    }
}
