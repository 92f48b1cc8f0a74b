use crate::error::Result;
use crate::math::{Mat, PointV};

/// Solves the planar homography mapping four source points onto four
/// destination points (direct linear transform, scale term fixed to 1).
///
/// Each correspondence `(x, y) -> (u, v)` contributes the two rows
/// `[x y 1 0 0 0 -x·u -y·u]` and `[0 0 0 x y 1 -x·v -y·v]` of an 8×8
/// system whose right-hand side stacks `u` and `v`; the 8-vector solution
/// is repacked into the returned 3×3 matrix.
///
/// Exactly four correspondences are a caller contract (asserted in debug
/// builds only).
///
/// # Errors
///
/// Returns `SingularMatrix` when the correspondences are degenerate (three
/// colinear source or destination points make the system non-invertible).
pub fn perspective_matrix(src: &[PointV], dst: &[PointV]) -> Result<Mat> {
    debug_assert!(
        src.len() == 4 && dst.len() == 4,
        "perspective transform requires exactly 4 point pairs"
    );

    let mut a = Mat::zeros(8, 8);
    let mut b = Mat::zeros(8, 1);
    for (i, (s, d)) in src.iter().zip(dst).enumerate() {
        let r = 2 * i;
        a[(r, 0)] = s.x;
        a[(r, 1)] = s.y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -s.x * d.x;
        a[(r, 7)] = -s.y * d.x;
        b[(r, 0)] = d.x;

        a[(r + 1, 3)] = s.x;
        a[(r + 1, 4)] = s.y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -s.x * d.y;
        a[(r + 1, 7)] = -s.y * d.y;
        b[(r + 1, 0)] = d.y;
    }

    let x = a.inverse()?.try_mul(&b)?;

    let mut h = Mat::zeros(3, 3);
    for i in 0..8 {
        h[(i / 3, i % 3)] = x[(i, 0)];
    }
    h[(2, 2)] = 1.0;
    Ok(h)
}

/// Applies a 3×3 homography to a point set with the projective
/// divide-by-w step. Output points lie in the XY plane.
#[must_use]
pub fn apply_perspective(pts: &[PointV], matrix: &Mat) -> Vec<PointV> {
    debug_assert!(
        matrix.rows() == 3 && matrix.cols() == 3,
        "perspective matrix must be 3x3"
    );
    pts.iter()
        .map(|p| {
            let w = matrix[(2, 0)] * p.x + matrix[(2, 1)] * p.y + matrix[(2, 2)];
            let u = (matrix[(0, 0)] * p.x + matrix[(0, 1)] * p.y + matrix[(0, 2)]) / w;
            let v = (matrix[(1, 0)] * p.x + matrix[(1, 1)] * p.y + matrix[(1, 2)]) / w;
            PointV::point(u, v, 0.0)
        })
        .collect()
}
