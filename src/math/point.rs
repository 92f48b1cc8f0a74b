use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{TAU, TOLERANCE};
use crate::error::{GeometryError, Result};
use crate::transform::rotation;

/// Homogeneous point/vector value type.
///
/// A `PointV` is either a bound point (homogeneous coordinate 1) or a free
/// vector (homogeneous coordinate 0). Arithmetic propagates the distinction:
/// adding or scaling anything by a point yields a point, subtracting a point
/// from a point yields a vector. Operations that only make sense on pure
/// vectors (dot, cross, angles) reject point operands with
/// [`GeometryError::InvalidOperand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointV {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    is_point: bool,
}

impl PointV {
    /// The world origin (a bound point).
    pub const ORIGIN: PointV = PointV::point(0.0, 0.0, 0.0);

    /// Unit vector along the world X axis.
    pub const X_AXIS: PointV = PointV::vector(1.0, 0.0, 0.0);

    /// Unit vector along the world Y axis.
    pub const Y_AXIS: PointV = PointV::vector(0.0, 1.0, 0.0);

    /// Unit vector along the world Z axis.
    pub const Z_AXIS: PointV = PointV::vector(0.0, 0.0, 1.0);

    /// Creates a bound point.
    #[must_use]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, is_point: true }
    }

    /// Creates a free vector.
    #[must_use]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, is_point: false }
    }

    /// True for a bound point, false for a free vector.
    #[must_use]
    pub const fn is_point(&self) -> bool {
        self.is_point
    }

    /// True for a free vector.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        !self.is_point
    }

    /// Homogeneous coordinate: 1 for a point, 0 for a vector.
    #[must_use]
    pub fn w(&self) -> f64 {
        if self.is_point {
            1.0
        } else {
            0.0
        }
    }

    /// The homogeneous column `[x, y, z, w]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w()]
    }

    /// Rebuilds from a homogeneous column; any non-zero `w` marks a point.
    #[must_use]
    pub fn from_array(a: [f64; 4]) -> Self {
        Self {
            x: a[0],
            y: a[1],
            z: a[2],
            is_point: a[3] != 0.0,
        }
    }

    pub(crate) fn with_kind_of(mut self, other: &PointV) -> Self {
        self.is_point = other.is_point;
        self
    }

    /// The vector from `self` to `other` (`other - self`).
    #[must_use]
    pub fn vector_to(&self, other: &PointV) -> PointV {
        *other - *self
    }

    /// Euclidean length of the coordinate triple.
    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another point/vector.
    #[must_use]
    pub fn distance_to(&self, other: &PointV) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The unit-length version of this value.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if the length is below [`TOLERANCE`].
    pub fn unit(&self) -> Result<PointV> {
        let len = self.norm();
        if len < TOLERANCE {
            return Err(GeometryError::DegenerateInput(
                "zero-length vector cannot be normalized".into(),
            ));
        }
        Ok(*self / len)
    }

    /// Midpoint of `self` and `other`, halving each coordinate separately to
    /// avoid overflow on large coordinates.
    #[must_use]
    pub fn midpoint(&self, other: &PointV) -> PointV {
        PointV {
            x: self.x / 2.0 + other.x / 2.0,
            y: self.y / 2.0 + other.y / 2.0,
            z: self.z / 2.0 + other.z / 2.0,
            is_point: self.is_point || other.is_point,
        }
    }

    /// Dot product of two vectors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperand` if either operand is a bound point.
    pub fn dot(&self, other: &PointV) -> Result<f64> {
        if self.is_point || other.is_point {
            return Err(GeometryError::InvalidOperand { operation: "dot product" });
        }
        Ok(self.x * other.x + self.y * other.y + self.z * other.z)
    }

    /// Scalar 2D cross product of two vectors (`x1*y2 - y1*x2`).
    ///
    /// Its magnitude is the area of the parallelogram the vectors span; the
    /// sign is positive when `other` lies counter-clockwise of `self`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperand` if either operand is a bound point.
    pub fn cross_2d(&self, other: &PointV) -> Result<f64> {
        if self.is_point || other.is_point {
            return Err(GeometryError::InvalidOperand { operation: "2D cross product" });
        }
        Ok(self.x * other.y - self.y * other.x)
    }

    /// Right-handed 3D cross product of two vectors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperand` if either operand is a bound point.
    pub fn cross_3d(&self, other: &PointV) -> Result<PointV> {
        if self.is_point || other.is_point {
            return Err(GeometryError::InvalidOperand { operation: "3D cross product" });
        }
        Ok(PointV::vector(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        ))
    }

    /// Non-reflex angle between two vectors, in `[0, π]`.
    ///
    /// The cosine is clamped into `[-1, 1]` before `acos` to absorb floating
    /// error on near-parallel vectors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperand` if either operand is a bound point, or
    /// `DegenerateInput` if either vector has zero length.
    pub fn angle_to(&self, other: &PointV) -> Result<f64> {
        if self.is_point || other.is_point {
            return Err(GeometryError::InvalidOperand { operation: "angle between vectors" });
        }
        let norm = self.norm() * other.norm();
        if norm == 0.0 {
            return Err(GeometryError::DegenerateInput(
                "angle between zero-length vectors".into(),
            ));
        }
        let cosfi = (self.x * other.x + self.y * other.y + self.z * other.z) / norm;
        Ok(cosfi.clamp(-1.0, 1.0).acos())
    }

    /// Angle from the world X axis to this vector, folded into `[0, 2π)`.
    ///
    /// CAD convention: vectors into the upper half-plane get the small angle,
    /// vectors into the lower half-plane get `2π` minus it. Results within
    /// `tolerance` of a full turn snap to 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperand` on a point operand, `DegenerateInput` on a
    /// zero-length vector.
    pub fn angle_to_x_axis(&self, tolerance: f64) -> Result<f64> {
        let al = PointV::X_AXIS.angle_to(self)?;
        let al = if self.y > 0.0 { al } else { TAU - al };
        Ok(if (TAU - al).abs() <= tolerance { 0.0 } else { al })
    }

    /// Angle from the world X axis to the segment `self -> end`, measured in
    /// the XY plane (Z is flattened first), folded into `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` when the flattened segment has zero length.
    pub fn x_axis_angle_to(&self, end: &PointV, tolerance: f64) -> Result<f64> {
        let ve = PointV::vector(end.x - self.x, end.y - self.y, 0.0);
        ve.angle_to_x_axis(tolerance)
    }

    /// Decomposes a plane normal (a user Z axis) into the two rotation
    /// angles, about the world X axis then the world Y axis, that align it
    /// with the world Z axis.
    ///
    /// The normal is projected onto the YZ plane for the X-axis angle and
    /// onto the XZ plane (with the YZ magnitude as height) for the Y-axis
    /// angle; each projection's angle to Z is folded into `[0, 2π)`.
    /// Coordinates within `tolerance` of zero are snapped first.
    ///
    /// # Errors
    ///
    /// Propagates `DegenerateInput` for a zero-length normal.
    pub fn to_wcs_angles(&self, tolerance: f64) -> Result<(f64, f64)> {
        let snap = |v: f64| if v.abs() <= tolerance { 0.0 } else { v };
        let x = snap(self.x);
        let y = snap(self.y);
        let z = snap(self.z);

        // YZ-plane projection: rotation about the X axis.
        let alx = if y == 0.0 && z == 0.0 {
            0.0
        } else {
            let oq = PointV::vector(0.0, y, z);
            let al = PointV::Z_AXIS.angle_to(&oq)?;
            let al = if oq.y > 0.0 { al } else { TAU - al };
            if (TAU - al).abs() <= tolerance {
                0.0
            } else {
                al
            }
        };

        // XZ-plane projection: rotation about the Y axis. The height is the
        // YZ magnitude so the first rotation is already accounted for.
        let h = (y * y + z * z).sqrt();
        let aly = if x == 0.0 && h == 0.0 {
            0.0
        } else {
            let or = PointV::vector(x, 0.0, h);
            let al = PointV::Z_AXIS.angle_to(&or)?;
            let al = if or.x < 0.0 { al } else { TAU - al };
            if (TAU - al).abs() <= tolerance {
                0.0
            } else {
                al
            }
        };

        Ok((alx, aly))
    }

    /// Rotates about an arbitrary axis through `center` by `angle` radians,
    /// counter-clockwise under the right-hand rule. The point/vector kind of
    /// the operand is preserved.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` for a zero-length axis.
    pub fn rotate_by(&self, angle: f64, axis: &PointV, center: &PointV) -> Result<PointV> {
        let mat = rotation::rotation_matrix(angle, axis)?;
        let pt = *self - *center;
        let pt = rotation::apply_rotation_point(&pt, &mat)?;
        Ok((pt + *center).with_kind_of(self))
    }

    /// Polar displacement: the point at `dist` along the X axis from `self`,
    /// rotated by `angle` about the Z axis through `self`.
    ///
    /// # Errors
    ///
    /// Never fails for finite inputs; the `Result` mirrors [`Self::rotate_by`].
    pub fn polar(&self, angle: f64, dist: f64) -> Result<PointV> {
        PointV {
            x: self.x + dist,
            y: self.y,
            z: self.z,
            is_point: self.is_point,
        }
        .rotate_by(angle, &PointV::Z_AXIS, self)
    }

    /// Per-coordinate tolerance equality, also requiring both operands to be
    /// the same kind (point vs vector).
    #[must_use]
    pub fn eq_with(&self, other: &PointV, tolerance: f64) -> bool {
        self.eq_coords(other, tolerance) && self.is_point == other.is_point
    }

    /// Per-coordinate tolerance equality ignoring the point/vector kind.
    #[must_use]
    pub fn eq_coords(&self, other: &PointV, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// Horizontal ray-casting containment test against a closed boundary.
    ///
    /// The boundary is the vertex list with an implicit closing edge when the
    /// first and last vertices differ. A hit on a vertex or an edge returns
    /// `on_boundary`. Works in the XY plane.
    #[must_use]
    pub fn in_boundary(&self, pts: &[PointV], on_boundary: bool, tolerance: f64) -> bool {
        if pts.len() < 2 {
            return false;
        }
        let eq = |a: f64, b: f64| (a - b).abs() <= tolerance;
        let n = pts.len();
        let closed = pts[0].eq_coords(&pts[n - 1], tolerance);
        let segments = if closed { n - 1 } else { n };

        let (x, y) = (self.x, self.y);
        let mut flag = false;
        for i in 0..segments {
            let p1 = &pts[i];
            let p2 = &pts[(i + 1) % n];
            let (x1, y1) = (p1.x, p1.y);
            let (x2, y2) = (p2.x, p2.y);

            if (eq(x1, x) && eq(y1, y)) || (eq(x2, x) && eq(y2, y)) {
                return on_boundary;
            }
            // Does the horizontal ray cross this segment's Y span?
            if (y1 < y && y2 >= y) || (y1 >= y && y2 < y) {
                let slope = (x2 - x1) / (y2 - y1);
                let ox = x1 + (y - y1) * slope;
                if eq(ox, x) {
                    return on_boundary;
                }
                if ox > x {
                    flag = !flag;
                }
            }
        }
        flag
    }
}

/// Signed 2D cross product of `o -> a` and `o -> b`.
///
/// Twice the signed area of the triangle `(o, a, b)`: positive when the turn
/// `o -> a -> b` is counter-clockwise.
#[must_use]
pub fn cross_at(o: &PointV, a: &PointV, b: &PointV) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Left-turn test with a signed tolerance: true when `b` lies
/// counter-clockwise of `o -> a` (or within `tolerance` of colinear when a
/// small negative tolerance is passed).
#[must_use]
pub fn ccw(o: &PointV, a: &PointV, b: &PointV, tolerance: f64) -> bool {
    cross_at(o, a, b) >= tolerance
}

impl Add for PointV {
    type Output = PointV;

    fn add(self, rhs: PointV) -> PointV {
        PointV {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            is_point: self.is_point || rhs.is_point,
        }
    }
}

impl Add<f64> for PointV {
    type Output = PointV;

    fn add(self, rhs: f64) -> PointV {
        PointV { x: self.x + rhs, y: self.y + rhs, z: self.z + rhs, is_point: self.is_point }
    }
}

impl Sub for PointV {
    type Output = PointV;

    fn sub(self, rhs: PointV) -> PointV {
        // point - point = vector, point - vector = point, vector - vector = vector
        PointV {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            is_point: self.is_point != rhs.is_point,
        }
    }
}

impl Sub<f64> for PointV {
    type Output = PointV;

    fn sub(self, rhs: f64) -> PointV {
        PointV { x: self.x - rhs, y: self.y - rhs, z: self.z - rhs, is_point: self.is_point }
    }
}

impl Mul for PointV {
    type Output = PointV;

    fn mul(self, rhs: PointV) -> PointV {
        PointV {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            is_point: self.is_point || rhs.is_point,
        }
    }
}

impl Mul<f64> for PointV {
    type Output = PointV;

    fn mul(self, rhs: f64) -> PointV {
        PointV { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs, is_point: self.is_point }
    }
}

impl Div for PointV {
    type Output = PointV;

    fn div(self, rhs: PointV) -> PointV {
        PointV {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
            is_point: self.is_point || rhs.is_point,
        }
    }
}

impl Div<f64> for PointV {
    type Output = PointV;

    fn div(self, rhs: f64) -> PointV {
        PointV { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs, is_point: self.is_point }
    }
}

impl Neg for PointV {
    type Output = PointV;

    fn neg(self) -> PointV {
        self * -1.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const TOL: f64 = 1e-9;

    // ── kind propagation ──

    #[test]
    fn add_point_dominates() {
        let p = PointV::point(1.0, 2.0, 3.0);
        let v = PointV::vector(1.0, 1.0, 1.0);
        assert!((p + v).is_point());
        assert!((v + v).is_vector());
    }

    #[test]
    fn sub_kind_rules() {
        let p = PointV::point(1.0, 2.0, 3.0);
        let q = PointV::point(0.0, 0.0, 0.0);
        let v = PointV::vector(1.0, 1.0, 1.0);
        assert!((p - q).is_vector(), "point - point = vector");
        assert!((p - v).is_point(), "point - vector = point");
        assert!((v - p).is_point(), "vector - point = point");
        assert!((v - v).is_vector(), "vector - vector = vector");
    }

    #[test]
    fn scalar_ops_keep_kind() {
        let p = PointV::point(2.0, 4.0, 6.0);
        let scaled = p * 0.5;
        assert!(scaled.is_point());
        assert!(scaled.eq_coords(&PointV::point(1.0, 2.0, 3.0), TOL));
        let shifted = PointV::vector(1.0, 1.0, 1.0) + 2.0;
        assert!(shifted.is_vector());
        assert!(shifted.eq_coords(&PointV::vector(3.0, 3.0, 3.0), TOL));
        let divided = p / 2.0;
        assert!(divided.eq_coords(&(p - PointV::vector(1.0, 2.0, 3.0)), TOL));
    }

    #[test]
    fn midpoint_of_two_points() {
        let m = PointV::point(0.0, 0.0, 0.0).midpoint(&PointV::point(2.0, 4.0, -6.0));
        assert!(m.is_point());
        assert!(m.eq_coords(&PointV::point(1.0, 2.0, -3.0), TOL));
    }

    #[test]
    fn vector_to_is_vector() {
        let a = PointV::point(1.0, 0.0, 0.0);
        let b = PointV::point(4.0, 4.0, 0.0);
        let v = a.vector_to(&b);
        assert!(v.is_vector());
        assert!((v.x - 3.0).abs() < TOL);
        assert!((v.y - 4.0).abs() < TOL);
        assert!((v.norm() - 5.0).abs() < TOL);
    }

    // ── dot / cross ──

    #[test]
    fn dot_is_symmetric() {
        let a = PointV::vector(1.5, -2.0, 0.5);
        let b = PointV::vector(3.0, 4.0, -1.0);
        let d1 = a.dot(&b).unwrap();
        let d2 = b.dot(&a).unwrap();
        assert!((d1 - d2).abs() < TOL);
        assert!((d1 - (1.5 * 3.0 - 2.0 * 4.0 - 0.5)).abs() < TOL);
    }

    #[test]
    fn cross_is_antisymmetric() {
        let a = PointV::vector(1.5, -2.0, 0.0);
        let b = PointV::vector(3.0, 4.0, 0.0);
        let c1 = a.cross_2d(&b).unwrap();
        let c2 = b.cross_2d(&a).unwrap();
        assert!((c1 + c2).abs() < TOL);

        let n1 = a.cross_3d(&b).unwrap();
        let n2 = b.cross_3d(&a).unwrap();
        assert!(n1.eq_coords(&(-n2), TOL));
    }

    #[test]
    fn cross_3d_basis() {
        let n = PointV::X_AXIS.cross_3d(&PointV::Y_AXIS).unwrap();
        assert!(n.eq_with(&PointV::Z_AXIS, TOL));
    }

    #[test]
    fn vector_ops_reject_points() {
        let p = PointV::point(1.0, 0.0, 0.0);
        let v = PointV::vector(0.0, 1.0, 0.0);
        assert!(matches!(
            p.dot(&v),
            Err(crate::GeometryError::InvalidOperand { .. })
        ));
        assert!(v.cross_2d(&p).is_err());
        assert!(p.angle_to(&v).is_err());
    }

    // ── angles ──

    #[test]
    fn angle_to_right_angle() {
        let a = PointV::X_AXIS.angle_to(&PointV::Y_AXIS).unwrap();
        assert!((a - PI / 2.0).abs() < TOL);
    }

    #[test]
    fn angle_to_clamps_near_parallel() {
        let a = PointV::vector(1.0, 0.0, 0.0);
        let b = PointV::vector(1.0 + 1e-15, 0.0, 0.0);
        assert!(a.angle_to(&b).unwrap().abs() < TOL);
    }

    #[test]
    fn angle_to_x_axis_quadrants() {
        let up = PointV::vector(1.0, 1.0, 0.0);
        assert!((up.angle_to_x_axis(1e-6).unwrap() - PI / 4.0).abs() < TOL);

        // Lower half-plane folds to the large angle.
        let down = PointV::vector(1.0, -1.0, 0.0);
        assert!((down.angle_to_x_axis(1e-6).unwrap() - 7.0 * PI / 4.0).abs() < TOL);

        let neg_x = PointV::vector(-1.0, 0.0, 0.0);
        assert!((neg_x.angle_to_x_axis(1e-6).unwrap() - PI).abs() < TOL);
    }

    #[test]
    fn angle_to_x_axis_snaps_full_turn() {
        // Tiny negative y folds to just under 2π, which snaps to 0.
        let v = PointV::vector(1.0, -1e-9, 0.0);
        assert!(v.angle_to_x_axis(1e-6).unwrap().abs() < TOL);
    }

    // ── rotation ──

    #[test]
    fn rotate_x_axis_to_y_axis() {
        let p = PointV::point(1.0, 0.0, 0.0);
        let r = p
            .rotate_by(PI / 2.0, &PointV::Z_AXIS, &PointV::ORIGIN)
            .unwrap();
        assert!(r.eq_coords(&PointV::point(0.0, 1.0, 0.0), TOL), "r={r:?}");
        assert!(r.is_point());
    }

    #[test]
    fn rotate_round_trip() {
        let p = PointV::point(2.0, -1.0, 3.0);
        let axis = PointV::vector(1.0, 2.0, -0.5);
        let angle = 1.234;
        let center = PointV::point(0.5, 0.5, 0.5);
        let there = p.rotate_by(angle, &axis, &center).unwrap();
        let back = there.rotate_by(-angle, &axis, &center).unwrap();
        assert!(back.eq_coords(&p, TOL), "back={back:?}");
    }

    #[test]
    fn rotate_preserves_vector_kind() {
        let v = PointV::vector(1.0, 0.0, 0.0);
        let r = v
            .rotate_by(PI / 2.0, &PointV::Z_AXIS, &PointV::point(5.0, 5.0, 0.0))
            .unwrap();
        assert!(r.is_vector());
    }

    #[test]
    fn polar_displacement() {
        let p = PointV::point(1.0, 1.0, 0.0);
        let q = p.polar(PI / 2.0, 2.0).unwrap();
        assert!(q.eq_coords(&PointV::point(1.0, 3.0, 0.0), TOL), "q={q:?}");
    }

    // ── to_wcs_angles ──

    #[test]
    fn wcs_angles_of_world_z_are_zero() {
        let (alx, aly) = PointV::Z_AXIS.to_wcs_angles(1e-6).unwrap();
        assert!(alx.abs() < TOL);
        assert!(aly.abs() < TOL);
    }

    #[test]
    fn wcs_angles_align_normal_to_z() {
        let normal = PointV::vector(0.3, -0.4, 0.85).unit().unwrap();
        let (alx, aly) = normal.to_wcs_angles(1e-6).unwrap();
        let aligned = normal
            .rotate_by(alx, &PointV::X_AXIS, &PointV::ORIGIN)
            .unwrap()
            .rotate_by(aly, &PointV::Y_AXIS, &PointV::ORIGIN)
            .unwrap();
        assert!(
            aligned.eq_coords(&PointV::Z_AXIS, 1e-9),
            "aligned={aligned:?}"
        );
    }

    // ── equality / containment ──

    #[test]
    fn eq_with_checks_kind() {
        let p = PointV::point(1.0, 2.0, 3.0);
        let v = PointV::vector(1.0, 2.0, 3.0);
        assert!(!p.eq_with(&v, 1e-6));
        assert!(p.eq_coords(&v, 1e-6));
    }

    #[test]
    fn in_boundary_square() {
        let square = vec![
            PointV::point(0.0, 0.0, 0.0),
            PointV::point(2.0, 0.0, 0.0),
            PointV::point(2.0, 2.0, 0.0),
            PointV::point(0.0, 2.0, 0.0),
        ];
        assert!(PointV::point(1.0, 1.0, 0.0).in_boundary(&square, true, 1e-6));
        assert!(!PointV::point(3.0, 1.0, 0.0).in_boundary(&square, true, 1e-6));
        assert!(!PointV::point(-1.0, 1.0, 0.0).in_boundary(&square, true, 1e-6));
        // On an edge and on a vertex.
        assert!(PointV::point(2.0, 1.0, 0.0).in_boundary(&square, true, 1e-6));
        assert!(PointV::point(0.0, 0.0, 0.0).in_boundary(&square, true, 1e-6));
        assert!(!PointV::point(2.0, 1.0, 0.0).in_boundary(&square, false, 1e-6));
    }

    #[test]
    fn in_boundary_concave() {
        // L-shape; the notch corner region is outside.
        let l_shape = vec![
            PointV::point(0.0, 0.0, 0.0),
            PointV::point(2.0, 0.0, 0.0),
            PointV::point(2.0, 1.0, 0.0),
            PointV::point(1.0, 1.0, 0.0),
            PointV::point(1.0, 2.0, 0.0),
            PointV::point(0.0, 2.0, 0.0),
        ];
        assert!(PointV::point(0.5, 1.5, 0.0).in_boundary(&l_shape, true, 1e-6));
        assert!(PointV::point(1.5, 0.5, 0.0).in_boundary(&l_shape, true, 1e-6));
        assert!(!PointV::point(1.5, 1.5, 0.0).in_boundary(&l_shape, true, 1e-6));
    }

    // ── ccw / cross_at ──

    #[test]
    fn ccw_left_turn() {
        let o = PointV::point(0.0, 0.0, 0.0);
        let a = PointV::point(1.0, 0.0, 0.0);
        let left = PointV::point(1.0, 1.0, 0.0);
        let right = PointV::point(1.0, -1.0, 0.0);
        assert!(ccw(&o, &a, &left, -1e-6));
        assert!(!ccw(&o, &a, &right, -1e-6));
        // Colinear counts as acceptable under the negative tolerance.
        let ahead = PointV::point(2.0, 0.0, 0.0);
        assert!(ccw(&o, &a, &ahead, -1e-6));
    }
}
