use super::{PointV, TOLERANCE};
use crate::error::Result;

/// A coordinate system: origin plus X/Y axes, with the Z axis derived from
/// their cross product (never set independently).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    origin: PointV,
    x_axis: PointV,
    y_axis: PointV,
    z_axis: PointV,
}

impl Frame {
    /// Builds a frame from an origin and two axis vectors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperand` when an axis argument is a bound point (the
    /// derived Z axis requires vector operands).
    pub fn new(origin: PointV, x_axis: PointV, y_axis: PointV) -> Result<Self> {
        let z_axis = x_axis.cross_3d(&y_axis)?;
        Ok(Self { origin, x_axis, y_axis, z_axis })
    }

    /// The world coordinate system: origin at zero, axes on the standard
    /// basis.
    #[must_use]
    pub fn world() -> Self {
        Self {
            origin: PointV::ORIGIN,
            x_axis: PointV::X_AXIS,
            y_axis: PointV::Y_AXIS,
            z_axis: PointV::Z_AXIS,
        }
    }

    /// Origin of the frame.
    #[must_use]
    pub fn origin(&self) -> &PointV {
        &self.origin
    }

    /// X axis of the frame.
    #[must_use]
    pub fn x_axis(&self) -> &PointV {
        &self.x_axis
    }

    /// Y axis of the frame.
    #[must_use]
    pub fn y_axis(&self) -> &PointV {
        &self.y_axis
    }

    /// Derived Z axis of the frame.
    #[must_use]
    pub fn z_axis(&self) -> &PointV {
        &self.z_axis
    }

    /// Tolerance equality over all four member vectors (coordinates only).
    #[must_use]
    pub fn eq_with(&self, other: &Frame, tolerance: f64) -> bool {
        self.origin.eq_coords(&other.origin, tolerance)
            && self.x_axis.eq_coords(&other.x_axis, tolerance)
            && self.y_axis.eq_coords(&other.y_axis, tolerance)
            && self.z_axis.eq_coords(&other.z_axis, tolerance)
    }

    /// The three rotation angles, about the world X, Y then Z axes, that
    /// carry this frame's orientation onto the world frame.
    ///
    /// The frame is first re-seated at the world origin, its Z axis is
    /// decomposed via [`PointV::to_wcs_angles`], and the Z rotation is the
    /// residual X-axis angle once the first two rotations are applied.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` for degenerate (zero-length) axes.
    pub fn to_wcs_angles(&self) -> Result<(f64, f64, f64)> {
        let seated = Frame::new(PointV::ORIGIN, self.x_axis, self.y_axis)?;
        let (alx, aly) = seated.z_axis.to_wcs_angles(TOLERANCE)?;
        let new_xa = seated
            .x_axis
            .rotate_by(alx, &PointV::X_AXIS, &PointV::ORIGIN)?
            .rotate_by(aly, &PointV::Y_AXIS, &PointV::ORIGIN)?;
        let new_xa = PointV::vector(new_xa.x, new_xa.y, new_xa.z);
        let alz = -new_xa.angle_to_x_axis(TOLERANCE)?;
        Ok((alx, aly, alz))
    }
}

impl PointV {
    fn wcs_to_ucs(&self, ucs: &Frame) -> Result<PointV> {
        let (alx, aly, alz) = ucs.to_wcs_angles()?;
        let pt = PointV::point(
            self.x - ucs.origin.x,
            self.y - ucs.origin.y,
            self.z - ucs.origin.z,
        );
        pt.rotate_by(alx, &PointV::X_AXIS, &PointV::ORIGIN)?
            .rotate_by(aly, &PointV::Y_AXIS, &PointV::ORIGIN)?
            .rotate_by(alz, &PointV::Z_AXIS, &PointV::ORIGIN)
    }

    fn ucs_to_wcs(&self, ucs: &Frame) -> Result<PointV> {
        let (alx, aly, alz) = ucs.to_wcs_angles()?;
        let pt = self
            .rotate_by(-alz, &PointV::Z_AXIS, &PointV::ORIGIN)?
            .rotate_by(-aly, &PointV::Y_AXIS, &PointV::ORIGIN)?
            .rotate_by(-alx, &PointV::X_AXIS, &PointV::ORIGIN)?;
        Ok(PointV::point(
            pt.x + ucs.origin.x,
            pt.y + ucs.origin.y,
            pt.z + ucs.origin.z,
        ))
    }

    /// Re-expresses this point in `target` frame coordinates, given its
    /// current `source` frame.
    ///
    /// Routes through the world frame unless either endpoint already is the
    /// world frame, in which case a single hop suffices.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` for frames with degenerate axes.
    pub fn transform(&self, source: &Frame, target: &Frame) -> Result<PointV> {
        if source == target {
            return Ok(*self);
        }
        let wcs = Frame::world();
        if *target == wcs {
            self.ucs_to_wcs(source)
        } else if *source == wcs {
            self.wcs_to_ucs(target)
        } else {
            self.ucs_to_wcs(source)?.wcs_to_ucs(target)
        }
    }
}
