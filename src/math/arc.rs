//! Bulge arithmetic for polyline arc segments.
//!
//! A bulge encodes a segment's curvature as the tangent of a quarter of its
//! subtended arc angle: zero is a straight segment, positive winds
//! counter-clockwise, `±1` is a semicircle.

use std::f64::consts::PI;

use super::PointV;
use crate::error::{GeometryError, Result};

/// Bulge of the arc through three points (start, waist, end).
///
/// Computed from the two waist-point angles; the result snaps to exactly
/// `±1` within `1e-4` and to `0` below `1e-10`, so the value doubles as a
/// colinearity test for the triple.
///
/// # Errors
///
/// Returns `DegenerateInput` when the waist coincides with an endpoint.
pub fn arc_bulge(start: &PointV, waist: &PointV, end: &PointV) -> Result<f64> {
    let start_angle = waist.x_axis_angle_to(start, 1e-6)?;
    let end_angle = waist.x_axis_angle_to(end, 1e-6)?;
    // Half the angle between waist->start and waist->end; the tangent is
    // the sagitta-to-half-chord ratio, which is the bulge.
    let tal = (PI - start_angle + end_angle) / 2.0;
    let bulge = tal.sin() / tal.cos();

    if bulge > 0.9999 && bulge < 1.0001 {
        Ok(1.0)
    } else if bulge < -0.9999 && bulge > -1.0001 {
        Ok(-1.0)
    } else if bulge.abs() < 1e-10 {
        Ok(0.0)
    } else {
        Ok(bulge)
    }
}

/// Center of the arc with the given chord endpoints and bulge.
///
/// # Errors
///
/// Returns `DegenerateInput` for a zero bulge (a straight segment has no
/// center).
pub fn bulge_center(start: &PointV, end: &PointV, bulge: f64) -> Result<PointV> {
    if bulge == 0.0 {
        return Err(GeometryError::DegenerateInput(
            "zero bulge has no arc center".into(),
        ));
    }
    let b = (1.0 / bulge - bulge) / 2.0;
    let x = (start.x + end.x - b * (end.y - start.y)) / 2.0;
    let y = (start.y + end.y + b * (end.x - start.x)) / 2.0;
    Ok(PointV::point(x, y, 0.0))
}

/// Arc length of the segment with the given chord endpoints and bulge.
///
/// # Errors
///
/// Returns `DegenerateInput` for a zero bulge.
pub fn bulge_arc_length(start: &PointV, end: &PointV, bulge: f64) -> Result<f64> {
    if bulge == 0.0 {
        return Err(GeometryError::DegenerateInput(
            "zero bulge has no arc length".into(),
        ));
    }
    let half_chord = start.distance_to(end) / 2.0;
    let sagitta = bulge.abs() * half_chord;
    // (half chord)² + (r - sagitta)² = r², solved for r.
    let radius = (half_chord * half_chord + sagitta * sagitta) / (2.0 * sagitta);
    let sweep = (half_chord / radius).asin() * 2.0;
    Ok(sweep * radius)
}
