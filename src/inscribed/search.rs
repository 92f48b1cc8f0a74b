use std::f64::consts::FRAC_PI_2;

use super::grid::{classify, max_inside_rect, rectangulate, Rect};
use super::polygon::Polygon;
use crate::error::Result;
use crate::math::{PointV, TOLERANCE};

/// Result of the inscribed-rectangle search: the winning axis-aligned
/// rectangle together with the rotation that was applied to the polygon
/// before the grid search found it.
#[derive(Debug, Clone)]
pub struct InscribedRect {
    rect: Rect,
    angle: f64,
}

impl InscribedRect {
    /// The rectangle, axis-aligned in the rotated frame.
    #[must_use]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// The rotation (radians, about the world origin) that was applied to
    /// the polygon before the grid search. Zero when the axis-aligned run
    /// won outright.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The four rectangle corners mapped back into the polygon's original
    /// frame.
    ///
    /// # Errors
    ///
    /// Never fails for finite corners; the `Result` mirrors the rotation
    /// plumbing.
    pub fn corners(&self) -> Result<[PointV; 4]> {
        let c = self.rect.corners();
        Ok([
            c[0].rotate_by(-self.angle, &PointV::Z_AXIS, &PointV::ORIGIN)?,
            c[1].rotate_by(-self.angle, &PointV::Z_AXIS, &PointV::ORIGIN)?,
            c[2].rotate_by(-self.angle, &PointV::Z_AXIS, &PointV::ORIGIN)?,
            c[3].rotate_by(-self.angle, &PointV::Z_AXIS, &PointV::ORIGIN)?,
        ])
    }
}

/// Largest axis-aligned rectangle inscribed in a simple polygon, retried
/// over a finite set of rotation angles.
///
/// The base run searches the polygon as given. Candidate angles then come
/// from the polygon's own edge directions folded modulo π/2 (an edge flush
/// with the rectangle is the usual winner), with near-axis-aligned angles
/// skipped as already covered; each candidate rotates the polygon, reruns
/// the grid search, and competes on area.
///
/// The search is a heuristic over a finite grid: the result is large, not
/// provably optimal, and polygons with cells near the boundary can resolve
/// differently after tiny repositioning of the same shape. That boundary
/// sensitivity is inherited behavior, deliberately left as is.
///
/// # Errors
///
/// Returns `DegenerateInput` when the polygon cannot be decomposed into
/// grid cells.
pub fn largest_rectangle(polygon: &Polygon) -> Result<InscribedRect> {
    let mut best = InscribedRect {
        rect: grid_search(polygon)?,
        angle: 0.0,
    };

    for angle in candidate_angles(polygon)? {
        let rotated = polygon.rotated(-angle)?;
        let rect = grid_search(&rotated)?;
        if rect.area() > best.rect.area() {
            best = InscribedRect { rect, angle: -angle };
        }
    }
    Ok(best)
}

/// One axis-aligned pass: rectangulate, classify, sweep.
fn grid_search(polygon: &Polygon) -> Result<Rect> {
    let (xs, ys) = rectangulate(polygon)?;
    let outside = classify(polygon, &xs, &ys);
    Ok(max_inside_rect(&outside, &xs, &ys))
}

/// Edge-direction angles folded modulo π/2, deduplicated, with angles
/// within tolerance of an axis (already covered by the base run) excluded.
fn candidate_angles(polygon: &Polygon) -> Result<Vec<f64>> {
    let mut angles: Vec<f64> = Vec::new();
    for e in polygon.edges() {
        let dir = e.start().x_axis_angle_to(e.end(), TOLERANCE)?;
        let folded = dir.rem_euclid(FRAC_PI_2);
        if folded <= TOLERANCE || FRAC_PI_2 - folded <= TOLERANCE {
            continue;
        }
        if !angles.iter().any(|a| (a - folded).abs() <= TOLERANCE) {
            angles.push(folded);
        }
    }
    Ok(angles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;

    fn pt(x: f64, y: f64) -> PointV {
        PointV::point(x, y, 0.0)
    }

    #[test]
    fn l_shape_rectangle_has_area_two() {
        let p = Polygon::new(vec![
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            pt(2.0, 1.0),
            pt(1.0, 1.0),
            pt(1.0, 2.0),
            pt(0.0, 2.0),
        ])
        .unwrap();
        let best = largest_rectangle(&p).unwrap();
        assert!((best.rect().area() - 2.0).abs() < 1e-9);
        // Axis-aligned edges only: no rotation candidate can apply.
        assert!(best.angle().abs() < 1e-12);
    }

    #[test]
    fn diamond_needs_the_rotation_search() {
        // Unit-ish diamond: axis-aligned search tops out at area 1, the
        // 45-degree candidate recovers the full square of area 2.
        let p = Polygon::new(vec![
            pt(1.0, 0.0),
            pt(2.0, 1.0),
            pt(1.0, 2.0),
            pt(0.0, 1.0),
        ])
        .unwrap();
        let best = largest_rectangle(&p).unwrap();
        assert!(
            (best.rect().area() - 2.0).abs() < 1e-6,
            "area={}",
            best.rect().area()
        );
        assert!(
            (best.angle().abs() - FRAC_PI_4).abs() < 1e-9,
            "angle={}",
            best.angle()
        );
    }

    #[test]
    fn corners_map_back_into_the_polygon() {
        let p = Polygon::new(vec![
            pt(0.0, 0.0),
            pt(4.0, 0.0),
            pt(5.0, 2.0),
            pt(2.0, 4.0),
            pt(-1.0, 2.0),
        ])
        .unwrap();
        let best = largest_rectangle(&p).unwrap();
        assert!(best.rect().area() > 0.0);
        for c in best.corners().unwrap() {
            assert!(p.contains(&c), "corner {c:?} fell outside");
        }
    }

    #[test]
    fn candidate_angles_fold_and_dedup() {
        // Diamond edges sit at 45, 135, 225, 315 degrees: one candidate.
        let p = Polygon::new(vec![
            pt(1.0, 0.0),
            pt(2.0, 1.0),
            pt(1.0, 2.0),
            pt(0.0, 1.0),
        ])
        .unwrap();
        let angles = candidate_angles(&p).unwrap();
        assert_eq!(angles.len(), 1);
        assert!((angles[0] - FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn axis_aligned_polygon_yields_no_candidates() {
        let p = Polygon::new(vec![pt(0.0, 0.0), pt(3.0, 0.0), pt(3.0, 2.0), pt(0.0, 2.0)])
            .unwrap();
        assert!(candidate_angles(&p).unwrap().is_empty());
    }
}
