use crate::error::{GeometryError, Result};
use crate::math::point::{cross_at, PointV};
use crate::math::TOLERANCE;

/// A rectangle that is generally not axis-aligned, as four corner points in
/// cyclic order.
#[derive(Debug, Clone)]
pub struct OrientedRect {
    corners: [PointV; 4],
}

impl OrientedRect {
    /// The four corners in cyclic order.
    #[must_use]
    pub fn corners(&self) -> &[PointV; 4] {
        &self.corners
    }

    /// Length of the first side.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.corners[0].distance_to(&self.corners[1])
    }

    /// Length of the second side.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.corners[0].distance_to(&self.corners[3])
    }

    /// Area, derived from the side lengths.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Maximum antipodal distance across a hull boundary (rotating calipers).
///
/// For each hull edge a second pointer advances while the triangle area it
/// spans with the edge keeps growing; the area is unimodal around the true
/// antipodal vertex, so the turning point yields the edge's farthest
/// opponent. Degenerate inputs of zero or one point return 0; two points
/// return their distance.
#[must_use]
pub fn diameter(hull: &[PointV]) -> f64 {
    if hull.len() <= 1 {
        return 0.0;
    }
    if hull.len() == 2 {
        return hull[0].distance_to(&hull[1]);
    }

    let mut pts = hull.to_vec();
    // Close the ring so the last edge is swept too.
    pts.push(pts[0]);
    let mut ps = 2usize;
    let p = pts.len() - 2;

    let mut ans: f64 = 0.0;
    for i in 0..p {
        while cross_at(&pts[i], &pts[i + 1], &pts[ps]).abs()
            < cross_at(&pts[i], &pts[i + 1], &pts[ps + 1]).abs()
        {
            ps = (ps + 1) % p;
        }
        ans = ans
            .max(pts[ps].distance_to(&pts[i]))
            .max(pts[ps].distance_to(&pts[i + 1]));
    }
    ans
}

/// Minimum distance between non-adjacent hull vertices.
///
/// Exhaustive O(n²) pair enumeration; hull-edge-connected pairs (including
/// the closing edge) are skipped by construction. Hulls with no
/// non-adjacent pair (three or fewer vertices) return 0, matching the
/// degenerate conventions of [`diameter`].
#[must_use]
pub fn min_non_adjacent_distance(hull: &[PointV]) -> f64 {
    if hull.len() <= 1 {
        return 0.0;
    }
    if hull.len() == 2 {
        return hull[0].distance_to(&hull[1]);
    }

    let last = hull.len() - 1;
    let mut min = f64::INFINITY;
    for i in 0..last {
        // Pairs ahead of the adjacent neighbour; the first vertex also
        // skips the closing-edge neighbour at the back.
        let mut count = last - 1 - i;
        if i == 0 {
            count -= 1;
        }
        let mut j = i + 1;
        for _ in 0..count {
            j += 1;
            let dis = hull[i].distance_to(&hull[j]);
            if dis < min {
                min = dis;
            }
        }
    }
    if min.is_finite() {
        min
    } else {
        0.0
    }
}

/// Oriented minimum-area bounding box of a hull boundary.
///
/// The minimum-area enclosing rectangle of a convex polygon has one side
/// flush with a hull edge, so one candidate per edge is exhaustive: rotate
/// the hull to make the edge axis-aligned, take the axis-aligned extremes,
/// rotate the four corners back. Ties keep the first-found minimum.
///
/// # Errors
///
/// Returns `DegenerateInput` for fewer than three hull vertices.
pub fn min_area_bounding_box(hull: &[PointV]) -> Result<OrientedRect> {
    if hull.len() < 3 {
        return Err(GeometryError::DegenerateInput(
            "bounding box needs at least three hull points".into(),
        ));
    }

    let mut best: Option<OrientedRect> = None;
    let mut best_area = f64::INFINITY;
    for i in 0..hull.len() {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let angle = a.x_axis_angle_to(&b, TOLERANCE)?;

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in hull {
            let r = p.rotate_by(-angle, &PointV::Z_AXIS, &a)?;
            min_x = min_x.min(r.x);
            max_x = max_x.max(r.x);
            min_y = min_y.min(r.y);
            max_y = max_y.max(r.y);
        }

        let area = (max_x - min_x) * (max_y - min_y);
        if area < best_area {
            let corners = [
                PointV::point(min_x, min_y, 0.0).rotate_by(angle, &PointV::Z_AXIS, &a)?,
                PointV::point(max_x, min_y, 0.0).rotate_by(angle, &PointV::Z_AXIS, &a)?,
                PointV::point(max_x, max_y, 0.0).rotate_by(angle, &PointV::Z_AXIS, &a)?,
                PointV::point(min_x, max_y, 0.0).rotate_by(angle, &PointV::Z_AXIS, &a)?,
            ];
            best_area = area;
            best = Some(OrientedRect { corners });
        }
    }
    best.ok_or_else(|| GeometryError::DegenerateInput("empty hull".into()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::hull::convex_hull;

    fn pt(x: f64, y: f64) -> PointV {
        PointV::point(x, y, 0.0)
    }

    fn unit_square_hull() -> Vec<PointV> {
        convex_hull(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)])
    }

    fn hull_area(points: &[PointV]) -> f64 {
        let n = points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += points[i].x * points[j].y - points[j].x * points[i].y;
        }
        (sum * 0.5).abs()
    }

    // ── diameter ──

    #[test]
    fn diameter_of_unit_square_is_sqrt2() {
        let d = diameter(&unit_square_hull());
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-9, "d={d}");
    }

    #[test]
    fn diameter_degenerate_inputs() {
        assert!(diameter(&[]).abs() < 1e-12);
        assert!(diameter(&[pt(3.0, 4.0)]).abs() < 1e-12);
        let two = diameter(&[pt(0.0, 0.0), pt(3.0, 4.0)]);
        assert!((two - 5.0).abs() < 1e-12);
    }

    #[test]
    fn diameter_of_elongated_hull() {
        let hull = convex_hull(&[
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            pt(10.0, 1.0),
            pt(5.0, 2.0),
            pt(0.0, 1.0),
        ]);
        let d = diameter(&hull);
        // Farthest pair is (0, 0) - (10, 1).
        assert!((d - 101.0_f64.sqrt()).abs() < 1e-9, "d={d}");
    }

    // ── minimum non-adjacent distance ──

    #[test]
    fn min_distance_on_square_is_diagonal() {
        // All adjacent pairs are excluded, leaving the two diagonals.
        let d = min_non_adjacent_distance(&unit_square_hull());
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-9, "d={d}");
    }

    #[test]
    fn min_distance_hexagon() {
        let hull = convex_hull(&[
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            pt(3.0, 1.0),
            pt(2.0, 2.0),
            pt(0.0, 2.0),
            pt(-1.0, 1.0),
        ]);
        let d = min_non_adjacent_distance(&hull);
        // Shortest skip-one pair, e.g. (0,0)-(3,1) is sqrt(10); (0,0)-(2,2)
        // is sqrt(8); (2,0)-(2,2) is 2.
        assert!((d - 2.0).abs() < 1e-9, "d={d}");
    }

    #[test]
    fn min_distance_triangle_has_no_pairs() {
        let hull = convex_hull(&[pt(0.0, 0.0), pt(4.0, 0.0), pt(2.0, 3.0)]);
        assert!(min_non_adjacent_distance(&hull).abs() < 1e-12);
    }

    #[test]
    fn min_distance_degenerate_inputs() {
        assert!(min_non_adjacent_distance(&[]).abs() < 1e-12);
        let two = min_non_adjacent_distance(&[pt(0.0, 0.0), pt(0.0, 2.0)]);
        assert!((two - 2.0).abs() < 1e-12);
    }

    // ── oriented minimum-area bounding box ──

    #[test]
    fn bbox_of_square_is_square() {
        let rect = min_area_bounding_box(&unit_square_hull()).unwrap();
        assert!((rect.area() - 1.0).abs() < 1e-9, "area={}", rect.area());
    }

    #[test]
    fn bbox_of_rotated_rectangle_recovers_it() {
        // A 2x1 rectangle spun 30 degrees; the minimum box must have area 2,
        // not the larger axis-aligned bound.
        let angle = 30.0_f64.to_radians();
        let base = [pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 1.0), pt(0.0, 1.0)];
        let spun: Vec<PointV> = base
            .iter()
            .map(|p| p.rotate_by(angle, &PointV::Z_AXIS, &PointV::ORIGIN).unwrap())
            .collect();
        let hull = convex_hull(&spun);
        let rect = min_area_bounding_box(&hull).unwrap();
        assert!((rect.area() - 2.0).abs() < 1e-6, "area={}", rect.area());
    }

    #[test]
    fn bbox_area_bounds_hull_area() {
        let hull = convex_hull(&[
            pt(0.0, 0.0),
            pt(4.0, -1.0),
            pt(5.0, 3.0),
            pt(2.0, 5.0),
            pt(-1.0, 2.0),
        ]);
        let rect = min_area_bounding_box(&hull).unwrap();
        assert!(rect.area() >= hull_area(&hull) - 1e-9);
    }

    #[test]
    fn bbox_rejects_degenerate_hulls() {
        assert!(min_area_bounding_box(&[pt(0.0, 0.0), pt(1.0, 0.0)]).is_err());
    }
}
