use crate::error::{GeometryError, Result};
use crate::math::distance::point_to_segment_dist;
use crate::math::{PointV, TOLERANCE};

/// One oriented polygon edge with its outward normal.
#[derive(Debug, Clone)]
pub struct Edge {
    start: PointV,
    end: PointV,
    normal: PointV,
}

impl Edge {
    /// Start vertex.
    #[must_use]
    pub fn start(&self) -> &PointV {
        &self.start
    }

    /// End vertex.
    #[must_use]
    pub fn end(&self) -> &PointV {
        &self.end
    }

    /// Unit normal pointing out of the polygon.
    #[must_use]
    pub fn normal(&self) -> &PointV {
        &self.normal
    }
}

/// A simple 2D polygon: ordered vertices (CCW or CW) with an implicit
/// closing edge, plus the derived oriented edge list.
#[derive(Debug, Clone)]
pub struct Polygon {
    points: Vec<PointV>,
    edges: Vec<Edge>,
}

impl Polygon {
    /// Builds a polygon from an ordered vertex list. A duplicated closing
    /// vertex is dropped; either winding is accepted.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` for fewer than three distinct vertices or a
    /// zero-length edge.
    pub fn new(points: Vec<PointV>) -> Result<Self> {
        let mut points = points;
        if points.len() > 1
            && points[0].eq_coords(&points[points.len() - 1], TOLERANCE)
        {
            points.pop();
        }
        if points.len() < 3 {
            return Err(GeometryError::DegenerateInput(
                "polygon needs at least three vertices".into(),
            ));
        }

        let ccw = signed_area(&points) > 0.0;
        let n = points.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            let start = points[i];
            let end = points[(i + 1) % n];
            let dir = start.vector_to(&end).unit()?;
            // For a CCW boundary the outward side is to the right of travel.
            let normal = if ccw {
                PointV::vector(dir.y, -dir.x, 0.0)
            } else {
                PointV::vector(-dir.y, dir.x, 0.0)
            };
            edges.push(Edge { start, end, normal });
        }
        Ok(Self { points, edges })
    }

    /// The vertex list (closing vertex implicit).
    #[must_use]
    pub fn points(&self) -> &[PointV] {
        &self.points
    }

    /// The derived oriented edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Signed area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Containment test; the boundary counts as inside.
    ///
    /// The ray cast alone is blind to points lying exactly on a horizontal
    /// edge, so the boundary is tested first by segment distance.
    #[must_use]
    pub fn contains(&self, point: &PointV) -> bool {
        self.on_boundary(point, TOLERANCE) || point.in_boundary(&self.points, true, TOLERANCE)
    }

    /// True when the point lies within `tolerance` of any polygon edge.
    #[must_use]
    pub fn on_boundary(&self, point: &PointV, tolerance: f64) -> bool {
        self.edges.iter().any(|e| {
            point_to_segment_dist(point.x, point.y, e.start.x, e.start.y, e.end.x, e.end.y)
                <= tolerance
        })
    }

    /// A copy of this polygon rotated by `angle` about the world origin.
    ///
    /// # Errors
    ///
    /// Propagates construction errors (the rotation itself cannot fail for
    /// a valid polygon).
    pub fn rotated(&self, angle: f64) -> Result<Polygon> {
        let pts = self
            .points
            .iter()
            .map(|p| p.rotate_by(angle, &PointV::Z_AXIS, &PointV::ORIGIN))
            .collect::<Result<Vec<_>>>()?;
        Polygon::new(pts)
    }
}

/// Shoelace signed area of a vertex loop.
fn signed_area(points: &[PointV]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> PointV {
        PointV::point(x, y, 0.0)
    }

    fn ccw_square() -> Polygon {
        Polygon::new(vec![pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0)]).unwrap()
    }

    #[test]
    fn closing_vertex_dropped() {
        let p = Polygon::new(vec![
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(0.0, 1.0),
            pt(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(p.points().len(), 3);
    }

    #[test]
    fn too_few_vertices_rejected() {
        assert!(Polygon::new(vec![pt(0.0, 0.0), pt(1.0, 0.0)]).is_err());
    }

    #[test]
    fn outward_normals_ccw() {
        let p = ccw_square();
        // Bottom edge of a CCW square points down and out.
        let n = p.edges()[0].normal();
        assert!(n.eq_with(&PointV::vector(0.0, -1.0, 0.0), 1e-9), "n={n:?}");
    }

    #[test]
    fn outward_normals_cw() {
        let p = Polygon::new(vec![pt(0.0, 0.0), pt(0.0, 2.0), pt(2.0, 2.0), pt(2.0, 0.0)])
            .unwrap();
        assert!(p.signed_area() < 0.0);
        // First edge runs up the left side; outward is -X either winding.
        let n = p.edges()[0].normal();
        assert!(n.eq_with(&PointV::vector(-1.0, 0.0, 0.0), 1e-9), "n={n:?}");
    }

    #[test]
    fn contains_interior_boundary_exterior() {
        let p = ccw_square();
        assert!(p.contains(&pt(1.0, 1.0)));
        assert!(p.contains(&pt(2.0, 1.0)), "boundary counts as inside");
        assert!(!p.contains(&pt(2.5, 1.0)));
    }

    #[test]
    fn contains_points_on_horizontal_edges() {
        // The ray cast alone misses these; the segment-distance pass must
        // catch them.
        let p = ccw_square();
        assert!(p.contains(&pt(1.0, 0.0)), "bottom edge midpoint");
        assert!(p.contains(&pt(1.0, 2.0)), "top edge midpoint");
    }

    #[test]
    fn rotated_preserves_area() {
        let p = ccw_square();
        let r = p.rotated(0.7).unwrap();
        assert!((r.signed_area().abs() - 4.0).abs() < 1e-9);
    }
}
