use super::BULGE_TOLERANCE;
use crate::math::arc::arc_bulge;
use crate::math::point::{cross_at, PointV};
use crate::math::TOLERANCE;

/// Graham-scan convex hull of an arbitrary 2D/3D point cloud (the scan works
/// in the XY plane).
///
/// Steps: tolerance deduplication, x-then-y sort, pivot at the upper-right
/// extreme (sidesteps the sign ambiguity of negative polar angles), angular
/// sort about the pivot with a distance tie-break, then the guarded stack
/// scan. A post-pass drops near-colinear triples so the hull carries no
/// spurious edge points.
///
/// Returns the hull boundary in counter-clockwise order. Inputs of up to two
/// distinct points come back as-is after deduplication.
#[must_use]
pub fn convex_hull(points: &[PointV]) -> Vec<PointV> {
    // Per-axis tolerance dedup, first occurrence wins.
    let mut pts: Vec<PointV> = Vec::with_capacity(points.len());
    for p in points {
        if !pts.iter().any(|q| q.eq_coords(p, TOLERANCE)) {
            pts.push(*p);
        }
    }

    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
    if pts.len() <= 2 {
        return pts;
    }

    // Upper-right extreme; every other point lies left of or below it.
    let p0 = pts[pts.len() - 1];

    // Angular key: vertical component ratio of p0 -> p, which decreases
    // monotonically as the direction sweeps counter-clockwise through the
    // half-plane containing the cloud. The pivot itself keys highest.
    let polar_key = |p: &PointV| -> f64 {
        let d = p0.distance_to(p);
        if d == 0.0 {
            1.0
        } else {
            (p.y - p0.y) / d
        }
    };
    pts.sort_by(|a, b| {
        polar_key(b)
            .total_cmp(&polar_key(a))
            .then_with(|| p0.distance_to(a).total_cmp(&p0.distance_to(b)))
    });

    let mut stack: Vec<PointV> = Vec::with_capacity(pts.len());
    stack.push(p0);
    stack.push(pts[1]);
    for qn in pts.iter().skip(2) {
        // Pop while the top two entries and the candidate fail the
        // left-turn test; the bottom pair stays so the pivot survives.
        while stack.len() > 2 {
            let q1 = stack[stack.len() - 1];
            let q0 = stack[stack.len() - 2];
            if cross_at(&q1, &q0, qn) >= -TOLERANCE {
                stack.pop();
            } else {
                break;
            }
        }
        stack.push(*qn);
    }

    // Push order runs counter-clockwise. Prune near-colinear triples,
    // re-testing the same index after each removal.
    let mut hull = stack;
    let mut i = 0;
    while i + 2 < hull.len() {
        let bu = arc_bulge(&hull[i], &hull[i + 1], &hull[i + 2]).unwrap_or(f64::NAN);
        if bu.abs() < BULGE_TOLERANCE {
            hull.remove(i + 1);
        } else {
            i += 1;
        }
    }
    hull
}
