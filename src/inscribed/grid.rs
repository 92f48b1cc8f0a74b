use super::polygon::Polygon;
use super::{BOUNDARY_SAMPLES, MERGE_TOLERANCE};
use crate::error::{GeometryError, Result};
use crate::math::PointV;

/// An axis-aligned rectangle held as its corner pair; the area is always
/// derived from the corners.
#[derive(Debug, Clone)]
pub struct Rect {
    left_bottom: PointV,
    right_top: PointV,
}

impl Rect {
    /// Builds a rectangle from its lower-left and upper-right corners.
    #[must_use]
    pub fn new(left_bottom: PointV, right_top: PointV) -> Self {
        Self { left_bottom, right_top }
    }

    /// Lower-left corner.
    #[must_use]
    pub fn left_bottom(&self) -> &PointV {
        &self.left_bottom
    }

    /// Upper-right corner.
    #[must_use]
    pub fn right_top(&self) -> &PointV {
        &self.right_top
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right_top.x - self.left_bottom.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.right_top.y - self.left_bottom.y
    }

    /// Area derived from the corner pair.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The four corners in counter-clockwise order from the lower-left.
    #[must_use]
    pub fn corners(&self) -> [PointV; 4] {
        [
            self.left_bottom,
            PointV::point(self.right_top.x, self.left_bottom.y, 0.0),
            self.right_top,
            PointV::point(self.left_bottom.x, self.right_top.y, 0.0),
        ]
    }
}

/// Grid decomposition of a polygon: the sorted, tolerance-merged X and Y
/// coordinate sets whose cross product defines the candidate cells.
///
/// Coordinates come from the vertices themselves plus, for every vertex Y,
/// the interpolated X of each polygon edge crossing that Y (and
/// symmetrically for X).
///
/// # Errors
///
/// Returns `DegenerateInput` when fewer than two distinct coordinates
/// survive on either axis.
pub(crate) fn rectangulate(polygon: &Polygon) -> Result<(Vec<f64>, Vec<f64>)> {
    let vertex_xs = distinct_sorted(polygon.points().iter().map(|p| p.x));
    let vertex_ys = distinct_sorted(polygon.points().iter().map(|p| p.y));

    let mut xs = vertex_xs.clone();
    for &y in &vertex_ys {
        for e in polygon.edges() {
            let (y1, y2) = (e.start().y, e.end().y);
            if y <= y1.max(y2) && y >= y1.min(y2) && y1 != y2 {
                xs.push((y - y1) * (e.end().x - e.start().x) / (y2 - y1) + e.start().x);
            }
        }
    }

    let mut ys = vertex_ys;
    for &x in &vertex_xs {
        for e in polygon.edges() {
            let (x1, x2) = (e.start().x, e.end().x);
            if x <= x1.max(x2) && x >= x1.min(x2) && x1 != x2 {
                ys.push((x - x1) * (e.end().y - e.start().y) / (x2 - x1) + e.start().y);
            }
        }
    }

    let xs = merge_sorted(xs, MERGE_TOLERANCE);
    let ys = merge_sorted(ys, MERGE_TOLERANCE);
    if xs.len() < 2 || ys.len() < 2 {
        return Err(GeometryError::DegenerateInput(
            "polygon rectangulation produced no cells".into(),
        ));
    }
    Ok((xs, ys))
}

/// Classifies every grid cell: `true` marks a cell that is (at least
/// partially) outside the polygon.
///
/// A cell is outside when any of its four corners is, or when any of the
/// interpolated samples along either diagonal falls outside; the diagonal
/// pass catches concave boundaries that slip between all-inside corners.
pub(crate) fn classify(polygon: &Polygon, xs: &[f64], ys: &[f64]) -> Vec<Vec<bool>> {
    let nx = xs.len() - 1;
    let ny = ys.len() - 1;
    let mut outside = vec![vec![false; ny]; nx];
    for (i, col) in outside.iter_mut().enumerate() {
        for (j, cell) in col.iter_mut().enumerate() {
            let lb = PointV::point(xs[i], ys[j], 0.0);
            let rt = PointV::point(xs[i + 1], ys[j + 1], 0.0);
            let lt = PointV::point(xs[i], ys[j + 1], 0.0);
            let rb = PointV::point(xs[i + 1], ys[j], 0.0);

            if !polygon.contains(&lb)
                || !polygon.contains(&rt)
                || !polygon.contains(&lt)
                || !polygon.contains(&rb)
                || diagonal_escapes(polygon, &lb, &rt)
                || diagonal_escapes(polygon, &lt, &rb)
            {
                *cell = true;
            }
        }
    }
    outside
}

/// True when any interpolated sample strictly between `p1` and `p2` leaves
/// the polygon.
pub(crate) fn diagonal_escapes(polygon: &Polygon, p1: &PointV, p2: &PointV) -> bool {
    let a = ((p2.y - p1.y) / (p2.x - p1.x)).atan();
    let l = p1.distance_to(p2);
    let n = BOUNDARY_SAMPLES as f64;
    for idx in 1..BOUNDARY_SAMPLES - 1 {
        let t = idx as f64 * l / n;
        let sample = PointV::point(p1.x + a.cos() * t, p1.y + a.sin() * t, 0.0);
        if !polygon.contains(&sample) {
            return true;
        }
    }
    false
}

/// Largest rectangle whose covered cells are all inside, via a 2D
/// inclusion-exclusion prefix sum and an O(rows²·cols²) corner-pair sweep.
/// Ties keep the first-found maximum; with no all-inside cell the zero
/// rectangle at the origin comes back.
pub(crate) fn max_inside_rect(outside: &[Vec<bool>], xs: &[f64], ys: &[f64]) -> Rect {
    let nx = xs.len() - 1;
    let ny = ys.len() - 1;

    let mut pref = vec![vec![0_i64; ny]; nx];
    for i in 0..nx {
        for j in 0..ny {
            pref[i][j] = i64::from(!outside[i][j]);
            if i > 0 {
                pref[i][j] += pref[i - 1][j];
            }
            if j > 0 {
                pref[i][j] += pref[i][j - 1];
            }
            if i > 0 && j > 0 {
                pref[i][j] -= pref[i - 1][j - 1];
            }
        }
    }

    let mut best = Rect::new(
        PointV::point(0.0, 0.0, 0.0),
        PointV::point(0.0, 0.0, 0.0),
    );
    for i1 in 0..nx {
        for j1 in 0..ny {
            for i2 in i1..nx {
                for j2 in j1..ny {
                    let mut count = pref[i2][j2];
                    if j1 > 0 {
                        count -= pref[i2][j1 - 1];
                    }
                    if i1 > 0 {
                        count -= pref[i1 - 1][j2];
                    }
                    if i1 > 0 && j1 > 0 {
                        count += pref[i1 - 1][j1 - 1];
                    }
                    let cells = ((i2 - i1 + 1) * (j2 - j1 + 1)) as i64;
                    if cells == count {
                        let temp = Rect::new(
                            PointV::point(xs[i1], ys[j1], 0.0),
                            PointV::point(xs[i2 + 1], ys[j2 + 1], 0.0),
                        );
                        if temp.area() > best.area() {
                            best = temp;
                        }
                    }
                }
            }
        }
    }
    best
}

fn distinct_sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(f64::total_cmp);
    v.dedup();
    v
}

fn merge_sorted(mut values: Vec<f64>, tolerance: f64) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    let mut out: Vec<f64> = Vec::with_capacity(values.len());
    for v in values {
        if out.last().map_or(true, |last| (v - last).abs() >= tolerance) {
            out.push(v);
        }
    }
    out
}
