//! basalgeo debug harness — runs every toolkit stage on a sample point set
//! and prints the geometric results.
//!
//! ```text
//! cargo run --example debug
//! ```

use basalgeo::hull::{convex_hull, diameter, min_area_bounding_box, min_non_adjacent_distance};
use basalgeo::inscribed::{largest_rectangle, Polygon};
use basalgeo::math::PointV;
use basalgeo::transform::{apply_perspective, perspective_matrix};
use basalgeo::Result;

fn main() -> Result<()> {
    let cloud = vec![
        PointV::point(0.0, 0.0, 0.0),
        PointV::point(4.0, -1.0, 0.0),
        PointV::point(5.0, 3.0, 0.0),
        PointV::point(2.0, 5.0, 0.0),
        PointV::point(-1.0, 2.0, 0.0),
        PointV::point(2.0, 2.0, 0.0),
        PointV::point(3.0, 1.0, 0.0),
        PointV::point(2.0, 2.0, 0.0),
    ];

    let hull = convex_hull(&cloud);
    println!("hull ({} points):", hull.len());
    for p in &hull {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }

    println!("diameter: {:.6}", diameter(&hull));
    println!("min non-adjacent distance: {:.6}", min_non_adjacent_distance(&hull));

    let obb = min_area_bounding_box(&hull)?;
    println!("minimum bounding box area: {:.6}", obb.area());

    let polygon = Polygon::new(vec![
        PointV::point(0.0, 0.0, 0.0),
        PointV::point(2.0, 0.0, 0.0),
        PointV::point(2.0, 1.0, 0.0),
        PointV::point(1.0, 1.0, 0.0),
        PointV::point(1.0, 2.0, 0.0),
        PointV::point(0.0, 2.0, 0.0),
    ])?;
    let inscribed = largest_rectangle(&polygon)?;
    println!(
        "largest inscribed rectangle: area {:.6} at rotation {:.4} rad",
        inscribed.rect().area(),
        inscribed.angle()
    );
    for c in inscribed.corners()? {
        println!("  ({:.3}, {:.3})", c.x, c.y);
    }

    let src = [
        PointV::point(0.0, 0.0, 0.0),
        PointV::point(1.0, 0.0, 0.0),
        PointV::point(1.0, 1.0, 0.0),
        PointV::point(0.0, 1.0, 0.0),
    ];
    let dst = [
        PointV::point(0.0, 0.0, 0.0),
        PointV::point(2.0, 0.2, 0.0),
        PointV::point(1.8, 2.1, 0.0),
        PointV::point(-0.1, 1.9, 0.0),
    ];
    let h = perspective_matrix(&src, &dst)?;
    let mapped = apply_perspective(&src, &h);
    println!("perspective-mapped unit square:");
    for p in &mapped {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }

    Ok(())
}
