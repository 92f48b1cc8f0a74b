pub mod grid;
pub mod polygon;
pub mod search;

pub use grid::Rect;
pub use polygon::{Edge, Polygon};
pub use search::{largest_rectangle, InscribedRect};

/// Tolerance for merging near-equal grid coordinates during rectangulation.
pub const MERGE_TOLERANCE: f64 = 1e-5;

/// Number of interpolation samples along each cell diagonal when checking
/// concave boundary crossings.
pub const BOUNDARY_SAMPLES: usize = 50;
