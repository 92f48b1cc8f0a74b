pub mod arc;
pub mod distance;
pub mod frame;
pub mod matrix;
pub mod point;

pub use frame::Frame;
pub use matrix::Mat;
pub use point::PointV;

/// 2D host point type (system boundary only, see [`crate::adapter`]).
pub type HostPoint2 = nalgebra::Point2<f64>;

/// 3D host point type (system boundary only, see [`crate::adapter`]).
pub type HostPoint3 = nalgebra::Point3<f64>;

/// 2D host vector type (system boundary only, see [`crate::adapter`]).
pub type HostVector2 = nalgebra::Vector2<f64>;

/// 3D host vector type (system boundary only, see [`crate::adapter`]).
pub type HostVector3 = nalgebra::Vector3<f64>;

/// Global tolerance for point deduplication and equality comparisons.
pub const TOLERANCE: f64 = 1e-6;

/// A full turn. CAD angle conventions run `[0, 2π)` counter-clockwise.
pub const TAU: f64 = std::f64::consts::PI * 2.0;
