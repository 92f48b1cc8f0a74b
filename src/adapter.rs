//! Conversions between host-geometry types and the core value types.
//!
//! The core never consumes host types directly; callers convert at this
//! boundary so the algorithms stay free of any host dependency.

use crate::math::{HostPoint2, HostPoint3, HostVector2, HostVector3, PointV};

/// Converts a host 3D point into a bound point.
#[must_use]
pub fn from_host_point(p: &HostPoint3) -> PointV {
    PointV::point(p.x, p.y, p.z)
}

/// Converts a host 2D point into a bound point in the XY plane.
#[must_use]
pub fn from_host_point_2d(p: &HostPoint2) -> PointV {
    PointV::point(p.x, p.y, 0.0)
}

/// Converts a host 3D vector into a free vector.
#[must_use]
pub fn from_host_vector(v: &HostVector3) -> PointV {
    PointV::vector(v.x, v.y, v.z)
}

/// Converts a host 2D vector into a free vector in the XY plane.
#[must_use]
pub fn from_host_vector_2d(v: &HostVector2) -> PointV {
    PointV::vector(v.x, v.y, 0.0)
}

/// Converts a core value back into a host 3D point.
#[must_use]
pub fn to_host_point(p: &PointV) -> HostPoint3 {
    HostPoint3::new(p.x, p.y, p.z)
}

/// Converts a core value back into a host 2D point, dropping Z.
#[must_use]
pub fn to_host_point_2d(p: &PointV) -> HostPoint2 {
    HostPoint2::new(p.x, p.y)
}

/// Converts a core value back into a host 3D vector.
#[must_use]
pub fn to_host_vector(v: &PointV) -> HostVector3 {
    HostVector3::new(v.x, v.y, v.z)
}

/// Converts a host 3D point slice into core points.
#[must_use]
pub fn from_host_points(pts: &[HostPoint3]) -> Vec<PointV> {
    pts.iter().map(from_host_point).collect()
}

/// Converts core values back into host 3D points.
#[must_use]
pub fn to_host_points(pts: &[PointV]) -> Vec<HostPoint3> {
    pts.iter().map(to_host_point).collect()
}
