//! Polar to cartesian sampling

use crate::float_types::Real;
use nalgebra::Point3;

/// Point at `radius` from the z axis, `angle` radians counter-clockwise from +X, at height `z`.
///
/// A zero radius yields a point on the z axis.
#[inline]
pub fn polar_point(radius: Real, angle: Real, z: Real) -> Point3<Real> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(radius * cos, radius * sin, z)
}
