//! Circular arc sampling
//!
//! An arc is sampled at `segments` uniform angular steps of `arc / segments`
//! degrees. A full circle stops one step short of 360° and relies on the
//! bridging step to wrap around; a partial arc gets one extra closing point
//! placed exactly at `arc`.

use crate::float_types::{FULL_CIRCLE_DEGREES, Real};
use crate::polar::polar_point;
use nalgebra::Point3;

/// `true` when `arc_degrees` sweeps the whole circle.
#[inline]
pub fn is_full_circle(arc_degrees: Real) -> bool {
    arc_degrees >= FULL_CIRCLE_DEGREES
}

/// Number of points [`arc_points`] produces for the given sampling.
#[inline]
pub fn ring_len(segments: usize, arc_degrees: Real) -> usize {
    if is_full_circle(arc_degrees) {
        segments
    } else {
        segments + 1
    }
}

/// Sample a ring of radius `radius` at height `z` over `arc_degrees`.
///
/// Returns [`ring_len`]`(segments, arc_degrees)` points ordered by increasing angle.
/// `segments` must be at least 1.
pub fn arc_points(radius: Real, segments: usize, z: Real, arc_degrees: Real) -> Vec<Point3<Real>> {
    debug_assert!(segments >= 1, "arc_points requires at least 1 segment");

    let step = (arc_degrees / segments as Real).to_radians();
    let mut points = Vec::with_capacity(ring_len(segments, arc_degrees));
    points.extend((0..segments).map(|i| polar_point(radius, step * i as Real, z)));

    if !is_full_circle(arc_degrees) {
        points.push(polar_point(radius, arc_degrees.to_radians(), z));
    }
    points
}
