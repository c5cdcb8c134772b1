//! Quad strips between two parallel rings

use crate::arc::is_full_circle;
use crate::float_types::Real;

/// A quad, as four indices into the vertex buffer.
///
/// Counter-clockwise when seen from the side its normal points to.
pub type Face = [usize; 4];

/// Connect two rings that were sampled with the same `segments` and `arc_degrees`.
///
/// The rings are identified by their start index only; their length follows from
/// the sampling (see [`crate::arc::ring_len`]). Point `i` of the upper ring is
/// joined with point `i` of the lower ring, giving exactly `segments` quads. A full
/// circle closes the strip with a wrap-around quad from the last points back to the
/// first.
///
/// Swapping `start_upper` and `start_lower` reverses the winding of every quad.
pub fn bridge_loops(
    start_upper: usize,
    start_lower: usize,
    segments: usize,
    arc_degrees: Real,
) -> Vec<Face> {
    let closed = is_full_circle(arc_degrees);
    let spans = if closed {
        segments.saturating_sub(1)
    } else {
        segments
    };

    let mut faces = Vec::with_capacity(spans + usize::from(closed));
    for i in 0..spans {
        faces.push([
            start_upper + i + 1,
            start_upper + i,
            start_lower + i,
            start_lower + i + 1,
        ]);
    }

    if closed {
        faces.push([
            start_upper,
            start_upper + spans,
            start_lower + spans,
            start_lower,
        ]);
    }

    log::trace!(
        "bridged rings {start_upper} -> {start_lower}: {} quads (closed: {closed})",
        faces.len()
    );
    faces
}

/// Reverse the winding of a face.
#[inline]
pub fn flip_face(face: Face) -> Face {
    let [a, b, c, d] = face;
    [d, c, b, a]
}

/// Reverse the winding of every face.
pub fn flip_faces(faces: &[Face]) -> Vec<Face> {
    faces.iter().copied().map(flip_face).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_arc_bridges_every_consecutive_pair() {
        // rings of 5 points at 0 and 5
        let faces = bridge_loops(0, 5, 4, 180.0);
        assert_eq!(faces.len(), 4);
        assert_eq!(faces[0], [1, 0, 5, 6]);
        assert_eq!(faces[3], [4, 3, 8, 9]);
    }

    #[test]
    fn full_circle_wraps_around() {
        // rings of 4 points at 10 and 20
        let faces = bridge_loops(10, 20, 4, 360.0);
        assert_eq!(faces.len(), 4);
        assert_eq!(faces[0], [11, 10, 20, 21]);
        assert_eq!(faces[2], [13, 12, 22, 23]);
        assert_eq!(faces[3], [10, 13, 23, 20]);
    }

    #[test]
    fn swapping_rings_reverses_edge_direction() {
        let forward = bridge_loops(0, 4, 4, 360.0);
        let backward = bridge_loops(4, 0, 4, 360.0);
        for (f, b) in forward.iter().zip(&backward) {
            // the edge f[1] -> f[2] is walked as f[2] -> f[1] by the swapped strip
            assert_eq!((b[1], b[2]), (f[2], f[1]));
        }
    }

    #[test]
    fn empty_full_circle_reserves_only_the_wrap_quad() {
        let faces = bridge_loops(0, 0, 0, 360.0);
        assert_eq!(faces, vec![[0, 0, 0, 0]]);
        assert_eq!(faces.capacity(), 1);
    }

    #[test]
    fn flip_reverses_order() {
        assert_eq!(flip_face([1, 2, 3, 4]), [4, 3, 2, 1]);
        let flipped = flip_faces(&[[0, 1, 2, 3], [4, 5, 6, 7]]);
        assert_eq!(flipped, vec![[3, 2, 1, 0], [7, 6, 5, 4]]);
    }
}
