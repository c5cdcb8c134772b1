//! `TubeMesh` and the composer that builds it

use crate::bridge::{Face, bridge_loops};
use crate::errors::TubeResult;
use crate::float_types::Real;
use crate::params::TubeParameters;
use crate::rings::{IndexRange, Ring, RingRanges, assemble_rings};
use nalgebra::Point3;

/// Weight every vertex group member receives.
pub const FULL_WEIGHT: Real = 1.0;

/// Mesh of a tube: four rings of points, four quad strips, and the ring ranges.
///
/// Built once by [`compose_tube`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeMesh {
    vertices: Vec<Point3<Real>>,
    faces: Vec<Face>,
    ranges: RingRanges,
    params: TubeParameters,
}

/// A named set of vertices for the host to tag, all with the same weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexGroup {
    pub ring: Ring,
    pub name: &'static str,
    pub indices: IndexRange,
    pub weight: Real,
}

/// Build the tube described by `params`.
///
/// Faces are emitted as four strips of `params.vertices` quads each, in the order
/// inner wall, outer wall, upper cap, lower cap. All strips wind counter-clockwise
/// when seen from outside the material.
///
/// # Errors
/// Returns the first [`crate::errors::TubeError`] found by
/// [`TubeParameters::validate`]; nothing is allocated in that case.
///
/// # Example
/// ```
/// use tubemesh::{TubeParameters, compose_tube};
///
/// let params = TubeParameters::new(4, 1.0, 2.0, 360.0, 1.0);
/// let tube = compose_tube(&params).unwrap();
/// assert_eq!(tube.vertices().len(), 16);
/// assert_eq!(tube.faces().len(), 16);
/// ```
pub fn compose_tube(params: &TubeParameters) -> TubeResult<TubeMesh> {
    params.validate()?;

    if params.inner_radius() == params.outer_radius() {
        log::debug!("tube radii are equal ({}), caps will have zero area", params.inner_radius());
    }
    if params.width == 0.0 {
        log::debug!("tube width is zero, walls will have zero area");
    }

    let (vertices, ranges) = assemble_rings(params);

    let segments = params.vertices;
    let arc = params.arc;
    let strips = [
        // inner wall
        (ranges.inner_lower.start, ranges.inner_upper.start),
        // outer wall
        (ranges.outer_upper.start, ranges.outer_lower.start),
        // upper cap
        (ranges.inner_upper.start, ranges.outer_upper.start),
        // lower cap
        (ranges.outer_lower.start, ranges.inner_lower.start),
    ];

    let mut faces = Vec::with_capacity(strips.len() * segments);
    for (upper, lower) in strips {
        faces.extend(bridge_loops(upper, lower, segments, arc));
    }

    log::debug!(
        "composed tube: {} vertices, {} faces (segments {segments}, arc {arc}°, radii {}..{}, width {})",
        vertices.len(),
        faces.len(),
        params.inner_radius(),
        params.outer_radius(),
        params.width,
    );

    Ok(TubeMesh {
        vertices,
        faces,
        ranges,
        params: *params,
    })
}

impl TubeMesh {
    /// Same as [`compose_tube`].
    pub fn new(params: &TubeParameters) -> TubeResult<Self> {
        compose_tube(params)
    }

    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub const fn ranges(&self) -> &RingRanges {
        &self.ranges
    }

    /// Parameters this mesh was built from.
    pub const fn params(&self) -> &TubeParameters {
        &self.params
    }

    /// Split into the vertex and face buffers.
    pub fn into_buffers(self) -> (Vec<Point3<Real>>, Vec<Face>) {
        (self.vertices, self.faces)
    }

    /// Points of one ring, in angular order.
    pub fn ring(&self, ring: Ring) -> &[Point3<Real>] {
        &self.vertices[self.ranges.get(ring).iter()]
    }

    /// One full-weight vertex group per ring, in assembly order.
    pub fn vertex_groups(&self) -> Vec<VertexGroup> {
        self.ranges
            .iter()
            .map(|(ring, indices)| VertexGroup {
                ring,
                name: ring.name(),
                indices,
                weight: FULL_WEIGHT,
            })
            .collect()
    }

    /// Directed edges of every face, each quad contributing four.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces
            .iter()
            .flat_map(|face| (0..face.len()).map(move |i| (face[i], face[(i + 1) % face.len()])))
    }

    /// Axis aligned bounds of all vertices as `(mins, maxs)`.
    pub fn bounding_box(&self) -> (Point3<Real>, Point3<Real>) {
        let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
        let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
        for p in &self.vertices {
            mins.x = mins.x.min(p.x);
            mins.y = mins.y.min(p.y);
            mins.z = mins.z.min(p.z);
            maxs.x = maxs.x.max(p.x);
            maxs.y = maxs.y.max(p.y);
            maxs.z = maxs.z.max(p.z);
        }
        (mins, maxs)
    }
}
