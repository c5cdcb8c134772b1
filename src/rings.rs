//! The four boundary rings of a tube and where they live in the vertex buffer

use crate::arc::arc_points;
use crate::float_types::Real;
use crate::params::TubeParameters;
use nalgebra::Point3;
use std::fmt;
use std::ops::Range;

/// One of the four rings, in the order they are laid out in the vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ring {
    InnerUpper,
    OuterUpper,
    InnerLower,
    OuterLower,
}

impl Ring {
    /// Assembly order.
    pub const ALL: [Ring; 4] = [
        Ring::InnerUpper,
        Ring::OuterUpper,
        Ring::InnerLower,
        Ring::OuterLower,
    ];

    /// Vertex group name a host should give this ring.
    pub const fn name(self) -> &'static str {
        match self {
            Ring::InnerUpper => "Inner Upper",
            Ring::OuterUpper => "Outer Upper",
            Ring::InnerLower => "Inner Lower",
            Ring::OuterLower => "Outer Lower",
        }
    }

    pub const fn is_inner(self) -> bool {
        matches!(self, Ring::InnerUpper | Ring::InnerLower)
    }

    pub const fn is_upper(self) -> bool {
        matches!(self, Ring::InnerUpper | Ring::OuterUpper)
    }

    /// Radius and height this ring is sampled at.
    fn placement(self, params: &TubeParameters) -> (Real, Real) {
        let radius = if self.is_inner() {
            params.inner_radius()
        } else {
            params.outer_radius()
        };
        let z = if self.is_upper() {
            params.half_width()
        } else {
            -params.half_width()
        };
        (radius, z)
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contiguous run of vertex indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: usize,
    /// Exclusive
    pub end: usize,
}

impl IndexRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<IndexRange> for Range<usize> {
    fn from(range: IndexRange) -> Self {
        range.start..range.end
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Location of each ring in the vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingRanges {
    pub inner_upper: IndexRange,
    pub outer_upper: IndexRange,
    pub inner_lower: IndexRange,
    pub outer_lower: IndexRange,
}

impl RingRanges {
    pub const fn get(&self, ring: Ring) -> IndexRange {
        match ring {
            Ring::InnerUpper => self.inner_upper,
            Ring::OuterUpper => self.outer_upper,
            Ring::InnerLower => self.inner_lower,
            Ring::OuterLower => self.outer_lower,
        }
    }

    fn set(&mut self, ring: Ring, range: IndexRange) {
        match ring {
            Ring::InnerUpper => self.inner_upper = range,
            Ring::OuterUpper => self.outer_upper = range,
            Ring::InnerLower => self.inner_lower = range,
            Ring::OuterLower => self.outer_lower = range,
        }
    }

    /// Rings with their ranges, in assembly order.
    pub fn iter(&self) -> impl Iterator<Item = (Ring, IndexRange)> + '_ {
        Ring::ALL.into_iter().map(move |ring| (ring, self.get(ring)))
    }

    /// The ring a vertex index belongs to.
    pub fn ring_of(&self, index: usize) -> Option<Ring> {
        self.iter()
            .find(|(_, range)| range.contains(index))
            .map(|(ring, _)| ring)
    }
}

/// Sample all four rings into one vertex buffer.
///
/// Rings are appended in [`Ring::ALL`] order; each range is recorded from the buffer
/// length just before its ring is appended. Parameters are not validated here.
pub fn assemble_rings(params: &TubeParameters) -> (Vec<Point3<Real>>, RingRanges) {
    let mut vertices = Vec::with_capacity(Ring::ALL.len() * params.ring_len());
    let mut ranges = RingRanges::default();

    for ring in Ring::ALL {
        let (radius, z) = ring.placement(params);
        let start = vertices.len();
        vertices.extend(arc_points(radius, params.vertices, z, params.arc));
        ranges.set(ring, IndexRange::new(start, vertices.len()));
    }

    (vertices, ranges)
}
