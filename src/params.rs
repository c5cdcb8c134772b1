//! Tube parameters, their host defaults, and validation

use crate::arc::ring_len;
use crate::errors::{TubeError, TubeResult};
use crate::float_types::{FULL_CIRCLE_DEGREES, Real};

/// Smallest segment count that still encloses an area.
pub const MIN_SEGMENTS: usize = 3;

/// Largest segment count whose vertex and face buffers stay within `isize::MAX` bytes.
///
/// A tube holds `4 * (segments + 1)` points at most and `4 * segments` quads.
pub const MAX_SEGMENTS: usize = {
    let point = std::mem::size_of::<nalgebra::Point3<Real>>();
    let face = std::mem::size_of::<crate::bridge::Face>();
    let widest = if point > face { point } else { face };
    isize::MAX as usize / (4 * widest) - 1
};

/// The five numbers a tube is built from.
///
/// `radius1` and `radius2` are unordered: the smaller becomes the inner wall.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TubeParameters {
    /// Number of segments around the sweep
    pub vertices: usize,
    pub radius1: Real,
    pub radius2: Real,
    /// Sweep angle in degrees, `[0, 360]`
    pub arc: Real,
    /// Wall thickness along the z axis
    pub width: Real,
}

impl Default for TubeParameters {
    fn default() -> Self {
        Self {
            vertices: 32,
            radius1: 4.0,
            radius2: 5.0,
            arc: FULL_CIRCLE_DEGREES,
            width: 0.2,
        }
    }
}

impl TubeParameters {
    pub const fn new(vertices: usize, radius1: Real, radius2: Real, arc: Real, width: Real) -> Self {
        Self {
            vertices,
            radius1,
            radius2,
            arc,
            width,
        }
    }

    pub const fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    pub const fn with_radii(mut self, radius1: Real, radius2: Real) -> Self {
        self.radius1 = radius1;
        self.radius2 = radius2;
        self
    }

    pub const fn with_arc(mut self, arc: Real) -> Self {
        self.arc = arc;
        self
    }

    pub const fn with_width(mut self, width: Real) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn inner_radius(&self) -> Real {
        self.radius1.min(self.radius2)
    }

    #[inline]
    pub fn outer_radius(&self) -> Real {
        self.radius1.max(self.radius2)
    }

    /// Height of the upper rings; the lower rings sit at the negation.
    #[inline]
    pub fn half_width(&self) -> Real {
        self.width / 2.0
    }

    /// Points per ring for this sampling.
    #[inline]
    pub fn ring_len(&self) -> usize {
        ring_len(self.vertices, self.arc)
    }

    /// Reject parameters no tube can be built from.
    ///
    /// Checks run in field order and the first failure is returned.
    pub fn validate(&self) -> TubeResult<()> {
        if self.vertices < MIN_SEGMENTS {
            return Err(TubeError::TooFewSegments {
                min: MIN_SEGMENTS,
                actual: self.vertices,
            });
        }
        if self.vertices > MAX_SEGMENTS {
            return Err(TubeError::TooManySegments {
                max: MAX_SEGMENTS,
                actual: self.vertices,
            });
        }

        for (name, value) in [("radius1", self.radius1), ("radius2", self.radius2)] {
            if !value.is_finite() {
                return Err(TubeError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(TubeError::NegativeRadius { name, value });
            }
        }

        if !self.arc.is_finite() {
            return Err(TubeError::NonFinite { name: "arc" });
        }
        if !(0.0..=FULL_CIRCLE_DEGREES).contains(&self.arc) {
            return Err(TubeError::ArcOutOfRange(self.arc));
        }

        if !self.width.is_finite() {
            return Err(TubeError::NonFinite { name: "width" });
        }
        if self.width < 0.0 {
            return Err(TubeError::NegativeWidth(self.width));
        }

        Ok(())
    }

    /// Clamp every field into its hard range, the way a host property panel would.
    ///
    /// Soft maxima are not enforced. Non-finite fields fall back to their defaults.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let clamp = |value: Real, fallback: Real, spec: &ParameterSpec| {
            let value = if value.is_nan() { fallback } else { value.clamp(spec.min, spec.max) };
            if value.is_finite() { value } else { fallback }
        };

        Self {
            vertices: self.vertices.clamp(MIN_SEGMENTS, MAX_SEGMENTS),
            radius1: clamp(self.radius1, defaults.radius1, &PARAMETER_SPECS[1]),
            radius2: clamp(self.radius2, defaults.radius2, &PARAMETER_SPECS[2]),
            arc: clamp(self.arc, defaults.arc, &PARAMETER_SPECS[3]),
            width: clamp(self.width, defaults.width, &PARAMETER_SPECS[4]),
        }
    }
}

/// How a host should present a parameter's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterUnit {
    /// Plain number
    None,
    /// Scene length unit
    Length,
    /// Angle in degrees
    Degrees,
}

/// Presentation metadata for one [`TubeParameters`] field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    /// Field name on [`TubeParameters`]
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default: Real,
    pub min: Real,
    /// Hard upper bound (`Real::INFINITY` when unbounded)
    pub max: Real,
    /// Upper bound for sliders and drag widgets, if any
    pub soft_max: Option<Real>,
    pub unit: ParameterUnit,
}

/// Metadata for every tube parameter, in field order.
pub static PARAMETER_SPECS: [ParameterSpec; 5] = [
    ParameterSpec {
        name: "vertices",
        label: "Vertices",
        description: "Number of segments",
        default: 32.0,
        min: MIN_SEGMENTS as Real,
        max: MAX_SEGMENTS as Real,
        soft_max: Some(1000.0),
        unit: ParameterUnit::None,
    },
    ParameterSpec {
        name: "radius1",
        label: "Radius 1",
        description: "Radius 1 of the tube",
        default: 4.0,
        min: 0.0,
        max: Real::INFINITY,
        soft_max: Some(1000.0),
        unit: ParameterUnit::Length,
    },
    ParameterSpec {
        name: "radius2",
        label: "Radius 2",
        description: "Radius 2 of the tube",
        default: 5.0,
        min: 0.0,
        max: Real::INFINITY,
        soft_max: Some(1000.0),
        unit: ParameterUnit::Length,
    },
    ParameterSpec {
        name: "arc",
        label: "Arc",
        description: "Portion of the circumference",
        default: FULL_CIRCLE_DEGREES,
        min: 0.0,
        max: FULL_CIRCLE_DEGREES,
        soft_max: None,
        unit: ParameterUnit::Degrees,
    },
    ParameterSpec {
        name: "width",
        label: "Width",
        description: "Thickness of tube",
        default: 0.2,
        min: 0.0,
        max: Real::INFINITY,
        soft_max: Some(1000.0),
        unit: ParameterUnit::Length,
    },
];

/// Look up a parameter's metadata by field name.
pub fn parameter_spec(name: &str) -> Option<&'static ParameterSpec> {
    PARAMETER_SPECS.iter().find(|spec| spec.name == name)
}
