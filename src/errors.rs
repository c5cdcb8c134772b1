//! Parameter validation errors

use crate::float_types::Real;

/// Result type for tube construction.
pub type TubeResult<T> = Result<T, TubeError>;

/// All the ways a set of tube parameters can be rejected.
///
/// Degenerate but valid inputs (equal radii, zero width, zero arc) are not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TubeError {
    /// (TooFewSegments) Fewer segments than the smallest meaningful polygon
    #[error("(TooFewSegments) a tube needs at least {min} segments, got {actual}")]
    TooFewSegments {
        /// Minimum accepted segment count.
        min: usize,
        /// Segment count that was passed in.
        actual: usize,
    },
    /// (TooManySegments) More segments than the vertex and face buffers can address
    #[error("(TooManySegments) a tube supports at most {max} segments, got {actual}")]
    TooManySegments {
        /// Maximum accepted segment count.
        max: usize,
        /// Segment count that was passed in.
        actual: usize,
    },
    /// (NegativeRadius) One of the two radii is below zero
    #[error("(NegativeRadius) {name} must be >= 0, got {value}")]
    NegativeRadius {
        /// Parameter name, `radius1` or `radius2`.
        name: &'static str,
        value: Real,
    },
    /// (ArcOutOfRange) The sweep angle is outside `[0, 360]` degrees
    #[error("(ArcOutOfRange) arc must lie in [0, 360] degrees, got {0}")]
    ArcOutOfRange(Real),
    /// (NegativeWidth) The wall width is below zero
    #[error("(NegativeWidth) width must be >= 0, got {0}")]
    NegativeWidth(Real),
    /// (NonFinite) A parameter is NaN or infinite
    #[error("(NonFinite) {name} is NaN or infinite")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
    },
}
