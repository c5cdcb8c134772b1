//! Procedural **tube** (hollow cylinder / ring) meshes.
//!
//! A tube is described by five numbers ([`TubeParameters`]): a segment count, two
//! radii (the smaller becomes the inner wall), a sweep angle in degrees and a wall
//! width. [`compose_tube`] samples four rings of points (inner/outer, upper/lower),
//! stitches them into four quad strips (inner wall, outer wall, upper cap, lower
//! cap) and returns a [`TubeMesh`] holding the vertex buffer, the quads, and the
//! index range of every ring.
//!
//! ```
//! use tubemesh::{Ring, TubeParameters, compose_tube};
//!
//! let params = TubeParameters::default().with_vertices(16).with_arc(180.0);
//! let tube = compose_tube(&params).unwrap();
//!
//! // open arcs get a closing point per ring
//! assert_eq!(tube.ranges().get(Ring::OuterLower).len(), 17);
//! assert_eq!(tube.faces().len(), 4 * 16);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: enables `hashbrown`-backed [`TubeMesh::analyze`] and `is_watertight`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **serde**: `Serialize`/`Deserialize` for parameters and ring ranges

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod arc;
pub mod bridge;
pub mod errors;
pub mod float_types;
pub mod params;
pub mod polar;
pub mod rings;
pub mod traits;
pub mod tube;

#[cfg(feature = "hashmap")]
pub mod manifold;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bridge::Face;
pub use errors::{TubeError, TubeResult};
pub use params::TubeParameters;
pub use rings::{IndexRange, Ring, RingRanges};
pub use traits::MeshMaterializer;
pub use tube::{TubeMesh, VertexGroup, compose_tube};

#[cfg(feature = "hashmap")]
pub use manifold::MeshAnalysis;
