//! Topology checks for a finished `TubeMesh`
//!
//! Works on vertex indices only, so coincident vertices from different rings
//! (equal radii, zero width) never merge edges. Zero-area faces are counted
//! separately and do not make a mesh invalid.

use crate::bridge::Face;
use crate::float_types::{Real, tolerance};
use crate::tube::TubeMesh;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

/// Result of [`TubeMesh::analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshAnalysis {
    /// Edges used by exactly one face (0 for closed tubes)
    pub boundary_edges: usize,
    /// Edges used by more than two faces
    pub non_manifold_edges: usize,
    /// Vertices no face references
    pub isolated_vertices: usize,
    /// Faces whose area is below [`tolerance`]
    pub degenerate_faces: usize,
    /// Face indices outside the vertex buffer
    pub invalid_indices: usize,
    /// Every interior edge is walked once in each direction
    pub consistent_orientation: bool,
    /// V - E + F, 0 for any tube
    pub euler_characteristic: i64,
}

impl MeshAnalysis {
    /// Closed, two-manifold, and consistently wound.
    pub const fn is_watertight(&self) -> bool {
        self.boundary_edges == 0
            && self.non_manifold_edges == 0
            && self.invalid_indices == 0
            && self.consistent_orientation
    }
}

/// Area of a planar or near-planar quad (Newell's method).
pub fn face_area(vertices: &[Point3<Real>], face: &Face) -> Real {
    face_normal(vertices, face).norm() * 0.5
}

/// Unnormalised Newell normal of `face`; its length is twice the face area.
pub fn face_normal(vertices: &[Point3<Real>], face: &Face) -> Vector3<Real> {
    let mut normal = Vector3::zeros();
    for i in 0..face.len() {
        let a = vertices[face[i]].coords;
        let b = vertices[face[(i + 1) % face.len()]].coords;
        normal += a.cross(&b);
    }
    normal
}

impl TubeMesh {
    /// Count boundary, non-manifold and degenerate features of this mesh.
    pub fn analyze(&self) -> MeshAnalysis {
        let vertex_count = self.vertices().len();

        // directed edge -> number of faces walking it
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
        let mut referenced = vec![false; vertex_count];
        let mut invalid_indices = 0;
        let mut degenerate_faces = 0;

        for face in self.faces() {
            let in_range = face.iter().all(|&idx| idx < vertex_count);
            if !in_range {
                invalid_indices += face.iter().filter(|&&idx| idx >= vertex_count).count();
                continue;
            }

            for &idx in face {
                referenced[idx] = true;
            }
            for i in 0..face.len() {
                *directed.entry((face[i], face[(i + 1) % face.len()])).or_insert(0) += 1;
            }
            if face_area(self.vertices(), face) < tolerance() {
                degenerate_faces += 1;
            }
        }

        // canonical (smaller index first) edge -> face uses
        let mut undirected: HashMap<(usize, usize), usize> = HashMap::new();
        let mut consistent_orientation = true;
        for (&(a, b), &count) in &directed {
            if count > 1 {
                consistent_orientation = false;
            }
            let edge = if a < b { (a, b) } else { (b, a) };
            *undirected.entry(edge).or_insert(0) += count;
        }

        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;
        for &uses in undirected.values() {
            match uses {
                1 => boundary_edges += 1,
                2 => {},
                _ => non_manifold_edges += 1,
            }
        }

        let isolated_vertices = referenced.iter().filter(|&&used| !used).count();
        let euler_characteristic =
            vertex_count as i64 - undirected.len() as i64 + self.faces().len() as i64;

        let analysis = MeshAnalysis {
            boundary_edges,
            non_manifold_edges,
            isolated_vertices,
            degenerate_faces,
            invalid_indices,
            consistent_orientation,
            euler_characteristic,
        };
        if degenerate_faces > 0 {
            log::debug!("tube has {degenerate_faces} zero-area faces");
        }
        analysis
    }

    /// `true` when every edge is shared by exactly two consistently wound faces.
    pub fn is_watertight(&self) -> bool {
        self.analyze().is_watertight()
    }
}
