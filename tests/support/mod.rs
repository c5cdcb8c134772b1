//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use tubemesh::{Face, TubeMesh, TubeParameters, compose_tube, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Build a tube from the raw five numbers, panicking on invalid input.
pub fn tube(vertices: usize, radius1: Real, radius2: Real, arc: Real, width: Real) -> TubeMesh {
    compose_tube(&TubeParameters::new(vertices, radius1, radius2, arc, width))
        .expect("parameters should be valid")
}

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]` of a point set.
pub fn bounding_box(points: &[Point3<Real>]) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for p in points {
        bb[0] = bb[0].min(p.x);
        bb[1] = bb[1].min(p.y);
        bb[2] = bb[2].min(p.z);
        bb[3] = bb[3].max(p.x);
        bb[4] = bb[4].max(p.y);
        bb[5] = bb[5].max(p.z);
    }
    bb
}

/// Newell normal of a quad (not normalised).
pub fn newell_normal(vertices: &[Point3<Real>], face: &Face) -> Vector3<Real> {
    let mut n = Vector3::zeros();
    for i in 0..4 {
        let a = vertices[face[i]];
        let b = vertices[face[(i + 1) % 4]];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n
}

/// Centroid of a quad.
pub fn centroid(vertices: &[Point3<Real>], face: &Face) -> Point3<Real> {
    let sum = face
        .iter()
        .fold(Vector3::zeros(), |acc, &i| acc + vertices[i].coords);
    Point3::from(sum / 4.0)
}

/// Number of faces using each undirected edge.
pub fn edge_use_counts(faces: &[Face]) -> HashMap<(usize, usize), usize> {
    let mut counts = HashMap::new();
    for face in faces {
        for i in 0..4 {
            let (a, b) = (face[i], face[(i + 1) % 4]);
            let key = if a < b { (a, b) } else { (b, a) };
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}
