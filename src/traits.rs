use crate::tube::TubeMesh;

/// Turns a finished [`TubeMesh`] into a host-native object.
///
/// Implementations typically create an editable mesh from
/// [`TubeMesh::vertices`] and [`TubeMesh::faces`], validate it, and add one vertex
/// group per entry of [`TubeMesh::vertex_groups`]. This crate ships no
/// implementation and never depends on one.
pub trait MeshMaterializer {
    /// Host object produced for a tube
    type Output;
    type Error;

    fn materialize(&mut self, mesh: &TubeMesh) -> Result<Self::Output, Self::Error>;
}

impl<M: MeshMaterializer + ?Sized> MeshMaterializer for &mut M {
    type Output = M::Output;
    type Error = M::Error;

    fn materialize(&mut self, mesh: &TubeMesh) -> Result<Self::Output, Self::Error> {
        (**self).materialize(mesh)
    }
}
