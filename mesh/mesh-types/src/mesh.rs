//! Render-ready triangle mesh with per-vertex shading normals.

use nalgebra::{Point3, Vector3};
use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::normals::{DegenerateFacePolicy, compute_vertex_normals, renormalize};
use crate::{Aabb, MeshBounds, MeshTopology, Triangle};

/// Whether a [`ShadedMesh`] has been filled yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoadState {
    /// Freshly created, no buffers.
    #[default]
    Empty,
    /// Buffers populated; the mesh is read-only from here on.
    Loaded,
}

/// How normals are derived when a mesh is populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalOptions {
    /// Handling of zero-area faces.
    pub degenerate_faces: DegenerateFacePolicy,
    /// Scale the accumulated per-vertex sums to unit length.
    ///
    /// Off by default: vertex normals are the raw sum of incident unit face
    /// normals, and shaders receive those non-unit vectors.
    pub renormalize: bool,
}

/// A triangle mesh as handed to a renderer.
///
/// Buffers are flat so they can be uploaded directly:
///
/// - `positions`: `[x0, y0, z0, x1, y1, z1, ...]`
/// - `indices`: `[a0, b0, c0, a1, b1, c1, ...]`, three per triangle
/// - `normals`: one xyz triple per vertex, same length as `positions`
///
/// A mesh is populated exactly once. A second [`populate`](Self::populate)
/// fails with [`MeshError::AlreadyLoaded`] and leaves the buffers untouched;
/// load the next file into a fresh `ShadedMesh`.
///
/// The `serde` feature adds `Serialize` only. There is no `Deserialize`,
/// since that would build a mesh without going through `populate`.
///
/// # Example
///
/// ```
/// use mesh_types::{MeshError, NormalOptions, ShadedMesh};
///
/// let mut mesh = ShadedMesh::new();
/// mesh.populate(
///     vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     vec![0, 1, 2],
///     NormalOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_triangles(), 1);
/// assert_eq!(&mesh.normals()[0..3], &[0.0, 0.0, 1.0]);
///
/// let again = mesh.populate(vec![], vec![], NormalOptions::default());
/// assert_eq!(again, Err(MeshError::AlreadyLoaded));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShadedMesh {
    state: LoadState,
    positions: Vec<f32>,
    indices: Vec<u32>,
    normals: Vec<f32>,
    degenerate_faces: usize,
}

impl ShadedMesh {
    /// Create an empty, unloaded mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Empty,
            positions: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            degenerate_faces: 0,
        }
    }

    /// Fill the mesh from flat position and index buffers and compute normals.
    ///
    /// Validation happens before any field is written, so on error the mesh
    /// is exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`MeshError::AlreadyLoaded`] if the mesh was populated before
    /// - [`MeshError::MisalignedBuffer`] if a buffer length is not a multiple of 3
    /// - [`MeshError::IndexOutOfRange`] if a face addresses a missing vertex
    /// - [`MeshError::DegenerateFace`] if the options reject zero-area faces
    pub fn populate(
        &mut self,
        positions: Vec<f32>,
        indices: Vec<u32>,
        options: NormalOptions,
    ) -> MeshResult<()> {
        if self.is_loaded() {
            warn!("Refusing to load into a mesh that already holds data");
            return Err(MeshError::AlreadyLoaded);
        }

        let mut field = compute_vertex_normals(&positions, &indices, options.degenerate_faces)?;
        if options.renormalize {
            renormalize(&mut field.normals);
        }
        if field.degenerate_faces > 0 {
            warn!(
                skipped = field.degenerate_faces,
                "Degenerate faces left out of vertex normals"
            );
        }

        self.positions = positions;
        self.indices = indices;
        self.normals = field.normals;
        self.degenerate_faces = field.degenerate_faces;
        self.state = LoadState::Loaded;

        info!(
            vertices = self.num_vertices(),
            triangles = self.num_triangles(),
            "Mesh populated"
        );
        Ok(())
    }

    /// Current load state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// Whether the mesh has been populated.
    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Number of vertices (`positions().len() / 3`).
    #[inline]
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles (`indices().len() / 3`).
    #[inline]
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flat vertex positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat per-vertex normals, parallel to [`positions`](Self::positions).
    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flat triangle indices.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Faces that were skipped while estimating normals.
    #[inline]
    #[must_use]
    pub const fn degenerate_faces(&self) -> usize {
        self.degenerate_faces
    }

    /// Position of vertex `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point3<f32>> {
        let c = self.positions.get(index * 3..index * 3 + 3)?;
        Some(Point3::new(c[0], c[1], c[2]))
    }

    /// Accumulated normal of vertex `index`.
    #[must_use]
    pub fn normal(&self, index: usize) -> Option<Vector3<f32>> {
        let c = self.normals.get(index * 3..index * 3 + 3)?;
        Some(Vector3::new(c[0], c[1], c[2]))
    }

    /// Per-axis minimum over all vertices, or the origin for an empty mesh.
    #[must_use]
    pub fn min_bounds(&self) -> Point3<f32> {
        self.bounds().min_or_origin()
    }

    /// Per-axis maximum over all vertices, or the origin for an empty mesh.
    #[must_use]
    pub fn max_bounds(&self) -> Point3<f32> {
        self.bounds().max_or_origin()
    }
}

impl MeshTopology for ShadedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.num_vertices()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.num_triangles()
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        let c = self.indices.get(index * 3..index * 3 + 3)?;
        Some([c[0], c[1], c[2]])
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        Triangle::from_flat(&self.positions, self.face(face_index)?)
    }
}

impl MeshBounds for ShadedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_flat(&self.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> ShadedMesh {
        let mut mesh = ShadedMesh::new();
        mesh.populate(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0, 1, 2],
            NormalOptions::default(),
        )
        .unwrap();
        mesh
    }

    #[test]
    fn new_mesh_is_empty() {
        let mesh = ShadedMesh::new();
        assert_eq!(mesh.state(), LoadState::Empty);
        assert!(!mesh.is_loaded());
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_triangles(), 0);
    }

    #[test]
    fn empty_mesh_bounds_are_origin() {
        let mesh = ShadedMesh::new();
        assert_eq!(mesh.min_bounds(), Point3::origin());
        assert_eq!(mesh.max_bounds(), Point3::origin());
        assert!(mesh.bounds_opt().is_none());
    }

    #[test]
    fn bounds_track_each_axis_independently() {
        let mut mesh = ShadedMesh::new();
        mesh.populate(
            vec![-1.0, 2.0, 0.0, 3.0, -4.0, 5.0],
            Vec::new(),
            NormalOptions::default(),
        )
        .unwrap();
        assert_eq!(mesh.min_bounds(), Point3::new(-1.0, -4.0, 0.0));
        assert_eq!(mesh.max_bounds(), Point3::new(3.0, 2.0, 5.0));
    }

    #[test]
    fn bounds_of_strictly_positive_mesh_do_not_include_origin() {
        let mut mesh = ShadedMesh::new();
        mesh.populate(
            vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            Vec::new(),
            NormalOptions::default(),
        )
        .unwrap();
        assert_eq!(mesh.min_bounds(), Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn populate_computes_normals() {
        let mesh = triangle_mesh();
        assert!(mesh.is_loaded());
        assert_eq!(mesh.normals().len(), mesh.positions().len());
        for v in 0..3 {
            assert_eq!(mesh.normal(v), Some(Vector3::new(0.0, 0.0, 1.0)));
        }
    }

    #[test]
    fn second_populate_is_refused_without_mutation() {
        let mut mesh = triangle_mesh();
        let before = mesh.clone();

        let err = mesh
            .populate(vec![9.0, 9.0, 9.0], Vec::new(), NormalOptions::default())
            .unwrap_err();

        assert_eq!(err, MeshError::AlreadyLoaded);
        assert_eq!(mesh, before);
    }

    #[test]
    fn failed_populate_leaves_mesh_empty() {
        let mut mesh = ShadedMesh::new();
        let err = mesh
            .populate(
                vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                vec![0, 1, 3],
                NormalOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { index: 3, .. }));
        assert_eq!(mesh, ShadedMesh::new());

        // A failed attempt does not consume the single load.
        mesh.populate(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0, 1, 2],
            NormalOptions::default(),
        )
        .unwrap();
        assert!(mesh.is_loaded());
    }

    #[test]
    fn renormalize_option_yields_unit_normals() {
        let mut mesh = ShadedMesh::new();
        mesh.populate(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            vec![0, 1, 2, 0, 2, 3],
            NormalOptions {
                renormalize: true,
                ..NormalOptions::default()
            },
        )
        .unwrap();
        assert_eq!(mesh.normal(0), Some(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(mesh.normal(2), Some(Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn degenerate_faces_are_counted() {
        let mut mesh = ShadedMesh::new();
        mesh.populate(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0],
            vec![0, 1, 2, 0, 1, 3],
            NormalOptions::default(),
        )
        .unwrap();
        assert_eq!(mesh.degenerate_faces(), 1);
        assert_eq!(mesh.normal(3), Some(Vector3::zeros()));
    }

    #[test]
    fn topology_accessors() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.face(0), Some([0, 1, 2]));
        assert_eq!(mesh.face(1), None);
        assert_eq!(mesh.position(1), Some(Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(mesh.position(3), None);
        let normal = mesh.triangle(0).and_then(|t| t.normal());
        assert_eq!(normal, Some(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(mesh.triangle(1), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loaded_mesh_serializes() {
        fn assert_serialize<T: Serialize>(_: &T) {}
        assert_serialize(&triangle_mesh());
    }
}
