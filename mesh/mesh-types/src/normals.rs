//! Per-vertex normal estimation.
//!
//! Every triangle contributes its unit face normal to each of its three
//! corners. The per-vertex result is the raw sum of those contributions:
//! a vertex shared by `k` coplanar faces ends up with length `k`, not 1.
//! Shading code that needs unit normals calls [`renormalize`] explicitly.

use nalgebra::Vector3;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::triangle::Triangle;

/// What to do with a triangle that has no defined face normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegenerateFacePolicy {
    /// Leave the face out of the accumulation and count it.
    #[default]
    Skip,
    /// Fail with [`MeshError::DegenerateFace`].
    Reject,
}

/// Accumulated vertex normals plus bookkeeping from the pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalField {
    /// Flat `[nx0, ny0, nz0, nx1, ...]`, same length as the position buffer.
    pub normals: Vec<f32>,
    /// Number of faces skipped because they were degenerate.
    pub degenerate_faces: usize,
}

/// Accumulate unit face normals into per-vertex sums.
///
/// `positions` is a flat xyz buffer and `indices` a flat triangle list.
///
/// # Errors
///
/// - [`MeshError::MisalignedBuffer`] if either buffer length is not a multiple of 3
/// - [`MeshError::IndexOutOfRange`] if a face addresses a missing vertex
/// - [`MeshError::DegenerateFace`] under [`DegenerateFacePolicy::Reject`]
///
/// # Example
///
/// ```
/// use mesh_types::{compute_vertex_normals, DegenerateFacePolicy};
///
/// // Two triangles forming a unit square in the XY plane.
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
/// let indices = [0, 1, 2, 0, 2, 3];
///
/// let field = compute_vertex_normals(&positions, &indices, DegenerateFacePolicy::Skip).unwrap();
/// // Vertex 0 is shared by both faces: the sum is not renormalized.
/// assert_eq!(&field.normals[0..3], &[0.0, 0.0, 2.0]);
/// // Vertex 1 belongs to one face only.
/// assert_eq!(&field.normals[3..6], &[0.0, 0.0, 1.0]);
/// ```
pub fn compute_vertex_normals(
    positions: &[f32],
    indices: &[u32],
    policy: DegenerateFacePolicy,
) -> MeshResult<NormalField> {
    check_aligned("positions", positions)?;
    check_aligned("indices", indices)?;

    let vertex_count = positions.len() / 3;
    let mut accum = vec![Vector3::<f32>::zeros(); vertex_count];
    let mut degenerate_faces = 0;

    for (face, chunk) in indices.chunks_exact(3).enumerate() {
        let corners = [chunk[0], chunk[1], chunk[2]];
        let tri = Triangle::from_flat(positions, corners).ok_or_else(|| {
            // from_flat only fails on a missing vertex; report the first one
            let index = corners
                .iter()
                .copied()
                .find(|&i| i as usize >= vertex_count)
                .unwrap_or(chunk[0]);
            MeshError::IndexOutOfRange {
                face,
                index,
                vertex_count,
            }
        })?;

        let Some(n) = tri.normal() else {
            match policy {
                DegenerateFacePolicy::Skip => {
                    degenerate_faces += 1;
                    continue;
                }
                DegenerateFacePolicy::Reject => return Err(MeshError::DegenerateFace { face }),
            }
        };

        for i in corners {
            accum[i as usize] += n;
        }
    }

    debug!(
        vertices = vertex_count,
        faces = indices.len() / 3,
        degenerate_faces,
        "Accumulated vertex normals"
    );

    let normals = accum.iter().flat_map(|n| [n.x, n.y, n.z]).collect();
    Ok(NormalField {
        normals,
        degenerate_faces,
    })
}

/// Scale every xyz triple in `normals` to unit length.
///
/// Zero-length triples (vertices no face touches) are left at zero.
pub fn renormalize(normals: &mut [f32]) {
    for c in normals.chunks_exact_mut(3) {
        let n = Vector3::new(c[0], c[1], c[2]);
        if let Some(unit) = n.try_normalize(0.0) {
            c.copy_from_slice(unit.as_slice());
        }
    }
}

fn check_aligned<T>(name: &'static str, buf: &[T]) -> MeshResult<()> {
    if buf.len() % 3 == 0 {
        Ok(())
    } else {
        Err(MeshError::MisalignedBuffer {
            name,
            len: buf.len(),
        })
    }
}
