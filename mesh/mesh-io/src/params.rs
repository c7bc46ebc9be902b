//! Load options and presets.

use mesh_types::{DegenerateFacePolicy, NormalOptions};

/// Options for loading a PLY file.
///
/// The defaults reproduce the classic viewer behavior: zero-area faces are
/// skipped and vertex normals are left as raw sums of face normals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Handling of zero-area faces during normal estimation.
    pub degenerate_faces: DegenerateFacePolicy,

    /// Rescale accumulated vertex normals to unit length.
    pub renormalize_normals: bool,
}

impl LoadOptions {
    /// Reject files containing zero-area faces.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            degenerate_faces: DegenerateFacePolicy::Reject,
            ..Default::default()
        }
    }

    /// Produce unit-length vertex normals.
    #[must_use]
    pub fn unit_normals() -> Self {
        Self {
            renormalize_normals: true,
            ..Default::default()
        }
    }

    /// Normal-estimation settings handed to the mesh.
    #[must_use]
    pub const fn normal_options(&self) -> NormalOptions {
        NormalOptions {
            degenerate_faces: self.degenerate_faces,
            renormalize: self.renormalize_normals,
        }
    }
}
