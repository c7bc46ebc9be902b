//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur while populating a [`ShadedMesh`](crate::ShadedMesh).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The mesh already holds vertex data and cannot be loaded again.
    #[error("mesh is already loaded; create a new mesh for each file")]
    AlreadyLoaded,

    /// A flat buffer length is not a multiple of three.
    #[error("{name} buffer length {len} is not a multiple of 3")]
    MisalignedBuffer {
        /// Which buffer was misaligned.
        name: &'static str,
        /// Its length.
        len: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Face number (0-based).
        face: usize,
        /// The offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face has zero area and the degenerate-face policy rejects it.
    #[error("face {face} is degenerate (zero area)")]
    DegenerateFace {
        /// Face number (0-based).
        face: usize,
    },
}

/// Result type for mesh construction.
pub type MeshResult<T> = std::result::Result<T, MeshError>;
