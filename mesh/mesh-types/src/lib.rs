//! Core mesh types for PLY viewing.
//!
//! This crate provides the in-memory side of mesh ingestion:
//!
//! - [`ShadedMesh`] - Flat position, index and normal buffers, populated once
//! - [`Triangle`] - A concrete triangle with its unit face normal
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`compute_vertex_normals`] - Per-vertex normal accumulation
//!
//! File parsing lives in `mesh-io`; nothing here touches the filesystem.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Face winding is
//! **counter-clockwise (CCW) when viewed from outside**, so face normals
//! point outward by the right-hand rule.
//!
//! # Vertex Normals
//!
//! A vertex normal is the plain sum of the unit normals of its incident
//! faces. It is not rescaled, so a vertex shared by two coplanar faces
//! carries a normal of length 2. See [`NormalOptions::renormalize`].
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshTopology, NormalOptions, ShadedMesh};
//!
//! let mut mesh = ShadedMesh::new();
//! mesh.populate(
//!     vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5, 1.0, 0.0],
//!     vec![0, 1, 2],
//!     NormalOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod error;
mod mesh;
mod normals;
mod traits;
mod triangle;

pub use bounds::Aabb;
pub use error::{MeshError, MeshResult};
pub use mesh::{LoadState, NormalOptions, ShadedMesh};
pub use normals::{DegenerateFacePolicy, NormalField, compute_vertex_normals, renormalize};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
