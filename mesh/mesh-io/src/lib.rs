//! Mesh file I/O for PLY viewing.
//!
//! This crate turns ASCII PLY files into [`ShadedMesh`] values:
//!
//! - a line tokenizer that skips blank lines and tracks line numbers
//! - a header parser that finds the `ply` marker and the vertex/face counts
//! - a decoder that reads exactly the declared records and validates them
//!
//! Loading is the single trust boundary: every parse problem surfaces as an
//! [`IoError`] from the load call, and a failed load never leaves a
//! half-filled mesh behind.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_mesh, LoadOptions, load_ply_with};
//!
//! // Format detected from the .ply extension
//! let mesh = load_mesh("model.ply").unwrap();
//! println!("{} triangles", mesh.num_triangles());
//!
//! // Unit-length vertex normals instead of raw sums
//! let smooth = load_ply_with("model.ply", &LoadOptions::unit_normals()).unwrap();
//! ```
//!
//! # Limitations
//!
//! Only the ASCII encoding is read. The `format` line is not checked, so a
//! binary file fails somewhere in the body rather than at the header.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod decode;
mod error;
mod header;
mod listing;
mod params;
mod ply;
mod reader;

pub use decode::{Geometry, read_geometry};
pub use error::{IoError, IoResult, Section};
pub use header::{PlyHeader, read_header};
pub use listing::list_mesh_files;
pub use params::LoadOptions;
pub use ply::{load_ply, load_ply_into, load_ply_with, read_ply, save_ply, write_ply};
pub use reader::{LineReader, Record};

use std::path::Path;

use mesh_types::ShadedMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// PLY (Polygon File Format), ASCII triangle subset.
    Ply,
}

impl MeshFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "ply" => Some(Self::Ply),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Ply => "ply",
        }
    }
}

fn detect(path: &Path) -> IoResult<MeshFormat> {
    MeshFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a mesh from a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
pub fn load_mesh<P: AsRef<Path>>(path: P) -> IoResult<ShadedMesh> {
    let path = path.as_ref();
    match detect(path)? {
        MeshFormat::Ply => load_ply(path),
    }
}

/// Save a mesh to a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be written
pub fn save_mesh<P: AsRef<Path>>(mesh: &ShadedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match detect(path)? {
        MeshFormat::Ply => save_ply(mesh, path),
    }
}
