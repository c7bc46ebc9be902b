//! Error types for mesh I/O operations.

use std::path::PathBuf;

use mesh_types::MeshError;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Which part of a PLY body a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Vertex records.
    Vertices,
    /// Face records.
    Faces,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertices => f.write_str("vertex"),
            Self::Faces => f.write_str("face"),
        }
    }
}

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// The header never declared the stream to be PLY.
    #[error("not a PLY file: header has no `ply` line")]
    NotPly,

    /// Invalid file content (parse error).
    #[error("invalid content on line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// The stream ended before all declared records were read.
    #[error("unexpected end of file after line {line}: expected {expected} {section} records")]
    UnexpectedEof {
        /// Last line number read.
        line: usize,
        /// Declared record count for the section.
        expected: usize,
        /// Section being read.
        section: Section,
    },

    /// A face record declared a vertex count other than three.
    #[error("face on line {line} has {arity} vertices; only triangles are supported")]
    FaceArity {
        /// 1-based line number.
        line: usize,
        /// Declared vertex count.
        arity: i64,
    },

    /// The target mesh was already loaded.
    #[error("mesh is already loaded; create a new mesh for each file")]
    AlreadyLoaded,

    /// The decoded buffers were rejected by the mesh.
    #[error("mesh construction failed: {0}")]
    Mesh(#[from] MeshError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error for the given line.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }

    /// Map an open failure on `path` to `FileNotFound` or `Io`.
    pub(crate) fn from_open(path: &std::path::Path, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(e)
        }
    }
}
