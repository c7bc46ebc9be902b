//! Error types for the viewer.

use std::path::PathBuf;

use mesh_io::IoError;
use thiserror::Error;

/// Errors raised by the viewer layer.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The directory holds no file with the requested extension.
    #[error("no .{extension} files in {dir}")]
    EmptyCatalog {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Extension that was searched for.
        extension: String,
    },

    /// A catalog position past the end was requested.
    #[error("mesh index {index} out of range for {len} files")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of files in the catalog.
        len: usize,
    },

    /// Loading or listing failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Result type for viewer operations.
pub type ViewerResult<T> = Result<T, ViewerError>;
