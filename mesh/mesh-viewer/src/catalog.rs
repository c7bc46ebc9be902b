//! Ordered list of loadable mesh files with a cursor.

use std::path::{Path, PathBuf};

use mesh_io::{LoadOptions, list_mesh_files, load_ply_with};
use mesh_types::ShadedMesh;
use tracing::debug;

use crate::error::{ViewerError, ViewerResult};

/// Mesh files in one directory and the one currently selected.
///
/// Stepping wraps around in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshCatalog {
    dir: PathBuf,
    names: Vec<String>,
    index: usize,
}

impl MeshCatalog {
    /// Scan `dir` for files ending in `extension`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::EmptyCatalog`] if nothing matches, or the
    /// listing error if the directory cannot be read.
    pub fn scan<P: AsRef<Path>>(dir: P, extension: &str) -> ViewerResult<Self> {
        let dir = dir.as_ref();
        let names = list_mesh_files(dir, extension)?;
        Self::from_names(dir, names).ok_or_else(|| ViewerError::EmptyCatalog {
            dir: dir.to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        })
    }

    /// Build a catalog from known file names; `None` if `names` is empty.
    #[must_use]
    pub fn from_names<P: AsRef<Path>>(dir: P, names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        Some(Self {
            dir: dir.as_ref().to_path_buf(),
            names,
            index: 0,
        })
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: a catalog holds at least one file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of the current file.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// All file names in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// File name of the current entry.
    #[must_use]
    pub fn current_name(&self) -> &str {
        &self.names[self.index]
    }

    /// Full path of the current entry.
    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        self.dir.join(self.current_name())
    }

    /// Jump to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::IndexOutOfRange`] past the last file.
    pub fn select(&mut self, index: usize) -> ViewerResult<()> {
        if index >= self.names.len() {
            return Err(ViewerError::IndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    /// Advance to the next file, wrapping to the first.
    pub fn next_mesh(&mut self) -> &str {
        self.index = (self.index + 1) % self.names.len();
        debug!(index = self.index, "Next mesh");
        self.current_name()
    }

    /// Step back to the previous file, wrapping to the last.
    pub fn previous_mesh(&mut self) -> &str {
        self.index = (self.index + self.names.len() - 1) % self.names.len();
        debug!(index = self.index, "Previous mesh");
        self.current_name()
    }

    /// Load the current file into a new mesh.
    ///
    /// # Errors
    ///
    /// Propagates the load failure.
    pub fn load_current(&self, options: &LoadOptions) -> ViewerResult<ShadedMesh> {
        Ok(load_ply_with(self.current_path(), options)?)
    }
}
