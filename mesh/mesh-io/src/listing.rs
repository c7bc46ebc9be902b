//! Directory enumeration of loadable mesh files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IoError, IoResult};

/// List file names in `dir` whose extension matches `extension`.
///
/// The comparison ignores ASCII case and a leading dot in `extension`.
/// Names are returned sorted so the order is stable across platforms.
/// Subdirectories and names that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `dir` does not exist, and
/// [`IoError::Io`] for other read failures.
///
/// # Example
///
/// ```no_run
/// use mesh_io::list_mesh_files;
///
/// for name in list_mesh_files("models", "ply").unwrap() {
///     println!("{name}");
/// }
/// ```
pub fn list_mesh_files<P: AsRef<Path>>(dir: P, extension: &str) -> IoResult<Vec<String>> {
    let dir = dir.as_ref();
    let wanted = extension.trim_start_matches('.');
    let entries = fs::read_dir(dir).map_err(|e| IoError::from_open(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(wanted));
        if !matches {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    debug!(dir = %dir.display(), extension = wanted, count = names.len(), "Listed mesh files");
    Ok(names)
}
