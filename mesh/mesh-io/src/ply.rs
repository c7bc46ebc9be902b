//! PLY (Polygon File Format) support.
//!
//! Reads the ASCII triangle-mesh subset of PLY:
//!
//! ```text
//! ply
//! format ascii 1.0
//! element vertex <N>
//! property float x
//! property float y
//! property float z
//! element face <M>
//! property list uchar int vertex_indices
//! end_header
//! <N lines "x y z">
//! <M lines "3 i j k">
//! ```
//!
//! Loading is all-or-nothing: the file is decoded into scratch buffers and
//! only handed to the [`ShadedMesh`] once every record has been validated.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_ply, save_ply};
//!
//! let mesh = load_ply("bunny.ply").unwrap();
//! save_ply(&mesh, "bunny_copy.ply").unwrap();
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::ShadedMesh;
use tracing::{info, warn};

use crate::decode::read_geometry;
use crate::error::{IoError, IoResult};
use crate::header::read_header;
use crate::params::LoadOptions;
use crate::reader::LineReader;

/// Load a mesh from a PLY file with default options.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The header has no `ply` line
/// - The body is shorter than declared or contains malformed records
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_ply;
///
/// let mesh = load_ply("model.ply").unwrap();
/// println!("Loaded {} vertices, {} triangles", mesh.num_vertices(), mesh.num_triangles());
/// ```
pub fn load_ply<P: AsRef<Path>>(path: P) -> IoResult<ShadedMesh> {
    load_ply_with(path, &LoadOptions::default())
}

/// Load a mesh from a PLY file with explicit options.
///
/// # Errors
///
/// See [`load_ply`]. With [`LoadOptions::strict`], zero-area faces are
/// also an error.
pub fn load_ply_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> IoResult<ShadedMesh> {
    let mut mesh = ShadedMesh::new();
    load_ply_into(&mut mesh, path, options)?;
    Ok(mesh)
}

/// Load a PLY file into an existing, still-empty mesh.
///
/// A mesh can be loaded once. If `mesh` already holds data the call fails
/// with [`IoError::AlreadyLoaded`] before the file is opened. On any error
/// `mesh` is left unchanged.
///
/// # Errors
///
/// [`IoError::AlreadyLoaded`] plus everything [`load_ply`] reports.
pub fn load_ply_into<P: AsRef<Path>>(
    mesh: &mut ShadedMesh,
    path: P,
    options: &LoadOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    if mesh.is_loaded() {
        warn!(path = %path.display(), "Cannot load a different file into the same mesh");
        return Err(IoError::AlreadyLoaded);
    }

    let file = File::open(path).map_err(|e| IoError::from_open(path, e))?;
    read_ply(mesh, BufReader::new(file), options)?;

    info!(
        path = %path.display(),
        vertices = mesh.num_vertices(),
        triangles = mesh.num_triangles(),
        "Loaded PLY"
    );
    Ok(())
}

/// Decode PLY text from any buffered reader into `mesh`.
///
/// # Errors
///
/// Same as [`load_ply_into`], minus the file-system errors.
pub fn read_ply<R: BufRead>(
    mesh: &mut ShadedMesh,
    reader: R,
    options: &LoadOptions,
) -> IoResult<()> {
    if mesh.is_loaded() {
        return Err(IoError::AlreadyLoaded);
    }

    let mut lines = LineReader::new(reader);
    let header = read_header(&mut lines)?;
    if !header.is_ply {
        return Err(IoError::NotPly);
    }

    let geometry = read_geometry(&mut lines, &header)?;
    mesh.populate(
        geometry.positions,
        geometry.indices,
        options.normal_options(),
    )?;
    Ok(())
}

/// Save a mesh as ASCII PLY.
///
/// Only positions and triangle indices are written; normals are derived
/// again on load.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_ply<P: AsRef<Path>>(mesh: &ShadedMesh, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ply(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as ASCII PLY to any writer.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_ply<W: Write>(mesh: &ShadedMesh, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by mesh-io")?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "element face {}", mesh.num_triangles())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for p in mesh.positions().chunks_exact(3) {
        writeln!(writer, "{} {} {}", p[0], p[1], p[2])?;
    }
    for f in mesh.indices().chunks_exact(3) {
        writeln!(writer, "3 {} {} {}", f[0], f[1], f[2])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{MeshError, NormalOptions, Point3};

    const TRIANGLE: &str = "ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
0 1 0
3 0 1 2
";

    fn read(input: &str, options: &LoadOptions) -> IoResult<ShadedMesh> {
        let mut mesh = ShadedMesh::new();
        read_ply(&mut mesh, input.as_bytes(), options)?;
        Ok(mesh)
    }

    #[test]
    fn reads_triangle() {
        let mesh = read(TRIANGLE, &LoadOptions::default()).unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.indices(), [0, 1, 2]);
        assert_eq!(mesh.normals(), [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn missing_ply_marker_leaves_mesh_empty() {
        let input = TRIANGLE.replacen("ply\n", "", 1);
        let mut mesh = ShadedMesh::new();
        let err = read_ply(&mut mesh, input.as_bytes(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::NotPly));
        assert!(!mesh.is_loaded());
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_triangles(), 0);
    }

    #[test]
    fn second_read_is_refused() {
        let mut mesh = read(TRIANGLE, &LoadOptions::default()).unwrap();
        let before = mesh.clone();
        let err = read_ply(&mut mesh, TRIANGLE.as_bytes(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::AlreadyLoaded));
        assert_eq!(mesh, before);
    }

    #[test]
    fn strict_options_reject_degenerate_faces() {
        let input = TRIANGLE.replace("0 1 0\n3", "2 0 0\n3");
        let lenient = read(&input, &LoadOptions::default()).unwrap();
        assert_eq!(lenient.degenerate_faces(), 1);

        let err = read(&input, &LoadOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            IoError::Mesh(MeshError::DegenerateFace { face: 0 })
        ));
    }

    #[test]
    fn write_then_read_preserves_buffers() {
        let mut original = ShadedMesh::new();
        original
            .populate(
                vec![0.5, -1.25, 3.0, 1.0e-3, 2.0, 0.0, -7.0, 0.0, 1.5],
                vec![0, 1, 2],
                NormalOptions::default(),
            )
            .unwrap();

        let mut buf = Vec::new();
        write_ply(&original, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("ply\nformat ascii 1.0\n"));
        assert!(text.contains("element vertex 3\n"));
        assert!(text.ends_with("3 0 1 2\n"));

        let loaded = read(&text, &LoadOptions::default()).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_ply("nonexistent_file_12345.ply");
        assert!(result.is_err());
        if let Err(IoError::FileNotFound { path }) = result {
            assert!(path.to_string_lossy().contains("nonexistent"));
        }
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.ply");
        std::fs::write(&path, TRIANGLE).unwrap();

        let mesh = load_ply(&path).unwrap();
        assert_eq!(mesh.max_bounds(), Point3::new(1.0, 1.0, 0.0));

        let copy = dir.path().join("copy.ply");
        save_ply(&mesh, &copy).unwrap();
        assert_eq!(load_ply(&copy).unwrap(), mesh);
    }

    #[test]
    fn load_into_loaded_mesh_does_not_open_file() {
        let mut mesh = read(TRIANGLE, &LoadOptions::default()).unwrap();
        let err = load_ply_into(&mut mesh, "nonexistent_file_12345.ply", &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IoError::AlreadyLoaded));
    }
}
