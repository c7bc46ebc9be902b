//! Browsing sessions over real files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::assert_relative_eq;
use mesh_io::{IoError, LoadOptions};
use mesh_types::Point3;
use mesh_viewer::{InputEvent, MeshCatalog, ViewParams, ViewerError, ViewerSession};
use tempfile::{TempDir, tempdir};

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

const SQUARE: &str = "ply
format ascii 1.0
element vertex 4
property float x
property float y
property float z
element face 2
property list uchar int vertex_indices
end_header
0 0 0
4 0 0
4 4 0
0 4 0
3 0 1 2
3 0 2 3
";

fn models(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn open(dir: &TempDir) -> ViewerSession {
    let catalog = MeshCatalog::scan(dir.path(), "ply").unwrap();
    ViewerSession::open(catalog, LoadOptions::default(), ViewParams::default()).unwrap()
}

#[test]
fn opens_first_file_and_frames_it() {
    let dir = models(&[("a_tri.ply", TRIANGLE), ("b_square.ply", SQUARE)]);
    let session = open(&dir);

    assert_eq!(session.catalog().current_name(), "a_tri.ply");
    assert_eq!(session.mesh().num_triangles(), 1);
    assert_eq!(session.framing().center, Point3::new(0.5, 0.5, 0.0));
    assert_relative_eq!(session.framing().scale, 1.5);
}

#[test]
fn next_and_previous_switch_meshes() {
    let dir = models(&[("a_tri.ply", TRIANGLE), ("b_square.ply", SQUARE)]);
    let mut session = open(&dir);

    session.handle(InputEvent::NextMesh).unwrap();
    assert_eq!(session.catalog().current_name(), "b_square.ply");
    assert_eq!(session.mesh().num_triangles(), 2);
    assert_relative_eq!(session.framing().scale, 1.5 / 4.0);

    session.handle(InputEvent::NextMesh).unwrap();
    assert_eq!(session.catalog().current_name(), "a_tri.ply");

    session.handle(InputEvent::PreviousMesh).unwrap();
    assert_eq!(session.catalog().current_name(), "b_square.ply");
}

#[test]
fn broken_file_keeps_previous_mesh() {
    let dir = models(&[("a_tri.ply", TRIANGLE), ("b_broken.ply", "comment only\n")]);
    let mut session = open(&dir);
    let before = session.mesh().clone();

    let err = session.handle(InputEvent::NextMesh).unwrap_err();
    assert!(matches!(err, ViewerError::Io(IoError::NotPly)));
    assert_eq!(session.mesh(), &before);

    // Cycling on past the broken entry recovers.
    session.handle(InputEvent::NextMesh).unwrap();
    assert_eq!(session.catalog().current_name(), "a_tri.ply");
}

#[test]
fn camera_events_do_not_touch_mesh() {
    let dir = models(&[("a_tri.ply", TRIANGLE)]);
    let mut session = open(&dir);
    let mesh = session.mesh().clone();

    session
        .handle(InputEvent::Drag {
            dx: 20.0,
            dy: 5.0,
            shift: false,
        })
        .unwrap();
    session.handle(InputEvent::Scroll { dy: 10.0 }).unwrap();

    assert_relative_eq!(session.camera().azimuth, 0.2, epsilon = 1e-6);
    assert_relative_eq!(session.camera().radius, 4.0, epsilon = 1e-6);
    assert_eq!(session.mesh(), &mesh);
    assert!(session.mvp(1.0).iter().all(|c| c.is_finite()));
}

#[test]
fn report_mentions_counts_and_bounds() {
    let dir = models(&[("b_square.ply", SQUARE)]);
    let session = open(&dir);
    let report = session.report();

    assert_eq!(report.vertices, 4);
    assert_eq!(report.triangles, 2);
    assert_eq!(report.max, Point3::new(4.0, 4.0, 0.0));

    let text = report.to_string();
    assert!(text.starts_with("b_square.ply\n"));
    assert!(text.contains("triangles: 2"));
}

#[test]
fn empty_directory_cannot_open() {
    let dir = models(&[("readme.txt", "hello")]);
    let err = MeshCatalog::scan(dir.path(), "ply").unwrap_err();
    assert!(matches!(err, ViewerError::EmptyCatalog { .. }));
}
