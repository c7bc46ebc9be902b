//! Property-based tests for PLY writing and reading.
//!
//! Run with: cargo test -p mesh-io -- proptest

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mesh_io::{IoResult, LoadOptions, read_ply, write_ply};
use mesh_types::{NormalOptions, ShadedMesh};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Positions plus a triangle list whose indices are all valid.
fn arb_mesh_buffers() -> impl Strategy<Value = (Vec<f32>, Vec<u32>)> {
    prop::collection::vec(prop::array::uniform3(-1.0e4..1.0e4f32), 1..30).prop_flat_map(|pts| {
        let n = pts.len() as u32;
        let positions: Vec<f32> = pts.into_iter().flatten().collect();
        let faces = prop::collection::vec(prop::array::uniform3(0..n), 0..40);
        (
            Just(positions),
            faces.prop_map(|f| f.into_iter().flatten().collect::<Vec<u32>>()),
        )
    })
}

fn populated(positions: Vec<f32>, indices: Vec<u32>) -> ShadedMesh {
    let mut mesh = ShadedMesh::new();
    mesh.populate(positions, indices, NormalOptions::default())
        .unwrap();
    mesh
}

fn render(mesh: &ShadedMesh) -> String {
    let mut buf = Vec::new();
    write_ply(mesh, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn read(text: &str) -> IoResult<ShadedMesh> {
    let mut mesh = ShadedMesh::new();
    read_ply(&mut mesh, text.as_bytes(), &LoadOptions::default())?;
    Ok(mesh)
}

/// Insert `gaps[i]` whitespace-only lines before line `i`.
fn interleave_blank_lines(text: &str, gaps: &[u8]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, line) in text.lines().enumerate() {
        for g in 0..gaps.get(i).copied().unwrap_or(0) {
            out.push_str(if g % 2 == 0 { "\n" } else { " \t \n" });
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_write_then_read_is_identity((positions, indices) in arb_mesh_buffers()) {
        let mesh = populated(positions, indices);
        let loaded = read(&render(&mesh)).unwrap();
        prop_assert_eq!(loaded, mesh);
    }

    #[test]
    fn proptest_blank_lines_do_not_change_geometry(
        (positions, indices) in arb_mesh_buffers(),
        gaps in prop::collection::vec(0u8..3, 0..120),
    ) {
        let mesh = populated(positions, indices);
        let text = interleave_blank_lines(&render(&mesh), &gaps);
        let loaded = read(&text).unwrap();
        prop_assert_eq!(loaded, mesh);
    }

    #[test]
    fn proptest_truncated_body_is_rejected(
        (positions, indices) in arb_mesh_buffers(),
        drop in 1usize..10,
    ) {
        let mesh = populated(positions, indices);
        let text = render(&mesh);
        let lines: Vec<&str> = text.lines().collect();
        let body = mesh.num_vertices() + mesh.num_triangles();
        let keep = lines.len() - drop.min(body);
        let truncated = lines[..keep].join("\n");
        prop_assert!(read(&truncated).is_err());
    }
}
