//! PLY body decoding: vertex and face records.

use std::io::BufRead;

use tracing::debug;

use crate::error::{IoError, IoResult, Section};
use crate::header::PlyHeader;
use crate::reader::{LineReader, Record};

/// Upper bound on records reserved up front, so a lying header cannot
/// trigger a huge allocation before any data is read.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Flat buffers decoded from a PLY body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// `[x0, y0, z0, x1, ...]`, three per vertex.
    pub positions: Vec<f32>,
    /// `[a0, b0, c0, a1, ...]`, three per triangle.
    pub indices: Vec<u32>,
}

/// Read exactly the vertex and face records declared in `header`.
///
/// Vertex lines contribute their first three tokens as x, y, z; extra
/// tokens are ignored. Face lines must read `3 a b c`. Blank lines inside
/// the body are skipped without using up a record. Anything after the last
/// declared face is left unread.
///
/// # Errors
///
/// - [`IoError::UnexpectedEof`] if input ends before a quota is met
/// - [`IoError::InvalidContent`] for short lines, unparsable or non-finite
///   numbers, and face indices outside `0..vertex_count`
/// - [`IoError::FaceArity`] for faces that are not triangles
pub fn read_geometry<R: BufRead>(
    reader: &mut LineReader<R>,
    header: &PlyHeader,
) -> IoResult<Geometry> {
    let mut geometry = Geometry {
        positions: Vec::with_capacity(header.vertex_count.min(PREALLOC_LIMIT) * 3),
        indices: Vec::with_capacity(header.face_count.min(PREALLOC_LIMIT) * 3),
    };

    for _ in 0..header.vertex_count {
        let record = next_in(reader, Section::Vertices, header.vertex_count)?;
        read_vertex(&record, &mut geometry.positions)?;
    }
    debug!(vertices = header.vertex_count, "Decoded vertex records");

    for _ in 0..header.face_count {
        let record = next_in(reader, Section::Faces, header.face_count)?;
        read_face(&record, header.vertex_count, &mut geometry.indices)?;
    }
    debug!(faces = header.face_count, "Decoded face records");

    Ok(geometry)
}

fn next_in<R: BufRead>(
    reader: &mut LineReader<R>,
    section: Section,
    expected: usize,
) -> IoResult<Record> {
    reader.next_record()?.ok_or(IoError::UnexpectedEof {
        line: reader.line(),
        expected,
        section,
    })
}

fn read_vertex(record: &Record, out: &mut Vec<f32>) -> IoResult<()> {
    let mut tokens = record.tokens();
    for axis in ["x", "y", "z"] {
        let token = tokens.next().ok_or_else(|| {
            IoError::invalid_content(record.line, format!("vertex is missing its {axis} coordinate"))
        })?;
        let value: f32 = token
            .parse()
            .ok()
            .filter(|v: &f32| v.is_finite())
            .ok_or_else(|| {
                IoError::invalid_content(
                    record.line,
                    format!("invalid {axis} coordinate `{token}`"),
                )
            })?;
        out.push(value);
    }
    Ok(())
}

fn read_face(record: &Record, vertex_count: usize, out: &mut Vec<u32>) -> IoResult<()> {
    let mut tokens = record.tokens();

    // The line is non-blank, so a first token always exists.
    let count = tokens.next().unwrap_or_default();
    let arity: i64 = count.parse().map_err(|_| {
        IoError::invalid_content(record.line, format!("invalid face vertex count `{count}`"))
    })?;
    if arity != 3 {
        return Err(IoError::FaceArity {
            line: record.line,
            arity,
        });
    }

    for corner in 0..3 {
        let token = tokens.next().ok_or_else(|| {
            IoError::invalid_content(
                record.line,
                format!("face lists {corner} of 3 vertex indices"),
            )
        })?;
        let index: u32 = token.parse().map_err(|_| {
            IoError::invalid_content(record.line, format!("invalid vertex index `{token}`"))
        })?;
        if index as usize >= vertex_count {
            return Err(IoError::invalid_content(
                record.line,
                format!("vertex index {index} out of range for {vertex_count} vertices"),
            ));
        }
        out.push(index);
    }
    Ok(())
}
