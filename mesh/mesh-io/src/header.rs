//! PLY header parsing.
//!
//! Only the directives needed to size the body are interpreted:
//!
//! ```text
//! ply                      marks the stream as PLY
//! format ascii 1.0         ignored (ASCII is assumed)
//! element vertex <N>       vertex record count
//! element face <M>         face record count
//! end_header               body starts on the next line
//! ```
//!
//! Everything else (`comment`, `property`, `obj_info`, other elements) is
//! skipped.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::error::{IoError, IoResult};
use crate::reader::{LineReader, Record};

/// Counts extracted from a PLY header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlyHeader {
    /// A `ply` line was seen.
    pub is_ply: bool,
    /// Declared number of vertex records.
    pub vertex_count: usize,
    /// Declared number of face records.
    pub face_count: usize,
}

/// Read header lines up to and including `end_header`.
///
/// On return the reader is positioned at the first body line. Reaching the
/// end of input before `end_header` is not an error here; the decoder then
/// fails if it needs records that are not there.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] for an `element` line whose count is
/// missing or not a non-negative integer, and propagates read failures.
pub fn read_header<R: BufRead>(reader: &mut LineReader<R>) -> IoResult<PlyHeader> {
    let mut header = PlyHeader::default();

    while let Some(record) = reader.next_record()? {
        let mut tokens = record.tokens();
        match tokens.next() {
            Some("ply") => header.is_ply = true,
            Some("format") => {
                let encoding = tokens.next().unwrap_or("");
                if encoding != "ascii" {
                    warn!(line = record.line, encoding, "Non-ASCII PLY encoding; reading as ASCII");
                }
            }
            Some("element") => read_element(&record, &mut header)?,
            Some("end_header") => {
                debug!(line = record.line, "End of PLY header");
                break;
            }
            _ => {}
        }
    }

    debug!(
        is_ply = header.is_ply,
        vertices = header.vertex_count,
        faces = header.face_count,
        "Parsed PLY header"
    );
    Ok(header)
}

fn read_element(record: &Record, header: &mut PlyHeader) -> IoResult<()> {
    let mut tokens = record.tokens().skip(1);
    let name = tokens
        .next()
        .ok_or_else(|| IoError::invalid_content(record.line, "element without a name"))?;
    let count = tokens.next().ok_or_else(|| {
        IoError::invalid_content(record.line, format!("element `{name}` without a count"))
    })?;
    let count: usize = count.parse().map_err(|_| {
        IoError::invalid_content(
            record.line,
            format!("element `{name}` has invalid count `{count}`"),
        )
    })?;

    match name {
        "vertex" => header.vertex_count = count,
        "face" => header.face_count = count,
        other => debug!(line = record.line, element = other, count, "Skipping element"),
    }
    Ok(())
}
