//! Loader for the line-oriented ASCII triangle format.
//!
//! Only lines whose first token is `vertex` matter; each carries three
//! coordinates, and every three consecutive vertices form one triangle.
//! Any other line (`solid`, `facet normal`, `outer loop`, ...) is ignored, so
//! ASCII STL exports load directly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MeshFileError, Result};
use crate::geometry::{Triangle, TriangleSet};
use crate::math::Point3;

/// Opens `path` and parses it as an ASCII mesh.
///
/// # Errors
///
/// Returns [`MeshFileError::Open`] if the file cannot be opened and
/// [`MeshFileError::Read`] if reading fails midway.
pub fn load_ascii_mesh(path: impl AsRef<Path>) -> Result<TriangleSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MeshFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = read_ascii_mesh(BufReader::new(file))?;
    debug!(path = %path.display(), triangles = mesh.len(), "loaded ascii mesh");
    Ok(mesh)
}

/// Parses an ASCII mesh from any buffered reader.
///
/// # Errors
///
/// Returns [`MeshFileError::Read`] if the underlying reader fails.
pub fn read_ascii_mesh<R: BufRead>(mut reader: R) -> Result<TriangleSet> {
    let mut mesh = TriangleSet::default();
    let mut pending: Vec<Point3> = Vec::with_capacity(3);
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(MeshFileError::Read)? == 0 {
            break;
        }
        line_no += 1;
        // Non-UTF-8 bytes (e.g. a Latin-1 solid name) only matter on vertex lines.
        let line = String::from_utf8_lossy(&buf);
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("vertex") {
            continue;
        }
        let Some(point) = parse_point(tokens) else {
            warn!(line = line_no, text = line.trim(), "skipping malformed vertex line");
            continue;
        };
        pending.push(point);
        if let [p1, p2, p3] = pending[..] {
            mesh.push(Triangle::new(p1, p2, p3));
            pending.clear();
        }
    }

    if !pending.is_empty() {
        debug!(
            leftover = pending.len(),
            "dropping incomplete trailing triangle"
        );
    }
    Ok(mesh)
}

fn parse_point<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Point3> {
    let mut coord = || tokens.next()?.parse::<f64>().ok();
    Some(Point3::new(coord()?, coord()?, coord()?))
}
