use std::fmt;

/// Errors surfaced by the shape core.
///
/// Degenerate geometry is never an error; the only failure is a shape kind
/// tag that names no known kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    UnknownKind { tag: String },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::UnknownKind { tag } => write!(
                f,
                "unknown shape kind {tag:?} (expected one of: polygon, points, lines, triangles, \
                 triangle_strip, triangle_fan, quads, quad_strip)"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}
