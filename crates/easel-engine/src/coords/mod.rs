//! Coordinate and geometry types shared by the shape core and the sinks.
//!
//! Canonical user space:
//! - pixels, origin top-left
//! - +X right, +Y down
//!
//! Sinks apply the current [`Transform`] when painting.

mod rect;
mod transform;
mod vec2;

pub use rect::{Rect, ShapeMode};
pub use transform::Transform;
pub use vec2::Vec2;
