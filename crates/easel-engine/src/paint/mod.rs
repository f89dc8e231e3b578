//! Paint model shared by the shape core and the sinks.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, linear gradient)
//! - compositing modes
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod gradient;

pub use blend::BlendMode;
pub use color::{Color, ColorParseError};
pub use gradient::{ColorStop, LinearGradient, SpreadMode};

/// Paint source for filling or stroking geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// True when painting with this source cannot change any pixel.
    ///
    /// Primitives use this to skip work, mirroring the canvas habit of
    /// returning early on an `rgba(0,0,0,0)` style.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_transparent(),
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.is_transparent()),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
