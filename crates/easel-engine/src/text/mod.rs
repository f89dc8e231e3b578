//! Text support: font loading and rasterization (fontdue), text attributes
//! and word-wrapped layout.

mod font_system;
mod layout;
mod style;

pub use font_system::{FontId, FontLoadError, FontSystem, GlyphBitmap};
pub use layout::{wrap_text, LaidLine, TextBox};
pub use style::{TextAlign, TextStyle, LEADING_RATIO};
