use super::FontId;

/// Horizontal anchoring of a text run relative to its `x` coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Offset to add to `x` for a run `width` pixels wide.
    #[inline]
    pub fn offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width * 0.5,
            TextAlign::Right => -width,
        }
    }
}

/// Text attributes applied to a sink before drawing text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// `None` draws nothing on raster sinks (there is no built-in font).
    pub font: Option<FontId>,
    /// Pixel size.
    pub size: f32,
    /// Distance between consecutive baselines.
    pub leading: f32,
    pub align: TextAlign,
}

/// Ratio between the default leading and the text size.
pub const LEADING_RATIO: f32 = 1.25;

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: None,
            size: 12.0,
            leading: 12.0 * LEADING_RATIO,
            align: TextAlign::Left,
        }
    }
}
