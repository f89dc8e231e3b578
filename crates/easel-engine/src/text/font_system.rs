use std::fmt;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Coverage bitmap for one glyph, positioned relative to the pen on the
/// baseline (+Y down).
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    /// Offset of the bitmap's top-left corner from the pen position.
    pub left: i32,
    pub top: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, one byte per pixel.
    pub coverage: Vec<u8>,
    pub advance: f32,
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The raster canvas owns one system and
/// rasterizes glyphs on demand; nothing is cached between calls.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?}", id);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Sum of horizontal advances of `text` at `size` pixels.
    ///
    /// Returns 0 for an unknown font.
    #[must_use]
    pub fn measure(&self, text: &str, id: FontId, size: f32) -> f32 {
        let Some(font) = self.get(id) else {
            return 0.0;
        };
        text.chars().map(|ch| font.metrics(ch, size).advance_width).sum()
    }

    /// Rasterizes every character of `text` in order.
    pub fn rasterize(&self, text: &str, id: FontId, size: f32) -> Vec<GlyphBitmap> {
        let Some(font) = self.get(id) else {
            return Vec::new();
        };
        text.chars()
            .map(|ch| {
                let (m, coverage) = font.rasterize(ch, size);
                GlyphBitmap {
                    left: m.xmin,
                    // fontdue's ymin is the bitmap bottom relative to the baseline, +Y up.
                    top: -(m.ymin + m.height as i32),
                    width: m.width,
                    height: m.height,
                    coverage,
                    advance: m.advance_width,
                }
            })
            .collect()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_bytes() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn unknown_font_measures_zero() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure("hello", FontId(3), 12.0), 0.0);
        assert!(fonts.rasterize("hello", FontId(3), 12.0).is_empty());
    }
}
