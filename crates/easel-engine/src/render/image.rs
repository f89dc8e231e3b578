use std::path::Path;

use anyhow::{Context, Result};
use tiny_skia::{ColorU8, IntRect, Pixmap};

use crate::paint::Color;

/// Owned RGBA raster.
///
/// Pixels are stored premultiplied (tiny-skia's native layout); every
/// accessor that hands out bytes converts to straight alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixmap: Pixmap,
}

impl Image {
    /// Transparent image of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "image size must be non-zero, got {width}x{height}");
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} image"))?;
        Ok(Self { pixmap })
    }

    /// Builds an image from straight (non-premultiplied) RGBA bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            rgba.len() == expected,
            "expected {expected} bytes for a {width}x{height} image, got {}",
            rgba.len()
        );
        let mut image = Self::new(width, height)?;
        let src: &[[u8; 4]] = bytemuck::cast_slice(rgba);
        for (dst, &[r, g, b, a]) in image.pixmap.pixels_mut().iter_mut().zip(src) {
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(image)
    }

    pub fn decode_png(bytes: &[u8]) -> Result<Self> {
        let pixmap = Pixmap::decode_png(bytes).context("failed to decode PNG")?;
        Ok(Self { pixmap })
    }

    pub fn load_png(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let pixmap = Pixmap::load_png(path)
            .with_context(|| format!("failed to load PNG from {}", path.display()))?;
        log::debug!("loaded {}x{} image from {}", pixmap.width(), pixmap.height(), path.display());
        Ok(Self { pixmap })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write PNG to {}", path.display()))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap.encode_png().context("failed to encode PNG")
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight RGBA of one pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Every pixel as straight RGBA bytes, row-major.
    pub fn to_rgba(&self) -> Vec<u8> {
        demultiplied(&self.pixmap)
    }

    /// Sub-image of the intersection of `(x, y, w, h)` with this image.
    pub fn crop(&self, x: i32, y: i32, w: u32, h: u32) -> Option<Image> {
        let rect = IntRect::from_xywh(x, y, w, h)?;
        let pixmap = self.pixmap.clone_rect(rect)?;
        Some(Self { pixmap })
    }

    /// Copy with every channel multiplied by the matching `tint` channel.
    pub fn tinted(&self, tint: Color) -> Image {
        let [tr, tg, tb, ta] = tint.to_rgba8();
        let scale = |v: u8, t: u8| ((v as u16 * t as u16 + 127) / 255) as u8;
        let mut out = self.clone();
        for p in out.pixmap.pixels_mut() {
            let c = p.demultiply();
            *p = ColorU8::from_rgba(
                scale(c.red(), tr),
                scale(c.green(), tg),
                scale(c.blue(), tb),
                scale(c.alpha(), ta),
            )
            .premultiply();
        }
        out
    }

    #[inline]
    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    #[inline]
    pub(crate) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }
}

/// Straight RGBA bytes of a premultiplied pixmap, row-major.
pub(crate) fn demultiplied(pixmap: &Pixmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.data().len());
    for p in pixmap.pixels() {
        let c = p.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_an_error() {
        assert!(Image::new(0, 4).is_err());
    }

    #[test]
    fn straight_rgba_survives_premultiplication() {
        let img = Image::from_rgba(2, 1, &[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(img.pixel(1, 0), Some([0, 0, 255, 255]));
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.to_rgba(), vec![255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn wrong_byte_count_is_rejected() {
        let err = Image::from_rgba(2, 2, &[0; 3]).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes"));
    }

    #[test]
    fn tint_multiplies_channels() {
        let img = Image::from_rgba(1, 1, &[200, 100, 50, 255]).unwrap();
        let tinted = img.tinted(Color::from_srgb_u8(255, 0, 255, 255));
        assert_eq!(tinted.pixel(0, 0), Some([200, 0, 50, 255]));
    }

    #[test]
    fn crop_clips_to_bounds() {
        let img = Image::new(4, 4).unwrap();
        let part = img.crop(2, 2, 10, 10).unwrap();
        assert_eq!((part.width(), part.height()), (2, 2));
    }

    #[test]
    fn png_round_trip_keeps_pixels() {
        let img = Image::from_rgba(1, 1, &[10, 20, 30, 255]).unwrap();
        let bytes = img.encode_png().unwrap();
        assert_eq!(Image::decode_png(&bytes).unwrap(), img);
    }
}
