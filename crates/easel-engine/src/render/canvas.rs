use core::f32::consts::{FRAC_PI_2, TAU};
use std::path::Path as FsPath;

use anyhow::{Context, Result};
use tiny_skia as sk;

use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{BlendMode, Color, Paint, SpreadMode};
use crate::text::{FontId, FontLoadError, FontSystem, TextStyle};

use super::image::demultiplied;
use super::{Image, PathSink, StrokeCap, StrokeJoin, StrokeStyle};

/// Value written by [`Canvas::set_pixel`].
#[derive(Debug, Clone, Copy)]
pub enum PixelValue<'a> {
    /// Opaque gray level.
    Gray(u8),
    /// Straight RGBA.
    Rgba([u8; 4]),
    Color(Color),
    /// Image whose top-left corner lands on the pixel.
    Image(&'a Image),
}

/// Integer pixel rectangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Segment {
    Move(Vec2),
    Line(Vec2),
    Quad(Vec2, Vec2),
    Cubic(Vec2, Vec2, Vec2),
    Close,
}

/// State pushed by `save` and popped by `restore`.
#[derive(Debug, Clone)]
struct CanvasState {
    fill: Paint,
    stroke: Paint,
    stroke_style: StrokeStyle,
    blend: BlendMode,
    transform: Transform,
    smoothing: bool,
    text: TextStyle,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            fill: Paint::Solid(Color::WHITE),
            stroke: Paint::Solid(Color::BLACK),
            stroke_style: StrokeStyle::default(),
            blend: BlendMode::Blend,
            transform: Transform::identity(),
            smoothing: true,
            text: TextStyle::default(),
        }
    }
}

/// CPU raster sink backed by a tiny-skia pixmap.
///
/// Path coordinates are recorded in user space; the transform current at
/// `fill` / `stroke` time maps them to pixels. Pixel access goes through a
/// straight-RGBA snapshot taken by [`Canvas::load_pixels`] and written back
/// by [`Canvas::update_pixels`]; drawing does not refresh the snapshot.
pub struct Canvas {
    pixmap: sk::Pixmap,
    state: CanvasState,
    stack: Vec<CanvasState>,
    segments: Vec<Segment>,
    current: Option<Vec2>,
    subpath_start: Option<Vec2>,
    fonts: FontSystem,
    pixels: Option<Vec<u8>>,
    warned_no_font: bool,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "canvas size must be non-zero, got {width}x{height}");
        let pixmap = sk::Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} canvas"))?;
        log::debug!("canvas created: {}x{}", width, height);
        Ok(Self {
            pixmap,
            state: CanvasState::default(),
            stack: Vec::new(),
            segments: Vec::new(),
            current: None,
            subpath_start: None,
            fonts: FontSystem::new(),
            pixels: None,
            warned_no_font: false,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Registers a font for use through [`TextStyle::font`].
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.fonts.load_font(bytes)
    }

    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write PNG to {}", path.display()))?;
        log::info!("wrote {}x{} PNG to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    // ── pixel access ──────────────────────────────────────────────────────

    /// Straight RGBA at `(x, y)`.
    ///
    /// Coordinates outside `[0, width] × [0, height]` read as opaque black;
    /// the far edges themselves read as transparent black.
    pub fn get_pixel(&self, x: i32, y: i32) -> [u8; 4] {
        let (w, h) = (self.width() as i32, self.height() as i32);
        if x < 0 || y < 0 || x > w || y > h {
            return [0, 0, 0, 255];
        }
        match self.pixmap.pixel(x as u32, y as u32) {
            Some(p) => {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            }
            None => [0, 0, 0, 0],
        }
    }

    /// Copies a region into a new image. Size is clamped to the surface;
    /// parts outside the surface are transparent.
    pub fn get_region(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Image> {
        let w = w.min(self.width());
        let h = h.min(self.height());
        let mut out = Image::new(w, h).context("empty pixel region")?;
        out.pixmap_mut().draw_pixmap(
            -x,
            -y,
            self.pixmap.as_ref(),
            &sk::PixmapPaint::default(),
            sk::Transform::identity(),
            None,
        );
        Ok(out)
    }

    /// Snapshot of the whole surface.
    pub fn get_image(&self) -> Image {
        Image::from_pixmap(self.pixmap.clone())
    }

    /// Takes a straight-RGBA snapshot of the surface.
    pub fn load_pixels(&mut self) {
        self.pixels = Some(demultiplied(&self.pixmap));
    }

    /// The snapshot from the last [`load_pixels`](Self::load_pixels); empty
    /// before the first load.
    pub fn pixels(&self) -> &[[u8; 4]] {
        match &self.pixels {
            Some(bytes) => bytemuck::cast_slice(bytes),
            None => &[],
        }
    }

    /// Mutable snapshot, loading it first if needed.
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        let bytes = self.pixels.get_or_insert_with(|| demultiplied(&self.pixmap));
        bytemuck::cast_slice_mut(bytes)
    }

    /// Writes one value into the snapshot. Out-of-range writes are ignored.
    ///
    /// An image is drawn straight onto the surface instead, ignoring the
    /// current transform, and the snapshot is reloaded.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: PixelValue<'_>) {
        let rgba = match value {
            PixelValue::Gray(v) => [v, v, v, 255],
            PixelValue::Rgba(rgba) => rgba,
            PixelValue::Color(c) => c.to_rgba8(),
            PixelValue::Image(image) => {
                self.put_image(image, x, y);
                self.load_pixels();
                return;
            }
        };
        let (w, h) = (self.width() as i32, self.height() as i32);
        let pixels = self.pixels_mut();
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        pixels[(y * w + x) as usize] = rgba;
    }

    /// Writes the snapshot back to the surface, limited to `region` when
    /// given. Does nothing if pixels were never loaded.
    pub fn update_pixels(&mut self, region: Option<PixelRegion>) {
        let Some(bytes) = self.pixels.as_ref() else {
            log::debug!("update_pixels without load_pixels; ignoring");
            return;
        };
        let (w, h) = (self.width(), self.height());
        let region = region.unwrap_or(PixelRegion { x: 0, y: 0, width: w, height: h });
        let x0 = region.x.min(w);
        let y0 = region.y.min(h);
        let x1 = region.x.saturating_add(region.width).min(w);
        let y1 = region.y.saturating_add(region.height).min(h);

        let src: &[[u8; 4]] = bytemuck::cast_slice(bytes);
        let dst = self.pixmap.pixels_mut();
        for y in y0..y1 {
            for x in x0..x1 {
                let i = (y * w + x) as usize;
                let [r, g, b, a] = src[i];
                dst[i] = sk::ColorU8::from_rgba(r, g, b, a).premultiply();
            }
        }
    }

    /// Draws the `from` region of `src` (or of the canvas itself) scaled into
    /// `to`, using the current blend mode and transform.
    pub fn copy(&mut self, src: Option<&Image>, from: Rect, to: Rect) {
        let snapshot;
        let source = match src {
            Some(image) => image,
            None => {
                snapshot = self.get_image();
                &snapshot
            }
        };
        let bounds = Rect::new(0.0, 0.0, source.width() as f32, source.height() as f32);
        let region = from.intersect(bounds).and_then(|r| {
            source.crop(
                r.origin.x.round() as i32,
                r.origin.y.round() as i32,
                r.size.x.round() as u32,
                r.size.y.round() as u32,
            )
        });
        let Some(region) = region else {
            log::debug!("copy source region {:?} lies outside the source", from);
            return;
        };
        self.draw_image(&region, to.origin.x, to.origin.y, to.size.x, to.size.y);
    }

    /// [`copy`](Self::copy) composited with `mode`.
    pub fn blend(&mut self, src: Option<&Image>, from: Rect, to: Rect, mode: BlendMode) {
        let previous = self.state.blend;
        self.state.blend = mode;
        self.copy(src, from, to);
        self.state.blend = previous;
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn put_image(&mut self, image: &Image, x: i32, y: i32) {
        if let Some(rect) = sk::Rect::from_xywh(x as f32, y as f32, image.width() as f32, image.height() as f32) {
            let mut clear = sk::Paint::default();
            clear.blend_mode = sk::BlendMode::Clear;
            self.pixmap.fill_rect(rect, &clear, sk::Transform::identity(), None);
        }
        self.pixmap.draw_pixmap(
            x,
            y,
            image.pixmap().as_ref(),
            &sk::PixmapPaint::default(),
            sk::Transform::identity(),
            None,
        );
    }

    fn build_path(&self) -> Option<sk::Path> {
        let mut pb = sk::PathBuilder::new();
        for seg in &self.segments {
            match *seg {
                Segment::Move(p) => pb.move_to(p.x, p.y),
                Segment::Line(p) => pb.line_to(p.x, p.y),
                Segment::Quad(c, p) => pb.quad_to(c.x, c.y, p.x, p.y),
                Segment::Cubic(c1, c2, p) => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                Segment::Close => pb.close(),
            }
        }
        pb.finish()
    }

    fn ensure_current(&mut self, x: f32, y: f32) {
        if self.current.is_none() {
            self.move_to(x, y);
        }
    }

    fn sk_transform(&self) -> sk::Transform {
        to_sk_transform(self.state.transform)
    }

    fn draw_glyphs(&mut self, text: &str, x: f32, y: f32, color: Color) {
        let Some(font) = self.state.text.font else {
            if !self.warned_no_font {
                log::warn!("text drawn without a font; load one with Canvas::load_font");
                self.warned_no_font = true;
            }
            return;
        };
        let [r, g, b, a] = color.to_rgba8();
        let ts = self.sk_transform();
        let paint = sk::PixmapPaint {
            blend_mode: to_sk_blend(self.state.blend),
            quality: sk::FilterQuality::Bilinear,
            ..sk::PixmapPaint::default()
        };

        let mut pen = x;
        for glyph in self.fonts.rasterize(text, font, self.state.text.size) {
            if let Some(mut bitmap) = sk::Pixmap::new(glyph.width as u32, glyph.height as u32) {
                for (dst, &cov) in bitmap.pixels_mut().iter_mut().zip(&glyph.coverage) {
                    let alpha = (a as u16 * cov as u16 / 255) as u8;
                    *dst = sk::ColorU8::from_rgba(r, g, b, alpha).premultiply();
                }
                self.pixmap.draw_pixmap(
                    (pen + glyph.left as f32).round() as i32,
                    (y + glyph.top as f32).round() as i32,
                    bitmap.as_ref(),
                    &paint,
                    ts,
                    None,
                );
            }
            pen += glyph.advance;
        }
    }
}

impl PathSink for Canvas {
    fn begin_path(&mut self) {
        self.segments.clear();
        self.current = None;
        self.subpath_start = None;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        self.segments.push(Segment::Move(p));
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    /// Without a current point this behaves as `move_to`.
    fn line_to(&mut self, x: f32, y: f32) {
        if self.current.is_none() {
            self.move_to(x, y);
            return;
        }
        let p = Vec2::new(x, y);
        self.segments.push(Segment::Line(p));
        self.current = Some(p);
    }

    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.ensure_current(c1x, c1y);
        let p = Vec2::new(x, y);
        self.segments.push(Segment::Cubic(Vec2::new(c1x, c1y), Vec2::new(c2x, c2y), p));
        self.current = Some(p);
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.ensure_current(cx, cy);
        let p = Vec2::new(x, y);
        self.segments.push(Segment::Quad(Vec2::new(cx, cy), p));
        self.current = Some(p);
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close_path();
    }

    /// Approximated by cubic segments of at most a quarter turn each.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32, anticlockwise: bool) {
        let center = Vec2::new(cx, cy);
        let on_circle = |angle: f32| center + Vec2::new(angle.cos(), angle.sin()) * radius;

        let from = on_circle(start);
        if self.current.is_some() {
            self.line_to(from.x, from.y);
        } else {
            self.move_to(from.x, from.y);
        }

        let raw = end - start;
        let sweep = if anticlockwise {
            if -raw >= TAU { -TAU } else { -(-raw).rem_euclid(TAU) }
        } else if raw >= TAU {
            TAU
        } else {
            raw.rem_euclid(TAU)
        };
        if radius <= 0.0 || sweep == 0.0 {
            return;
        }

        let n = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = sweep / n as f32;
        let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;
        for i in 0..n {
            let a0 = start + step * i as f32;
            let a1 = a0 + step;
            let p0 = on_circle(a0);
            let p3 = on_circle(a1);
            let c1 = p0 + Vec2::new(-a0.sin(), a0.cos()) * k;
            let c2 = p3 - Vec2::new(-a1.sin(), a1.cos()) * k;
            self.segments.push(Segment::Cubic(c1, c2, p3));
            self.current = Some(p3);
        }
    }

    fn close_path(&mut self) {
        if self.current.is_some() {
            self.segments.push(Segment::Close);
            self.current = self.subpath_start;
        }
    }

    fn fill(&mut self) {
        let Some(path) = self.build_path() else { return };
        let Some(paint) = to_sk_paint(&self.state.fill, self.state.blend) else { return };
        let ts = self.sk_transform();
        self.pixmap.fill_path(&path, &paint, sk::FillRule::Winding, ts, None);
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path() else { return };
        let Some(paint) = to_sk_paint(&self.state.stroke, self.state.blend) else { return };
        let stroke = to_sk_stroke(self.state.stroke_style);
        let ts = self.sk_transform();
        self.pixmap.stroke_path(&path, &paint, &stroke, ts, None);
    }

    fn fill_paint(&self) -> &Paint {
        &self.state.fill
    }

    fn set_fill_paint(&mut self, paint: Paint) {
        self.state.fill = paint;
    }

    fn stroke_paint(&self) -> &Paint {
        &self.state.stroke
    }

    fn set_stroke_paint(&mut self, paint: Paint) {
        self.state.stroke = paint;
    }

    fn stroke_style(&self) -> StrokeStyle {
        self.state.stroke_style
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.state.stroke_style = style;
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    /// Weights above one paint a disc; thinner points paint one pixel.
    fn draw_point(&mut self, x: f32, y: f32) {
        let Some(paint) = to_sk_paint(&self.state.stroke, self.state.blend) else { return };
        let ts = self.sk_transform();
        let weight = self.state.stroke_style.weight;
        if weight > 1.0 {
            if let Some(disc) = sk::PathBuilder::from_circle(x, y, weight / 2.0) {
                self.pixmap.fill_path(&disc, &paint, sk::FillRule::Winding, ts, None);
            }
        } else if let Some(rect) = sk::Rect::from_xywh(x, y, 1.0, 1.0) {
            self.pixmap.fill_rect(rect, &paint, ts, None);
        }
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.begin_path();
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let r = Rect::new(x, y, w, h).normalized();
        let Some(rect) = sk::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y) else { return };
        let Some(paint) = to_sk_paint(&self.state.fill, self.state.blend) else { return };
        let ts = self.sk_transform();
        self.pixmap.fill_rect(rect, &paint, ts, None);
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let r = Rect::new(x, y, w, h).normalized();
        let Some(rect) = sk::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y) else { return };
        let paint = sk::Paint { blend_mode: sk::BlendMode::Clear, ..sk::Paint::default() };
        let ts = self.sk_transform();
        self.pixmap.fill_rect(rect, &paint, ts, None);
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore without matching save"),
        }
    }

    fn transform(&mut self, t: Transform) {
        self.state.transform = self.state.transform.then(t);
    }

    fn set_transform(&mut self, t: Transform) {
        self.state.transform = t;
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.state.smoothing = enabled;
    }

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32) {
        let sx = w / image.width() as f32;
        let sy = h / image.height() as f32;
        let ts = self
            .state
            .transform
            .then(Transform::translation(x, y))
            .then(Transform::scaling(sx, sy));
        let paint = sk::PixmapPaint {
            opacity: 1.0,
            blend_mode: to_sk_blend(self.state.blend),
            quality: if self.state.smoothing { sk::FilterQuality::Bilinear } else { sk::FilterQuality::Nearest },
        };
        self.pixmap.draw_pixmap(0, 0, image.pixmap().as_ref(), &paint, to_sk_transform(ts), None);
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        self.state.text = style.clone();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let color = representative_color(&self.state.fill);
        self.draw_glyphs(text, x, y, color);
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let color = representative_color(&self.state.stroke);
        self.draw_glyphs(text, x, y, color);
    }

    fn measure_text(&self, text: &str) -> f32 {
        match self.state.text.font {
            Some(font) => self.fonts.measure(text, font, self.state.text.size),
            None => 0.0,
        }
    }
}

// ── conversions ───────────────────────────────────────────────────────────

fn to_sk_color(c: Color) -> sk::Color {
    let [r, g, b, a] = c.to_rgba8();
    sk::Color::from_rgba8(r, g, b, a)
}

/// Solid colour used for glyphs; gradients fall back to their first stop.
fn representative_color(paint: &Paint) -> Color {
    match paint {
        Paint::Solid(c) => *c,
        Paint::LinearGradient(g) => g.stops.first().map(|s| s.color).unwrap_or(Color::BLACK),
    }
}

fn to_sk_paint(paint: &Paint, blend: BlendMode) -> Option<sk::Paint<'static>> {
    let shader = match paint {
        Paint::Solid(c) => sk::Shader::SolidColor(to_sk_color(*c)),
        Paint::LinearGradient(g) => {
            if !g.is_valid() {
                log::debug!("skipping invalid gradient: {:?}", g);
                return None;
            }
            let stops = g
                .stops
                .iter()
                .map(|s| sk::GradientStop::new(s.t, to_sk_color(s.color)))
                .collect();
            let spread = match g.spread {
                SpreadMode::Pad => sk::SpreadMode::Pad,
                SpreadMode::Repeat => sk::SpreadMode::Repeat,
                SpreadMode::Reflect => sk::SpreadMode::Reflect,
            };
            sk::LinearGradient::new(
                sk::Point::from_xy(g.start.x, g.start.y),
                sk::Point::from_xy(g.end.x, g.end.y),
                stops,
                spread,
                sk::Transform::identity(),
            )?
        }
    };
    Some(sk::Paint {
        shader,
        blend_mode: to_sk_blend(blend),
        anti_alias: true,
        ..sk::Paint::default()
    })
}

fn to_sk_stroke(style: StrokeStyle) -> sk::Stroke {
    sk::Stroke {
        width: style.weight,
        line_cap: match style.cap {
            StrokeCap::Round => sk::LineCap::Round,
            StrokeCap::Square => sk::LineCap::Butt,
            StrokeCap::Project => sk::LineCap::Square,
        },
        line_join: match style.join {
            StrokeJoin::Miter => sk::LineJoin::Miter,
            StrokeJoin::Bevel => sk::LineJoin::Bevel,
            StrokeJoin::Round => sk::LineJoin::Round,
        },
        ..sk::Stroke::default()
    }
}

fn to_sk_blend(mode: BlendMode) -> sk::BlendMode {
    match mode {
        BlendMode::Blend => sk::BlendMode::SourceOver,
        BlendMode::Add => sk::BlendMode::Plus,
        BlendMode::Darkest => sk::BlendMode::Darken,
        BlendMode::Lightest => sk::BlendMode::Lighten,
        BlendMode::Difference => sk::BlendMode::Difference,
        BlendMode::Exclusion => sk::BlendMode::Exclusion,
        BlendMode::Multiply => sk::BlendMode::Multiply,
        BlendMode::Screen => sk::BlendMode::Screen,
        BlendMode::Replace => sk::BlendMode::Source,
        BlendMode::Overlay => sk::BlendMode::Overlay,
        BlendMode::HardLight => sk::BlendMode::HardLight,
        BlendMode::SoftLight => sk::BlendMode::SoftLight,
        BlendMode::Dodge => sk::BlendMode::ColorDodge,
        BlendMode::Burn => sk::BlendMode::ColorBurn,
    }
}

#[inline]
fn to_sk_transform(t: Transform) -> sk::Transform {
    sk::Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
}
