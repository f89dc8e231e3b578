//! Immediate-mode drawing facade.
//!
//! [`Graphics`] owns a [`PathSink`], the [`DrawState`] snapshot and the
//! [`ShapeBuilder`]. Every call translates directly into sink commands; no
//! geometry is retained between calls.

use std::path::Path;

use anyhow::Result;

use crate::coords::{Rect, ShapeMode, Transform, Vec2};
use crate::paint::{BlendMode, Color, LinearGradient, Paint};
use crate::render::{
    primitives, ArcMode, Canvas, DrawState, Image, PathSink, PixelRegion, PixelValue, StrokeCap, StrokeJoin,
    StrokeStyle,
};
use crate::shape::{CloseMode, ShapeBuilder, ShapeKind};
use crate::text::{wrap_text, FontId, FontLoadError, TextAlign, TextBox, TextStyle, LEADING_RATIO};

/// Initial drawing state of a [`Graphics`].
#[derive(Debug, Clone)]
pub struct GraphicsConfig {
    pub width: u32,
    pub height: u32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_weight: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub curve_tightness: f32,
    pub rect_mode: ShapeMode,
    pub ellipse_mode: ShapeMode,
    /// Painted over the whole surface on creation.
    pub background: Option<Color>,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_weight: 1.0,
            stroke_cap: StrokeCap::Round,
            stroke_join: StrokeJoin::Miter,
            curve_tightness: 0.0,
            rect_mode: ShapeMode::Corner,
            ellipse_mode: ShapeMode::Center,
            background: None,
        }
    }
}

/// Facade state pushed by [`Graphics::push`].
#[derive(Debug, Clone)]
struct Saved {
    state: DrawState,
    fill: Option<Color>,
    stroke: Color,
    text: TextStyle,
    tint: Option<Color>,
}

pub struct Graphics<S: PathSink> {
    sink: S,
    state: DrawState,
    builder: ShapeBuilder,
    stack: Vec<Saved>,
    /// Current colours, captured by per-face vertices. `None` while the
    /// fill is a gradient.
    fill: Option<Color>,
    stroke: Color,
    text: TextStyle,
    tint: Option<Color>,
    width: f32,
    height: f32,
}

impl<S: PathSink> Graphics<S> {
    /// Wraps `sink` and applies `config` to it.
    pub fn new(sink: S, config: &GraphicsConfig) -> Self {
        let mut g = Self {
            sink,
            state: DrawState {
                curve_tightness: config.curve_tightness,
                rect_mode: config.rect_mode,
                ellipse_mode: config.ellipse_mode,
                ..DrawState::default()
            },
            builder: ShapeBuilder::new(),
            stack: Vec::new(),
            fill: Some(config.fill),
            stroke: config.stroke,
            text: TextStyle::default(),
            tint: None,
            width: config.width as f32,
            height: config.height as f32,
        };
        g.sink.set_fill_paint(Paint::from(config.fill));
        g.sink.set_stroke_paint(Paint::from(config.stroke));
        g.sink.set_stroke_style(StrokeStyle {
            cap: config.stroke_cap,
            join: config.stroke_join,
            ..StrokeStyle::default()
        }
        .with_weight(config.stroke_weight));
        g.sink.set_text_style(&g.text);
        if let Some(bg) = config.background {
            g.background(bg);
        }
        g
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    // ── colour ────────────────────────────────────────────────────────────

    pub fn fill(&mut self, color: Color) {
        self.state.fill_enabled = true;
        self.fill = Some(color);
        self.sink.set_fill_paint(Paint::from(color));
    }

    /// Fills with a gradient. Vertices recorded while it is active carry no
    /// fill override, so every face of a shape shares the gradient.
    pub fn fill_gradient(&mut self, gradient: LinearGradient) {
        self.state.fill_enabled = true;
        self.fill = None;
        self.sink.set_fill_paint(Paint::LinearGradient(gradient));
    }

    pub fn no_fill(&mut self) {
        self.state.fill_enabled = false;
    }

    pub fn stroke(&mut self, color: Color) {
        self.state.stroke_enabled = true;
        self.stroke = color;
        self.sink.set_stroke_paint(Paint::from(color));
    }

    pub fn no_stroke(&mut self) {
        self.state.stroke_enabled = false;
    }

    /// Paints the whole surface, ignoring the current transform.
    pub fn background(&mut self, color: Color) {
        self.sink.save();
        self.sink.set_transform(Transform::identity());
        self.sink.set_fill_paint(Paint::from(color));
        self.sink.fill_rect(0.0, 0.0, self.width, self.height);
        self.sink.restore();
    }

    /// Resets the whole surface to transparent.
    pub fn clear(&mut self) {
        self.sink.save();
        self.sink.set_transform(Transform::identity());
        self.sink.clear_rect(0.0, 0.0, self.width, self.height);
        self.sink.restore();
    }

    pub fn blend_mode(&mut self, mode: BlendMode) {
        self.sink.set_blend_mode(mode);
    }

    // ── attributes ────────────────────────────────────────────────────────

    pub fn stroke_weight(&mut self, weight: f32) {
        let style = self.sink.stroke_style().with_weight(weight);
        self.sink.set_stroke_style(style);
    }

    pub fn stroke_cap(&mut self, cap: StrokeCap) {
        let style = StrokeStyle { cap, ..self.sink.stroke_style() };
        self.sink.set_stroke_style(style);
    }

    pub fn stroke_join(&mut self, join: StrokeJoin) {
        let style = StrokeStyle { join, ..self.sink.stroke_style() };
        self.sink.set_stroke_style(style);
    }

    pub fn smooth(&mut self) {
        self.sink.set_image_smoothing(true);
    }

    pub fn no_smooth(&mut self) {
        self.sink.set_image_smoothing(false);
    }

    pub fn curve_tightness(&mut self, tightness: f32) {
        self.state.curve_tightness = tightness;
    }

    pub fn rect_mode(&mut self, mode: ShapeMode) {
        self.state.rect_mode = mode;
    }

    pub fn ellipse_mode(&mut self, mode: ShapeMode) {
        self.state.ellipse_mode = mode;
    }

    // ── primitives ────────────────────────────────────────────────────────

    pub fn point(&mut self, x: f32, y: f32) {
        primitives::point(&mut self.sink, &self.state, x, y);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        primitives::line(&mut self.sink, &self.state, Vec2::new(x1, y1), Vec2::new(x2, y2));
    }

    pub fn rect(&mut self, a: f32, b: f32, c: f32, d: f32) {
        primitives::rect(&mut self.sink, &self.state, a, b, c, d);
    }

    pub fn square(&mut self, x: f32, y: f32, size: f32) {
        self.rect(x, y, size, size);
    }

    pub fn ellipse(&mut self, a: f32, b: f32, c: f32, d: f32) {
        primitives::ellipse(&mut self.sink, &self.state, a, b, c, d);
    }

    pub fn circle(&mut self, x: f32, y: f32, diameter: f32) {
        self.ellipse(x, y, diameter, diameter);
    }

    /// Arc from `start` to `stop` radians. `mode = None` fills as a pie and
    /// strokes only the curve.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(&mut self, a: f32, b: f32, c: f32, d: f32, start: f32, stop: f32, mode: Option<ArcMode>) {
        primitives::arc(&mut self.sink, &self.state, a, b, c, d, start, stop, mode);
    }

    pub fn triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        primitives::triangle(
            &mut self.sink,
            &self.state,
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            Vec2::new(x3, y3),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn quad(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32, x4: f32, y4: f32) {
        primitives::quad(
            &mut self.sink,
            &self.state,
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            Vec2::new(x3, y3),
            Vec2::new(x4, y4),
        );
    }

    /// Cubic Bezier from `(x1, y1)` to `(x2, y2)`.
    #[allow(clippy::too_many_arguments)]
    pub fn bezier(&mut self, x1: f32, y1: f32, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x2: f32, y2: f32) {
        self.begin_shape(ShapeKind::Polygon);
        self.vertex(x1, y1);
        self.bezier_vertex(cx1, cy1, cx2, cy2, x2, y2);
        self.end_shape(CloseMode::Open);
    }

    /// Catmull-Rom span from `(x2, y2)` to `(x3, y3)`; the outer points steer
    /// the tangents.
    #[allow(clippy::too_many_arguments)]
    pub fn curve(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32, x4: f32, y4: f32) {
        self.begin_shape(ShapeKind::Polygon);
        self.curve_vertex(x1, y1);
        self.curve_vertex(x2, y2);
        self.curve_vertex(x3, y3);
        self.curve_vertex(x4, y4);
        self.end_shape(CloseMode::Open);
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn begin_shape(&mut self, kind: ShapeKind) {
        self.builder.begin_shape(kind);
    }

    pub fn vertex(&mut self, x: f32, y: f32) {
        self.builder.vertex(x, y, self.fill, Some(self.stroke));
    }

    pub fn curve_vertex(&mut self, x: f32, y: f32) {
        self.builder.curve_vertex(x, y);
    }

    pub fn bezier_vertex(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.builder.bezier_vertex(c1x, c1y, c2x, c2y, x, y);
    }

    pub fn quadratic_vertex(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.builder.quadratic_vertex(cx, cy, x, y);
    }

    pub fn begin_contour(&mut self) {
        self.builder.begin_contour();
    }

    pub fn end_contour(&mut self) {
        self.builder.end_contour();
    }

    pub fn end_shape(&mut self, mode: CloseMode) {
        self.builder.end_shape(mode, &self.state, &mut self.sink);
    }

    // ── transforms ────────────────────────────────────────────────────────

    pub fn translate(&mut self, x: f32, y: f32) {
        self.sink.transform(Transform::translation(x, y));
    }

    pub fn rotate(&mut self, radians: f32) {
        self.sink.transform(Transform::rotation(radians));
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.sink.transform(Transform::scaling(x, y));
    }

    pub fn shear_x(&mut self, radians: f32) {
        self.sink.transform(Transform::shear_x(radians));
    }

    pub fn shear_y(&mut self, radians: f32) {
        self.sink.transform(Transform::shear_y(radians));
    }

    pub fn apply_matrix(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.sink.transform(Transform::new(a, b, c, d, e, f));
    }

    pub fn reset_matrix(&mut self) {
        self.sink.set_transform(Transform::identity());
    }

    /// Saves the sink state and the facade's drawing state.
    pub fn push(&mut self) {
        self.sink.save();
        self.stack.push(Saved {
            state: self.state,
            fill: self.fill,
            stroke: self.stroke,
            text: self.text.clone(),
            tint: self.tint,
        });
    }

    pub fn pop(&mut self) {
        let Some(saved) = self.stack.pop() else {
            log::warn!("pop without matching push");
            return;
        };
        self.sink.restore();
        self.state = saved.state;
        self.fill = saved.fill;
        self.stroke = saved.stroke;
        self.tint = saved.tint;
        self.text = saved.text;
        self.sink.set_text_style(&self.text);
    }

    // ── text ──────────────────────────────────────────────────────────────

    pub fn text_align(&mut self, align: TextAlign) {
        self.text.align = align;
        self.sink.set_text_style(&self.text);
    }

    /// Sets the size and resets the leading to the matching default.
    pub fn text_size(&mut self, size: f32) {
        self.text.size = size;
        self.text.leading = size * LEADING_RATIO;
        self.sink.set_text_style(&self.text);
    }

    pub fn text_leading(&mut self, leading: f32) {
        self.text.leading = leading;
        self.sink.set_text_style(&self.text);
    }

    pub fn text_font(&mut self, font: FontId) {
        self.text.font = Some(font);
        self.sink.set_text_style(&self.text);
    }

    #[inline]
    pub fn text_style(&self) -> &TextStyle {
        &self.text
    }

    /// Width of the widest line of `text`.
    pub fn text_width(&self, text: &str) -> f32 {
        text.replace('\t', "  ")
            .split('\n')
            .map(|line| self.sink.measure_text(line))
            .fold(0.0, f32::max)
    }

    /// Draws `text` with its first baseline at `y`, or wrapped inside `bounds`
    /// whose top-left corner is `(x, y)`.
    pub fn text(&mut self, text: &str, x: f32, y: f32, bounds: Option<TextBox>) {
        if !self.state.fill_enabled && !self.state.stroke_enabled {
            return;
        }
        let sink = &self.sink;
        let lines = wrap_text(text, y, bounds, self.text.leading, |s| sink.measure_text(s));

        let anchor = match bounds {
            Some(b) => x - self.text.align.offset(b.max_width),
            None => x,
        };
        for line in lines {
            let lx = anchor + self.text.align.offset(self.sink.measure_text(&line.text));
            if self.state.fill_enabled {
                self.sink.fill_text(&line.text, lx, line.y);
            }
            if self.state.stroke_enabled {
                self.sink.stroke_text(&line.text, lx, line.y);
            }
        }
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Draws `image` at its natural size.
    pub fn image(&mut self, image: &Image, x: f32, y: f32) {
        self.image_sized(image, x, y, image.width() as f32, image.height() as f32);
    }

    /// Draws `image` scaled into `w × h`, tinted if a tint is set.
    pub fn image_sized(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32) {
        match self.tint {
            Some(tint) => {
                let tinted = image.tinted(tint);
                self.sink.draw_image(&tinted, x, y, w, h);
            }
            None => self.sink.draw_image(image, x, y, w, h),
        }
    }

    pub fn tint(&mut self, color: Color) {
        self.tint = Some(color);
    }

    pub fn no_tint(&mut self) {
        self.tint = None;
    }
}

impl Graphics<Canvas> {
    /// Allocates a raster canvas of the configured size.
    pub fn with_canvas(config: &GraphicsConfig) -> Result<Self> {
        let canvas = Canvas::new(config.width, config.height)?;
        Ok(Self::new(canvas, config))
    }

    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.sink.load_font(bytes)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> [u8; 4] {
        self.sink.get_pixel(x, y)
    }

    pub fn get_region(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Image> {
        self.sink.get_region(x, y, w, h)
    }

    pub fn get_image(&self) -> Image {
        self.sink.get_image()
    }

    pub fn load_pixels(&mut self) {
        self.sink.load_pixels();
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        self.sink.pixels()
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        self.sink.pixels_mut()
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, value: PixelValue<'_>) {
        self.sink.set_pixel(x, y, value);
    }

    pub fn update_pixels(&mut self, region: Option<PixelRegion>) {
        self.sink.update_pixels(region);
    }

    pub fn copy(&mut self, src: Option<&Image>, from: Rect, to: Rect) {
        self.sink.copy(src, from, to);
    }

    pub fn blend(&mut self, src: Option<&Image>, from: Rect, to: Rect, mode: BlendMode) {
        self.sink.blend(src, from, to, mode);
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.sink.save_png(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CmdList, PathCmd};

    fn recorder() -> Graphics<CmdList> {
        let mut g = Graphics::new(CmdList::new(), &GraphicsConfig::default());
        g.sink_mut().clear();
        g
    }

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0, 255)
    }

    // ── setup ─────────────────────────────────────────────────────────────

    #[test]
    fn config_is_applied_to_sink() {
        let config = GraphicsConfig { stroke_weight: 0.0, background: Some(red()), ..GraphicsConfig::default() };
        let g = Graphics::new(CmdList::new(), &config);
        let cmds = g.sink().cmds();
        assert_eq!(cmds[0], PathCmd::SetFillPaint(Paint::Solid(Color::WHITE)));
        assert_eq!(cmds[1], PathCmd::SetStrokePaint(Paint::Solid(Color::BLACK)));
        assert!(matches!(cmds[2], PathCmd::SetStrokeStyle(s) if s.weight == crate::render::HAIRLINE_EPSILON));
        assert!(cmds.contains(&PathCmd::FillRect(Rect::new(0.0, 0.0, 100.0, 100.0))));
        // Background restores the configured fill.
        assert_eq!(g.sink().fill_paint(), &Paint::Solid(Color::WHITE));
    }

    // ── colour ────────────────────────────────────────────────────────────

    #[test]
    fn no_fill_then_fill_reenables() {
        let mut g = recorder();
        g.no_fill();
        assert!(!g.state().fill_enabled);
        g.fill(red());
        assert!(g.state().fill_enabled);
        assert_eq!(g.sink().fill_paint(), &Paint::Solid(red()));
    }

    #[test]
    fn rect_with_nothing_enabled_paints_nothing() {
        let mut g = recorder();
        g.no_fill();
        g.no_stroke();
        g.rect(0.0, 0.0, 5.0, 5.0);
        assert!(!g.sink().cmds().iter().any(|c| matches!(c, PathCmd::Fill | PathCmd::Stroke)));
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn vertices_capture_current_colors() {
        let mut g = recorder();
        g.fill(red());
        g.begin_shape(ShapeKind::Triangles);
        g.vertex(0.0, 0.0);
        g.vertex(10.0, 0.0);
        g.vertex(0.0, 10.0);
        g.end_shape(CloseMode::Open);
        let fills: Vec<_> = g
            .sink()
            .cmds()
            .iter()
            .filter(|c| matches!(c, PathCmd::SetFillPaint(_)))
            .collect();
        assert_eq!(fills.last(), Some(&&PathCmd::SetFillPaint(Paint::Solid(red()))));
    }

    #[test]
    fn gradient_fill_survives_per_face_shapes() {
        let mut g = recorder();
        let gradient = LinearGradient::between(Vec2::zero(), Vec2::new(10.0, 0.0), red(), Color::WHITE);
        g.fill_gradient(gradient.clone());
        g.begin_shape(ShapeKind::Triangles);
        g.vertex(0.0, 0.0);
        g.vertex(10.0, 0.0);
        g.vertex(0.0, 10.0);
        g.end_shape(CloseMode::Open);
        assert_eq!(g.sink().fill_paint(), &Paint::LinearGradient(gradient));

        g.fill(red());
        g.begin_shape(ShapeKind::Triangles);
        g.vertex(0.0, 0.0);
        g.vertex(10.0, 0.0);
        g.vertex(0.0, 10.0);
        g.end_shape(CloseMode::Open);
        assert_eq!(g.sink().fill_paint(), &Paint::Solid(red()));
    }

    #[test]
    fn bezier_is_one_cubic_segment() {
        let mut g = recorder();
        g.no_fill();
        g.bezier(0.0, 0.0, 1.0, 1.0, 2.0, 1.0, 3.0, 0.0);
        let paths = g.sink().paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].points, vec![Vec2::zero(), Vec2::new(3.0, 0.0)]);
        assert_eq!(paths[0].strokes, 1);
    }

    #[test]
    fn curve_draws_middle_span() {
        let mut g = recorder();
        g.curve(0.0, 0.0, 10.0, 0.0, 20.0, 0.0, 30.0, 0.0);
        let paths = g.sink().paths();
        assert_eq!(paths[0].points, vec![Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)]);
    }

    #[test]
    fn curve_tightness_reaches_dispatcher() {
        let mut g = recorder();
        g.curve_tightness(1.0);
        g.curve(0.0, 0.0, 10.0, 0.0, 20.0, 0.0, 30.0, 0.0);
        let cubic = g.sink().cmds().iter().find(|c| matches!(c, PathCmd::BezierCurveTo { .. })).cloned();
        assert_eq!(
            cubic,
            Some(PathCmd::BezierCurveTo {
                ctrl1: Vec2::new(10.0, 0.0),
                ctrl2: Vec2::new(20.0, 0.0),
                to: Vec2::new(20.0, 0.0),
            })
        );
    }

    // ── state stack ───────────────────────────────────────────────────────

    #[test]
    fn pop_restores_draw_state_and_colors() {
        let mut g = recorder();
        g.push();
        g.no_stroke();
        g.rect_mode(ShapeMode::Center);
        g.fill(red());
        g.translate(5.0, 5.0);
        g.pop();
        assert!(g.state().stroke_enabled);
        assert_eq!(g.state().rect_mode, ShapeMode::Corner);
        assert_eq!(g.sink().fill_paint(), &Paint::Solid(Color::WHITE));
        let cmds = g.sink().cmds();
        assert_eq!(cmds[0], PathCmd::Save);
        assert!(cmds.contains(&PathCmd::Restore));
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut g = recorder();
        g.pop();
        assert!(g.sink().is_empty());
    }

    #[test]
    fn stroke_attributes_compose() {
        let mut g = recorder();
        g.stroke_weight(4.0);
        g.stroke_cap(StrokeCap::Project);
        g.stroke_join(StrokeJoin::Bevel);
        let style = g.sink().stroke_style();
        assert_eq!((style.weight, style.cap, style.join), (4.0, StrokeCap::Project, StrokeJoin::Bevel));
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_size_resets_leading() {
        let mut g = recorder();
        g.text_size(20.0);
        assert_eq!(g.text_style().leading, 25.0);
        g.text_leading(30.0);
        assert_eq!(g.text_style().leading, 30.0);
    }

    #[test]
    fn text_fills_then_strokes_each_line() {
        let mut g = recorder();
        g.text("ab\ncd", 5.0, 10.0, None);
        let drawn: Vec<_> = g
            .sink()
            .cmds()
            .iter()
            .filter(|c| matches!(c, PathCmd::FillText { .. } | PathCmd::StrokeText { .. }))
            .cloned()
            .collect();
        assert_eq!(
            drawn,
            vec![
                PathCmd::FillText { text: "ab".into(), at: Vec2::new(5.0, 10.0) },
                PathCmd::StrokeText { text: "ab".into(), at: Vec2::new(5.0, 10.0) },
                PathCmd::FillText { text: "cd".into(), at: Vec2::new(5.0, 25.0) },
                PathCmd::StrokeText { text: "cd".into(), at: Vec2::new(5.0, 25.0) },
            ]
        );
    }

    #[test]
    fn boxed_text_wraps_at_width() {
        let mut g = recorder();
        g.no_stroke();
        // Recorder measures 6 px per character at size 12.
        g.text("aaa bbb", 0.0, 0.0, Some(TextBox { max_width: 30.0, max_height: None }));
        let lines: Vec<_> = g
            .sink()
            .cmds()
            .iter()
            .filter_map(|c| match c {
                PathCmd::FillText { text, at } => Some((text.clone(), at.y)),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![("aaa".to_string(), 15.0), ("bbb".to_string(), 30.0)]);
    }

    #[test]
    fn right_aligned_text_ends_at_x() {
        let mut g = recorder();
        g.no_stroke();
        g.text_align(TextAlign::Right);
        g.text("abcd", 100.0, 10.0, None);
        let at = g.sink().cmds().iter().find_map(|c| match c {
            PathCmd::FillText { at, .. } => Some(*at),
            _ => None,
        });
        assert_eq!(at, Some(Vec2::new(76.0, 10.0)));
        assert_eq!(g.text_width("ab\nabcd"), 24.0);
    }

    // ── raster ────────────────────────────────────────────────────────────

    #[test]
    fn canvas_background_and_pixels() {
        let config = GraphicsConfig { width: 8, height: 8, background: Some(red()), ..GraphicsConfig::default() };
        let mut g = Graphics::with_canvas(&config).unwrap();
        assert_eq!(g.get_pixel(4, 4), [255, 0, 0, 255]);
        g.set_pixel(1, 1, PixelValue::Gray(0));
        g.update_pixels(None);
        assert_eq!(g.get_pixel(1, 1), [0, 0, 0, 255]);
        g.clear();
        assert_eq!(g.get_pixel(4, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn tinted_image_is_multiplied() {
        let config = GraphicsConfig { width: 4, height: 4, ..GraphicsConfig::default() };
        let mut g = Graphics::with_canvas(&config).unwrap();
        let img = Image::from_rgba(1, 1, &[200, 200, 200, 255]).unwrap();
        g.tint(Color::from_srgb_u8(255, 0, 0, 255));
        g.image(&img, 0.0, 0.0);
        assert_eq!(g.get_pixel(0, 0), [200, 0, 0, 255]);
    }
}
