use crate::coords::Transform;
use crate::paint::{BlendMode, Paint};
use crate::text::TextStyle;

use super::{Image, StrokeStyle};

/// Drawing-context abstraction consumed by the shape core and the facade.
///
/// The vocabulary mirrors an HTML canvas 2D context: one current path built
/// by `begin_path` / `move_to` / `*_to` / `close_path`, painted by `fill` and
/// `stroke` with the current fill and stroke paints. Everything else is
/// immediate.
///
/// Implementations:
/// - [`crate::scene::CmdList`] records every call (test double, display list)
/// - [`super::Canvas`] rasterizes into an RGBA pixmap
pub trait PathSink {
    // ── path construction ─────────────────────────────────────────────────

    /// Discards the current path.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    /// Appends a closed axis-aligned rectangle subpath.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Appends a circular arc centred on `(cx, cy)`; angles in radians.
    ///
    /// If the path has a current point, a straight segment joins it to the
    /// arc start.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32, anticlockwise: bool);
    fn close_path(&mut self);

    // ── painting ──────────────────────────────────────────────────────────

    /// Fills the current path (non-zero winding) with the fill paint.
    fn fill(&mut self);
    /// Strokes the current path with the stroke paint and stroke style.
    fn stroke(&mut self);

    fn fill_paint(&self) -> &Paint;
    fn set_fill_paint(&mut self, paint: Paint);
    fn stroke_paint(&self) -> &Paint;
    fn set_stroke_paint(&mut self, paint: Paint);
    fn stroke_style(&self) -> StrokeStyle;
    fn set_stroke_style(&mut self, style: StrokeStyle);
    fn set_blend_mode(&mut self, mode: BlendMode);

    // ── immediate primitives ──────────────────────────────────────────────

    /// Paints a single point in the stroke paint, sized by the stroke weight.
    fn draw_point(&mut self, x: f32, y: f32);
    /// Strokes a single segment. Replaces the current path.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    /// Fills a rectangle with the fill paint without touching the current path.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Resets a rectangle to transparent black.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    // ── state ─────────────────────────────────────────────────────────────

    /// Pushes paints, stroke style, blend mode and transform.
    fn save(&mut self);
    /// Pops the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);
    /// Post-multiplies the current transform by `t`.
    fn transform(&mut self, t: Transform);
    fn set_transform(&mut self, t: Transform);
    fn set_image_smoothing(&mut self, enabled: bool);

    // ── images & text ─────────────────────────────────────────────────────

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32);
    fn set_text_style(&mut self, style: &TextStyle);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);
    /// Advance width of `text` under the current text style.
    fn measure_text(&self, text: &str) -> f32;
}
