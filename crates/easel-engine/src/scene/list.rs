use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{BlendMode, Color, Paint};
use crate::render::{Image, PathSink, StrokeStyle};
use crate::text::TextStyle;

use super::PathCmd;

/// Fraction of the text size used as the advance of every character.
const FIXED_ADVANCE: f32 = 0.5;

/// Paint state that `save` / `restore` push and pop.
#[derive(Debug, Clone, PartialEq)]
struct PaintState {
    fill: Paint,
    stroke: Paint,
    stroke_style: StrokeStyle,
}

/// Recording path/paint sink.
///
/// Every [`PathSink`] call is appended to an ordered command stream. The
/// list tracks just enough state (paints, stroke style, text style) to answer
/// the sink's queries, which makes it usable as a test double and as a
/// display list that can later be replayed with [`CmdList::replay`].
///
/// Text measurement is fixed-advance: each character is half the text size
/// wide.
#[derive(Debug, Clone)]
pub struct CmdList {
    cmds: Vec<PathCmd>,
    state: PaintState,
    stack: Vec<PaintState>,
    text_style: TextStyle,
}

impl Default for CmdList {
    fn default() -> Self {
        Self {
            cmds: Vec::new(),
            state: PaintState {
                fill: Paint::Solid(Color::WHITE),
                stroke: Paint::Solid(Color::BLACK),
                stroke_style: StrokeStyle::default(),
            },
            stack: Vec::new(),
            text_style: TextStyle::default(),
        }
    }
}

/// Geometry and paint calls recorded between two `BeginPath` commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordedPath {
    /// End points of every segment in order, starting with move-to targets.
    pub points: Vec<Vec2>,
    /// Number of `MoveTo` commands (subpaths started explicitly).
    pub subpaths: usize,
    pub fills: usize,
    pub strokes: usize,
    pub closed: bool,
}

impl CmdList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Paint state is kept; capacity is reused.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Returns commands in recording order.
    #[inline]
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Splits the stream into paths, one per `BeginPath`.
    ///
    /// Commands before the first `BeginPath` and non-path commands are
    /// ignored, except `Fill` / `Stroke` / `ClosePath`, which are counted on
    /// the path they apply to.
    pub fn paths(&self) -> Vec<RecordedPath> {
        let mut out: Vec<RecordedPath> = Vec::new();
        for cmd in &self.cmds {
            if let PathCmd::BeginPath = cmd {
                out.push(RecordedPath::default());
                continue;
            }
            let Some(path) = out.last_mut() else { continue };
            match cmd {
                PathCmd::MoveTo(p) => {
                    path.subpaths += 1;
                    path.points.push(*p);
                }
                PathCmd::LineTo(p) => path.points.push(*p),
                PathCmd::BezierCurveTo { to, .. } | PathCmd::QuadraticCurveTo { to, .. } => {
                    path.points.push(*to)
                }
                PathCmd::ClosePath => path.closed = true,
                PathCmd::Fill => path.fills += 1,
                PathCmd::Stroke => path.strokes += 1,
                _ => {}
            }
        }
        out
    }

    /// Re-issues every recorded command against another sink.
    ///
    /// `DrawImage` commands are skipped because image pixels are not retained.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for cmd in &self.cmds {
            match cmd {
                PathCmd::BeginPath => sink.begin_path(),
                PathCmd::MoveTo(p) => sink.move_to(p.x, p.y),
                PathCmd::LineTo(p) => sink.line_to(p.x, p.y),
                PathCmd::BezierCurveTo { ctrl1, ctrl2, to } => {
                    sink.bezier_curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
                }
                PathCmd::QuadraticCurveTo { ctrl, to } => {
                    sink.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y)
                }
                PathCmd::Rect(r) => sink.rect(r.origin.x, r.origin.y, r.size.x, r.size.y),
                PathCmd::Arc { center, radius, start, end, anticlockwise } => {
                    sink.arc(center.x, center.y, *radius, *start, *end, *anticlockwise)
                }
                PathCmd::ClosePath => sink.close_path(),
                PathCmd::Fill => sink.fill(),
                PathCmd::Stroke => sink.stroke(),
                PathCmd::SetFillPaint(p) => sink.set_fill_paint(p.clone()),
                PathCmd::SetStrokePaint(p) => sink.set_stroke_paint(p.clone()),
                PathCmd::SetStrokeStyle(s) => sink.set_stroke_style(*s),
                PathCmd::SetBlendMode(m) => sink.set_blend_mode(*m),
                PathCmd::DrawPoint(p) => sink.draw_point(p.x, p.y),
                PathCmd::DrawLine(a, b) => sink.draw_line(a.x, a.y, b.x, b.y),
                PathCmd::FillRect(r) => sink.fill_rect(r.origin.x, r.origin.y, r.size.x, r.size.y),
                PathCmd::ClearRect(r) => sink.clear_rect(r.origin.x, r.origin.y, r.size.x, r.size.y),
                PathCmd::Save => sink.save(),
                PathCmd::Restore => sink.restore(),
                PathCmd::Transform(t) => sink.transform(*t),
                PathCmd::SetTransform(t) => sink.set_transform(*t),
                PathCmd::SetImageSmoothing(on) => sink.set_image_smoothing(*on),
                PathCmd::DrawImage { .. } => {
                    log::debug!("replay: skipping DrawImage (pixels not recorded)");
                }
                PathCmd::SetTextStyle(s) => sink.set_text_style(s),
                PathCmd::FillText { text, at } => sink.fill_text(text, at.x, at.y),
                PathCmd::StrokeText { text, at } => sink.stroke_text(text, at.x, at.y),
            }
        }
    }

    #[inline]
    fn push(&mut self, cmd: PathCmd) {
        self.cmds.push(cmd);
    }
}

impl PathSink for CmdList {
    fn begin_path(&mut self) {
        self.push(PathCmd::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathCmd::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathCmd::LineTo(Vec2::new(x, y)));
    }

    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.push(PathCmd::BezierCurveTo {
            ctrl1: Vec2::new(c1x, c1y),
            ctrl2: Vec2::new(c2x, c2y),
            to: Vec2::new(x, y),
        });
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.push(PathCmd::QuadraticCurveTo { ctrl: Vec2::new(cx, cy), to: Vec2::new(x, y) });
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(PathCmd::Rect(Rect::new(x, y, w, h)));
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32, anticlockwise: bool) {
        self.push(PathCmd::Arc { center: Vec2::new(cx, cy), radius, start, end, anticlockwise });
    }

    fn close_path(&mut self) {
        self.push(PathCmd::ClosePath);
    }

    fn fill(&mut self) {
        self.push(PathCmd::Fill);
    }

    fn stroke(&mut self) {
        self.push(PathCmd::Stroke);
    }

    fn fill_paint(&self) -> &Paint {
        &self.state.fill
    }

    fn set_fill_paint(&mut self, paint: Paint) {
        self.state.fill = paint.clone();
        self.push(PathCmd::SetFillPaint(paint));
    }

    fn stroke_paint(&self) -> &Paint {
        &self.state.stroke
    }

    fn set_stroke_paint(&mut self, paint: Paint) {
        self.state.stroke = paint.clone();
        self.push(PathCmd::SetStrokePaint(paint));
    }

    fn stroke_style(&self) -> StrokeStyle {
        self.state.stroke_style
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.state.stroke_style = style;
        self.push(PathCmd::SetStrokeStyle(style));
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.push(PathCmd::SetBlendMode(mode));
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        self.push(PathCmd::DrawPoint(Vec2::new(x, y)));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(PathCmd::DrawLine(Vec2::new(x1, y1), Vec2::new(x2, y2)));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(PathCmd::FillRect(Rect::new(x, y, w, h)));
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(PathCmd::ClearRect(Rect::new(x, y, w, h)));
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.push(PathCmd::Save);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.push(PathCmd::Restore);
    }

    fn transform(&mut self, t: Transform) {
        self.push(PathCmd::Transform(t));
    }

    fn set_transform(&mut self, t: Transform) {
        self.push(PathCmd::SetTransform(t));
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.push(PathCmd::SetImageSmoothing(enabled));
    }

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32) {
        self.push(PathCmd::DrawImage {
            width: image.width(),
            height: image.height(),
            dest: Rect::new(x, y, w, h),
        });
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        self.text_style = style.clone();
        self.push(PathCmd::SetTextStyle(style.clone()));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.push(PathCmd::FillText { text: text.to_string(), at: Vec2::new(x, y) });
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.push(PathCmd::StrokeText { text: text.to_string(), at: Vec2::new(x, y) });
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.text_style.size * FIXED_ADVANCE
    }
}
