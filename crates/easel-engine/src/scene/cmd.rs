use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{BlendMode, Paint};
use crate::render::StrokeStyle;
use crate::text::TextStyle;

/// One recorded [`PathSink`](crate::render::PathSink) call.
///
/// Extending the sink:
/// - add the method to `PathSink`
/// - add a variant here
/// - record it in `CmdList` and implement it in `Canvas`
#[derive(Debug, Clone, PartialEq)]
pub enum PathCmd {
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    BezierCurveTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    QuadraticCurveTo { ctrl: Vec2, to: Vec2 },
    Rect(Rect),
    Arc { center: Vec2, radius: f32, start: f32, end: f32, anticlockwise: bool },
    ClosePath,
    Fill,
    Stroke,
    SetFillPaint(Paint),
    SetStrokePaint(Paint),
    SetStrokeStyle(StrokeStyle),
    SetBlendMode(BlendMode),
    DrawPoint(Vec2),
    DrawLine(Vec2, Vec2),
    FillRect(Rect),
    ClearRect(Rect),
    Save,
    Restore,
    Transform(Transform),
    SetTransform(Transform),
    SetImageSmoothing(bool),
    /// Image payloads are not retained; only their pixel size is.
    DrawImage { width: u32, height: u32, dest: Rect },
    SetTextStyle(TextStyle),
    FillText { text: String, at: Vec2 },
    StrokeText { text: String, at: Vec2 },
}
