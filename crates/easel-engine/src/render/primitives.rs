//! Primitive draws shared by the shape dispatcher and the facade.
//!
//! Every helper reads enablement from [`DrawState`] and paints through a
//! [`PathSink`]. Fill is always issued before stroke so the stroke is never
//! covered by its own fill.

use core::f32::consts::TAU;

use crate::coords::{Rect, Transform, Vec2};

use super::{DrawState, PathSink};

/// Control-point offset ratio for approximating a quarter ellipse with one
/// cubic Bezier.
const KAPPA: f32 = 0.552_284_8;

/// How an arc is finished.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArcMode {
    /// Stroke the arc only; the fill closes along the chord.
    Open,
    /// Close along the chord and stroke it.
    Chord,
    /// Close through the centre and stroke both radii.
    Pie,
}

/// Fills (if enabled), strokes (if enabled), then closes the current path.
pub fn fill_stroke_close<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState) {
    if state.fill_enabled {
        sink.fill();
    }
    if state.stroke_enabled {
        sink.stroke();
    }
    sink.close_path();
}

/// Draws a point in the stroke paint, snapped to whole pixels. No-op without
/// a visible stroke.
pub fn point<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState, x: f32, y: f32) {
    if !state.stroke_enabled || sink.stroke_paint().is_transparent() {
        return;
    }
    sink.draw_point(x.round(), y.round());
}

/// Draws a line segment in the stroke paint. No-op without a visible stroke.
pub fn line<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState, a: Vec2, b: Vec2) {
    if !state.stroke_enabled || sink.stroke_paint().is_transparent() {
        return;
    }
    sink.draw_line(a.x, a.y, b.x, b.y);
}

/// True when the only enabled paint is transparent, so drawing is pointless.
fn nothing_visible<S: PathSink + ?Sized>(sink: &S, state: &DrawState) -> bool {
    match (state.fill_enabled, state.stroke_enabled) {
        (true, false) => sink.fill_paint().is_transparent(),
        (false, true) => sink.stroke_paint().is_transparent(),
        _ => false,
    }
}

fn fill_then_stroke<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState) {
    if state.fill_enabled {
        sink.fill();
    }
    if state.stroke_enabled {
        sink.stroke();
    }
}

/// Closed polygon through `points`, filled then stroked.
fn closed_polygon<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState, points: &[Vec2]) {
    if nothing_visible(sink, state) {
        return;
    }
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    sink.begin_path();
    sink.move_to(first.x, first.y);
    for p in rest {
        sink.line_to(p.x, p.y);
    }
    sink.close_path();
    fill_then_stroke(sink, state);
}

pub fn triangle<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState, a: Vec2, b: Vec2, c: Vec2) {
    closed_polygon(sink, state, &[a, b, c]);
}

pub fn quad<S: PathSink + ?Sized>(
    sink: &mut S,
    state: &DrawState,
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
) {
    closed_polygon(sink, state, &[a, b, c, d]);
}

/// Rectangle whose arguments are read through the current rect mode.
pub fn rect<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState, a: f32, b: f32, c: f32, d: f32) {
    if nothing_visible(sink, state) {
        return;
    }
    let r = Rect::from_mode(a, b, c, d, state.rect_mode);
    sink.begin_path();
    sink.rect(r.origin.x, r.origin.y, r.size.x, r.size.y);
    fill_then_stroke(sink, state);
}

/// Ellipse whose arguments are read through the current ellipse mode.
///
/// Equal width and height produce a true circular arc; otherwise four cubic
/// quarter-ellipses approximate the outline.
pub fn ellipse<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState, a: f32, b: f32, c: f32, d: f32) {
    let r = Rect::from_mode(a, b, c, d, state.ellipse_mode);
    let (x, y, w, h) = (r.origin.x, r.origin.y, r.size.x, r.size.y);
    sink.begin_path();
    if w == h {
        sink.arc(x + w / 2.0, y + w / 2.0, w / 2.0, 0.0, TAU, false);
    } else {
        let ox = (w / 2.0) * KAPPA;
        let oy = (h / 2.0) * KAPPA;
        let xe = x + w;
        let ye = y + h;
        let xm = x + w / 2.0;
        let ym = y + h / 2.0;
        sink.move_to(x, ym);
        sink.bezier_curve_to(x, ym - oy, xm - ox, y, xm, y);
        sink.bezier_curve_to(xm + ox, y, xe, ym - oy, xe, ym);
        sink.bezier_curve_to(xe, ym + oy, xm + ox, ye, xm, ye);
        sink.bezier_curve_to(xm - ox, ye, x, ym + oy, x, ym);
        sink.close_path();
    }
    fill_then_stroke(sink, state);
}

/// Elliptical arc from `start` to `stop` radians, read through the ellipse
/// mode.
///
/// Oblong arcs are drawn as a circular arc of the larger radius, scaled about
/// the centre. `mode = None` fills a pie but only strokes the curved edge.
#[allow(clippy::too_many_arguments)]
pub fn arc<S: PathSink + ?Sized>(
    sink: &mut S,
    state: &DrawState,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    start: f32,
    stop: f32,
    mode: Option<ArcMode>,
) {
    let r = Rect::from_mode(a, b, c, d, state.ellipse_mode).normalized();
    let center = r.center();
    let (w, h) = (r.size.x, r.size.y);
    let radius = w.max(h) / 2.0;
    let (sx, sy) = if h > w { (w / h, 1.0) } else { (1.0, if w > 0.0 { h / w } else { 1.0 }) };

    sink.save();
    sink.transform(Transform::translation(center.x, center.y).then(Transform::scaling(sx, sy)));
    sink.begin_path();
    sink.arc(0.0, 0.0, radius, start, stop, false);
    if state.stroke_enabled {
        sink.stroke();
    }
    match mode {
        Some(ArcMode::Open) | Some(ArcMode::Chord) => sink.close_path(),
        Some(ArcMode::Pie) | None => {
            sink.line_to(0.0, 0.0);
            sink.close_path();
        }
    }
    if state.fill_enabled {
        sink.fill();
    }
    if state.stroke_enabled && matches!(mode, Some(ArcMode::Chord) | Some(ArcMode::Pie)) {
        sink.stroke();
    }
    sink.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, Paint};
    use crate::scene::{CmdList, PathCmd};

    fn no_stroke() -> DrawState {
        DrawState { stroke_enabled: false, ..DrawState::default() }
    }

    // ── fill_stroke_close ─────────────────────────────────────────────────

    #[test]
    fn helper_orders_fill_stroke_close() {
        let mut sink = CmdList::new();
        fill_stroke_close(&mut sink, &DrawState::default());
        assert_eq!(sink.cmds(), &[PathCmd::Fill, PathCmd::Stroke, PathCmd::ClosePath]);
    }

    #[test]
    fn helper_respects_disabled_fill() {
        let mut sink = CmdList::new();
        let state = DrawState { fill_enabled: false, ..DrawState::default() };
        fill_stroke_close(&mut sink, &state);
        assert_eq!(sink.cmds(), &[PathCmd::Stroke, PathCmd::ClosePath]);
    }

    // ── point / line ──────────────────────────────────────────────────────

    #[test]
    fn point_needs_stroke() {
        let mut sink = CmdList::new();
        point(&mut sink, &no_stroke(), 1.0, 1.0);
        assert!(sink.is_empty());
        point(&mut sink, &DrawState::default(), 1.4, 0.6);
        assert_eq!(sink.cmds(), &[PathCmd::DrawPoint(Vec2::new(1.0, 1.0))]);
    }

    #[test]
    fn transparent_stroke_skips_line() {
        let mut sink = CmdList::new();
        sink.set_stroke_paint(Paint::Solid(Color::TRANSPARENT));
        sink.clear();
        line(&mut sink, &DrawState::default(), Vec2::zero(), Vec2::new(1.0, 1.0));
        assert!(sink.is_empty());
    }

    // ── triangle / quad / rect ────────────────────────────────────────────

    #[test]
    fn triangle_closes_before_painting() {
        let mut sink = CmdList::new();
        triangle(&mut sink, &DrawState::default(), Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        let tail = &sink.cmds()[sink.len() - 3..];
        assert_eq!(tail, &[PathCmd::ClosePath, PathCmd::Fill, PathCmd::Stroke]);
    }

    #[test]
    fn transparent_fill_only_skips_quad() {
        let mut sink = CmdList::new();
        sink.set_fill_paint(Paint::Solid(Color::TRANSPARENT));
        sink.clear();
        let p = Vec2::zero();
        quad(&mut sink, &no_stroke(), p, p, p, p);
        assert!(sink.is_empty());
    }

    #[test]
    fn rect_uses_rect_mode() {
        let mut sink = CmdList::new();
        let state = DrawState { rect_mode: crate::coords::ShapeMode::Center, ..DrawState::default() };
        rect(&mut sink, &state, 10.0, 10.0, 4.0, 2.0);
        assert_eq!(sink.cmds()[1], PathCmd::Rect(Rect::new(8.0, 9.0, 4.0, 2.0)));
    }

    // ── ellipse / arc ─────────────────────────────────────────────────────

    #[test]
    fn circle_is_a_single_arc() {
        let mut sink = CmdList::new();
        ellipse(&mut sink, &DrawState::default(), 50.0, 50.0, 20.0, 20.0);
        assert!(matches!(
            sink.cmds()[1],
            PathCmd::Arc { center, radius, .. } if center == Vec2::new(50.0, 50.0) && radius == 10.0
        ));
    }

    #[test]
    fn oblong_ellipse_uses_four_cubics() {
        let mut sink = CmdList::new();
        ellipse(&mut sink, &DrawState::default(), 50.0, 50.0, 40.0, 20.0);
        let cubics = sink.cmds().iter().filter(|c| matches!(c, PathCmd::BezierCurveTo { .. })).count();
        assert_eq!(cubics, 4);
        assert_eq!(sink.paths()[0].points.last(), Some(&Vec2::new(30.0, 50.0)));
    }

    #[test]
    fn pie_arc_strokes_twice_and_returns_to_centre() {
        let mut sink = CmdList::new();
        arc(&mut sink, &DrawState::default(), 0.0, 0.0, 10.0, 10.0, 0.0, 1.0, Some(ArcMode::Pie));
        let cmds = sink.cmds();
        assert!(cmds.contains(&PathCmd::LineTo(Vec2::zero())));
        assert_eq!(cmds.iter().filter(|c| **c == PathCmd::Stroke).count(), 2);
        assert_eq!(cmds.first(), Some(&PathCmd::Save));
        assert_eq!(cmds.last(), Some(&PathCmd::Restore));
    }

    #[test]
    fn open_arc_strokes_once() {
        let mut sink = CmdList::new();
        arc(&mut sink, &DrawState::default(), 0.0, 0.0, 10.0, 10.0, 0.0, 1.0, Some(ArcMode::Open));
        let strokes = sink.cmds().iter().filter(|c| **c == PathCmd::Stroke).count();
        assert_eq!(strokes, 1);
        assert!(!sink.cmds().contains(&PathCmd::LineTo(Vec2::zero())));
    }

    #[test]
    fn oblong_arc_is_scaled_about_centre() {
        let mut sink = CmdList::new();
        arc(&mut sink, &DrawState::default(), 20.0, 10.0, 40.0, 20.0, 0.0, 1.0, None);
        let expected = Transform::new(1.0, 0.0, 0.0, 0.5, 20.0, 10.0);
        assert_eq!(sink.cmds()[1], PathCmd::Transform(expected));
    }
}
