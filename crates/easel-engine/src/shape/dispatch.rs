//! Interprets a closed vertex buffer as draw calls.

use crate::coords::Vec2;
use crate::paint::Paint;
use crate::render::{primitives, DrawState, PathSink};

use super::{catmull_rom_to_bezier, CloseMode, ShapeDescriptor, ShapeKind, ShapePlan, Vertex, VertexBuffer};

/// Emits the path, fill and stroke calls for one completed shape.
///
/// The buffer is consumed. Degenerate input (too few vertices for the kind,
/// trailing partial groups) is skipped silently. The sink's fill and stroke
/// paints may be left set to the last per-face override.
pub fn close<S: PathSink + ?Sized>(
    vertices: VertexBuffer,
    descriptor: &ShapeDescriptor,
    state: &DrawState,
    sink: &mut S,
) {
    let plan = descriptor.plan();
    let v = vertices.as_slice();
    log::debug!("closing shape: {:?}, {} vertices, {:?}", plan, v.len(), descriptor.close_mode);

    match plan {
        ShapePlan::Curve => curve(v, descriptor.close_mode, state, sink),
        ShapePlan::Bezier | ShapePlan::Quadratic => segments(v, state, sink),
        ShapePlan::Discrete(kind) => match kind {
            ShapeKind::Points => points(v, state, sink),
            ShapeKind::Lines => lines(v, state, sink),
            ShapeKind::Triangles => triangles(v, state, sink),
            ShapeKind::TriangleStrip => triangle_strip(v, state, sink),
            ShapeKind::TriangleFan => triangle_fan(v, state, sink),
            ShapeKind::Quads => quads(v, state, sink),
            ShapeKind::QuadStrip => quad_strip(v, state, sink),
            ShapeKind::Polygon => polygon(v, state, sink),
        },
    }
}

// ── helpers ───────────────────────────────────────────────────────────────

#[inline]
fn pos(v: &[Vertex], i: usize) -> Vec2 {
    v[i].end_point()
}

fn apply_fill_override<S: PathSink + ?Sized>(sink: &mut S, vertex: &Vertex) {
    if let Some(color) = vertex.fill_override() {
        sink.set_fill_paint(Paint::from(color));
    }
}

fn apply_stroke_override<S: PathSink + ?Sized>(sink: &mut S, vertex: &Vertex) {
    if let Some(color) = vertex.stroke_override() {
        sink.set_stroke_paint(Paint::from(color));
    }
}

/// Applies `vertex`'s face colours for whichever paints are enabled.
fn apply_overrides<S: PathSink + ?Sized>(sink: &mut S, state: &DrawState, vertex: &Vertex) {
    if state.fill_enabled {
        apply_fill_override(sink, vertex);
    }
    if state.stroke_enabled {
        apply_stroke_override(sink, vertex);
    }
}

/// Begins a path through `indices` (move to the first, line to the rest).
fn trace<S: PathSink + ?Sized>(sink: &mut S, v: &[Vertex], indices: &[usize]) {
    sink.begin_path();
    let mut it = indices.iter().map(|&i| pos(v, i));
    if let Some(first) = it.next() {
        sink.move_to(first.x, first.y);
    }
    for p in it {
        sink.line_to(p.x, p.y);
    }
}

// ── curved polygons ───────────────────────────────────────────────────────

/// Catmull-Rom spline: the first and last vertices only steer tangents.
fn curve<S: PathSink + ?Sized>(v: &[Vertex], close: CloseMode, state: &DrawState, sink: &mut S) {
    let n = v.len();
    if n <= 3 {
        log::trace!("curve: {} vertices, need at least 4", n);
        return;
    }
    log::trace!("curve: {} cubic spans, {:?}", n - 3, close);
    sink.begin_path();
    let start = pos(v, 1);
    sink.move_to(start.x, start.y);

    let mut i = 1;
    while i + 2 < n {
        let [_, b1, b2, b3] = catmull_rom_to_bezier(
            pos(v, i - 1),
            pos(v, i),
            pos(v, i + 1),
            pos(v, i + 2),
            state.curve_tightness,
        );
        sink.bezier_curve_to(b1.x, b1.y, b2.x, b2.y, b3.x, b3.y);
        i += 1;
    }
    if close == CloseMode::Close {
        let last = pos(v, i + 1);
        sink.line_to(last.x, last.y);
    }
    primitives::fill_stroke_close(sink, state);
}

/// Polygon made of on-curve vertices and cubic or quadratic records.
fn segments<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    log::trace!("segments: {} records", v.len());
    sink.begin_path();
    for vertex in v {
        match *vertex {
            Vertex::OnCurve(p) if p.move_to => sink.move_to(p.pos.x, p.pos.y),
            Vertex::OnCurve(p) => sink.line_to(p.pos.x, p.pos.y),
            Vertex::Cubic { ctrl1, ctrl2, to } => {
                sink.bezier_curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
            }
            Vertex::Quadratic { ctrl, to } => sink.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
        }
    }
    primitives::fill_stroke_close(sink, state);
}

// ── discrete kinds ────────────────────────────────────────────────────────

fn points<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    log::trace!("points: {}", v.len());
    for vertex in v {
        if state.stroke_enabled {
            apply_stroke_override(sink, vertex);
        }
        let p = vertex.end_point();
        primitives::point(sink, state, p.x, p.y);
    }
}

fn lines<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    log::trace!("lines: {} segments", v.len() / 2);
    let mut i = 0;
    while i + 1 < v.len() {
        if state.stroke_enabled {
            apply_stroke_override(sink, &v[i + 1]);
        }
        primitives::line(sink, state, pos(v, i), pos(v, i + 1));
        i += 2;
    }
}

fn triangles<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    log::trace!("triangles: {} faces", v.len() / 3);
    let mut i = 0;
    while i + 2 < v.len() {
        trace(sink, v, &[i, i + 1, i + 2, i]);
        if state.fill_enabled {
            apply_fill_override(sink, &v[i + 2]);
            sink.fill();
        }
        if state.stroke_enabled {
            apply_stroke_override(sink, &v[i + 2]);
            sink.stroke();
        }
        sink.close_path();
        i += 3;
    }
}

/// One triangle per step with alternating winding: `(i+1, i, i+2)`.
///
/// The final step has no third vertex and paints the closing edge alone.
fn triangle_strip<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    let n = v.len();
    log::trace!("triangle strip: {} vertices", n);
    let mut i = 0;
    while i + 1 < n {
        let colors_from = if i + 2 < n {
            trace(sink, v, &[i + 1, i, i + 2]);
            i + 2
        } else {
            trace(sink, v, &[i + 1, i]);
            i + 1
        };
        apply_overrides(sink, state, &v[colors_from]);
        primitives::fill_stroke_close(sink, state);
        i += 1;
    }
}

/// Triangles sharing vertex 0: `(0, i-1, i)` for every `i >= 2`.
fn triangle_fan<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    if v.len() <= 2 {
        log::trace!("triangle fan: {} vertices, need at least 3", v.len());
        return;
    }
    log::trace!("triangle fan: {} faces", v.len() - 2);
    for i in 2..v.len() {
        trace(sink, v, &[0, i - 1, i]);
        apply_overrides(sink, state, &v[i]);
        primitives::fill_stroke_close(sink, state);
    }
}

fn quads<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    log::trace!("quads: {} faces, {} trailing vertices dropped", v.len() / 4, v.len() % 4);
    let mut i = 0;
    while i + 3 < v.len() {
        trace(sink, v, &[i, i + 1, i + 2, i + 3, i]);
        apply_overrides(sink, state, &v[i + 3]);
        primitives::fill_stroke_close(sink, state);
        i += 4;
    }
}

/// Quads over consecutive vertex pairs.
///
/// Each quad is traced `i+2, i, i+1, i+3`: walking the two pairs in opposite
/// directions keeps the outline from crossing itself. A trailing pair with no
/// successor paints only its edge.
fn quad_strip<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    let n = v.len();
    if n <= 3 {
        log::trace!("quad strip: {} vertices, need at least 4", n);
        return;
    }
    log::trace!("quad strip: {} vertices", n);
    let mut i = 0;
    while i + 1 < n {
        if i + 3 < n {
            trace(sink, v, &[i + 2, i, i + 1, i + 3]);
            apply_overrides(sink, state, &v[i + 3]);
        } else {
            trace(sink, v, &[i, i + 1]);
        }
        primitives::fill_stroke_close(sink, state);
        i += 2;
    }
}

/// Simple polygon; flagged vertices start new contours inside one path.
fn polygon<S: PathSink + ?Sized>(v: &[Vertex], state: &DrawState, sink: &mut S) {
    let Some(first) = v.first() else {
        return;
    };
    log::trace!("polygon: {} vertices", v.len());
    sink.begin_path();
    let start = first.end_point();
    sink.move_to(start.x, start.y);
    for vertex in &v[1..] {
        if let Vertex::OnCurve(p) = vertex {
            if p.move_to {
                sink.move_to(p.pos.x, p.pos.y);
            } else {
                sink.line_to(p.pos.x, p.pos.y);
            }
        }
    }
    primitives::fill_stroke_close(sink, state);
}
