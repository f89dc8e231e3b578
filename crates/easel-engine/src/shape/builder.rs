use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{DrawState, PathSink};

use super::{close, CloseMode, OnCurve, ShapeDescriptor, ShapeKind, Vertex, VertexBuffer};

/// Records vertices between `begin_shape` and `end_shape`.
///
/// The builder owns the in-progress buffer and descriptor flags. Closing a
/// shape moves the buffer into [`close`]; nothing carries over to the next
/// shape.
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    vertices: VertexBuffer,
    descriptor: ShapeDescriptor,
    open: bool,
    /// Buffer index of the first vertex of the open contour.
    contour_start: Option<usize>,
    contour_pending: bool,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between `begin_shape` and `end_shape`.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    #[inline]
    pub fn descriptor(&self) -> &ShapeDescriptor {
        &self.descriptor
    }

    pub fn begin_shape(&mut self, kind: ShapeKind) {
        if self.open {
            log::warn!(
                "begin_shape({}) while a {} shape is open; discarding {} vertices",
                kind.tag(),
                self.descriptor.kind.tag(),
                self.vertices.len()
            );
        }
        self.reset();
        self.descriptor.kind = kind;
        self.open = true;
    }

    /// Appends an on-curve vertex.
    ///
    /// `fill` and `stroke` are the current paint colours; they are kept as
    /// per-face overrides only for kinds that colour each face separately.
    /// `None` leaves that paint to the sink, as for a gradient fill.
    pub fn vertex(&mut self, x: f32, y: f32, fill: Option<Color>, stroke: Option<Color>) {
        let mut v = OnCurve::new(Vec2::new(x, y));
        if self.descriptor.kind.has_face_colors() {
            v = v.with_colors(fill, stroke);
        }
        if self.contour_pending {
            v = v.starting_subpath();
            self.contour_start = Some(self.vertices.len());
            self.contour_pending = false;
        }
        self.push(v);
    }

    /// Appends a Catmull-Rom vertex and switches the shape to curve mode.
    pub fn curve_vertex(&mut self, x: f32, y: f32) {
        self.descriptor.is_curve = true;
        self.push(OnCurve::new(Vec2::new(x, y)));
    }

    pub fn bezier_vertex(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.descriptor.is_bezier = true;
        self.push(Vertex::Cubic {
            ctrl1: Vec2::new(c1x, c1y),
            ctrl2: Vec2::new(c2x, c2y),
            to: Vec2::new(x, y),
        });
    }

    pub fn quadratic_vertex(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.descriptor.is_quadratic = true;
        self.push(Vertex::Quadratic { ctrl: Vec2::new(cx, cy), to: Vec2::new(x, y) });
    }

    /// Starts a new contour; its first vertex begins a new subpath.
    pub fn begin_contour(&mut self) {
        self.contour_pending = true;
        self.contour_start = None;
    }

    /// Closes the open contour by repeating its first vertex.
    pub fn end_contour(&mut self) {
        self.contour_pending = false;
        let Some(start) = self.contour_start.take() else {
            return;
        };
        if let Some(first) = self.vertices.get(start) {
            let copy = on_curve_copy(first);
            self.vertices.push(copy);
            self.descriptor.is_contour = true;
        }
    }

    /// Completes the shape and emits it into `sink`.
    pub fn end_shape<S: PathSink + ?Sized>(&mut self, mode: CloseMode, state: &DrawState, sink: &mut S) {
        if !self.open {
            log::debug!("end_shape without begin_shape; ignoring");
            return;
        }
        if self.vertices.is_empty() || (!state.fill_enabled && !state.stroke_enabled) {
            self.reset();
            return;
        }

        self.descriptor.close_mode = mode;
        if mode == CloseMode::Close && !self.descriptor.is_contour {
            let first = on_curve_copy(&self.vertices[0]);
            self.vertices.push(first);
        }

        let vertices = self.vertices.take();
        let descriptor = self.descriptor;
        self.reset();
        close(vertices, &descriptor, state, sink);
    }

    fn push(&mut self, v: impl Into<Vertex>) {
        if !self.open {
            log::debug!("vertex outside begin_shape/end_shape; ignoring");
            return;
        }
        self.vertices.push(v);
    }

    fn reset(&mut self) {
        self.vertices = VertexBuffer::new();
        self.descriptor = ShapeDescriptor::default();
        self.open = false;
        self.contour_start = None;
        self.contour_pending = false;
    }
}

/// On-curve copy of `v` with the subpath flag cleared.
fn on_curve_copy(v: &Vertex) -> OnCurve {
    match *v {
        Vertex::OnCurve(p) => OnCurve { move_to: false, ..p },
        _ => OnCurve::new(v.end_point()),
    }
}
