use core::ops::Index;

use crate::coords::Vec2;
use crate::paint::Color;

/// A vertex that lies on the outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OnCurve {
    pub pos: Vec2,
    /// Starts a new subpath instead of connecting to the previous vertex.
    pub move_to: bool,
    /// Per-face fill override; `None` keeps the ambient fill.
    pub fill: Option<Color>,
    /// Per-face stroke override; `None` keeps the ambient stroke.
    pub stroke: Option<Color>,
}

impl OnCurve {
    #[inline]
    pub const fn new(pos: Vec2) -> Self {
        Self { pos, move_to: false, fill: None, stroke: None }
    }

    #[inline]
    pub fn with_colors(self, fill: Option<Color>, stroke: Option<Color>) -> Self {
        Self { fill, stroke, ..self }
    }

    #[inline]
    pub fn starting_subpath(self) -> Self {
        Self { move_to: true, ..self }
    }
}

/// One slot of a vertex buffer.
///
/// Control records carry their own end point, so a curved segment is always
/// a single slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Vertex {
    OnCurve(OnCurve),
    /// Cubic Bezier segment from the previous point to `to`.
    Cubic { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    /// Quadratic segment from the previous point to `to`.
    Quadratic { ctrl: Vec2, to: Vec2 },
}

impl Vertex {
    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        Vertex::OnCurve(OnCurve::new(Vec2::new(x, y)))
    }

    /// Where the pen is after this slot.
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        match self {
            Vertex::OnCurve(v) => v.pos,
            Vertex::Cubic { to, .. } | Vertex::Quadratic { to, .. } => *to,
        }
    }

    #[inline]
    pub fn fill_override(&self) -> Option<Color> {
        match self {
            Vertex::OnCurve(v) => v.fill,
            _ => None,
        }
    }

    #[inline]
    pub fn stroke_override(&self) -> Option<Color> {
        match self {
            Vertex::OnCurve(v) => v.stroke,
            _ => None,
        }
    }
}

impl From<OnCurve> for Vertex {
    #[inline]
    fn from(v: OnCurve) -> Self {
        Vertex::OnCurve(v)
    }
}

/// Ordered vertices of one shape-in-progress.
///
/// Order defines path order and strip/fan adjacency. The buffer is handed to
/// the dispatcher by value; [`take`](Self::take) moves the contents out and
/// leaves the source empty so it cannot be replayed by accident.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
}

impl VertexBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, v: impl Into<Vertex>) {
        self.vertices.push(v.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Vertex> {
        self.vertices.get(i)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn take(&mut self) -> VertexBuffer {
        core::mem::take(self)
    }
}

impl Index<usize> for VertexBuffer {
    type Output = Vertex;

    #[inline]
    fn index(&self, i: usize) -> &Vertex {
        &self.vertices[i]
    }
}

impl FromIterator<Vertex> for VertexBuffer {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self { vertices: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_empties_the_source() {
        let mut buf = VertexBuffer::new();
        buf.push(Vertex::at(1.0, 2.0));
        let taken = buf.take();
        assert!(buf.is_empty());
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].end_point(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn control_records_carry_no_colors() {
        let v = Vertex::Quadratic { ctrl: Vec2::zero(), to: Vec2::new(3.0, 4.0) };
        assert_eq!(v.end_point(), Vec2::new(3.0, 4.0));
        assert_eq!(v.fill_override(), None);
        assert_eq!(v.stroke_override(), None);
    }
}
