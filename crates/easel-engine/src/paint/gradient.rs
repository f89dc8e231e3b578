use crate::coords::Vec2;

use super::Color;

/// What a gradient paints beyond its end points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SpreadMode {
    /// Extend the edge colours.
    #[default]
    Pad,
    Repeat,
    /// Repeat, mirroring every other period.
    Reflect,
}

/// Colour at offset `t` along a gradient, `0` at the start point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient between two user-space points.
///
/// The end points are transformed with the path geometry they paint.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Padded gradient from `from` at `start` to `to` at `end`.
    pub fn between(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)], SpreadMode::Pad)
    }

    /// At least two finite stops in non-decreasing order, and distinct finite
    /// end points. Sinks skip painting with anything else.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.start != self.end
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_is_valid() {
        let g = LinearGradient::between(Vec2::zero(), Vec2::new(10.0, 0.0), Color::BLACK, Color::WHITE);
        assert!(g.is_valid());
        assert_eq!(g.spread, SpreadMode::Pad);
    }

    #[test]
    fn degenerate_gradients_are_invalid() {
        let same = LinearGradient::between(Vec2::zero(), Vec2::zero(), Color::BLACK, Color::WHITE);
        assert!(!same.is_valid());

        let mut unsorted = LinearGradient::between(Vec2::zero(), Vec2::new(1.0, 1.0), Color::BLACK, Color::WHITE);
        unsorted.stops.reverse();
        assert!(!unsorted.is_valid());
    }
}
