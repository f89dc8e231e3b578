use crate::coords::ShapeMode;

/// Line end decoration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum StrokeCap {
    #[default]
    Round,
    /// Flat end exactly at the end point.
    Square,
    /// Flat end extended by half the stroke weight.
    Project,
}

/// Corner decoration between stroked segments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

/// Stroke geometry attributes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub weight: f32,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
}

/// Weight stored for a requested weight of zero; a zero line width is
/// ignored by canvas-style sinks, a vanishing one is not.
pub const HAIRLINE_EPSILON: f32 = 0.0001;

impl StrokeStyle {
    /// Returns a copy with `weight` applied, mapping non-positive weights to
    /// [`HAIRLINE_EPSILON`].
    pub fn with_weight(self, weight: f32) -> Self {
        let weight = if weight > 0.0 { weight } else { HAIRLINE_EPSILON };
        Self { weight, ..self }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            weight: 1.0,
            cap: StrokeCap::Round,
            join: StrokeJoin::Miter,
        }
    }
}

/// Read-only snapshot of the renderer state the shape core depends on.
///
/// Owned by [`crate::graphics::Graphics`]; handed by reference into
/// [`crate::shape::close`] and the primitive helpers so nothing reads hidden
/// globals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawState {
    pub fill_enabled: bool,
    pub stroke_enabled: bool,
    /// Catmull-Rom tightness; 0 is a standard Catmull-Rom spline.
    pub curve_tightness: f32,
    pub rect_mode: ShapeMode,
    pub ellipse_mode: ShapeMode,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill_enabled: true,
            stroke_enabled: true,
            curve_tightness: 0.0,
            rect_mode: ShapeMode::Corner,
            ellipse_mode: ShapeMode::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_weight_becomes_hairline_epsilon() {
        assert_eq!(StrokeStyle::default().with_weight(0.0).weight, HAIRLINE_EPSILON);
        assert_eq!(StrokeStyle::default().with_weight(-3.0).weight, HAIRLINE_EPSILON);
        assert_eq!(StrokeStyle::default().with_weight(4.0).weight, 4.0);
    }

    #[test]
    fn defaults_enable_fill_and_stroke() {
        let state = DrawState::default();
        assert!(state.fill_enabled && state.stroke_enabled);
        assert_eq!(state.curve_tightness, 0.0);
        assert_eq!(state.ellipse_mode, ShapeMode::Center);
    }
}
