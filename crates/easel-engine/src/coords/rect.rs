use super::Vec2;

/// Axis-aligned rectangle in user-space pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// Interprets four shape arguments according to `mode` and returns the
    /// top-left anchored rectangle they describe.
    ///
    /// Width and height are not normalized: a `Corners` pair given
    /// right-to-left yields a negative width, which path builders accept.
    pub fn from_mode(a: f32, b: f32, c: f32, d: f32, mode: ShapeMode) -> Rect {
        match mode {
            ShapeMode::Corner => Rect::new(a, b, c, d),
            ShapeMode::Corners => Rect::new(a, b, c - a, d - b),
            ShapeMode::Radius => Rect::new(a - c, b - d, 2.0 * c, 2.0 * d),
            ShapeMode::Center => Rect::new(a - c * 0.5, b - d * 0.5, c, d),
        }
    }
}

/// How the four numeric arguments of `rect`, `ellipse` and `arc` are read.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ShapeMode {
    /// `(x, y)` is the top-left corner, `(c, d)` the size.
    #[default]
    Corner,
    /// `(a, b)` and `(c, d)` are opposite corners.
    Corners,
    /// `(a, b)` is the centre, `(c, d)` the half-size.
    Radius,
    /// `(a, b)` is the centre, `(c, d)` the size.
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    // ── from_mode ─────────────────────────────────────────────────────────

    #[test]
    fn corner_mode_is_passthrough() {
        assert_eq!(Rect::from_mode(1.0, 2.0, 3.0, 4.0, ShapeMode::Corner), r(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn corners_mode_uses_opposite_corner() {
        assert_eq!(Rect::from_mode(10.0, 20.0, 30.0, 50.0, ShapeMode::Corners), r(10.0, 20.0, 20.0, 30.0));
    }

    #[test]
    fn radius_mode_doubles_extent() {
        assert_eq!(Rect::from_mode(50.0, 50.0, 10.0, 5.0, ShapeMode::Radius), r(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn center_mode_offsets_by_half() {
        let rect = Rect::from_mode(50.0, 50.0, 20.0, 10.0, ShapeMode::Center);
        assert_eq!(rect, r(40.0, 45.0, 20.0, 10.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
    }
}
