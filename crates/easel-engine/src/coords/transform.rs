use super::Vec2;

/// 2D affine transform in canvas `(a, b, c, d, e, f)` order.
///
/// Maps a point as:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    #[inline]
    pub const fn scaling(x: f32, y: f32) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Clockwise rotation (in a +Y-down space) by `radians`.
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    #[inline]
    pub fn shear_x(radians: f32) -> Self {
        Self::new(1.0, 0.0, radians.tan(), 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn shear_y(radians: f32) -> Self {
        Self::new(1.0, radians.tan(), 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns `self × other`: `other` is applied to points first.
    ///
    /// This is the composition performed by a canvas `transform()` call.
    pub fn then(self, other: Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Transform::identity().apply(p), p);
        assert!(Transform::default().is_identity());
    }

    #[test]
    fn translate_then_scale_scales_first() {
        // translate(10, 0); scale(2): the point is scaled, then moved.
        let t = Transform::translation(10.0, 0.0).then(Transform::scaling(2.0, 2.0));
        assert!(close(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0)));
    }

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        let t = Transform::rotation(core::f32::consts::FRAC_PI_2);
        assert!(close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn shear_x_offsets_by_y() {
        let t = Transform::shear_x(core::f32::consts::FRAC_PI_4);
        assert!(close(t.apply(Vec2::new(0.0, 2.0)), Vec2::new(2.0, 2.0)));
    }
}
