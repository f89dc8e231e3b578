use crate::coords::Vec2;

/// Converts one Catmull-Rom window into the cubic Bezier that interpolates
/// `p1` to `p2`.
///
/// `tightness` of 0 gives a standard Catmull-Rom spline; 1 collapses the
/// tangents so the segment becomes straight.
///
/// ```text
/// B0 = p1
/// B1 = p1 + s·(p2 − p0) / 6
/// B2 = p2 + s·(p1 − p3) / 6
/// B3 = p2                      where s = 1 − tightness
/// ```
#[inline]
pub fn catmull_rom_to_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, tightness: f32) -> [Vec2; 4] {
    let s = 1.0 - tightness;
    [
        p1,
        p1 + (p2 - p0) * s / 6.0,
        p2 + (p1 - p3) * s / 6.0,
        p2,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_line_y0(p: Vec2) -> bool {
        p.y.abs() < 1e-6
    }

    #[test]
    fn collinear_equal_spacing_yields_straight_segment() {
        let pts = [0.0, 1.0, 2.0, 3.0].map(|x| Vec2::new(x * 3.0, 0.0));
        let b = catmull_rom_to_bezier(pts[0], pts[1], pts[2], pts[3], 0.0);
        assert!(b.iter().all(|&p| on_line_y0(p)));
        // Controls sit at the thirds of the segment.
        assert!((b[1].x - 4.0).abs() < 1e-6);
        assert!((b[2].x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn end_points_are_interpolated() {
        let (p0, p1, p2, p3) = (Vec2::new(0.0, 0.0), Vec2::new(1.0, 5.0), Vec2::new(4.0, 2.0), Vec2::new(9.0, 9.0));
        let b = catmull_rom_to_bezier(p0, p1, p2, p3, 0.3);
        assert_eq!(b[0], p1);
        assert_eq!(b[3], p2);
    }

    #[test]
    fn full_tightness_collapses_controls() {
        let (p0, p1, p2, p3) = (Vec2::new(-5.0, 2.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 7.0), Vec2::new(0.0, 0.0));
        let b = catmull_rom_to_bezier(p0, p1, p2, p3, 1.0);
        assert_eq!(b[1], p1);
        assert_eq!(b[2], p2);
    }

    #[test]
    fn axes_are_independent() {
        let b = catmull_rom_to_bezier(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 6.0),
            Vec2::new(0.0, 12.0),
            Vec2::new(0.0, 18.0),
            0.0,
        );
        assert_eq!(b[1], Vec2::new(0.0, 8.0));
        assert_eq!(b[2], Vec2::new(0.0, 10.0));
    }
}
