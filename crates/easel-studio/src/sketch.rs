//! Demo drawings, one per shape kind.

use core::f32::consts::TAU;

use easel_engine::coords::{Rect, Vec2};
use easel_engine::paint::{Color, LinearGradient};
use easel_engine::render::PathSink;
use easel_engine::shape::{CloseMode, ShapeKind};
use easel_engine::text::{TextAlign, TextBox};
use easel_engine::Graphics;

const INK: Color = Color::from_premul(0.12, 0.12, 0.16, 1.0);

/// Distinct opaque colour for face `i`.
fn swatch(i: usize) -> Color {
    const PALETTE: [(u8, u8, u8); 6] = [
        (231, 76, 60),
        (241, 196, 15),
        (46, 204, 113),
        (52, 152, 219),
        (155, 89, 182),
        (230, 126, 34),
    ];
    let (r, g, b) = PALETTE[i % PALETTE.len()];
    Color::from_srgb_u8(r, g, b, 255)
}

/// `n` points evenly spaced on a circle inscribed in `cell`.
fn ring(cell: Rect, n: usize, inset: f32) -> Vec<Vec2> {
    let c = cell.center();
    let r = cell.size.x.min(cell.size.y) / 2.0 - inset;
    (0..n)
        .map(|i| {
            let a = TAU * i as f32 / n as f32 - TAU / 4.0;
            Vec2::new(c.x + r * a.cos(), c.y + r * a.sin())
        })
        .collect()
}

/// Zig-zag through `cell`, alternating between two rows.
fn zigzag(cell: Rect, n: usize, inset: f32) -> Vec<Vec2> {
    let x0 = cell.origin.x + inset;
    let span = cell.size.x - 2.0 * inset;
    let top = cell.origin.y + cell.size.y * 0.3;
    let bottom = cell.origin.y + cell.size.y * 0.7;
    (0..n)
        .map(|i| {
            let x = x0 + span * (i / 2) as f32 / ((n - 1) / 2).max(1) as f32;
            Vec2::new(x, if i % 2 == 0 { top } else { bottom })
        })
        .collect()
}

/// Draws the demo for `kind` inside `cell`.
pub fn draw_kind<S: PathSink>(g: &mut Graphics<S>, kind: ShapeKind, cell: Rect) {
    log::debug!("drawing {} demo in {:?}", kind.tag(), cell);
    g.push();
    g.stroke(INK);
    g.stroke_weight(2.0);

    match kind {
        ShapeKind::Polygon => polygon(g, cell),
        ShapeKind::Points => {
            g.stroke_weight(6.0);
            shape(g, kind, &ring(cell, 12, 24.0));
        }
        ShapeKind::Lines => shape(g, kind, &ring(cell, 10, 24.0)),
        ShapeKind::Triangles => shape(g, kind, &ring(cell, 9, 20.0)),
        ShapeKind::TriangleStrip | ShapeKind::QuadStrip => shape(g, kind, &zigzag(cell, 8, 20.0)),
        ShapeKind::TriangleFan => {
            let mut pts = vec![cell.center()];
            pts.extend(ring(cell, 7, 20.0));
            shape(g, kind, &pts);
        }
        ShapeKind::Quads => {
            let mut pts = ring(cell, 4, 20.0);
            pts.extend(ring(cell, 4, 45.0));
            shape(g, kind, &pts);
        }
    }

    g.no_stroke();
    g.fill(INK);
    g.text_align(TextAlign::Center);
    g.text(
        kind.tag(),
        cell.origin.x,
        cell.origin.y + cell.size.y - 28.0,
        Some(TextBox { max_width: cell.size.x, max_height: None }),
    );
    g.pop();
}

/// One vertex per point, each coloured with its own swatch.
fn shape<S: PathSink>(g: &mut Graphics<S>, kind: ShapeKind, points: &[Vec2]) {
    g.begin_shape(kind);
    for (i, p) in points.iter().enumerate() {
        g.fill(swatch(i));
        if kind == ShapeKind::Points {
            g.stroke(swatch(i));
        }
        g.vertex(p.x, p.y);
    }
    g.end_shape(CloseMode::Close);
}

/// Square with a square hole, a Catmull-Rom wave and a Bezier arch.
fn polygon<S: PathSink>(g: &mut Graphics<S>, cell: Rect) {
    let o = cell.origin;
    let (w, h) = (cell.size.x, cell.size.y);

    g.fill_gradient(LinearGradient::between(
        Vec2::new(o.x + w * 0.15, o.y),
        Vec2::new(o.x + w * 0.55, o.y),
        swatch(3),
        swatch(4),
    ));
    g.begin_shape(ShapeKind::Polygon);
    for (x, y) in [(0.15, 0.15), (0.55, 0.15), (0.55, 0.55), (0.15, 0.55)] {
        g.vertex(o.x + w * x, o.y + h * y);
    }
    g.begin_contour();
    for (x, y) in [(0.25, 0.25), (0.25, 0.45), (0.45, 0.45), (0.45, 0.25)] {
        g.vertex(o.x + w * x, o.y + h * y);
    }
    g.end_contour();
    g.end_shape(CloseMode::Close);

    g.no_fill();
    g.begin_shape(ShapeKind::Polygon);
    for i in 0..7 {
        let x = o.x + w * (0.05 + 0.15 * i as f32);
        let y = o.y + h * if i % 2 == 0 { 0.7 } else { 0.8 };
        g.curve_vertex(x, y);
    }
    g.end_shape(CloseMode::Open);

    g.bezier(
        o.x + w * 0.65,
        o.y + h * 0.55,
        o.x + w * 0.65,
        o.y + h * 0.1,
        o.x + w * 0.95,
        o.y + h * 0.1,
        o.x + w * 0.95,
        o.y + h * 0.55,
    );
}
