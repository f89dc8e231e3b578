use core::str::FromStr;

use super::ShapeError;

/// Tessellation selected by `begin_shape`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ShapeKind {
    /// Simple (possibly multi-contour) polygon; the only kind curves apply to.
    #[default]
    Polygon,
    Points,
    Lines,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Polygon,
        ShapeKind::Points,
        ShapeKind::Lines,
        ShapeKind::Triangles,
        ShapeKind::TriangleStrip,
        ShapeKind::TriangleFan,
        ShapeKind::Quads,
        ShapeKind::QuadStrip,
    ];

    /// Canonical lowercase tag.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Polygon => "polygon",
            ShapeKind::Points => "points",
            ShapeKind::Lines => "lines",
            ShapeKind::Triangles => "triangles",
            ShapeKind::TriangleStrip => "triangle_strip",
            ShapeKind::TriangleFan => "triangle_fan",
            ShapeKind::Quads => "quads",
            ShapeKind::QuadStrip => "quad_strip",
        }
    }

    /// Kinds whose faces may carry their own fill and stroke colours.
    #[inline]
    pub fn has_face_colors(self) -> bool {
        !matches!(self, ShapeKind::Polygon)
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.tag() == lower)
            .ok_or_else(|| ShapeError::UnknownKind { tag: s.to_string() })
    }
}

/// Whether `end_shape` closes the outline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum CloseMode {
    #[default]
    Open,
    Close,
}

/// Everything the dispatcher needs to know about a closed shape besides its
/// vertices.
///
/// The curve flags are only meaningful for [`ShapeKind::Polygon`]; use
/// [`plan`](Self::plan) to resolve them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct ShapeDescriptor {
    pub close_mode: CloseMode,
    pub kind: ShapeKind,
    pub is_curve: bool,
    pub is_bezier: bool,
    pub is_quadratic: bool,
    pub is_contour: bool,
}

/// Resolved interpretation of a shape; one handler per variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapePlan {
    /// Catmull-Rom spline through on-curve vertices.
    Curve,
    /// Polygon with cubic segments.
    Bezier,
    /// Polygon with quadratic segments.
    Quadratic,
    Discrete(ShapeKind),
}

impl ShapeDescriptor {
    #[inline]
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Folds the flags into a single plan.
    ///
    /// Priority is curve, then bezier, then quadratic; none of them apply
    /// unless the kind is `Polygon`.
    pub fn plan(&self) -> ShapePlan {
        if self.kind != ShapeKind::Polygon {
            return ShapePlan::Discrete(self.kind);
        }
        if self.is_curve {
            ShapePlan::Curve
        } else if self.is_bezier {
            ShapePlan::Bezier
        } else if self.is_quadratic {
            ShapePlan::Quadratic
        } else {
            ShapePlan::Discrete(ShapeKind::Polygon)
        }
    }
}
