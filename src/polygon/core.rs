//! The convex CCW polygon variant type and collision segments.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A simple convex polygon with counter-clockwise winding, as a tagged
/// variant.
///
/// The variants cover every degenerate shape the intersection of two convex
/// regions can produce:
///
/// - `Empty` — no points at all.
/// - `Point` — a single point.
/// - `Line` — a segment with two strictly different endpoints.
/// - `Polygon` — at least three vertices in CCW order, no duplicate points,
///   no three collinear points, strictly positive signed area.
///
/// The invariants of `Line` and `Polygon` are upheld by the constructors of
/// this crate, not re-validated on use.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvexPolygon<F> {
    /// The empty polygon.
    Empty,
    /// A single point.
    Point(Point2<F>),
    /// A segment between two distinct points.
    Line(Point2<F>, Point2<F>),
    /// A proper polygon with at least three CCW vertices.
    Polygon(Vec<Point2<F>>),
}

impl<F: Float> ConvexPolygon<F> {
    /// Creates a line variant, collapsing to `Point` when the endpoints
    /// coincide.
    pub fn line(p1: Point2<F>, p2: Point2<F>) -> Self {
        if p1 == p2 {
            ConvexPolygon::Point(p1)
        } else {
            ConvexPolygon::Line(p1, p2)
        }
    }

    /// Creates the variant matching the number of points.
    ///
    /// Zero points give `Empty`, one gives `Point`, two give `Line` (or
    /// `Point` for coincident endpoints). Three or more are taken as a valid
    /// CCW convex vertex list without further checking.
    pub fn from_points(points: Vec<Point2<F>>) -> Self {
        match points.len() {
            0 => ConvexPolygon::Empty,
            1 => ConvexPolygon::Point(points[0]),
            2 => Self::line(points[0], points[1]),
            _ => ConvexPolygon::Polygon(points),
        }
    }

    /// Returns `true` for the empty variant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, ConvexPolygon::Empty)
    }

    /// The vertices as an owned sequence, possibly empty.
    pub fn points(&self) -> Vec<Point2<F>> {
        match self {
            ConvexPolygon::Empty => Vec::new(),
            ConvexPolygon::Point(p) => vec![*p],
            ConvexPolygon::Line(p1, p2) => vec![*p1, *p2],
            ConvexPolygon::Polygon(ps) => ps.clone(),
        }
    }

    /// Translates every vertex by the given vector.
    pub fn translate(&self, v: Vec2<F>) -> Self {
        match self {
            ConvexPolygon::Empty => ConvexPolygon::Empty,
            ConvexPolygon::Point(p) => ConvexPolygon::Point(*p + v),
            ConvexPolygon::Line(p1, p2) => ConvexPolygon::Line(*p1 + v, *p2 + v),
            ConvexPolygon::Polygon(ps) => {
                ConvexPolygon::Polygon(ps.iter().map(|&p| p + v).collect())
            }
        }
    }

    /// The arithmetic mean of the vertices, or `None` for `Empty`.
    pub fn middle_point(&self) -> Option<Point2<F>> {
        match self {
            ConvexPolygon::Empty => None,
            ConvexPolygon::Point(p) => Some(*p),
            ConvexPolygon::Line(p1, p2) => Some(p1.midpoint(*p2)),
            ConvexPolygon::Polygon(ps) => {
                let mut x = F::zero();
                let mut y = F::zero();
                for p in ps {
                    x = x + p.x;
                    y = y + p.y;
                }
                let n = F::from(ps.len()).unwrap();
                Some(Point2::new(x / n, y / n))
            }
        }
    }
}

/// A boundary-crossing event between two convex CCW polygons.
///
/// Announces that polygon 1's directed edge at `index1` and polygon 2's
/// directed edge at `index2` overlap, meeting at `point`. The directed edge
/// from vertex *i* is the half-open segment `(poly[i], poly[next(i)]]`: the
/// starting vertex is not part of the edge. When the edges overlap collinearly
/// in more than one point, `point` is one of the overlapping edge heads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSegment<F> {
    /// Index of the directed edge on the first polygon.
    pub index1: usize,
    /// Index of the directed edge on the second polygon.
    pub index2: usize,
    /// The crossing point (or an overlapping head for collinear overlap).
    pub point: Point2<F>,
}

impl<F> CollisionSegment<F> {
    /// Creates a new collision segment.
    #[inline]
    pub fn new(index1: usize, index2: usize, point: Point2<F>) -> Self {
        Self {
            index1,
            index2,
            point,
        }
    }
}
