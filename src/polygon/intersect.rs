//! The polygon intersection driver.
//!
//! Dispatches on the variant pair, culls by bounding box, and for the
//! polygon/polygon case runs the calipers walk followed by the boundary
//! weave.

use super::calipers::collision_segments;
use super::core::ConvexPolygon;
use super::segment::{point_on_segment, segment_intersection};
use super::weave::intersection_from_segments;
use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;

/// Result of a polygon intersection query.
#[derive(Debug, Clone, PartialEq)]
pub enum HullIntersection<F> {
    /// Overlap was decided without materializing the intersection shape;
    /// produced by bounding-box culling.
    Decided(bool),
    /// The concrete intersection region.
    Region(ConvexPolygon<F>),
}

impl<F> HullIntersection<F> {
    /// Whether this result indicates any overlap at all.
    pub fn overlaps(&self) -> bool
    where
        F: Float,
    {
        match self {
            HullIntersection::Decided(b) => *b,
            HullIntersection::Region(region) => !region.is_empty(),
        }
    }
}

/// Finds the intersection of two convex CCW polygons.
///
/// The optional approximate bounding boxes let callers that precompute
/// transformed boxes cull cheap misses early; when a pair of boxes (approximate
/// if supplied, backed by the precise ones) does not overlap, the query
/// short-circuits with `Decided(false)`. Otherwise the result is the concrete
/// intersection region.
///
/// The intersection is symmetric as a geometric set; only the point ordering
/// of the reported variant may differ between argument orders.
pub fn intersection<F: Float>(
    poly1: &ConvexPolygon<F>,
    poly2: &ConvexPolygon<F>,
    approx_bbox1: Option<Aabb2<F>>,
    approx_bbox2: Option<Aabb2<F>>,
) -> HullIntersection<F> {
    use ConvexPolygon as V;

    // Empty operands never reach the culling stage.
    if poly1.is_empty() || poly2.is_empty() {
        return HullIntersection::Region(V::Empty);
    }

    let points1 = poly1.points();
    let points2 = poly2.points();

    let bbox1 = Aabb2::from_points(points1.iter().copied()).expect("non-empty polygon");
    let bbox2 = Aabb2::from_points(points2.iter().copied()).expect("non-empty polygon");

    let boxes_intersect = match (approx_bbox1, approx_bbox2) {
        (None, None) => bbox1.intersects(bbox2),
        (Some(a1), None) => a1.intersects(bbox2) && bbox1.intersects(bbox2),
        (None, Some(a2)) => bbox1.intersects(a2) && bbox1.intersects(bbox2),
        (Some(a1), Some(a2)) => a1.intersects(a2) && bbox1.intersects(bbox2),
    };
    if !boxes_intersect {
        return HullIntersection::Decided(false);
    }

    let region = match (poly1, poly2) {
        (V::Polygon(ps1), V::Polygon(ps2)) => {
            let origin1 = leftmost_uppermost(ps1);
            let origin2 = leftmost_uppermost(ps2);
            match collision_segments(ps1, ps2, origin1, origin2) {
                // No crossings and no containment: nothing intersects.
                None => V::Empty,
                Some(segments) => intersection_from_segments(&segments, ps1, ps2),
            }
        }
        (V::Line(p11, p12), V::Polygon(ps)) => line_polygon(*p11, *p12, ps),
        (V::Polygon(ps), V::Line(p21, p22)) => line_polygon(*p21, *p22, ps),
        (V::Point(p), V::Polygon(ps)) => point_polygon(*p, ps),
        (V::Polygon(ps), V::Point(p)) => point_polygon(*p, ps),
        (V::Line(p11, p12), V::Line(p21, p22)) => {
            segment_intersection(*p11, *p12, *p21, *p22)
        }
        (V::Point(p), V::Line(l1, l2)) | (V::Line(l1, l2), V::Point(p)) => {
            if point_on_segment(*p, *l1, *l2) {
                V::Point(*p)
            } else {
                V::Empty
            }
        }
        (V::Point(a), V::Point(b)) => {
            if a == b {
                V::Point(*a)
            } else {
                V::Empty
            }
        }
        // Empty operands were dispatched above.
        (V::Empty, _) | (_, V::Empty) => unreachable!("empty handled before dispatch"),
    };

    HullIntersection::Region(region)
}

/// Index of the leftmost vertex, ties broken towards the smallest y.
///
/// Used as the canonical origin for the calipers walk; any extreme vertex
/// works, this choice makes the walk deterministic.
pub(crate) fn leftmost_uppermost<F: Float>(points: &[Point2<F>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    best
}

/// Intersection of a point with a convex CCW polygon.
fn point_polygon<F: Float>(point: Point2<F>, points: &[Point2<F>]) -> ConvexPolygon<F> {
    let n = points.len();
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        if (p2 - p1).cross(point - p1) < F::zero() {
            return ConvexPolygon::Empty;
        }
    }
    ConvexPolygon::Point(point)
}

/// Intersection of a segment with a convex CCW polygon.
///
/// Collides the segment with every polygon edge and unions those results
/// with the endpoint-in-polygon tests; the intersection of a segment with a
/// convex region is itself `Empty`, a `Point`, or a `Line`.
fn line_polygon<F: Float>(
    p11: Point2<F>,
    p12: Point2<F>,
    points: &[Point2<F>],
) -> ConvexPolygon<F> {
    let n = points.len();
    let mut hits: Vec<Point2<F>> = Vec::new();

    for i in 0..n {
        let p21 = points[i];
        let p22 = points[(i + 1) % n];
        match segment_intersection(p11, p12, p21, p22) {
            ConvexPolygon::Empty => {}
            ConvexPolygon::Point(p) => hits.push(p),
            // A collinear stretch along one edge is the whole answer.
            line @ ConvexPolygon::Line(..) => return line,
            ConvexPolygon::Polygon(_) => unreachable!("segments cannot meet in a polygon"),
        }
    }

    for endpoint in [p11, p12] {
        if let ConvexPolygon::Point(p) = point_polygon(endpoint, points) {
            hits.push(p);
        }
    }

    // Order and dedup the collected points; two or more span a line.
    hits.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    hits.dedup();

    match hits.len() {
        0 => ConvexPolygon::Empty,
        1 => ConvexPolygon::Point(hits[0]),
        _ => ConvexPolygon::line(hits[0], hits[1]),
    }
}
