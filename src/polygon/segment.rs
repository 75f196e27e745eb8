//! Segment/segment and point/segment intersection.
//!
//! All decisive comparisons here are exact floating-point tests. Introducing
//! a tolerance would change which configurations count as parallel,
//! collinear, or touching, and the calipers walk depends on those answers
//! being consistent with each other.

use super::core::{CollisionSegment, ConvexPolygon};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Finds the collision between two directed polygon edges, if any.
///
/// The directed edge at index `i` runs from `poly[i]` to `poly[next(i)]` and
/// excludes its starting vertex, so acceptance is `0 < u <= 1` on both
/// parameters. When the edges are collinear and overlap, the collision point
/// is an overlapping edge head.
pub fn directed_edge_collision<F: Float>(
    i1: usize,
    i2: usize,
    poly1: &[Point2<F>],
    poly2: &[Point2<F>],
) -> Option<CollisionSegment<F>> {
    let next1 = (i1 + 1) % poly1.len();
    let next2 = (i2 + 1) % poly2.len();

    let p11 = poly1[i1];
    let p12 = poly1[next1];
    let p21 = poly2[i2];
    let p22 = poly2[next2];

    let l1 = p12 - p11;
    let l2 = p22 - p21;

    let denominator = l2.cross(l1);

    if denominator == F::zero() {
        // No single point of intersection; check for collinear overlap via
        // the perpendicular distance from p21 to the first edge's line.
        let dist = (l2.perpendicular() / l2.magnitude()).dot(p21 - p11).abs();
        if dist != F::zero() {
            return None;
        }

        // Positions of the two heads on the opposite edge.
        let u1 = axis_parameter(l1, p11, p22);
        let u2 = axis_parameter(l2, p21, p12);

        let head1 = u1 > F::zero() && u1 <= F::one();
        let head2 = u2 > F::zero() && u2 <= F::one();
        if head1 || head2 {
            let point = if head1 {
                p11 + l1 * u1
            } else {
                p21 + l2 * u2
            };
            Some(CollisionSegment::new(i1, i2, point))
        } else {
            None
        }
    } else {
        let u1 = (-p21.x * l2.y + p11.x * l2.y + (p21.y - p11.y) * l2.x) / denominator;
        let u2 = (-p21.x * l1.y + p11.x * l1.y + (p21.y - p11.y) * l1.x) / denominator;

        if u1 > F::zero() && u1 <= F::one() && u2 > F::zero() && u2 <= F::one() {
            Some(CollisionSegment::new(i1, i2, p11 + l1 * u1))
        } else {
            None
        }
    }
}

/// Finds the intersection of two undirected line segments.
///
/// Each segment includes both endpoints, which must be distinct within a
/// segment. The result is `Empty`, `Point`, or `Line`.
pub fn segment_intersection<F: Float>(
    p11: Point2<F>,
    p12: Point2<F>,
    p21: Point2<F>,
    p22: Point2<F>,
) -> ConvexPolygon<F> {
    let l1 = p12 - p11;
    let l2 = p22 - p21;

    let denominator = l2.cross(l1);

    if denominator == F::zero() {
        let dist = (l2.perpendicular() / l2.magnitude()).dot(p21 - p11).abs();
        if dist != F::zero() {
            return ConvexPolygon::Empty;
        }

        // Collinear: project each endpoint onto the other segment's
        // parameter and keep those that land inside [0, 1].
        let u11 = axis_parameter(l1, p11, p21);
        let u12 = axis_parameter(l1, p11, p22);
        let u21 = axis_parameter(l2, p21, p11);
        let u22 = axis_parameter(l2, p21, p12);

        let candidates = [(u11, p21), (u12, p22), (u21, p11), (u22, p12)];
        let mut overlapping: Vec<Point2<F>> = candidates
            .iter()
            .filter(|(u, _)| *u >= F::zero() && *u <= F::one())
            .map(|(_, p)| *p)
            .collect();

        match overlapping.len() {
            0 => ConvexPolygon::Empty,
            1 => ConvexPolygon::Point(overlapping[0]),
            _ => {
                overlapping.sort_by(|a, b| {
                    b.x.partial_cmp(&a.x)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then_with(|| {
                            b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal)
                        })
                });
                // Extremes of the surviving points; equal endpoints collapse
                // to a Point.
                ConvexPolygon::line(overlapping[0], overlapping[overlapping.len() - 1])
            }
        }
    } else {
        let u1 = (-p21.x * l2.y + p11.x * l2.y + (p21.y - p11.y) * l2.x) / denominator;
        let u2 = (-p21.x * l1.y + p11.x * l1.y + (p21.y - p11.y) * l1.x) / denominator;

        if u1 >= F::zero() && u1 <= F::one() && u2 >= F::zero() && u2 <= F::one() {
            ConvexPolygon::Point(p11 + l1 * u1)
        } else {
            ConvexPolygon::Empty
        }
    }
}

/// Whether a point lies on an undirected segment (endpoints included).
pub fn point_on_segment<F: Float>(point: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> bool {
    let v1 = p2 - p1;
    let v2 = point - p1;

    if v1.cross(v2) != F::zero() {
        return false;
    }

    let u = axis_parameter(v1, p1, point);
    u >= F::zero() && u <= F::one()
}

/// Parameter of `point` along `dir` starting at `start`, measured on the
/// axis where `dir` is non-zero. Assumes `dir` is not the zero vector and
/// `point` lies on the carrying line.
#[inline]
fn axis_parameter<F: Float>(dir: Vec2<F>, start: Point2<F>, point: Point2<F>) -> F {
    if dir.x != F::zero() {
        (point.x - start.x) / dir.x
    } else {
        (point.y - start.y) / dir.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_segment_intersection_crossing() {
        let result = segment_intersection(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0));
        assert_eq!(result, ConvexPolygon::Point(p(1.0, 1.0)));
    }

    #[test]
    fn test_segment_intersection_parallel() {
        let result = segment_intersection(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0));
        assert_eq!(result, ConvexPolygon::Empty);
    }

    #[test]
    fn test_segment_intersection_disjoint_nonparallel() {
        let result = segment_intersection(p(0.0, 0.0), p(1.0, 0.0), p(3.0, -1.0), p(3.0, 1.0));
        assert_eq!(result, ConvexPolygon::Empty);
    }

    #[test]
    fn test_segment_intersection_collinear_overlap() {
        let result = segment_intersection(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0));
        // The shared stretch runs from (1,0) to (2,0).
        assert_eq!(result, ConvexPolygon::Line(p(2.0, 0.0), p(1.0, 0.0)));
    }

    #[test]
    fn test_segment_intersection_collinear_disjoint() {
        let result = segment_intersection(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        assert_eq!(result, ConvexPolygon::Empty);
    }

    #[test]
    fn test_segment_intersection_shared_endpoint() {
        // Collinear segments that only touch at one point.
        let result = segment_intersection(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert_eq!(result, ConvexPolygon::Point(p(1.0, 0.0)));
    }

    #[test]
    fn test_segment_intersection_identical_segments() {
        let result = segment_intersection(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 0.0), p(1.0, 1.0));
        assert_eq!(result, ConvexPolygon::Line(p(1.0, 1.0), p(0.0, 0.0)));
    }

    #[test]
    fn test_segment_intersection_vertical_collinear() {
        let result = segment_intersection(p(1.0, 0.0), p(1.0, 3.0), p(1.0, 2.0), p(1.0, 5.0));
        assert_eq!(result, ConvexPolygon::Line(p(1.0, 3.0), p(1.0, 2.0)));
    }

    #[test]
    fn test_directed_edge_excludes_start_vertex() {
        // The edges of two triangles meeting only at the first triangle's
        // edge START vertex: no collision, the start is not on the edge.
        let poly1 = [p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0)];
        let poly2 = [p(0.0, 0.0), p(0.0, -2.0), p(2.0, -2.0)];
        // Edge 0 of poly1 runs (0,0)->(2,0); edge 2 of poly2 runs
        // (2,-2)->(0,0), meeting the first edge only at (0,0), which is
        // excluded from edge 0 but is the head of edge 2.
        let hit = directed_edge_collision(0, 2, &poly1, &poly2);
        assert!(hit.is_none());
    }

    #[test]
    fn test_directed_edge_head_counts() {
        // Heads touching: edge 0 of poly1 ends at (2,0), which lies on
        // poly2's edge 0.
        let poly1 = [p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0)];
        let poly2 = [p(2.0, -1.0), p(2.0, 1.0), p(0.0, -1.0)];
        let hit = directed_edge_collision(0, 0, &poly1, &poly2).unwrap();
        assert_eq!(hit.point, p(2.0, 0.0));
        assert_eq!((hit.index1, hit.index2), (0, 0));
    }

    #[test]
    fn test_directed_edge_collinear_overlap_picks_head() {
        let poly1 = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)];
        let poly2 = [p(1.0, 0.0), p(3.0, 0.0), p(1.0, 2.0)];
        let hit = directed_edge_collision(0, 0, &poly1, &poly2).unwrap();
        // Poly2's head (3,0) lies inside poly1's edge 0.
        assert_eq!(hit.point, p(3.0, 0.0));
    }

    #[test]
    fn test_directed_edge_transversal() {
        let poly1 = [p(0.0, -1.0), p(2.0, 1.0), p(-1.0, 1.0)];
        let poly2 = [p(0.0, 1.0), p(2.0, -1.0), p(3.0, 1.0)];
        let hit = directed_edge_collision(0, 0, &poly1, &poly2).unwrap();
        assert_eq!(hit.point, p(1.0, 0.0));
    }

    #[test]
    fn test_point_on_segment() {
        assert!(point_on_segment(p(1.0, 1.0), p(0.0, 0.0), p(2.0, 2.0)));
        assert!(point_on_segment(p(0.0, 0.0), p(0.0, 0.0), p(2.0, 2.0)));
        assert!(point_on_segment(p(2.0, 2.0), p(0.0, 0.0), p(2.0, 2.0)));
        assert!(!point_on_segment(p(3.0, 3.0), p(0.0, 0.0), p(2.0, 2.0)));
        assert!(!point_on_segment(p(1.0, 0.0), p(0.0, 0.0), p(2.0, 2.0)));
    }

    #[test]
    fn test_point_on_vertical_segment() {
        assert!(point_on_segment(p(1.0, 2.0), p(1.0, 0.0), p(1.0, 3.0)));
        assert!(!point_on_segment(p(1.0, 4.0), p(1.0, 0.0), p(1.0, 3.0)));
    }
}
