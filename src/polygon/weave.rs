//! Weaving collision segments into the intersection boundary.
//!
//! Given the CCW-ordered crossing events from the calipers walk, this module
//! reconstructs the boundary of the intersection polygon, or decides
//! containment when there are no crossings at all.

use super::core::{CollisionSegment, ConvexPolygon};
use super::segment::directed_edge_collision;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Builds the intersection polygon from the collision segments.
///
/// An empty segment list means no boundary crossings: the result is then one
/// polygon contained in the other, or `Empty`. A non-empty list is woven into
/// the CCW boundary of the intersection, which collapses to `Line`, `Point`,
/// or `Empty` in degenerate contact configurations.
pub(crate) fn intersection_from_segments<F: Float>(
    segments: &[CollisionSegment<F>],
    poly1: &[Point2<F>],
    poly2: &[Point2<F>],
) -> ConvexPolygon<F> {
    let boundary = if segments.is_empty() {
        if point_inside(poly1, poly2[0]) {
            poly2.to_vec()
        } else if point_inside(poly2, poly1[0]) {
            poly1.to_vec()
        } else {
            Vec::new()
        }
    } else {
        let weaver = Weaver {
            segments,
            poly1,
            poly2,
            closing: segments[0],
        };
        weaver.construct(0, Vec::new())
    };

    ConvexPolygon::from_points(boundary)
}

/// Whether a point lies inside (or on the boundary of) a convex CCW polygon.
fn point_inside<F: Float>(points: &[Point2<F>], query: Point2<F>) -> bool {
    let n = points.len();
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        if (p2 - p1).cross(query - p1) < F::zero() {
            return false;
        }
    }
    true
}

/// Same direction: collinear with non-negative dot product. Zero vectors
/// should never occur here.
fn same_dir<F: Float>(v1: Vec2<F>, v2: Vec2<F>) -> bool {
    v1.cross(v2) == F::zero() && v1.dot(v2) >= F::zero()
}

/// Opposite direction: collinear with negative dot product.
fn opposite_dir<F: Float>(v1: Vec2<F>, v2: Vec2<F>) -> bool {
    v1.cross(v2) == F::zero() && v1.dot(v2) < F::zero()
}

/// The clockwise-ordering oracle.
///
/// True iff the vectors appear in strictly clockwise angular order around the
/// origin, starting from the first vector, with no duplicates and none
/// aligned with the starting direction. Returns `false` for any zero vector
/// rather than aborting; numerically pathological inputs then fall through to
/// the more conservative dispatch branches.
fn cw_order<F: Float>(vs: &[Vec2<F>]) -> bool {
    if vs.is_empty() {
        return true;
    }
    if vs.iter().any(|v| v.magnitude() == F::zero()) {
        return false;
    }

    let x = vs[0] / vs[0].magnitude();
    let transformed: Vec<(F, F)> = vs[1..]
        .iter()
        .map(|a| {
            let n = *a / a.magnitude();
            (x.cross(n), x.dot(n))
        })
        .collect();

    // Consecutive vectors must advance strictly clockwise. The cross sign
    // locates each vector's half-plane relative to the start direction; the
    // dot product orders vectors within a half-plane.
    for w in transformed.windows(2) {
        let (c1, d1) = w[0];
        let (c2, d2) = w[1];
        let advances = if c1 == F::zero() {
            c2 > F::zero()
        } else if c1 > F::zero() {
            c2 > F::zero() && d1 < d2
        } else {
            c2 >= F::zero() || d1 > d2
        };
        if !advances {
            return false;
        }
    }

    transformed
        .iter()
        .all(|&(c, d)| !(c == F::zero() && d >= F::zero()))
}

struct Weaver<'a, F> {
    segments: &'a [CollisionSegment<F>],
    poly1: &'a [Point2<F>],
    poly2: &'a [Point2<F>],
    /// The first segment overall; the boundary walk closes when it comes
    /// back around to this segment's edges.
    closing: CollisionSegment<F>,
}

impl<F: Float> Weaver<'_, F> {
    fn next1(&self, i: usize) -> usize {
        (i + 1) % self.poly1.len()
    }

    fn next2(&self, i: usize) -> usize {
        (i + 1) % self.poly2.len()
    }

    /// Appends a point unless it repeats the tail of the boundary.
    fn push_dedup(res: &mut Vec<Point2<F>>, p: Point2<F>) {
        if res.last() != Some(&p) {
            res.push(p);
        }
    }

    /// Processes the collision segment at position `k`, growing (or in the
    /// degenerate terminal cases, replacing) the boundary `res`.
    fn construct(&self, k: usize, mut res: Vec<Point2<F>>) -> Vec<Point2<F>> {
        if k >= self.segments.len() {
            return res;
        }

        let seg = self.segments[k];
        let i1 = seg.index1;
        let i2 = seg.index2;

        let p11 = self.poly1[i1];
        let p12 = self.poly1[self.next1(i1)];
        let p13 = self.poly1[self.next1(self.next1(i1))];
        let p21 = self.poly2[i2];
        let p22 = self.poly2[self.next2(i2)];
        let p23 = self.poly2[self.next2(self.next2(i2))];

        let v11 = p12 - p11;
        let v12 = p13 - p12;
        let v21 = p22 - p21;
        let v22 = p23 - p22;

        if p12 == p22 {
            // The two current edges share their head vertex. The local
            // configuration of the four incident directions decides where
            // the intersection boundary continues, if anywhere.
            if !same_dir(v11, v21) {
                if cw_order(&[-v11, v12, -v21]) && cw_order(&[-v21, v22, -v11]) {
                    // The interior wedges meet only at the vertex; by
                    // convexity the whole intersection is this point.
                    vec![p12]
                } else if opposite_dir(v11, v22) {
                    // Poly2 leaves the vertex back along poly1's incoming
                    // edge: the intersection degenerates to the collinear
                    // overlap behind the vertex.
                    let back = if (p11 - p12).magnitude() < (p23 - p12).magnitude() {
                        p11
                    } else {
                        p23
                    };
                    vec![p12, back]
                } else if opposite_dir(v21, v12) {
                    // Mirror image: poly1 leaves back along poly2's incoming
                    // edge; the overlap lies ahead of the vertex.
                    let ahead_end = if (p21 - p12).magnitude() < (p13 - p12).magnitude() {
                        p21
                    } else {
                        p13
                    };
                    vec![p12, ahead_end]
                } else if cw_order(&[-v11, -v21, v22, v12]) || cw_order(&[-v11, v22, v12, -v21]) {
                    // Poly2's outgoing edge bounds the intersection here.
                    res.push(p12);
                    self.follow2(k + 1, res, i2)
                } else {
                    res.push(p12);
                    self.follow1(k + 1, res, i1)
                }
            } else if cw_order(&[-v11, v22, v12]) {
                res.push(p12);
                self.follow2(k + 1, res, i2)
            } else {
                res.push(p12);
                self.follow1(k + 1, res, i1)
            }
        } else if opposite_dir(v11, v21) {
            // Anti-parallel overlapping edges: the intersection is the
            // stretch both boundaries cover, a degenerate line.
            let first = if (p12 - p11).magnitude() < (p12 - p22).magnitude() {
                p11
            } else {
                p22
            };
            let second = if (p22 - p21).magnitude() < (p22 - p12).magnitude() {
                p21
            } else {
                p12
            };
            vec![first, second]
        } else if same_dir(v11, v21) {
            // Same-direction overlap: continue along whichever edge is
            // ahead of the shared stretch.
            if self.ahead(i1, i2) {
                res.push(p22);
                self.follow2(k + 1, res, i2)
            } else {
                res.push(p12);
                self.follow1(k + 1, res, i1)
            }
        } else {
            // General transversal crossing.
            let cp = directed_edge_collision(i1, i2, self.poly1, self.poly2)
                .expect("collision segment edges no longer intersect")
                .point;

            if cp != p12 && cp != p22 {
                if v11.cross(v21) > F::zero() {
                    res.push(cp);
                    self.follow2(k + 1, res, i2)
                } else {
                    res.push(cp);
                    self.follow1(k + 1, res, i1)
                }
            } else if cp == p12 {
                if cw_order(&[v21, -v11, v12, -v21]) {
                    vec![cp]
                } else if cw_order(&[-v11, v21, v12]) {
                    res.push(cp);
                    self.follow2(k + 1, res, i2)
                } else {
                    res.push(cp);
                    self.follow1(k + 1, res, i1)
                }
            } else {
                if cw_order(&[v11, -v21, v22, -v11]) {
                    vec![cp]
                } else if cw_order(&[-v21, v11, v22]) {
                    res.push(cp);
                    self.follow1(k + 1, res, i1)
                } else {
                    res.push(cp);
                    self.follow2(k + 1, res, i2)
                }
            }
        }
    }

    /// Whether poly1's edge head lies ahead of poly2's on their shared
    /// direction. Only meaningful for same-direction overlapping edges with
    /// distinct heads.
    fn ahead(&self, i1: usize, i2: usize) -> bool {
        let p11 = self.poly1[i1];
        let p12 = self.poly1[self.next1(i1)];
        let p22 = self.poly2[self.next2(i2)];
        (p12 - p11).dot(p22 - p12) < F::zero()
    }

    /// Follows poly1's boundary, appending vertices, until the next segment
    /// (or, once segments are exhausted, the closing segment) is reached on
    /// poly1.
    fn follow1(&self, k: usize, mut res: Vec<Point2<F>>, start: usize) -> Vec<Point2<F>> {
        let mut i1 = start;
        loop {
            if k < self.segments.len() {
                if self.segments[k].index1 == i1 {
                    return self.construct(k, res);
                }
            } else if self.closing.index1 == i1 {
                return res;
            }
            let next = self.next1(i1);
            Self::push_dedup(&mut res, self.poly1[next]);
            i1 = next;
        }
    }

    /// Follows poly2's boundary, appending vertices, until the next segment
    /// (or the closing segment) is reached on poly2.
    fn follow2(&self, k: usize, mut res: Vec<Point2<F>>, start: usize) -> Vec<Point2<F>> {
        let mut i2 = start;
        loop {
            if k < self.segments.len() {
                if self.segments[k].index2 == i2 {
                    return self.construct(k, res);
                }
            } else if self.closing.index2 == i2 {
                return res;
            }
            let next = self.next2(i2);
            Self::push_dedup(&mut res, self.poly2[next]);
            i2 = next;
        }
    }
}
