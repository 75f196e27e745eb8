//! Convex hull computation.
//!
//! # Example
//!
//! ```
//! use pixelcoll::hull::convex_hull;
//! use pixelcoll::{ConvexPolygon, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.points().len(), 4);
//! ```

use crate::polygon::ConvexPolygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull of a set of points using Andrew's monotone chain
/// algorithm, returning it as a convex CCW polygon variant.
///
/// The computation is geometrically robust: any input is accepted, including
/// duplicates, collinear runs, and fewer than three points. Degenerate inputs
/// collapse to the matching variant (`Empty`, `Point`, or `Line`), and a
/// proper hull has no duplicate vertices and no three collinear vertices, in
/// CCW order.
///
/// # Complexity
///
/// O(n log n) due to sorting.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> ConvexPolygon<F> {
    // Sort lexicographically and drop exact duplicates; the chain scan
    // assumes strictly increasing point sequences.
    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort_by(lexicographic);
    sorted.dedup();

    if sorted.len() <= 2 {
        return ConvexPolygon::from_points(sorted);
    }

    // Build lower hull
    let mut lower: Vec<Point2<F>> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= F::zero()
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Build upper hull
    let mut upper: Vec<Point2<F>> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= F::zero()
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Remove last point of each half because it's repeated
    lower.pop();
    upper.pop();

    lower.extend(upper);
    ConvexPolygon::from_points(lower)
}

fn lexicographic<F: Float>(a: &Point2<F>, b: &Point2<F>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Cross product of vectors OA and OB where O is the origin point.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
fn cross<F: Float>(o: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (a - o).cross(b - o)
}
