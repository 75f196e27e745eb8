//! Pixel rasterization of convex regions with early-exit predicates.
//!
//! The rasterizer turns a convex region into the set of pixels whose unit
//! squares it may touch, strictly *over-approximating* the region: a pixel
//! whose area intersects the region is never skipped. The outline is pushed
//! one pixel away from the region's middle on every edge, which keeps the
//! outline connected and outside-or-on the true boundary; a horizontal span
//! fill between outline extremes then covers the interior.
//!
//! Pixel `(x, y)` addresses the area `[x, x+1) x [y, y+1)`.

mod bresenham;

pub use bresenham::bresenham;

use crate::polygon::ConvexPolygon;
use crate::primitives::{PixelPoint, Point2, Vec2};
use std::collections::{BTreeMap, BTreeSet};

/// Tests whether any pixel overlapping the region satisfies the predicate.
///
/// The region is first shifted by (-0.5, -0.5) so that rounding vertices
/// lands on pixel centers, preserving the area semantics above. The outline
/// is scanned first, then the span fill; both stop at the first pixel where
/// `test` returns `true`, and no further pixels are evaluated after a hit.
pub fn collision_test<T>(region: &ConvexPolygon<f64>, mut test: T) -> bool
where
    T: FnMut(PixelPoint) -> bool,
{
    if region.is_empty() {
        return false;
    }

    let corrected = region.translate(Vec2::new(-0.5, -0.5));

    match outline_with_test(&corrected, &mut test) {
        None => true,
        Some(outline) => fill_with_test(&outline, &mut test),
    }
}

/// Rasterizes the outline of a non-empty convex region.
///
/// Each boundary edge is rasterized with outward bias (see [`edge_pixels`]);
/// for the `Polygon` variant the closing edge back to the first vertex is
/// included. Returns the empty set for `Empty`.
pub fn outline(region: &ConvexPolygon<f64>) -> BTreeSet<PixelPoint> {
    let Some(middle) = region.middle_point() else {
        return BTreeSet::new();
    };

    let coords = closed_coordinates(region);
    let mut pixels = BTreeSet::new();

    if coords.len() == 1 {
        pixels.extend(edge_pixels(coords[0], coords[0], middle));
    } else {
        for pair in coords.windows(2) {
            pixels.extend(edge_pixels(pair[0], pair[1], middle));
        }
    }

    pixels
}

/// Rasterizes the outline, applying the predicate to each pixel as edges are
/// produced.
///
/// Returns `None` as soon as the predicate holds for a pixel; otherwise the
/// complete outline set.
pub fn outline_with_test<T>(
    region: &ConvexPolygon<f64>,
    test: &mut T,
) -> Option<BTreeSet<PixelPoint>>
where
    T: FnMut(PixelPoint) -> bool,
{
    let Some(middle) = region.middle_point() else {
        // An empty region has an empty outline and no pixels to hit.
        return Some(BTreeSet::new());
    };

    let coords = closed_coordinates(region);
    let mut pixels = BTreeSet::new();

    let mut scan_edge = |a: Point2<f64>, b: Point2<f64>, pixels: &mut BTreeSet<PixelPoint>| {
        let edge = edge_pixels(a, b, middle);
        for &pixel in &edge {
            if test(pixel) {
                return true;
            }
        }
        pixels.extend(edge);
        false
    };

    if coords.len() == 1 {
        if scan_edge(coords[0], coords[0], &mut pixels) {
            return None;
        }
    } else {
        for pair in coords.windows(2) {
            if scan_edge(pair[0], pair[1], &mut pixels) {
                return None;
            }
        }
    }

    Some(pixels)
}

/// Fills a connected outline with horizontal spans.
///
/// Pixels are grouped by row; each row contributes the full inclusive span
/// from its smallest to its largest x. A disconnected outline has no
/// meaningful fill, and the result is then unspecified; the intersection
/// engine only produces connected outlines.
pub fn fill(outline: &BTreeSet<PixelPoint>) -> BTreeSet<PixelPoint> {
    let mut filled = BTreeSet::new();
    for (y, (min_x, max_x)) in row_spans(outline) {
        for x in min_x..=max_x {
            filled.insert(PixelPoint::new(x, y));
        }
    }
    filled
}

/// Fills the outline row by row, stopping at the first pixel where the
/// predicate holds.
///
/// Rows are visited in ascending y, pixels within a row in ascending x.
pub fn fill_with_test<T>(outline: &BTreeSet<PixelPoint>, test: &mut T) -> bool
where
    T: FnMut(PixelPoint) -> bool,
{
    for (y, (min_x, max_x)) in row_spans(outline) {
        for x in min_x..=max_x {
            if test(PixelPoint::new(x, y)) {
                return true;
            }
        }
    }
    false
}

/// Per-row inclusive x extents of the outline.
fn row_spans(outline: &BTreeSet<PixelPoint>) -> BTreeMap<i32, (i32, i32)> {
    let mut spans: BTreeMap<i32, (i32, i32)> = BTreeMap::new();
    for pixel in outline {
        spans
            .entry(pixel.y)
            .and_modify(|(min_x, max_x)| {
                *min_x = (*min_x).min(pixel.x);
                *max_x = (*max_x).max(pixel.x);
            })
            .or_insert((pixel.x, pixel.x));
    }
    spans
}

/// The region's vertex list, with the closing vertex repeated for proper
/// polygons so the edge back to the start is rasterized too.
fn closed_coordinates(region: &ConvexPolygon<f64>) -> Vec<Point2<f64>> {
    let mut coords = region.points();
    if matches!(region, ConvexPolygon::Polygon(_)) {
        coords.push(coords[0]);
    }
    coords
}

/// Rasterizes one boundary edge from `c1` to `c2`, biased one pixel away
/// from `middle`.
///
/// The side classification runs in double precision before any rounding, so
/// the middle cannot be misclassified by the integer snap. Both rounded
/// endpoints are always included. The offset direction depends on the edge's
/// octant: axis-aligned edges shift along their free axis only, diagonal
/// edges shift both coordinates away from the middle.
fn edge_pixels(c1: Point2<f64>, c2: Point2<f64>, middle: Point2<f64>) -> BTreeSet<PixelPoint> {
    let side = side_of_middle(c1, c2, middle);

    let x1 = round(c1.x);
    let y1 = round(c1.y);
    let x2 = round(c2.x);
    let y2 = round(c2.y);

    let mut pixels: BTreeSet<PixelPoint> =
        [PixelPoint::new(x1, y1), PixelPoint::new(x2, y2)].into();

    let dx = x2 - x1;
    let dy = y2 - y1;

    let line = if dx == 0 && dy == 0 {
        vec![PixelPoint::new(x1, y1)]
    } else if dx == 0 {
        bresenham(
            PixelPoint::new(x1 + side, y1),
            PixelPoint::new(x2 + side, y2),
        )
    } else if dy == 0 {
        bresenham(
            PixelPoint::new(x1, y1 + side),
            PixelPoint::new(x2, y2 + side),
        )
    } else if (dx > 0) == (dy > 0) {
        bresenham(
            PixelPoint::new(x1 - side, y1 + side),
            PixelPoint::new(x2 - side, y2 + side),
        )
    } else {
        bresenham(
            PixelPoint::new(x1 + side, y1 + side),
            PixelPoint::new(x2 + side, y2 + side),
        )
    };

    pixels.extend(line);
    pixels
}

/// Which side of the directed line (c1, c2) the middle lies on: +1 when the
/// line is above the middle, -1 below, 0 when the middle is on the line.
/// Vertical lines count as "above" when right of the middle.
fn side_of_middle(c1: Point2<f64>, c2: Point2<f64>, middle: Point2<f64>) -> i32 {
    let xd = c2.x - c1.x;
    let yd = c2.y - c1.y;

    if xd != 0.0 {
        let line_y_at_middle = (middle.x - c1.x) * yd / xd + c1.y;
        if line_y_at_middle > middle.y {
            1
        } else if line_y_at_middle < middle.y {
            -1
        } else {
            0
        }
    } else if c1.x > middle.x {
        1
    } else if c1.x < middle.x {
        -1
    } else {
        0
    }
}

fn round(a: f64) -> i32 {
    a.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> ConvexPolygon<f64> {
        ConvexPolygon::Polygon(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    #[test]
    fn test_outline_point_region() {
        let region = ConvexPolygon::Point(Point2::new(2.3, 3.6));
        let pixels = outline(&region);
        assert_eq!(pixels, [PixelPoint::new(2, 4)].into());
    }

    #[test]
    fn test_outline_square_is_pushed_outward() {
        let region = square(0.0, 0.0, 3.0, 3.0);
        let pixels = outline(&region);
        // The biased outline must lie on or outside the region boundary, so
        // the whole boundary frame of [0,3]^2 cannot be strictly inside it.
        for x in 0..=3 {
            for y in 0..=3 {
                let interior = x >= 1 && x <= 2 && y >= 1 && y <= 2;
                if interior {
                    assert!(!pixels.contains(&PixelPoint::new(x, y)));
                }
            }
        }
        // Offset rows/columns are present.
        assert!(pixels.contains(&PixelPoint::new(0, -1)));
        assert!(pixels.contains(&PixelPoint::new(0, 4)));
        assert!(pixels.contains(&PixelPoint::new(-1, 0)));
        assert!(pixels.contains(&PixelPoint::new(4, 0)));
    }

    #[test]
    fn test_fill_covers_square_interior() {
        let region = square(0.0, 0.0, 3.0, 3.0);
        let filled = fill(&outline(&region));
        for x in 0..=3 {
            for y in 0..=3 {
                assert!(
                    filled.contains(&PixelPoint::new(x, y)),
                    "missing pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_collision_test_over_approximates() {
        // Every pixel whose unit square intersects [0,3]^2 must be offered
        // to the predicate: that's exactly x, y in 0..=3.
        let region = square(0.0, 0.0, 3.0, 3.0);
        let mut seen = BTreeSet::new();
        let hit = collision_test(&region, |p| {
            seen.insert(p);
            false
        });
        assert!(!hit);
        for x in 0..=3 {
            for y in 0..=3 {
                assert!(seen.contains(&PixelPoint::new(x, y)), "pixel ({}, {}) skipped", x, y);
            }
        }
    }

    #[test]
    fn test_collision_test_triangle_over_approximates() {
        let region = ConvexPolygon::Polygon(vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 5.0),
        ]);
        let mut seen = BTreeSet::new();
        collision_test(&region, |p| {
            seen.insert(p);
            false
        });
        // Any pixel whose unit square meets the triangle x + y <= 5,
        // x, y >= 0 must be seen.
        for x in 0..=5 {
            for y in 0..=5 {
                if (x + y) as f64 <= 5.0 {
                    assert!(seen.contains(&PixelPoint::new(x, y)), "pixel ({}, {}) skipped", x, y);
                }
            }
        }
    }

    #[test]
    fn test_collision_test_finds_hit() {
        let region = square(0.0, 0.0, 4.0, 4.0);
        assert!(collision_test(&region, |p| p == PixelPoint::new(2, 2)));
        assert!(!collision_test(&region, |p| p == PixelPoint::new(50, 50)));
    }

    #[test]
    fn test_collision_test_empty_region() {
        assert!(!collision_test(&ConvexPolygon::Empty, |_| true));
    }

    #[test]
    fn test_early_exit_stops_evaluating() {
        let region = square(0.0, 0.0, 6.0, 6.0);

        // Count how many pixels an always-true predicate sees: exactly one.
        let mut calls = 0;
        let hit = collision_test(&region, |_| {
            calls += 1;
            true
        });
        assert!(hit);
        assert_eq!(calls, 1);

        // A predicate hitting only in the interior must not be called again
        // after its first true.
        let mut after_hit = 0;
        let mut hit_seen = false;
        collision_test(&region, |p| {
            if hit_seen {
                after_hit += 1;
            }
            if p == PixelPoint::new(3, 3) {
                hit_seen = true;
                return true;
            }
            false
        });
        assert!(hit_seen);
        assert_eq!(after_hit, 0);
    }

    #[test]
    fn test_fill_with_test_row_order() {
        let outline: BTreeSet<PixelPoint> = [
            PixelPoint::new(0, 0),
            PixelPoint::new(2, 0),
            PixelPoint::new(0, 1),
            PixelPoint::new(2, 1),
        ]
        .into();

        let mut visited = Vec::new();
        fill_with_test(&outline, &mut |p| {
            visited.push(p);
            false
        });
        assert_eq!(
            visited,
            vec![
                PixelPoint::new(0, 0),
                PixelPoint::new(1, 0),
                PixelPoint::new(2, 0),
                PixelPoint::new(0, 1),
                PixelPoint::new(1, 1),
                PixelPoint::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_line_region_rasterizes_without_closing_edge() {
        let region = ConvexPolygon::Line(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let pixels = outline(&region);
        // One biased run plus the two rounded endpoints; a closing edge
        // would not add anything else for a line, but the endpoints must be
        // there.
        assert!(pixels.contains(&PixelPoint::new(0, 0)));
        assert!(pixels.contains(&PixelPoint::new(4, 0)));
    }

    #[test]
    fn test_side_of_middle() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        assert_eq!(side_of_middle(a, b, Point2::new(2.0, 1.0)), -1);
        assert_eq!(side_of_middle(a, b, Point2::new(2.0, -1.0)), 1);
        assert_eq!(side_of_middle(a, b, Point2::new(2.0, 0.0)), 0);

        // Vertical edge: "above" means right of the middle.
        let c = Point2::new(1.0, 0.0);
        let d = Point2::new(1.0, 4.0);
        assert_eq!(side_of_middle(c, d, Point2::new(0.0, 2.0)), 1);
        assert_eq!(side_of_middle(c, d, Point2::new(2.0, 2.0)), -1);
    }
}
