//! The pairwise collision test.

use super::transform::{approximate_bounding_box, transform_matrix};
use super::CollisionInfo;
use crate::mask::Mask;
use crate::polygon::{intersection, ConvexPolygon, HullIntersection};
use crate::primitives::{Mat3, PixelPoint, Point3};
use crate::raster::collision_test;

/// Decides whether two placed collision objects overlap in any pixel.
///
/// The test narrows in stages: approximate bounding boxes of the transformed
/// masks, then the exact intersection of the transformed convex hulls, and
/// finally, for masks with binary images, a pixel walk over the overlap
/// region. Each pixel in the region is mapped back through both inverse
/// transforms and accepted when both masks are on there; the walk stops at
/// the first such pixel.
///
/// An object whose transform is singular (for example a zero scale factor)
/// has no area and never collides.
pub fn collides(info1: &CollisionInfo, info2: &CollisionInfo) -> bool {
    let mask1 = info1.mask();
    let mask2 = info2.mask();

    let t1 = transform_matrix(info1);
    let t2 = transform_matrix(info2);

    let (inv1, inv2) = match (t1.inverse(), t2.inverse()) {
        (Some(inv1), Some(inv2)) => (inv1, inv2),
        _ => return false,
    };

    let hull1 = transformed_hull(&t1, mask1);
    let hull2 = transformed_hull(&t2, mask2);

    let approx1 = approximate_bounding_box(&t1, &mask1.bounding_box());
    let approx2 = approximate_bounding_box(&t2, &mask2.bounding_box());

    match intersection(&hull1, &hull2, Some(approx1), Some(approx2)) {
        HullIntersection::Decided(overlap) => overlap,
        HullIntersection::Region(region) => collision_test(&region, |pixel| {
            let world = Point3::homogeneous(pixel.x as f64, pixel.y as f64);
            mask_contains(mask1, inv1.apply(world)) && mask_contains(mask2, inv2.apply(world))
        }),
    }
}

/// Transforms a mask's convex hull into world space, restoring CCW order if
/// the transform mirrored it.
fn transformed_hull(transform: &Mat3<f64>, mask: &Mask) -> ConvexPolygon<f64> {
    let points = transform.transform_points(&mask.hull().points());

    if points.len() < 3 {
        return ConvexPolygon::from_points(points);
    }

    let v1 = points[1] - points[0];
    let v2 = points[2] - points[0];
    let turn = v1.cross(v2);

    if turn == 0.0 {
        // An invertible transform cannot flatten a proper hull.
        panic!("transformed convex hull has collinear leading vertices");
    }

    if turn > 0.0 {
        ConvexPolygon::Polygon(points)
    } else {
        let mut reversed = points;
        reversed.reverse();
        ConvexPolygon::Polygon(reversed)
    }
}

/// Whether a back-transformed point falls on the mask.
///
/// Full masks contain every point handed to them (the hull test already
/// happened at the intersection stage). Image masks round to the nearest
/// pixel and consult the binary image, rejecting out-of-bounds coordinates.
fn mask_contains(mask: &Mask, local: Point3<f64>) -> bool {
    match mask.image() {
        None => true,
        Some(image) => {
            let pixel = PixelPoint::new(local.x.round() as i32, local.y.round() as i32);
            pixel.x >= 0
                && (pixel.x as u32) < image.width()
                && pixel.y >= 0
                && (pixel.y as u32) < image.height()
                && image.has_point(pixel.x as u32, pixel.y as u32)
        }
    }
}
