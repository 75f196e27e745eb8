//! Transform synthesis for collision objects.

use super::CollisionInfo;
use crate::bounds::Aabb2;
use crate::primitives::{Mat3, Point2};
use std::f64::consts::FRAC_PI_2;

/// Derives the world transform of a collision object.
///
/// The transform applies, in order: the origin shift, scaling, rotation, and
/// the translation to the object's position, combined into one matrix:
///
/// ```text
/// | cosA*sx      sy*sinA    -cosA*ox*sx - oy*sy*sinA + px   |
/// | cosA90*sx    sy*sinA90  -cosA90*ox*sx - oy*sy*sinA90 + py |
/// | 0            0          1                                |
/// ```
///
/// with `A90 = A + pi/2`. Untransformed objects (no rotation, unit scale)
/// take a translation-only fast path.
pub fn transform_matrix(info: &CollisionInfo) -> Mat3<f64> {
    let origin = info.mask().origin();
    let position = info.position();

    if info.angle() != 0.0 || info.scale_x() != 1.0 || info.scale_y() != 1.0 {
        let angle = info.angle();
        let angle90 = angle + FRAC_PI_2;
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        let cos_a90 = angle90.cos();
        let sin_a90 = angle90.sin();

        let sx = info.scale_x();
        let sy = info.scale_y();

        Mat3::new([
            cos_a * sx,
            sy * sin_a,
            -cos_a * origin.x * sx - origin.y * sy * sin_a + position.x,
            cos_a90 * sx,
            sy * sin_a90,
            -cos_a90 * origin.x * sx - origin.y * sy * sin_a90 + position.y,
            0.0,
            0.0,
            1.0,
        ])
    } else {
        Mat3::translation(position - origin)
    }
}

/// Bounding box of a transformed bounding box.
///
/// Transforms the four corners and re-wraps them axis-aligned; the result
/// over-approximates the transformed contents of `bbox`.
pub fn approximate_bounding_box(transform: &Mat3<f64>, bbox: &Aabb2<f64>) -> Aabb2<f64> {
    let corners = [
        bbox.min,
        bbox.max,
        Point2::new(bbox.min.x, bbox.max.y),
        Point2::new(bbox.max.x, bbox.min.y),
    ];

    let transformed = transform.transform_points(&corners);
    Aabb2::from_points(transformed).expect("four corners")
}
