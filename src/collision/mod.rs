//! Pairwise pixel-perfect collision detection.
//!
//! A [`CollisionInfo`] places a shared [`Mask`] in the world with a
//! position, rotation, and per-axis scale. [`collides`] decides exactly
//! whether two placed objects overlap in any pixel.

mod pairwise;
mod transform;

pub use pairwise::collides;
pub use transform::{approximate_bounding_box, transform_matrix};

use crate::mask::Mask;
use crate::primitives::Point2;
use std::sync::Arc;

/// A placed collision object: a mask plus its world transform data and an
/// identifier.
///
/// The transform applies origin shift, scaling, rotation, and translation,
/// in that order. The angle is in radians; scale factors are fractions of
/// the original size (1.0 is unscaled). Ids only matter for forming
/// [`CollisionPair`]s; the pairwise test itself ignores them.
#[derive(Debug, Clone)]
pub struct CollisionInfo {
    mask: Arc<Mask>,
    position: Point2<f64>,
    angle: f64,
    scale_x: f64,
    scale_y: f64,
    id: i32,
}

impl CollisionInfo {
    /// Creates a placed collision object.
    pub fn new(
        mask: Arc<Mask>,
        position: Point2<f64>,
        angle: f64,
        scale_x: f64,
        scale_y: f64,
        id: i32,
    ) -> Self {
        Self {
            mask,
            position,
            angle,
            scale_x,
            scale_y,
            id,
        }
    }

    /// The object's mask.
    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// The world position.
    #[inline]
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// The rotation angle in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The x scale factor.
    #[inline]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// The y scale factor.
    #[inline]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// The object's identifier.
    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }
}

/// An unordered pair of distinct collision object ids.
///
/// The smaller id is always stored first, so pairs compare equal regardless
/// of construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    id1: i32,
    id2: i32,
}

impl CollisionPair {
    /// Creates a pair from two distinct ids, or `None` when they are equal.
    pub fn new(id1: i32, id2: i32) -> Option<Self> {
        if id1 == id2 {
            None
        } else if id1 < id2 {
            Some(Self { id1, id2 })
        } else {
            Some(Self { id1: id2, id2: id1 })
        }
    }

    /// The smaller id.
    #[inline]
    pub fn id1(&self) -> i32 {
        self.id1
    }

    /// The larger id.
    #[inline]
    pub fn id2(&self) -> i32 {
        self.id2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_unordered() {
        let a = CollisionPair::new(3, 7).unwrap();
        let b = CollisionPair::new(7, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.id1(), 3);
        assert_eq!(a.id2(), 7);
    }

    #[test]
    fn test_pair_rejects_equal_ids() {
        assert!(CollisionPair::new(5, 5).is_none());
    }
}
