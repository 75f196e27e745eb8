//! pixelcoll - Pixel-perfect 2D collision detection
//!
//! Collision between two objects is decided in two exact stages: the convex
//! hulls of the objects are intersected with a linear-time rotating-calipers
//! walk, and the resulting overlap region is rasterized pixel by pixel,
//! testing each pixel against both objects' binary masks until one hits.
//! Objects carry an affine transform (origin shift, scaling, rotation,
//! translation); masks without a binary image are treated as filled shapes.
//!
//! ```
//! use pixelcoll::{collides, CollisionInfo, Mask, Point2};
//! use std::sync::Arc;
//!
//! let block = Arc::new(
//!     Mask::from_rows(vec![vec![true, true], vec![true, true]], Point2::origin()).unwrap(),
//! );
//!
//! let a = CollisionInfo::new(Arc::clone(&block), Point2::new(0.0, 0.0), 0.0, 1.0, 1.0, 1);
//! let b = CollisionInfo::new(Arc::clone(&block), Point2::new(1.0, 1.0), 0.0, 1.0, 1.0, 2);
//! let far = CollisionInfo::new(block, Point2::new(10.0, 0.0), 0.0, 1.0, 1.0, 3);
//!
//! assert!(collides(&a, &b));
//! assert!(!collides(&a, &far));
//! ```

pub mod bounds;
pub mod collision;
pub mod error;
pub mod hull;
pub mod mask;
pub mod polygon;
pub mod primitives;
pub mod raster;

pub use bounds::Aabb2;
pub use collision::{collides, CollisionInfo, CollisionPair};
pub use error::MaskError;
pub use mask::{BinaryImage, BitImage, Mask, RowsImage};
pub use polygon::{intersection, ConvexPolygon, HullIntersection};
pub use primitives::{Mat3, PixelPoint, Point2, Point3, Vec2};
