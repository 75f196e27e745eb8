//! Convex CCW polygons and their intersection engine.
//!
//! The centerpiece is [`intersection`], which computes the exact intersection
//! of two convex polygons (any mix of the `Empty`/`Point`/`Line`/`Polygon`
//! variants) in linear time via rotating calipers.
//!
//! # Example
//!
//! ```
//! use pixelcoll::polygon::{intersection, ConvexPolygon, HullIntersection};
//! use pixelcoll::Point2;
//!
//! let a = ConvexPolygon::Polygon(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//! let b = a.translate(pixelcoll::Vec2::new(1.0, 1.0));
//!
//! match intersection(&a, &b, None, None) {
//!     HullIntersection::Region(region) => assert_eq!(region.points().len(), 4),
//!     HullIntersection::Decided(_) => unreachable!(),
//! }
//! ```

mod calipers;
mod core;
mod intersect;
mod segment;
mod weave;

pub use self::core::{CollisionSegment, ConvexPolygon};
pub use intersect::{intersection, HullIntersection};
pub use segment::{directed_edge_collision, point_on_segment, segment_intersection};
