//! Collision masks.
//!
//! A mask is the static shape of a collision object: an origin point, an
//! axis-aligned bounding box, a convex hull, and optionally a binary image.
//! Without an image the mask is *full*: the hull itself is the shape. With
//! an image, the hull over-approximates the on pixels and the image decides
//! the exact shape.

mod image;

pub use image::{BinaryImage, BitImage, RowsImage};

use crate::bounds::Aabb2;
use crate::error::MaskError;
use crate::hull::convex_hull;
use crate::polygon::ConvexPolygon;
use crate::primitives::Point2;
use std::fmt;
use std::sync::Arc;

/// A shared, immutable binary image.
pub type SharedImage = Arc<dyn BinaryImage + Send + Sync>;

/// The static shape of a collision object.
///
/// Masks are immutable and cheap to clone; many collision objects may share
/// one mask. A mask is never empty: construction fails rather than producing
/// a shape with no points.
#[derive(Clone)]
pub struct Mask {
    origin: Point2<f64>,
    bounding_box: Aabb2<f64>,
    hull: ConvexPolygon<f64>,
    image: Option<SharedImage>,
}

impl Mask {
    /// Builds a mask from a row-major grid of booleans.
    ///
    /// The grid must be non-empty with consistent row widths and at least
    /// one on pixel. The convex hull is computed over the four unit-square
    /// corners of every on pixel, so it covers pixel areas, not just pixel
    /// centers.
    pub fn from_rows(rows: Vec<Vec<bool>>, origin: Point2<f64>) -> Result<Self, MaskError> {
        let image = RowsImage::new(rows)?;
        Self::from_image(Arc::new(image), origin)
    }

    /// Builds a mask over an existing binary image.
    ///
    /// Fails when the image has no on pixels.
    pub fn from_image(image: SharedImage, origin: Point2<f64>) -> Result<Self, MaskError> {
        let mut points: Vec<Point2<f64>> = Vec::new();
        for y in 0..image.height() {
            for x in 0..image.width() {
                if image.has_point(x, y) {
                    let (xf, yf) = (x as f64, y as f64);
                    points.push(Point2::new(xf, yf));
                    points.push(Point2::new(xf + 1.0, yf));
                    points.push(Point2::new(xf, yf + 1.0));
                    points.push(Point2::new(xf + 1.0, yf + 1.0));
                }
            }
        }

        if points.is_empty() {
            return Err(MaskError::BlankImage);
        }

        let bounding_box = Aabb2::from_points(points.iter().copied()).expect("points non-empty");
        let hull = convex_hull(&points);

        Ok(Self {
            origin,
            bounding_box,
            hull,
            image: Some(image),
        })
    }

    /// Builds a full mask from a non-empty convex hull.
    pub fn from_hull(hull: ConvexPolygon<f64>, origin: Point2<f64>) -> Result<Self, MaskError> {
        if hull.is_empty() {
            return Err(MaskError::EmptyHull);
        }

        let bounding_box =
            Aabb2::from_points(hull.points().iter().copied()).expect("hull non-empty");

        Ok(Self {
            origin,
            bounding_box,
            hull,
            image: None,
        })
    }

    /// The origin point of the mask.
    ///
    /// A mask point at `(1, 2)` with origin `(5, 5)` sits at `(-4, -3)` in
    /// the collision object's local frame.
    #[inline]
    pub fn origin(&self) -> Point2<f64> {
        self.origin
    }

    /// The axis-aligned bounding box; never under-approximates the hull or
    /// the image.
    #[inline]
    pub fn bounding_box(&self) -> Aabb2<f64> {
        self.bounding_box
    }

    /// The convex hull: exact shape for a full mask, over-approximation of
    /// the on pixels otherwise. Never `Empty`.
    #[inline]
    pub fn hull(&self) -> &ConvexPolygon<f64> {
        &self.hull
    }

    /// The binary image, if the mask has one.
    #[inline]
    pub fn image(&self) -> Option<&SharedImage> {
        self.image.as_ref()
    }

    /// Whether the mask is full: no binary image, every hull point counts
    /// as on.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.image.is_none()
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mask")
            .field("origin", &self.origin)
            .field("bounding_box", &self.bounding_box)
            .field("hull", &self.hull)
            .field("full", &self.is_full())
            .finish()
    }
}
