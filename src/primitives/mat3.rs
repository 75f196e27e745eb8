//! 3x3 matrix for 2D homogeneous transforms.

use super::{Point2, Point3, Vec2};
use num_traits::Float;
use std::ops::Mul;

/// A 3x3 matrix of scalars, stored row-major.
///
/// Used for 2D affine transforms in homogeneous form:
/// ```text
/// | m0 m1 m2 |   | x |
/// | m3 m4 m5 | * | y |
/// | m6 m7 m8 |   | 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3<F> {
    m: [F; 9],
}

impl<F: Float> Mat3<F> {
    /// Creates a matrix from its nine row-major entries.
    #[inline]
    pub fn new(m: [F; 9]) -> Self {
        Self { m }
    }

    /// Creates the identity matrix.
    pub fn identity() -> Self {
        let o = F::one();
        let z = F::zero();
        Self::new([o, z, z, z, o, z, z, z, o])
    }

    /// Creates a pure translation matrix.
    pub fn translation(offset: Vec2<F>) -> Self {
        let o = F::one();
        let z = F::zero();
        Self::new([o, z, offset.x, z, o, offset.y, z, z, o])
    }

    /// Returns the row-major entries.
    #[inline]
    pub fn entries(&self) -> &[F; 9] {
        &self.m
    }

    /// Multiplies the matrix with a 3-vector, as `M * v`.
    pub fn apply(&self, p: Point3<F>) -> Point3<F> {
        let d = &self.m;
        Point3::new(
            d[0] * p.x + d[1] * p.y + d[2] * p.z,
            d[3] * p.x + d[4] * p.y + d[5] * p.z,
            d[6] * p.x + d[7] * p.y + d[8] * p.z,
        )
    }

    /// Transforms a 2D point, treating it as `(x, y, 1)` and reading back
    /// only the first two rows.
    ///
    /// Valid for affine matrices whose bottom row is `(0, 0, 1)`.
    #[inline]
    pub fn transform_point(&self, p: Point2<F>) -> Point2<F> {
        let d = &self.m;
        Point2::new(
            d[0] * p.x + d[1] * p.y + d[2],
            d[3] * p.x + d[4] * p.y + d[5],
        )
    }

    /// Transforms a sequence of 2D points as by [`Mat3::transform_point`].
    pub fn transform_points(&self, points: &[Point2<F>]) -> Vec<Point2<F>> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// Computes the determinant.
    pub fn determinant(&self) -> F {
        let [a, b, c, d, e, f, g, h, k] = self.m;
        a * (e * k - f * h) + b * (f * g - k * d) + c * (d * h - e * g)
    }

    /// Whether the matrix is invertible (non-zero determinant, exact test).
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != F::zero()
    }

    /// Computes the inverse via the classical adjugate, or `None` when the
    /// determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let [a, b, c, d, e, f, g, h, k] = self.m;

        let det = a * (e * k - f * h) + b * (f * g - k * d) + c * (d * h - e * g);
        if det == F::zero() {
            return None;
        }

        let a1 = e * k - f * h;
        let b1 = f * g - d * k;
        let c1 = d * h - e * g;
        let d1 = c * h - b * k;
        let e1 = a * k - c * g;
        let f1 = g * b - a * h;
        let g1 = b * f - c * e;
        let h1 = c * d - a * f;
        let k1 = a * e - b * d;

        Some(Self::new([
            a1 / det,
            d1 / det,
            g1 / det,
            b1 / det,
            e1 / det,
            h1 / det,
            c1 / det,
            f1 / det,
            k1 / det,
        ]))
    }
}

impl<F: Float> Mul for Mat3<F> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let d = &self.m;
        let e = &other.m;
        Self::new([
            d[0] * e[0] + d[1] * e[3] + d[2] * e[6],
            d[0] * e[1] + d[1] * e[4] + d[2] * e[7],
            d[0] * e[2] + d[1] * e[5] + d[2] * e[8],
            d[3] * e[0] + d[4] * e[3] + d[5] * e[6],
            d[3] * e[1] + d[4] * e[4] + d[5] * e[7],
            d[3] * e[2] + d[4] * e[5] + d[5] * e[8],
            d[6] * e[0] + d[7] * e[3] + d[8] * e[6],
            d[6] * e[1] + d[7] * e[4] + d[8] * e[7],
            d[6] * e[2] + d[7] * e[5] + d[8] * e[8],
        ])
    }
}
