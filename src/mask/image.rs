//! Binary image storage.

use crate::error::MaskError;

/// A 2D grid of on/off pixels.
///
/// The layout behind `has_point` is an implementation choice; the two
/// realizations in this module are interchangeable.
pub trait BinaryImage {
    /// Width of the grid in pixels.
    fn width(&self) -> u32;

    /// Height of the grid in pixels.
    fn height(&self) -> u32;

    /// Whether the pixel at `(x, y)` is on. Coordinates must be inside the
    /// grid.
    fn has_point(&self, x: u32, y: u32) -> bool;
}

/// Validates an image source: at least one row, all rows the same width.
fn validate(rows: &[Vec<bool>]) -> Result<(u32, u32), MaskError> {
    let height = rows.len();
    if height == 0 {
        return Err(MaskError::EmptyImage);
    }
    let width = rows[0].len();
    for row in rows {
        if row.len() != width {
            return Err(MaskError::RaggedRows {
                expected: width,
                found: row.len(),
            });
        }
    }
    Ok((width as u32, height as u32))
}

/// A binary image stored as a row of rows of booleans.
#[derive(Debug, Clone, PartialEq)]
pub struct RowsImage {
    rows: Vec<Vec<bool>>,
    width: u32,
    height: u32,
}

impl RowsImage {
    /// Builds an image from row-major boolean rows.
    ///
    /// Fails when there are no rows or the rows have inconsistent widths.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, MaskError> {
        let (width, height) = validate(&rows)?;
        Ok(Self {
            rows,
            width,
            height,
        })
    }
}

impl BinaryImage for RowsImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn has_point(&self, x: u32, y: u32) -> bool {
        self.rows[y as usize][x as usize]
    }
}

/// A binary image bit-packed into 64-bit words.
#[derive(Debug, Clone, PartialEq)]
pub struct BitImage {
    bits: Vec<u64>,
    width: u32,
    height: u32,
}

impl BitImage {
    /// Builds a bit-packed image from row-major boolean rows.
    ///
    /// Fails when there are no rows or the rows have inconsistent widths.
    pub fn new(rows: &[Vec<bool>]) -> Result<Self, MaskError> {
        let (width, height) = validate(rows)?;

        let total = width as usize * height as usize;
        let mut bits = vec![0u64; total.div_ceil(64)];
        for (y, row) in rows.iter().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                if on {
                    let index = x + y * width as usize;
                    bits[index / 64] |= 1 << (index % 64);
                }
            }
        }

        Ok(Self {
            bits,
            width,
            height,
        })
    }
}

impl BinaryImage for BitImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn has_point(&self, x: u32, y: u32) -> bool {
        let index = x as usize + y as usize * self.width as usize;
        self.bits[index / 64] & (1 << (index % 64)) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: usize, height: usize) -> Vec<Vec<bool>> {
        (0..height)
            .map(|y| (0..width).map(|x| (x + y) % 2 == 0).collect())
            .collect()
    }

    #[test]
    fn test_rows_image_lookup() {
        let image = RowsImage::new(vec![
            vec![true, false],
            vec![false, true],
            vec![true, true],
        ])
        .unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 3);
        assert!(image.has_point(0, 0));
        assert!(!image.has_point(1, 0));
        assert!(image.has_point(1, 2));
    }

    #[test]
    fn test_empty_source_rejected() {
        assert_eq!(RowsImage::new(vec![]), Err(MaskError::EmptyImage));
        assert_eq!(BitImage::new(&[]), Err(MaskError::EmptyImage));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![true, false], vec![true]];
        assert_eq!(
            RowsImage::new(rows.clone()),
            Err(MaskError::RaggedRows {
                expected: 2,
                found: 1
            })
        );
        assert!(BitImage::new(&rows).is_err());
    }

    #[test]
    fn test_bit_image_matches_rows_image() {
        let rows = checkerboard(67, 5);
        let simple = RowsImage::new(rows.clone()).unwrap();
        let packed = BitImage::new(&rows).unwrap();

        assert_eq!(simple.width(), packed.width());
        assert_eq!(simple.height(), packed.height());
        for y in 0..simple.height() {
            for x in 0..simple.width() {
                assert_eq!(
                    simple.has_point(x, y),
                    packed.has_point(x, y),
                    "mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }
}
