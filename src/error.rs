//! Error types for mask construction.

use thiserror::Error;

/// Errors that can occur when building a collision mask.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// The image source has no rows.
    #[error("image source has no rows")]
    EmptyImage,

    /// The image source rows do not all have the same width.
    #[error("inconsistent row width: expected {expected}, found {found}")]
    RaggedRows {
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// The image source contains no "on" pixels, so the mask would have no
    /// shape.
    #[error("image source has no on pixels")]
    BlankImage,

    /// A full mask was requested from an empty hull.
    #[error("mask hull must be non-empty")]
    EmptyHull,
}
