//! Error types for grid operations.

use crate::GridCoord;

/// Errors that can occur while constructing or indexing a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// A coordinate lies outside the grid extent.
    #[error("coordinate {coord} is out of bounds")]
    OutOfBounds {
        /// The coordinate that was out of bounds.
        coord: GridCoord,
    },

    /// A node identifier is not below the cell count.
    #[error("node id {id} is out of bounds for {len} cells")]
    IdOutOfBounds {
        /// The offending identifier.
        id: usize,
        /// Total number of cells.
        len: usize,
    },

    /// A coordinate has a different number of axes than the grid.
    #[error("coordinate {coord} has {} axes, grid has {expected}", coord.ndim())]
    DimensionMismatch {
        /// The offending coordinate.
        coord: GridCoord,
        /// Number of axes of the grid.
        expected: usize,
    },

    /// The grid extents are invalid (wrong axis count, zero or too large).
    #[error("invalid grid dimensions: {0:?}")]
    InvalidDimensions(Vec<usize>),

    /// Two arrays that must share a shape do not.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Expected extents.
        expected: Vec<usize>,
        /// Actual extents.
        actual: Vec<usize>,
    },

    /// A data buffer length does not match the cell count.
    #[error("data length {actual} does not match cell count {expected}")]
    DataLength {
        /// Expected number of cells.
        expected: usize,
        /// Provided number of values.
        actual: usize,
    },

    /// Integer overflow occurred while computing the cell count.
    #[error("integer overflow during cell count calculation")]
    IntegerOverflow,

    /// Malformed ASCII grid text.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

impl GridError {
    /// Creates a parse error at the given one-based line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
