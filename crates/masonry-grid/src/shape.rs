//! Grid extents.

use crate::coord::{GridCoord, MAX_DIMS};
use crate::error::GridError;

/// Extents of a 2D `[rows, cols]` or 3D `[planes, rows, cols]` grid.
///
/// Every extent is at least 1, fits in an `i32` (so coordinates can address
/// every cell) and the total cell count fits in a `usize`.
///
/// # Example
///
/// ```
/// use masonry_grid::{GridCoord, GridShape};
///
/// let shape = GridShape::new_2d(4, 5).unwrap();
/// assert_eq!(shape.len(), 20);
/// assert!(shape.contains(&GridCoord::new_2d(3, 4)));
/// assert!(!shape.contains(&GridCoord::new_2d(4, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    extents: [usize; MAX_DIMS],
    ndim: usize,
}

impl GridShape {
    /// Creates a 2D shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] for a zero or oversized extent
    /// and [`GridError::IntegerOverflow`] if the cell count overflows.
    pub fn new_2d(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_extents(&[rows, cols])
    }

    /// Creates a 3D shape.
    ///
    /// # Errors
    ///
    /// See [`GridShape::new_2d`].
    pub fn new_3d(planes: usize, rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_extents(&[planes, rows, cols])
    }

    /// Creates a shape from 2 or 3 extents.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] for a wrong axis count, a zero
    /// extent or an extent above `i32::MAX`, and [`GridError::IntegerOverflow`]
    /// if the product overflows `usize`.
    pub fn from_extents(extents: &[usize]) -> Result<Self, GridError> {
        let ndim = extents.len();
        let max_extent = usize::try_from(i32::MAX).unwrap_or(usize::MAX);
        if !(2..=MAX_DIMS).contains(&ndim)
            || extents.iter().any(|&e| e == 0 || e > max_extent)
        {
            return Err(GridError::InvalidDimensions(extents.to_vec()));
        }

        extents
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or(GridError::IntegerOverflow)?;

        let mut padded = [1; MAX_DIMS];
        padded[..ndim].copy_from_slice(extents);
        Ok(Self {
            extents: padded,
            ndim,
        })
    }

    /// Number of axes (2 or 3).
    #[must_use]
    pub const fn ndim(&self) -> usize {
        self.ndim
    }

    /// Extents, slowest axis first.
    #[must_use]
    pub fn extents(&self) -> &[usize] {
        &self.extents[..self.ndim]
    }

    /// Extent along `axis`; 1 past the last axis.
    #[must_use]
    pub fn extent(&self, axis: usize) -> usize {
        self.extents.get(axis).copied().unwrap_or(1)
    }

    /// Total number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        // Checked at construction.
        self.extents[0] * self.extents[1] * self.extents[2]
    }

    /// A shape always holds at least one cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` has this shape's axis count and lies inside it.
    #[must_use]
    pub fn contains(&self, coord: &GridCoord) -> bool {
        coord.ndim() == self.ndim
            && coord
                .axes()
                .iter()
                .zip(self.extents())
                .all(|(&c, &e)| usize::try_from(c).is_ok_and(|c| c < e))
    }
}
