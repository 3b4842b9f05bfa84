//! Coordinate ↔ node identifier conversion.
//!
//! Node identifiers follow the **row-major** convention with the last axis
//! varying fastest:
//!
//! - 2D `[rows, cols]`: `id = row * cols + col`
//! - 3D `[planes, rows, cols]`: `id = (plane * rows + row) * cols + col`
//!
//! This is the only place in the workspace where the convention is encoded.

use crate::coord::{GridCoord, MAX_DIMS};
use crate::error::GridError;
use crate::shape::GridShape;

/// Linear identifier of one grid cell.
pub type NodeId = usize;

/// Bidirectional mapping between grid coordinates and [`NodeId`]s.
///
/// The mapping covers every cell of the grid, background included, so any
/// in-bounds coordinate resolves to a node.
///
/// # Example
///
/// ```
/// use masonry_grid::{GridCoord, GridIndexer, GridShape};
///
/// let indexer = GridIndexer::new(GridShape::new_2d(3, 4).unwrap());
/// let id = indexer.coordinate_to_id(&GridCoord::new_2d(2, 1)).unwrap();
/// assert_eq!(id, 9);
/// assert_eq!(indexer.id_to_coordinate(id).unwrap(), GridCoord::new_2d(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndexer {
    shape: GridShape,
    strides: [usize; MAX_DIMS],
}

impl GridIndexer {
    /// Creates an indexer for `shape`.
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        let mut strides = [0; MAX_DIMS];
        let mut stride = 1;
        for axis in (0..shape.ndim()).rev() {
            strides[axis] = stride;
            stride *= shape.extent(axis);
        }
        Self { shape, strides }
    }

    /// The indexed shape.
    #[must_use]
    pub const fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Number of nodes (cells).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.shape.len()
    }

    /// An indexer always covers at least one cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, coord: &GridCoord) -> bool {
        self.shape.contains(coord)
    }

    /// Converts a coordinate to its node identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] if the axis count differs from
    /// the grid's, and [`GridError::OutOfBounds`] if any component is negative
    /// or not below its extent.
    pub fn coordinate_to_id(&self, coord: &GridCoord) -> Result<NodeId, GridError> {
        if coord.ndim() != self.shape.ndim() {
            return Err(GridError::DimensionMismatch {
                coord: *coord,
                expected: self.shape.ndim(),
            });
        }
        if !self.shape.contains(coord) {
            return Err(GridError::OutOfBounds { coord: *coord });
        }
        Ok(self.id_of(coord))
    }

    /// Converts a node identifier back to its coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IdOutOfBounds`] if `id` is not below the cell count.
    pub fn id_to_coordinate(&self, id: NodeId) -> Result<GridCoord, GridError> {
        if id >= self.len() {
            return Err(GridError::IdOutOfBounds {
                id,
                len: self.len(),
            });
        }
        Ok(self.coord_of(id))
    }

    /// Steps from an in-bounds `coord` by `delta`.
    ///
    /// Returns the neighbor coordinate and its id, or `None` when the step
    /// leaves the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use masonry_grid::{GridCoord, GridIndexer, GridShape};
    ///
    /// let indexer = GridIndexer::new(GridShape::new_2d(2, 2).unwrap());
    /// let origin = GridCoord::new_2d(0, 0);
    /// assert_eq!(
    ///     indexer.step(&origin, [1, 1, 0]),
    ///     Some((GridCoord::new_2d(1, 1), 3))
    /// );
    /// assert_eq!(indexer.step(&origin, [-1, 0, 0]), None);
    /// ```
    #[must_use]
    pub fn step(&self, coord: &GridCoord, delta: [i32; MAX_DIMS]) -> Option<(GridCoord, NodeId)> {
        let next = coord.checked_offset(delta)?;
        self.shape
            .contains(&next)
            .then(|| (next, self.id_of(&next)))
    }

    /// Iterates over every coordinate in node-id order.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.len()).map(|id| self.coord_of(id))
    }

    /// Id of a coordinate already known to be in bounds.
    #[allow(clippy::cast_sign_loss)]
    fn id_of(&self, coord: &GridCoord) -> NodeId {
        coord
            .axes()
            .iter()
            .zip(&self.strides)
            .map(|(&c, &s)| c as usize * s)
            .sum()
    }

    /// Coordinate of an id already known to be in bounds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn coord_of(&self, id: NodeId) -> GridCoord {
        let mut axes = [0i32; MAX_DIMS];
        let mut rest = id;
        for (axis, slot) in axes.iter_mut().enumerate().take(self.shape.ndim()) {
            let stride = self.strides[axis];
            // Extents fit in i32, so every component does too.
            *slot = (rest / stride) as i32;
            rest %= stride;
        }
        if self.shape.ndim() == 2 {
            GridCoord::new_2d(axes[0], axes[1])
        } else {
            GridCoord::new_3d(axes[0], axes[1], axes[2])
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn indexer_3d() -> GridIndexer {
        GridIndexer::new(GridShape::new_3d(2, 3, 4).unwrap())
    }

    #[test]
    fn test_row_major_2d() {
        let indexer = GridIndexer::new(GridShape::new_2d(3, 4).unwrap());
        assert_eq!(indexer.coordinate_to_id(&GridCoord::new_2d(0, 0)).unwrap(), 0);
        assert_eq!(indexer.coordinate_to_id(&GridCoord::new_2d(0, 3)).unwrap(), 3);
        assert_eq!(indexer.coordinate_to_id(&GridCoord::new_2d(1, 0)).unwrap(), 4);
        assert_eq!(indexer.coordinate_to_id(&GridCoord::new_2d(2, 3)).unwrap(), 11);
    }

    #[test]
    fn test_row_major_3d() {
        let indexer = indexer_3d();
        // (plane * rows + row) * cols + col
        assert_eq!(
            indexer.coordinate_to_id(&GridCoord::new_3d(1, 2, 3)).unwrap(),
            (3 + 2) * 4 + 3
        );
        assert_eq!(indexer.coordinate_to_id(&GridCoord::new_3d(1, 0, 0)).unwrap(), 12);
    }

    #[test]
    fn test_round_trip_every_cell() {
        let indexer = indexer_3d();
        for id in 0..indexer.len() {
            let coord = indexer.id_to_coordinate(id).unwrap();
            assert_eq!(indexer.coordinate_to_id(&coord).unwrap(), id);
        }
    }

    #[test]
    fn test_coords_in_id_order() {
        let indexer = indexer_3d();
        for (id, coord) in indexer.coords().enumerate() {
            assert_eq!(indexer.coordinate_to_id(&coord).unwrap(), id);
        }
        assert_eq!(indexer.coords().count(), 24);
    }

    #[test]
    fn test_out_of_bounds() {
        let indexer = indexer_3d();
        let negative = GridCoord::new_3d(0, -1, 0);
        assert_eq!(
            indexer.coordinate_to_id(&negative),
            Err(GridError::OutOfBounds { coord: negative })
        );
        let past = GridCoord::new_3d(0, 0, 4);
        assert!(matches!(
            indexer.coordinate_to_id(&past),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            indexer.id_to_coordinate(24),
            Err(GridError::IdOutOfBounds { id: 24, len: 24 })
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let indexer = indexer_3d();
        assert!(matches!(
            indexer.coordinate_to_id(&GridCoord::new_2d(0, 0)),
            Err(GridError::DimensionMismatch { expected: 3, .. })
        ));
    }

    #[test]
    fn test_step() {
        let indexer = indexer_3d();
        let corner = GridCoord::new_3d(1, 2, 3);
        assert!(indexer.step(&corner, [0, 0, 1]).is_none());
        assert!(indexer.step(&corner, [1, 0, 0]).is_none());
        let (coord, id) = indexer.step(&corner, [-1, -1, -1]).unwrap();
        assert_eq!(coord, GridCoord::new_3d(0, 1, 2));
        assert_eq!(id, 4 + 2);
    }
}
