//! Binary stone/mortar grid.

use crate::coord::GridCoord;
use crate::error::GridError;
use crate::indexer::{GridIndexer, NodeId};
use crate::shape::GridShape;

/// A dense 2D or 3D binary segmentation.
///
/// `true` cells are mortar (foreground, traversable), `false` cells are stone
/// (background). Cells are stored in node-id order (see [`GridIndexer`]).
///
/// # Example
///
/// ```
/// use masonry_grid::{BinaryGrid, GridCoord, GridShape};
///
/// let shape = GridShape::new_2d(2, 3).unwrap();
/// let grid = BinaryGrid::new(shape, vec![true, false, true, true, true, false]).unwrap();
///
/// assert!(grid.is_foreground(&GridCoord::new_2d(0, 0)));
/// assert!(!grid.is_foreground(&GridCoord::new_2d(0, 1)));
/// assert!(!grid.is_foreground(&GridCoord::new_2d(9, 9))); // outside
/// assert_eq!(grid.foreground_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    indexer: GridIndexer,
    cells: Vec<bool>,
}

impl BinaryGrid {
    /// Creates a grid from cells in node-id order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DataLength`] if `cells.len()` differs from the
    /// shape's cell count.
    pub fn new(shape: GridShape, cells: Vec<bool>) -> Result<Self, GridError> {
        if cells.len() != shape.len() {
            return Err(GridError::DataLength {
                expected: shape.len(),
                actual: cells.len(),
            });
        }
        Ok(Self {
            indexer: GridIndexer::new(shape),
            cells,
        })
    }

    /// Creates a grid with every cell set to `mortar`.
    #[must_use]
    pub fn filled(shape: GridShape, mortar: bool) -> Self {
        Self {
            indexer: GridIndexer::new(shape),
            cells: vec![mortar; shape.len()],
        }
    }

    /// Creates a grid by evaluating `f` at every coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use masonry_grid::{BinaryGrid, GridShape};
    ///
    /// // Mortar on the border, stone inside.
    /// let shape = GridShape::new_2d(4, 4).unwrap();
    /// let grid = BinaryGrid::from_fn(shape, |c| {
    ///     c.axes().iter().any(|&a| a == 0 || a == 3)
    /// });
    /// assert_eq!(grid.foreground_count(), 12);
    /// ```
    #[must_use]
    pub fn from_fn(shape: GridShape, mut f: impl FnMut(GridCoord) -> bool) -> Self {
        let indexer = GridIndexer::new(shape);
        let cells = indexer.coords().map(&mut f).collect();
        Self { indexer, cells }
    }

    /// Creates a grid by thresholding a scalar image.
    ///
    /// Cells whose value is strictly greater than `threshold` become mortar.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DataLength`] if `values.len()` differs from the
    /// shape's cell count.
    pub fn from_threshold(
        shape: GridShape,
        values: &[f64],
        threshold: f64,
    ) -> Result<Self, GridError> {
        Self::new(shape, values.iter().map(|&v| v > threshold).collect())
    }

    /// The grid shape.
    #[must_use]
    pub const fn shape(&self) -> &GridShape {
        self.indexer.shape()
    }

    /// Number of axes (2 or 3).
    #[must_use]
    pub const fn ndim(&self) -> usize {
        self.indexer.shape().ndim()
    }

    /// The coordinate ↔ id mapping of this grid.
    #[must_use]
    pub const fn indexer(&self) -> &GridIndexer {
        &self.indexer
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A grid always holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in node-id order.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Label at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: &GridCoord) -> Option<bool> {
        let id = self.indexer.coordinate_to_id(coord).ok()?;
        self.cells.get(id).copied()
    }

    /// Whether `coord` is an in-bounds mortar cell.
    #[must_use]
    pub fn is_foreground(&self, coord: &GridCoord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Whether node `id` is a mortar cell; `false` for ids past the end.
    #[must_use]
    pub fn is_foreground_id(&self, id: NodeId) -> bool {
        self.cells.get(id).copied().unwrap_or(false)
    }

    /// Sets the label at `coord`, returning the previous label.
    ///
    /// # Errors
    ///
    /// Returns the indexing error if `coord` is outside the grid.
    pub fn set(&mut self, coord: &GridCoord, mortar: bool) -> Result<bool, GridError> {
        let id = self.indexer.coordinate_to_id(coord)?;
        Ok(std::mem::replace(&mut self.cells[id], mortar))
    }

    /// Number of mortar cells.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Ids of all mortar cells in ascending order.
    pub fn foreground_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(id, &mortar)| mortar.then_some(id))
    }
}
