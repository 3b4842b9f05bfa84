//! Per-cell node weights.

use crate::coord::GridCoord;
use crate::error::GridError;
use crate::indexer::{GridIndexer, NodeId};
use crate::shape::GridShape;

/// A scalar per grid cell, stored in node-id order.
///
/// Used to replace the geometric edge weight with the mean of the two
/// endpoint weights.
///
/// # Example
///
/// ```
/// use masonry_grid::{GridCoord, GridShape, NodeWeights};
///
/// let shape = GridShape::new_2d(1, 3).unwrap();
/// let weights = NodeWeights::new(shape, vec![1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(weights.get(2), Some(4.0));
/// assert_eq!(weights.get_at(&GridCoord::new_2d(0, 1)), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeWeights {
    shape: GridShape,
    values: Vec<f64>,
}

impl NodeWeights {
    /// Creates node weights from values in node-id order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DataLength`] if `values.len()` differs from the
    /// shape's cell count.
    pub fn new(shape: GridShape, values: Vec<f64>) -> Result<Self, GridError> {
        if values.len() != shape.len() {
            return Err(GridError::DataLength {
                expected: shape.len(),
                actual: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// Same weight for every cell.
    #[must_use]
    pub fn uniform(shape: GridShape, value: f64) -> Self {
        Self {
            shape,
            values: vec![value; shape.len()],
        }
    }

    /// Evaluates `f` at every coordinate.
    #[must_use]
    pub fn from_fn(shape: GridShape, f: impl FnMut(GridCoord) -> f64) -> Self {
        let values = GridIndexer::new(shape).coords().map(f).collect();
        Self { shape, values }
    }

    /// The weight array shape.
    #[must_use]
    pub const fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Weights in node-id order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Weight of node `id`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Weight at `coord`, or `None` outside the array.
    #[must_use]
    pub fn get_at(&self, coord: &GridCoord) -> Option<f64> {
        let id = GridIndexer::new(self.shape).coordinate_to_id(coord).ok()?;
        self.get(id)
    }

    /// Checks that these weights cover `shape` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] when the extents differ.
    pub fn ensure_shape(&self, shape: &GridShape) -> Result<(), GridError> {
        if self.shape == *shape {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                expected: shape.extents().to_vec(),
                actual: self.shape.extents().to_vec(),
            })
        }
    }
}
