//! Stone/mortar interface detection.
//!
//! A cell is on the interface when one of its face neighbors carries the
//! other label. Face adjacency is used regardless of the connectivity the
//! graph is built with, so the interface does not change with graph density.

use masonry_grid::{BinaryGrid, GridCoord, NodeId};
use rayon::prelude::*;

use crate::offsets::{NeighborOffset, NeighborOffsetTable};

/// Detects cells that touch the other class across a face.
///
/// # Example
///
/// ```
/// use masonry_grid::{BinaryGrid, GridCoord};
/// use mortar_graph::InterfaceDetector;
///
/// let grid = BinaryGrid::from_ascii(
///     "
///     ...
///     .#.
///     ...
///     ",
/// )
/// .unwrap();
/// let detector = InterfaceDetector::new(&grid);
///
/// assert!(detector.is_interface(&GridCoord::new_2d(0, 1)));  // above the stone
/// assert!(!detector.is_interface(&GridCoord::new_2d(0, 0))); // diagonal only
/// assert!(detector.is_interface(&GridCoord::new_2d(1, 1)));  // the stone itself
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InterfaceDetector<'g> {
    grid: &'g BinaryGrid,
    faces: &'static [NeighborOffset],
}

impl<'g> InterfaceDetector<'g> {
    /// Creates a detector over `grid`.
    #[must_use]
    pub fn new(grid: &'g BinaryGrid) -> Self {
        Self {
            grid,
            faces: match NeighborOffsetTable::faces(grid.ndim()) {
                Some(table) => table.neighborhood(),
                None => &[],
            },
        }
    }

    /// Whether `coord` has a face neighbor of the other class.
    ///
    /// Neighbors outside the grid are ignored; coordinates outside the grid
    /// are never on the interface.
    #[must_use]
    pub fn is_interface(&self, coord: &GridCoord) -> bool {
        let Some(label) = self.grid.get(coord) else {
            return false;
        };
        let indexer = self.grid.indexer();
        let cells = self.grid.cells();
        self.faces.iter().any(|offset| {
            indexer
                .step(coord, offset.delta())
                .is_some_and(|(_, id)| cells[id] != label)
        })
    }

    /// Same as [`is_interface`](Self::is_interface), addressed by node id.
    #[must_use]
    pub fn is_interface_id(&self, id: NodeId) -> bool {
        self.grid
            .indexer()
            .id_to_coordinate(id)
            .is_ok_and(|coord| self.is_interface(&coord))
    }

    /// Interface flag for every cell, in node-id order.
    ///
    /// Computed on the rayon pool when `parallel` is set.
    #[must_use]
    pub fn mask(&self, parallel: bool) -> Vec<bool> {
        let len = self.grid.len();
        if parallel {
            (0..len)
                .into_par_iter()
                .map(|id| self.is_interface_id(id))
                .collect()
        } else {
            (0..len).map(|id| self.is_interface_id(id)).collect()
        }
    }

    /// Number of mortar cells on the interface.
    #[must_use]
    pub fn count(&self) -> usize {
        self.grid
            .foreground_ids()
            .filter(|&id| self.is_interface_id(id))
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ring_3d() -> BinaryGrid {
        // Stone voxel in the middle of a 3x3x3 mortar block.
        BinaryGrid::from_fn(masonry_grid::GridShape::new_3d(3, 3, 3).unwrap(), |c| {
            c != GridCoord::new_3d(1, 1, 1)
        })
    }

    #[test]
    fn test_face_neighbors_only_2d() {
        let grid = BinaryGrid::from_ascii("...\n.#.\n...").unwrap();
        let detector = InterfaceDetector::new(&grid);
        let flagged: Vec<_> = (0..9).filter(|&id| detector.is_interface_id(id)).collect();
        // Four edge-adjacent mortar cells plus the stone cell itself.
        assert_eq!(flagged, vec![1, 3, 4, 5, 7]);
    }

    #[test]
    fn test_face_neighbors_only_3d() {
        let grid = ring_3d();
        let detector = InterfaceDetector::new(&grid);
        assert_eq!(detector.count(), 6);
        assert!(!detector.is_interface(&GridCoord::new_3d(0, 0, 1)));
        assert!(detector.is_interface(&GridCoord::new_3d(0, 1, 1)));
    }

    #[test]
    fn test_grid_border_is_not_interface() {
        let grid = BinaryGrid::from_ascii("...\n...").unwrap();
        let detector = InterfaceDetector::new(&grid);
        assert!(detector.mask(false).iter().all(|&m| !m));
    }

    #[test]
    fn test_outside_coordinate() {
        let grid = BinaryGrid::from_ascii(".#").unwrap();
        let detector = InterfaceDetector::new(&grid);
        assert!(!detector.is_interface(&GridCoord::new_2d(0, 2)));
        assert!(!detector.is_interface(&GridCoord::new_2d(-1, 0)));
        assert!(!detector.is_interface_id(2));
    }

    #[test]
    fn test_mask_parallel_matches_sequential() {
        let grid = BinaryGrid::from_ascii(
            "
            ..#..#
            #....#
            ..##..
            ",
        )
        .unwrap();
        let detector = InterfaceDetector::new(&grid);
        assert_eq!(detector.mask(true), detector.mask(false));
    }
}
