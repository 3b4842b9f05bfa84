//! Path representations for mortar traces.
//!
//! # Example
//!
//! ```
//! use mortar_types::TracedPath;
//! use masonry_grid::GridCoord;
//!
//! let path = TracedPath::new(
//!     vec![0, 1, 5],
//!     vec![GridCoord::new_2d(0, 0), GridCoord::new_2d(0, 1), GridCoord::new_2d(1, 2)],
//!     1.0 + std::f64::consts::SQRT_2,
//! );
//!
//! assert_eq!(path.len(), 3);
//! let length = path.real_length(&[1.0, 1.0]);
//! assert!((length - (1.0 + std::f64::consts::SQRT_2)).abs() < 1e-12);
//! ```

use masonry_grid::{GridCoord, NodeId};

/// An ordered node sequence returned by a shortest-path query.
///
/// Holds both node ids and their grid coordinates, plus the total edge
/// weight the solver minimized. The weight differs from the geometric length
/// whenever node weights or interface down-weighting were used.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracedPath {
    nodes: Vec<NodeId>,
    coords: Vec<GridCoord>,
    cost: f64,
}

impl TracedPath {
    /// Creates a path from parallel node and coordinate lists.
    ///
    /// Extra entries in the longer list are dropped.
    #[must_use]
    pub fn new(mut nodes: Vec<NodeId>, mut coords: Vec<GridCoord>, cost: f64) -> Self {
        let len = nodes.len().min(coords.len());
        nodes.truncate(len);
        coords.truncate(len);
        Self {
            nodes,
            coords,
            cost,
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids, source first.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Grid coordinates, source first.
    #[must_use]
    pub fn coords(&self) -> &[GridCoord] {
        &self.coords
    }

    /// Total edge weight along the path.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// First coordinate.
    #[must_use]
    pub fn start(&self) -> Option<&GridCoord> {
        self.coords.first()
    }

    /// Last coordinate.
    #[must_use]
    pub fn end(&self) -> Option<&GridCoord> {
        self.coords.last()
    }

    /// Real-world length: the sum of scaled Euclidean segment lengths.
    ///
    /// `scale` holds one factor per axis, slowest axis first; missing factors
    /// default to 1.0.
    #[must_use]
    pub fn real_length(&self, scale: &[f64]) -> f64 {
        self.coords
            .windows(2)
            .map(|pair| pair[0].scaled_distance(&pair[1], scale))
            .sum()
    }

    /// Real-world straight-line distance between the endpoints.
    #[must_use]
    pub fn chord_length(&self, scale: &[f64]) -> f64 {
        match (self.start(), self.end()) {
            (Some(a), Some(b)) => a.scaled_distance(b, scale),
            _ => 0.0,
        }
    }
}
