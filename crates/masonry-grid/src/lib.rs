//! Dense binary grids for masonry analysis.
//!
//! This crate provides the Layer 0 spatial types shared by the mortar
//! analysis crates:
//!
//! - [`GridShape`] - Extents of a 2D or 3D grid
//! - [`GridCoord`] - Zero-based integer cell coordinates
//! - [`GridIndexer`] - Coordinate ↔ [`NodeId`] conversion with bounds checks
//! - [`BinaryGrid`] - Stone/mortar segmentation (`true` = mortar)
//! - [`NodeWeights`] - Optional per-cell scalar weights
//!
//! # Layer 0 Crate
//!
//! This crate has no knowledge of graphs or path queries. It can be used by
//! image loaders, CLI tools and the graph builder alike.
//!
//! # Coordinate Convention
//!
//! Coordinates list the slowest axis first: `(row, col)` in 2D and
//! `(plane, row, col)` in 3D. Node identifiers are **row-major** with the
//! last axis varying fastest. All conversions go through [`GridIndexer`].
//!
//! # Example
//!
//! ```
//! use masonry_grid::{BinaryGrid, GridCoord};
//!
//! let grid = BinaryGrid::from_ascii(
//!     "
//!     .....
//!     ###.##
//!     .....
//!     ",
//! )
//! .unwrap();
//!
//! let indexer = grid.indexer();
//! let id = indexer.coordinate_to_id(&GridCoord::new_2d(1, 2)).unwrap();
//! assert_eq!(id, 7);
//! assert!(grid.is_foreground_id(id));
//! assert_eq!(indexer.id_to_coordinate(id).unwrap(), GridCoord::new_2d(1, 2));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization for coordinates, shapes and weights

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod ascii;
mod coord;
mod error;
mod grid;
mod indexer;
mod shape;
mod weights;

pub use ascii::{MORTAR, STONE};
pub use coord::{GridCoord, MAX_DIMS};
pub use error::GridError;
pub use grid::BinaryGrid;
pub use indexer::{GridIndexer, NodeId};
pub use shape::GridShape;
pub use weights::NodeWeights;

