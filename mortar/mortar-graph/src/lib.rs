//! Weighted graph construction over binary mortar grids.
//!
//! Every cell of a [`BinaryGrid`](masonry_grid::BinaryGrid) becomes a node.
//! Mortar cells are connected to their mortar neighbors under a chosen
//! [`Connectivity`](mortar_types::Connectivity); stone cells stay isolated.
//!
//! # Edge Weights
//!
//! | Inputs                 | Base weight                          |
//! |------------------------|--------------------------------------|
//! | no node weights        | Euclidean offset length (1, √2, √3)  |
//! | node weights `w`       | `(w[a] + w[b]) / 2`                  |
//!
//! Edges with an endpoint on the stone/mortar interface (face adjacency)
//! are multiplied by the interface weight, so values below one pull paths
//! along the stone faces.
//!
//! # Example
//!
//! ```
//! use masonry_grid::BinaryGrid;
//! use mortar_graph::{GraphBuilder, InterfaceDetector};
//! use mortar_types::GraphConfig;
//!
//! let grid = BinaryGrid::from_ascii(
//!     "
//!     ....
//!     .##.
//!     ....
//!     ",
//! )
//! .unwrap();
//!
//! let config = GraphConfig::new(4).with_interface_weight(0.5);
//! let graph = GraphBuilder::new(&grid, config).build().unwrap();
//!
//! assert_eq!(graph.node_count(), 12);
//! assert_eq!(graph.stats().interface_cells, InterfaceDetector::new(&grid).count());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

mod builder;
mod graph;
mod interface;
mod offsets;

pub use builder::{GraphBuilder, build_graph, full_grid_edge_count};
pub use graph::{Adjacent, Edge, GraphStats, GridGraph};
pub use interface::InterfaceDetector;
pub use offsets::{NeighborOffset, NeighborOffsetTable};
