//! Line-of-minimum-trace (LMT) measurement on mortar graphs.
//!
//! This crate queries shortest paths on a [`GridGraph`] built by
//! `mortar-graph` and turns them into LMT ratios.
//!
//! # Overview
//!
//! - **Solvers** ([`ShortestPathSolver`], [`DijkstraSolver`]): weight-minimal
//!   paths with optional timeout, expansion limit and cancellation
//! - **Tracing** ([`PathTracer`]): endpoint validation, real-world length and
//!   the LMT ratio for one pair, or many pairs in parallel
//! - **Endpoints** ([`facing_pairs`]): source/target pairs across a panel
//!
//! # Quick Start
//!
//! ```
//! use masonry_grid::BinaryGrid;
//! use mortar_trace::measure_lmt;
//! use mortar_types::{GraphConfig, TraceConfig};
//!
//! // Running bond, three courses high.
//! let grid = BinaryGrid::from_ascii(
//!     "
//!     ####.#######.###
//!     ...............
//!     ########.#######
//!     ...............
//!     ####.#######.###
//!     ",
//! )
//! .unwrap();
//!
//! let summary = measure_lmt(
//!     &grid,
//!     &GraphConfig::new(4),
//!     TraceConfig::default().with_normalization_length(4.0),
//!     0,
//!     1,
//! )
//! .unwrap();
//!
//! // Every crossing walks four cells along each bed joint: 12 / 4.
//! assert!((summary.min_ratio().unwrap() - 3.0).abs() < 1e-9);
//! ```
//!
//! # Cost vs. Length
//!
//! The solver minimizes edge weight, which includes node weights and the
//! interface factor. The LMT ratio is always computed from the geometric
//! length of the chosen path, scaled per axis.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod endpoints;
pub mod solver;
pub mod tracer;

// Re-export main types for convenience
pub use endpoints::facing_pairs;
pub use solver::{DijkstraSolver, ShortestPathSolver, SolvedPath};
pub use tracer::PathTracer;

use masonry_grid::BinaryGrid;
use mortar_graph::{GraphBuilder, GridGraph};
use mortar_types::{GraphConfig, LmtSummary, MortarError, TraceConfig};

/// Builds the mortar graph and traces every facing pair along `axis`.
///
/// Sources are sampled every `stride` mortar cells on the entry face.
///
/// # Errors
///
/// Any error of [`GraphBuilder::build`], [`facing_pairs`],
/// [`PathTracer::new`] or [`PathTracer::trace_pairs`]. A grid without mortar
/// on both faces yields [`MortarError::InvalidConfig`].
pub fn measure_lmt(
    grid: &BinaryGrid,
    graph_config: &GraphConfig,
    trace_config: TraceConfig,
    axis: usize,
    stride: usize,
) -> Result<LmtSummary, MortarError> {
    let graph: GridGraph = GraphBuilder::new(grid, graph_config.clone()).build()?;
    let pairs = facing_pairs(grid, axis, stride)?;
    PathTracer::new(grid, &graph, trace_config)?.trace_pairs(&pairs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use approx::assert_relative_eq;
    use masonry_grid::{GridCoord, NodeWeights};

    const RUNNING_BOND: &str = "
        ###.#######.###
        ...............
        #######.#######
        ...............
        ###.#######.###
    ";

    /// Test the full workflow: parse, build, pair, trace.
    #[test]
    fn test_full_workflow() {
        let grid = BinaryGrid::from_ascii(RUNNING_BOND).unwrap();
        let summary = measure_lmt(
            &grid,
            &GraphConfig::new(8),
            TraceConfig::default().with_normalization_length(4.0),
            0,
            1,
        )
        .unwrap();

        assert_eq!(summary.results().len(), 2);
        assert!(summary.unreachable().is_empty());
        for result in summary.results() {
            assert!(result.ratio() >= 1.0);
            assert_eq!(result.path().start().unwrap().axis(0), 0);
            assert_eq!(result.path().end().unwrap().axis(0), 4);
        }
        // Diagonal steps cut the corners at each bed joint.
        assert!(summary.min_ratio().unwrap() < 3.0);
    }

    /// Test that a stack bond measures its straight joint.
    #[test]
    fn test_stack_bond_unit_ratio() {
        let grid = BinaryGrid::from_ascii(
            "
            ###.###
            ###.###
            .......
            ###.###
            ",
        )
        .unwrap();
        let summary = measure_lmt(
            &grid,
            &GraphConfig::new(4),
            TraceConfig::default().with_normalization_length(3.0),
            0,
            1,
        )
        .unwrap();
        assert_relative_eq!(summary.min_ratio().unwrap(), 1.0);
    }

    /// Test that interface down-weighting keeps the geometric ratio.
    #[test]
    fn test_interface_weight_keeps_geometric_length() {
        let grid = BinaryGrid::from_ascii(RUNNING_BOND).unwrap();
        let trace = TraceConfig::default().with_normalization_length(4.0);
        let full = measure_lmt(&grid, &GraphConfig::new(4), trace.clone(), 0, 1).unwrap();
        let hug = measure_lmt(
            &grid,
            &GraphConfig::new(4).with_interface_weight(0.5),
            trace,
            0,
            1,
        )
        .unwrap();
        assert_relative_eq!(full.min_ratio().unwrap(), hug.min_ratio().unwrap());
    }

    /// Test that a tiny interface weight still measures the straight joint.
    #[test]
    fn test_tiny_interface_weight_straight_joint() {
        let grid = BinaryGrid::from_ascii(
            "
            #####
            .....
            .....
            #####
            ",
        )
        .unwrap();
        let graph = GraphBuilder::new(&grid, GraphConfig::new(8).with_interface_weight(1e-6))
            .build()
            .unwrap();
        let tracer = PathTracer::new(&grid, &graph, TraceConfig::default()).unwrap();

        let short = tracer
            .trace(&GridCoord::new_2d(2, 0), &GridCoord::new_2d(2, 2))
            .unwrap();
        assert_eq!(short.path().nodes(), &[10, 11, 12]);
        assert_relative_eq!(short.real_length(), 2.0);

        let long = tracer
            .trace(&GridCoord::new_2d(1, 0), &GridCoord::new_2d(1, 4))
            .unwrap();
        assert_relative_eq!(long.real_length(), 4.0);
    }

    /// Test that large node weights trace without overflow.
    #[test]
    fn test_large_node_weights() {
        let grid = BinaryGrid::from_ascii("...").unwrap();
        let weights = NodeWeights::uniform(*grid.shape(), 1e13);
        let graph = GraphBuilder::new(&grid, GraphConfig::new(4))
            .with_node_weights(&weights)
            .build()
            .unwrap();
        let tracer = PathTracer::new(&grid, &graph, TraceConfig::default()).unwrap();

        let result = tracer
            .trace(&GridCoord::new_2d(0, 0), &GridCoord::new_2d(0, 2))
            .unwrap();
        assert_relative_eq!(result.path().cost(), 2e13);
        assert_relative_eq!(result.real_length(), 2.0);
    }

    /// Test node weights steering the path.
    #[test]
    fn test_node_weights_steer_path() {
        let grid = BinaryGrid::from_ascii(
            "
            ...
            ...
            ...
            ",
        )
        .unwrap();
        // Expensive middle column, except for the bottom row.
        let weights = NodeWeights::from_fn(*grid.shape(), |c| {
            if c.axis(1) == 1 && c.axis(0) < 2 { 10.0 } else { 1.0 }
        });
        let graph = GraphBuilder::new(&grid, GraphConfig::new(4))
            .with_node_weights(&weights)
            .build()
            .unwrap();
        let tracer = PathTracer::new(&grid, &graph, TraceConfig::default()).unwrap();

        let result = tracer
            .trace(&GridCoord::new_2d(0, 0), &GridCoord::new_2d(0, 2))
            .unwrap();
        assert_eq!(result.path().nodes(), &[0, 3, 6, 7, 8, 5, 2]);
        assert_relative_eq!(result.path().cost(), 6.0);
        assert_relative_eq!(result.real_length(), 6.0);
    }
}
