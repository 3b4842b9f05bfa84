//! Shortest-path solvers over a [`GridGraph`].
//!
//! The tracer only depends on [`ShortestPathSolver`], so another solver can
//! be plugged in without touching graph construction.

use std::time::Instant;

use masonry_grid::NodeId;
use mortar_graph::GridGraph;
use mortar_types::{MortarError, SearchLimits};
use ordered_float::OrderedFloat;
use pathfinding::prelude::dijkstra;
use tracing::debug;

/// Timeout and cancellation are polled once per this many expansions.
const CHECK_INTERVAL: usize = 1024;

/// A node sequence returned by a solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedPath {
    /// Nodes from source to target, both included.
    pub nodes: Vec<NodeId>,
    /// Sum of the edge weights along `nodes`.
    pub cost: f64,
    /// Number of nodes the search expanded.
    pub nodes_expanded: usize,
}

/// Weighted shortest-path capability.
pub trait ShortestPathSolver: Send + Sync {
    /// Solver name reported in trace statistics.
    fn name(&self) -> &'static str;

    /// Finds a weight-minimal path from `source` to `target`.
    ///
    /// Returns `Ok(None)` when the nodes are not connected.
    ///
    /// # Errors
    ///
    /// Returns [`MortarError::Timeout`], [`MortarError::NodeLimitExceeded`]
    /// or [`MortarError::Cancelled`] when `limits` stop the search.
    fn shortest_path(
        &self,
        graph: &GridGraph,
        source: NodeId,
        target: NodeId,
        limits: &SearchLimits,
    ) -> Result<Option<SolvedPath>, MortarError>;
}

/// Dijkstra's algorithm on the graph's adjacency table.
///
/// Searches on the edge weights themselves, wrapped in [`OrderedFloat`] for
/// the total order the priority queue needs. Graph edge weights are always
/// positive and finite, so no weight is rounded or flattened.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSolver;

impl DijkstraSolver {
    /// Creates the solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn check_limits(limits: &SearchLimits, expanded: usize, started: Instant) -> Option<MortarError> {
    if let Some(max) = limits.max_expanded() {
        if expanded > max {
            return Some(MortarError::NodeLimitExceeded(max));
        }
    }
    if expanded % CHECK_INTERVAL == 1 {
        if limits.is_cancelled() {
            return Some(MortarError::Cancelled);
        }
        if let Some(timeout) = limits.timeout() {
            if started.elapsed() >= timeout {
                return Some(MortarError::Timeout(timeout));
            }
        }
    }
    None
}

impl ShortestPathSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path(
        &self,
        graph: &GridGraph,
        source: NodeId,
        target: NodeId,
        limits: &SearchLimits,
    ) -> Result<Option<SolvedPath>, MortarError> {
        let started = Instant::now();
        let mut expanded = 0usize;
        let mut stopped: Option<MortarError> = None;

        let result = dijkstra(
            &source,
            |&node| {
                if stopped.is_some() {
                    return Vec::new();
                }
                expanded += 1;
                if let Some(err) = check_limits(limits, expanded, started) {
                    stopped = Some(err);
                    return Vec::new();
                }
                graph
                    .neighbors(node)
                    .iter()
                    .map(|adj| (adj.node, OrderedFloat(adj.weight)))
                    .collect::<Vec<_>>()
            },
            |&node| node == target,
        );

        if let Some(err) = stopped {
            debug!(source, target, expanded, error = %err, "Search stopped");
            return Err(err);
        }

        let Some((nodes, OrderedFloat(cost))) = result else {
            debug!(source, target, expanded, "Nodes are not connected");
            return Ok(None);
        };

        Ok(Some(SolvedPath {
            nodes,
            cost,
            nodes_expanded: expanded,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use masonry_grid::{BinaryGrid, GridCoord, NodeWeights};
    use mortar_graph::{GraphBuilder, build_graph};
    use mortar_types::{CancelToken, GraphConfig};
    use std::time::Duration;

    fn corridor() -> GridGraph {
        let grid = BinaryGrid::from_ascii(
            "
            .....
            .###.
            .....
            ",
        )
        .unwrap();
        build_graph(&grid, 4, None, 1.0).unwrap()
    }

    fn solve(graph: &GridGraph, source: NodeId, target: NodeId) -> SolvedPath {
        DijkstraSolver
            .shortest_path(graph, source, target, &SearchLimits::none())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_tiny_node_weights_not_flattened() {
        // Top middle cell costs ten times the rest; the longer bottom route wins.
        let grid = BinaryGrid::from_ascii("...\n...").unwrap();
        let weights = NodeWeights::from_fn(*grid.shape(), |c| {
            if c == GridCoord::new_2d(0, 1) { 1e-6 } else { 1e-7 }
        });
        let graph = GraphBuilder::new(&grid, GraphConfig::new(4))
            .with_node_weights(&weights)
            .build()
            .unwrap();

        let path = solve(&graph, 0, 2);
        assert_eq!(path.nodes, vec![0, 3, 4, 5, 2]);
        assert_relative_eq!(path.cost, 4e-7, max_relative = 1e-12);
    }

    #[test]
    fn test_tiny_interface_weight_prefers_orthogonal_steps() {
        let grid = BinaryGrid::from_ascii(
            "
            #####
            .....
            .....
            #####
            ",
        )
        .unwrap();
        let graph = build_graph(&grid, 8, None, 1e-6).unwrap();

        // (2,0) -> (2,2) straight along the lower row, not through row 1.
        let path = solve(&graph, 10, 12);
        assert_eq!(path.nodes, vec![10, 11, 12]);
        assert_relative_eq!(path.cost, 2e-6, max_relative = 1e-12);

        let path = solve(&graph, 5, 9);
        assert_eq!(path.nodes, vec![5, 6, 7, 8, 9]);
        assert_relative_eq!(path.cost, 4e-6, max_relative = 1e-12);
    }

    #[test]
    fn test_huge_node_weights() {
        let grid = BinaryGrid::from_ascii("...").unwrap();
        let weights = NodeWeights::uniform(*grid.shape(), 1e13);
        let graph = GraphBuilder::new(&grid, GraphConfig::new(4))
            .with_node_weights(&weights)
            .build()
            .unwrap();

        let path = solve(&graph, 0, 2);
        assert_eq!(path.nodes, vec![0, 1, 2]);
        assert_relative_eq!(path.cost, 2e13);

        let weights = NodeWeights::uniform(*grid.shape(), f64::MAX);
        let graph = GraphBuilder::new(&grid, GraphConfig::new(4))
            .with_node_weights(&weights)
            .build()
            .unwrap();
        assert_eq!(solve(&graph, 0, 2).nodes, vec![0, 1, 2]);
    }

    #[test]
    fn test_shortest_path_around_stone() {
        let graph = corridor();
        let path = DijkstraSolver
            .shortest_path(&graph, 0, 4, &SearchLimits::none())
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3, 4]);
        assert_relative_eq!(path.cost, 4.0);
        assert!(path.nodes_expanded > 0);
    }

    #[test]
    fn test_source_equals_target() {
        let graph = corridor();
        let path = DijkstraSolver
            .shortest_path(&graph, 5, 5, &SearchLimits::none())
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, vec![5]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn test_not_connected() {
        let grid = BinaryGrid::from_ascii("..#..").unwrap();
        let graph = build_graph(&grid, 4, None, 1.0).unwrap();
        let path = DijkstraSolver
            .shortest_path(&graph, 0, 4, &SearchLimits::none())
            .unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn test_node_limit() {
        let graph = corridor();
        let limits = SearchLimits::none().with_max_expanded(2);
        let err = DijkstraSolver
            .shortest_path(&graph, 0, 14, &limits)
            .unwrap_err();
        assert!(matches!(err, MortarError::NodeLimitExceeded(2)));
    }

    #[test]
    fn test_cancelled_before_start() {
        let graph = corridor();
        let token = CancelToken::new();
        token.cancel();
        let limits = SearchLimits::none().with_cancel_token(token);
        let err = DijkstraSolver
            .shortest_path(&graph, 0, 14, &limits)
            .unwrap_err();
        assert!(matches!(err, MortarError::Cancelled));
    }

    #[test]
    fn test_zero_timeout() {
        let graph = corridor();
        let limits = SearchLimits::none().with_timeout(Duration::ZERO);
        let err = DijkstraSolver
            .shortest_path(&graph, 0, 14, &limits)
            .unwrap_err();
        assert!(err.is_timeout());
    }
}
