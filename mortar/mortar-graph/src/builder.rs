//! Graph construction from a binary mortar grid.
//!
//! Every mortar cell is visited in ascending id order and connected to each
//! in-bounds mortar neighbor reached by a forward offset, so every undirected
//! adjacency is emitted exactly once. The edge weight is the offset length, or
//! the mean of the two node weights when node weights are given, and is
//! multiplied once by the interface weight when either endpoint lies on the
//! stone/mortar interface.
//!
//! Cells are processed in id batches. Parallel builds run batches on the
//! rayon pool and concatenate them in batch order, so the edge order matches
//! the sequential build exactly.

use std::ops::Range;
use std::time::Instant;

use masonry_grid::{BinaryGrid, NodeId, NodeWeights};
use mortar_types::{Connectivity, GraphConfig, MortarError};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::graph::{Edge, GraphStats, GridGraph};
use crate::interface::InterfaceDetector;
use crate::offsets::NeighborOffsetTable;

/// Builds a [`GridGraph`] from a grid and a [`GraphConfig`].
///
/// # Example
///
/// ```
/// use masonry_grid::BinaryGrid;
/// use mortar_graph::GraphBuilder;
/// use mortar_types::GraphConfig;
///
/// let grid = BinaryGrid::from_ascii(
///     "
///     ...
///     ...
///     ...
///     ",
/// )
/// .unwrap();
///
/// let graph = GraphBuilder::new(&grid, GraphConfig::new(8)).build().unwrap();
/// assert_eq!(graph.node_count(), 9);
/// assert_eq!(graph.edge_count(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<'a> {
    grid: &'a BinaryGrid,
    config: GraphConfig,
    node_weights: Option<&'a NodeWeights>,
}

/// Validated inputs shared by every batch.
struct Plan<'a> {
    grid: &'a BinaryGrid,
    table: &'static NeighborOffsetTable,
    weights: Option<&'a [f64]>,
    interface: Vec<bool>,
    interface_weight: f64,
    stats: GraphStats,
}

impl<'a> GraphBuilder<'a> {
    /// Creates a builder for `grid`.
    #[must_use]
    pub const fn new(grid: &'a BinaryGrid, config: GraphConfig) -> Self {
        Self {
            grid,
            config,
            node_weights: None,
        }
    }

    /// Uses per-cell weights instead of geometric offset lengths.
    #[must_use]
    pub const fn with_node_weights(mut self, weights: &'a NodeWeights) -> Self {
        self.node_weights = Some(weights);
        self
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Builds the graph.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`MortarError::InvalidConnectivity`] if the level does not apply to
    ///   the grid's dimensionality
    /// - [`MortarError::ShapeMismatch`] if node weights have another shape
    /// - [`MortarError::InvalidNodeWeight`] if a mortar cell's weight is not
    ///   positive and finite
    /// - [`MortarError::InvalidConfig`] if the interface weight is outside
    ///   (0, 1] or the batch size is zero
    pub fn build(&self) -> Result<GridGraph, MortarError> {
        let start = Instant::now();
        let plan = self.plan()?;

        let len = self.grid.len();
        let batch = self.config.batch_size();
        let batches: Vec<Range<NodeId>> = (0..len)
            .step_by(batch)
            .map(|first| first..(first + batch).min(len))
            .collect();

        let edges: Vec<Edge> = if self.config.parallel() {
            let parts: Vec<Vec<Edge>> = batches
                .into_par_iter()
                .map(|ids| {
                    let mut part = Vec::new();
                    plan.emit(ids, &mut |edge| part.push(edge));
                    part
                })
                .collect();
            parts.concat()
        } else {
            let mut all = Vec::new();
            for ids in batches {
                plan.emit(ids, &mut |edge| all.push(edge));
            }
            all
        };

        let graph = GridGraph::from_edges(*self.grid.indexer(), edges, plan.stats);
        let stats = graph.stats();
        info!(
            cells = stats.cells,
            edges = stats.edges,
            interface_cells = stats.interface_cells,
            elapsed_ms = start.elapsed().as_millis(),
            "Mortar graph built"
        );
        Ok(graph)
    }

    /// Streams every edge to `sink` in build order without storing them.
    ///
    /// Always sequential. Returns the build statistics.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn for_each_edge(&self, mut sink: impl FnMut(Edge)) -> Result<GraphStats, MortarError> {
        let plan = self.plan()?;
        let mut edges = 0usize;
        plan.emit(0..self.grid.len(), &mut |edge| {
            edges += 1;
            sink(edge);
        });
        Ok(GraphStats { edges, ..plan.stats })
    }

    fn plan(&self) -> Result<Plan<'a>, MortarError> {
        let grid = self.grid;
        let connectivity = self.config.connectivity(grid.ndim())?;

        let weights = match self.node_weights {
            Some(weights) => {
                weights.ensure_shape(grid.shape())?;
                check_node_weights(grid, weights)?;
                Some(weights.values())
            }
            None => None,
        };

        self.config.validate()?;

        info!(
            cells = grid.len(),
            foreground = grid.foreground_count(),
            connectivity = %connectivity,
            interface_weight = self.config.interface_weight(),
            node_weights = weights.is_some(),
            "Building mortar graph"
        );

        let interface = InterfaceDetector::new(grid).mask(self.config.parallel());
        let interface_cells = grid
            .cells()
            .iter()
            .zip(&interface)
            .filter(|&(&mortar, &flag)| mortar && flag)
            .count();
        debug!(interface_cells, "Interface mask computed");

        Ok(Plan {
            grid,
            table: NeighborOffsetTable::cached(connectivity),
            weights,
            interface,
            interface_weight: self.config.interface_weight(),
            stats: GraphStats {
                cells: grid.len(),
                foreground_cells: grid.foreground_count(),
                interface_cells,
                edges: 0,
                connectivity,
                interface_weight: self.config.interface_weight(),
            },
        })
    }
}

impl Plan<'_> {
    fn emit(&self, ids: Range<NodeId>, sink: &mut impl FnMut(Edge)) {
        let indexer = self.grid.indexer();
        let cells = self.grid.cells();

        for id in ids {
            if !cells[id] {
                continue;
            }
            let Ok(coord) = indexer.id_to_coordinate(id) else {
                continue;
            };
            for offset in self.table.forward() {
                let Some((_, neighbor)) = indexer.step(&coord, offset.delta()) else {
                    continue;
                };
                if !cells[neighbor] {
                    continue;
                }
                let mut weight = match self.weights {
                    Some(values) => values[id].midpoint(values[neighbor]),
                    None => offset.length(),
                };
                if self.interface[id] || self.interface[neighbor] {
                    weight *= self.interface_weight;
                }
                // Edge weights stay strictly positive even when the product underflows.
                sink(Edge::new(id, neighbor, weight.max(f64::MIN_POSITIVE)));
            }
        }
    }
}

fn check_node_weights(grid: &BinaryGrid, weights: &NodeWeights) -> Result<(), MortarError> {
    let bad = grid
        .foreground_ids()
        .map(|id| (id, weights.values()[id]))
        .find(|(_, value)| !(value.is_finite() && *value > 0.0));

    match bad {
        Some((id, value)) => Err(MortarError::InvalidNodeWeight {
            coord: grid.indexer().id_to_coordinate(id)?,
            value,
        }),
        None => Ok(()),
    }
}

/// Builds a mortar graph with the default batching.
///
/// Shorthand for [`GraphBuilder`] with a [`GraphConfig`] of the given level
/// and interface weight.
///
/// # Errors
///
/// See [`GraphBuilder::build`].
///
/// # Example
///
/// ```
/// use masonry_grid::BinaryGrid;
/// use mortar_graph::build_graph;
///
/// let grid = BinaryGrid::from_ascii("...\n.#.\n...").unwrap();
/// let graph = build_graph(&grid, 4, None, 0.5).unwrap();
///
/// // Every ring edge touches a cell beside the stone.
/// assert!(graph.edges().iter().all(|e| (e.weight - 0.5).abs() < 1e-12));
/// ```
pub fn build_graph(
    grid: &BinaryGrid,
    connectivity_level: u32,
    node_weights: Option<&NodeWeights>,
    interface_weight: f64,
) -> Result<GridGraph, MortarError> {
    let config = GraphConfig::new(connectivity_level).with_interface_weight(interface_weight);
    let builder = GraphBuilder::new(grid, config);
    match node_weights {
        Some(weights) => builder.with_node_weights(weights).build(),
        None => builder.build(),
    }
}

/// Number of edges of an all-mortar grid, for sanity checks and tests.
///
/// Counts, for every forward offset, the cells whose step stays in bounds.
#[must_use]
pub fn full_grid_edge_count(extents: &[usize], connectivity: Connectivity) -> usize {
    NeighborOffsetTable::cached(connectivity)
        .forward()
        .iter()
        .map(|offset| {
            extents
                .iter()
                .zip(offset.delta())
                .map(|(&extent, d)| if d == 0 { extent } else { extent.saturating_sub(1) })
                .product::<usize>()
        })
        .sum()
}
