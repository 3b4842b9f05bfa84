//! Line-of-minimum-trace measurement on a built mortar graph.
//!
//! # Example
//!
//! ```
//! use masonry_grid::{BinaryGrid, GridCoord};
//! use mortar_graph::build_graph;
//! use mortar_trace::PathTracer;
//! use mortar_types::TraceConfig;
//!
//! // Running bond: the joint steps sideways between courses.
//! let grid = BinaryGrid::from_ascii(
//!     "
//!     ###.####
//!     .......
//!     ######.#
//!     ",
//! )
//! .unwrap();
//! let graph = build_graph(&grid, 4, None, 1.0).unwrap();
//!
//! let config = TraceConfig::default().with_normalization_length(2.0);
//! let tracer = PathTracer::new(&grid, &graph, config).unwrap();
//! let result = tracer
//!     .trace(&GridCoord::new_2d(0, 2), &GridCoord::new_2d(2, 5))
//!     .unwrap();
//!
//! assert!((result.real_length() - 5.0).abs() < 1e-9);
//! assert!((result.ratio() - 2.5).abs() < 1e-9);
//! ```

use std::time::Instant;

use masonry_grid::{BinaryGrid, GridCoord, GridError, NodeId};
use mortar_graph::GridGraph;
use mortar_types::{
    EndpointPair, LmtResult, LmtSummary, MortarError, TraceConfig, TraceStats, TracedPath,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::solver::{DijkstraSolver, ShortestPathSolver};

/// Traces shortest mortar paths and converts them to LMT ratios.
///
/// The tracer borrows the grid and the graph built from it. Both are
/// read-only, so one tracer can serve many concurrent queries.
#[derive(Debug)]
pub struct PathTracer<'g, S = DijkstraSolver> {
    grid: &'g BinaryGrid,
    graph: &'g GridGraph,
    config: TraceConfig,
    solver: S,
}

impl<'g> PathTracer<'g, DijkstraSolver> {
    /// Creates a tracer using [`DijkstraSolver`].
    ///
    /// # Errors
    ///
    /// Returns [`MortarError::ShapeMismatch`] if `graph` was not built from a
    /// grid of `grid`'s shape, or [`MortarError::InvalidConfig`] if `config`
    /// does not validate for the grid's dimensionality.
    pub fn new(
        grid: &'g BinaryGrid,
        graph: &'g GridGraph,
        config: TraceConfig,
    ) -> Result<Self, MortarError> {
        if graph.indexer().shape() != grid.shape() {
            return Err(MortarError::ShapeMismatch {
                expected: grid.shape().extents().to_vec(),
                actual: graph.indexer().shape().extents().to_vec(),
            });
        }
        config.validate_for(grid.ndim())?;
        Ok(Self {
            grid,
            graph,
            config,
            solver: DijkstraSolver,
        })
    }
}

impl<'g, S: ShortestPathSolver> PathTracer<'g, S> {
    /// Replaces the solver.
    #[must_use]
    pub fn with_solver<T: ShortestPathSolver>(self, solver: T) -> PathTracer<'g, T> {
        PathTracer {
            grid: self.grid,
            graph: self.graph,
            config: self.config,
            solver,
        }
    }

    /// The trace configuration.
    #[must_use]
    pub const fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// The graph queries run on.
    #[must_use]
    pub const fn graph(&self) -> &GridGraph {
        self.graph
    }

    /// Resolves an endpoint to its node, which must be a mortar cell.
    fn endpoint(&self, coord: &GridCoord) -> Result<NodeId, MortarError> {
        let id = self
            .grid
            .indexer()
            .coordinate_to_id(coord)
            .map_err(|err| MortarError::InvalidEndpoint {
                coord: *coord,
                reason: match err {
                    GridError::DimensionMismatch { .. } => "wrong number of axes",
                    _ => "outside the grid",
                },
            })?;
        if !self.grid.is_foreground_id(id) {
            return Err(MortarError::InvalidEndpoint {
                coord: *coord,
                reason: "cell is stone",
            });
        }
        Ok(id)
    }

    /// Traces the weight-minimal mortar path from `start` to `goal`.
    ///
    /// The real-world length sums the Euclidean segment lengths after
    /// scaling each axis; the ratio divides it by the normalization length
    /// and is floored at 1.0.
    ///
    /// # Errors
    ///
    /// - [`MortarError::InvalidEndpoint`] if an endpoint is outside the grid
    ///   or on stone
    /// - [`MortarError::NoPathFound`] if the endpoints lie in disconnected
    ///   mortar regions
    /// - [`MortarError::Timeout`], [`MortarError::NodeLimitExceeded`] or
    ///   [`MortarError::Cancelled`] if the search limits stop the search
    pub fn trace(&self, start: &GridCoord, goal: &GridCoord) -> Result<LmtResult, MortarError> {
        let started = Instant::now();
        let source = self.endpoint(start)?;
        let target = self.endpoint(goal)?;

        let solved = self
            .solver
            .shortest_path(self.graph, source, target, self.config.limits())?
            .ok_or(MortarError::NoPathFound {
                start: *start,
                goal: *goal,
            })?;

        let indexer = self.graph.indexer();
        let coords = solved
            .nodes
            .iter()
            .map(|&id| indexer.id_to_coordinate(id))
            .collect::<Result<Vec<_>, _>>()?;

        let stats = TraceStats::new(self.solver.name())
            .with_nodes_expanded(solved.nodes_expanded)
            .with_elapsed(started.elapsed());
        let result = LmtResult::new(
            TracedPath::new(solved.nodes, coords, solved.cost),
            self.config.axis_scale(),
            self.config.normalization_length(),
            stats,
        );

        debug!(
            start = %start,
            goal = %goal,
            nodes = result.path().len(),
            real_length = result.real_length(),
            ratio = result.ratio(),
            "Traced mortar path"
        );
        Ok(result)
    }

    /// Traces many endpoint pairs in parallel.
    ///
    /// Pairs without a connecting path are listed in
    /// [`LmtSummary::unreachable`]; any other error aborts the batch.
    ///
    /// # Errors
    ///
    /// - [`MortarError::InvalidConfig`] if `pairs` is empty
    /// - [`MortarError::NoPathFound`] for the first pair if no pair is
    ///   connected
    /// - the first non-recoverable error of any pair, in input order
    pub fn trace_pairs(&self, pairs: &[EndpointPair]) -> Result<LmtSummary, MortarError> {
        let Some(first) = pairs.first() else {
            return Err(MortarError::invalid_config("no endpoint pairs given"));
        };
        let started = Instant::now();

        let outcomes: Vec<Result<LmtResult, MortarError>> = pairs
            .par_iter()
            .map(|pair| self.trace(&pair.source, &pair.target))
            .collect();

        let mut results = Vec::with_capacity(pairs.len());
        let mut unreachable = Vec::new();
        for (pair, outcome) in pairs.iter().zip(outcomes) {
            match outcome {
                Ok(result) => results.push(result),
                Err(err) if err.is_recoverable() => {
                    warn!(
                        source = %pair.source,
                        target = %pair.target,
                        "No mortar path between endpoints"
                    );
                    unreachable.push(*pair);
                }
                Err(err) => return Err(err),
            }
        }

        if results.is_empty() {
            return Err(MortarError::NoPathFound {
                start: first.source,
                goal: first.target,
            });
        }

        let summary = LmtSummary::new(results, unreachable);
        info!(
            pairs = pairs.len(),
            unreachable = summary.unreachable().len(),
            min_ratio = summary.min_ratio().unwrap_or(f64::NAN),
            elapsed_ms = started.elapsed().as_millis(),
            "LMT trace complete"
        );
        Ok(summary)
    }
}
