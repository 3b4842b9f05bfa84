//! Weighted grid graph.

use masonry_grid::{GridIndexer, NodeId};
use mortar_types::Connectivity;

/// One undirected edge between two mortar cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Lower-ordered endpoint as emitted by the builder.
    pub source: NodeId,
    /// The other endpoint.
    pub target: NodeId,
    /// Strictly positive traversal weight.
    pub weight: f64,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Endpoints ordered so that the smaller id comes first.
    #[must_use]
    pub fn key(&self) -> (NodeId, NodeId) {
        (self.source.min(self.target), self.source.max(self.target))
    }
}

/// A neighbor entry in the adjacency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent {
    /// Neighbor node.
    pub node: NodeId,
    /// Weight of the connecting edge.
    pub weight: f64,
}

/// Summary of a built graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    /// Total number of cells (= nodes).
    pub cells: usize,
    /// Number of mortar cells.
    pub foreground_cells: usize,
    /// Number of mortar cells on the stone/mortar interface.
    pub interface_cells: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Connectivity the graph was built with.
    pub connectivity: Connectivity,
    /// Interface weight the graph was built with.
    pub interface_weight: f64,
}

/// An immutable weighted graph over the cells of a grid.
///
/// Every cell is a node, so any in-bounds coordinate is a valid node even if
/// it has no edges. Edges are kept in emission order, and a compressed
/// adjacency table (both directions) backs neighbor queries.
///
/// The graph is `Send + Sync` and can serve concurrent path queries.
#[derive(Debug, Clone)]
pub struct GridGraph {
    indexer: GridIndexer,
    edges: Vec<Edge>,
    /// `row_start[n]..row_start[n + 1]` indexes `adjacency` for node `n`.
    row_start: Vec<usize>,
    adjacency: Vec<Adjacent>,
    stats: GraphStats,
}

impl GridGraph {
    /// Ingests an edge list and builds the adjacency table.
    ///
    /// Edges must reference nodes below `indexer.len()`; the builder
    /// guarantees this. Out-of-range edges are dropped.
    #[must_use]
    pub fn from_edges(indexer: GridIndexer, edges: Vec<Edge>, stats: GraphStats) -> Self {
        let node_count = indexer.len();
        let edges: Vec<Edge> = edges
            .into_iter()
            .filter(|e| e.source < node_count && e.target < node_count)
            .collect();

        let mut row_start = vec![0usize; node_count + 1];
        for edge in &edges {
            row_start[edge.source + 1] += 1;
            row_start[edge.target + 1] += 1;
        }
        for n in 0..node_count {
            row_start[n + 1] += row_start[n];
        }

        let mut fill = row_start.clone();
        let mut adjacency = vec![
            Adjacent {
                node: 0,
                weight: 0.0
            };
            edges.len() * 2
        ];
        for edge in &edges {
            adjacency[fill[edge.source]] = Adjacent {
                node: edge.target,
                weight: edge.weight,
            };
            fill[edge.source] += 1;
            adjacency[fill[edge.target]] = Adjacent {
                node: edge.source,
                weight: edge.weight,
            };
            fill[edge.target] += 1;
        }

        let stats = GraphStats {
            edges: edges.len(),
            ..stats
        };
        Self {
            indexer,
            edges,
            row_start,
            adjacency,
            stats,
        }
    }

    /// Coordinate ↔ id mapping of the underlying grid.
    #[must_use]
    pub const fn indexer(&self) -> &GridIndexer {
        &self.indexer
    }

    /// Number of nodes, background cells included.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.indexer.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in emission order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `node`; empty for isolated or unknown nodes.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[Adjacent] {
        match (self.row_start.get(node), self.row_start.get(node + 1)) {
            (Some(&start), Some(&end)) => &self.adjacency[start..end],
            _ => &[],
        }
    }

    /// Number of edges incident to `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Weight of the edge between `a` and `b`, if any.
    #[must_use]
    pub fn weight_between(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.neighbors(a)
            .iter()
            .find(|adj| adj.node == b)
            .map(|adj| adj.weight)
    }

    /// Build summary.
    #[must_use]
    pub const fn stats(&self) -> &GraphStats {
        &self.stats
    }

    /// Consumes the graph and returns its edge list.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}
