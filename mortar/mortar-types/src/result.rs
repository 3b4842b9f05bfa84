//! Trace results combining paths with the LMT ratio and statistics.
//!
//! # Example
//!
//! ```
//! use mortar_types::{LmtResult, TraceStats, TracedPath};
//! use masonry_grid::GridCoord;
//!
//! let path = TracedPath::new(
//!     vec![0, 3, 6],
//!     vec![GridCoord::new_2d(0, 0), GridCoord::new_2d(1, 0), GridCoord::new_2d(2, 0)],
//!     2.0,
//! );
//!
//! let result = LmtResult::new(path, &[1.0, 1.0], 2.0, TraceStats::new("Dijkstra"));
//! assert!((result.ratio() - 1.0).abs() < 1e-12);
//! ```

use std::time::Duration;

use masonry_grid::GridCoord;

use crate::path::TracedPath;

/// Divides a path length by the reference length, floored at 1.0.
///
/// A mortar path can never be shorter than the panel dimension it crosses,
/// so ratios below one are clamped.
///
/// # Example
///
/// ```
/// use mortar_types::lmt_ratio;
///
/// assert!((lmt_ratio(150.0, 100.0) - 1.5).abs() < 1e-12);
/// assert!((lmt_ratio(80.0, 100.0) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn lmt_ratio(path_length: f64, normalization_length: f64) -> f64 {
    (path_length / normalization_length).max(1.0)
}

/// Statistics about one shortest-path search.
///
/// # Example
///
/// ```
/// use mortar_types::TraceStats;
/// use std::time::Duration;
///
/// let stats = TraceStats::new("Dijkstra")
///     .with_nodes_expanded(1500)
///     .with_elapsed(Duration::from_millis(50));
/// assert_eq!(stats.nodes_expanded(), 1500);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStats {
    /// Number of nodes expanded during search.
    nodes_expanded: usize,
    /// Time taken by the search.
    time_elapsed: Duration,
    /// Name of the solver used.
    algorithm: String,
}

impl TraceStats {
    /// Creates statistics for the named solver.
    #[must_use]
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            nodes_expanded: 0,
            time_elapsed: Duration::ZERO,
            algorithm: algorithm.into(),
        }
    }

    /// Sets the number of nodes expanded.
    #[must_use]
    pub const fn with_nodes_expanded(mut self, count: usize) -> Self {
        self.nodes_expanded = count;
        self
    }

    /// Sets the elapsed time.
    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.time_elapsed = elapsed;
        self
    }

    /// Returns the number of nodes expanded.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the elapsed time.
    #[must_use]
    pub const fn time_elapsed(&self) -> Duration {
        self.time_elapsed
    }

    /// Returns the solver name.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}

/// LMT measurement for one endpoint pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LmtResult {
    path: TracedPath,
    real_length: f64,
    normalization_length: f64,
    ratio: f64,
    stats: TraceStats,
}

impl LmtResult {
    /// Measures `path` with the given axis scale and normalization length.
    #[must_use]
    pub fn new(
        path: TracedPath,
        axis_scale: &[f64],
        normalization_length: f64,
        stats: TraceStats,
    ) -> Self {
        let real_length = path.real_length(axis_scale);
        Self {
            path,
            real_length,
            normalization_length,
            ratio: lmt_ratio(real_length, normalization_length),
            stats,
        }
    }

    /// The traced path.
    #[must_use]
    pub const fn path(&self) -> &TracedPath {
        &self.path
    }

    /// Real-world path length.
    #[must_use]
    pub const fn real_length(&self) -> f64 {
        self.real_length
    }

    /// Reference length the ratio is normalized by.
    #[must_use]
    pub const fn normalization_length(&self) -> f64 {
        self.normalization_length
    }

    /// LMT ratio, at least 1.0.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Search statistics.
    #[must_use]
    pub const fn stats(&self) -> &TraceStats {
        &self.stats
    }
}

/// A source/target pair for a path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndpointPair {
    /// Path source.
    pub source: GridCoord,
    /// Path target.
    pub target: GridCoord,
}

impl EndpointPair {
    /// Creates a pair.
    #[must_use]
    pub const fn new(source: GridCoord, target: GridCoord) -> Self {
        Self { source, target }
    }
}

/// Aggregate over several endpoint pairs.
///
/// Pairs whose endpoints are not connected are listed in
/// [`unreachable`](Self::unreachable) instead of failing the batch.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LmtSummary {
    results: Vec<LmtResult>,
    unreachable: Vec<EndpointPair>,
}

impl LmtSummary {
    /// Creates a summary from per-pair results and unreachable pairs.
    #[must_use]
    pub const fn new(results: Vec<LmtResult>, unreachable: Vec<EndpointPair>) -> Self {
        Self {
            results,
            unreachable,
        }
    }

    /// Results of the pairs that were connected, in input order.
    #[must_use]
    pub fn results(&self) -> &[LmtResult] {
        &self.results
    }

    /// Pairs with no connecting mortar path, in input order.
    #[must_use]
    pub fn unreachable(&self) -> &[EndpointPair] {
        &self.unreachable
    }

    /// The result with the smallest ratio (the line of minimum trace).
    ///
    /// Ties keep the earlier pair.
    #[must_use]
    pub fn best(&self) -> Option<&LmtResult> {
        self.results
            .iter()
            .reduce(|best, r| if r.ratio < best.ratio { r } else { best })
    }

    /// Smallest ratio over all connected pairs.
    #[must_use]
    pub fn min_ratio(&self) -> Option<f64> {
        self.best().map(LmtResult::ratio)
    }

    /// Mean ratio over all connected pairs.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_ratio(&self) -> Option<f64> {
        if self.results.is_empty() {
            return None;
        }
        let sum: f64 = self.results.iter().map(LmtResult::ratio).sum();
        Some(sum / self.results.len() as f64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_path(len: i32) -> TracedPath {
        let coords: Vec<_> = (0..=len).map(|r| GridCoord::new_2d(r, 0)).collect();
        let nodes = (0..coords.len()).collect();
        TracedPath::new(nodes, coords, f64::from(len))
    }

    fn result(len: i32, norm: f64) -> LmtResult {
        LmtResult::new(straight_path(len), &[1.0, 1.0], norm, TraceStats::new("test"))
    }

    #[test]
    fn test_ratio_floor() {
        assert_relative_eq!(lmt_ratio(1.0, 10.0), 1.0);
        assert_relative_eq!(lmt_ratio(25.0, 10.0), 2.5);
    }

    #[test]
    fn test_lmt_result_scaled() {
        let r = LmtResult::new(straight_path(4), &[2.5, 1.0], 5.0, TraceStats::new("test"));
        assert_relative_eq!(r.real_length(), 10.0);
        assert_relative_eq!(r.ratio(), 2.0);
        assert_relative_eq!(r.normalization_length(), 5.0);
        assert_eq!(r.stats().algorithm(), "test");
    }

    #[test]
    fn test_summary_best_and_mean() {
        let summary = LmtSummary::new(vec![result(6, 4.0), result(5, 4.0), result(8, 4.0)], vec![]);
        assert_relative_eq!(summary.min_ratio().unwrap(), 1.25);
        assert_relative_eq!(summary.best().unwrap().real_length(), 5.0);
        assert_relative_eq!(summary.mean_ratio().unwrap(), (1.5 + 1.25 + 2.0) / 3.0);
    }

    #[test]
    fn test_summary_empty() {
        let pair = EndpointPair::new(GridCoord::new_2d(0, 0), GridCoord::new_2d(3, 0));
        let summary = LmtSummary::new(vec![], vec![pair]);
        assert!(summary.best().is_none());
        assert!(summary.mean_ratio().is_none());
        assert_eq!(summary.unreachable(), &[pair]);
    }

    #[test]
    fn test_stats_builder() {
        let stats = TraceStats::new("Dijkstra")
            .with_nodes_expanded(42)
            .with_elapsed(Duration::from_millis(3));
        assert_eq!(stats.nodes_expanded(), 42);
        assert_eq!(stats.time_elapsed(), Duration::from_millis(3));
    }
}
