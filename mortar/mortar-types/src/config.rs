//! Configuration types for graph building and path tracing.
//!
//! # Example
//!
//! ```
//! use mortar_types::{GraphConfig, SearchLimits, TraceConfig};
//! use std::time::Duration;
//!
//! let graph = GraphConfig::new(8).with_interface_weight(0.5);
//! assert!(graph.validate().is_ok());
//!
//! let trace = TraceConfig::default()
//!     .with_axis_scale(vec![2.5, 2.5])
//!     .with_normalization_length(1200.0)
//!     .with_limits(SearchLimits::default().with_timeout(Duration::from_secs(30)));
//! assert!(trace.validate().is_ok());
//! ```

use std::time::Duration;

use crate::cancel::CancelToken;
use crate::connectivity::Connectivity;
use crate::error::MortarError;

/// Default number of cells per build batch.
pub const DEFAULT_BATCH_SIZE: usize = 1 << 16;

/// Configuration for building a mortar graph.
///
/// Node weights are passed to the builder separately since they are an
/// array, not a setting.
///
/// # Example
///
/// ```
/// use mortar_types::{Connectivity, GraphConfig};
///
/// let config = GraphConfig::new(26)
///     .with_interface_weight(0.25)
///     .with_parallel(false);
///
/// assert_eq!(config.connectivity(3).unwrap(), Connectivity::TwentySix);
/// assert!(config.connectivity(2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Connectivity level (4/8 in 2D, 6/18/26 in 3D).
    connectivity_level: u32,
    /// Multiplier for edges touching the stone/mortar interface, in (0, 1].
    interface_weight: f64,
    /// Whether to build batches on the rayon thread pool.
    parallel: bool,
    /// Cells per build batch.
    batch_size: usize,
}

impl GraphConfig {
    /// Creates a configuration for the given connectivity level.
    ///
    /// Defaults:
    /// - Interface weight: 1.0 (no down-weighting)
    /// - Parallel: true
    /// - Batch size: 65 536 cells
    #[must_use]
    pub const fn new(connectivity_level: u32) -> Self {
        Self {
            connectivity_level,
            interface_weight: 1.0,
            parallel: true,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sets the connectivity level.
    #[must_use]
    pub const fn with_connectivity_level(mut self, level: u32) -> Self {
        self.connectivity_level = level;
        self
    }

    /// Sets the interface weight.
    ///
    /// Values below 1.0 make paths hug the stone faces.
    #[must_use]
    pub const fn with_interface_weight(mut self, weight: f64) -> Self {
        self.interface_weight = weight;
        self
    }

    /// Sets whether batches are built in parallel.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the number of cells per build batch.
    #[must_use]
    pub const fn with_batch_size(mut self, cells: usize) -> Self {
        self.batch_size = cells;
        self
    }

    /// Returns the connectivity level.
    #[must_use]
    pub const fn connectivity_level(&self) -> u32 {
        self.connectivity_level
    }

    /// Returns the interface weight.
    #[must_use]
    pub const fn interface_weight(&self) -> f64 {
        self.interface_weight
    }

    /// Returns whether batches are built in parallel.
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the number of cells per build batch.
    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Resolves the connectivity level for a grid of `ndim` axes.
    ///
    /// # Errors
    ///
    /// Returns [`MortarError::InvalidConnectivity`] when the level does not
    /// apply to `ndim`.
    pub fn connectivity(&self, ndim: usize) -> Result<Connectivity, MortarError> {
        Connectivity::new(self.connectivity_level, ndim)
    }

    /// Validates the dimension-independent settings.
    ///
    /// # Errors
    ///
    /// Returns [`MortarError::InvalidConfig`] if the interface weight is not
    /// in (0, 1] or the batch size is zero.
    pub fn validate(&self) -> Result<(), MortarError> {
        let w = self.interface_weight;
        if !(w.is_finite() && w > 0.0 && w <= 1.0) {
            return Err(MortarError::invalid_config(format!(
                "interface weight must be in (0, 1], got {w}"
            )));
        }
        if self.batch_size == 0 {
            return Err(MortarError::invalid_config("batch size must be positive"));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Resource limits for a single shortest-path search.
///
/// # Example
///
/// ```
/// use mortar_types::{CancelToken, SearchLimits};
/// use std::time::Duration;
///
/// let token = CancelToken::new();
/// let limits = SearchLimits::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_max_expanded(5_000_000)
///     .with_cancel_token(token.clone());
///
/// assert_eq!(limits.max_expanded(), Some(5_000_000));
/// assert!(!limits.is_cancelled());
/// token.cancel();
/// assert!(limits.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Maximum wall-clock time per search.
    timeout: Option<Duration>,
    /// Maximum number of expanded nodes per search.
    max_expanded: Option<usize>,
    /// Caller-controlled cancellation.
    #[cfg_attr(feature = "serde", serde(skip))]
    cancel: Option<CancelToken>,
}

impl SearchLimits {
    /// No limits.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            timeout: None,
            max_expanded: None,
            cancel: None,
        }
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the expansion limit.
    #[must_use]
    pub const fn with_max_expanded(mut self, max: usize) -> Self {
        self.max_expanded = Some(max);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Returns the timeout, if set.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the expansion limit, if set.
    #[must_use]
    pub const fn max_expanded(&self) -> Option<usize> {
        self.max_expanded
    }

    /// Returns the cancellation token, if set.
    #[must_use]
    pub const fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    /// Whether the attached token, if any, was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Whether no limit is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.timeout.is_none() && self.max_expanded.is_none() && self.cancel.is_none()
    }
}

/// Configuration for converting shortest paths to LMT ratios.
///
/// # Example
///
/// ```
/// use mortar_types::TraceConfig;
///
/// // 0.5 mm pixels, 600 mm panel height
/// let config = TraceConfig::default()
///     .with_axis_scale(vec![0.5, 0.5])
///     .with_normalization_length(600.0);
///
/// assert!((config.scale(0) - 0.5).abs() < 1e-12);
/// assert!((config.scale(2) - 1.0).abs() < 1e-12); // missing axes default to 1
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceConfig {
    /// Real-world size of one cell along each axis, slowest axis first.
    axis_scale: Vec<f64>,
    /// Reference length (panel height or length) in real-world units.
    normalization_length: f64,
    /// Limits applied to every search.
    limits: SearchLimits,
}

impl TraceConfig {
    /// Creates a configuration with unit scale and unit normalization.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            axis_scale: Vec::new(),
            normalization_length: 1.0,
            limits: SearchLimits::none(),
        }
    }

    /// Sets the per-axis real-world scale factors.
    #[must_use]
    pub fn with_axis_scale(mut self, scale: Vec<f64>) -> Self {
        self.axis_scale = scale;
        self
    }

    /// Sets the normalization length.
    #[must_use]
    pub const fn with_normalization_length(mut self, length: f64) -> Self {
        self.normalization_length = length;
        self
    }

    /// Sets the search limits.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the per-axis scale factors as given.
    #[must_use]
    pub fn axis_scale(&self) -> &[f64] {
        &self.axis_scale
    }

    /// Scale factor for `axis`; 1.0 when not given.
    #[must_use]
    pub fn scale(&self, axis: usize) -> f64 {
        self.axis_scale.get(axis).copied().unwrap_or(1.0)
    }

    /// Returns the normalization length.
    #[must_use]
    pub const fn normalization_length(&self) -> f64 {
        self.normalization_length
    }

    /// Returns the search limits.
    #[must_use]
    pub const fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Validates the configuration for a grid of `ndim` axes.
    ///
    /// # Errors
    ///
    /// Returns [`MortarError::InvalidConfig`] if more scale factors than axes
    /// are given, any factor is not positive and finite, or the normalization
    /// length is not positive and finite.
    pub fn validate_for(&self, ndim: usize) -> Result<(), MortarError> {
        if self.axis_scale.len() > ndim {
            return Err(MortarError::invalid_config(format!(
                "{} scale factors given for a {ndim}D grid",
                self.axis_scale.len()
            )));
        }
        self.validate()
    }

    /// Validates the dimension-independent settings.
    ///
    /// # Errors
    ///
    /// See [`TraceConfig::validate_for`].
    pub fn validate(&self) -> Result<(), MortarError> {
        if let Some(bad) = self
            .axis_scale
            .iter()
            .find(|s| !(s.is_finite() && **s > 0.0))
        {
            return Err(MortarError::invalid_config(format!(
                "axis scale must be positive and finite, got {bad}"
            )));
        }
        let n = self.normalization_length;
        if !(n.is_finite() && n > 0.0) {
            return Err(MortarError::invalid_config(format!(
                "normalization length must be positive and finite, got {n}"
            )));
        }
        Ok(())
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::new()
    }
}
