//! Error types for mortar graph and trace operations.
//!
//! This module defines the [`MortarError`] enum which represents every
//! failure of graph construction and path queries.

use std::time::Duration;

use masonry_grid::{GridCoord, GridError};

/// Errors that can occur while building a mortar graph or tracing a path.
///
/// All variants are deterministic input or topology conditions. Only
/// [`MortarError::NoPathFound`] is worth handling by retrying with other
/// endpoints; the others indicate a misconfiguration.
///
/// # Example
///
/// ```
/// use mortar_types::MortarError;
/// use masonry_grid::GridCoord;
///
/// let error = MortarError::NoPathFound {
///     start: GridCoord::new_2d(0, 0),
///     goal: GridCoord::new_2d(9, 9),
/// };
///
/// assert!(error.to_string().contains("no path found"));
/// assert!(error.is_recoverable());
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MortarError {
    /// A coordinate lies outside the grid extent.
    #[error("coordinate {coord} is out of bounds")]
    OutOfBounds {
        /// The offending coordinate.
        coord: GridCoord,
    },

    /// The connectivity level is not valid for the grid dimensionality.
    ///
    /// 2D grids accept 4 or 8, 3D grids accept 6, 18 or 26.
    #[error("connectivity {level} is not valid for a {ndim}D grid")]
    InvalidConnectivity {
        /// The requested level.
        level: u32,
        /// Grid dimensionality.
        ndim: usize,
    },

    /// The node-weight array does not have the grid's shape.
    #[error("node weights have shape {actual:?}, grid has {expected:?}")]
    ShapeMismatch {
        /// Grid extents.
        expected: Vec<usize>,
        /// Node-weight extents.
        actual: Vec<usize>,
    },

    /// A mortar cell carries a non-positive or non-finite node weight.
    #[error("node weight {value} at {coord} must be positive and finite")]
    InvalidNodeWeight {
        /// Cell carrying the weight.
        coord: GridCoord,
        /// The rejected value.
        value: f64,
    },

    /// A path endpoint is outside the grid or on a stone cell.
    #[error("endpoint {coord} is invalid: {reason}")]
    InvalidEndpoint {
        /// The offending endpoint.
        coord: GridCoord,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The endpoints lie in disconnected mortar components.
    #[error("no path found from {start} to {goal}")]
    NoPathFound {
        /// The source coordinate.
        start: GridCoord,
        /// The target coordinate.
        goal: GridCoord,
    },

    /// An invalid configuration parameter was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The shortest-path search exceeded its time limit.
    #[error("path search timed out after {0:?}")]
    Timeout(Duration),

    /// The shortest-path search expanded more nodes than allowed.
    #[error("path search exceeded the limit of {0} expanded nodes")]
    NodeLimitExceeded(usize),

    /// The shortest-path search was cancelled by the caller.
    #[error("path search was cancelled")]
    Cancelled,

    /// Any other grid error.
    #[error(transparent)]
    Grid(GridError),
}

impl MortarError {
    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use mortar_types::MortarError;
    ///
    /// let error = MortarError::invalid_config("interface weight must be in (0, 1]");
    /// assert!(error.to_string().contains("interface weight"));
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is a "no path found" error.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns `true` if a caller can recover by choosing other endpoints.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.is_no_path_found()
    }
}

impl From<GridError> for MortarError {
    fn from(error: GridError) -> Self {
        match error {
            GridError::OutOfBounds { coord } => Self::OutOfBounds { coord },
            GridError::ShapeMismatch { expected, actual } => {
                Self::ShapeMismatch { expected, actual }
            }
            other => Self::Grid(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_connectivity_display() {
        let error = MortarError::InvalidConnectivity { level: 6, ndim: 2 };
        assert_eq!(error.to_string(), "connectivity 6 is not valid for a 2D grid");
    }

    #[test]
    fn test_invalid_endpoint_display() {
        let error = MortarError::InvalidEndpoint {
            coord: GridCoord::new_2d(1, 2),
            reason: "cell is stone",
        };
        assert!(error.to_string().contains("(1, 2)"));
        assert!(error.to_string().contains("stone"));
    }

    #[test]
    fn test_recoverable() {
        let no_path = MortarError::NoPathFound {
            start: GridCoord::new_2d(0, 0),
            goal: GridCoord::new_2d(1, 1),
        };
        assert!(no_path.is_recoverable());
        assert!(!MortarError::Cancelled.is_recoverable());
        assert!(!MortarError::Timeout(Duration::from_secs(1)).is_recoverable());
        assert!(MortarError::Timeout(Duration::from_secs(1)).is_timeout());
    }

    #[test]
    fn test_from_grid_error() {
        let coord = GridCoord::new_2d(-1, 0);
        let error: MortarError = GridError::OutOfBounds { coord }.into();
        assert!(matches!(error, MortarError::OutOfBounds { coord: c } if c == coord));

        let error: MortarError = GridError::ShapeMismatch {
            expected: vec![2, 2],
            actual: vec![3, 3],
        }
        .into();
        assert!(matches!(error, MortarError::ShapeMismatch { .. }));

        let error: MortarError = GridError::IntegerOverflow.into();
        assert!(matches!(error, MortarError::Grid(GridError::IntegerOverflow)));
    }

    #[test]
    fn test_invalid_config_helper() {
        let error = MortarError::invalid_config("test config error");
        assert!(matches!(error, MortarError::InvalidConfig(msg) if msg == "test config error"));
    }
}
