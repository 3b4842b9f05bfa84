//! Grid coordinate type.

use std::fmt;

use nalgebra::Vector3;

/// Maximum number of axes supported by the grid types.
pub const MAX_DIMS: usize = 3;

/// A discrete 2D or 3D coordinate in grid space.
///
/// Components are zero-based and ordered from the slowest-varying axis to the
/// fastest-varying one: `(row, col)` in 2D and `(plane, row, col)` in 3D. The
/// components are signed so that a coordinate plus a neighbor offset can land
/// outside the grid and be rejected by a bounds check instead of wrapping.
///
/// # Example
///
/// ```
/// use masonry_grid::GridCoord;
///
/// let coord = GridCoord::new_2d(3, 4);
/// assert_eq!(coord.ndim(), 2);
/// assert_eq!(coord.axes(), &[3, 4]);
///
/// let voxel = GridCoord::new_3d(1, 2, 3);
/// assert_eq!(voxel.axis(0), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// Components; unused trailing axes are always zero.
    axes: [i32; MAX_DIMS],
    /// Number of meaningful axes (2 or 3).
    ndim: usize,
}

impl GridCoord {
    /// Creates a 2D coordinate.
    #[must_use]
    pub const fn new_2d(row: i32, col: i32) -> Self {
        Self {
            axes: [row, col, 0],
            ndim: 2,
        }
    }

    /// Creates a 3D coordinate.
    #[must_use]
    pub const fn new_3d(plane: i32, row: i32, col: i32) -> Self {
        Self {
            axes: [plane, row, col],
            ndim: 3,
        }
    }

    /// Creates a coordinate from a slice of 2 or 3 components.
    ///
    /// Returns `None` for any other length.
    ///
    /// # Example
    ///
    /// ```
    /// use masonry_grid::GridCoord;
    ///
    /// assert_eq!(GridCoord::from_slice(&[1, 2]), Some(GridCoord::new_2d(1, 2)));
    /// assert_eq!(GridCoord::from_slice(&[1]), None);
    /// ```
    #[must_use]
    pub fn from_slice(components: &[i32]) -> Option<Self> {
        match *components {
            [row, col] => Some(Self::new_2d(row, col)),
            [plane, row, col] => Some(Self::new_3d(plane, row, col)),
            _ => None,
        }
    }

    /// Number of axes of this coordinate.
    #[must_use]
    pub const fn ndim(&self) -> usize {
        self.ndim
    }

    /// The meaningful components, slowest axis first.
    #[must_use]
    pub fn axes(&self) -> &[i32] {
        &self.axes[..self.ndim]
    }

    /// Component along `axis`, or zero past the last axis.
    #[must_use]
    pub fn axis(&self, axis: usize) -> i32 {
        self.axes.get(axis).copied().unwrap_or(0)
    }

    /// Adds a neighbor offset, returning `None` on integer overflow.
    ///
    /// Offset components past [`ndim`](Self::ndim) are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use masonry_grid::GridCoord;
    ///
    /// let c = GridCoord::new_2d(0, 0);
    /// assert_eq!(c.checked_offset([-1, 1, 0]), Some(GridCoord::new_2d(-1, 1)));
    /// ```
    #[must_use]
    pub fn checked_offset(self, delta: [i32; MAX_DIMS]) -> Option<Self> {
        let mut axes = [0; MAX_DIMS];
        for (axis, slot) in axes.iter_mut().enumerate().take(self.ndim) {
            *slot = self.axes[axis].checked_add(delta[axis])?;
        }
        Some(Self {
            axes,
            ndim: self.ndim,
        })
    }

    /// Converts to a floating-point vector, padding 2D coordinates with zero.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(
            f64::from(self.axes[0]),
            f64::from(self.axes[1]),
            f64::from(self.axes[2]),
        )
    }

    /// Euclidean distance to `other` after scaling each axis.
    ///
    /// `scale` holds one factor per axis; missing factors default to 1.0.
    ///
    /// # Example
    ///
    /// ```
    /// use masonry_grid::GridCoord;
    ///
    /// let a = GridCoord::new_2d(0, 0);
    /// let b = GridCoord::new_2d(3, 4);
    /// assert!((a.scaled_distance(&b, &[1.0, 1.0]) - 5.0).abs() < 1e-12);
    /// assert!((a.scaled_distance(&b, &[2.0, 0.5]) - 6.324_555_320_336_759).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn scaled_distance(&self, other: &Self, scale: &[f64]) -> f64 {
        let factor = |axis: usize| scale.get(axis).copied().unwrap_or(1.0);
        let delta = other.to_vector() - self.to_vector();
        Vector3::new(delta.x * factor(0), delta.y * factor(1), delta.z * factor(2)).norm()
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ndim {
            2 => write!(f, "({}, {})", self.axes[0], self.axes[1]),
            _ => write!(f, "({}, {}, {})", self.axes[0], self.axes[1], self.axes[2]),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constructors() {
        let c = GridCoord::new_2d(1, 2);
        assert_eq!(c.ndim(), 2);
        assert_eq!(c.axes(), &[1, 2]);
        assert_eq!(c.axis(2), 0);

        let v = GridCoord::new_3d(1, 2, 3);
        assert_eq!(v.ndim(), 3);
        assert_eq!(v.axes(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(
            GridCoord::from_slice(&[4, 5, 6]),
            Some(GridCoord::new_3d(4, 5, 6))
        );
        assert!(GridCoord::from_slice(&[]).is_none());
        assert!(GridCoord::from_slice(&[1, 2, 3, 4]).is_none());
    }

    #[test]
    fn test_2d_and_3d_never_equal() {
        assert_ne!(GridCoord::new_2d(0, 0), GridCoord::new_3d(0, 0, 0));
    }

    #[test]
    fn test_checked_offset_ignores_unused_axis() {
        let c = GridCoord::new_2d(5, 5);
        let moved = c.checked_offset([1, -1, 1]).unwrap();
        assert_eq!(moved, GridCoord::new_2d(6, 4));
        assert_eq!(moved.axis(2), 0);
    }

    #[test]
    fn test_checked_offset_overflow() {
        let c = GridCoord::new_2d(i32::MAX, 0);
        assert!(c.checked_offset([1, 0, 0]).is_none());
    }

    #[test]
    fn test_scaled_distance_3d() {
        let a = GridCoord::new_3d(0, 0, 0);
        let b = GridCoord::new_3d(1, 1, 1);
        assert_relative_eq!(a.scaled_distance(&b, &[1.0, 1.0, 1.0]), 3.0_f64.sqrt());
        assert_relative_eq!(a.scaled_distance(&b, &[2.0, 0.0, 0.0]), 2.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridCoord::new_2d(1, 2).to_string(), "(1, 2)");
        assert_eq!(GridCoord::new_3d(1, 2, 3).to_string(), "(1, 2, 3)");
    }
}
