//! Grid connectivity levels.

use std::fmt;

use crate::error::MortarError;

/// Which neighbors count as adjacent.
///
/// The level is the number of neighbor directions of an interior cell:
///
/// | Level | Grid | Neighbors |
/// |-------|------|-----------|
/// | 4 | 2D | edges (face) |
/// | 8 | 2D | edges + corners |
/// | 6 | 3D | faces |
/// | 18 | 3D | faces + edges |
/// | 26 | 3D | faces + edges + corners |
///
/// # Example
///
/// ```
/// use mortar_types::Connectivity;
///
/// let c = Connectivity::new(8, 2).unwrap();
/// assert_eq!(c, Connectivity::Eight);
/// assert_eq!(c.max_nonzero_axes(), 2);
///
/// assert!(Connectivity::new(6, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// 2D face neighbors.
    Four,
    /// 2D face and corner neighbors.
    Eight,
    /// 3D face neighbors.
    Six,
    /// 3D face and edge neighbors.
    Eighteen,
    /// 3D face, edge and corner neighbors.
    TwentySix,
}

impl Connectivity {
    /// Every connectivity, 2D first.
    pub const ALL: [Self; 5] = [
        Self::Four,
        Self::Eight,
        Self::Six,
        Self::Eighteen,
        Self::TwentySix,
    ];

    /// Resolves a numeric level for a grid of `ndim` axes.
    ///
    /// # Errors
    ///
    /// Returns [`MortarError::InvalidConnectivity`] for any combination other
    /// than {4, 8} in 2D and {6, 18, 26} in 3D.
    pub fn new(level: u32, ndim: usize) -> Result<Self, MortarError> {
        match (ndim, level) {
            (2, 4) => Ok(Self::Four),
            (2, 8) => Ok(Self::Eight),
            (3, 6) => Ok(Self::Six),
            (3, 18) => Ok(Self::Eighteen),
            (3, 26) => Ok(Self::TwentySix),
            _ => Err(MortarError::InvalidConnectivity { level, ndim }),
        }
    }

    /// Face-only connectivity for `ndim` axes.
    #[must_use]
    pub const fn face(ndim: usize) -> Option<Self> {
        match ndim {
            2 => Some(Self::Four),
            3 => Some(Self::Six),
            _ => None,
        }
    }

    /// Number of neighbor directions.
    #[must_use]
    pub const fn level(self) -> u32 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
            Self::Six => 6,
            Self::Eighteen => 18,
            Self::TwentySix => 26,
        }
    }

    /// Grid dimensionality this level applies to.
    #[must_use]
    pub const fn ndim(self) -> usize {
        match self {
            Self::Four | Self::Eight => 2,
            Self::Six | Self::Eighteen | Self::TwentySix => 3,
        }
    }

    /// Largest number of nonzero components in a neighbor offset.
    ///
    /// 1 for face, 2 for edge and 3 for corner neighborhoods.
    #[must_use]
    pub const fn max_nonzero_axes(self) -> usize {
        match self {
            Self::Four | Self::Six => 1,
            Self::Eight | Self::Eighteen => 2,
            Self::TwentySix => 3,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-connectivity ({}D)", self.level(), self.ndim())
    }
}
