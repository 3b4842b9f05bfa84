//! Neighbor offset tables.
//!
//! A table lists the coordinate steps that connect a cell to its neighbors
//! under one [`Connectivity`]. Every step has components in {-1, 0, 1}; the
//! number of nonzero components selects face (1), edge (2) and corner (3)
//! neighbors.
//!
//! Two views are kept:
//!
//! - the full **neighborhood** (`level` offsets), used for adjacency queries
//! - the **forward** half (`level / 2` offsets), one offset from each
//!   antipodal pair `{+o, -o}`, used to emit each undirected edge once
//!
//! # Example
//!
//! ```
//! use mortar_graph::NeighborOffsetTable;
//! use mortar_types::Connectivity;
//!
//! let table = NeighborOffsetTable::cached(Connectivity::TwentySix);
//! assert_eq!(table.len(), 26);
//! assert_eq!(table.forward().len(), 13);
//! ```

use std::sync::OnceLock;

use masonry_grid::MAX_DIMS;
use mortar_types::Connectivity;

/// One neighbor step with its precomputed Euclidean length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborOffset {
    delta: [i32; MAX_DIMS],
    length: f64,
}

impl NeighborOffset {
    fn new(delta: [i32; MAX_DIMS]) -> Self {
        let squared: i32 = delta.iter().map(|d| d * d).sum();
        Self {
            delta,
            length: f64::from(squared).sqrt(),
        }
    }

    /// Coordinate step; unused trailing axes are zero.
    #[must_use]
    pub const fn delta(&self) -> [i32; MAX_DIMS] {
        self.delta
    }

    /// Euclidean length: 1, √2 or √3.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Number of nonzero components.
    #[must_use]
    pub fn nonzero_axes(&self) -> usize {
        self.delta.iter().filter(|&&d| d != 0).count()
    }

    /// The antipodal offset.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            delta: self.delta.map(|d| -d),
            length: self.length,
        }
    }

    /// Whether the first nonzero component is positive.
    ///
    /// Exactly one offset of every antipodal pair is forward.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.delta.iter().find(|&&d| d != 0).is_some_and(|&d| d > 0)
    }
}

/// Neighbor offsets for one connectivity.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborOffsetTable {
    connectivity: Connectivity,
    neighborhood: Vec<NeighborOffset>,
    forward: Vec<NeighborOffset>,
}

impl NeighborOffsetTable {
    /// Computes the table for `connectivity`.
    ///
    /// Offsets are enumerated with the first axis varying slowest, so the
    /// order is deterministic. Prefer [`cached`](Self::cached) on hot paths.
    #[must_use]
    pub fn new(connectivity: Connectivity) -> Self {
        let ndim = connectivity.ndim();
        let max_nonzero = connectivity.max_nonzero_axes();

        let mut neighborhood = Vec::with_capacity(connectivity.level() as usize);
        let steps = 3usize.pow(u32::try_from(ndim).unwrap_or(3));
        for code in 0..steps {
            let mut delta = [0i32; MAX_DIMS];
            let mut rest = code;
            for axis in (0..ndim).rev() {
                // rest % 3 is in 0..3, so the cast cannot truncate.
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let digit = (rest % 3) as i32;
                delta[axis] = digit - 1;
                rest /= 3;
            }
            let offset = NeighborOffset::new(delta);
            let nonzero = offset.nonzero_axes();
            if nonzero > 0 && nonzero <= max_nonzero {
                neighborhood.push(offset);
            }
        }

        let forward = neighborhood
            .iter()
            .copied()
            .filter(NeighborOffset::is_forward)
            .collect();

        Self {
            connectivity,
            neighborhood,
            forward,
        }
    }

    /// Shared table for `connectivity`, computed on first use.
    #[must_use]
    pub fn cached(connectivity: Connectivity) -> &'static Self {
        static TABLES: OnceLock<[NeighborOffsetTable; 5]> = OnceLock::new();
        let tables = TABLES.get_or_init(|| Connectivity::ALL.map(Self::new));
        let slot = match connectivity {
            Connectivity::Four => 0,
            Connectivity::Eight => 1,
            Connectivity::Six => 2,
            Connectivity::Eighteen => 3,
            Connectivity::TwentySix => 4,
        };
        &tables[slot]
    }

    /// Face-only table for a grid of `ndim` axes (4 in 2D, 6 in 3D).
    ///
    /// Returns `None` for any other dimensionality.
    #[must_use]
    pub fn faces(ndim: usize) -> Option<&'static Self> {
        Connectivity::face(ndim).map(Self::cached)
    }

    /// The connectivity this table describes.
    #[must_use]
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Size of the full neighborhood (equals the connectivity level).
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighborhood.len()
    }

    /// Whether the table is empty (never true for a valid connectivity).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighborhood.is_empty()
    }

    /// All neighbor offsets.
    #[must_use]
    pub fn neighborhood(&self) -> &[NeighborOffset] {
        &self.neighborhood
    }

    /// One offset per antipodal pair.
    #[must_use]
    pub fn forward(&self) -> &[NeighborOffset] {
        &self.forward
    }
}
