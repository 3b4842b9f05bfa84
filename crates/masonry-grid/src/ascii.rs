//! ASCII grid format.
//!
//! A small text format for hand-written and fixture grids:
//!
//! - `.` is mortar, `#` is stone
//! - one grid row per line, all rows of equal width
//! - a blank line starts a new plane (3D); all planes must have equal height
//! - lines starting with `//` are comments
//!
//! A single plane parses as a 2D grid.

use crate::error::GridError;
use crate::grid::BinaryGrid;
use crate::shape::GridShape;

/// Mortar cell character.
pub const MORTAR: char = '.';
/// Stone cell character.
pub const STONE: char = '#';

impl BinaryGrid {
    /// Parses a grid from the ASCII format.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Parse`] for unknown characters, ragged rows,
    /// ragged planes or empty input.
    ///
    /// # Example
    ///
    /// ```
    /// use masonry_grid::{BinaryGrid, GridCoord};
    ///
    /// let grid = BinaryGrid::from_ascii(
    ///     "
    ///     ..#
    ///     #..
    ///     ",
    /// )
    /// .unwrap();
    /// assert_eq!(grid.shape().extents(), &[2, 3]);
    /// assert!(!grid.is_foreground(&GridCoord::new_2d(0, 2)));
    /// ```
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let mut planes: Vec<Vec<Vec<bool>>> = Vec::new();
        let mut current: Vec<Vec<bool>> = Vec::new();
        let mut width: Option<usize> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.starts_with("//") {
                continue;
            }
            if line.is_empty() {
                if !current.is_empty() {
                    planes.push(std::mem::take(&mut current));
                }
                continue;
            }

            let row = line
                .chars()
                .map(|ch| match ch {
                    MORTAR => Ok(true),
                    STONE => Ok(false),
                    other => Err(GridError::parse(
                        line_no,
                        format!("unexpected character {other:?}"),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;

            match width {
                Some(w) if w != row.len() => {
                    return Err(GridError::parse(
                        line_no,
                        format!("row has {} cells, expected {w}", row.len()),
                    ));
                }
                Some(_) => {}
                None => width = Some(row.len()),
            }
            current.push(row);
        }
        if !current.is_empty() {
            planes.push(current);
        }

        let (Some(cols), Some(first)) = (width, planes.first()) else {
            return Err(GridError::parse(1, "grid contains no rows"));
        };
        let rows = first.len();
        if let Some(bad) = planes.iter().position(|p| p.len() != rows) {
            return Err(GridError::parse(
                text.lines().count(),
                format!("plane {bad} has {} rows, expected {rows}", planes[bad].len()),
            ));
        }

        let shape = if planes.len() == 1 {
            GridShape::new_2d(rows, cols)?
        } else {
            GridShape::new_3d(planes.len(), rows, cols)?
        };
        let cells = planes.into_iter().flatten().flatten().collect();
        Self::new(shape, cells)
    }

    /// Renders the grid in the ASCII format.
    ///
    /// # Example
    ///
    /// ```
    /// use masonry_grid::BinaryGrid;
    ///
    /// let grid = BinaryGrid::from_ascii(".#\n#.").unwrap();
    /// assert_eq!(grid.to_ascii(), ".#\n#.\n");
    /// ```
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let cols = self.shape().extent(self.ndim() - 1);
        let rows = self.shape().extent(self.ndim() - 2);
        let mut out = String::with_capacity(self.len() + self.len() / cols + 1);
        for (plane_index, plane) in self.cells().chunks(rows * cols).enumerate() {
            if plane_index > 0 {
                out.push('\n');
            }
            for row in plane.chunks(cols) {
                out.extend(row.iter().map(|&m| if m { MORTAR } else { STONE }));
                out.push('\n');
            }
        }
        out
    }
}
