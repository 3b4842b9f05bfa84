//! Automatic endpoint generation across a panel.

use masonry_grid::{BinaryGrid, GridCoord};
use mortar_types::{EndpointPair, MortarError};

/// Pairs mortar cells on opposite faces of the grid along `axis`.
///
/// Sources are the mortar cells with index 0 along `axis`, in id order,
/// keeping every `stride`-th one. Each source is paired with the mortar cell
/// on the far face (last index along `axis`) closest to it in the remaining
/// axes; ties go to the lower id. Returns an empty list when either face
/// has no mortar.
///
/// # Errors
///
/// Returns [`MortarError::InvalidConfig`] if `axis` is not an axis of the
/// grid or `stride` is zero.
///
/// # Example
///
/// ```
/// use masonry_grid::{BinaryGrid, GridCoord};
/// use mortar_trace::facing_pairs;
///
/// let grid = BinaryGrid::from_ascii(
///     "
///     #.##.#
///     ......
///     ###.##.
///     ",
/// )
/// .unwrap();
///
/// let pairs = facing_pairs(&grid, 0, 1).unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].source, GridCoord::new_2d(0, 1));
/// assert_eq!(pairs[0].target, GridCoord::new_2d(2, 2));
/// assert_eq!(pairs[1].target, GridCoord::new_2d(2, 5));
/// ```
pub fn facing_pairs(
    grid: &BinaryGrid,
    axis: usize,
    stride: usize,
) -> Result<Vec<EndpointPair>, MortarError> {
    if axis >= grid.ndim() {
        return Err(MortarError::invalid_config(format!(
            "axis {axis} does not exist in a {}D grid",
            grid.ndim()
        )));
    }
    if stride == 0 {
        return Err(MortarError::invalid_config("endpoint stride must be positive"));
    }

    let last = i32::try_from(grid.shape().extent(axis) - 1)
        .map_err(|_| MortarError::invalid_config("grid extent exceeds i32"))?;
    let face = |index: i32| -> Vec<GridCoord> {
        grid.indexer()
            .coords()
            .filter(|coord| coord.axis(axis) == index && grid.is_foreground(coord))
            .collect()
    };

    let entry = face(0);
    let exit = face(last);

    let pairs = entry
        .into_iter()
        .step_by(stride)
        .filter_map(|source| {
            // `exit` is in id order, so `min_by_key` keeps the lowest id on ties.
            exit.iter()
                .min_by_key(|target| lateral_distance(&source, target, axis))
                .map(|&target| EndpointPair::new(source, target))
        })
        .collect();
    Ok(pairs)
}

/// Squared distance over all axes except `axis`.
fn lateral_distance(a: &GridCoord, b: &GridCoord, axis: usize) -> i64 {
    a.axes()
        .iter()
        .zip(b.axes())
        .enumerate()
        .filter(|&(i, _)| i != axis)
        .map(|(_, (&x, &y))| {
            let d = i64::from(x) - i64::from(y);
            d * d
        })
        .sum()
}
