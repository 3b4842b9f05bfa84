//! Property-based tests for coordinate ↔ id conversion.
//!
//! Run with: cargo test -p masonry-grid -- proptest

#![allow(clippy::unwrap_used)]

use masonry_grid::{GridCoord, GridError, GridIndexer, GridShape};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A 2D or 3D shape with small extents.
fn arb_shape() -> impl Strategy<Value = GridShape> {
    prop_oneof![
        (1usize..40, 1usize..40).prop_map(|(r, c)| GridShape::new_2d(r, c).unwrap()),
        (1usize..12, 1usize..12, 1usize..12)
            .prop_map(|(p, r, c)| GridShape::new_3d(p, r, c).unwrap()),
    ]
}

/// A shape together with one in-bounds coordinate.
fn arb_shape_and_coord() -> impl Strategy<Value = (GridShape, GridCoord)> {
    arb_shape().prop_flat_map(|shape| {
        let axes: Vec<_> = shape
            .extents()
            .iter()
            .map(|&e| 0..i32::try_from(e).unwrap())
            .collect();
        (Just(shape), axes).prop_map(|(shape, axes)| {
            (shape, GridCoord::from_slice(&axes).unwrap())
        })
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_coordinate_round_trip((shape, coord) in arb_shape_and_coord()) {
        let indexer = GridIndexer::new(shape);
        let id = indexer.coordinate_to_id(&coord).unwrap();
        prop_assert!(id < shape.len());
        prop_assert_eq!(indexer.id_to_coordinate(id).unwrap(), coord);
    }

    #[test]
    fn proptest_id_round_trip(shape in arb_shape(), seed in any::<usize>()) {
        let indexer = GridIndexer::new(shape);
        let id = seed % shape.len();
        let coord = indexer.id_to_coordinate(id).unwrap();
        prop_assert_eq!(indexer.coordinate_to_id(&coord).unwrap(), id);
    }

    #[test]
    fn proptest_last_axis_is_fastest((shape, coord) in arb_shape_and_coord()) {
        let indexer = GridIndexer::new(shape);
        let last = shape.ndim() - 1;
        let mut delta = [0; 3];
        delta[last] = 1;
        if let Some((_, next_id)) = indexer.step(&coord, delta) {
            let id = indexer.coordinate_to_id(&coord).unwrap();
            prop_assert_eq!(next_id, id + 1);
        }
    }

    #[test]
    fn proptest_outside_is_rejected(shape in arb_shape(), axis in 0usize..3, below in any::<bool>()) {
        let indexer = GridIndexer::new(shape);
        let axis = axis % shape.ndim();
        let mut axes = vec![0i32; shape.ndim()];
        axes[axis] = if below {
            -1
        } else {
            i32::try_from(shape.extent(axis)).unwrap()
        };
        let coord = GridCoord::from_slice(&axes).unwrap();
        let is_out_of_bounds = matches!(
            indexer.coordinate_to_id(&coord),
            Err(GridError::OutOfBounds { .. })
        );
        prop_assert!(is_out_of_bounds);
    }
}
