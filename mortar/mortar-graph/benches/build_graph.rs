//! Benchmarks for mortar graph construction.
//!
//! Run with: cargo bench -p mortar-graph
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mortar-graph -- --save-baseline main
//! 2. After changes: cargo bench -p mortar-graph -- --baseline main

#![allow(missing_docs, clippy::unwrap_used, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use masonry_grid::{BinaryGrid, GridShape};
use mortar_graph::GraphBuilder;
use mortar_types::GraphConfig;

// =============================================================================
// Test Grid Generation
// =============================================================================

/// Running-bond brick wall: bricks of `len` x `height` cells, one-cell joints,
/// courses offset by half a brick.
fn brick_wall_2d(rows: usize, cols: usize, len: usize, height: usize) -> BinaryGrid {
    let shape = GridShape::new_2d(rows, cols).unwrap();
    BinaryGrid::from_fn(shape, |c| {
        let row = c.axis(0) as usize;
        let col = c.axis(1) as usize;
        let course = row / (height + 1);
        let shift = if course % 2 == 0 { 0 } else { (len + 1) / 2 };
        row % (height + 1) == height || (col + shift) % (len + 1) == len
    })
}

/// Stacked 3D wall: the 2D pattern repeated through the depth with a
/// horizontal joint every few planes.
fn brick_wall_3d(planes: usize, rows: usize, cols: usize) -> BinaryGrid {
    let face = brick_wall_2d(rows, cols, 11, 4);
    let shape = GridShape::new_3d(planes, rows, cols).unwrap();
    BinaryGrid::from_fn(shape, |c| {
        let plane = c.axis(0) as usize;
        let id = c.axis(1) as usize * cols + c.axis(2) as usize;
        plane % 6 == 5 || face.is_foreground_id(id)
    })
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_build_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_2d");

    for size in [128usize, 512, 1024] {
        let grid = brick_wall_2d(size, size, 23, 7);
        group.throughput(Throughput::Elements(grid.len() as u64));

        for level in [4u32, 8] {
            let sequential = GraphConfig::new(level)
                .with_interface_weight(0.5)
                .with_parallel(false);
            group.bench_with_input(
                BenchmarkId::new(format!("sequential_{level}"), size),
                &grid,
                |b, grid| b.iter(|| GraphBuilder::new(black_box(grid), sequential.clone()).build()),
            );

            let parallel = sequential.clone().with_parallel(true).with_batch_size(1 << 14);
            group.bench_with_input(
                BenchmarkId::new(format!("parallel_{level}"), size),
                &grid,
                |b, grid| b.iter(|| GraphBuilder::new(black_box(grid), parallel.clone()).build()),
            );
        }
    }

    group.finish();
}

fn bench_build_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_3d");
    group.sample_size(10);

    let grid = brick_wall_3d(48, 96, 96);
    group.throughput(Throughput::Elements(grid.len() as u64));

    for level in [6u32, 18, 26] {
        let config = GraphConfig::new(level).with_interface_weight(0.5);
        group.bench_with_input(BenchmarkId::new("parallel", level), &grid, |b, grid| {
            b.iter(|| GraphBuilder::new(black_box(grid), config.clone()).build());
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_build_2d, bench_build_3d);
criterion_main!(benches);
