//! Performance measurement for partitioning, grid solving, and the full pipeline

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use mapweave::algorithm::grid::ConstraintGrid;
use mapweave::math::sampling::RandomSource;
use mapweave::pipeline::config::GenerationParams;
use mapweave::pipeline::runner::{GenerationPipeline, build_default_catalog};
use mapweave::spatial::partition::PartitionTree;
use mapweave::spatial::rect::Rectangle;
use std::hint::black_box;

/// Measures partition tree generation over a large canvas
fn bench_partition_256(c: &mut Criterion) {
    c.bench_function("partition_256x256_depth_4", |b| {
        b.iter(|| {
            let mut rng = RandomSource::new(12345);
            let tree =
                PartitionTree::generate(Rectangle::new(0, 0, 256, 256), 8, 4, &mut rng);
            black_box(tree.collect_leaves().len());
        });
    });
}

/// Measures a full grid solve with the default catalog
fn bench_solve_40x40(c: &mut Criterion) {
    let catalog = build_default_catalog();
    c.bench_function("solve_40x40", |b| {
        b.iter(|| {
            let mut grid = ConstraintGrid::new(40, 40, &catalog, RandomSource::new(12345));
            black_box(grid.run_to_completion(10_000));
        });
    });
}

/// Measures the complete parameter-to-artifact pipeline
fn bench_pipeline_default(c: &mut Criterion) {
    c.bench_function("pipeline_default_params", |b| {
        b.iter(|| {
            let mut pipeline = GenerationPipeline::new();
            let params = GenerationParams::default();
            if let Ok(artifact) = pipeline.generate(&params, "bench", "dungeon", Some("bench")) {
                black_box(artifact.metadata.tile_count);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_partition_256,
    bench_solve_40x40,
    bench_pipeline_default
);
criterion_main!(benches);
