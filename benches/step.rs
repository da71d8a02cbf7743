//! Benchmarks for baking and the per-frame simulation step.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use meshflow::prelude::*;

fn quad() -> MeshPart {
    MeshPart::new(vec![
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ])
    .with_uvs(vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE])
    .with_indices(vec![0, 1, 2, 2, 1, 3])
}

fn bench_bake(c: &mut Criterion) {
    let mut group = c.benchmark_group("bake");

    for count in [10_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let parts = vec![quad()];
            b.iter(|| black_box(bake(&parts, count).unwrap()))
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    group.sample_size(20);

    for count in [10_000usize, 100_000, 250_000] {
        let baked = bake(&[quad()], count).unwrap();
        let mut sim = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                sim.step(black_box(1.0 / 60.0));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bake, bench_step);
criterion_main!(benches);
