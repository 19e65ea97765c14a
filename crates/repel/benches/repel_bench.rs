//! Criterion benchmarks for the repulsion solver.
//! Focus sizes: n in {10, 50, 100} labels on a unit plot.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use repel::prelude::*;

fn random_scatter(n: usize, seed: u64) -> (Vec<Vector2<f64>>, Vec<Box2>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<Vector2<f64>> = (0..n)
        .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();
    let boxes = points
        .iter()
        .map(|p| Box2::padded_around(*p, 0.05, 0.02))
        .collect();
    (points, boxes)
}

fn bench_repel(c: &mut Criterion) {
    let mut group = c.benchmark_group("repel");
    for &n in &[10usize, 50, 100] {
        group.bench_with_input(BenchmarkId::new("repel_boxes", n), &n, |b, &n| {
            let cfg = RepelCfg {
                xlim: Interval::new(0.0, 1.0),
                ylim: Interval::new(0.0, 1.0),
                force: 1e-4,
                maxiter: 100,
                ..RepelCfg::default()
            };
            b.iter_batched(
                || random_scatter(n, 43),
                |(points, boxes)| {
                    let _out = repel_boxes(&points, &boxes, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_repel);
criterion_main!(benches);
