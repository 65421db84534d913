// File: crates/plot-core/benches/kde_bench.rs
// Purpose: Benchmark kernel density estimation across sample counts and grid sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plot_core::{KernelDensityEstimator, LinearScale};

fn gen_samples(n: usize) -> Vec<f64> {
    // Deterministic age-like values in [0, 90).
    (0..n).map(|i| (i as f64 * 7.31) % 90.0).collect()
}

fn bench_kde(c: &mut Criterion) {
    let mut group = c.benchmark_group("kde_estimate");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let samples = gen_samples(n);
        for &grid_n in &[40usize, 200usize] {
            let grid = LinearScale::new().domain(0.0, 90.0).ticks(grid_n);
            let est = KernelDensityEstimator::new(grid, 7.0);
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_g{grid_n}")),
                &samples,
                |b, s| {
                    b.iter(|| {
                        let _ = black_box(est.estimate(black_box(s)));
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_kde);
criterion_main!(benches);
