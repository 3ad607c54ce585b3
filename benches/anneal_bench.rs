//! Criterion benchmarks for the annealing step engine.
//!
//! Uses random dense weight matrices to measure per-step overhead
//! across problem sizes.

use anneal_assign::assignment::AssignmentMatrix;
use anneal_assign::solver::{ConfigurationSolver, SolverConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(n: usize, seed: u64) -> AssignmentMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights = (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(0.0..100.0)).collect())
        .collect();
    AssignmentMatrix::from_weights(weights).expect("square by construction")
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_step");

    for n in [10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let config = SolverConfig::default().with_seed(7);
            let mut solver =
                ConfigurationSolver::new(random_matrix(n, 7), &config).expect("valid instance");
            b.iter(|| black_box(solver.step().expect("matrix scoring cannot fail")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
