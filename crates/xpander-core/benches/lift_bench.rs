//! Criterion microbenchmarks for lift construction and validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xpander_core::{second_largest_magnitude, LiftConfig, LiftGenerator};

fn bench_candidate_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_build");
    for k in [4, 8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            let generator = LiftGenerator::new(LiftConfig::new(8, k)).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| black_box(generator.candidate(&mut rng)));
        });
    }
    group.finish();
}

fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_largest_magnitude");
    for k in [4, 8, 16] {
        let generator = LiftGenerator::new(LiftConfig::new(8, k)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let g = generator.candidate(&mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, _| {
            b.iter(|| black_box(second_largest_magnitude(g.adjacency())));
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("accepted_lift");
    group.sample_size(10);
    for k in [2, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| {
                let generator =
                    LiftGenerator::new(LiftConfig::new(3, k).with_seed(42)).unwrap();
                black_box(generator.run().unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_candidate_build, bench_spectrum, bench_full_run);
criterion_main!(benches);
