use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use skillforge::config::ParallelConfig;
use skillforge::neighborhood::fraction_field;
use skillforge::{build_contingency, fractions_skill_score, Footprint};
use std::hint::black_box;

fn random_grid(rng: &mut fastrand::Rng, rows: usize, cols: usize) -> Array2<bool> {
    Array2::from_shape_fn((rows, cols), |_| rng.f32() < 0.15)
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(42);
    let observed = random_grid(&mut rng, 256, 256);
    let forecasted = random_grid(&mut rng, 256, 256);

    c.bench_function("contingency (256x256)", |b| {
        b.iter(|| build_contingency(black_box(&observed), black_box(&forecasted)))
    });

    for fp in [Footprint::Box(9), Footprint::Circular(4)] {
        c.bench_function(&format!("fraction_field serial {:?}", fp), |b| {
            b.iter(|| fraction_field(black_box(observed.view()), fp, &ParallelConfig::serial()))
        });
        c.bench_function(&format!("fraction_field parallel {:?}", fp), |b| {
            b.iter(|| fraction_field(black_box(observed.view()), fp, &ParallelConfig::always()))
        });
        c.bench_function(&format!("fss {:?}", fp), |b| {
            b.iter(|| fractions_skill_score(black_box(&observed), black_box(&forecasted), fp))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
