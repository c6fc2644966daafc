//! Statistics Benchmarks
//!
//! Benchmarks for descriptive statistics, standardization, interval
//! estimation, and logistic-regression training.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use staty::ml::models::{LogisticRegression, LogisticRegressionConfigBuilder};
use staty::stats;

/// Create synthetic numeric data
fn create_dataset(n_samples: usize) -> Vec<f64> {
    // Simple LCG random generator for reproducibility
    let mut rng_state: u64 = 42;
    let rand_f64 = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (*state >> 33) as f64 / (u32::MAX as f64)
    };

    (0..n_samples).map(|_| rand_f64(&mut rng_state)).collect()
}

fn bench_descriptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptive");

    for size in [100, 1_000, 10_000] {
        let data = create_dataset(size);

        group.bench_with_input(BenchmarkId::new("mean", size), &data, |b, data| {
            b.iter(|| stats::mean(data).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("var", size), &data, |b, data| {
            b.iter(|| stats::var(data, true).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("median", size), &data, |b, data| {
            b.iter(|| stats::median(data).unwrap())
        });
    }

    group.finish();
}

fn bench_bivariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bivariate");

    for size in [100, 1_000, 10_000] {
        let x = create_dataset(size);
        let y: Vec<f64> = x.iter().map(|&v| 2.0 * v + 1.0).collect();

        group.bench_with_input(
            BenchmarkId::new("correlation_r", size),
            &(x, y),
            |b, (x, y)| b.iter(|| stats::correlation_r(x, y, true).unwrap()),
        );
    }

    group.finish();
}

fn bench_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference");
    let data = create_dataset(1_000);

    group.bench_function("zscore_1000", |b| {
        b.iter(|| stats::zscore(&data).unwrap())
    });

    group.bench_function("t_interval_1000", |b| {
        b.iter(|| stats::t_interval(&data, 0.95).unwrap())
    });

    group.finish();
}

fn bench_logistic_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("logistic_regression");
    group.sample_size(10);

    let n_samples = 200;
    let features = create_dataset(n_samples * 2);
    let x = Array2::from_shape_vec((2, n_samples), features).unwrap();
    let labels: Vec<f64> = (0..n_samples)
        .map(|i| if x[[0, i]] + x[[1, i]] > 1.0 { 1.0 } else { 0.0 })
        .collect();
    let y = Array2::from_shape_vec((1, n_samples), labels).unwrap();

    let config = LogisticRegressionConfigBuilder::new()
        .iterations(500)
        .build();

    group.bench_function("fit_200x2", |b| {
        b.iter(|| {
            let mut model = LogisticRegression::new();
            model.fit_with_config(&x, &y, &config);
            model
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_descriptive,
    bench_bivariate,
    bench_inference,
    bench_logistic_regression
);
criterion_main!(benches);
