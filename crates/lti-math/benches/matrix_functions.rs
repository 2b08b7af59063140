use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lti_math::{matrix_exponential, numerical_rank, truncated_convolution_integral, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data: Vec<f64> = (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::from_row_slice(rows, cols, &data)
}

fn bench_matrix_functions(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("matrix_functions");

    for &n in &[2usize, 6, 12, 24] {
        let a = random_matrix(&mut rng, n, n);
        let b = random_matrix(&mut rng, n, 2);

        group.bench_with_input(BenchmarkId::new("exponential", n), &a, |bench, a| {
            bench.iter(|| matrix_exponential(black_box(a), black_box(0.1)).unwrap())
        });

        group.bench_with_input(
            BenchmarkId::new("convolution_integral", n),
            &(a.clone(), b.clone()),
            |bench, (a, b)| {
                bench.iter(|| {
                    truncated_convolution_integral(black_box(a), black_box(b), 0.1, 10).unwrap()
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("rank", n), &a, |bench, a| {
            bench.iter(|| numerical_rank(black_box(a), 1e-8).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix_functions);
criterion_main!(benches);
