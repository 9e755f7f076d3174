use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primitive_ext::{similarity_score, unordered_equal};

/// `n` strings with roughly one duplicate in four
fn sample_strings(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{}", i - i / 4)).collect()
}

/// Benchmark unordered equality on a reversed copy (worst case: no early exit)
fn bench_unordered_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("unordered_equal");

    for size in [16, 256, 4096] {
        let a = sample_strings(size);
        let mut b = a.clone();
        b.reverse();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| unordered_equal(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

/// Benchmark similarity scoring with unequal distinct counts (padding path)
fn bench_similarity_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_score");

    for size in [16, 256, 4096] {
        let a = sample_strings(size);
        let b = sample_strings(size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| similarity_score(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unordered_equal, bench_similarity_score);
criterion_main!(benches);
