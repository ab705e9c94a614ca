use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use downstream::{BaseStream, Collectors, Downstream};

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.iter(|| {
                let result = Downstream::range(0, size)
                    .map(|x| black_box(x * 2))
                    .unwrap()
                    .filter(|x| black_box(x % 4 == 0))
                    .unwrap()
                    .collect(Collectors::to_vec())
                    .unwrap();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("sum", size), size, |b, &size| {
            b.iter(|| black_box(Downstream::range(0, size).sum().unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("flat_map", size), size, |b, &size| {
            b.iter(|| {
                let rows = size / 100;
                let result = Downstream::range(0, rows)
                    .flat_map(|row| Downstream::range(row * 100, row * 100 + 100))
                    .unwrap()
                    .count()
                    .unwrap();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");

    for size in [100, 1_000, 5_000].iter() {
        group.bench_with_input(BenchmarkId::new("linear_scan", size), size, |b, &size| {
            b.iter(|| black_box(Downstream::range(0, size).distinct().unwrap().count().unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("hashed", size), size, |b, &size| {
            b.iter(|| black_box(Downstream::range(0, size).distinct_hashed().unwrap().count().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_distinct);
criterion_main!(benches);
