use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rs2_iter::prelude::*;
use rs2_iter::{count, from_iter, zip};

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.iter(|| {
                let result = count(0, size, 1)
                    .map(|x| black_box(x * 2))
                    .filter(|x| black_box(x % 4 == 0))
                    .to_vec();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("sum", size), size, |b, &size| {
            b.iter(|| black_box(count(0i64, size as i64, 1).sum()));
        });

        group.bench_with_input(BenchmarkId::new("repeat_limit", size), size, |b, &size| {
            b.iter(|| {
                let result = count(0, 100, 1).repeat().limit(size as usize).sum();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("group_by_in_order", size), size, |b, &size| {
            b.iter(|| {
                let mut groups = from_iter(0..size).group_by(|x| x / 10);
                let mut total = 0;
                while let Some(kv) = groups.next() {
                    total += kv.value.sum().unwrap_or_default();
                }
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("group_by_buffered", size), size, |b, &size| {
            b.iter(|| {
                let groups = from_iter(0..size).group_by(|x| x / 10).to_vec().unwrap_or_default();
                let total: i32 = groups
                    .into_iter()
                    .map(|kv| kv.value.sum().unwrap_or_default())
                    .sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("unzip_zip", size), size, |b, &size| {
            b.iter(|| {
                let (keys, values) = count(0, size, 1).enumerate().unzip();
                black_box(zip(keys, values).to_vec())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_fan_out);
criterion_main!(benches);
