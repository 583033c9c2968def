//! Benchmark comparison: swiss_table vs std and hashbrown maps, single-threaded.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swiss_table::SwissMap;

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("swiss_table", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: SwissMap<usize, usize> = SwissMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = std::collections::HashMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            });
        });

        group.bench_with_input(BenchmarkId::new("hashbrown", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = hashbrown::HashMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            });
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let swiss: SwissMap<usize, usize> = (0..size).map(|i| (i, i * 2)).collect();
        group.bench_with_input(BenchmarkId::new("swiss_table", size), &size, |b, &size| {
            b.iter(|| {
                let mut hits = 0;
                // Every other probe misses.
                for i in 0..size * 2 {
                    if swiss.get(black_box(&i)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });

        let std_map: std::collections::HashMap<usize, usize> =
            (0..size).map(|i| (i, i * 2)).collect();
        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                let mut hits = 0;
                for i in 0..size * 2 {
                    if std_map.get(black_box(&i)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });

        let brown: hashbrown::HashMap<usize, usize> = (0..size).map(|i| (i, i * 2)).collect();
        group.bench_with_input(BenchmarkId::new("hashbrown", size), &size, |b, &size| {
            b.iter(|| {
                let mut hits = 0;
                for i in 0..size * 2 {
                    if brown.get(black_box(&i)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("swiss_table", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size).map(|i| (i, i)).collect::<SwissMap<usize, usize>>(),
                |mut map| {
                    for i in 0..size {
                        black_box(map.remove(&black_box(i)));
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    (0..size)
                        .map(|i| (i, i))
                        .collect::<std::collections::HashMap<usize, usize>>()
                },
                |mut map| {
                    for i in 0..size {
                        black_box(map.remove(&black_box(i)));
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("hashbrown", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    (0..size)
                        .map(|i| (i, i))
                        .collect::<hashbrown::HashMap<usize, usize>>()
                },
                |mut map| {
                    for i in 0..size {
                        black_box(map.remove(&black_box(i)));
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_remove);
criterion_main!(benches);
