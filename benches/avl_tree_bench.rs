//! Benchmark for AvlTree vs standard BTreeMap.
//!
//! Compares insertion, lookup, removal and in-order iteration.

use avltree::AvlTree;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

const SIZES: [u64; 3] = [100, 1000, 10000];

/// Spreads `0..size` over a pseudo-random order.
fn scrambled_keys(size: u64) -> Vec<u64> {
    (0..size)
        .map(|index| index.wrapping_mul(2_654_435_761) % size)
        .collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in SIZES {
        let keys = scrambled_keys(size);

        group.bench_with_input(BenchmarkId::new("AvlTree", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut tree = AvlTree::new();
                for &key in keys {
                    tree.insert(black_box(key), black_box(key * 2));
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in SIZES {
        let tree: AvlTree<u64, u64> = (0..size).map(|key| (key, key)).collect();
        let map: BTreeMap<u64, u64> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(tree.get(black_box(&key)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(map.get(black_box(&key)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let keys = scrambled_keys(size);
        let tree: AvlTree<u64, u64> = (0..size).map(|key| (key, key)).collect();
        let map: BTreeMap<u64, u64> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTree", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for key in keys {
                        black_box(tree.remove(black_box(key)));
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || map.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(black_box(key)));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// iter Benchmark
// =============================================================================

fn benchmark_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iter");

    for size in SIZES {
        let tree: AvlTree<u64, u64> = (0..size).map(|key| (key, key)).collect();
        let map: BTreeMap<u64, u64> = (0..size).map(|key| (key, key)).collect();

        group.bench_function(BenchmarkId::new("AvlTree", size), |bencher| {
            bencher.iter(|| black_box(tree.iter().map(|(_, value)| value).sum::<u64>()));
        });

        group.bench_function(BenchmarkId::new("BTreeMap", size), |bencher| {
            bencher.iter(|| black_box(map.iter().map(|(_, value)| value).sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_get,
    benchmark_remove,
    benchmark_iter
);
criterion_main!(benches);
