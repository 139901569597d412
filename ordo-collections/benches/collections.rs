//! Benchmarks for the ordered containers.
//!
//! Compares each structure against its closest `std` counterpart.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, VecDeque};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ordo_collections::heap::heap_sort;
use ordo_collections::{BoundedQueue, OrderedTree, PriorityQueue};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_keys(n: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    (0..n).map(|_| rng.gen_range(0..i64::MAX)).collect()
}

// ============================================================================
// Priority queue
// ============================================================================

fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue_fill_drain");

    for n in SIZES {
        let keys = random_keys(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("ordo", n), &keys, |b, keys| {
            b.iter(|| {
                let mut pq: PriorityQueue = PriorityQueue::with_capacity(keys.len());
                for &key in keys {
                    pq.insert(key).unwrap();
                }
                while let Ok(min) = pq.delete_min() {
                    black_box(min);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(keys.len());
                for &key in keys {
                    heap.push(Reverse(key));
                }
                while let Some(Reverse(min)) = heap.pop() {
                    black_box(min);
                }
            });
        });
    }

    group.finish();
}

fn bench_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for n in SIZES {
        let keys = random_keys(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("heap_sort", n), &keys, |b, keys| {
            b.iter_batched_ref(
                || keys.clone(),
                |a| heap_sort(a),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std_sort_unstable", n), &keys, |b, keys| {
            b.iter_batched_ref(
                || keys.clone(),
                |a| a.sort_unstable(),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Ordered tree
// ============================================================================

fn bench_ordered_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_tree");

    for n in SIZES {
        let keys = random_keys(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("ordo/insert", n), &keys, |b, keys| {
            b.iter(|| {
                let tree: OrderedTree = keys.iter().copied().collect();
                black_box(tree.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("btreeset/insert", n), &keys, |b, keys| {
            b.iter(|| {
                let set: BTreeSet<i64> = keys.iter().copied().collect();
                black_box(set.len())
            });
        });

        let tree: OrderedTree = keys.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("ordo/contains", n), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| tree.contains(k)).count());
        });

        let set: BTreeSet<i64> = keys.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("btreeset/contains", n), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| set.contains(k)).count());
        });
    }

    group.finish();
}

// ============================================================================
// Bounded queue
// ============================================================================

fn bench_bounded_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_queue_ping_pong");

    group.bench_function("ordo", |b| {
        let mut queue: BoundedQueue<u64> = BoundedQueue::with_capacity(1024);
        b.iter(|| {
            queue.push(black_box(42)).unwrap();
            black_box(queue.pop().unwrap())
        });
    });

    group.bench_function("std_vecdeque", |b| {
        let mut queue: VecDeque<u64> = VecDeque::with_capacity(1024);
        b.iter(|| {
            queue.push_back(black_box(42));
            black_box(queue.pop_front().unwrap())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_priority_queue,
    bench_heap_sort,
    bench_ordered_tree,
    bench_bounded_queue
);
criterion_main!(benches);
