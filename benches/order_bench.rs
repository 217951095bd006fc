//! Criterion benchmarks for u-taskorder policies and containers.
//!
//! Tasks are random (start, ptime) pairs drawn from small ranges so that
//! primary-key ties, and therefore tie-break paths, are frequent.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_taskorder::collections::{sort_with, OrderedSet, PriorityQueue};
use u_taskorder::order::{EarliestStart, KeyOrder, LongestFirst};
use u_taskorder::task::{Task, TaskSequence};

fn random_tasks(n: usize, seed: u64) -> Vec<Task> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seq = TaskSequence::new();
    (0..n)
        .map(|_| seq.next_task(rng.random_range(0..100), rng.random_range(1..50)))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_earliest_start");

    for &n in &[1_000usize, 10_000, 100_000] {
        let tasks = random_tasks(n, 42);
        group.bench_with_input(BenchmarkId::new("struct", n), &tasks, |b, t| {
            b.iter(|| {
                let mut v = t.clone();
                sort_with(&mut v, black_box(&EarliestStart));
                black_box(v)
            })
        });

        let order = KeyOrder::earliest_start();
        group.bench_with_input(BenchmarkId::new("key_order", n), &tasks, |b, t| {
            b.iter(|| {
                let mut v = t.clone();
                sort_with(&mut v, black_box(&order));
                black_box(v)
            })
        });
    }
    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_longest_first");

    for &n in &[1_000usize, 10_000, 100_000] {
        let tasks = random_tasks(n, 7);
        group.bench_with_input(BenchmarkId::new("push_pop", n), &tasks, |b, t| {
            b.iter(|| {
                let mut q = PriorityQueue::with_capacity(t.len(), LongestFirst);
                q.extend(t.iter().copied());
                black_box(q.into_sorted_vec())
            })
        });
        group.bench_with_input(BenchmarkId::new("heapify", n), &tasks, |b, t| {
            b.iter(|| {
                let q = PriorityQueue::from_vec(t.clone(), LongestFirst);
                black_box(q.into_sorted_vec())
            })
        });
    }
    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_earliest_start");

    for &n in &[1_000usize, 10_000] {
        let tasks = random_tasks(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tasks, |b, t| {
            b.iter(|| {
                let mut set = OrderedSet::new(EarliestStart);
                set.extend(t.iter().copied());
                black_box(set.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_queue, bench_set);
criterion_main!(benches);
