//! Edge-admission benchmarks: accepted-insertion throughput and the O(1)
//! rejection path, across universe sizes.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cyclegate_bench::generator::{chain_edges, fanout_edges, random_edges};
use cyclegate_core::ReachabilityStore;

/// Replays a full edge list against a fresh store.
fn replay(node_count: usize, edges: &[(usize, usize)]) {
    let mut store = ReachabilityStore::new(node_count);
    for &(source, target) in edges {
        let _ = store.try_insert_edge(source, target).expect("ids in range");
    }
}

fn bench_accepted_insertions(c: &mut Criterion) {
    let mut group = c.benchmark_group("accepted_insertions");

    for node_count in [256usize, 1024, 4096] {
        let chain = chain_edges(node_count);
        group.bench_function(BenchmarkId::new("chain", node_count), |b| {
            b.iter(|| replay(node_count, &chain));
        });

        let fanout = fanout_edges(node_count);
        group.bench_function(BenchmarkId::new("fanout", node_count), |b| {
            b.iter(|| replay(node_count, &fanout));
        });
    }

    group.finish();
}

fn bench_random_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_admission");

    // Four attempts per node saturates connectivity well past the
    // half-connected peak, so the mix covers both accept and reject paths.
    for node_count in [256usize, 1024] {
        let edges = random_edges(node_count, node_count * 4, 42);
        group.bench_function(BenchmarkId::new("uniform", node_count), |b| {
            b.iter(|| replay(node_count, &edges));
        });
    }

    group.finish();
}

fn bench_rejection_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection_path");

    // Build a long chain once; a back-edge attempt is then a single
    // membership test regardless of graph size.
    for node_count in [1024usize, 4096] {
        let mut store = ReachabilityStore::new(node_count);
        for (source, target) in chain_edges(node_count) {
            let _ = store.try_insert_edge(source, target).expect("ids in range");
        }

        group.bench_function(BenchmarkId::new("cycle_check", node_count), |b| {
            b.iter(|| {
                let _ = store
                    .try_insert_edge(node_count - 1, 0)
                    .expect("ids in range");
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_accepted_insertions,
    bench_random_admission,
    bench_rejection_path
);
criterion_main!(benches);
