//! Benchmarks for allocation strategies and stealing.
//!
//! Unordered allocation should stay flat as the pool grows; ordered
//! allocation pays a logarithmic search for smallest-first determinism.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tether_core::assoc::Associations;
use tether_core::config::AssociationConfig;

fn create_engine(size: u32, ordered: bool) -> Associations<u64> {
    let mut config = AssociationConfig::with_pool_size(size);
    config.ordered = ordered;
    Associations::new(config)
}

/// Benchmark: allocate/release cycle against pool size.
fn bench_allocate_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_cycle");
    group.throughput(Throughput::Elements(1));

    for size in [64u32, 1024, 16384, 262144].iter() {
        for ordered in [false, true] {
            let mut assoc = create_engine(*size, ordered);
            // Half-full pool so both strategies search a realistic set.
            for p in 0..(*size / 2) as u64 {
                assoc.allocate(p).unwrap();
            }

            let label = if ordered { "ordered" } else { "unordered" };
            group.bench_with_input(BenchmarkId::new(label, size), size, |b, _| {
                b.iter(|| {
                    let id = assoc.allocate(black_box(u64::MAX)).unwrap();
                    assoc.remove_b(id).unwrap();
                    black_box(id)
                })
            });
        }
    }

    group.finish();
}

/// Benchmark: moving a child back and forth between two parents.
fn bench_steal(c: &mut Criterion) {
    let mut group = c.benchmark_group("steal");
    group.throughput(Throughput::Elements(2));

    let mut assoc = create_engine(1024, false);
    assoc.associate(1, [0u32, 1, 2, 3]).unwrap();

    group.bench_function("ping_pong", |b| {
        b.iter(|| {
            assoc.associate(black_box(2), 0u32).unwrap();
            assoc.associate(black_box(1), 0u32).unwrap();
        })
    });

    group.finish();
}

/// Benchmark: bulk release of a parent with many children.
fn bench_remove_parent(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_parent");

    for children in [1u32, 16, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*children as u64));
        let ids: Vec<u32> = (0..*children).collect();
        let mut assoc = create_engine(*children, false);

        group.bench_with_input(BenchmarkId::new("children", children), children, |b, _| {
            b.iter(|| {
                assoc.associate(7, &ids).unwrap();
                black_box(assoc.remove_a(&7))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_allocate_cycle, bench_steal, bench_remove_parent);

criterion_main!(benches);
