/*!
 * Counter Contention Benchmarks
 * Compare the locked and lock-free disciplines under identical workloads
 */

use concord::{run_contention, AtomicCounter, Counter, LockedCounter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const INCREMENTS: usize = 1000;

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_contended");

    for callers in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("locked", callers),
            &callers,
            |b, &callers| {
                b.iter(|| {
                    let counter = LockedCounter::new();
                    black_box(run_contention(&counter, callers, INCREMENTS))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("lock_free", callers),
            &callers,
            |b, &callers| {
                b.iter(|| {
                    let counter = AtomicCounter::new();
                    black_box(run_contention(&counter, callers, INCREMENTS))
                });
            },
        );
    }

    group.finish();
}

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_uncontended");

    group.bench_function("locked", |b| {
        let counter = LockedCounter::new();
        b.iter(|| {
            counter.increment_by(black_box(INCREMENTS));
            black_box(counter.read())
        });
    });

    group.bench_function("lock_free", |b| {
        let counter = AtomicCounter::new();
        b.iter(|| {
            counter.increment_by(black_box(INCREMENTS));
            black_box(counter.read())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_contended, bench_uncontended);
criterion_main!(benches);
