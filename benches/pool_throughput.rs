//! Criterion benchmarks for submit/join throughput and worker reuse.
//!
//! Run with:
//!   cargo bench --bench pool_throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tholder::Pool;

fn bench_submit_join_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_join_round_trip");

    for &capacity in &[1usize, 4, 16] {
        let pool = Pool::new(capacity).expect("valid pool");
        group.bench_with_input(
            BenchmarkId::new("capacity", capacity),
            &pool,
            |b, pool| {
                b.iter(|| {
                    let handle = pool.submit(|n: u64| n.wrapping_mul(31), 7).unwrap();
                    handle.join().unwrap()
                });
            },
        );
    }
}

fn bench_steady_state_worker_reuse(c: &mut Criterion) {
    let pool = Pool::new(4).expect("valid pool");
    // Warm up every slot once so the benchmark measures steady-state reuse
    // rather than initial worker spawn cost.
    for _ in 0..4 {
        pool.submit(|()| (), ()).unwrap().join().unwrap();
    }

    c.bench_function("steady_state_reuse", |b| {
        b.iter(|| {
            let handle = pool.submit(|n: u32| n + 1, 41).unwrap();
            handle.join().unwrap()
        });
    });
}

criterion_group!(benches, bench_submit_join_round_trip, bench_steady_state_worker_reuse);
criterion_main!(benches);
