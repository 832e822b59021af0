//! Benchmarks comparing pooled vs serial batch execution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parbatch::prelude::*;

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

struct Sieve {
    limit: u64,
    found: usize,
}

impl Task for Sieve {
    fn execute(&mut self) {
        self.found = (0..self.limit).filter(|&n| is_prime(n)).count();
    }
}

fn serial_batch(tasks: usize, limit: u64) -> usize {
    (0..tasks)
        .map(|_| (0..limit).filter(|&n| is_prime(n)).count())
        .sum()
}

fn pooled_batch(pool: &Pool, tasks: usize, limit: u64) {
    let batch: Vec<TaskHandle> = (0..tasks).map(|_| handle(Sieve { limit, found: 0 })).collect();
    pool.run_blocking(batch).expect("run failed");
}

fn bench_batch(c: &mut Criterion) {
    let pool = Pool::new().expect("pool setup failed");

    let mut group = c.benchmark_group("batch");

    for tasks in [16usize, 100].iter() {
        group.bench_with_input(BenchmarkId::new("serial", tasks), tasks, |b, &tasks| {
            b.iter(|| serial_batch(black_box(tasks), 10_000))
        });

        group.bench_with_input(BenchmarkId::new("pooled", tasks), tasks, |b, &tasks| {
            b.iter(|| pooled_batch(&pool, black_box(tasks), 10_000))
        });
    }

    group.finish();
}

fn bench_setup_teardown(c: &mut Criterion) {
    c.bench_function("empty_run", |b| {
        let pool = Pool::new().expect("pool setup failed");
        b.iter(|| pool.run_blocking(Vec::new()).expect("run failed"))
    });
}

criterion_group!(benches, bench_batch, bench_setup_teardown);
criterion_main!(benches);
