use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use contention_bench::{BoundedCounter, LockFree, LockFull};

const CAPACITY: usize = 1_000_000;
const THREADS: [usize; 4] = [1, 2, 4, 6];

// Drain a fresh counter with `threads` scoped workers.
fn drain_with<C: BoundedCounter>(threads: usize) -> usize {
   let counter = C::with_capacity(CAPACITY);
   crossbeam::thread::scope(|s| {
      let handles: Vec<_> = (0..threads)
         .map(|_| s.spawn(|_| contention_bench::worker::drain(&counter)))
         .collect();
      handles.into_iter().map(|h| h.join().unwrap()).sum()
   })
   .unwrap()
}

fn bench_strategy<C: BoundedCounter>(c: &mut Criterion) {
   let mut group = c.benchmark_group(C::NAME);
   group.throughput(Throughput::Elements(CAPACITY as u64));

   for &threads in &THREADS {
      group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &t| {
         b.iter(|| {
            let total = drain_with::<C>(t);
            assert_eq!(total, CAPACITY);
            total
         })
      });
   }
   group.finish();
}

fn bench_lockfree(c: &mut Criterion) {
   bench_strategy::<LockFree>(c);
}

fn bench_lockfull(c: &mut Criterion) {
   bench_strategy::<LockFull>(c);
}

fn custom_criterion() -> Criterion {
   Criterion::default()
      .warm_up_time(Duration::from_secs(3))
      .measurement_time(Duration::from_secs(10))
      .sample_size(30)
}

criterion_group! {
   name = benches;
   config = custom_criterion();
   targets =
      bench_lockfree,
      bench_lockfull
}
criterion_main!(benches);
