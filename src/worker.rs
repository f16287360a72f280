// One benchmark thread: drain the shared counter, time it, record a line.

use crate::{BenchError, BoundedCounter, ResultSink};
use log::debug;
use std::{
   fmt,
   time::{Duration, Instant},
};

/// What a single worker did during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
   /// Display-only thread label.
   pub id: u64,
   /// Claims that returned true.
   pub claimed: usize,
   /// Time spent in the claim loop.
   pub elapsed: Duration,
}

impl fmt::Display for Outcome {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(
         f,
         "Thread {:>5} processed {} ints in {:.10} seconds.",
         self.id,
         self.claimed,
         self.elapsed.as_secs_f64()
      )
   }
}

/// Label for the calling thread: the kernel thread id on Linux, the spawn
/// index elsewhere.
pub fn thread_label(index: usize) -> u64 {
   #[cfg(target_os = "linux")]
   {
      let _ = index;
      nix::unistd::gettid().as_raw() as u64
   }
   #[cfg(not(target_os = "linux"))]
   {
      index as u64
   }
}

/// Claim until the counter is exhausted. No sleeping, no yielding.
#[inline]
pub fn drain<C: BoundedCounter>(counter: &C) -> usize {
   let mut claimed = 0;
   while counter.claim() {
      claimed += 1;
   }
   claimed
}

/// Body of the `index`-th worker thread.
pub fn run<C, R>(index: usize, counter: &C, results: &R) -> Result<Outcome, BenchError>
where
   C: BoundedCounter,
   R: ResultSink,
{
   let id = thread_label(index);
   debug!("worker {index} (thread {id}) started");

   let start = Instant::now();
   let claimed = drain(counter);
   let elapsed = start.elapsed();

   let outcome = Outcome { id, claimed, elapsed };
   debug!("worker {index} (thread {id}) claimed {claimed} in {elapsed:?}");
   results.record(outcome.to_string())?;
   Ok(outcome)
}
