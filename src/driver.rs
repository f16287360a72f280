// Benchmark driver
//
// Idle -> Running -> Joined -> Reported. Workers borrow the counter and the
// result log from a crossbeam scope; leaving the scope is the join barrier.

use crate::{worker, BenchError, BoundedCounter, Config, Outcome, ResultLog, ResultSink};
use log::{debug, info};
use std::{
   io::Write,
   time::{Duration, Instant},
};

/// One counter, one result log, and the run shape they were sized for.
#[derive(Debug)]
pub struct Benchmark<C: BoundedCounter, R: ResultSink = ResultLog> {
   config: Config,
   counter: C,
   results: R,
}

impl<C: BoundedCounter, R: ResultSink> Benchmark<C, R> {
   pub fn new(config: Config) -> Result<Self, BenchError> {
      config.validate()?;
      Ok(Self {
         counter: C::with_capacity(config.capacity),
         results: R::with_slots(config.thread_count),
         config,
      })
   }

   /// Build from parts the caller already made. The log must have exactly
   /// one slot per worker.
   pub fn with_parts(config: Config, counter: C, results: R) -> Result<Self, BenchError> {
      config.validate()?;
      if results.slots() != config.thread_count {
         return Err(BenchError::ThreadCountMismatch {
            threads: config.thread_count,
            slots: results.slots(),
         });
      }
      Ok(Self { config, counter, results })
   }

   pub fn config(&self) -> Config {
      self.config
   }

   pub fn counter(&self) -> &C {
      &self.counter
   }

   /// Spawn every worker, wait for all of them, and hand back the report.
   pub fn run(self) -> Result<Report<R>, BenchError> {
      let Self { config, counter, results } = self;
      debug!(
         "{}: spawning {} workers for capacity {}",
         C::NAME,
         config.thread_count,
         config.capacity
      );

      let start = Instant::now();
      let outcomes = {
         let counter = &counter;
         let results = &results;
         crossbeam::thread::scope(|s| -> Result<Vec<Outcome>, BenchError> {
            let mut handles = Vec::with_capacity(config.thread_count);
            for index in 0..config.thread_count {
               let handle = s
                  .builder()
                  .name(format!("{}-{index}", C::NAME))
                  .spawn(move |_| worker::run(index, counter, results))?;
               handles.push(handle);
            }
            handles
               .into_iter()
               .map(|h| h.join().map_err(|_| BenchError::WorkerPanicked).and_then(|o| o))
               .collect()
         })
         .map_err(|_| BenchError::WorkerPanicked)??
      };
      let elapsed = start.elapsed();

      info!(
         "{}: {} operations across {} threads in {:?}",
         C::NAME,
         config.capacity,
         config.thread_count,
         elapsed
      );

      Ok(Report {
         config,
         strategy: C::NAME,
         outcomes,
         final_position: counter.position(),
         elapsed,
         results,
      })
   }
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct Report<R: ResultSink = ResultLog> {
   pub config: Config,
   pub strategy: &'static str,
   /// Per-worker outcomes in spawn order.
   pub outcomes: Vec<Outcome>,
   /// Raw counter position after the join; runs past capacity.
   pub final_position: usize,
   pub elapsed: Duration,
   results: R,
}

impl<R: ResultSink> Report<R> {
   /// Sum of every worker's successful claims.
   pub fn total_claimed(&self) -> usize {
      self.outcomes.iter().map(|o| o.claimed).sum()
   }

   /// Recorded lines in arrival order.
   pub fn lines(&mut self) -> Vec<String> {
      self.results.lines()
   }

   pub fn summary(&self) -> String {
      format!(
         "{} operations performed across {} threads in {:.10} seconds.",
         self.config.capacity,
         self.config.thread_count,
         self.elapsed.as_secs_f64()
      )
   }

   /// Per-thread lines in arrival order, then the summary line.
   pub fn write_to<W: Write>(&mut self, out: &mut W) -> Result<(), BenchError> {
      self.results.print(out)?;
      writeln!(out, "{}", self.summary())?;
      out.flush()?;
      Ok(())
   }
}
