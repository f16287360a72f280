use crate::BenchError;

/// Worker threads spawned per run.
pub const THREAD_COUNT: usize = 6;
/// Successful claims available before the counter is exhausted.
pub const CAPACITY: usize = 200_000_000;

/// Shape of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
   pub thread_count: usize,
   pub capacity: usize,
}

impl Config {
   pub const fn new(thread_count: usize, capacity: usize) -> Self {
      Self { thread_count, capacity }
   }

   pub fn validate(&self) -> Result<(), BenchError> {
      if self.thread_count == 0 {
         return Err(BenchError::NoThreads);
      }
      Ok(())
   }
}

impl Default for Config {
   fn default() -> Self {
      Self::new(THREAD_COUNT, CAPACITY)
   }
}
