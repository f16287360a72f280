use thiserror::Error;

/// Everything that can stop a benchmark run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BenchError {
   /// `record` was called after every slot had been handed out
   #[error("result log is full: all {capacity} slots already recorded")]
   LogFull { capacity: usize },

   /// The result log must have exactly one slot per worker
   #[error("thread count {threads} does not match result log size {slots}")]
   ThreadCountMismatch { threads: usize, slots: usize },

   #[error("thread count must be at least 1")]
   NoThreads,

   #[error("a worker thread panicked")]
   WorkerPanicked,

   #[error("failed to write report: {0}")]
   Io(#[from] std::io::Error),
}
