pub mod config;
pub mod counter;
pub mod driver;
pub mod error;
pub mod results;
pub mod worker;

pub use config::Config;
pub use counter::LockFree;
pub use counter::LockFull;
pub use driver::{Benchmark, Report};
pub use error::BenchError;
pub use results::LockedResultLog;
pub use results::ResultLog;
pub use worker::Outcome;

/// Common interface for both counter strategies.
pub trait BoundedCounter: Send + Sync {
   /// Short label used in logs and bench ids.
   const NAME: &'static str;

   fn with_capacity(capacity: usize) -> Self
   where
      Self: Sized;

   /// Advance the position by one and report whether the new position
   /// is still within capacity. The position moves even when it fails.
   fn claim(&self) -> bool;

   /// Current position. Only a snapshot while claims are in flight.
   fn position(&self) -> usize;

   fn capacity(&self) -> usize;

   /// Same as `position`.
   #[inline]
   fn tail(&self) -> usize {
      self.position()
   }
}

/// Common interface for the per-run result collections.
pub trait ResultSink: Send + Sync {
   fn with_slots(slots: usize) -> Self
   where
      Self: Sized;

   /// Store one line in the next free slot.
   fn record(&self, line: String) -> Result<(), BenchError>;

   /// Number of slots, fixed at construction.
   fn slots(&self) -> usize;

   /// Every slot in order. A slot nobody wrote comes back empty.
   fn lines(&mut self) -> Vec<String>;

   /// Write every line, in slot order, to `out`.
   fn print<W: std::io::Write>(&mut self, out: &mut W) -> Result<(), BenchError> {
      for line in self.lines() {
         writeln!(out, "{line}")?;
      }
      Ok(())
   }
}
