// Mutex-guarded result log, the lock-based twin of `ResultLog`.

use crate::{BenchError, ResultSink};
use log::trace;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
struct Inner {
   next: usize,
   lines: Vec<Option<String>>,
}

#[derive(Debug)]
pub struct LockedResultLog {
   inner: Mutex<Inner>,
}

impl LockedResultLog {
   pub fn new(slots: usize) -> Self {
      Self {
         inner: Mutex::new(Inner {
            next: 0,
            lines: vec![None; slots],
         }),
      }
   }

   pub fn recorded(&self) -> usize {
      let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
      inner.next.min(inner.lines.len())
   }
}

impl ResultSink for LockedResultLog {
   fn with_slots(slots: usize) -> Self {
      Self::new(slots)
   }

   fn record(&self, line: String) -> Result<(), BenchError> {
      let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
      let index = inner.next;
      let capacity = inner.lines.len();
      let slot = inner
         .lines
         .get_mut(index)
         .ok_or(BenchError::LogFull { capacity })?;
      *slot = Some(line);
      inner.next += 1;
      trace!("result slot {index} assigned");
      Ok(())
   }

   fn slots(&self) -> usize {
      self.inner
         .lock()
         .unwrap_or_else(PoisonError::into_inner)
         .lines
         .len()
   }

   fn lines(&mut self) -> Vec<String> {
      self.inner
         .get_mut()
         .unwrap_or_else(PoisonError::into_inner)
         .lines
         .iter()
         .map(|line| line.clone().unwrap_or_default())
         .collect()
   }
}
