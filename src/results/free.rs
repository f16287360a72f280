// Result log with atomic slot assignment
//
// Each `record` claims a slot index with one fetch-and-add, then writes its
// line into that slot without any further synchronization. Slots are
// disjoint, so writers never meet. Reading requires `&mut self`, which the
// driver only gets back once every worker has been joined.

use crate::{BenchError, ResultSink};
use log::trace;
use std::{
   cell::UnsafeCell,
   fmt,
   sync::atomic::{AtomicUsize, Ordering},
};

pub struct ResultLog {
   next: AtomicUsize,                        // next slot to hand out
   slots: Box<[UnsafeCell<Option<String>>]>, // one per worker
}

// Concurrent access through `&self` is limited to `record`, and each
// `record` writes only the slot its fetch-and-add returned.
unsafe impl Sync for ResultLog {}

impl ResultLog {
   pub fn new(slots: usize) -> Self {
      let boxed = (0..slots)
         .map(|_| UnsafeCell::new(None))
         .collect::<Vec<_>>()
         .into_boxed_slice();

      Self {
         next: AtomicUsize::new(0),
         slots: boxed,
      }
   }

   /// Slots handed out so far, capped at the log size.
   pub fn recorded(&self) -> usize {
      self.next.load(Ordering::Acquire).min(self.slots.len())
   }
}

impl ResultSink for ResultLog {
   fn with_slots(slots: usize) -> Self {
      Self::new(slots)
   }

   fn record(&self, line: String) -> Result<(), BenchError> {
      let index = self.next.fetch_add(1, Ordering::AcqRel);
      let Some(cell) = self.slots.get(index) else {
         return Err(BenchError::LogFull {
            capacity: self.slots.len(),
         });
      };
      trace!("result slot {index} assigned");

      // SAFETY: `index` came from the fetch-and-add above, so no other
      // caller owns this cell, and readers need `&mut self`.
      unsafe { *cell.get() = Some(line) };
      Ok(())
   }

   fn slots(&self) -> usize {
      self.slots.len()
   }

   fn lines(&mut self) -> Vec<String> {
      self.slots
         .iter_mut()
         .map(|cell| cell.get_mut().clone().unwrap_or_default())
         .collect()
   }
}

impl fmt::Debug for ResultLog {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("ResultLog")
         .field("slots", &self.slots.len())
         .field("recorded", &self.recorded())
         .finish()
   }
}
