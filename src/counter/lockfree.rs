// Lock-free bounded counter
//
// A claim is a single fetch-and-add on the tail position. No thread ever
// waits on another, so every claim finishes in a bounded number of steps.

use crate::BoundedCounter;
use crossbeam::utils::CachePadded;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct LockFree {
   capacity: usize,
   tail: CachePadded<AtomicUsize>, // every claim bumps this, hit or miss
}

impl LockFree {
   pub fn new(capacity: usize) -> Self {
      Self {
         capacity,
         tail: CachePadded::new(AtomicUsize::new(0)),
      }
   }
}

impl BoundedCounter for LockFree {
   const NAME: &'static str = "lock-free";

   fn with_capacity(capacity: usize) -> Self {
      Self::new(capacity)
   }

   #[inline]
   fn claim(&self) -> bool {
      // The RMW alone makes every returned position unique; nothing else
      // is published through the counter, so Relaxed is enough.
      let next = self.tail.fetch_add(1, Ordering::Relaxed) + 1;
      next <= self.capacity
   }

   #[inline]
   fn position(&self) -> usize {
      self.tail.load(Ordering::Relaxed)
   }

   #[inline]
   fn capacity(&self) -> usize {
      self.capacity
   }
}
