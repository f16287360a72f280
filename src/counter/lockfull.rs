// Lock-based bounded counter
//
// Same contract as `LockFree`, but the read-increment-compare runs under a
// mutex. Contending threads park until the holder releases it.

use crate::BoundedCounter;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub struct LockFull {
   capacity: usize,
   tail: Mutex<usize>,
}

impl LockFull {
   pub fn new(capacity: usize) -> Self {
      Self {
         capacity,
         tail: Mutex::new(0),
      }
   }

   // A panic can't happen between the read and the write of a usize, so a
   // poisoned guard still holds a consistent position.
   #[inline]
   fn lock(&self) -> MutexGuard<'_, usize> {
      self.tail.lock().unwrap_or_else(PoisonError::into_inner)
   }
}

impl BoundedCounter for LockFull {
   const NAME: &'static str = "lock-full";

   fn with_capacity(capacity: usize) -> Self {
      Self::new(capacity)
   }

   #[inline]
   fn claim(&self) -> bool {
      let mut tail = self.lock();
      *tail += 1;
      *tail <= self.capacity
   }

   #[inline]
   fn position(&self) -> usize {
      *self.lock()
   }

   #[inline]
   fn capacity(&self) -> usize {
      self.capacity
   }
}
