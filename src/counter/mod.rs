mod lockfree;
mod lockfull;

pub use lockfree::LockFree;
pub use lockfull::LockFull;
