mod free;
mod full;

pub use free::ResultLog;
pub use full::LockedResultLog;
