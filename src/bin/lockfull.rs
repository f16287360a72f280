// Lock-based run: mutex counter, mutex-guarded result log.

use contention_bench::{BenchError, Benchmark, Config, LockFull, LockedResultLog};
use std::io;

fn main() -> Result<(), BenchError> {
   env_logger::init();

   let mut report = Benchmark::<LockFull, LockedResultLog>::new(Config::default())?.run()?;
   report.write_to(&mut io::stdout().lock())
}
