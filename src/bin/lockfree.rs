// Lock-free run: atomic counter, atomic-slot result log.

use contention_bench::{BenchError, Benchmark, Config, LockFree, ResultLog};
use std::io;

fn main() -> Result<(), BenchError> {
   env_logger::init();

   let mut report = Benchmark::<LockFree, ResultLog>::new(Config::default())?.run()?;
   report.write_to(&mut io::stdout().lock())
}
