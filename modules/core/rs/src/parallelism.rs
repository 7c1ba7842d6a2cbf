use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

fn _normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads for the request. Negative values count back from all available cores,
/// e.g. -1 is every core and -2 leaves one core idle.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get() as isize;
    Ok(_normalize(requested, max))
}

/// A dedicated rayon pool for the request or `None` when `requested` is zero and the work should
/// run in the caller's rayon context.
pub fn pool(requested: isize) -> Result<Option<ThreadPool>> {
    if requested == 0 {
        return Ok(None);
    }
    let pool = ThreadPoolBuilder::new()
        .num_threads(available(requested)?)
        .build()?;
    Ok(Some(pool))
}
