//! Fork-join parallel variants running on a dedicated worker pool per call.
//!
//! Each call validates the worker count, builds a [`rayon::ThreadPool`] with exactly that many
//! threads, and runs the root task on it. Subviews longer than the fork threshold
//! `ceil(len / workers)` split into two disjoint views sorted via [`rayon::join`], shorter ones
//! are sorted sequentially. The call returns once every forked task has joined, and the pool is
//! torn down on return.

pub mod merge_sort;
pub mod quick_sort;
pub mod radix_sort;

use crate::error::{Error, Result};
use rayon::ThreadPoolBuilder;

/// Runs `op` with the fork threshold for `len` elements on a fresh pool of `workers` threads.
///
/// Fails with [`Error::InvalidArgument`] if `workers <= 1`.
pub(crate) fn install<R, OP>(workers: usize, len: usize, op: OP) -> Result<R>
where
	R: Send,
	OP: FnOnce(usize) -> R + Send,
{
	check(workers)?;
	let threshold = threshold(len, workers);

	let pool = ThreadPoolBuilder::new()
		.num_threads(workers)
		.thread_name(|index| format!("sort-worker-{index}"))
		.build()?;
	log::debug!("sorting {len} elements on {workers} workers, forking above {threshold}");

	Ok(pool.install(|| op(threshold)))
}

/// Fails with [`Error::InvalidArgument`] if `workers <= 1`.
pub(crate) fn check(workers: usize) -> Result<()> {
	if workers <= 1 {
		return Err(Error::InvalidArgument { workers });
	}
	Ok(())
}

/// Subviews longer than this are forked.
pub(crate) fn threshold(len: usize, workers: usize) -> usize {
	len.div_ceil(workers)
}

/// Runs `f`, growing the stack first if the remaining stack is running low.
#[cfg(feature = "stacker")]
#[inline]
pub(crate) fn grow<R>(f: impl FnOnce() -> R) -> R {
	const RED_ZONE: usize = 64 * 1024;
	const STACK_SIZE: usize = 1024 * 1024;

	stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
}

#[cfg(not(feature = "stacker"))]
#[inline]
pub(crate) fn grow<R>(f: impl FnOnce() -> R) -> R {
	f()
}
