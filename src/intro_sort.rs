use crate::{heap_sort::heap_sort, partition::partition};
use core::mem;
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using introsort, which is *O*(*n* \* log(*n*)) worst-case.
///
/// Partitions like [`quick_sort`](crate::quick_sort::quick_sort) until the depth limit
/// `floor(2 * ln(len))` is exhausted, then finishes the remaining view with heapsort.
pub fn intro_sort<T, F>(v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 || v.len() < 2 {
		return;
	}

	let limit = depth_limit(v.len());
	recurse(v, is_less, limit);
}

#[cfg(feature = "std")]
fn depth_limit(len: usize) -> u32 {
	(2.0 * (len as f64).ln()) as u32
}

// Without `std` there is no `f64::ln`. Twice the binary logarithm is a looser but still
// logarithmic bound.
#[cfg(not(feature = "std"))]
fn depth_limit(len: usize) -> u32 {
	2 * len.ilog2()
}

/// Sorts `v` recursively, falling back to heapsort once `limit` reaches zero.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, mut limit: u32)
where
	F: FnMut(&T, &T) -> bool,
{
	while v.len() >= 2 {
		if limit == 0 {
			heap_sort(v, is_less);
			return;
		}
		limit -= 1;

		let mid = partition(v.view_mut(), is_less);
		let (left, right) = v.split_at(Axis(0), mid + 1);
		if left.len() < right.len() {
			recurse(left, is_less, limit);
			v = right;
		} else {
			recurse(right, is_less, limit);
			v = left;
		}
	}
}
