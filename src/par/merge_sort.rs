use crate::{
	error::Result,
	merge_sort::{merge, merge_sort},
	par::{grow, install},
};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` in parallel using merge sort on a dedicated pool of `workers` threads.
///
/// Both halves of a subview longer than `ceil(len / workers)` are sorted as forked tasks and
/// merged sequentially once both have joined, shorter subviews are sorted with [`merge_sort`].
/// This sort is stable.
pub fn par_merge_sort<T, F>(v: ArrayViewMut1<'_, T>, workers: usize, is_less: F) -> Result<()>
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	install(workers, v.len(), |threshold| recurse(v, &is_less, threshold))
}

fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &F, threshold: usize)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let len = v.len();
	if len <= threshold {
		merge_sort(v, &mut |a: &T, b: &T| is_less(a, b));
		return;
	}

	let mid = len - len / 2;
	let (left, right) = v.view_mut().split_at(Axis(0), mid);
	log::trace!("forking merge sort of {} and {} elements", left.len(), right.len());

	rayon::join(
		|| grow(|| recurse(left, is_less, threshold)),
		|| grow(|| recurse(right, is_less, threshold)),
	);
	merge(v, mid, &mut |a: &T, b: &T| is_less(a, b));
}
