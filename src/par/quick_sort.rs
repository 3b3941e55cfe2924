use crate::{
	error::Result,
	par::{grow, install},
	partition::partition,
	quick_sort::quick_sort,
};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` in parallel using quicksort on a dedicated pool of `workers` threads.
///
/// Both partitions of a subview longer than `ceil(len / workers)` are sorted as forked tasks,
/// shorter subviews are sorted with [`quick_sort`]. This sort is unstable.
pub fn par_quick_sort<T, F>(v: ArrayViewMut1<'_, T>, workers: usize, is_less: F) -> Result<()>
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
	if v.len() <= threshold {
		quick_sort(v, &mut |a: &T, b: &T| is_less(a, b));
		return;
	}

	let mid = partition(v.view_mut(), &mut |a: &T, b: &T| is_less(a, b));
	let (left, right) = v.split_at(Axis(0), mid + 1);
	log::trace!("forking quicksort of {} and {} elements", left.len(), right.len());

	rayon::join(
		|| grow(|| recurse(left, is_less, threshold)),
		|| grow(|| recurse(right, is_less, threshold)),
	);
}
