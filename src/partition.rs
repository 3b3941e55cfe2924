//! Hoare partitioning and in-place reversal shared by the quicksort family and timsort.

use ndarray::ArrayViewMut1;

/// Partitions `v` around its middle element using Hoare's scheme.
///
/// Returns the last index of the left partition. Every element of `v[..=mid]` is not greater than
/// every element of `v[mid + 1..]`. For `v.len() >= 2`, both partitions are non-empty, that is
/// `mid < v.len() - 1`.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	debug_assert!(len >= 2);

	// The pivot is not copied out of `v` but tracked by index as it gets swapped around.
	let mut pivot = (len - 1) / 2;
	let mut i = 0;
	let mut j = len - 1;

	loop {
		while is_less(&v[i], &v[pivot]) {
			i += 1;
		}
		while is_less(&v[pivot], &v[j]) {
			j -= 1;
		}
		if i >= j {
			return j;
		}

		v.swap(i, j);
		if pivot == i {
			pivot = j;
		} else if pivot == j {
			pivot = i;
		}

		// `i < j` implies `j >= 1`.
		i += 1;
		j -= 1;
	}
}

/// Reverses `v` in place, swapping pairs up to the midpoint of the view.
pub fn reverse<T>(mut v: ArrayViewMut1<'_, T>) {
	let len = v.len();
	for i in 0..len / 2 {
		v.swap(i, len - 1 - i);
	}
}
