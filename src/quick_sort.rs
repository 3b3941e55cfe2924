use crate::partition::partition;
use core::mem;
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using quicksort with Hoare partitioning around the middle element.
///
/// This sort is unstable and *O*(*n* \* log(*n*)) on average but *O*(*n*^2) worst-case. Recursion
/// depth is bounded by *O*(log(*n*)).
pub fn quick_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	while v.len() >= 2 {
		let mid = partition(v.view_mut(), is_less);
		let (left, right) = v.split_at(Axis(0), mid + 1);

		// Recurse into the shorter side only in order to minimize the total number of recursive
		// calls and consume less stack space. Then just continue with the longer side (this is
		// akin to tail recursion).
		if left.len() < right.len() {
			quick_sort(left, is_less);
			v = right;
		} else {
			quick_sort(right, is_less);
			v = left;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn few_distinct(xs: Vec<bool>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut bool::lt);
		assert_eq!(array, Array1::from_vec(sorted));
	}

	#[test]
	fn example() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 5, 8, 9]));
	}
}
