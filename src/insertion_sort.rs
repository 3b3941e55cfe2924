use ndarray::ArrayViewMut1;

/// Sorts `v` using binary insertion sort, which is *O*(*n*^2) worst-case.
///
/// This sort is stable and efficient on short or nearly sorted views.
pub fn insertion_sort<T, F>(v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	insertion_sort_shift_left(v, 1, is_less);
}

/// Sorts `v` assuming `v[..offset]` is already sorted.
///
/// Each of the remaining elements is inserted after the last element of the sorted prefix it is
/// not less than, preserving the order of equal elements.
///
/// # Panics
///
/// Panics if `offset` is zero or greater than `v.len()` (unless `v` has fewer than two elements).
pub(crate) fn insertion_sort_shift_left<T, F>(
	mut v: ArrayViewMut1<'_, T>,
	offset: usize,
	is_less: &mut F,
) where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len < 2 {
		return;
	}
	assert!(offset != 0 && offset <= len);

	for i in offset..len {
		let at = upper_bound(&v, i, is_less);
		// All comparisons are done, so shifting cannot be interrupted by a panicking `is_less`.
		for j in (at..i).rev() {
			v.swap(j, j + 1);
		}
	}
}

/// Returns the first index in the sorted prefix `v[..end]` whose element is greater than `v[end]`.
fn upper_bound<T, F>(v: &ArrayViewMut1<'_, T>, end: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let (mut low, mut high) = (0, end);
	while low < high {
		let mid = low + (high - low) / 2;
		if is_less(&v[end], &v[mid]) {
			high = mid;
		} else {
			low = mid + 1;
		}
	}
	low
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{insertion_sort, insertion_sort_shift_left};
	use core::cmp::Ordering;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut array = Array1::from_vec(xs);
		insertion_sort(array.view_mut(), &mut u32::lt);
		for i in 1..array.len() {
			assert!(array[i - 1] <= array[i]);
		}
	}

	#[quickcheck]
	fn sorted_with_prefix(mut prefix: Vec<i16>, tail: Vec<i16>) {
		prefix.sort();
		let offset = prefix.len().max(1);
		let mut expected = prefix.iter().chain(&tail).copied().collect::<Vec<_>>();
		expected.sort();
		let mut array = Array1::from_iter(prefix.into_iter().chain(tail));
		insertion_sort_shift_left(array.view_mut(), offset, &mut i16::lt);
		assert_eq!(array, Array1::from_vec(expected));
	}

	#[derive(Debug, Clone, Copy)]
	struct Item {
		index: usize,
		value: u8,
	}

	#[quickcheck]
	fn stably_sorted(xs: Vec<u8>) {
		let xs = xs
			.into_iter()
			.enumerate()
			.map(|(index, value)| Item { index, value })
			.collect::<Vec<Item>>();
		let mut sorted = xs.clone();
		sorted.sort_by(|a, b| a.value.cmp(&b.value));
		let mut array = Array1::from_vec(xs);
		insertion_sort(array.view_mut(), &mut |a: &Item, b: &Item| {
			a.value.cmp(&b.value) == Ordering::Less
		});
		for (a, s) in array.iter().zip(&sorted) {
			assert_eq!(a.index, s.index);
		}
	}
}
