//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::ArrayViewMut1;

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case and *O*(1) space.
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();

	// Build the heap in linear time, sifting down every parent from the last one to the root.
	for node in (0..len / 2).rev() {
		sift_down(&mut v, node, len, is_less);
	}

	// Move the maximum behind the shrinking heap and repair its root.
	for end in (1..len).rev() {
		v.swap(0, end);
		sift_down(&mut v, 0, end, is_less);
	}
}

/// Restores the max-heap invariant `parent >= child` below `node` within `v[..end]`.
fn sift_down<T, F>(v: &mut ArrayViewMut1<'_, T>, mut node: usize, end: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		let mut child = 2 * node + 1;
		if child >= end {
			return;
		}

		// The right child only wins if it is strictly greater.
		if child + 1 < end && is_less(&v[child], &v[child + 1]) {
			child += 1;
		}

		if !is_less(&v[node], &v[child]) {
			return;
		}

		v.swap(node, child);
		node = child;
	}
}
