//! Top-down merge sort and the stable merge primitive shared with timsort.
//!
//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

#![cfg(feature = "alloc")]

use alloc::vec::Vec;
use core::{mem, ptr};
use ndarray::{ArrayViewMut1, Axis, IndexLonger};

/// Sorts `v` using top-down merge sort, which is stable and *O*(*n* \* log(*n*)) worst-case.
///
/// Splits `v` after its first `ceil(len / 2)` elements, sorts both halves recursively, and merges
/// them. Every merge allocates a temporary buffer for the left half, which is released when the
/// merge returns.
pub fn merge_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	let len = v.len();
	if len < 2 {
		return;
	}

	let mid = len - len / 2;
	let (left, right) = v.view_mut().split_at(Axis(0), mid);
	merge_sort(left, is_less);
	merge_sort(right, is_less);
	merge(v, mid, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` and stores the result into `v[..]`.
///
/// The merge is stable: if elements of both runs compare equal, the one of the left run comes
/// first. Returns without touching `v` if either run is empty or the runs are already in order.
///
/// If `is_less` panics, `v` still holds every element it initially held exactly once.
pub(crate) fn merge<T, F>(v: ArrayViewMut1<'_, T>, mid: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if mid == 0 || mid >= len || mem::size_of::<T>() == 0 {
		return;
	}
	if !is_less(&v[mid], &v[mid - 1]) {
		return;
	}

	// The buffer keeps its length zero so the shallow copies it holds are never dropped.
	let mut buf = Vec::<T>::with_capacity(mid);
	let buf_ptr = buf.as_mut_ptr();

	// SAFETY: `buf` has capacity for `mid` elements and does not overlap `v`.
	unsafe {
		for i in 0..mid {
			ptr::copy_nonoverlapping(&v[i] as *const T, buf_ptr.add(i), 1);
		}
	}

	// The copied left run leaves a hole of `mid` elements at the front of `v`. The hole moves
	// right as elements are merged into it and always stays in front of the unconsumed right run.
	// When dropped, `hole` fills the remaining hole with the unconsumed left run.
	let mut hole = MergeHole {
		buf: buf_ptr,
		start: 0,
		end: mid,
		v,
		dest: 0,
	};
	let mut right = mid;

	while hole.start < hole.end && right < len {
		// SAFETY: `hole.start < hole.end` keeps the buffer access initialized, and `right < len`
		// keeps the view access in bounds. The destination `hole.dest` is part of the hole, so it
		// is neither the source nor still owned by any element.
		unsafe {
			// If equal, prefer the left run to maintain stability.
			let src = if is_less(&hole.v[right], &*hole.buf.add(hole.start)) {
				right += 1;
				&hole.v[right - 1] as *const T
			} else {
				hole.start += 1;
				hole.buf.add(hole.start - 1) as *const T
			};
			let dst = hole.v.view_mut().index(hole.dest) as *mut T;
			hole.dest += 1;
			ptr::copy_nonoverlapping(src, dst, 1);
		}
	}
}

// When dropped, copies `buf[start..end]` into `v[dest..]`.
struct MergeHole<'a, T> {
	buf: *mut T,
	start: usize,
	end: usize,

	v: ArrayViewMut1<'a, T>,
	dest: usize,
}

impl<T> Drop for MergeHole<'_, T> {
	fn drop(&mut self) {
		// SAFETY: `T` is not a zero-sized type, `buf[start..end]` is initialized, and
		// `v[dest..dest + end - start]` is exactly the hole left for it.
		unsafe {
			for i in 0..self.end - self.start {
				let src = self.buf.add(self.start + i);
				let dst = self.v.view_mut().index(self.dest + i) as *mut T;
				ptr::copy_nonoverlapping(src, dst, 1);
			}
		}
	}
}
