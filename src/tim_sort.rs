//! Adaptive merge sort in the spirit of [timsort](https://en.wikipedia.org/wiki/Timsort).

#![cfg(feature = "alloc")]

use crate::{insertion_sort::insertion_sort_shift_left, merge_sort::merge, partition::reverse};
use alloc::vec::Vec;
use core::{cmp, mem};
use ndarray::{ArrayView1, ArrayViewMut1, s};

/// Sorts `v` using timsort, which is stable, *O*(*n* \* log(*n*)) worst-case, and *O*(*n*) on
/// already ordered input.
///
/// The view is scanned left to right for natural runs, that is non-descending or strictly
/// descending subsequences. Descending runs are reversed, and runs shorter than [`min_run`] are
/// extended by insertion sort. Each run's start index is pushed onto a stack and adjacent runs are
/// merged until these two invariants hold for the three topmost runs `A` (newest), `B`, and `C`:
///
/// 1. `len(A) + len(B) < len(C)`
/// 2. `len(A) < len(B)`
///
/// Run lengths therefore grow at least like the Fibonacci numbers, bounding the stack depth and
/// the total merge work. Once the scan completes, the remaining runs are merged into one.
pub fn tim_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
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
	let min_run = min_run(len);

	// Start indices of the pending runs. Each run ends where the next one starts, the newest one
	// at the current scan position.
	let mut runs = Vec::<usize>::new();
	let mut start = 0;

	while start < len {
		let (streak, descending) = find_streak(v.slice(s![start..]), is_less);
		let mut end = start + streak;

		if streak < min_run {
			// A descending streak is not reversed but treated as unsorted.
			let presorted = if descending { 1 } else { streak };
			end = cmp::min(start + min_run, len);
			insertion_sort_shift_left(v.slice_mut(s![start..end]), presorted, is_less);
		} else if descending {
			reverse(v.slice_mut(s![start..end]));
		}

		runs.push(start);
		start = end;
		collapse(v.view_mut(), &mut runs, end, false, is_less);
		debug_assert!(balanced(&runs, end));
	}

	collapse(v.view_mut(), &mut runs, len, true, is_less);
	debug_assert_eq!(runs, [0]);
}

/// Computes the minimum run length for a view of `len` elements.
///
/// Takes the six most significant bits of `len` and adds one if any of the remaining bits is set.
/// The result lies in `32..=64` for `len >= 64` and equals `len` otherwise, so that `len / min_run`
/// is a power of two or slightly less.
pub fn min_run(mut len: usize) -> usize {
	let mut r = 0;
	while len >= 64 {
		r |= len & 1;
		len >>= 1;
	}
	len + r
}

/// Merges adjacent runs on the stack.
///
/// The newest run ends at `end`. Unless `force`, merging stops as soon as both invariants hold,
/// otherwise it continues until a single run is left.
fn collapse<T, F>(
	mut v: ArrayViewMut1<'_, T>,
	runs: &mut Vec<usize>,
	end: usize,
	force: bool,
	is_less: &mut F,
) where
	F: FnMut(&T, &T) -> bool,
{
	while runs.len() > 1 {
		let n = runs.len();
		let (a, b) = (runs[n - 1], runs[n - 2]);
		let (a_len, b_len) = (end - a, a - b);

		if n > 2 && a_len + b_len >= b - runs[n - 3] {
			// Merge `B` into `C`.
			let c = runs[n - 3];
			merge(v.slice_mut(s![c..a]), b - c, is_less);
			runs.remove(n - 2);
		} else if force || a_len >= b_len {
			// Merge `A` into `B`.
			merge(v.slice_mut(s![b..end]), a - b, is_less);
			runs.pop();
		} else {
			break;
		}
	}
}

/// Checks both invariants on the three topmost runs of which the newest ends at `end`.
fn balanced(runs: &[usize], end: usize) -> bool {
	match *runs {
		[.., c, b, a] => end - b < b - c && end - a < a - b,
		[.., b, a] => end - a < a - b,
		_ => true,
	}
}

/// Finds a streak of presorted elements starting at the beginning of the view.
///
/// Returns the length of the streak and whether it is strictly descending. Otherwise it is
/// non-descending. Requiring strict descent keeps reversal from reordering equal elements.
fn find_streak<T, F>(v: ArrayView1<'_, T>, is_less: &mut F) -> (usize, bool)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len < 2 {
		return (len, false);
	}

	let mut end = 2;
	if is_less(&v[1], &v[0]) {
		while end < len && is_less(&v[end], &v[end - 1]) {
			end += 1;
		}
		(end, true)
	} else {
		while end < len && !is_less(&v[end], &v[end - 1]) {
			end += 1;
		}
		(end, false)
	}
}
