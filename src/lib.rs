//! Classic in-place sorting algorithms and their fork-join parallel variants for (sub)views into
//! 1-dimensional [`ndarray`] arrays with arbitrary memory layout (e.g., non-contiguous).
//!
//! Every algorithm sorts a range of the array in place and never reads or writes elements outside
//! of it. The range is given as any [`RangeBounds<usize>`], where `from..=to` selects the
//! inclusive range `[from, to]` and `..` selects the whole array.
//!
//! # Example
//!
//! ```
//! use ndarray_sorts::{ndarray::arr2, Sort1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],
//!                    [ 8, 3, 2,  4,  8],
//!                    [38, 9, 3,  0,  3],
//!                    [ 4, 9, 0,  8, -1]]);
//!
//! // Sort the first three rows of the non-contiguous last column.
//! v.column_mut(4).tim_sort(0..=2);
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3,  2],
//!                     [ 8, 3, 2,  4,  3],
//!                     [38, 9, 3,  0,  8],
//!                     [ 4, 9, 0,  8, -1]]));
//! ```
//!
//! # Algorithms
//!
//! Complexities where *n* is the length of the range and *w* the bit width of the keys.
//!
//! | Algorithm        | Stable | Best             | Average          | Worst            | Space            |
//! |------------------|--------|------------------|------------------|------------------|------------------|
//! | Quicksort        | no     | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*²)        | *O*(log *n*)     |
//! | Merge sort       | yes    | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*/2)       |
//! | Insertion sort   | yes    | *O*(*n* log *n*) | *O*(*n*²)        | *O*(*n*²)        | *O*(1)           |
//! | Heapsort         | no     | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(1)           |
//! | Introsort        | no     | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(log *n*)     |
//! | Timsort          | yes    | *O*(*n*)         | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*/2)       |
//! | Radix sort       | no     | *O*(*n* *w*)     | *O*(*n* *w*)     | *O*(*n* *w*)     | *O*(*w*)         |
//!
//! # Parallel Sorting
//!
//! Quicksort, merge sort, and radix sort have `par_` variants expecting a worker count greater
//! than one. Each call spawns its own pool of exactly that many threads and forks subranges longer
//! than `ceil(len / workers)` as independent tasks on disjoint subviews. The call blocks until all
//! tasks joined. A panicking comparator is propagated to the caller.
//!
//! # Features
//!
//!   * `alloc` for merge sort and timsort. Enabled by `std`.
//!   * `std` for [`std::error::Error`] and the exact introsort depth limit. Enabled by `default`.
//!   * `rayon` for the parallel `par_*` variants. Enabled by `default`.
//!   * `stacker` for growing the stack of deeply recursing parallel tasks. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod heap_sort;
mod insertion_sort;
mod intro_sort;
mod merge_sort;
mod partition;
mod quick_sort;
mod radix_sort;
mod tim_sort;

#[cfg(feature = "rayon")]
mod par;

pub use crate::{
	error::{Error, Result},
	heap_sort::heap_sort,
	insertion_sort::insertion_sort,
	intro_sort::intro_sort,
	quick_sort::quick_sort,
	radix_sort::{RadixKey, radix_sort},
};
#[cfg(feature = "alloc")]
pub use crate::{merge_sort::merge_sort, tim_sort::tim_sort};
#[cfg(feature = "rayon")]
pub use crate::par::{
	merge_sort::par_merge_sort, quick_sort::par_quick_sort, radix_sort::par_radix_sort,
};

use core::{
	cmp::Ordering::{self, Less},
	ops::{Bound, RangeBounds},
};
use ndarray::{ArrayBase, ArrayViewMut1, Data, DataMut, Ix1, s};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place sorting of a range.
///
/// Methods without suffix sort by [`Ord`], the `_by` variants by a comparator function. The
/// comparator must define a total order, otherwise the resulting order is unspecified (but every
/// element is retained).
///
/// Ranges ending beyond the array panic. Empty ranges, including inverted ones (e.g., `5..=2`),
/// leave the array untouched.
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the range using quicksort.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place, and *O*(*n* log *n*) on
	/// average but *O*(*n*²) worst-case.
	///
	/// # Current Implementation
	///
	/// Hoare partitioning around the middle element of the range. The shorter partition is sorted
	/// recursively and the longer one iteratively, which bounds the recursion depth to
	/// *O*(log *n*). Inputs with many duplicates still split evenly.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.quick_sort(..);
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	fn quick_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range using quicksort with a comparator function.
	///
	/// See [`quick_sort`](Sort1Ext::quick_sort).
	fn quick_sort_by<R, F>(&mut self, range: R, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range in parallel using quicksort on a dedicated pool of `workers` threads.
	///
	/// Produces the same order as [`quick_sort`](Sort1Ext::quick_sort).
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `workers <= 1` and with [`Error::ThreadPool`] if
	/// the threads cannot be spawned.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Error, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.par_quick_sort(.., 2)?;
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	///
	/// assert!(matches!(v.par_quick_sort(.., 1), Err(Error::InvalidArgument { workers: 1 })));
	/// # Ok::<(), Error>(())
	/// ```
	#[cfg(feature = "rayon")]
	fn par_quick_sort<R>(&mut self, range: R, workers: usize) -> Result<()>
	where
		A: Ord + Send,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range in parallel using quicksort with a comparator function.
	///
	/// See [`par_quick_sort`](Sort1Ext::par_quick_sort).
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `workers <= 1` and with [`Error::ThreadPool`] if
	/// the threads cannot be spawned.
	#[cfg(feature = "rayon")]
	fn par_quick_sort_by<R, F>(&mut self, range: R, workers: usize, compare: F) -> Result<()>
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
		R: RangeBounds<usize>;

	/// Sorts the range using merge sort.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* log *n*)
	/// worst-case.
	///
	/// # Current Implementation
	///
	/// Top-down merge sort splitting after the first `ceil(n / 2)` elements. Each merge step
	/// temporarily allocates a copy of its left run.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[9, -5, 4, 1, -3, 2]);
	///
	/// // Sorts all but the first element.
	/// v.merge_sort(1..);
	/// assert!(v == arr1(&[9, -5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range using merge sort with a comparator function.
	///
	/// See [`merge_sort`](Sort1Ext::merge_sort).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
	///
	/// v.merge_sort_by(.., |a, b| a.0.cmp(&b.0));
	/// assert!(v == arr1(&[(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort_by<R, F>(&mut self, range: R, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range in parallel using merge sort on a dedicated pool of `workers` threads.
	///
	/// This sort is stable and produces the same order as [`merge_sort`](Sort1Ext::merge_sort).
	/// Halves are sorted as forked tasks, merging happens sequentially after both joined.
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `workers <= 1` and with [`Error::ThreadPool`] if
	/// the threads cannot be spawned.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::Array1, Sort1Ext};
	///
	/// let mut v = Array1::from_iter((1..=9).rev());
	///
	/// v.par_merge_sort(.., 4)?;
	/// assert!(v == Array1::from_iter(1..=9));
	/// # Ok::<(), ndarray_sorts::Error>(())
	/// ```
	#[cfg(feature = "rayon")]
	fn par_merge_sort<R>(&mut self, range: R, workers: usize) -> Result<()>
	where
		A: Ord + Send,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range in parallel using merge sort with a comparator function.
	///
	/// See [`par_merge_sort`](Sort1Ext::par_merge_sort).
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `workers <= 1` and with [`Error::ThreadPool`] if
	/// the threads cannot be spawned.
	#[cfg(feature = "rayon")]
	fn par_merge_sort_by<R, F>(&mut self, range: R, workers: usize, compare: F) -> Result<()>
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
		R: RangeBounds<usize>;

	/// Sorts the range using binary insertion sort.
	///
	/// This sort is stable, in-place, and *O*(*n*²) worst-case but fast on short or nearly sorted
	/// ranges. Each element is inserted after all equal elements preceding it.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[3, 1, 2]);
	///
	/// v.insertion_sort(..);
	/// assert!(v == arr1(&[1, 2, 3]));
	/// ```
	fn insertion_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range using binary insertion sort with a comparator function.
	///
	/// See [`insertion_sort`](Sort1Ext::insertion_sort).
	fn insertion_sort_by<R, F>(&mut self, range: R, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>;

	/// Sorts the range using heapsort.
	///
	/// This sort is unstable, in-place, and *O*(*n* log *n*) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[4, -1, 7, 0]);
	///
	/// v.heap_sort(..);
	/// assert!(v == arr1(&[-1, 0, 4, 7]));
	/// ```
	fn heap_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range using heapsort with a comparator function.
	///
	/// See [`heap_sort`](Sort1Ext::heap_sort).
	fn heap_sort_by<R, F>(&mut self, range: R, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>;

	/// Sorts the range using introsort.
	///
	/// This sort is unstable, in-place, and *O*(*n* log *n*) worst-case.
	///
	/// # Current Implementation
	///
	/// Partitions like [`quick_sort`](Sort1Ext::quick_sort) but switches to heapsort for the
	/// remaining subrange once `floor(2 ln n)` partitioning levels are exhausted.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[2.5, -1.0, 0.5]);
	///
	/// v.intro_sort_by(.., |a: &f64, b: &f64| a.total_cmp(b));
	/// assert!(v == arr1(&[-1.0, 0.5, 2.5]));
	/// ```
	fn intro_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range using introsort with a comparator function.
	///
	/// See [`intro_sort`](Sort1Ext::intro_sort).
	fn intro_sort_by<R, F>(&mut self, range: R, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>;

	/// Sorts the range using timsort.
	///
	/// This sort is stable, *O*(*n* log *n*) worst-case, and *O*(*n*) on ranges consisting of a
	/// few non-descending or descending runs.
	///
	/// # Current Implementation
	///
	/// Natural runs are detected left to right, reversed if strictly descending, and extended to
	/// a minimum run length of 32 to 64 elements by insertion sort. Pending runs are merged
	/// whenever their lengths stop growing like the Fibonacci numbers.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[(1, "a"), (1, "b"), (0, "c")]);
	///
	/// v.tim_sort_by(.., |a, b| a.0.cmp(&b.0));
	/// assert!(v == arr1(&[(0, "c"), (1, "a"), (1, "b")]));
	/// ```
	#[cfg(feature = "alloc")]
	fn tim_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range using timsort with a comparator function.
	///
	/// See [`tim_sort`](Sort1Ext::tim_sort).
	#[cfg(feature = "alloc")]
	fn tim_sort_by<R, F>(&mut self, range: R, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>;

	/// Sorts the range of integer keys using binary MSD radix sort.
	///
	/// This sort is unstable, in-place, not comparison-based, and *O*(*n* *w*) worst-case for keys
	/// of *w* bits.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 3, -1, 0, 7]);
	///
	/// v.radix_sort(..);
	/// assert!(v == arr1(&[-5, -1, 0, 3, 7]));
	/// ```
	fn radix_sort<R>(&mut self, range: R)
	where
		A: RadixKey,
		S: DataMut,
		R: RangeBounds<usize>;
	/// Sorts the range of integer keys in parallel using binary MSD radix sort on a dedicated pool
	/// of `workers` threads.
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `workers <= 1` and with [`Error::ThreadPool`] if
	/// the threads cannot be spawned.
	#[cfg(feature = "rayon")]
	fn par_radix_sort<R>(&mut self, range: R, workers: usize) -> Result<()>
	where
		A: RadixKey + Send,
		S: DataMut,
		R: RangeBounds<usize>;

	/// Checks if the elements of the range are sorted.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[1, 2, 2, 9, 0]);
	///
	/// assert!(v.is_sorted(..=3));
	/// assert!(!v.is_sorted(..));
	/// ```
	#[must_use]
	fn is_sorted<R>(&self, range: R) -> bool
	where
		A: PartialOrd,
		R: RangeBounds<usize>;
	/// Checks if the elements of the range are sorted according to a comparator function.
	#[must_use]
	fn is_sorted_by<R, F>(&self, range: R, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering,
		R: RangeBounds<usize>;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn quick_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		quick_sort(sub_view(self, range), &mut A::lt);
	}
	#[inline]
	fn quick_sort_by<R, F>(&mut self, range: R, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		quick_sort(sub_view(self, range), &mut |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_quick_sort<R>(&mut self, range: R, workers: usize) -> Result<()>
	where
		A: Ord + Send,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		par::check(workers)?;
		par_quick_sort(sub_view(self, range), workers, A::lt)
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_quick_sort_by<R, F>(&mut self, range: R, workers: usize, compare: F) -> Result<()>
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		par::check(workers)?;
		par_quick_sort(sub_view(self, range), workers, |a: &A, b: &A| {
			compare(a, b) == Less
		})
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		merge_sort(sub_view(self, range), &mut A::lt);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort_by<R, F>(&mut self, range: R, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		merge_sort(sub_view(self, range), &mut |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_merge_sort<R>(&mut self, range: R, workers: usize) -> Result<()>
	where
		A: Ord + Send,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		par::check(workers)?;
		par_merge_sort(sub_view(self, range), workers, A::lt)
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_merge_sort_by<R, F>(&mut self, range: R, workers: usize, compare: F) -> Result<()>
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		par::check(workers)?;
		par_merge_sort(sub_view(self, range), workers, |a: &A, b: &A| {
			compare(a, b) == Less
		})
	}

	#[inline]
	fn insertion_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		insertion_sort(sub_view(self, range), &mut A::lt);
	}
	#[inline]
	fn insertion_sort_by<R, F>(&mut self, range: R, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		insertion_sort(sub_view(self, range), &mut |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}

	#[inline]
	fn heap_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		heap_sort(sub_view(self, range), &mut A::lt);
	}
	#[inline]
	fn heap_sort_by<R, F>(&mut self, range: R, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		heap_sort(sub_view(self, range), &mut |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}

	#[inline]
	fn intro_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		intro_sort(sub_view(self, range), &mut A::lt);
	}
	#[inline]
	fn intro_sort_by<R, F>(&mut self, range: R, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		intro_sort(sub_view(self, range), &mut |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn tim_sort<R>(&mut self, range: R)
	where
		A: Ord,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		tim_sort(sub_view(self, range), &mut A::lt);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn tim_sort_by<R, F>(&mut self, range: R, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		tim_sort(sub_view(self, range), &mut |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}

	#[inline]
	fn radix_sort<R>(&mut self, range: R)
	where
		A: RadixKey,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		radix_sort(sub_view(self, range));
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_radix_sort<R>(&mut self, range: R, workers: usize) -> Result<()>
	where
		A: RadixKey + Send,
		S: DataMut,
		R: RangeBounds<usize>,
	{
		par::check(workers)?;
		par_radix_sort(sub_view(self, range), workers)
	}

	#[inline]
	fn is_sorted<R>(&self, range: R) -> bool
	where
		A: PartialOrd,
		R: RangeBounds<usize>,
	{
		let (start, end) = bounds(range, self.len());
		(start + 1..end).all(|i| self[i - 1] <= self[i])
	}
	#[inline]
	fn is_sorted_by<R, F>(&self, range: R, mut compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering,
		R: RangeBounds<usize>,
	{
		let (start, end) = bounds(range, self.len());
		(start + 1..end).all(|i| compare(&self[i - 1], &self[i]) != Ordering::Greater)
	}
}

/// Resolves `range` into `start..end` for an array of `len` elements. Empty if `start >= end`.
fn bounds<R>(range: R, len: usize) -> (usize, usize)
where
	R: RangeBounds<usize>,
{
	let start = match range.start_bound() {
		Bound::Included(&start) => start,
		Bound::Excluded(&start) => start.saturating_add(1),
		Bound::Unbounded => 0,
	};
	let end = match range.end_bound() {
		Bound::Included(&end) => end.saturating_add(1),
		Bound::Excluded(&end) => end,
		Bound::Unbounded => len,
	};
	if start < end {
		assert!(end <= len, "range end {end} out of bounds for length {len}");
		(start, end)
	} else {
		(0, 0)
	}
}

/// Mutable subview of the elements in `range`.
fn sub_view<A, S, R>(v: &mut ArrayBase<S, Ix1>, range: R) -> ArrayViewMut1<'_, A>
where
	S: DataMut<Elem = A>,
	R: RangeBounds<usize>,
{
	let (start, end) = bounds(range, v.len());
	v.slice_mut(s![start..end])
}
