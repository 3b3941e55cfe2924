use crate::{
	error::Result,
	par::{grow, install},
	radix_sort::{RadixKey, radix_sort_from, split_by_bit},
};
use ndarray::ArrayViewMut1;

/// Sorts `v` in parallel using binary MSD radix sort on a dedicated pool of `workers` threads.
///
/// Both buckets of a subview longer than `ceil(len / workers)` are sorted as forked tasks,
/// shorter subviews are sorted sequentially from the current bit on. This sort is unstable.
pub fn par_radix_sort<K>(v: ArrayViewMut1<'_, K>, workers: usize) -> Result<()>
where
	K: RadixKey + Send,
{
	install(workers, v.len(), |threshold| {
		recurse(v, K::BITS - 1, K::SIGNED, threshold)
	})
}

fn recurse<K>(v: ArrayViewMut1<'_, K>, bit: u32, signed: bool, threshold: usize)
where
	K: RadixKey + Send,
{
	if v.len() <= threshold {
		radix_sort_from(v, bit, signed);
		return;
	}

	let (zeros, ones) = split_by_bit(v, bit, signed);
	if let Some(bit) = bit.checked_sub(1) {
		log::trace!("forking radix sort of {} and {} elements", zeros.len(), ones.len());
		rayon::join(
			|| grow(|| recurse(zeros, bit, false, threshold)),
			|| grow(|| recurse(ones, bit, false, threshold)),
		);
	}
}
