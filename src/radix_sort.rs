//! Binary MSD radix sort, also known as binary quicksort.

use ndarray::{ArrayViewMut1, Axis};

/// Fixed-width integer keys sortable by [`radix_sort`].
pub trait RadixKey: Copy {
	/// Number of bits in the key.
	const BITS: u32;
	/// Whether the most significant bit is a two's complement sign bit.
	const SIGNED: bool;

	/// Returns whether bit `n` (counting from the least significant bit) is set.
	fn bit(self, n: u32) -> bool;
}

macro_rules! impl_radix_key {
	($signed:literal => $($ty:ident)*) => {$(
		impl RadixKey for $ty {
			const BITS: u32 = <$ty>::BITS;
			const SIGNED: bool = $signed;

			#[inline]
			fn bit(self, n: u32) -> bool {
				(self >> n) & 1 == 1
			}
		}
	)*};
}

impl_radix_key!(true => i8 i16 i32 i64 i128 isize);
impl_radix_key!(false => u8 u16 u32 u64 u128 usize);

/// Sorts `v` using binary MSD radix sort, which is unstable and *O*(*n* \* *w*) worst-case for
/// keys of *w* bits.
///
/// Starting with the most significant bit, `v` is partitioned into a zeros bucket followed by a
/// ones bucket, and each bucket is sorted recursively by the next less significant bit. For signed
/// keys the sense of the sign bit is inverted so that negative keys precede non-negative ones.
pub fn radix_sort<K>(v: ArrayViewMut1<'_, K>)
where
	K: RadixKey,
{
	radix_sort_from(v, K::BITS - 1, K::SIGNED);
}

/// Sorts `v` by bit `bit` and all less significant bits, inverting the sense of `bit` if `signed`.
pub(crate) fn radix_sort_from<K>(v: ArrayViewMut1<'_, K>, bit: u32, signed: bool)
where
	K: RadixKey,
{
	if v.len() < 2 {
		return;
	}
	let (zeros, ones) = split_by_bit(v, bit, signed);
	if let Some(bit) = bit.checked_sub(1) {
		radix_sort_from(zeros, bit, false);
		radix_sort_from(ones, bit, false);
	}
}

/// Partitions `v` into elements with bit `bit` clear followed by elements with it set, or the
/// other way around if `signed`. Returns both buckets.
pub fn split_by_bit<K>(
	mut v: ArrayViewMut1<'_, K>,
	bit: u32,
	signed: bool,
) -> (ArrayViewMut1<'_, K>, ArrayViewMut1<'_, K>)
where
	K: RadixKey,
{
	// `v[..index]` is the zeros bucket and `v[ones..]` the ones bucket.
	let mut index = 0;
	let mut ones = v.len();
	while index < ones {
		if v[index].bit(bit) ^ signed {
			ones -= 1;
			v.swap(index, ones);
		} else {
			index += 1;
		}
	}
	v.split_at(Axis(0), ones)
}
