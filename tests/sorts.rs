#![cfg(feature = "rayon")]

use core::cmp::Ordering;
use ndarray::{Array1, arr1};
use ndarray_sorts::{Error, Sort1Ext};
use quickcheck_macros::quickcheck;
use rand::Rng;

fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn random(len: usize) -> Vec<i32> {
	let mut rng = rand::rng();
	(0..len).map(|_| rng.random_range(-1000..1000)).collect()
}

/// Sorts a copy of `xs` with every algorithm.
fn sort_all(xs: &[i32]) -> Vec<(&'static str, Array1<i32>)> {
	let mut sorted = Vec::new();
	let mut sort = |name, f: &dyn Fn(&mut Array1<i32>)| {
		let mut array = Array1::from_vec(xs.to_vec());
		f(&mut array);
		sorted.push((name, array));
	};
	sort("quick_sort", &|v: &mut Array1<i32>| v.quick_sort(..));
	sort("merge_sort", &|v: &mut Array1<i32>| v.merge_sort(..));
	sort("insertion_sort", &|v: &mut Array1<i32>| v.insertion_sort(..));
	sort("heap_sort", &|v: &mut Array1<i32>| v.heap_sort(..));
	sort("intro_sort", &|v: &mut Array1<i32>| v.intro_sort(..));
	sort("tim_sort", &|v: &mut Array1<i32>| v.tim_sort(..));
	sort("radix_sort", &|v: &mut Array1<i32>| v.radix_sort(..));
	for workers in [2, 4, 8] {
		sort("par_quick_sort", &|v: &mut Array1<i32>| v.par_quick_sort(.., workers).unwrap());
		sort("par_merge_sort", &|v: &mut Array1<i32>| v.par_merge_sort(.., workers).unwrap());
		sort("par_radix_sort", &|v: &mut Array1<i32>| v.par_radix_sort(.., workers).unwrap());
	}
	sorted
}

#[cfg_attr(miri, ignore)]
#[quickcheck]
fn equivalent(xs: Vec<i32>) {
	let mut expected = xs.clone();
	expected.sort();
	let expected = Array1::from_vec(expected);
	for (name, array) in sort_all(&xs) {
		assert_eq!(array, expected, "{name}");
	}
}

#[cfg_attr(miri, ignore)]
#[test]
fn equivalent_large() {
	init();
	for len in [0, 1, 2, 3, 63, 64, 65, 1000, 20_000] {
		let xs = random(len);
		let mut expected = xs.clone();
		expected.sort();
		let expected = Array1::from_vec(expected);
		for (name, array) in sort_all(&xs) {
			assert_eq!(array, expected, "{name} of {len} elements");
		}
	}
}

#[cfg_attr(miri, ignore)]
#[test]
fn idempotent() {
	init();
	let mut xs = random(5000);
	xs.sort();
	for (name, array) in sort_all(&xs) {
		assert_eq!(array.to_vec(), xs, "{name}");
	}
}

#[cfg_attr(miri, ignore)]
#[test]
fn range_isolation() {
	init();
	let xs = random(3000);
	let (from, to) = (700, 2100);
	let mut expected = xs.clone();
	expected[from..=to].sort();

	let mut sort = |name, f: &dyn Fn(&mut Array1<i32>)| {
		let mut array = Array1::from_vec(xs.clone());
		f(&mut array);
		assert_eq!(array.to_vec(), expected, "{name}");
	};
	sort("quick_sort", &|v: &mut Array1<i32>| v.quick_sort(from..=to));
	sort("merge_sort", &|v: &mut Array1<i32>| v.merge_sort(from..=to));
	sort("insertion_sort", &|v: &mut Array1<i32>| v.insertion_sort(from..=to));
	sort("heap_sort", &|v: &mut Array1<i32>| v.heap_sort(from..=to));
	sort("intro_sort", &|v: &mut Array1<i32>| v.intro_sort(from..=to));
	sort("tim_sort", &|v: &mut Array1<i32>| v.tim_sort(from..=to));
	sort("radix_sort", &|v: &mut Array1<i32>| v.radix_sort(from..=to));
	sort("par_quick_sort", &|v: &mut Array1<i32>| v.par_quick_sort(from..=to, 3).unwrap());
	sort("par_merge_sort", &|v: &mut Array1<i32>| v.par_merge_sort(from..=to, 3).unwrap());
	sort("par_radix_sort", &|v: &mut Array1<i32>| v.par_radix_sort(from..=to, 3).unwrap());
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Item {
	index: usize,
	key: u8,
}

fn by_key(a: &Item, b: &Item) -> Ordering {
	a.key.cmp(&b.key)
}

#[cfg_attr(miri, ignore)]
#[quickcheck]
fn stable(keys: Vec<u8>) {
	let xs = keys
		.iter()
		.cycle()
		.take(keys.len() * 31)
		.enumerate()
		.map(|(index, &key)| Item { index, key: key % 5 })
		.collect::<Vec<_>>();
	let mut expected = xs.clone();
	expected.sort_by(by_key);
	let expected = Array1::from_vec(expected);

	let mut sort = |name, f: &dyn Fn(&mut Array1<Item>)| {
		let mut array = Array1::from_vec(xs.clone());
		f(&mut array);
		assert_eq!(array, expected, "{name}");
	};
	sort("merge_sort_by", &|v: &mut Array1<Item>| v.merge_sort_by(.., by_key));
	sort("insertion_sort_by", &|v: &mut Array1<Item>| v.insertion_sort_by(.., by_key));
	sort("tim_sort_by", &|v: &mut Array1<Item>| v.tim_sort_by(.., by_key));
	for workers in [2, 4, 8] {
		sort("par_merge_sort_by", &|v: &mut Array1<Item>| {
			v.par_merge_sort_by(.., workers, by_key).unwrap()
		});
	}
}

#[cfg_attr(miri, ignore)]
#[test]
fn unstable_by() {
	let xs = random(2000)
		.into_iter()
		.enumerate()
		.map(|(index, key)| Item { index, key: key.unsigned_abs() as u8 })
		.collect::<Vec<_>>();
	let mut sort = |name, f: &dyn Fn(&mut Array1<Item>)| {
		let mut array = Array1::from_vec(xs.clone());
		f(&mut array);
		assert!(array.is_sorted_by(.., by_key), "{name}");
		let mut indices = array.iter().map(|item| item.index).collect::<Vec<_>>();
		indices.sort();
		assert!(indices.into_iter().eq(0..xs.len()), "{name}");
	};
	sort("quick_sort_by", &|v: &mut Array1<Item>| v.quick_sort_by(.., by_key));
	sort("heap_sort_by", &|v: &mut Array1<Item>| v.heap_sort_by(.., by_key));
	sort("intro_sort_by", &|v: &mut Array1<Item>| v.intro_sort_by(.., by_key));
	sort("par_quick_sort_by", &|v: &mut Array1<Item>| v.par_quick_sort_by(.., 4, by_key).unwrap());
}

#[test]
fn invalid_workers() {
	let mut v = arr1(&[3, 1, 2]);
	for workers in [0, 1] {
		assert!(matches!(
			v.par_quick_sort(.., workers),
			Err(Error::InvalidArgument { .. })
		));
		assert!(matches!(
			v.par_merge_sort(.., workers),
			Err(Error::InvalidArgument { .. })
		));
		assert!(matches!(
			v.par_radix_sort(.., workers),
			Err(Error::InvalidArgument { .. })
		));
		assert!(matches!(
			v.par_quick_sort(2..=1, workers),
			Err(Error::InvalidArgument { .. })
		));
	}
	assert_eq!(v, arr1(&[3, 1, 2]));
	assert_eq!(
		Error::InvalidArgument { workers: 1 }.to_string(),
		"workers must be > 1, got 1"
	);
}

#[test]
fn invalid_workers_before_range() {
	let mut v = arr1(&[3, 1, 2]);
	let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
		let results = [
			v.par_quick_sort(0..=10, 1),
			v.par_quick_sort_by(0..=10, 1, |a, b| a.cmp(b)),
			v.par_merge_sort(..7, 0),
			v.par_merge_sort_by(..7, 0, |a, b| a.cmp(b)),
			v.par_radix_sort(2..9, 1),
		];
		results
			.iter()
			.all(|result| matches!(result, Err(Error::InvalidArgument { .. })))
	}));
	assert!(matches!(caught, Ok(true)));
	assert_eq!(v, arr1(&[3, 1, 2]));
}

#[cfg_attr(miri, ignore)]
#[test]
fn propagates_panic() {
	let mut xs = random(10_000);
	xs[4321] = 999;
	let mut v = Array1::from_vec(xs.clone());
	let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
		v.par_merge_sort_by(.., 4, |a, b| {
			assert!(*a != 999 && *b != 999, "poisoned element");
			a.cmp(b)
		})
	}));
	assert!(result.is_err());

	// Every element is still held exactly once.
	let mut retained = v.to_vec();
	retained.sort_unstable();
	xs.sort_unstable();
	assert_eq!(retained, xs);
}

#[test]
fn scenarios() {
	let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	v.quick_sort(..);
	assert_eq!(v, arr1(&[1, 2, 3, 5, 8, 9]));

	let mut v = arr1(&[(1, "a"), (1, "b"), (0, "c")]);
	v.tim_sort_by(.., |a, b| a.0.cmp(&b.0));
	assert_eq!(v, arr1(&[(0, "c"), (1, "a"), (1, "b")]));

	let mut v = arr1(&[-5, 3, -1, 0, 7]);
	v.radix_sort(..);
	assert_eq!(v, arr1(&[-5, -1, 0, 3, 7]));

	let mut v = arr1(&[1]);
	v.heap_sort(..);
	assert_eq!(v, arr1(&[1]));

	let mut v = Array1::from_iter((1..=9).rev());
	let mut w = v.clone();
	v.par_merge_sort(.., 4).unwrap();
	w.merge_sort(..);
	assert_eq!(v, Array1::from_iter(1..=9));
	assert_eq!(v, w);
}
