//! Behavioural checks for the search engine over many small sorted inputs.

use coursework::{SearchRequest, SearchResult, search, search_all};

/// Every non-decreasing sequence of `len` values drawn from `0..values`.
fn sorted_sequences(len: usize, values: i32) -> Vec<Vec<i32>> {
	if len == 0 {
		return vec![Vec::new()];
	}
	let mut out = Vec::new();
	for prefix in sorted_sequences(len - 1, values) {
		let floor = prefix.last().copied().unwrap_or(0);
		for next in floor..values {
			let mut seq = prefix.clone();
			seq.push(next);
			out.push(seq);
		}
	}
	out
}

fn all_small_sequences() -> impl Iterator<Item = Vec<i32>> {
	(0..=6).flat_map(|len| sorted_sequences(len, 4))
}

#[test]
fn every_present_value_is_found() {
	for seq in all_small_sequences() {
		for value in &seq {
			let index = search_all(&seq, value)
				.index()
				.unwrap_or_else(|| panic!("{value} missing from {seq:?}"));
			assert_eq!(seq[index], *value, "wrong index for {value} in {seq:?}");
		}
	}
}

#[test]
fn absent_values_are_not_found() {
	for seq in all_small_sequences() {
		for value in -1..=5 {
			if !seq.contains(&value) {
				assert_eq!(search_all(&seq, &value), SearchResult::NotFound, "{value} in {seq:?}");
			}
		}
	}
}

#[test]
fn found_index_stays_inside_bounds() {
	let seq = [1, 2, 2, 2, 3, 4, 4, 5];
	for low in 0..seq.len() as isize {
		for high in low..seq.len() as isize {
			for target in 0..=6 {
				if let SearchResult::Found(index) = search(&seq, &target, low, high) {
					assert!((low as usize..=high as usize).contains(&index));
					assert_eq!(seq[index], target);
				}
			}
		}
	}
}

#[test]
fn repeated_calls_agree() {
	let seq = [2, 2, 2, 2];
	let first = search_all(&seq, &2);
	for _ in 0..10 {
		assert_eq!(search_all(&seq, &2), first);
	}
	assert!(matches!(first, SearchResult::Found(0..=3)));
}

#[test]
fn documented_scenarios() {
	let seq = [1, 3, 5, 7, 9, 11];
	assert_eq!(search(&seq, &7, 0, 5), SearchResult::Found(3));
	assert_eq!(search(&seq, &4, 0, 5), SearchResult::NotFound);

	let empty: [i32; 0] = [];
	assert_eq!(search(&empty, &99, 0, -1), SearchResult::NotFound);

	assert_eq!(search(&[5], &5, 0, 0), SearchResult::Found(0));
}

#[test]
fn works_with_non_integer_elements() {
	let words = ["apple", "banana", "cherry", "plum"];
	assert_eq!(search_all(&words, &"cherry"), SearchResult::Found(2));
	assert_eq!(
		SearchRequest::whole(&"kiwi", words.len()).run(&words),
		SearchResult::NotFound
	);
}

#[test]
fn concurrent_readers_share_a_sequence() {
	let seq: Vec<u64> = (0..10_000).map(|n| n * 3).collect();
	std::thread::scope(|scope| {
		for worker in 0..4u64 {
			let seq = &seq;
			scope.spawn(move || {
				for n in (worker..10_000).step_by(4) {
					assert_eq!(search_all(seq, &(n * 3)), SearchResult::Found(n as usize));
					assert_eq!(search_all(seq, &(n * 3 + 1)), SearchResult::NotFound);
				}
			});
		}
	});
}
