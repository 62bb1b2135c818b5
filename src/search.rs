//! Binary search over an ordered slice.
//!
//! The search works on inclusive `[low, high]` bounds expressed as `isize` so
//! that an empty prefix can be written as `(0, -1)`. Callers are expected to
//! pass a non-decreasing slice and bounds that index into it; neither is
//! checked here.

use std::cmp::Ordering;

use log::trace;

/// Outcome of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
	/// Index of an element equal to the target.
	Found(usize),
	NotFound,
}

impl SearchResult {
	pub fn index(self) -> Option<usize> {
		match self {
			Self::Found(index) => Some(index),
			Self::NotFound => None,
		}
	}

	pub fn is_found(self) -> bool {
		matches!(self, Self::Found(_))
	}
}

impl From<SearchResult> for Option<usize> {
	fn from(result: SearchResult) -> Self {
		result.index()
	}
}

/// A target plus the inclusive bounds of the subrange to search.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a, T> {
	pub target: &'a T,
	pub low: isize,
	pub high: isize,
}

impl<'a, T: Ord> SearchRequest<'a, T> {
	pub fn new(target: &'a T, low: isize, high: isize) -> Self {
		Self { target, low, high }
	}

	/// Request covering every index of a sequence of length `len`.
	///
	/// Only slices of zero-sized elements can be longer than `isize::MAX`;
	/// for those the upper bound is clamped, which still reaches an element
	/// equal to any target.
	pub fn whole(target: &'a T, len: usize) -> Self {
		let high = isize::try_from(len).map_or(isize::MAX, |len| len - 1);
		Self::new(target, 0, high)
	}

	pub fn is_empty(&self) -> bool {
		self.low > self.high
	}

	pub fn run(&self, sequence: &[T]) -> SearchResult {
		search(sequence, self.target, self.low, self.high)
	}
}

/// Locate `target` within `sequence[low..=high]` by iterative halving.
///
/// Returns [`SearchResult::Found`] with the index of some element equal to
/// `target`, or [`SearchResult::NotFound`]. When several elements compare
/// equal, any one of their indices may be returned. An empty range
/// (`low > high`) returns immediately without touching `sequence`.
///
/// # Panics
///
/// Panics if a probed index falls outside `sequence`, which only happens when
/// the bounds do not describe valid indices.
///
/// # Examples
///
/// ```
/// use coursework::search::{SearchResult, search};
///
/// let sequence = [1, 3, 5, 7, 9, 11];
/// assert_eq!(search(&sequence, &7, 0, 5), SearchResult::Found(3));
/// assert_eq!(search(&sequence, &4, 0, 5), SearchResult::NotFound);
/// ```
pub fn search<T: Ord>(sequence: &[T], target: &T, low: isize, high: isize) -> SearchResult {
	let (mut low, mut high) = (low, high);

	while low <= high {
		// `(low + high) / 2` can overflow for large bounds.
		let mid = low + (high - low) / 2;
		trace!("probe low={low} mid={mid} high={high}");

		match target.cmp(&sequence[mid as usize]) {
			Ordering::Equal => return SearchResult::Found(mid as usize),
			Ordering::Greater => low = mid + 1,
			Ordering::Less => high = mid - 1,
		}
	}

	SearchResult::NotFound
}

/// Search the whole of `sequence`.
pub fn search_all<T: Ord>(sequence: &[T], target: &T) -> SearchResult {
	SearchRequest::whole(target, sequence.len()).run(sequence)
}

/// Whether `sequence` is sorted in non-decreasing order.
pub fn is_ordered<T: Ord>(sequence: &[T]) -> bool {
	sequence.windows(2).all(|pair| pair[0] <= pair[1])
}
