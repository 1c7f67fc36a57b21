//! A module containing generic windowing and pairing iterator helpers
//! used by the line-sweep engine.

use core::iter::Peekable;

use itertools::{Itertools, TupleWindows, Tuples};

/// An iterator yielding each item together with the items either side of
/// it, see [`previous_current_next()`].
#[derive(Debug, Clone)]
pub struct PreviousCurrentNext<I>
where
	I: Iterator,
{
	inner: Peekable<I>,
	previous: Option<I::Item>,
}

impl<I> Iterator for PreviousCurrentNext<I>
where
	I: Iterator,
	I::Item: Clone,
{
	type Item = (Option<I::Item>, I::Item, Option<I::Item>);

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.inner.next()?;
		let next = self.inner.peek().cloned();
		let previous = self.previous.replace(current.clone());

		Some((previous, current, next))
	}
}

/// Yields `(previous, current, next)` for every item, where `previous`
/// is `None` for the first item and `next` is `None` for the last.
///
/// # Examples
/// ```
/// use interval_algebra::utils::previous_current_next;
///
/// assert_eq!(
/// 	previous_current_next([1, 2, 3]).collect::<Vec<_>>(),
/// 	[(None, 1, Some(2)), (Some(1), 2, Some(3)), (Some(2), 3, None)]
/// );
/// ```
pub fn previous_current_next<I>(
	iterable: I,
) -> PreviousCurrentNext<I::IntoIter>
where
	I: IntoIterator,
	I::Item: Clone,
{
	PreviousCurrentNext {
		inner: iterable.into_iter().peekable(),
		previous: None,
	}
}

/// Yields every pair of neighbouring items: `[1, 2, 3]` gives `(1, 2)`
/// and `(2, 3)`.
pub fn consecutive_overlapping_pairs<I>(
	iterable: I,
) -> TupleWindows<I::IntoIter, (I::Item, I::Item)>
where
	I: IntoIterator,
	I::Item: Clone,
{
	iterable.into_iter().tuple_windows()
}

/// Yields non-overlapping pairs of items: `[1, 2, 3, 4, 5]` gives `(1, 2)`
/// and `(3, 4)`, an unpaired trailing item is dropped.
pub fn consecutive_disjoint_pairs<I>(
	iterable: I,
) -> Tuples<I::IntoIter, (I::Item, I::Item)>
where
	I: IntoIterator,
{
	iterable.into_iter().tuples()
}

/// Returns the first and last items, which are the same item if there is
/// only one, or `None` if there are none.
pub fn first_and_last<I>(iterable: I) -> Option<(I::Item, I::Item)>
where
	I: IntoIterator,
	I::Item: Clone,
{
	let mut iter = iterable.into_iter();
	let first = iter.next()?;
	let last = iter.last().unwrap_or_else(|| first.clone());

	Some((first, last))
}
