//! A module containing [`MultiInterval`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::error::Result;
use crate::interval::Interval;
use crate::region::Region;
use crate::sweep;
use crate::tolerance::{approx_eq, CONTAINMENT_NUDGE};

/// An immutable collection of [`Interval`]s, sorted by lower bound.
///
/// The members may overlap or touch, nothing forces them to be disjoint.
/// The empty collection is the empty set.
///
/// Operations that look at the collection as a whole ([`exterior()`],
/// [`interior()`], [`subtract()`] and [`intersect()`]) run a single line
/// sweep over every bound in `O(N log N)`. The merge operations insert
/// one interval at a time and restart their scan after every merge, so
/// they are `O(N²)` in the worst case.
///
/// Equality ignores member order: two collections are equal if every
/// member of one can be paired off with an equal member of the other. A
/// `MultiInterval` with a single member is never equal to a bare
/// [`Interval`], see [`MultiInterval::simplify()`] for converting
/// between them.
///
/// [`exterior()`]: MultiInterval::exterior
/// [`interior()`]: MultiInterval::interior
/// [`subtract()`]: MultiInterval::subtract
/// [`intersect()`]: MultiInterval::intersect
///
/// # Examples
/// ```
/// use interval_algebra::{Interval, MultiInterval};
///
/// let regions = MultiInterval::new([
/// 	Interval::closed(0.0, 4.0)?,
/// 	Interval::closed(2.0, 6.0)?,
/// 	Interval::open(8.0, 10.0)?,
/// ]);
///
/// assert_eq!(
/// 	regions.interior_merged(),
/// 	MultiInterval::new([
/// 		Interval::closed(0.0, 6.0)?,
/// 		Interval::open(8.0, 10.0)?,
/// 	])
/// );
/// assert_eq!(
/// 	regions.subtract(Interval::closed(3.0, 9.0)?),
/// 	MultiInterval::new([
/// 		Interval::closed_open(0.0, 3.0)?,
/// 		Interval::open(9.0, 10.0)?,
/// 	])
/// );
/// # Ok::<(), interval_algebra::IntervalError>(())
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
	feature = "serde",
	derive(Serialize, Deserialize),
	serde(from = "Vec<Interval>", into = "Vec<Interval>")
)]
pub struct MultiInterval {
	intervals: Vec<Interval>,
}

impl MultiInterval {
	/// Makes a new `MultiInterval` from any number of intervals.
	pub fn new(intervals: impl IntoIterator<Item = Interval>) -> Self {
		let mut intervals: Vec<Interval> = intervals.into_iter().collect();
		intervals.sort_by(Interval::cmp_exact);
		MultiInterval { intervals }
	}

	/// Makes a new, empty `MultiInterval`.
	pub fn empty() -> Self {
		MultiInterval::default()
	}

	/// The members, sorted by lower bound.
	pub fn intervals(&self) -> &[Interval] {
		&self.intervals
	}

	/// Returns an iterator over the members.
	pub fn iter(&self) -> core::slice::Iter<'_, Interval> {
		self.intervals.iter()
	}

	/// Returns the number of members.
	pub fn len(&self) -> usize {
		self.intervals.len()
	}

	/// Returns `true` if there are no members.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}

	/// Returns [`Region::Interval`] if there is exactly one member and
	/// [`Region::Multi`] otherwise.
	pub fn simplify(self) -> Region {
		match self.intervals.as_slice() {
			[interval] => Region::Interval(*interval),
			_ => Region::Multi(self),
		}
	}

	/// Returns the parts of the real line not covered by any member, as
	/// disjoint non-touching intervals.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Interval, MultiInterval};
	///
	/// let regions = MultiInterval::new([
	/// 	Interval::closed_open(0.0, 5.0)?,
	/// 	Interval::open_closed(5.0, 10.0)?,
	/// ]);
	///
	/// assert_eq!(
	/// 	regions.exterior(),
	/// 	MultiInterval::new([
	/// 		Interval::inf_open(0.0)?,
	/// 		Interval::degenerate(5.0)?,
	/// 		Interval::open_inf(10.0)?,
	/// 	])
	/// );
	/// assert_eq!(
	/// 	MultiInterval::empty().exterior(),
	/// 	MultiInterval::new([Interval::complete()])
	/// );
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn exterior(&self) -> MultiInterval {
		MultiInterval::new(sweep::exterior(&self.intervals))
	}

	/// Returns the parts of the real line covered by at least one member
	/// as disjoint intervals, split wherever the number of members
	/// covering them changes.
	///
	/// See [`MultiInterval::interior_merged()`] for a version without the
	/// extra splits.
	pub fn interior(&self) -> MultiInterval {
		MultiInterval::new(sweep::interior(&self.intervals))
	}

	/// Returns the parts of the real line covered by at least one member
	/// as the fewest possible disjoint intervals.
	pub fn interior_merged(&self) -> MultiInterval {
		MultiInterval::new(sweep::interior_merged(&self.intervals))
	}

	/// Returns the points covered by `self` but not by `operand`.
	///
	/// Overlapping members of `self` are flattened together, see
	/// [`MultiInterval::subtract_preserving()`] to keep them apart.
	pub fn subtract(&self, operand: impl AsRef<[Interval]>) -> MultiInterval {
		MultiInterval::new(sweep::subtract(&self.intervals, operand.as_ref()))
	}

	/// Subtracts `operand` from every member separately, keeping
	/// overlapping members distinct.
	///
	/// This takes `O(N·M)` time compared to the `O((N + M) log (N + M))`
	/// of [`MultiInterval::subtract()`].
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Interval, MultiInterval};
	///
	/// let regions = MultiInterval::new([
	/// 	Interval::closed(0.0, 20.0)?,
	/// 	Interval::closed(0.0, 10.0)?,
	/// ]);
	/// let operand = Interval::closed(10.0, 20.0)?;
	///
	/// assert_eq!(regions.subtract_preserving(operand).len(), 2);
	/// assert_eq!(regions.subtract(operand).len(), 1);
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn subtract_preserving(
		&self,
		operand: impl AsRef<[Interval]>,
	) -> MultiInterval {
		MultiInterval::new(sweep::subtract_preserving(
			&self.intervals,
			operand.as_ref(),
		))
	}

	/// Returns the points covered by both `self` and `operand`.
	pub fn intersect(&self, operand: impl AsRef<[Interval]>) -> MultiInterval {
		MultiInterval::new(sweep::intersect(&self.intervals, operand.as_ref()))
	}

	/// Returns every member of `self` and `other` without merging any of
	/// them.
	pub fn union_keeping_overlaps(
		&self,
		other: impl AsRef<[Interval]>,
	) -> MultiInterval {
		MultiInterval::new(
			self.intervals.iter().chain(other.as_ref()).copied(),
		)
	}

	/// Adds each member of `other` to the members of `self`, replacing it
	/// and any existing member `predicate` accepts by their hull.
	///
	/// After every merge the scan restarts from the first member, since
	/// the grown hull may now be accepted against a member that was
	/// already passed over.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Interval, MultiInterval};
	///
	/// let regions = MultiInterval::new([
	/// 	Interval::closed_open(0.0, 2.0)?,
	/// 	Interval::closed_open(4.0, 6.0)?,
	/// ]);
	///
	/// assert_eq!(
	/// 	regions.union_merge_on_predicate(
	/// 		Interval::closed_open(2.0, 4.0)?,
	/// 		Interval::touches
	/// 	),
	/// 	MultiInterval::new([Interval::closed_open(0.0, 6.0)?])
	/// );
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn union_merge_on_predicate<P>(
		&self,
		other: impl AsRef<[Interval]>,
		predicate: P,
	) -> MultiInterval
	where
		P: FnMut(&Interval, &Interval) -> bool,
	{
		MultiInterval::new(sweep::union_merge_on_predicate(
			&self.intervals,
			other.as_ref(),
			predicate,
		))
	}

	/// [`MultiInterval::union_merge_on_predicate()`] with
	/// [`Interval::touches()`].
	pub fn union_merge_touching(
		&self,
		other: impl AsRef<[Interval]>,
	) -> MultiInterval {
		self.union_merge_on_predicate(other, Interval::touches)
	}

	/// [`MultiInterval::union_merge_on_predicate()`] with
	/// [`Interval::intersects()`].
	pub fn union_merge_intersecting(
		&self,
		other: impl AsRef<[Interval]>,
	) -> MultiInterval {
		self.union_merge_on_predicate(other, Interval::intersects)
	}

	/// [`MultiInterval::union_merge_on_predicate()`] with
	/// [`Interval::intersects_or_touches()`].
	pub fn union_merge_intersecting_or_touching(
		&self,
		other: impl AsRef<[Interval]>,
	) -> MultiInterval {
		self.union_merge_on_predicate(other, Interval::intersects_or_touches)
	}

	/// Merges every pair of touching members by their hull until no
	/// members touch.
	pub fn merge_touching(&self) -> MultiInterval {
		MultiInterval::empty().union_merge_touching(self)
	}

	/// Merges every pair of intersecting members by their hull until no
	/// members intersect.
	pub fn merge_intersecting(&self) -> MultiInterval {
		MultiInterval::empty().union_merge_intersecting(self)
	}

	/// Merges every pair of intersecting or touching members by their
	/// hull until no members intersect or touch.
	pub fn merge_intersecting_or_touching(&self) -> MultiInterval {
		MultiInterval::empty().union_merge_intersecting_or_touching(self)
	}

	/// Returns the smallest interval containing every member, or `None`
	/// if there are no members.
	pub fn hull(&self) -> Option<Interval> {
		sweep::hull(&self.intervals)
	}

	/// The least lower bound of any member.
	pub fn lower_bound(&self) -> Option<Bound> {
		self.intervals
			.iter()
			.map(Interval::lower_bound)
			.reduce(Bound::min_bound)
	}

	/// The greatest upper bound of any member.
	pub fn upper_bound(&self) -> Option<Bound> {
		self.intervals
			.iter()
			.map(Interval::upper_bound)
			.reduce(Bound::max_bound)
	}

	/// Returns `true` if any member contains `value`.
	pub fn contains_value(&self, value: f64) -> bool {
		self.intervals
			.iter()
			.any(|interval| interval.contains_value(value))
	}

	/// Returns `true` if every interval of `other` is contained by a
	/// single member of `self`.
	pub fn contains_interval(&self, other: impl AsRef<[Interval]>) -> bool {
		other.as_ref().iter().all(|theirs| {
			self.intervals
				.iter()
				.any(|ours| ours.contains_interval(theirs))
		})
	}

	/// Returns `true` if any member intersects any interval of `other`.
	pub fn intersects(&self, other: impl AsRef<[Interval]>) -> bool {
		let other = other.as_ref();
		self.intervals
			.iter()
			.any(|ours| other.iter().any(|theirs| ours.intersects(theirs)))
	}

	/// Returns `true` if no member intersects any interval of `other` but
	/// at least one pair touches.
	pub fn touches(&self, other: impl AsRef<[Interval]>) -> bool {
		let other = other.as_ref();
		!self.intersects(other)
			&& self
				.intervals
				.iter()
				.any(|ours| other.iter().any(|theirs| ours.touches(theirs)))
	}

	/// Returns `true` if any member is degenerate.
	pub fn has_degenerate(&self) -> bool {
		self.intervals.iter().any(Interval::is_degenerate)
	}

	/// Returns `true` if the members together cover the whole real line.
	pub fn is_complete(&self) -> bool {
		sweep::exterior(&self.intervals).is_empty()
	}

	/// Returns `value` if a member contains it, otherwise the value
	/// nearest to it just inside the nearest member, or `None` if there
	/// are no members.
	///
	/// An open bound is stepped inside by [`CONTAINMENT_NUDGE`].
	///
	/// # Examples
	/// ```
	/// use interval_algebra::tolerance::CONTAINMENT_NUDGE;
	/// use interval_algebra::{Interval, MultiInterval};
	///
	/// let regions = MultiInterval::new([
	/// 	Interval::closed(0.0, 2.0)?,
	/// 	Interval::open(5.0, 8.0)?,
	/// ]);
	///
	/// assert_eq!(regions.nearest_contained_value(1.0), Some(1.0));
	/// assert_eq!(regions.nearest_contained_value(3.0), Some(2.0));
	/// assert_eq!(
	/// 	regions.nearest_contained_value(4.0),
	/// 	Some(5.0 + CONTAINMENT_NUDGE)
	/// );
	/// assert_eq!(MultiInterval::empty().nearest_contained_value(4.0), None);
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn nearest_contained_value(&self, value: f64) -> Option<f64> {
		let mut nearest: Option<(f64, f64)> = None;

		for interval in self.intervals.iter() {
			if interval.contains_value(value) {
				return Some(value);
			}

			let lower = interval.lower_bound();
			let upper = interval.upper_bound();
			let candidate = if value < lower.value()
				|| approx_eq(value, lower.value())
			{
				let nudge = match lower.part_of_left() {
					true => CONTAINMENT_NUDGE,
					false => 0.0,
				};
				((value - lower.value()).abs(), lower.value() + nudge)
			} else {
				let nudge = match upper.part_of_right() {
					true => CONTAINMENT_NUDGE,
					false => 0.0,
				};
				((value - upper.value()).abs(), upper.value() - nudge)
			};

			if nearest.map_or(true, |(distance, _)| candidate.0 < distance) {
				nearest = Some(candidate);
			}
		}

		nearest.map(|(_, value)| value)
	}

	/// Returns the collection with every member scaled by
	/// `scale_factor`, see [`Interval::scaled()`].
	pub fn scaled(&self, scale_factor: f64) -> Result<MultiInterval> {
		self.try_map(|interval| interval.scaled(scale_factor))
	}

	/// Returns the collection with every member translated by
	/// `translation`, see [`Interval::translated()`].
	pub fn translated(&self, translation: f64) -> Result<MultiInterval> {
		self.try_map(|interval| interval.translated(translation))
	}

	/// See [`Interval::scaled_then_translated()`].
	pub fn scaled_then_translated(
		&self,
		scale_factor: f64,
		translation: f64,
	) -> Result<MultiInterval> {
		self.try_map(|interval| {
			interval.scaled_then_translated(scale_factor, translation)
		})
	}

	/// See [`Interval::translated_then_scaled()`].
	pub fn translated_then_scaled(
		&self,
		translation: f64,
		scale_factor: f64,
	) -> Result<MultiInterval> {
		self.try_map(|interval| {
			interval.translated_then_scaled(translation, scale_factor)
		})
	}

	fn try_map<F>(&self, f: F) -> Result<MultiInterval>
	where
		F: FnMut(&Interval) -> Result<Interval>,
	{
		Ok(MultiInterval::new(
			self.intervals.iter().map(f).collect::<Result<Vec<_>>>()?,
		))
	}
}

impl PartialEq for MultiInterval {
	fn eq(&self, other: &Self) -> bool {
		if self.len() != other.len() {
			return false;
		}

		let mut unmatched: Vec<&Interval> = other.intervals.iter().collect();
		self.intervals.iter().all(|ours| {
			match unmatched.iter().position(|theirs| *theirs == ours) {
				Some(index) => {
					unmatched.swap_remove(index);
					true
				}
				None => false,
			}
		})
	}
}

impl AsRef<[Interval]> for MultiInterval {
	fn as_ref(&self) -> &[Interval] {
		&self.intervals
	}
}

impl FromIterator<Interval> for MultiInterval {
	fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
		MultiInterval::new(iter)
	}
}

impl From<Vec<Interval>> for MultiInterval {
	fn from(intervals: Vec<Interval>) -> Self {
		MultiInterval::new(intervals)
	}
}

impl From<Interval> for MultiInterval {
	fn from(interval: Interval) -> Self {
		MultiInterval {
			intervals: vec![interval],
		}
	}
}

impl From<MultiInterval> for Vec<Interval> {
	fn from(multi_interval: MultiInterval) -> Self {
		multi_interval.intervals
	}
}

impl IntoIterator for MultiInterval {
	type Item = Interval;
	type IntoIter = std::vec::IntoIter<Interval>;

	fn into_iter(self) -> Self::IntoIter {
		self.intervals.into_iter()
	}
}

impl<'a> IntoIterator for &'a MultiInterval {
	type Item = &'a Interval;
	type IntoIter = core::slice::Iter<'a, Interval>;

	fn into_iter(self) -> Self::IntoIter {
		self.intervals.iter()
	}
}

impl fmt::Display for MultiInterval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{")?;
		for (index, interval) in self.intervals.iter().enumerate() {
			if index > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{interval}")?;
		}
		write!(f, "}}")
	}
}
