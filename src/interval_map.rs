//! A module containing [`IntervalMap`] and [`IntervalMultiMap`], the
//! piecewise-affine correspondences between two interval-indexed
//! coordinate spaces.

use core::fmt;
use std::sync::OnceLock;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::error::{IntervalError, Result};
use crate::interval::Interval;
use crate::multi_interval::MultiInterval;

/// A link between an interval in one coordinate space (`from`) and an
/// interval in another (`to`).
///
/// Values are carried across by the affine transform stretching `from`
/// onto `to`:
///
/// ```text
/// to_value = (from_value - from.lower) * (to.length / from.length) + to.lower
/// ```
///
/// A degenerate `from` has no defined scale factor. Any interval
/// containing its single value is carried onto the whole of `to`, and
/// the value itself onto the lower value of `to`.
///
/// # Examples
/// ```
/// use interval_algebra::{Interval, IntervalMap};
///
/// let link = IntervalMap::closed_open(0.0, 10.0, 100.0, 200.0)?;
///
/// assert_eq!(link.map_value(2.5), Some(125.0));
/// assert_eq!(link.map_value(10.0), None);
/// assert_eq!(
/// 	link.map_interval(&Interval::closed(5.0, 15.0)?)?,
/// 	Some(Interval::closed_open(150.0, 200.0)?)
/// );
/// # Ok::<(), interval_algebra::IntervalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(Serialize, Deserialize),
	serde(try_from = "RawIntervalMap")
)]
pub struct IntervalMap {
	from: Interval,
	to: Interval,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "IntervalMap")]
struct RawIntervalMap {
	from: Interval,
	to: Interval,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIntervalMap> for IntervalMap {
	type Error = IntervalError;

	fn try_from(raw: RawIntervalMap) -> Result<Self> {
		IntervalMap::new(raw.from, raw.to)
	}
}

impl IntervalMap {
	/// Makes a new link from `from` onto `to`.
	///
	/// Returns an error if either side has an infinite bound, or a length
	/// too large to represent, since the scale factor between the sides
	/// would then be meaningless.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Interval, IntervalError, IntervalMap};
	///
	/// assert!(IntervalMap::new(
	/// 	Interval::closed(0.0, 1.0)?,
	/// 	Interval::closed(5.0, 6.0)?
	/// )
	/// .is_ok());
	/// assert_eq!(
	/// 	IntervalMap::new(Interval::closed(0.0, 1.0)?, Interval::closed_inf(5.0)?),
	/// 	Err(IntervalError::UnboundedLink {
	/// 		lower: 5.0,
	/// 		upper: f64::INFINITY
	/// 	})
	/// );
	/// # Ok::<(), IntervalError>(())
	/// ```
	pub fn new(from: Interval, to: Interval) -> Result<Self> {
		for side in [from, to] {
			if !side.length().is_finite() {
				return Err(IntervalError::UnboundedLink {
					lower: side.lower_bound().value(),
					upper: side.upper_bound().value(),
				});
			}
		}

		Ok(IntervalMap { from, to })
	}

	/// Makes a link from `[a, b)` onto `[x, y)`, where either side
	/// collapses to a degenerate interval if its two values are equal.
	pub fn closed_open(a: f64, b: f64, x: f64, y: f64) -> Result<Self> {
		let side = |lower: f64, upper: f64| match lower == upper {
			true => Interval::degenerate(lower),
			false => Interval::closed_open(lower, upper),
		};

		IntervalMap::new(side(a, b)?, side(x, y)?)
	}

	/// The interval values are mapped from.
	pub fn from_interval(&self) -> Interval {
		self.from
	}

	/// The interval values are mapped onto.
	pub fn to_interval(&self) -> Interval {
		self.to
	}

	/// Returns the same link pointing the other way.
	pub fn reversed(&self) -> IntervalMap {
		IntervalMap {
			from: self.to,
			to: self.from,
		}
	}

	/// Carries `value` across the link.
	///
	/// Returns `None` if `from` does not contain `value`, or if the
	/// result lands outside `to`. A degenerate `from` maps onto the lower
	/// value of `to`. The result is always finite.
	pub fn map_value(&self, value: f64) -> Option<f64> {
		if !self.from.contains_value(value) {
			return None;
		}

		let result = match self.from.is_degenerate() {
			true => self.to.lower_bound().value(),
			false => {
				let scale_factor = self.to.length() / self.from.length();
				(value - self.from.lower_bound().value()) * scale_factor
					+ self.to.lower_bound().value()
			}
		};

		self.to.contains_value(result).then_some(result)
	}

	/// Carries the part of `interval` inside `from` across the link.
	///
	/// The transformed interval is clipped to `to` again since scaling
	/// can push a bound just past `to` at a tolerance boundary. Returns
	/// `Ok(None)` if nothing of `interval` lands inside `to`, and an
	/// error if an infinite bound cannot be carried across.
	pub fn map_interval(&self, interval: &Interval) -> Result<Option<Interval>> {
		let Some(clipped) = self.from.intersect(interval) else {
			return Ok(None);
		};
		if self.from.is_degenerate() || self.to.is_degenerate() {
			return Ok(Some(self.to));
		}

		let scale_factor = self.to.length() / self.from.length();
		let translation = -self.from.lower_bound().value();
		let carry = |bound: Bound| {
			bound
				.translated_then_scaled(translation, scale_factor)?
				.translated(self.to.lower_bound().value())
		};

		let lower = carry(clipped.lower_bound())?;
		let upper = carry(clipped.upper_bound())?;

		Ok(Interval::span(lower, upper).and_then(|mapped| self.to.intersect(&mapped)))
	}

	/// Returns `true` if both sides of `other` are inside the matching
	/// sides of `self`.
	pub fn contains(&self, other: &IntervalMap) -> bool {
		self.from.contains_interval(&other.from)
			&& self.to.contains_interval(&other.to)
	}

	/// Returns `true` if both sides touch the matching sides of `other`.
	pub fn touches(&self, other: &IntervalMap) -> bool {
		self.from.touches(&other.from) && self.to.touches(&other.to)
	}

	/// Returns `true` if both sides intersect the matching sides of
	/// `other`.
	pub fn intersects(&self, other: &IntervalMap) -> bool {
		self.from.intersects(&other.from) && self.to.intersects(&other.to)
	}

	/// Returns the link between the hulls of the matching sides.
	pub fn merge_by_hull(&self, other: &IntervalMap) -> IntervalMap {
		IntervalMap {
			from: self.from.hull(&other.from),
			to: self.to.hull(&other.to),
		}
	}
}

impl fmt::Display for IntervalMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Map({} to {})", self.from, self.to)
	}
}

/// An immutable collection of [`IntervalMap`] links, applied together.
///
/// Links may overlap on either side, so a single value can map to zero,
/// one or many values.
///
/// The reversed map is built the first time [`IntervalMultiMap::reverse()`]
/// is called and then kept, which is safe to share between threads.
///
/// # Examples
/// ```
/// use interval_algebra::{
/// 	Interval, IntervalMap, IntervalMultiMap, MultiInterval, Region,
/// };
///
/// let map = IntervalMultiMap::new([
/// 	IntervalMap::closed_open(0.0, 10.0, 100.0, 200.0)?,
/// 	IntervalMap::closed_open(5.0, 15.0, 500.0, 600.0)?,
/// ]);
///
/// assert_eq!(map.map_value(7.0), [170.0, 520.0]);
/// assert_eq!(map.reverse().map_value(150.0), [5.0]);
/// let mapped = map.map_intervals(Interval::closed(12.0, 20.0)?)?;
/// assert_eq!(
/// 	mapped,
/// 	MultiInterval::new([Interval::closed_open(570.0, 600.0)?])
/// );
/// assert_eq!(
/// 	mapped.simplify(),
/// 	Region::Interval(Interval::closed_open(570.0, 600.0)?)
/// );
/// # Ok::<(), interval_algebra::IntervalError>(())
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalMultiMap {
	links: Vec<IntervalMap>,
	#[cfg_attr(feature = "serde", serde(skip))]
	reversed: OnceLock<Box<IntervalMultiMap>>,
}

impl IntervalMultiMap {
	/// Makes a new map from its links.
	pub fn new(links: impl IntoIterator<Item = IntervalMap>) -> Self {
		IntervalMultiMap {
			links: links.into_iter().collect(),
			reversed: OnceLock::new(),
		}
	}

	/// The links, in the order they were added.
	pub fn links(&self) -> &[IntervalMap] {
		&self.links
	}

	/// The `from` sides of every link.
	pub fn from_region(&self) -> MultiInterval {
		MultiInterval::new(self.links.iter().map(IntervalMap::from_interval))
	}

	/// The `to` sides of every link.
	pub fn to_region(&self) -> MultiInterval {
		MultiInterval::new(self.links.iter().map(IntervalMap::to_interval))
	}

	/// Returns the map with every link pointing the other way.
	pub fn reverse(&self) -> &IntervalMultiMap {
		self.reversed.get_or_init(|| {
			Box::new(IntervalMultiMap::new(
				self.links.iter().map(IntervalMap::reversed),
			))
		})
	}

	/// Carries `value` across every link, see
	/// [`IntervalMap::map_value()`].
	pub fn map_value(&self, value: f64) -> Vec<f64> {
		self.links
			.iter()
			.filter_map(|link| link.map_value(value))
			.collect()
	}

	/// Like [`IntervalMultiMap::map_value()`], but first moves `value`
	/// inside the nearest `from` interval and returns only the first
	/// result.
	pub fn map_value_nearest(&self, value: f64) -> Option<f64> {
		let nearest = self.from_region().nearest_contained_value(value)?;
		self.map_value(nearest).first().copied()
	}

	/// Carries every interval of `intervals` across every link, see
	/// [`IntervalMap::map_interval()`].
	///
	/// The result is always a [`MultiInterval`], even when a single piece
	/// was mapped; call [`MultiInterval::simplify()`] to collapse it.
	pub fn map_intervals(
		&self,
		intervals: impl AsRef<[Interval]>,
	) -> Result<MultiInterval> {
		let mut mapped = Vec::new();
		for interval in intervals.as_ref() {
			for link in self.links.iter() {
				mapped.extend(link.map_interval(interval)?);
			}
		}

		Ok(MultiInterval::new(mapped))
	}

	/// Always fails: build the reversed map with
	/// [`IntervalMultiMap::reverse()`] and map forwards through it.
	pub fn unmap_value(&self, _value: f64) -> Result<Vec<f64>> {
		Err(IntervalError::Unimplemented("unmap_value"))
	}

	/// Always fails: build the reversed map with
	/// [`IntervalMultiMap::reverse()`] and map forwards through it.
	pub fn unmap_intervals(
		&self,
		_intervals: impl AsRef<[Interval]>,
	) -> Result<MultiInterval> {
		Err(IntervalError::Unimplemented("unmap_intervals"))
	}

	/// A predicate for [`IntervalMultiMap::merge_on_predicates()`] that
	/// accepts every pair.
	pub fn always(_: &Interval, _: &Interval) -> bool {
		true
	}

	/// A predicate for [`IntervalMultiMap::merge_on_predicates()`] that
	/// accepts touching pairs, see [`Interval::touches()`].
	pub fn touching(a: &Interval, b: &Interval) -> bool {
		a.touches(b)
	}

	/// A predicate for [`IntervalMultiMap::merge_on_predicates()`] that
	/// accepts intersecting pairs, see [`Interval::intersects()`].
	pub fn intersecting(a: &Interval, b: &Interval) -> bool {
		a.intersects(b)
	}

	/// A predicate for [`IntervalMultiMap::merge_on_predicates()`] that
	/// accepts touching or intersecting pairs.
	pub fn touching_or_intersecting(a: &Interval, b: &Interval) -> bool {
		a.intersects_or_touches(b)
	}

	/// Merges pairs of links by [`IntervalMap::merge_by_hull()`] wherever
	/// `from_predicate` accepts their `from` sides and `to_predicate`
	/// accepts their `to` sides.
	///
	/// Every pair is tested and the scan restarts after each merge, so
	/// this is at least `O(N²)`. When links may contain each other
	/// consider building the map up with
	/// [`IntervalMultiMap::add_merge_if_contained_or_touching()`] instead.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{IntervalMap, IntervalMultiMap};
	///
	/// let map = IntervalMultiMap::new([
	/// 	IntervalMap::closed_open(0.0, 10.0, 100.0, 110.0)?,
	/// 	IntervalMap::closed_open(10.0, 20.0, 110.0, 120.0)?,
	/// ]);
	///
	/// assert_eq!(
	/// 	map.merge_on_predicates(
	/// 		IntervalMultiMap::touching,
	/// 		IntervalMultiMap::touching
	/// 	)
	/// 	.links(),
	/// 	[IntervalMap::closed_open(0.0, 20.0, 100.0, 120.0)?]
	/// );
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn merge_on_predicates<F, T>(
		&self,
		mut from_predicate: F,
		mut to_predicate: T,
	) -> IntervalMultiMap
	where
		F: FnMut(&Interval, &Interval) -> bool,
		T: FnMut(&Interval, &Interval) -> bool,
	{
		let mut result = self.links.clone();

		'restart: loop {
			for (i, j) in (0..result.len()).tuple_combinations() {
				let (a, b) = (result[i], result[j]);
				if from_predicate(&a.from, &b.from) && to_predicate(&a.to, &b.to) {
					log::trace!("merging links {a} and {b}");
					result.remove(j);
					result.remove(i);
					result.push(a.merge_by_hull(&b));
					continue 'restart;
				}
			}
			break;
		}

		IntervalMultiMap::new(result)
	}

	/// Returns a new map with `link` added.
	///
	/// - If an existing link contains `link` nothing changes.
	/// - Any existing link contained by `link` is removed.
	/// - If an existing link touches `link` on both sides the two are
	/// merged by hull and the checks start over with the merged link.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{IntervalMap, IntervalMultiMap};
	///
	/// let map = IntervalMultiMap::new([IntervalMap::closed_open(
	/// 	0.0, 10.0, 100.0, 110.0,
	/// )?])
	/// .add_merge_if_contained_or_touching(IntervalMap::closed_open(
	/// 	10.0, 20.0, 110.0, 120.0,
	/// )?);
	///
	/// assert_eq!(
	/// 	map.links(),
	/// 	[IntervalMap::closed_open(0.0, 20.0, 100.0, 120.0)?]
	/// );
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn add_merge_if_contained_or_touching(
		&self,
		link: IntervalMap,
	) -> IntervalMultiMap {
		let mut result = self.links.clone();
		let mut candidate = Some(link);

		'restart: while let Some(adding) = candidate {
			for index in 0..result.len() {
				let existing = result[index];

				if existing.contains(&adding) {
					candidate = None;
					continue 'restart;
				}
				if adding.contains(&existing) {
					result.remove(index);
					continue 'restart;
				}
				if existing.touches(&adding) {
					log::trace!("merging link {existing} into {adding}");
					candidate = Some(adding.merge_by_hull(&existing));
					result.remove(index);
					continue 'restart;
				}
			}
			break;
		}

		result.extend(candidate);
		IntervalMultiMap::new(result)
	}
}

impl PartialEq for IntervalMultiMap {
	fn eq(&self, other: &Self) -> bool {
		self.links == other.links
	}
}
