//! A module containing [`Region`].
//!
//! Since [`Region`] is just a tagged wrapper around an [`Interval`] or a
//! [`MultiInterval`], most of the methods' docs will point towards the
//! equivalent method's docs on [`MultiInterval`] to prevent
//! inconsistency.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::interval::Interval;
use crate::multi_interval::MultiInterval;

/// Either a single [`Interval`] or a [`MultiInterval`].
///
/// This is what [`MultiInterval::simplify()`] produces. A `Region::Interval` is never
/// equal to a `Region::Multi`, even if the multi-interval has a single
/// equal member; call [`Region::simplify()`] on both sides first to
/// compare them that way.
///
/// # Examples
/// ```
/// use interval_algebra::{Interval, MultiInterval, Region};
///
/// let single = Region::from(Interval::closed(0.0, 1.0)?);
/// let multi = Region::from(MultiInterval::new([Interval::closed(0.0, 1.0)?]));
///
/// assert_ne!(single, multi);
/// assert_eq!(single, multi.simplify());
/// # Ok::<(), interval_algebra::IntervalError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
	/// A single interval.
	Interval(Interval),
	/// Any number of intervals.
	Multi(MultiInterval),
}

impl Region {
	/// The intervals making up the region.
	pub fn intervals(&self) -> &[Interval] {
		self.as_ref()
	}

	/// Returns `true` if the region holds no intervals.
	pub fn is_empty(&self) -> bool {
		self.intervals().is_empty()
	}

	/// Collapses a single-member [`Region::Multi`] into a
	/// [`Region::Interval`].
	pub fn simplify(self) -> Region {
		match self {
			Region::Interval(interval) => Region::Interval(interval),
			Region::Multi(multi_interval) => multi_interval.simplify(),
		}
	}

	/// Converts the region into a [`MultiInterval`].
	pub fn into_multi(self) -> MultiInterval {
		match self {
			Region::Interval(interval) => MultiInterval::from(interval),
			Region::Multi(multi_interval) => multi_interval,
		}
	}

	fn with_multi<T>(&self, f: impl FnOnce(&MultiInterval) -> T) -> T {
		match self {
			Region::Interval(interval) => f(&MultiInterval::from(*interval)),
			Region::Multi(multi_interval) => f(multi_interval),
		}
	}

	/// See [`MultiInterval::exterior()`] for more details.
	pub fn exterior(&self) -> MultiInterval {
		match self {
			Region::Interval(interval) => interval.exterior(),
			Region::Multi(multi_interval) => multi_interval.exterior(),
		}
	}
	/// See [`MultiInterval::interior()`] for more details.
	pub fn interior(&self) -> MultiInterval {
		self.with_multi(|multi_interval| multi_interval.interior())
	}
	/// See [`MultiInterval::interior_merged()`] for more details.
	pub fn interior_merged(&self) -> MultiInterval {
		self.with_multi(|multi_interval| multi_interval.interior_merged())
	}
	/// See [`MultiInterval::subtract()`] for more details.
	pub fn subtract(&self, operand: impl AsRef<[Interval]>) -> MultiInterval {
		self.with_multi(|multi_interval| multi_interval.subtract(operand))
	}
	/// See [`MultiInterval::intersect()`] for more details.
	pub fn intersect(&self, operand: impl AsRef<[Interval]>) -> MultiInterval {
		self.with_multi(|multi_interval| multi_interval.intersect(operand))
	}
	/// See [`MultiInterval::hull()`] for more details.
	pub fn hull(&self) -> Option<Interval> {
		match self {
			Region::Interval(interval) => Some(*interval),
			Region::Multi(multi_interval) => multi_interval.hull(),
		}
	}
	/// See [`MultiInterval::lower_bound()`] for more details.
	pub fn lower_bound(&self) -> Option<Bound> {
		self.hull().map(|hull| hull.lower_bound())
	}
	/// See [`MultiInterval::upper_bound()`] for more details.
	pub fn upper_bound(&self) -> Option<Bound> {
		self.hull().map(|hull| hull.upper_bound())
	}
	/// See [`MultiInterval::contains_value()`] for more details.
	pub fn contains_value(&self, value: f64) -> bool {
		self.intervals()
			.iter()
			.any(|interval| interval.contains_value(value))
	}
	/// See [`MultiInterval::intersects()`] for more details.
	pub fn intersects(&self, other: impl AsRef<[Interval]>) -> bool {
		self.with_multi(|multi_interval| multi_interval.intersects(other))
	}
	/// See [`MultiInterval::touches()`] for more details.
	pub fn touches(&self, other: impl AsRef<[Interval]>) -> bool {
		self.with_multi(|multi_interval| multi_interval.touches(other))
	}
	/// See [`MultiInterval::nearest_contained_value()`] for more details.
	pub fn nearest_contained_value(&self, value: f64) -> Option<f64> {
		self.with_multi(|multi_interval| multi_interval.nearest_contained_value(value))
	}
}

impl From<Interval> for Region {
	fn from(interval: Interval) -> Self {
		Region::Interval(interval)
	}
}

impl From<MultiInterval> for Region {
	fn from(multi_interval: MultiInterval) -> Self {
		Region::Multi(multi_interval)
	}
}

impl AsRef<[Interval]> for Region {
	fn as_ref(&self) -> &[Interval] {
		match self {
			Region::Interval(interval) => interval.as_ref(),
			Region::Multi(multi_interval) => multi_interval.as_ref(),
		}
	}
}

impl fmt::Display for Region {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Region::Interval(interval) => write!(f, "{interval}"),
			Region::Multi(multi_interval) => write!(f, "{multi_interval}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_intervals::{dd, ee, ei, eu, ie, ii, ue, uu};

	#[test]
	fn equality_tests() {
		let single = Region::from(ii(0.0, 1.0));
		let multi = Region::from(MultiInterval::new([ii(0.0, 1.0)]));

		assert!(single != multi);
		assert_eq!(single, multi.clone().simplify());
		assert_eq!(single.clone().simplify(), single);
		assert_eq!(multi.into_multi(), MultiInterval::from(ii(0.0, 1.0)));
	}

	#[test]
	fn delegation_tests() {
		let single = Region::from(ii(0.0, 10.0));
		let multi = Region::from(MultiInterval::new([ii(0.0, 4.0), ii(2.0, 10.0)]));

		assert_eq!(single.exterior(), multi.exterior());
		assert_eq!(single.exterior(), MultiInterval::new([ue(0.0), eu(10.0)]));
		assert_eq!(single.interior_merged(), multi.interior_merged());
		assert_eq!(single.hull(), multi.hull());
		assert_eq!(single.lower_bound(), multi.lower_bound());
		assert_eq!(single.upper_bound(), multi.upper_bound());
		assert_eq!(
			multi.subtract(dd(5.0)),
			MultiInterval::new([ie(0.0, 5.0), ei(5.0, 10.0)])
		);
		assert_eq!(
			single.intersect(&multi),
			MultiInterval::new([ii(0.0, 10.0)])
		);
		assert!(single.contains_value(10.0));
		assert!(!single.intersects(ee(10.0, 12.0)));
		assert!(single.touches(ee(10.0, 12.0)));
		assert_eq!(single.nearest_contained_value(12.0), Some(10.0));
		assert_eq!(Region::from(MultiInterval::empty()).hull(), None);
		assert!(Region::from(MultiInterval::empty()).is_empty());
		assert_eq!(Region::from(uu()).intervals(), [uu()]);

		assert_eq!(
			multi.interior(),
			MultiInterval::new([ie(0.0, 2.0), ii(2.0, 4.0), ei(4.0, 10.0)])
		);
		assert_eq!(single.interior(), MultiInterval::new([ii(0.0, 10.0)]));
		assert!(multi.intersects(ee(9.0, 12.0)));
		assert!(!multi.intersects(ee(10.0, 12.0)));
		assert!(multi.touches(ee(10.0, 12.0)));
		assert_eq!(multi.nearest_contained_value(-3.0), Some(0.0));
		assert_eq!(multi.nearest_contained_value(3.0), Some(3.0));
	}

	#[test]
	fn display_tests() {
		assert_eq!(Region::from(ie(0.0, 5.0)).to_string(), "[0, 5)");
		assert_eq!(
			Region::from(MultiInterval::new([ie(0.0, 5.0)])).to_string(),
			"{[0, 5)}"
		);
	}
}
