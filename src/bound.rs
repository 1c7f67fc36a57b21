//! A module containing [`Bound`] and [`Direction`].

use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IntervalError, Result};
use crate::tolerance::approx_eq;

/// Which side of a [`Bound`]'s value the bound's value itself belongs
/// to.
///
/// Used as an upper bound, [`Direction::Left`] is closed and
/// [`Direction::Right`] is open. Used as a lower bound it is the other
/// way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
	/// The value is part of the interval to the left of the bound.
	Left,
	/// The value is part of the interval to the right of the bound.
	Right,
}

impl Direction {
	/// Returns the opposite direction.
	pub fn inverted(self) -> Self {
		match self {
			Direction::Left => Direction::Right,
			Direction::Right => Direction::Left,
		}
	}

	/// `Right` sorts before `Left` when two bounds share a value.
	pub(crate) fn sort_rank(self) -> u8 {
		match self {
			Direction::Right => 0,
			Direction::Left => 1,
		}
	}
}

/// An immutable point on the real line together with the [`Direction`]
/// its value belongs to.
///
/// Equality and ordering use the tolerance policy in
/// [`tolerance`](crate::tolerance). Two bounds with approximately equal
/// values are ordered by direction, [`Direction::Right`] first, so that a
/// closed lower bound sorts before an open one and an open upper bound
/// sorts before a closed one.
///
/// # Examples
/// ```
/// use interval_algebra::{Bound, Direction};
///
/// let closed_lower = Bound::new(1.0, Direction::Right)?;
/// let open_lower = Bound::new(1.0, Direction::Left)?;
///
/// assert!(closed_lower < open_lower);
/// assert_eq!(closed_lower.inverted(), open_lower);
///
/// assert!(Bound::new(f64::NEG_INFINITY, Direction::Left).is_err());
/// # Ok::<(), interval_algebra::IntervalError>(())
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
	feature = "serde",
	derive(Serialize, Deserialize),
	serde(try_from = "RawBound")
)]
pub struct Bound {
	value: f64,
	direction: Direction,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Bound")]
struct RawBound {
	value: f64,
	direction: Direction,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBound> for Bound {
	type Error = IntervalError;

	fn try_from(raw: RawBound) -> Result<Self> {
		Bound::new(raw.value, raw.direction)
	}
}

impl Bound {
	/// The bound at negative infinity, which is always part of the right.
	pub const NEG_INFINITY: Bound = Bound {
		value: f64::NEG_INFINITY,
		direction: Direction::Right,
	};

	/// The bound at positive infinity, which is always part of the left.
	pub const POS_INFINITY: Bound = Bound {
		value: f64::INFINITY,
		direction: Direction::Left,
	};

	/// Makes a new bound.
	///
	/// Returns an error if `value` is NaN, or if it is infinite and
	/// `direction` points away from the finite numbers.
	pub fn new(value: f64, direction: Direction) -> Result<Self> {
		if value.is_nan() {
			return Err(IntervalError::NotANumber);
		}
		match (value == f64::NEG_INFINITY, value == f64::INFINITY, direction)
		{
			(true, _, Direction::Left) | (_, true, Direction::Right) => {
				Err(IntervalError::InfiniteDirection { value })
			}
			_ => Ok(Bound { value, direction }),
		}
	}

	/// The value of the bound.
	pub fn value(&self) -> f64 {
		self.value
	}

	/// The direction of the bound.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Returns `true` if the value is part of the interval to the left.
	pub fn part_of_left(&self) -> bool {
		self.direction == Direction::Left
	}

	/// Returns `true` if the value is part of the interval to the right.
	pub fn part_of_right(&self) -> bool {
		self.direction == Direction::Right
	}

	/// Returns `true` if the value is infinite.
	pub fn is_infinite(&self) -> bool {
		self.value.is_infinite()
	}

	/// Returns a bound at the same value with the opposite direction.
	///
	/// The infinite sentinels have no valid inversion and are returned
	/// unchanged.
	pub fn inverted(&self) -> Bound {
		if self.is_infinite() {
			return *self;
		}
		Bound {
			value: self.value,
			direction: self.direction.inverted(),
		}
	}

	/// Returns a bound with its value multiplied by `scale_factor`.
	pub fn scaled(&self, scale_factor: f64) -> Result<Bound> {
		Bound::new(self.value * scale_factor, self.direction)
	}

	/// Returns a bound with `translation` added to its value.
	pub fn translated(&self, translation: f64) -> Result<Bound> {
		Bound::new(self.value + translation, self.direction)
	}

	/// Returns a bound with its value multiplied by `scale_factor` and
	/// then offset by `translation`.
	pub fn scaled_then_translated(
		&self,
		scale_factor: f64,
		translation: f64,
	) -> Result<Bound> {
		Bound::new(self.value * scale_factor + translation, self.direction)
	}

	/// Returns a bound with its value offset by `translation` and then
	/// multiplied by `scale_factor`.
	pub fn translated_then_scaled(
		&self,
		translation: f64,
		scale_factor: f64,
	) -> Result<Bound> {
		Bound::new((self.value + translation) * scale_factor, self.direction)
	}

	/// Compares two bounds, treating approximately equal values as equal
	/// and then ordering by direction.
	pub fn cmp_bound(&self, other: &Bound) -> Ordering {
		if approx_eq(self.value, other.value) {
			self.direction
				.sort_rank()
				.cmp(&other.direction.sort_rank())
		} else {
			self.value.total_cmp(&other.value)
		}
	}

	/// Returns the lesser of two bounds, preferring `self` on ties.
	pub fn min_bound(self, other: Bound) -> Bound {
		match other.cmp_bound(&self) {
			Ordering::Less => other,
			_ => self,
		}
	}

	/// Returns the greater of two bounds, preferring `self` on ties.
	pub fn max_bound(self, other: Bound) -> Bound {
		match other.cmp_bound(&self) {
			Ordering::Greater => other,
			_ => self,
		}
	}
}

impl PartialEq for Bound {
	fn eq(&self, other: &Self) -> bool {
		approx_eq(self.value, other.value) && self.direction == other.direction
	}
}

impl PartialOrd for Bound {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp_bound(other))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn l(value: f64) -> Bound {
		Bound::new(value, Direction::Left).unwrap()
	}
	fn r(value: f64) -> Bound {
		Bound::new(value, Direction::Right).unwrap()
	}

	#[test]
	fn new_tests() {
		assert_eq!(
			Bound::new(f64::NEG_INFINITY, Direction::Left),
			Err(IntervalError::InfiniteDirection {
				value: f64::NEG_INFINITY
			})
		);
		assert_eq!(
			Bound::new(f64::INFINITY, Direction::Right),
			Err(IntervalError::InfiniteDirection {
				value: f64::INFINITY
			})
		);
		assert_eq!(
			Bound::new(f64::NAN, Direction::Right),
			Err(IntervalError::NotANumber)
		);
		assert_eq!(
			Bound::new(f64::NEG_INFINITY, Direction::Right),
			Ok(Bound::NEG_INFINITY)
		);
		assert_eq!(
			Bound::new(f64::INFINITY, Direction::Left),
			Ok(Bound::POS_INFINITY)
		);
	}

	#[test]
	fn mass_bound_partial_ord_test() {
		assert!(l(2.0) == l(2.0));
		assert!(l(2.0) != r(2.0));
		assert!(l(2.0) == l(2.0 + 1e-12));

		assert!(r(2.0) < l(2.0));
		assert!(l(2.0) > r(2.0));
		assert!(r(2.0) < l(2.0 + 1e-12));
		assert!(l(2.0 - 1e-12) > r(2.0));

		assert!(l(0.0) < r(2.0));
		assert!(r(0.0) < l(2.0));
		assert!(l(2.0) > r(0.0));

		assert!(Bound::NEG_INFINITY < r(-1e300));
		assert!(Bound::NEG_INFINITY < l(0.0));
		assert!(Bound::POS_INFINITY > l(1e300));
		assert!(Bound::NEG_INFINITY < Bound::POS_INFINITY);

		assert!(l(2.0) <= l(2.0));
		assert!(l(2.0) >= l(2.0));
	}

	#[test]
	fn min_max_bound_tests() {
		assert_eq!(r(1.0).min_bound(l(1.0)), r(1.0));
		assert_eq!(l(1.0).min_bound(r(1.0)), r(1.0));
		assert_eq!(r(1.0).max_bound(l(1.0)), l(1.0));
		assert_eq!(l(3.0).max_bound(r(1.0)), l(3.0));
		assert_eq!(l(3.0).min_bound(r(1.0)), r(1.0));
	}

	#[test]
	fn inverted_tests() {
		assert_eq!(l(4.0).inverted(), r(4.0));
		assert_eq!(r(4.0).inverted(), l(4.0));
		assert_eq!(Bound::NEG_INFINITY.inverted(), Bound::NEG_INFINITY);
		assert_eq!(Bound::POS_INFINITY.inverted(), Bound::POS_INFINITY);
	}

	#[test]
	fn affine_tests() {
		assert_eq!(l(4.0).scaled(2.0), Ok(l(8.0)));
		assert_eq!(r(4.0).translated(-1.0), Ok(r(3.0)));
		assert_eq!(l(4.0).scaled_then_translated(2.0, 1.0), Ok(l(9.0)));
		assert_eq!(l(4.0).translated_then_scaled(1.0, 2.0), Ok(l(10.0)));

		assert_eq!(Bound::POS_INFINITY.scaled(2.0), Ok(Bound::POS_INFINITY));
		assert_eq!(
			Bound::POS_INFINITY.scaled(-1.0),
			Err(IntervalError::InfiniteDirection {
				value: f64::NEG_INFINITY
			})
		);
		assert_eq!(
			Bound::POS_INFINITY.scaled(0.0),
			Err(IntervalError::NotANumber)
		);
	}
}
