//! A module containing [`Interval`] and its constructor functions.

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::bound::{Bound, Direction};
use crate::error::{IntervalError, Result};
use crate::multi_interval::MultiInterval;
use crate::tolerance::approx_eq;

/// An immutable atomic region of the real line between two [`Bound`]s.
///
/// Every `Interval` upholds these invariants, checked by
/// [`Interval::new()`]:
///
/// - the lower bound value is not greater than the upper bound value
/// - if the two values are exactly equal both bounds are closed, making
///   the interval *degenerate* (a single point)
/// - the two values are never different but within tolerance of each
///   other (an *infinitesimal* interval)
///
/// # Examples
/// ```
/// use interval_algebra::Interval;
///
/// let a = Interval::closed(0.0, 10.0)?;
/// let b = Interval::closed(5.0, 15.0)?;
///
/// assert!(a.intersects(&b));
/// assert_eq!(a.intersect(&b), Some(Interval::closed(5.0, 10.0)?));
/// assert_eq!(a.subtract(&b).as_slice(), [Interval::closed_open(0.0, 5.0)?]);
/// assert_eq!(a.hull(&b), Interval::closed(0.0, 15.0)?);
/// # Ok::<(), interval_algebra::IntervalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(Serialize, Deserialize),
	serde(try_from = "RawInterval")
)]
pub struct Interval {
	lower: Bound,
	upper: Bound,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Interval")]
struct RawInterval {
	lower: Bound,
	upper: Bound,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInterval> for Interval {
	type Error = IntervalError;

	fn try_from(raw: RawInterval) -> Result<Self> {
		Interval::new(raw.lower, raw.upper)
	}
}

impl Interval {
	/// Makes a new interval, checking its invariants.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Bound, Direction, Interval, IntervalError};
	///
	/// let one = Bound::new(1.0, Direction::Right)?;
	/// let two = Bound::new(2.0, Direction::Left)?;
	///
	/// assert!(Interval::new(one, two).is_ok());
	/// assert_eq!(
	/// 	Interval::new(two, one),
	/// 	Err(IntervalError::Reversed { lower: 2.0, upper: 1.0 })
	/// );
	/// # Ok::<(), IntervalError>(())
	/// ```
	pub fn new(lower: Bound, upper: Bound) -> Result<Self> {
		if lower.value() == upper.value() {
			if !(lower.part_of_right() && upper.part_of_left()) {
				return Err(IntervalError::DegenerateNotClosed {
					value: lower.value(),
				});
			}
		} else if approx_eq(lower.value(), upper.value()) {
			return Err(IntervalError::Infinitesimal {
				lower: lower.value(),
				upper: upper.value(),
			});
		} else if lower.value() > upper.value() {
			return Err(IntervalError::Reversed {
				lower: lower.value(),
				upper: upper.value(),
			});
		}

		Ok(Interval { lower, upper })
	}

	/// Builds the interval between two bounds if it contains at least one
	/// point, snapping approximately equal closed bounds onto a single
	/// degenerate point.
	///
	/// This is how every operation in the crate materializes its results,
	/// so an empty or infinitesimal candidate is dropped rather than
	/// reported as an error.
	pub(crate) fn span(lower: Bound, upper: Bound) -> Option<Self> {
		if approx_eq(lower.value(), upper.value()) {
			if lower.part_of_right() && upper.part_of_left() {
				let point = Bound::new(lower.value(), Direction::Left).ok()?;
				return Some(Interval {
					lower,
					upper: point,
				});
			}
			return None;
		}
		if lower.value() > upper.value() {
			return None;
		}
		Some(Interval { lower, upper })
	}

	/// The interval spanning the whole real line.
	pub fn complete() -> Self {
		Interval {
			lower: Bound::NEG_INFINITY,
			upper: Bound::POS_INFINITY,
		}
	}

	/// A zero-width interval containing only `value`.
	pub fn degenerate(value: f64) -> Result<Self> {
		Interval::new(
			Bound::new(value, Direction::Right)?,
			Bound::new(value, Direction::Left)?,
		)
	}

	/// An included-included interval.
	pub fn closed(lower: f64, upper: f64) -> Result<Self> {
		Interval::new(
			Bound::new(lower, Direction::Right)?,
			Bound::new(upper, Direction::Left)?,
		)
	}

	/// An excluded-excluded interval.
	pub fn open(lower: f64, upper: f64) -> Result<Self> {
		Interval::new(
			Bound::new(lower, Direction::Left)?,
			Bound::new(upper, Direction::Right)?,
		)
	}

	/// An included-excluded interval.
	pub fn closed_open(lower: f64, upper: f64) -> Result<Self> {
		Interval::new(
			Bound::new(lower, Direction::Right)?,
			Bound::new(upper, Direction::Right)?,
		)
	}

	/// An excluded-included interval.
	pub fn open_closed(lower: f64, upper: f64) -> Result<Self> {
		Interval::new(
			Bound::new(lower, Direction::Left)?,
			Bound::new(upper, Direction::Left)?,
		)
	}

	/// An unbounded-included interval.
	pub fn inf_closed(upper: f64) -> Result<Self> {
		Interval::new(Bound::NEG_INFINITY, Bound::new(upper, Direction::Left)?)
	}

	/// An unbounded-excluded interval.
	pub fn inf_open(upper: f64) -> Result<Self> {
		Interval::new(Bound::NEG_INFINITY, Bound::new(upper, Direction::Right)?)
	}

	/// An included-unbounded interval.
	pub fn closed_inf(lower: f64) -> Result<Self> {
		Interval::new(Bound::new(lower, Direction::Right)?, Bound::POS_INFINITY)
	}

	/// An excluded-unbounded interval.
	pub fn open_inf(lower: f64) -> Result<Self> {
		Interval::new(Bound::new(lower, Direction::Left)?, Bound::POS_INFINITY)
	}

	/// The lower bound.
	pub fn lower_bound(&self) -> Bound {
		self.lower
	}

	/// The upper bound.
	pub fn upper_bound(&self) -> Bound {
		self.upper
	}

	/// The distance between the two bound values.
	pub fn length(&self) -> f64 {
		self.upper.value() - self.lower.value()
	}

	/// Returns the value `ratio` of the way from the lower bound value to
	/// the upper bound value.
	pub fn interpolate(&self, ratio: f64) -> f64 {
		self.lower.value() + self.length() * ratio
	}

	/// Returns `true` if the interval is a single point.
	pub fn is_degenerate(&self) -> bool {
		self.lower.value() == self.upper.value()
	}

	/// Returns `true` if the interval spans the whole real line.
	pub fn is_complete(&self) -> bool {
		self.lower == Bound::NEG_INFINITY && self.upper == Bound::POS_INFINITY
	}

	/// Returns `true` if `value` is strictly inside the interval or
	/// coincides with one of its closed bounds.
	///
	/// The infinities are limits rather than values, so they are never
	/// contained, and neither is NaN.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::Interval;
	///
	/// assert!(Interval::closed(1.0, 2.0)?.contains_value(1.0));
	/// assert!(!Interval::open(1.0, 2.0)?.contains_value(1.0));
	/// assert!(!Interval::closed_open(1.0, 2.0)?.contains_value(2.0));
	/// assert!(Interval::open_closed(1.0, 2.0)?.contains_value(2.0));
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn contains_value(&self, value: f64) -> bool {
		if !value.is_finite() {
			return false;
		}
		if approx_eq(self.lower.value(), value) {
			return self.lower.part_of_right();
		}
		if approx_eq(self.upper.value(), value) {
			return self.upper.part_of_left();
		}
		self.lower.value() < value && value < self.upper.value()
	}

	/// Returns `true` if an interval starting at `bound` would start
	/// inside this interval.
	pub fn contains_lower_bound(&self, bound: &Bound) -> bool {
		if self.is_degenerate() && approx_eq(self.upper.value(), bound.value())
		{
			return bound.part_of_right();
		}
		if approx_eq(self.lower.value(), bound.value()) {
			return !(self.lower.part_of_left() && bound.part_of_right());
		}
		if approx_eq(self.upper.value(), bound.value()) {
			return self.upper.part_of_left() && bound.part_of_right();
		}
		self.lower < *bound && *bound < self.upper
	}

	/// Returns `true` if an interval ending at `bound` would end inside
	/// this interval.
	pub fn contains_upper_bound(&self, bound: &Bound) -> bool {
		if self.is_degenerate() && approx_eq(self.lower.value(), bound.value())
		{
			return bound.part_of_left();
		}
		if approx_eq(self.lower.value(), bound.value()) {
			return self.lower.part_of_right() && bound.part_of_left();
		}
		if approx_eq(self.upper.value(), bound.value()) {
			return !(self.upper.part_of_right() && bound.part_of_left());
		}
		self.lower < *bound && *bound < self.upper
	}

	/// Returns `true` if every point of `other` is inside this interval.
	pub fn contains_interval(&self, other: &Interval) -> bool {
		if self.is_degenerate()
			&& other.is_degenerate()
			&& approx_eq(self.lower.value(), other.lower.value())
		{
			return true;
		}
		self.contains_lower_bound(&other.lower)
			&& self.contains_upper_bound(&other.upper)
	}

	/// Returns `true` if the two intervals share at least one point.
	pub fn intersects(&self, other: &Interval) -> bool {
		self.contains_lower_bound(&other.lower)
			|| self.contains_upper_bound(&other.upper)
			|| other.contains_lower_bound(&self.lower)
			|| other.contains_upper_bound(&self.upper)
	}

	/// Returns `true` if the two intervals share no points.
	pub fn disjoint(&self, other: &Interval) -> bool {
		!self.intersects(other)
	}

	/// Returns `true` if the two intervals do not intersect but meet at a
	/// single coordinate where one is closed and the other is open.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::Interval;
	///
	/// let a = Interval::closed(1.0, 2.0)?;
	///
	/// assert!(a.touches(&Interval::open(2.0, 3.0)?));
	/// assert!(!a.touches(&Interval::closed(2.0, 3.0)?));
	/// assert!(!a.touches(&Interval::open(2.5, 3.0)?));
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn touches(&self, other: &Interval) -> bool {
		if self.intersects(other) {
			return false;
		}
		(approx_eq(self.lower.value(), other.upper.value())
			&& self.lower.direction() == other.upper.direction())
			|| (approx_eq(self.upper.value(), other.lower.value())
				&& self.upper.direction() == other.lower.direction())
	}

	/// Returns `true` if the two intervals intersect or touch.
	pub fn intersects_or_touches(&self, other: &Interval) -> bool {
		self.intersects(other) || self.touches(other)
	}

	/// Returns the parts of this interval not inside `other`.
	///
	/// The result has zero, one or two intervals, in ascending order.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::Interval;
	///
	/// let a = Interval::closed(0.0, 10.0)?;
	///
	/// assert_eq!(
	/// 	a.subtract(&Interval::closed(2.0, 8.0)?).as_slice(),
	/// 	[
	/// 		Interval::closed_open(0.0, 2.0)?,
	/// 		Interval::open_closed(8.0, 10.0)?
	/// 	]
	/// );
	/// assert!(a.subtract(&Interval::complete()).is_empty());
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn subtract(&self, other: &Interval) -> SmallVec<[Interval; 2]> {
		let other_contains_lower = other.contains_lower_bound(&self.lower);
		let other_contains_upper = other.contains_upper_bound(&self.upper);

		//   self:        ╠════╣
		//  other:  ╠════════════╣
		if other_contains_lower && other_contains_upper {
			return SmallVec::new();
		}

		//   self:  ╠════════════╣
		//  other:        ╠════╣
		// result:  ╠═════╡    ╞═╣
		if self.contains_lower_bound(&other.lower)
			&& self.contains_upper_bound(&other.upper)
		{
			return [
				Interval::span(self.lower, other.lower),
				Interval::span(other.upper, self.upper),
			]
			.into_iter()
			.flatten()
			.collect();
		}

		//   self:        ╠══════════╣
		//  other:  ╠════════════╣
		// result:               ╞═══╣
		if other_contains_lower {
			return Interval::span(other.upper, self.upper).into_iter().collect();
		}

		//   self:    ╠══════════╣
		//  other:        ╠════════════╣
		// result:    ╠═══╡
		if other_contains_upper {
			return Interval::span(self.lower, other.lower).into_iter().collect();
		}

		smallvec![*self]
	}

	/// Returns the points shared by both intervals, if there are any.
	pub fn intersect(&self, other: &Interval) -> Option<Interval> {
		if self.contains_lower_bound(&other.lower)
			&& self.contains_upper_bound(&other.upper)
		{
			return Some(*other);
		}

		let other_contains_lower = other.contains_lower_bound(&self.lower);
		let other_contains_upper = other.contains_upper_bound(&self.upper);

		match (other_contains_lower, other_contains_upper) {
			(true, true) => Some(*self),
			(true, false) => Interval::span(self.lower, other.upper),
			(false, true) => Interval::span(other.lower, self.upper),
			(false, false) => None,
		}
	}

	/// Returns the smallest interval containing both intervals.
	///
	/// When two bounds share a value the closed one is kept so no
	/// boundary point is lost.
	pub fn hull(&self, other: &Interval) -> Interval {
		let lower = self.lower.min_bound(other.lower);
		let upper = self.upper.max_bound(other.upper);

		Interval::span(lower, upper).unwrap_or(Interval { lower, upper })
	}

	/// Returns the parts of the real line outside this interval.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Interval, MultiInterval};
	///
	/// assert_eq!(
	/// 	Interval::closed(0.0, 10.0)?.exterior(),
	/// 	MultiInterval::new([
	/// 		Interval::inf_open(0.0)?,
	/// 		Interval::open_inf(10.0)?,
	/// 	])
	/// );
	/// assert!(Interval::complete().exterior().is_empty());
	/// # Ok::<(), interval_algebra::IntervalError>(())
	/// ```
	pub fn exterior(&self) -> MultiInterval {
		let left = (self.lower != Bound::NEG_INFINITY)
			.then(|| Interval::span(Bound::NEG_INFINITY, self.lower))
			.flatten();
		let right = (self.upper != Bound::POS_INFINITY)
			.then(|| Interval::span(self.upper, Bound::POS_INFINITY))
			.flatten();

		MultiInterval::new(left.into_iter().chain(right))
	}

	/// Returns the parts of the real line inside this interval, which is
	/// just the interval itself.
	pub fn interior(&self) -> Interval {
		*self
	}

	/// Returns the interval with both bound values multiplied by
	/// `scale_factor`.
	pub fn scaled(&self, scale_factor: f64) -> Result<Interval> {
		Interval::new(
			self.lower.scaled(scale_factor)?,
			self.upper.scaled(scale_factor)?,
		)
	}

	/// Returns the interval with `translation` added to both bound values.
	pub fn translated(&self, translation: f64) -> Result<Interval> {
		Interval::new(
			self.lower.translated(translation)?,
			self.upper.translated(translation)?,
		)
	}

	/// Returns the interval scaled by `scale_factor` and then translated by
	/// `translation`.
	pub fn scaled_then_translated(
		&self,
		scale_factor: f64,
		translation: f64,
	) -> Result<Interval> {
		Interval::new(
			self.lower.scaled_then_translated(scale_factor, translation)?,
			self.upper.scaled_then_translated(scale_factor, translation)?,
		)
	}

	/// Returns the interval translated by `translation` and then scaled by
	/// `scale_factor`.
	pub fn translated_then_scaled(
		&self,
		translation: f64,
		scale_factor: f64,
	) -> Result<Interval> {
		Interval::new(
			self.lower.translated_then_scaled(translation, scale_factor)?,
			self.upper.translated_then_scaled(translation, scale_factor)?,
		)
	}

	/// A total order on the exact bound values used to keep
	/// [`MultiInterval`]s sorted.
	pub(crate) fn cmp_exact(&self, other: &Interval) -> Ordering {
		let key = |bound: Bound| (bound.value(), bound.direction().sort_rank());

		let (a_value, a_rank) = key(self.lower);
		let (b_value, b_rank) = key(other.lower);
		let (c_value, c_rank) = key(self.upper);
		let (d_value, d_rank) = key(other.upper);

		a_value
			.total_cmp(&b_value)
			.then(a_rank.cmp(&b_rank))
			.then(c_value.total_cmp(&d_value))
			.then(c_rank.cmp(&d_rank))
	}
}

impl AsRef<[Interval]> for Interval {
	fn as_ref(&self) -> &[Interval] {
		core::slice::from_ref(self)
	}
}

impl fmt::Display for Interval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open_bracket = match self.lower.part_of_right() {
			true if !self.lower.is_infinite() => '[',
			_ => '(',
		};
		let close_bracket = match self.upper.part_of_left() {
			true if !self.upper.is_infinite() => ']',
			_ => ')',
		};

		write!(f, "{open_bracket}")?;
		write_value(f, self.lower.value())?;
		write!(f, ", ")?;
		write_value(f, self.upper.value())?;
		write!(f, "{close_bracket}")
	}
}

fn write_value(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
	if value == f64::NEG_INFINITY {
		write!(f, "-∞")
	} else if value == f64::INFINITY {
		write!(f, "+∞")
	} else {
		write!(f, "{value}")
	}
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
	use serde_test::{assert_de_tokens_error, assert_tokens, Token};

	use super::*;
	use crate::test_intervals::ie;

	fn bound_tokens(value: f64, direction: &'static str) -> [Token; 6] {
		[
			Token::Struct {
				name: "Bound",
				len: 2,
			},
			Token::Str("value"),
			Token::F64(value),
			Token::Str("direction"),
			Token::UnitVariant {
				name: "Direction",
				variant: direction,
			},
			Token::StructEnd,
		]
	}

	fn interval_tokens(lower: [Token; 6], upper: [Token; 6]) -> Vec<Token> {
		let mut tokens = vec![
			Token::Struct {
				name: "Interval",
				len: 2,
			},
			Token::Str("lower"),
		];
		tokens.extend(lower);
		tokens.push(Token::Str("upper"));
		tokens.extend(upper);
		tokens.push(Token::StructEnd);
		tokens
	}

	#[test]
	fn interval_tokens_tests() {
		assert_tokens(
			&ie(0.0, 1.0),
			&interval_tokens(bound_tokens(0.0, "Right"), bound_tokens(1.0, "Right")),
		);
	}

	#[test]
	fn deserialize_revalidates() {
		assert_de_tokens_error::<Interval>(
			&interval_tokens(bound_tokens(2.0, "Right"), bound_tokens(1.0, "Left")),
			"reversed interval: lower bound 2 is greater than upper bound 1",
		);
		assert_de_tokens_error::<Interval>(
			&interval_tokens(bound_tokens(1.0, "Left"), bound_tokens(1.0, "Left")),
			"degenerate interval at 1 must have both bounds closed",
		);
		assert_de_tokens_error::<Bound>(
			&bound_tokens(f64::NEG_INFINITY, "Left"),
			"a bound at -inf must point towards the finite numbers",
		);
	}
}
