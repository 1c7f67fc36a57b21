//! A module containing [`IntervalError`], the error type shared by every
//! fallible operation in this crate.

use thiserror::Error;

/// The error returned when a [`Bound`], [`Interval`] or mapping cannot be
/// built or evaluated.
///
/// None of these errors are recoverable by retrying the same call; the
/// caller must change its input.
///
/// [`Bound`]: crate::Bound
/// [`Interval`]: crate::Interval
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
	/// A bound at negative infinity was marked part of the left, or a
	/// bound at positive infinity was marked part of the right.
	#[error("a bound at {value} must point towards the finite numbers")]
	InfiniteDirection {
		/// The infinite value of the rejected bound.
		value: f64,
	},
	/// A bound value was NaN.
	#[error("bound values must not be NaN")]
	NotANumber,
	/// The lower bound value was greater than the upper bound value.
	#[error("reversed interval: lower bound {lower} is greater than upper bound {upper}")]
	Reversed {
		/// The lower bound value.
		lower: f64,
		/// The upper bound value.
		upper: f64,
	},
	/// The bound values were exactly equal but at least one bound was
	/// open.
	#[error("degenerate interval at {value} must have both bounds closed")]
	DegenerateNotClosed {
		/// The shared value of both bounds.
		value: f64,
	},
	/// The bound values differed but were within tolerance of each other.
	///
	/// Callers must snap such bounds together or discard the interval.
	#[error("infinitesimal interval between {lower} and {upper}")]
	Infinitesimal {
		/// The lower bound value.
		lower: f64,
		/// The upper bound value.
		upper: f64,
	},
	/// A side of an [`IntervalMap`] had an infinite bound or a length too
	/// large to represent, leaving no finite scale factor between the
	/// sides.
	///
	/// [`IntervalMap`]: crate::IntervalMap
	#[error("interval map sides must have a finite length, got {lower} to {upper}")]
	UnboundedLink {
		/// The lower bound value of the offending side.
		lower: f64,
		/// The upper bound value of the offending side.
		upper: f64,
	},
	/// The operation is intentionally not provided.
	#[error("{0} is not implemented, build the inverse map and map forwards through it")]
	Unimplemented(&'static str),
}

/// A [`Result`](core::result::Result) alias with [`IntervalError`] as the
/// error type.
pub type Result<T> = core::result::Result<T, IntervalError>;
