//! A module containing the fixed floating-point tolerance policy used by
//! every comparison in this crate.
//!
//! Two values are considered approximately equal when they are exactly
//! equal, or when both are finite and their difference is within
//! [`RELATIVE_TOLERANCE`] of the larger magnitude (or within
//! [`ABSOLUTE_TOLERANCE`]). Infinities are only ever equal to
//! themselves.
//!
//! The policy is not configurable at runtime so that two intervals built
//! in different places always compare the same way.

/// The relative tolerance used by [`approx_eq()`].
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// The absolute tolerance used by [`approx_eq()`].
///
/// This is zero, meaning values close to `0.0` must match exactly.
pub const ABSOLUTE_TOLERANCE: f64 = 0.0;

/// The distance a value is nudged inwards past an open bound by
/// [`MultiInterval::nearest_contained_value()`].
///
/// [`MultiInterval::nearest_contained_value()`]: crate::MultiInterval::nearest_contained_value
pub const CONTAINMENT_NUDGE: f64 = 1e-6;

/// Returns `true` if `a` and `b` are equal under the crate's tolerance
/// policy.
///
/// # Examples
/// ```
/// use interval_algebra::tolerance::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 1e-12));
/// assert!(!approx_eq(1.0, 1.0 + 1e-6));
/// assert!(approx_eq(f64::INFINITY, f64::INFINITY));
/// assert!(!approx_eq(f64::INFINITY, f64::MAX));
/// ```
pub fn approx_eq(a: f64, b: f64) -> bool {
	if a == b {
		return true;
	}
	if a.is_infinite() || b.is_infinite() {
		return false;
	}

	let difference = (a - b).abs();
	difference <= RELATIVE_TOLERANCE * a.abs().max(b.abs())
		|| difference <= ABSOLUTE_TOLERANCE
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn approx_eq_tests() {
		assert!(approx_eq(0.0, 0.0));
		assert!(approx_eq(-0.0, 0.0));
		assert!(!approx_eq(0.0, 1e-300));

		assert!(approx_eq(40.0, 40.0 + 1e-8));
		assert!(!approx_eq(40.0, 40.0 + 1e-7));

		assert!(approx_eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
		assert!(!approx_eq(f64::NEG_INFINITY, f64::INFINITY));
		assert!(!approx_eq(f64::NAN, f64::NAN));
		assert!(!approx_eq(f64::NAN, 1.0));
	}
}
