//! Short-hand interval constructors and sample domains for tests.

use crate::Interval;

//only every other number to allow mathematical definitions to test
//between bounds using the odd numbers in the domain
pub(crate) const NUMBERS: &[f64] = &[2.0, 4.0, 6.0, 8.0, 10.0];
//go a bit around on either side to compensate for unbounded intervals
pub(crate) const NUMBERS_DOMAIN: &[f64] = &[
	0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
];

/// An unbounded-unbounded interval
pub(crate) fn uu() -> Interval {
	Interval::complete()
}
/// An unbounded-included interval
pub(crate) fn ui(x: f64) -> Interval {
	Interval::inf_closed(x).unwrap()
}
/// An unbounded-excluded interval
pub(crate) fn ue(x: f64) -> Interval {
	Interval::inf_open(x).unwrap()
}
/// An included-unbounded interval
pub(crate) fn iu(x: f64) -> Interval {
	Interval::closed_inf(x).unwrap()
}
/// An excluded-unbounded interval
pub(crate) fn eu(x: f64) -> Interval {
	Interval::open_inf(x).unwrap()
}
/// An included-included interval
pub(crate) fn ii(x1: f64, x2: f64) -> Interval {
	Interval::closed(x1, x2).unwrap()
}
/// An included-excluded interval
pub(crate) fn ie(x1: f64, x2: f64) -> Interval {
	Interval::closed_open(x1, x2).unwrap()
}
/// An excluded-included interval
pub(crate) fn ei(x1: f64, x2: f64) -> Interval {
	Interval::open_closed(x1, x2).unwrap()
}
/// An excluded-excluded interval
pub(crate) fn ee(x1: f64, x2: f64) -> Interval {
	Interval::open(x1, x2).unwrap()
}
/// A degenerate interval
pub(crate) fn dd(x: f64) -> Interval {
	Interval::degenerate(x).unwrap()
}

pub(crate) fn all_valid_test_intervals() -> Vec<Interval> {
	let mut output = vec![uu()];
	for i in NUMBERS {
		output.extend([dd(*i), ui(*i), ue(*i), iu(*i), eu(*i)]);
		for j in NUMBERS {
			if i < j {
				output.extend([ii(*i, *j), ie(*i, *j), ei(*i, *j), ee(*i, *j)]);
			}
		}
	}
	output
}
