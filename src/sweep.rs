//! The line-sweep engine behind the whole-collection operations on
//! [`MultiInterval`](crate::MultiInterval).
//!
//! Every interval contributes an [`Side::Entry`] bound and an
//! [`Side::Exit`] bound. These are sorted once and walked in a single
//! forward pass while counting how many intervals cover the current
//! position.

use itertools::Itertools;

use crate::bound::Bound;
use crate::interval::Interval;
use crate::tolerance::approx_eq;
use crate::utils::{
	consecutive_disjoint_pairs, first_and_last, previous_current_next,
};

/// Whether a [`SweepBound`] opens or closes its interval.
///
/// `Exit` is declared first so that it sorts first: an interval ending
/// at a bound is closed before an abutting interval starting at an
/// identical bound is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Side {
	Exit,
	Entry,
}

/// Which operand of a two-collection sweep a [`SweepBound`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
	Minuend,
	Subtrahend,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SweepBound {
	pub(crate) bound: Bound,
	pub(crate) side: Side,
	pub(crate) source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Coverage {
	Interior,
	Exterior,
}

/// A piece of the real line between two consecutive sorted bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Segment {
	pub(crate) interval: Interval,
	pub(crate) coverage: Coverage,
}

fn tagged(
	intervals: &[Interval],
	source: Source,
) -> impl Iterator<Item = SweepBound> + '_ {
	intervals.iter().flat_map(move |interval| {
		[
			SweepBound {
				bound: interval.lower_bound(),
				side: Side::Entry,
				source,
			},
			SweepBound {
				bound: interval.upper_bound(),
				side: Side::Exit,
				source,
			},
		]
	})
}

/// Sorts sweep bounds into sweep order.
///
/// Approximate equality is not transitive so it cannot be used directly
/// as a sort comparator. Instead the bounds are first sorted exactly by
/// value and then split into clusters, each cluster holding the run of
/// values approximately equal to its first value. Within a cluster
/// bounds are ordered by direction (`Right` first) and then by side
/// (`Exit` first).
pub(crate) fn sorted(bounds: impl IntoIterator<Item = SweepBound>) -> Vec<SweepBound> {
	let mut bounds: Vec<SweepBound> = bounds.into_iter().collect();
	bounds.sort_by(|a, b| a.bound.value().total_cmp(&b.bound.value()));

	let mut keyed = Vec::with_capacity(bounds.len());
	let mut anchor = None;
	let mut cluster = 0_usize;
	for sweep_bound in bounds {
		let value = sweep_bound.bound.value();
		match anchor {
			Some(first) if approx_eq(first, value) => {}
			Some(_) => {
				cluster += 1;
				anchor = Some(value);
			}
			None => anchor = Some(value),
		}
		keyed.push((cluster, sweep_bound));
	}

	keyed.sort_by(|(cluster_a, a), (cluster_b, b)| {
		let rank_a = a.bound.direction().sort_rank();
		let rank_b = b.bound.direction().sort_rank();

		cluster_a
			.cmp(cluster_b)
			.then(rank_a.cmp(&rank_b))
			.then(a.side.cmp(&b.side))
	});

	keyed.into_iter().map(|(_, sweep_bound)| sweep_bound).collect()
}

/// Walks the sorted bounds of `intervals` recording
/// `(depth_before, bound, depth_after)` for each bound.
pub(crate) fn stack_heights(intervals: &[Interval]) -> Vec<(usize, Bound, usize)> {
	let bounds = sorted(tagged(intervals, Source::Minuend));
	log::trace!("sweeping {} bounds", bounds.len());

	let mut depth = 0_usize;
	bounds
		.into_iter()
		.map(|sweep_bound| {
			let before = depth;
			depth = match sweep_bound.side {
				Side::Entry => depth + 1,
				Side::Exit => depth - 1,
			};
			(before, sweep_bound.bound, depth)
		})
		.collect()
}

/// Splits the whole real line into segments at every bound of
/// `intervals`.
///
/// Zero-width candidates are dropped and the line is padded out to both
/// infinities so that the segments always tile the whole line.
pub(crate) fn segments(intervals: &[Interval]) -> Vec<Segment> {
	let heights = stack_heights(intervals);
	if heights.is_empty() {
		return vec![Segment {
			interval: Interval::complete(),
			coverage: Coverage::Exterior,
		}];
	}

	let exterior = |interval| Segment {
		interval,
		coverage: Coverage::Exterior,
	};

	let mut output = Vec::new();
	for (previous, (_, bound, _), next) in previous_current_next(heights) {
		match previous {
			None => {
				output.extend(Interval::span(Bound::NEG_INFINITY, bound).map(exterior));
			}
			Some((_, previous_bound, depth)) => {
				let coverage = match depth {
					0 => Coverage::Exterior,
					_ => Coverage::Interior,
				};
				output.extend(
					Interval::span(previous_bound, bound)
						.map(|interval| Segment { interval, coverage }),
				);
			}
		}
		if next.is_none() {
			output.extend(Interval::span(bound, Bound::POS_INFINITY).map(exterior));
		}
	}

	output
}

/// Coalesces runs of consecutive segments with the same coverage into
/// one segment each.
pub(crate) fn merged_segments(intervals: &[Interval]) -> Vec<Segment> {
	segments(intervals)
		.into_iter()
		.chunk_by(|segment| segment.coverage)
		.into_iter()
		.filter_map(|(coverage, group)| {
			let (first, last) = first_and_last(group)?;
			let interval = Interval::span(
				first.interval.lower_bound(),
				last.interval.upper_bound(),
			)?;
			Some(Segment { interval, coverage })
		})
		.collect()
}

pub(crate) fn exterior(intervals: &[Interval]) -> Vec<Interval> {
	covered(merged_segments(intervals), Coverage::Exterior)
}

pub(crate) fn interior(intervals: &[Interval]) -> Vec<Interval> {
	covered(segments(intervals), Coverage::Interior)
}

pub(crate) fn interior_merged(intervals: &[Interval]) -> Vec<Interval> {
	covered(merged_segments(intervals), Coverage::Interior)
}

fn covered(segments: Vec<Segment>, coverage: Coverage) -> Vec<Interval> {
	segments
		.into_iter()
		.filter(|segment| segment.coverage == coverage)
		.map(|segment| segment.interval)
		.collect()
}

/// Removes the points of `subtrahend` from `minuend` in a single sweep.
///
/// Output is open wherever the minuend is covered and the subtrahend is
/// not, so overlapping minuend members are flattened together. Minuend
/// members that only touch stay separate.
pub(crate) fn subtract(minuend: &[Interval], subtrahend: &[Interval]) -> Vec<Interval> {
	let bounds = sorted(
		tagged(minuend, Source::Minuend).chain(tagged(subtrahend, Source::Subtrahend)),
	);
	log::trace!(
		"subtracting {} intervals from {} intervals",
		subtrahend.len(),
		minuend.len()
	);

	let mut minuend_depth = 0_usize;
	let mut subtrahend_depth = 0_usize;
	let mut transitions = Vec::new();
	for sweep_bound in bounds {
		let was_inside = minuend_depth > 0 && subtrahend_depth == 0;

		let depth = match sweep_bound.source {
			Source::Minuend => &mut minuend_depth,
			Source::Subtrahend => &mut subtrahend_depth,
		};
		*depth = match sweep_bound.side {
			Side::Entry => *depth + 1,
			Side::Exit => *depth - 1,
		};

		let is_inside = minuend_depth > 0 && subtrahend_depth == 0;
		if was_inside != is_inside {
			transitions.push(sweep_bound.bound);
		}
	}

	consecutive_disjoint_pairs(transitions)
		.filter_map(|(lower, upper)| Interval::span(lower, upper))
		.collect()
}

/// Removes the points of `subtrahend` from each member of `minuend`
/// independently, so that overlapping members stay distinct.
pub(crate) fn subtract_preserving(
	minuend: &[Interval],
	subtrahend: &[Interval],
) -> Vec<Interval> {
	subtrahend
		.iter()
		.fold(minuend.to_vec(), |remaining, taken| {
			remaining
				.iter()
				.flat_map(|interval| interval.subtract(taken))
				.collect()
		})
}

pub(crate) fn intersect(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
	subtract(a, &exterior(b))
}

/// Adds each member of `b` to the members of `a`, merging it by hull
/// with any existing member the predicate accepts.
///
/// The scan restarts from the first member after every merge because
/// the grown hull may now satisfy the predicate against a member that
/// was already passed over.
pub(crate) fn union_merge_on_predicate<P>(
	a: &[Interval],
	b: &[Interval],
	mut predicate: P,
) -> Vec<Interval>
where
	P: FnMut(&Interval, &Interval) -> bool,
{
	let mut results = a.to_vec();
	for candidate in b {
		let mut candidate = *candidate;
		while let Some(index) = results
			.iter()
			.position(|existing| predicate(existing, &candidate))
		{
			let existing = results.remove(index);
			log::trace!("merging {existing} into {candidate}");
			candidate = candidate.hull(&existing);
		}
		results.push(candidate);
	}
	results
}

pub(crate) fn hull(intervals: &[Interval]) -> Option<Interval> {
	intervals.iter().copied().reduce(|hull, interval| hull.hull(&interval))
}

#[cfg(test)]
mod tests {
	use core::cmp::Ordering;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_intervals::{
		all_valid_test_intervals, dd, ee, ei, eu, ie, ii, iu, ue, ui, uu,
		NUMBERS_DOMAIN,
	};
	use crate::utils::consecutive_overlapping_pairs;

	fn in_sweep_order(a: &SweepBound, b: &SweepBound) -> bool {
		match a.bound.cmp_bound(&b.bound) {
			Ordering::Less => true,
			Ordering::Equal => a.side <= b.side,
			Ordering::Greater => false,
		}
	}

	fn covers(intervals: &[Interval], x: f64) -> bool {
		intervals.iter().any(|interval| interval.contains_value(x))
	}

	fn sample_collections() -> Vec<Vec<Interval>> {
		let intervals = all_valid_test_intervals();
		let mut output = vec![vec![]];
		for (i, a) in intervals.iter().enumerate().step_by(3) {
			output.push(vec![*a]);
			for b in intervals.iter().skip(i).step_by(7) {
				output.push(vec![*a, *b]);
			}
		}
		output.push(vec![ie(0.0, 4.0), ii(2.0, 6.0), dd(6.0), ee(8.0, 10.0)]);
		output.push(vec![ii(2.0, 2.0), ii(2.0, 2.0), ei(2.0, 4.0)]);
		output
	}

	#[test]
	fn sorted_tests() {
		let bounds = sorted(
			tagged(&[ii(4.0, 6.0), ie(0.0, 4.0), ee(4.0, 8.0)], Source::Minuend)
				.chain(tagged(&[dd(4.0)], Source::Subtrahend)),
		);

		assert!(
			consecutive_overlapping_pairs(&bounds)
				.all(|(a, b)| in_sweep_order(a, b))
		);
		assert_eq!(
			bounds
				.iter()
				.map(|x| (x.bound.value(), x.side))
				.collect::<Vec<_>>(),
			[
				(0.0, Side::Entry),
				(4.0, Side::Exit),
				(4.0, Side::Entry),
				(4.0, Side::Entry),
				(4.0, Side::Exit),
				(4.0, Side::Entry),
				(6.0, Side::Exit),
				(8.0, Side::Exit),
			]
		);
	}

	#[test]
	fn sorted_clusters_approximate_values() {
		let bounds = sorted(tagged(
			&[ie(0.0, 4.0 + 1e-12), ii(4.0, 8.0)],
			Source::Minuend,
		));

		// the exit at the approximate 4 must come before the entry at 4
		assert_eq!(
			bounds.iter().map(|x| x.side).collect::<Vec<_>>(),
			[Side::Entry, Side::Exit, Side::Entry, Side::Exit]
		);
	}

	#[test]
	fn stack_heights_tests() {
		assert_eq!(
			stack_heights(&[ii(0.0, 4.0), ii(2.0, 6.0)])
				.into_iter()
				.map(|(before, bound, after)| (before, bound.value(), after))
				.collect::<Vec<_>>(),
			[(0, 0.0, 1), (1, 2.0, 2), (2, 4.0, 1), (1, 6.0, 0)]
		);
		assert!(stack_heights(&[]).is_empty());
	}

	#[test]
	fn stack_heights_return_to_zero() {
		for intervals in sample_collections() {
			let heights = stack_heights(&intervals);
			for (before, bound, after) in heights.iter() {
				if *after != before + 1 && after + 1 != *before {
					dbg!(&intervals, bound);
					panic!("depth must move by one at every bound");
				}
			}
			if let Some((_, _, last)) = heights.last() {
				if *last != 0 {
					dbg!(&intervals, &heights);
					panic!("sweep did not return to zero depth");
				}
			}
		}
	}

	#[test]
	fn segments_tests() {
		assert_eq!(
			segments(&[]),
			[Segment {
				interval: uu(),
				coverage: Coverage::Exterior
			}]
		);
		assert_eq!(
			segments(&[ii(0.0, 4.0), ii(2.0, 6.0)]),
			[
				Segment {
					interval: ue(0.0),
					coverage: Coverage::Exterior
				},
				Segment {
					interval: ie(0.0, 2.0),
					coverage: Coverage::Interior
				},
				Segment {
					interval: ii(2.0, 4.0),
					coverage: Coverage::Interior
				},
				Segment {
					interval: ei(4.0, 6.0),
					coverage: Coverage::Interior
				},
				Segment {
					interval: eu(6.0),
					coverage: Coverage::Exterior
				},
			]
		);
		assert_eq!(
			segments(&[uu()]),
			[Segment {
				interval: uu(),
				coverage: Coverage::Interior
			}]
		);
	}

	#[test]
	fn segments_tile_the_line() {
		for collection in sample_collections() {
			let segments = segments(&collection);
			for x in NUMBERS_DOMAIN {
				let hits: Vec<_> = segments
					.iter()
					.filter(|segment| segment.interval.contains_value(*x))
					.collect();
				let expected = match covers(&collection, *x) {
					true => Coverage::Interior,
					false => Coverage::Exterior,
				};

				if hits.len() != 1 || hits[0].coverage != expected {
					dbg!(&collection, &segments, x);
					panic!("Segments do not tile the line!");
				}
			}
		}
	}

	#[test]
	fn interior_tests() {
		assert_eq!(interior(&[ii(0.0, 4.0), ii(2.0, 6.0)]), [
			ie(0.0, 2.0),
			ii(2.0, 4.0),
			ei(4.0, 6.0)
		]);
		assert_eq!(interior_merged(&[ii(0.0, 4.0), ii(2.0, 6.0)]), [ii(
			0.0, 6.0
		)]);
		assert_eq!(interior_merged(&[ie(0.0, 4.0), ii(4.0, 6.0)]), [ii(
			0.0, 6.0
		)]);
		assert_eq!(interior_merged(&[ie(0.0, 4.0), ei(4.0, 6.0)]), [
			ie(0.0, 4.0),
			ei(4.0, 6.0)
		]);
		assert_eq!(interior_merged(&[dd(4.0), dd(4.0)]), [dd(4.0)]);
		assert!(interior(&[]).is_empty());
	}

	#[test]
	fn exterior_tests() {
		assert_eq!(exterior(&[ii(0.0, 4.0), ii(2.0, 6.0)]), [ue(0.0), eu(6.0)]);
		assert_eq!(exterior(&[ie(0.0, 4.0), ei(4.0, 6.0)]), [
			ue(0.0),
			dd(4.0),
			eu(6.0)
		]);
		assert_eq!(exterior(&[]), [uu()]);
		assert!(exterior(&[uu()]).is_empty());
		assert_eq!(exterior(&[ui(2.0), iu(8.0)]), [ee(2.0, 8.0)]);
	}

	#[test]
	fn complement_laws() {
		for collection in sample_collections() {
			if collection.is_empty() {
				continue;
			}
			let complete = [uu()];

			let complement = subtract(&complete, &collection);
			if exterior(&collection) != complement {
				dbg!(&collection, exterior(&collection), complement);
				panic!("exterior() is not the complement!");
			}

			let double_complement = subtract(&complete, &complement);
			if interior_merged(&collection) != double_complement {
				dbg!(&collection, interior_merged(&collection), double_complement);
				panic!("interior_merged() is not the double complement!");
			}
		}
	}

	#[test]
	fn subtract_tests() {
		assert_eq!(subtract(&[ii(0.0, 10.0)], &[ii(2.0, 8.0)]), [
			ie(0.0, 2.0),
			ei(8.0, 10.0)
		]);
		assert_eq!(subtract(&[ii(0.0, 10.0)], &[dd(5.0)]), [
			ie(0.0, 5.0),
			ei(5.0, 10.0)
		]);
		assert_eq!(subtract(&[uu()], &[ii(0.0, 10.0)]), [ue(0.0), eu(10.0)]);
		assert_eq!(subtract(&[ie(0.0, 5.0), ii(5.0, 10.0)], &[]), [
			ie(0.0, 5.0),
			ii(5.0, 10.0)
		]);
		assert_eq!(
			subtract(&[ii(0.0, 20.0), ii(0.0, 20.0), ii(0.0, 10.0)], &[ii(
				10.0, 20.0
			)]),
			[ie(0.0, 10.0)]
		);
		assert!(subtract(&[], &[ii(0.0, 10.0)]).is_empty());
		assert!(subtract(&[ii(0.0, 10.0)], &[uu()]).is_empty());
	}

	#[test]
	fn subtract_strategies_agree_pointwise() {
		for minuend in sample_collections() {
			for subtrahend in sample_collections().into_iter().step_by(5) {
				let flattened = subtract(&minuend, &subtrahend);
				let preserving = subtract_preserving(&minuend, &subtrahend);

				for x in NUMBERS_DOMAIN {
					let expected =
						covers(&minuend, *x) && !covers(&subtrahend, *x);

					if covers(&flattened, *x) != expected
						|| covers(&preserving, *x) != expected
					{
						dbg!(&minuend, &subtrahend, &flattened, &preserving, x);
						panic!("Discrepancy in subtract() detected!");
					}
				}
			}
		}
	}

	#[test]
	fn intersect_matches_pointwise_definition() {
		for a in sample_collections() {
			for b in sample_collections().into_iter().step_by(5) {
				let result = intersect(&a, &b);

				for x in NUMBERS_DOMAIN {
					let expected = covers(&a, *x) && covers(&b, *x);

					if covers(&result, *x) != expected {
						dbg!(&a, &b, &result, x);
						panic!("Discrepancy in intersect() detected!");
					}
				}
			}
		}
	}

	#[test]
	fn subtract_preserving_tests() {
		assert_eq!(
			subtract_preserving(
				&[ii(0.0, 20.0), ii(0.0, 20.0), ii(0.0, 10.0)],
				&[ii(10.0, 20.0)]
			),
			[ie(0.0, 10.0), ie(0.0, 10.0), ie(0.0, 10.0)]
		);
		assert_eq!(
			subtract_preserving(&[ii(0.0, 10.0)], &[ii(2.0, 3.0), ii(5.0, 6.0)]),
			[ie(0.0, 2.0), ee(3.0, 5.0), ei(6.0, 10.0)]
		);
	}

	#[test]
	fn union_merge_on_predicate_tests() {
		// ie(6, 8) only touches once ie(4, 6) has been merged in
		assert_eq!(
			union_merge_on_predicate(
				&[ie(0.0, 2.0), ie(6.0, 8.0), ie(4.0, 6.0)],
				&[ie(2.0, 4.0)],
				Interval::touches
			),
			[ie(0.0, 8.0)]
		);
		assert_eq!(
			union_merge_on_predicate(
				&[ii(0.0, 3.0), ii(5.0, 9.0)],
				&[ii(2.0, 6.0)],
				Interval::intersects_or_touches
			),
			[ii(0.0, 9.0)]
		);
		assert_eq!(
			union_merge_on_predicate(
				&[ii(0.0, 2.0)],
				&[ii(2.0, 4.0)],
				Interval::touches
			),
			[ii(0.0, 2.0), ii(2.0, 4.0)]
		);
		assert_eq!(
			union_merge_on_predicate(
				&[],
				&[ii(0.0, 2.0), ee(2.0, 4.0), ii(8.0, 10.0)],
				Interval::touches
			),
			[ie(0.0, 4.0), ii(8.0, 10.0)]
		);
	}

	#[test]
	fn merge_touching_is_idempotent() {
		for collection in sample_collections() {
			let once = union_merge_on_predicate(&[], &collection, Interval::touches);
			let twice = union_merge_on_predicate(&[], &once, Interval::touches);

			if once != twice {
				dbg!(&collection, once, twice);
				panic!("merge_touching() is not idempotent!");
			}
		}
	}

	#[test]
	fn hull_tests() {
		assert_eq!(hull(&[]), None);
		assert_eq!(hull(&[ee(2.0, 4.0), dd(8.0), ie(0.0, 1.0)]), Some(ii(0.0, 8.0)));
	}
}
