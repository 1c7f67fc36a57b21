//! This crate provides [`Interval`], [`MultiInterval`] and [`Region`],
//! an algebra of real-valued intervals with open, closed and infinite
//! bounds, along with [`IntervalMap`] and [`IntervalMultiMap`] for
//! mapping values and intervals between two coordinate spaces.
//!
//! ## Example using a [`MultiInterval`]
//!
//! ```rust
//! use interval_algebra::{Interval, MultiInterval};
//!
//! let track = MultiInterval::new([Interval::closed(0.0, 10.0)?]);
//! let gap = Interval::open(2.0, 4.0)?;
//!
//! assert_eq!(
//! 	track.subtract([gap]),
//! 	MultiInterval::new([
//! 		Interval::closed(0.0, 2.0)?,
//! 		Interval::closed(4.0, 10.0)?,
//! 	])
//! );
//! assert_eq!(track.intersects([gap]), true);
//! assert_eq!(track.exterior().to_string(), "{(-∞, 0), (10, +∞)}");
//! # Ok::<(), interval_algebra::IntervalError>(())
//! ```
//!
//! ## Example using an [`IntervalMultiMap`]
//!
//! ```rust
//! use interval_algebra::{IntervalMap, IntervalMultiMap};
//!
//! let map = IntervalMultiMap::new([
//! 	IntervalMap::closed_open(0.0, 10.0, 100.0, 110.0)?,
//! 	IntervalMap::closed_open(10.0, 20.0, 500.0, 510.0)?,
//! ]);
//!
//! assert_eq!(map.map_value(5.0), [105.0]);
//! assert!(map.map_value(25.0).is_empty());
//! assert_eq!(map.reverse().map_value(505.0), [15.0]);
//! # Ok::<(), interval_algebra::IntervalError>(())
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Bounds and Directions
//!
//! Every end of an interval is a [`Bound`]: a value plus a
//! [`Direction`] saying which side of the value the value itself belongs
//! to. A [`Direction::Left`] bound is part of whatever lies to its left,
//! so it closes an interval that ends there and opens an interval that
//! starts there. [`Direction::Right`] is the reverse. Because of this the
//! same bound can end one interval and start its neighbour, which is how
//! residues and exteriors are built without ever having to flip a
//! bound.
//!
//! The two infinite bounds are [`Bound::NEG_INFINITY`] and
//! [`Bound::POS_INFINITY`], and infinite ends are always displayed as open.
//!
//! ### Tolerance
//!
//! Values are compared with the tolerance in [`tolerance`], so two
//! bounds whose values differ by a relative `1e-9` are treated as the
//! same place. Ordering of bounds falls back to their direction when the
//! values are approximately equal.
//!
//! ### Degenerate and Infinitesimal
//!
//! An interval whose bounds sit at the same value is degenerate. It is
//! only valid when it is closed on both ends, `[x, x]`. Any other pair
//! of approximately equal bounds would describe an infinitesimal
//! interval: [`Interval::new()`] rejects those, and set operations drop
//! them from their results.
//!
//! ### Touching
//!
//! Two intervals touch when they do not intersect but no value lies
//! between them, for example `[0, 5)` and `[5, 10]`. `[0, 5)` and
//! `(5, 10]` do not touch since `5` lies between them.
//!
//! ### Merging
//!
//! A [`MultiInterval`] keeps whatever members it is given, overlapping
//! or not. Merging is always explicit: see
//! [`MultiInterval::merge_touching()`] and its siblings, or
//! [`MultiInterval::interior_merged()`] which merges by coverage.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>

#![allow(clippy::tabs_in_doc_comments)]

pub mod bound;
pub mod error;
pub mod interval;
pub mod interval_map;
pub mod multi_interval;
pub mod region;
pub mod tolerance;
pub mod utils;

pub(crate) mod sweep;

#[cfg(test)]
pub(crate) mod test_intervals;

pub use crate::bound::{Bound, Direction};
pub use crate::error::{IntervalError, Result};
pub use crate::interval::Interval;
pub use crate::interval_map::{IntervalMap, IntervalMultiMap};
pub use crate::multi_interval::MultiInterval;
pub use crate::region::Region;
