// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators and combinators over rill emitters.
//!
//! # Building blocks
//!
//! - **[`Operator`]**: turns a downstream subscription into an upstream one. Tuples of
//!   operators compose left to right.
//! - **[`Pipe`]**: a derived emitter running a source through operators, built with
//!   [`pipe`], [`Pipe::through`], the chaining methods, or [`pipe!`].
//! - **Combinators**: [`merge`] (fan-in), [`combine_latest`] (latest values of every
//!   source), [`duc`] / [`duc_by`] (distinct pipes).
//!
//! ## Operator catalogue
//!
//! | operator | output |
//! |----------|--------|
//! | [`map`] | every value, transformed |
//! | [`filter`] | values matching a predicate |
//! | [`map_to`] | a fixed value per input |
//! | [`scan`] | running accumulator |
//! | [`skip`] | everything after the first `n` values |
//! | [`distinct_until_changed`] / [`distinct_until_changed_by`] | values differing from the last forwarded one |
//! | [`with_latest_from`] | each value with the latest values of other emitters |
//!
//! Timed operators (`debounce_time`, `throttle_time`) live in `rill-stream-time`.
//!
//! # Propagation
//!
//! Everything is synchronous: publishing into a source runs the whole chain, down to
//! the final subscriber, before `publish` returns.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod combine_latest;
pub mod duc;
pub mod latest;
pub mod merge;
pub mod operator;
pub mod operators;
pub mod pipe;
pub mod prelude;

pub use self::combine_latest::{combine_latest, CombineLatest};
pub use self::duc::{duc, duc_by};
pub use self::latest::{LatestSources, ReadyMask};
pub use self::merge::{merge, Merge};
pub use self::operator::Operator;
pub use self::operators::{
    distinct_until_changed, distinct_until_changed_by, filter, map, map_to, scan, skip,
    with_latest_from, DistinctUntilChanged, Filter, Map, MapTo, Scan, Skip, WithLatestFrom,
};
pub use self::pipe::{pipe, Pipe};
