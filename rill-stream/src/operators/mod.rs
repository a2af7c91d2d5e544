// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The synchronous operator catalogue.
//!
//! Every constructor returns a concrete operator value; pass it to
//! [`Pipe::through`](crate::Pipe::through) or [`pipe!`](crate::pipe!), or use the
//! matching chaining method on [`Pipe`](crate::Pipe).

pub mod distinct_until_changed;
pub mod filter;
pub mod map;
pub mod map_to;
pub mod scan;
pub mod skip;
pub mod with_latest_from;

pub use self::distinct_until_changed::{
    distinct_until_changed, distinct_until_changed_by, DistinctUntilChanged,
};
pub use self::filter::{filter, Filter};
pub use self::map::{map, Map};
pub use self::map_to::{map_to, MapTo};
pub use self::scan::{scan, Scan};
pub use self::skip::{skip, Skip};
pub use self::with_latest_from::{with_latest_from, WithLatestFrom};
