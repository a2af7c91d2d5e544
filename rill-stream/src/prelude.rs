// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude re-exporting the commonly used items.
//!
//! ```
//! use rill_stream::prelude::*;
//!
//! let source = Stream::<i32>::new();
//! let _labels = pipe(source).map(|value| value.to_string());
//! ```

pub use crate::{
    combine_latest, distinct_until_changed, distinct_until_changed_by, duc, duc_by, filter,
    map, map_to, merge, pipe, scan, skip, with_latest_from, CombineLatest, LatestSources,
    Merge, Operator, Pipe,
};
pub use rill_core::{
    Emitter, EmitterExt, Publisher, StatefulStream, Stream, StreamValue, Subscription,
    Unsubscribe,
};
