// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rill
//!
//! A minimal push-based data-flow engine for Rust.
//!
//! ## Overview
//!
//! Rill models application state as a graph of streams. Values are pushed into source
//! streams and propagate synchronously through operators to every subscriber before
//! `publish` returns. On top of that, *systems* bundle streams and the logic wiring them
//! together, and declare the systems they depend on; [`init`] builds a system and its
//! whole dependency graph, sharing singleton systems between all their dependents.
//!
//! ## Design Philosophy
//!
//! - **Push, not pull**: publishing runs the graph. There is no executor to drive and no
//!   polling; only the timed operators need a [`Scheduler`].
//! - **Lazy derivation**: a [`Pipe`] subscribes its source only when it is subscribed
//!   itself, once per subscription.
//! - **Typed wiring**: dependencies are tuples of specs, so a constructor receives its
//!   dependencies' outputs with their concrete types.
//!
//! ## Crates
//!
//! | crate | contents |
//! |-------|----------|
//! | `rill-core` | [`Stream`], [`StatefulStream`], [`EventHandler`], subscriptions, errors |
//! | `rill-stream` | [`Pipe`], operators, [`merge`], [`combine_latest`], [`duc`] |
//! | `rill-stream-time` | [`debounce_time`](DebounceExt::debounce_time), [`throttle_time`](ThrottleExt::throttle_time) |
//! | `rill-runtime` | [`Scheduler`] implementations |
//! | `rill-system` | [`SystemSpec`], [`system`], [`init`], [`Bundle`] |
//!
//! ## Quick Start
//!
//! ```
//! use rill::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! # fn main() -> rill::Result<()> {
//! let a = system(|()| StatefulStream::new(1), ());
//! let b = system(|(a,): (Arc<StatefulStream<i32>>,)| {
//!     let doubled = StatefulStream::new(0);
//!     pipe(a.as_ref().clone()).map(|value| value * 2).connect_to(doubled.clone());
//!     doubled
//! }, (a.clone(),));
//!
//! let doubled = init(&b)?;
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! doubled.subscribe_fn(move |value| sink.lock().unwrap().push(value));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![2]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support
//! - `tracing` (default): structured logging through `tracing`
//! - `runtime-tokio` (default): timed operators scheduled on tokio
//! - `runtime-smol`: timed operators scheduled on smol

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use rill_core::{
    actions, connect, event_handler, get_value, handle_next, publish, reset, stateful_stream,
    stream, subscribe, subscription, DynEmitter, Emitter, EmitterExt, EventHandler,
    IntoRillError, Publisher, Result, ResultExt, RillError, StatefulStream, Stream,
    StreamValue, Subscription, Unsubscribe,
};

pub use rill_stream::{
    combine_latest, distinct_until_changed, distinct_until_changed_by, duc, duc_by, filter,
    map, map_to, merge, pipe, scan, skip, with_latest_from, CombineLatest,
    DistinctUntilChanged, Filter, LatestSources, Map, MapTo, Merge, Operator, Pipe,
    ReadyMask, Scan, Skip, WithLatestFrom,
};

pub use rill_stream_time::{
    debounce_time_with, throttle_time_with, DebounceExt, DebounceTime, ThrottleExt,
    ThrottleTime,
};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use rill_stream_time::{debounce_time, throttle_time};

pub use rill_system::{
    init, system, try_system, Bundle, Dependencies, InitContext, SpecId, SystemOptions,
    SystemSpec,
};

pub use rill_runtime::{ManualScheduler, ScheduledTask, Scheduler, Task};

#[cfg(feature = "runtime-tokio")]
pub use rill_runtime::TokioScheduler;

#[cfg(feature = "runtime-smol")]
pub use rill_runtime::SmolScheduler;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use rill_runtime::DefaultScheduler;

/// Prelude module for convenient imports.
///
/// Brings the stream types, the emitter traits, the pipe builders and the system
/// builders into scope:
///
/// ```
/// use rill::prelude::*;
/// ```
pub mod prelude {
    pub use rill_core::{
        Emitter, EmitterExt, EventHandler, Publisher, Result, RillError, StatefulStream,
        Stream, StreamValue, Subscription, Unsubscribe,
    };

    pub use rill_stream::{
        combine_latest, distinct_until_changed, distinct_until_changed_by, duc, duc_by,
        filter, map, map_to, merge, pipe, scan, skip, with_latest_from, CombineLatest,
        Merge, Operator, Pipe,
    };

    pub use rill_stream_time::{
        debounce_time_with, throttle_time_with, DebounceExt, ThrottleExt,
    };

    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    pub use rill_stream_time::{debounce_time, throttle_time};

    pub use rill_system::{init, system, try_system, Bundle, InitContext, SystemSpec};

    pub use rill_runtime::{ManualScheduler, Scheduler};
}
