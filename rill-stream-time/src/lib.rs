// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for rill pipes.
//!
//! - [`debounce_time`] - forwards the last value of a burst once the input has been
//!   quiet for a while
//! - [`throttle_time`] - forwards the latest value at most once per window
//!
//! Both defer work to a [`Scheduler`](rill_runtime::Scheduler). The plain constructors
//! use the runtime selected by cargo features (`runtime-tokio` by default,
//! `runtime-smol`); the `_with` variants take any scheduler, including
//! [`ManualScheduler`](rill_runtime::ManualScheduler) for deterministic tests.
//!
//! Timer state belongs to a subscription: two subscribers to one debounced pipe run
//! two independent timers.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod debounce;
pub mod prelude;
pub mod throttle;

pub use self::debounce::{debounce_time_with, DebounceExt, DebounceTime};
pub use self::throttle::{throttle_time_with, ThrottleExt, ThrottleTime};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use self::debounce::debounce_time;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use self::throttle::throttle_time;
