// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for rill's timed operators.
//!
//! Propagation in rill is synchronous; the only deferred work is the trailing
//! callback of `debounce_time` and `throttle_time`. Those operators talk to a
//! [`Scheduler`], which runs a task after a delay and hands back a cancellable
//! [`ScheduledTask`].
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`TokioScheduler`](impls::tokio::TokioScheduler)
//! - `runtime-smol` - [`SmolScheduler`](impls::smol::SmolScheduler)
//! - always available - [`ManualScheduler`](impls::manual::ManualScheduler), a virtual
//!   clock advanced by hand, running tasks on the caller's thread

#[macro_use]
mod logging;

pub mod impls;
pub mod scheduler;

pub use impls::manual::ManualScheduler;
pub use scheduler::{ScheduledTask, Scheduler, Task};

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioScheduler;

#[cfg(feature = "runtime-smol")]
pub use impls::smol::SmolScheduler;

/// Scheduler used by the timed operators when none is given explicitly.
#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = TokioScheduler;

/// Scheduler used by the timed operators when none is given explicitly.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultScheduler = SmolScheduler;
