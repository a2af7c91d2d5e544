// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use core::time::Duration;
use parking_lot::Mutex;
use rill_core::{StreamValue, Subscription};
use rill_runtime::Scheduler;
use rill_stream::{Operator, Pipe};
use std::sync::Arc;

/// Operator returned by [`throttle_time`] and [`throttle_time_with`].
#[derive(Debug, Clone)]
pub struct ThrottleTime<T, S> {
    duration: Duration,
    scheduler: S,
    _marker: PhantomData<fn(T)>,
}

struct ThrottleState<T> {
    latest: Option<T>,
    window_open: bool,
}

/// Emits at most one value per `duration` window: the latest one.
///
/// A value arriving while no window is open opens one. Values arriving during the
/// window replace the stored value. When the window closes the stored value is
/// forwarded, and the next value opens a new window. This is trailing-edge
/// throttling: nothing is forwarded synchronously.
///
/// Each subscription to the pipe gets its own window.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
#[must_use]
pub fn throttle_time<T>(duration: Duration) -> ThrottleTime<T, rill_runtime::DefaultScheduler> {
    throttle_time_with(duration, rill_runtime::DefaultScheduler::default())
}

/// [`throttle_time`] on an explicit scheduler.
pub fn throttle_time_with<T, S: Scheduler>(duration: Duration, scheduler: S) -> ThrottleTime<T, S> {
    ThrottleTime {
        duration,
        scheduler,
        _marker: PhantomData,
    }
}

impl<T: StreamValue, S: Scheduler> Operator for ThrottleTime<T, S> {
    type Input = T;
    type Output = T;

    fn apply(&self, downstream: Subscription<T>) -> Subscription<T> {
        let state = Arc::new(Mutex::new(ThrottleState {
            latest: None,
            window_open: false,
        }));
        let duration = self.duration;
        let scheduler = self.scheduler.clone();

        Arc::new(move |value: T| {
            {
                let mut state = state.lock();
                state.latest = Some(value);
                if state.window_open {
                    return;
                }
                state.window_open = true;
            }

            let state = Arc::clone(&state);
            let downstream = Arc::clone(&downstream);
            scheduler.schedule(
                duration,
                Box::new(move || {
                    let latest = {
                        let mut state = state.lock();
                        state.window_open = false;
                        state.latest.take()
                    };
                    if let Some(latest) = latest {
                        downstream(latest);
                    }
                }),
            );
            trace!("throttle_time: window opened");
        })
    }
}

/// `throttle_time` as a chaining method on [`Pipe`].
pub trait ThrottleExt<T: StreamValue> {
    /// See [`throttle_time`].
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    #[must_use]
    fn throttle_time(self, duration: Duration) -> Pipe<T>;

    /// See [`throttle_time_with`].
    #[must_use]
    fn throttle_time_with<S: Scheduler>(self, duration: Duration, scheduler: S) -> Pipe<T>;
}

impl<T: StreamValue> ThrottleExt<T> for Pipe<T> {
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn throttle_time(self, duration: Duration) -> Pipe<T> {
        self.through(throttle_time(duration))
    }

    fn throttle_time_with<S: Scheduler>(self, duration: Duration, scheduler: S) -> Pipe<T> {
        self.through(throttle_time_with(duration, scheduler))
    }
}
