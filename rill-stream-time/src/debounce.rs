// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use core::time::Duration;
use parking_lot::Mutex;
use rill_core::{StreamValue, Subscription};
use rill_runtime::{ScheduledTask, Scheduler};
use rill_stream::{Operator, Pipe};
use std::sync::Arc;

/// Operator returned by [`debounce_time`] and [`debounce_time_with`].
#[derive(Debug, Clone)]
pub struct DebounceTime<T, S> {
    duration: Duration,
    scheduler: S,
    _marker: PhantomData<fn(T)>,
}

struct DebounceState {
    generation: u64,
    pending: Option<ScheduledTask>,
}

/// Emits a value only after `duration` has passed without another value.
///
/// Every value cancels the task scheduled by the previous one and schedules its own.
/// Only the last value of a burst reaches downstream, once, `duration` after it
/// arrived. Input spaced closer than `duration` keeps postponing the output
/// indefinitely.
///
/// Each subscription to the pipe gets its own timer.
///
/// Uses the [`DefaultScheduler`](rill_runtime::DefaultScheduler), so values must be
/// published from inside the matching runtime.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, Stream};
/// use rill_stream::pipe;
/// use rill_stream_time::debounce_time;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let query = Stream::<&str>::new();
/// let settled = pipe(query.clone()).through(debounce_time(Duration::from_millis(300)));
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// settled.subscribe_fn(move |text| sink.lock().unwrap().push(text));
///
/// query.publish("r");
/// query.publish("ri");
/// query.publish("rill");
/// tokio::time::sleep(Duration::from_millis(301)).await;
///
/// assert_eq!(*seen.lock().unwrap(), vec!["rill"]);
/// # }
/// ```
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
#[must_use]
pub fn debounce_time<T>(duration: Duration) -> DebounceTime<T, rill_runtime::DefaultScheduler> {
    debounce_time_with(duration, rill_runtime::DefaultScheduler::default())
}

/// [`debounce_time`] on an explicit scheduler.
pub fn debounce_time_with<T, S: Scheduler>(duration: Duration, scheduler: S) -> DebounceTime<T, S> {
    DebounceTime {
        duration,
        scheduler,
        _marker: PhantomData,
    }
}

impl<T: StreamValue, S: Scheduler> Operator for DebounceTime<T, S> {
    type Input = T;
    type Output = T;

    fn apply(&self, downstream: Subscription<T>) -> Subscription<T> {
        let state = Arc::new(Mutex::new(DebounceState {
            generation: 0,
            pending: None,
        }));
        let duration = self.duration;
        let scheduler = self.scheduler.clone();

        Arc::new(move |value: T| {
            let generation = {
                let mut state = state.lock();
                state.generation = state.generation.wrapping_add(1);
                if let Some(previous) = state.pending.take() {
                    previous.cancel();
                }
                state.generation
            };

            let task = {
                let state = Arc::clone(&state);
                let downstream = Arc::clone(&downstream);
                scheduler.schedule(
                    duration,
                    Box::new(move || {
                        {
                            let mut state = state.lock();
                            if state.generation != generation {
                                return;
                            }
                            state.pending = None;
                        }
                        downstream(value);
                    }),
                )
            };
            trace!("debounce_time: scheduled generation {}", generation);

            let mut state = state.lock();
            if state.generation == generation {
                state.pending = Some(task);
            } else {
                task.cancel();
            }
        })
    }
}

/// `debounce_time` as a chaining method on [`Pipe`].
pub trait DebounceExt<T: StreamValue> {
    /// See [`debounce_time`].
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    #[must_use]
    fn debounce_time(self, duration: Duration) -> Pipe<T>;

    /// See [`debounce_time_with`].
    #[must_use]
    fn debounce_time_with<S: Scheduler>(self, duration: Duration, scheduler: S) -> Pipe<T>;
}

impl<T: StreamValue> DebounceExt<T> for Pipe<T> {
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn debounce_time(self, duration: Duration) -> Pipe<T> {
        self.through(debounce_time(duration))
    }

    fn debounce_time_with<S: Scheduler>(self, duration: Duration, scheduler: S) -> Pipe<T> {
        self.through(debounce_time_with(duration, scheduler))
    }
}
