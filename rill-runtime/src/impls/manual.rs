// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A virtual-clock scheduler driven by the caller.
//!
//! Nothing runs until [`ManualScheduler::advance`] is called; due tasks then run on
//! the calling thread, in due-time order (ties in scheduling order). Useful for
//! single-threaded hosts without an async runtime, and for deterministic tests.

use crate::scheduler::{ScheduledTask, Scheduler, Task};
use core::fmt;
use core::time::Duration;
use futures::future::AbortHandle;
use parking_lot::Mutex;
use std::sync::Arc;

struct Pending {
    due: Duration,
    seq: u64,
    handle: AbortHandle,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl ManualState {
    fn take_due(&mut self, until: Duration) -> Option<Pending> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= until)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)?;
        Some(self.pending.remove(index))
    }
}

/// Scheduler whose clock only moves when [`advance`](Self::advance) is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    /// A scheduler with its clock at zero and no pending tasks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of tasks waiting to run, cancelled ones excluded.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state
            .lock()
            .pending
            .iter()
            .filter(|pending| !pending.handle.is_aborted())
            .count()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks scheduled by a running task are picked up in the same call if they fall
    /// due before the target time.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;

        loop {
            let next = {
                let mut state = self.state.lock();
                let next = state.take_due(target);
                if let Some(pending) = &next {
                    state.now = pending.due;
                }
                next
            };

            let Some(pending) = next else {
                break;
            };

            if pending.handle.is_aborted() {
                trace!("manual scheduler: skipping cancelled task {}", pending.seq);
                continue;
            }
            (pending.task)();
        }

        self.state.lock().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let (handle, _registration) = AbortHandle::new_pair();
        let mut state = self.state.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        let due = state.now + delay;
        state.pending.push(Pending {
            due,
            seq,
            handle: handle.clone(),
            task,
        });
        ScheduledTask::new(handle)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.pending.len())
            .finish()
    }
}
