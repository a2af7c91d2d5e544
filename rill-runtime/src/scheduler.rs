// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Debug};
use core::time::Duration;
use futures::future::AbortHandle;

/// Deferred work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send>;

/// Runs tasks after a delay.
///
/// Implementations must not run `task` synchronously inside `schedule`.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Schedules `task` to run once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask;
}

/// Handle to a task submitted to a [`Scheduler`].
///
/// Cancelling is idempotent and has no effect once the task has run.
#[derive(Clone)]
pub struct ScheduledTask {
    handle: AbortHandle,
}

impl ScheduledTask {
    /// Wraps the abort handle of a spawned or queued task.
    pub fn new(handle: AbortHandle) -> Self {
        Self { handle }
    }

    /// Prevents the task from running if it has not run yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
