// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::common::delayed;
use crate::scheduler::{ScheduledTask, Scheduler, Task};
use core::time::Duration;

/// Spawns delayed tasks on the current tokio runtime.
///
/// Tasks scheduled outside a tokio runtime never run; the condition is logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let sleep = async move {
            tokio::time::sleep(delay).await;
        };
        let (future, scheduled) = delayed(sleep, task);
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(future);
            }
            Err(error) => {
                warn!("tokio scheduler: no runtime to run delayed task: {}", error);
                scheduled.cancel();
            }
        }
        scheduled
    }
}
