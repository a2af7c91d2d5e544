// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::common::delayed;
use crate::scheduler::{ScheduledTask, Scheduler, Task};
use core::time::Duration;

/// Spawns delayed tasks on smol's global executor.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmolScheduler;

impl Scheduler for SmolScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let sleep = async move {
            async_io::Timer::after(delay).await;
        };
        let (future, scheduled) = delayed(sleep, task);
        smol::spawn(future).detach();
        scheduled
    }
}
