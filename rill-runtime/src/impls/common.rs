// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{ScheduledTask, Task};
use core::future::Future;
use futures::future::abortable;

/// Wraps `sleep` followed by `task` into an abortable future for spawn-based runtimes.
pub(crate) fn delayed<S>(sleep: S, task: Task) -> (impl Future<Output = ()> + Send, ScheduledTask)
where
    S: Future<Output = ()> + Send + 'static,
{
    let (future, handle) = abortable(async move {
        sleep.await;
        task();
    });

    let future = async move {
        if future.await.is_err() {
            trace!("scheduler: task aborted before it ran");
        }
    };

    (future, ScheduledTask::new(handle))
}
