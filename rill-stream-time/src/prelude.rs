// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude bringing the timed chaining methods into scope.

pub use crate::{
    debounce_time_with, throttle_time_with, DebounceExt, DebounceTime, ThrottleExt,
    ThrottleTime,
};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::{debounce_time, throttle_time};

pub use rill_runtime::{ManualScheduler, Scheduler};
