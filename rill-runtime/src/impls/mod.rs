// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[allow(dead_code)]
mod common;
pub mod manual;
#[cfg(feature = "runtime-smol")]
pub mod smol;
#[cfg(feature = "runtime-tokio")]
pub mod tokio;
