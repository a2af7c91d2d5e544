// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bound shared by every value that flows through a stream.

/// Requirements for values published through streams, operators and combinators.
///
/// Values are cloned once per subscriber on delivery, and handles can be moved
/// across threads, hence `Clone + Send + Sync + 'static`.
///
/// # Example
///
/// ```rust
/// # use rill_core::StreamValue;
/// fn takes_value<T: StreamValue>(value: T) -> T {
///     value.clone()
/// }
/// assert_eq!(takes_value(3), 3);
/// ```
pub trait StreamValue: Clone + Send + Sync + 'static {}

/// Blanket implementation for all types satisfying the requirements.
impl<T> StreamValue for T where T: Clone + Send + Sync + 'static {}
