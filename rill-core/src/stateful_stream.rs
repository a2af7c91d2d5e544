// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream that retains its last value and replays it to new subscribers.
//!
//! Stateful streams hold the state of a system: a current value always exists, it is
//! returned by [`StatefulStream::value`], and every new subscriber is called with it
//! before being registered for later values.
//!
//! ```
//! use rill_core::{EmitterExt, Publisher, StatefulStream};
//! use std::sync::{Arc, Mutex};
//!
//! let count = StatefulStream::new(5);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! count.subscribe_fn(move |value| sink.lock().unwrap().push(value));
//! count.publish(6);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![5, 6]);
//! assert_eq!(count.value(), 6);
//! ```

use crate::{actions, Emitter, Publisher, Stream, StreamValue, Subscription, Unsubscribe};
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

/// A [`Stream`] with a retained value. See the [module documentation](mod@crate::stateful_stream).
pub struct StatefulStream<T> {
    stream: Stream<T>,
    value: Arc<Mutex<T>>,
}

impl<T: StreamValue> StatefulStream<T> {
    /// Creates a stateful stream holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            stream: Stream::new(),
            value: Arc::new(Mutex::new(initial)),
        }
    }

    /// Creates a stateful stream holding `initial` and tracking every value emitted by
    /// `emitter` from now on.
    pub fn from_emitter<E>(emitter: &E, initial: T) -> Self
    where
        E: Emitter<T> + ?Sized,
    {
        let stream = Self::new(initial);
        actions::connect(emitter, stream.clone());
        stream
    }

    /// Returns a copy of the retained value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value.lock().clone()
    }

    /// Returns the number of currently registered subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.stream.subscriber_count()
    }

    /// Returns `true` if both handles point at the same stateful stream.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl<T: StreamValue> Emitter<T> for StatefulStream<T> {
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        let current = self.value();
        subscription(current);
        self.stream.subscribe(subscription)
    }

    /// Drops every subscriber; the retained value is kept.
    fn reset(&self) {
        self.stream.reset();
    }
}

impl<T: StreamValue> Publisher<T> for StatefulStream<T> {
    fn publish(&self, value: T) {
        *self.value.lock() = value.clone();
        self.stream.publish(value);
    }
}

impl<T> Clone for StatefulStream<T> {
    fn clone(&self) -> Self {
        Self {
            stream: self.stream.clone(),
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StatefulStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulStream")
            .field("value", &*self.value.lock())
            .field("stream", &self.stream)
            .finish()
    }
}
