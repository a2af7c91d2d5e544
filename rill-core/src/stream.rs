// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateless, multi-subscriber push dispatcher.
//!
//! A [`Stream`] presents both the input and the output end of a stream. Publishing
//! delivers the value synchronously to every subscriber, in subscription order, before
//! `publish` returns.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers do not receive past values.
//! - **Snapshot delivery**: the subscriber list is copied before delivery starts, so
//!   subscribing or unsubscribing from inside a subscriber only affects the next publish.
//! - **Lock-free callbacks**: no internal lock is held while subscribers run, so
//!   subscribers may re-enter the stream (subscribe, unsubscribe, publish).
//! - **Cheap to clone**: all clones share the same subscriber list.
//!
//! ## Example
//!
//! ```
//! use rill_core::{Emitter, EmitterExt, Publisher, Stream};
//! use std::sync::{Arc, Mutex};
//!
//! let stream = Stream::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let handle = stream.subscribe_fn(move |value| sink.lock().unwrap().push(value));
//!
//! stream.publish(1);
//! handle.unsubscribe();
//! stream.publish(2);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1]);
//! ```

use crate::{actions, Emitter, Publisher, StreamValue, Subscription, Unsubscribe};
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

type SubscriberId = u64;

struct Subscribers<T> {
    next_id: SubscriberId,
    entries: Vec<(SubscriberId, Subscription<T>)>,
}

/// A stateless push stream. See the [module documentation](mod@crate::stream).
pub struct Stream<T> {
    subscribers: Arc<Mutex<Subscribers<T>>>,
}

impl<T: StreamValue> Stream<T> {
    /// Creates a stream with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Subscribers {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Creates a stream that republishes every value emitted by `emitter`.
    pub fn from_emitter<E>(emitter: &E) -> Self
    where
        E: Emitter<T> + ?Sized,
    {
        let stream = Self::new();
        actions::connect(emitter, stream.clone());
        stream
    }

    /// Returns the number of currently registered subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().entries.len()
    }

    /// Returns `true` if both handles point at the same stream.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.subscribers, &other.subscribers)
    }

    fn snapshot(&self) -> Vec<Subscription<T>> {
        self.subscribers
            .lock()
            .entries
            .iter()
            .map(|(_, subscription)| Arc::clone(subscription))
            .collect()
    }
}

impl<T: StreamValue> Emitter<T> for Stream<T> {
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        let id = {
            let mut subscribers = self.subscribers.lock();
            let id = subscribers.next_id;
            subscribers.next_id += 1;
            subscribers.entries.push((id, subscription));
            id
        };
        trace!("stream: subscription {} registered", id);

        let subscribers = Arc::downgrade(&self.subscribers);
        Unsubscribe::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.lock().entries.retain(|(entry, _)| *entry != id);
                trace!("stream: subscription {} removed", id);
            }
        })
    }

    fn reset(&self) {
        self.subscribers.lock().entries.clear();
        trace!("stream: reset");
    }
}

impl<T: StreamValue> Publisher<T> for Stream<T> {
    fn publish(&self, value: T) {
        let snapshot = self.snapshot();
        if let Some((last, rest)) = snapshot.split_last() {
            for subscription in rest {
                subscription(value.clone());
            }
            last(value);
        }
    }
}

impl<T: StreamValue> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("subscribers", &self.subscribers.lock().entries.len())
            .finish()
    }
}
