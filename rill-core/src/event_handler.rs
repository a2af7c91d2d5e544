// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-slot adapter over an emitter.
//!
//! Event handlers suit event properties of UI components: only one subscription is
//! live at a time. Subscribing again replaces the previous subscription, and passing
//! `None` just clears the slot.

use crate::{DynEmitter, Emitter, StreamValue, Subscription, Unsubscribe};
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

/// An emitter allowing at most one live subscription.
pub struct EventHandler<T> {
    source: DynEmitter<T>,
    current: Arc<Mutex<Option<Unsubscribe>>>,
}

impl<T: StreamValue> EventHandler<T> {
    /// Wraps `source` into a single-subscriber slot.
    pub fn new<E>(source: E) -> Self
    where
        E: Emitter<T> + 'static,
    {
        Self {
            source: Arc::new(source),
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the current subscription with `subscription`.
    ///
    /// The previous subscription (if any) is removed first. With `None` the slot is left
    /// empty and a no-op handle is returned.
    pub fn handle(&self, subscription: Option<Subscription<T>>) -> Unsubscribe {
        self.detach();
        match subscription {
            Some(subscription) => {
                let handle = self.source.subscribe(subscription);
                // A replay may have re-entered `handle` and filled the slot meanwhile.
                let displaced = self.current.lock().replace(handle.clone());
                if let Some(displaced) = displaced {
                    displaced.unsubscribe();
                }
                handle
            }
            None => Unsubscribe::noop(),
        }
    }

    /// Removes the current subscription, if any.
    pub fn detach(&self) {
        let previous = self.current.lock().take();
        if let Some(previous) = previous {
            previous.unsubscribe();
        }
    }

    /// Returns `true` while a subscription occupies the slot.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.current
            .lock()
            .as_ref()
            .is_some_and(Unsubscribe::is_active)
    }
}

impl<T: StreamValue> Emitter<T> for EventHandler<T> {
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        self.handle(Some(subscription))
    }

    fn reset(&self) {
        self.detach();
    }
}

impl<T> Clone for EventHandler<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            current: Arc::clone(&self.current),
        }
    }
}

impl<T> fmt::Debug for EventHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("attached", &self.current.lock().is_some())
            .finish()
    }
}
