// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rill_core::{StreamValue, Subscription};
use std::sync::Arc;

/// Collects every value delivered to its subscriptions, in delivery order.
///
/// Clones share the same buffer, so a clone can be moved into a closure while the
/// test keeps asserting on the original.
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: StreamValue> Recorder<T> {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A subscription appending to this recorder.
    pub fn subscription(&self) -> Subscription<T> {
        let values = Arc::clone(&self.values);
        Arc::new(move |value| values.lock().push(value))
    }

    pub fn record(&self, value: T) {
        self.values.lock().push(value);
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Returns the recorded values and empties the buffer.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock())
    }
}

impl<T: StreamValue> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}
