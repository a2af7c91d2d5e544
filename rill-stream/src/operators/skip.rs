// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Operator;
use core::marker::PhantomData;
use parking_lot::Mutex;
use rill_core::{StreamValue, Subscription};
use std::sync::Arc;

/// Operator returned by [`skip`].
pub struct Skip<T> {
    remaining: Arc<Mutex<usize>>,
    _marker: PhantomData<fn(T)>,
}

/// Drops the first `count` values, then forwards everything.
///
/// The counter is shared by all subscriptions to the same pipe.
#[must_use]
pub fn skip<T>(count: usize) -> Skip<T> {
    Skip {
        remaining: Arc::new(Mutex::new(count)),
        _marker: PhantomData,
    }
}

impl<T: StreamValue> Operator for Skip<T> {
    type Input = T;
    type Output = T;

    fn apply(&self, downstream: Subscription<T>) -> Subscription<T> {
        let remaining = Arc::clone(&self.remaining);
        Arc::new(move |value| {
            let forward = {
                let mut remaining = remaining.lock();
                if *remaining > 0 {
                    *remaining -= 1;
                    false
                } else {
                    true
                }
            };
            if forward {
                downstream(value);
            }
        })
    }
}
