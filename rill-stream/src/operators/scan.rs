// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Operator;
use core::marker::PhantomData;
use parking_lot::Mutex;
use rill_core::{StreamValue, Subscription};
use std::sync::Arc;

/// Operator returned by [`scan`].
pub struct Scan<T, A, F> {
    reducer: Arc<F>,
    accumulator: Arc<Mutex<A>>,
    _marker: PhantomData<fn(T)>,
}

/// Folds every value into an accumulator starting at `seed` and forwards each new
/// accumulator.
///
/// The accumulator belongs to the operator, so all subscriptions to the same pipe
/// advance one shared running total.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, Stream};
/// use rill_stream::{pipe, scan};
/// use std::sync::{Arc, Mutex};
///
/// let source = Stream::<i32>::new();
/// let totals = pipe(source.clone()).through(scan(|total: &i32, value: i32| total + value, 0));
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// totals.subscribe_fn(move |total| sink.lock().unwrap().push(total));
///
/// source.publish(1);
/// source.publish(2);
/// source.publish(3);
/// assert_eq!(*seen.lock().unwrap(), vec![1, 3, 6]);
/// ```
pub fn scan<T, A, F>(reducer: F, seed: A) -> Scan<T, A, F>
where
    A: StreamValue,
    F: Fn(&A, T) -> A + Send + Sync + 'static,
{
    Scan {
        reducer: Arc::new(reducer),
        accumulator: Arc::new(Mutex::new(seed)),
        _marker: PhantomData,
    }
}

impl<T, A, F> Operator for Scan<T, A, F>
where
    T: StreamValue,
    A: StreamValue,
    F: Fn(&A, T) -> A + Send + Sync + 'static,
{
    type Input = T;
    type Output = A;

    fn apply(&self, downstream: Subscription<A>) -> Subscription<T> {
        let reducer = Arc::clone(&self.reducer);
        let accumulator = Arc::clone(&self.accumulator);
        Arc::new(move |value| {
            let current = accumulator.lock().clone();
            let next = reducer(&current, value);
            *accumulator.lock() = next.clone();
            downstream(next);
        })
    }
}
