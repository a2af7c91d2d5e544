// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Operator;
use parking_lot::Mutex;
use rill_core::{StreamValue, Subscription};
use std::sync::Arc;

/// Operator returned by [`distinct_until_changed`] and [`distinct_until_changed_by`].
///
/// Holds the last forwarded value. A new value is forwarded when the comparator says
/// it differs from that value; the very first value is always forwarded.
pub struct DistinctUntilChanged<T, C> {
    same: Arc<C>,
    last: Arc<Mutex<Option<T>>>,
}

/// Comparator used by [`distinct_until_changed`].
pub type Equality<T> = fn(&T, &T) -> bool;

fn equals<T: PartialEq>(previous: &T, next: &T) -> bool {
    previous == next
}

/// Suppresses consecutive duplicates, compared with `PartialEq`.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, Stream};
/// use rill_stream::{distinct_until_changed, pipe};
/// use std::sync::{Arc, Mutex};
///
/// let source = Stream::<bool>::new();
/// let changes = pipe(source.clone()).through(distinct_until_changed());
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// changes.subscribe_fn(move |value| sink.lock().unwrap().push(value));
///
/// for value in [true, true, true, false, false, true] {
///     source.publish(value);
/// }
/// assert_eq!(*seen.lock().unwrap(), vec![true, false, true]);
/// ```
#[must_use]
pub fn distinct_until_changed<T>() -> DistinctUntilChanged<T, Equality<T>>
where
    T: StreamValue + PartialEq,
{
    distinct_until_changed_by(equals::<T> as Equality<T>)
}

/// Suppresses consecutive values for which `same(previous, next)` returns `true`.
pub fn distinct_until_changed_by<T, C>(same: C) -> DistinctUntilChanged<T, C>
where
    T: StreamValue,
    C: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    DistinctUntilChanged {
        same: Arc::new(same),
        last: Arc::new(Mutex::new(None)),
    }
}

impl<T, C> Operator for DistinctUntilChanged<T, C>
where
    T: StreamValue,
    C: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    type Input = T;
    type Output = T;

    fn apply(&self, downstream: Subscription<T>) -> Subscription<T> {
        let same = Arc::clone(&self.same);
        let last = Arc::clone(&self.last);
        Arc::new(move |next| {
            let previous = last.lock().clone();
            let changed = previous.map_or(true, |previous| !same(&previous, &next));
            if changed {
                *last.lock() = Some(next.clone());
                downstream(next);
            }
        })
    }
}
