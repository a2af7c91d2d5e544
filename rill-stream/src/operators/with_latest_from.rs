// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{LatestSources, Operator};
use core::marker::PhantomData;
use parking_lot::Mutex;
use rill_core::{Result, StreamValue, Subscription, Unsubscribe};
use std::sync::Arc;

/// Operator returned by [`with_latest_from`].
pub struct WithLatestFrom<T, M, S: LatestSources<M>> {
    latest: Arc<Mutex<Option<S::Output>>>,
    sources: Unsubscribe,
    _marker: PhantomData<fn(T, M, S)>,
}

/// Pairs every value with the latest values of `sources`.
///
/// The sources are subscribed immediately, when the operator is created, not when the
/// pipe is subscribed. A value arriving before every source has emitted at least once
/// is dropped. Afterwards each value is forwarded as `(value, latest...)`: flattened
/// for a tuple of sources, `(value, Vec<U>)` for a `Vec`.
///
/// Only the primary value triggers output; source emissions just update the latest
/// values.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, StatefulStream, Stream};
/// use rill_stream::{pipe, with_latest_from};
/// use std::sync::{Arc, Mutex};
///
/// # fn main() -> rill_core::Result<()> {
/// let clicks = Stream::<()>::new();
/// let name = StatefulStream::new("ada");
/// let age = Stream::<u32>::new();
///
/// let snapshots = pipe(clicks.clone()).through(with_latest_from((name.clone(), age.clone()))?);
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// snapshots.subscribe_fn(move |(_, name, age)| sink.lock().unwrap().push((name, age)));
///
/// clicks.publish(());
/// age.publish(36);
/// clicks.publish(());
/// assert_eq!(*seen.lock().unwrap(), vec![("ada", 36)]);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`RillError::TooManySources`](rill_core::RillError::TooManySources) for a
/// `Vec` of more than [`MAX_SOURCES`](crate::latest::MAX_SOURCES) emitters.
pub fn with_latest_from<T, M, S>(sources: S) -> Result<WithLatestFrom<T, M, S>>
where
    T: StreamValue,
    S: LatestSources<M>,
{
    let latest = Arc::new(Mutex::new(None));
    let sources = {
        let latest = Arc::clone(&latest);
        sources.observe(move |values| {
            *latest.lock() = Some(values);
        })?
    };
    trace!("with_latest_from: sources subscribed");

    Ok(WithLatestFrom {
        latest,
        sources,
        _marker: PhantomData,
    })
}

impl<T, M, S: LatestSources<M>> WithLatestFrom<T, M, S> {
    /// Unsubscribes from the sources; the last seen values stay in place.
    pub fn disconnect(&self) {
        self.sources.unsubscribe();
    }
}

impl<T, M, S> Operator for WithLatestFrom<T, M, S>
where
    T: StreamValue,
    S: LatestSources<M>,
{
    type Input = T;
    type Output = S::Prefixed<T>;

    fn apply(&self, downstream: Subscription<Self::Output>) -> Subscription<T> {
        let latest = Arc::clone(&self.latest);
        Arc::new(move |value| {
            let current = latest.lock().clone();
            if let Some(current) = current {
                downstream(S::prefix(value, current));
            }
        })
    }
}
