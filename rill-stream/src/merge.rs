// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateless fan-in of same-typed emitters.

use core::fmt;
use rill_core::{DynEmitter, Emitter, StreamValue, Subscription, Unsubscribe};
use std::sync::Arc;

/// An emitter forwarding the values of every source, see [`merge`].
pub struct Merge<T> {
    sources: Arc<[DynEmitter<T>]>,
}

/// Merges `sources` into one emitter.
///
/// Subscribing registers the same subscription on every source and returns a handle
/// that removes all of them. Values are delivered in the order they are published,
/// whichever source they come from. The merge holds no state, so
/// [`reset`](Emitter::reset) does nothing.
///
/// Use [`merge!`](crate::merge!) to mix emitters of different concrete types.
pub fn merge<T, E, I>(sources: I) -> Merge<T>
where
    T: StreamValue,
    E: Emitter<T> + 'static,
    I: IntoIterator<Item = E>,
{
    Merge {
        sources: sources
            .into_iter()
            .map(|source| Arc::new(source) as DynEmitter<T>)
            .collect(),
    }
}

impl<T: StreamValue> Merge<T> {
    /// Number of merged sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if nothing was merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<T: StreamValue> Emitter<T> for Merge<T> {
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        trace!("merge: subscribing to {} sources", self.sources.len());
        Unsubscribe::join(
            self.sources
                .iter()
                .map(|source| source.subscribe(Arc::clone(&subscription)))
                .collect::<Vec<_>>(),
        )
    }

    fn reset(&self) {}
}

impl<T> Clone for Merge<T> {
    fn clone(&self) -> Self {
        Self {
            sources: Arc::clone(&self.sources),
        }
    }
}

impl<T> fmt::Debug for Merge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Merge")
            .field("sources", &self.sources.len())
            .finish()
    }
}

#[doc(hidden)]
pub fn erase<T, E>(source: E) -> DynEmitter<T>
where
    T: StreamValue,
    E: Emitter<T> + 'static,
{
    Arc::new(source)
}

/// Merges emitters of possibly different concrete types.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, StatefulStream, Stream};
/// use rill_stream::{merge, pipe};
/// use std::sync::{Arc, Mutex};
///
/// let clicks = Stream::<i32>::new();
/// let presets = StatefulStream::new(0);
/// let merged = merge!(clicks.clone(), pipe(presets.clone()).map(|value| value * 100));
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// merged.subscribe_fn(move |value| sink.lock().unwrap().push(value));
///
/// clicks.publish(1);
/// presets.publish(2);
/// assert_eq!(*seen.lock().unwrap(), vec![0, 1, 200]);
/// ```
#[macro_export]
macro_rules! merge {
    ($($source:expr),+ $(,)?) => {
        $crate::merge(::std::vec![$($crate::merge::erase($source)),+])
    };
}
