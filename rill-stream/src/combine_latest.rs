// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Latest-value combination of several emitters.
//!
//! [`combine_latest`] subscribes its sources when it is created and keeps their latest
//! values. Once each source has emitted at least once, every emission of any source
//! publishes the full combination. Subscribers arriving after that point first receive
//! the current combination, so a combination of stateful streams behaves like a
//! stateful stream of tuples.
//!
//! ```
//! use rill_core::{EmitterExt, Publisher, StatefulStream};
//! use rill_stream::combine_latest;
//! use std::sync::{Arc, Mutex};
//!
//! # fn main() -> rill_core::Result<()> {
//! let a = StatefulStream::new(0);
//! let b = StatefulStream::new(0);
//! let both = combine_latest!(a.clone(), b.clone())?;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! both.subscribe_fn(move |pair| sink.lock().unwrap().push(pair));
//!
//! a.publish(5);
//! b.publish(7);
//! assert_eq!(*seen.lock().unwrap(), vec![(0, 0), (5, 0), (5, 7)]);
//! # Ok(())
//! # }
//! ```

use crate::LatestSources;
use core::fmt;
use parking_lot::Mutex;
use rill_core::{Emitter, Publisher, Result, Stream, StreamValue, Subscription, Unsubscribe};
use std::sync::Arc;

/// An emitter of the latest values of a group of sources.
pub struct CombineLatest<T> {
    inner: Stream<T>,
    current: Arc<Mutex<Option<T>>>,
    sources: Unsubscribe,
}

/// Combines `sources`: a tuple of 2 to 8 emitters, or a `Vec` of same-typed emitters.
///
/// # Errors
///
/// Returns [`RillError::TooManySources`](rill_core::RillError::TooManySources) for a
/// `Vec` of more than [`MAX_SOURCES`](crate::latest::MAX_SOURCES) emitters.
pub fn combine_latest<M, S>(sources: S) -> Result<CombineLatest<S::Output>>
where
    S: LatestSources<M>,
{
    let inner = Stream::new();
    let current = Arc::new(Mutex::new(None));

    let sources = {
        let inner = inner.clone();
        let current = Arc::clone(&current);
        sources.observe(move |combined: S::Output| {
            *current.lock() = Some(combined.clone());
            inner.publish(combined);
        })?
    };
    trace!("combine_latest: sources subscribed");

    Ok(CombineLatest {
        inner,
        current,
        sources,
    })
}

impl<T: StreamValue> CombineLatest<T> {
    /// Returns the current combination, or `None` while some source has not emitted.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.current.lock().clone()
    }

    /// Stops tracking the sources. Subscribers stay registered but receive nothing
    /// new.
    pub fn disconnect(&self) {
        self.sources.unsubscribe();
    }
}

impl<T: StreamValue> Emitter<T> for CombineLatest<T> {
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        if let Some(current) = self.value() {
            subscription(current);
        }
        self.inner.subscribe(subscription)
    }

    fn reset(&self) {
        self.inner.reset();
    }
}

impl<T> Clone for CombineLatest<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            current: Arc::clone(&self.current),
            sources: self.sources.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CombineLatest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombineLatest")
            .field("current", &*self.current.lock())
            .field("inner", &self.inner)
            .finish()
    }
}

/// Combines 2 to 8 emitters into a tuple emitter. Shorthand for
/// `combine_latest((a, b, ...))`.
#[macro_export]
macro_rules! combine_latest {
    ($($source:expr),+ $(,)?) => {
        $crate::combine_latest(($($source,)+))
    };
}
