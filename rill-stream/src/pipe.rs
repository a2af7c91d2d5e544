// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Derived emitters built by stacking operators on a source.
//!
//! A [`Pipe`] does no work until it is subscribed: each subscription wraps the
//! subscriber with the operators (last operator first) and subscribes the result on
//! the source. Two subscriptions to one pipe therefore mean two registrations on the
//! source, both running through the same operator instances.
//!
//! ```
//! use rill_core::{EmitterExt, Publisher, Stream};
//! use rill_stream::pipe;
//! use std::sync::{Arc, Mutex};
//!
//! let source = Stream::<i32>::new();
//! let labels = pipe(source.clone())
//!     .filter(|value| *value > 0)
//!     .map(|value| format!("#{value}"));
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! labels.subscribe_fn(move |label| sink.lock().unwrap().push(label));
//!
//! source.publish(-1);
//! source.publish(7);
//! assert_eq!(*seen.lock().unwrap(), vec!["#7".to_string()]);
//! ```

use crate::operators::{self, distinct_until_changed::Equality};
use crate::{
    DistinctUntilChanged, Filter, LatestSources, Map, MapTo, Operator, Scan, Skip,
    WithLatestFrom,
};
use core::fmt;
use rill_core::{Emitter, Result, StreamValue, Subscription, Unsubscribe};
use std::sync::Arc;

type Connect<T> = Arc<dyn Fn(Subscription<T>) -> Unsubscribe + Send + Sync>;
type Reset = Arc<dyn Fn() + Send + Sync>;

/// An emitter that runs the values of a source through a chain of operators.
pub struct Pipe<T> {
    connect: Connect<T>,
    reset_source: Reset,
}

/// Starts a pipe over `source`.
///
/// Without operators the pipe forwards the source values unchanged; add operators
/// with [`Pipe::through`], the chaining methods, or the [`pipe!`](crate::pipe!) macro.
pub fn pipe<T, E>(source: E) -> Pipe<T>
where
    T: StreamValue,
    E: Emitter<T> + 'static,
{
    let source = Arc::new(source);
    let reset_source = {
        let source = Arc::clone(&source);
        Arc::new(move || source.reset())
    };

    Pipe {
        connect: Arc::new(move |subscription| source.subscribe(subscription)),
        reset_source,
    }
}

impl<T: StreamValue> Pipe<T> {
    /// Appends `operator` to the chain.
    pub fn through<O>(self, operator: O) -> Pipe<O::Output>
    where
        O: Operator<Input = T> + 'static,
    {
        let upstream = self.connect;
        Pipe {
            connect: Arc::new(move |downstream| upstream(operator.apply(downstream))),
            reset_source: self.reset_source,
        }
    }

    /// See [`operators::map`].
    pub fn map<U, F>(self, project: F) -> Pipe<U>
    where
        U: StreamValue,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.through::<Map<T, U, F>>(operators::map(project))
    }

    /// See [`operators::filter`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.through::<Filter<T, P>>(operators::filter(predicate))
    }

    /// See [`operators::map_to`].
    pub fn map_to<U: StreamValue>(self, value: U) -> Pipe<U> {
        self.through::<MapTo<T, U>>(operators::map_to(value))
    }

    /// See [`operators::scan`].
    pub fn scan<A, F>(self, reducer: F, seed: A) -> Pipe<A>
    where
        A: StreamValue,
        F: Fn(&A, T) -> A + Send + Sync + 'static,
    {
        self.through::<Scan<T, A, F>>(operators::scan(reducer, seed))
    }

    /// See [`operators::skip`].
    #[must_use]
    pub fn skip(self, count: usize) -> Self {
        self.through::<Skip<T>>(operators::skip(count))
    }

    /// See [`operators::distinct_until_changed`].
    #[must_use]
    pub fn distinct_until_changed(self) -> Self
    where
        T: PartialEq,
    {
        self.through::<DistinctUntilChanged<T, Equality<T>>>(
            operators::distinct_until_changed(),
        )
    }

    /// See [`operators::distinct_until_changed_by`].
    pub fn distinct_until_changed_by<C>(self, same: C) -> Self
    where
        C: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.through::<DistinctUntilChanged<T, C>>(operators::distinct_until_changed_by(same))
    }

    /// See [`operators::with_latest_from`].
    ///
    /// # Errors
    ///
    /// Fails when `sources` is a `Vec` larger than the readiness mask.
    pub fn with_latest_from<M, S>(self, sources: S) -> Result<Pipe<S::Prefixed<T>>>
    where
        S: LatestSources<M> + 'static,
        M: 'static,
    {
        Ok(self.through::<WithLatestFrom<T, M, S>>(operators::with_latest_from(sources)?))
    }
}

impl<T: StreamValue> Emitter<T> for Pipe<T> {
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        trace!("pipe: subscribing through to source");
        (self.connect)(subscription)
    }

    /// Resets the source the pipe was built on.
    fn reset(&self) {
        (self.reset_source)();
    }
}

impl<T> Clone for Pipe<T> {
    fn clone(&self) -> Self {
        Self {
            connect: Arc::clone(&self.connect),
            reset_source: Arc::clone(&self.reset_source),
        }
    }
}

impl<T> fmt::Debug for Pipe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe").finish_non_exhaustive()
    }
}

/// Builds a [`Pipe`] from a source and any number of operators.
///
/// `pipe!(source, a, b, c)` is `pipe(source).through(a).through(b).through(c)`.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, Stream};
/// use rill_stream::{map, pipe, skip};
/// use std::sync::{Arc, Mutex};
///
/// let source = Stream::<i32>::new();
/// let piped = pipe!(source.clone(), skip(1), map(|value: i32| value + 1));
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// piped.subscribe_fn(move |value| sink.lock().unwrap().push(value));
///
/// source.publish(1);
/// source.publish(2);
/// assert_eq!(*seen.lock().unwrap(), vec![3]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($source:expr $(,)?) => {
        $crate::pipe($source)
    };
    ($source:expr, $($operator:expr),+ $(,)?) => {
        $crate::pipe($source)$(.through($operator))+
    };
}
