// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Procedural surface over the stream capabilities.
//!
//! Everything here is a thin function over [`Emitter`], [`Publisher`] and the leaf
//! constructors, for callers who prefer `publish(&stream, 1)` over method syntax.

use crate::{
    EventHandler, Emitter, Publisher, StatefulStream, Stream, StreamValue, Subscription,
    Unsubscribe,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Creates a stateless [`Stream`].
#[must_use]
pub fn stream<T: StreamValue>() -> Stream<T> {
    Stream::new()
}

/// Creates a [`StatefulStream`] holding `initial`.
pub fn stateful_stream<T: StreamValue>(initial: T) -> StatefulStream<T> {
    StatefulStream::new(initial)
}

/// Creates an [`EventHandler`] over `emitter`.
pub fn event_handler<T, E>(emitter: E) -> EventHandler<T>
where
    T: StreamValue,
    E: Emitter<T> + 'static,
{
    EventHandler::new(emitter)
}

/// Subscribes `f` to the values of `emitter`.
pub fn subscribe<T, E, F>(emitter: &E, f: F) -> Unsubscribe
where
    T: StreamValue,
    E: Emitter<T> + ?Sized,
    F: Fn(T) + Send + Sync + 'static,
{
    emitter.subscribe(Arc::new(f))
}

/// Publishes `value` into `publisher`.
pub fn publish<T, P>(publisher: &P, value: T)
where
    P: Publisher<T> + ?Sized,
{
    publisher.publish(value);
}

/// Resets `emitter`. See [`Emitter::reset`].
pub fn reset<T, E>(emitter: &E)
where
    E: Emitter<T> + ?Sized,
{
    emitter.reset();
}

/// Returns the value currently retained by `stream`.
pub fn get_value<T: StreamValue>(stream: &StatefulStream<T>) -> T {
    stream.value()
}

/// Publishes every value emitted by `emitter` into `publisher`.
pub fn connect<T, E, P>(emitter: &E, publisher: P) -> Unsubscribe
where
    T: StreamValue,
    E: Emitter<T> + ?Sized,
    P: Publisher<T> + 'static,
{
    emitter.subscribe(Arc::new(move |value| publisher.publish(value)))
}

/// Delivers at most one value from `emitter` to `f`, then unsubscribes.
///
/// Emitters that replay synchronously on subscribe (stateful streams, ready
/// combinations) deliver the replayed value; the registration is removed before this
/// function returns.
pub fn handle_next<T, E, F>(emitter: &E, f: F) -> Unsubscribe
where
    T: StreamValue,
    E: Emitter<T> + ?Sized,
    F: FnOnce(T) + Send + 'static,
{
    let callback = Arc::new(Mutex::new(Some(f)));
    let registration: Arc<Mutex<Option<Unsubscribe>>> = Arc::new(Mutex::new(None));

    let subscription: Subscription<T> = {
        let callback = Arc::clone(&callback);
        let registration = Arc::clone(&registration);
        Arc::new(move |value| {
            let Some(f) = callback.lock().take() else {
                return;
            };
            let handle = registration.lock().take();
            if let Some(handle) = handle {
                handle.unsubscribe();
            }
            f(value);
        })
    };

    let handle = emitter.subscribe(subscription);
    *registration.lock() = Some(handle.clone());
    if callback.lock().is_none() {
        handle.unsubscribe();
    }
    handle
}
