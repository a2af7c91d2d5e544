// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The two capabilities of a stream: the output end ([`Emitter`]) and the input end
//! ([`Publisher`]).
//!
//! Leaves such as [`Stream`](crate::Stream) implement both. Derived emitters (pipes,
//! merges, combinations) only implement [`Emitter`], so publishing into them does not
//! type-check.

use crate::{actions, StreamValue, Subscription, Unsubscribe};
use std::sync::Arc;

/// Output end of a stream: subscriptions are bound to emitters.
pub trait Emitter<T>: Send + Sync {
    /// Registers `subscription` and returns the handle that removes it.
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe;

    /// Clears the subscriptions held by this emitter.
    ///
    /// What "clearing" means depends on the emitter: leaves drop all subscribers,
    /// pipes reset their source, merges hold nothing and ignore the call.
    fn reset(&self);
}

/// Input end of a stream: values are published into publishers.
pub trait Publisher<T>: Send + Sync {
    /// Pushes `value` to every current subscriber, synchronously.
    fn publish(&self, value: T);
}

/// A type-erased, shareable emitter.
pub type DynEmitter<T> = Arc<dyn Emitter<T>>;

impl<T, E> Emitter<T> for Arc<E>
where
    E: Emitter<T> + ?Sized,
{
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        (**self).subscribe(subscription)
    }

    fn reset(&self) {
        (**self).reset();
    }
}

impl<T, E> Emitter<T> for Box<E>
where
    E: Emitter<T> + ?Sized,
{
    fn subscribe(&self, subscription: Subscription<T>) -> Unsubscribe {
        (**self).subscribe(subscription)
    }

    fn reset(&self) {
        (**self).reset();
    }
}

impl<T, P> Publisher<T> for Arc<P>
where
    P: Publisher<T> + ?Sized,
{
    fn publish(&self, value: T) {
        (**self).publish(value);
    }
}

/// Convenience methods available on every emitter.
pub trait EmitterExt<T: StreamValue>: Emitter<T> {
    /// Subscribes a plain closure.
    fn subscribe_fn<F>(&self, f: F) -> Unsubscribe
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(f))
    }

    /// Forwards every emitted value into `publisher`. See [`actions::connect`].
    fn connect_to<P>(&self, publisher: P) -> Unsubscribe
    where
        P: Publisher<T> + 'static,
    {
        actions::connect(self, publisher)
    }

    /// Delivers at most one value to `f`. See [`actions::handle_next`].
    fn handle_next<F>(&self, f: F) -> Unsubscribe
    where
        F: FnOnce(T) + Send + 'static,
    {
        actions::handle_next(self, f)
    }

    /// Erases the concrete emitter type, e.g. to mix streams and pipes in one `Vec`.
    fn into_dyn(self) -> DynEmitter<T>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<T: StreamValue, E: Emitter<T> + ?Sized> EmitterExt<T> for E {}
