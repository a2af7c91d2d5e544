// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscriptions and the handles that remove them.

use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

/// A callback bound to an emitter, invoked with every emitted value.
pub type Subscription<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Wraps a closure into a [`Subscription`].
pub fn subscription<T, F>(f: F) -> Subscription<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    Arc::new(f)
}

type Teardown = Box<dyn FnOnce() + Send>;

/// Handle returned by every subscribe-like operation.
///
/// Calling [`unsubscribe`](Self::unsubscribe) removes exactly the registration it was
/// created for. The first call tears down, any later call is a no-op. Clones share the
/// same teardown, so unsubscribing through one clone disarms all of them.
///
/// Dropping the handle does **not** unsubscribe: subscriptions live until they are
/// removed explicitly or their emitter is reset.
#[derive(Clone)]
pub struct Unsubscribe {
    teardown: Arc<Mutex<Option<Teardown>>>,
}

impl Unsubscribe {
    /// Creates a handle that runs `teardown` on the first unsubscribe.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            teardown: Arc::new(Mutex::new(Some(Box::new(teardown)))),
        }
    }

    /// A handle with nothing to tear down.
    #[must_use]
    pub fn noop() -> Self {
        Self {
            teardown: Arc::new(Mutex::new(None)),
        }
    }

    /// Combines several handles into one that unsubscribes all of them, in order.
    pub fn join<I>(handles: I) -> Self
    where
        I: IntoIterator<Item = Unsubscribe>,
    {
        let handles: Vec<Unsubscribe> = handles.into_iter().collect();
        Self::new(move || {
            for handle in handles {
                handle.unsubscribe();
            }
        })
    }

    /// Removes the subscription. Idempotent.
    pub fn unsubscribe(&self) {
        let teardown = self.teardown.lock().take();
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    /// Returns `true` until the handle has been used.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.teardown.lock().is_some()
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("active", &self.is_active())
            .finish()
    }
}
