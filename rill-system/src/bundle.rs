// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Name-keyed bundles of stream handles.

use core::any::{type_name, Any};
use core::fmt;
use rill_core::{Result, RillError, StatefulStream, Stream, StreamValue};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A dynamic bundle: stream handles stored under names and fetched with a typed
/// lookup.
///
/// Prefer a plain struct as the bundle type when the set of streams is fixed; a
/// `Bundle` suits systems assembled from data.
///
/// ```
/// use rill_core::{Publisher, StatefulStream, Stream};
/// use rill_system::Bundle;
///
/// # fn main() -> rill_core::Result<()> {
/// let bundle = Bundle::new()
///     .with("clicks", Stream::<()>::new())
///     .with("count", StatefulStream::new(0_u32));
///
/// bundle.stateful::<u32>("count")?.publish(3);
/// assert_eq!(bundle.stateful::<u32>("count")?.value(), 3);
/// assert!(bundle.stream::<u32>("clicks").is_err());
/// assert!(bundle.contains("clicks"));
/// assert_eq!(bundle.len(), 2);
/// assert!(Bundle::new().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Bundle {
    entries: BTreeMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Bundle {
    /// An empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `handle` under `name`, builder style.
    #[must_use]
    pub fn with<H>(mut self, name: impl Into<String>, handle: H) -> Self
    where
        H: Clone + Send + Sync + 'static,
    {
        self.insert(name, handle);
        self
    }

    /// Adds `handle` under `name`, replacing any previous entry.
    pub fn insert<H>(&mut self, name: impl Into<String>, handle: H)
    where
        H: Clone + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Arc::new(handle));
    }

    /// Returns a clone of the handle stored under `name`.
    ///
    /// # Errors
    ///
    /// [`RillError::MissingStream`] if nothing is stored under `name`,
    /// [`RillError::StreamTypeMismatch`] if the entry is not an `H`.
    pub fn get<H>(&self, name: &str) -> Result<H>
    where
        H: Clone + 'static,
    {
        self.entries
            .get(name)
            .ok_or_else(|| RillError::missing_stream(name))?
            .downcast_ref::<H>()
            .cloned()
            .ok_or_else(|| RillError::type_mismatch(name, type_name::<H>()))
    }

    /// Typed lookup of a [`Stream`].
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn stream<T: StreamValue>(&self, name: &str) -> Result<Stream<T>> {
        self.get(name)
    }

    /// Typed lookup of a [`StatefulStream`].
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn stateful<T: StreamValue>(&self, name: &str) -> Result<StatefulStream<T>> {
        self.get(name)
    }

    /// Returns `true` if an entry is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entry names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bundle holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
