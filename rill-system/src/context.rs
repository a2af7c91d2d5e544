// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Materialization of specs into bundles.

use crate::{SpecId, SystemSpec};
use core::any::Any;
use core::fmt;
use rill_core::Result;
use std::collections::HashMap;
use std::sync::Arc;

type Shared = Arc<dyn Any + Send + Sync>;

/// The singleton registry of one initialization.
///
/// Singleton specs are materialized once per context and every later visit gets the
/// same `Arc`. Non-singleton specs are built anew on every visit. Nothing is shared
/// between contexts.
#[derive(Default)]
pub struct InitContext {
    singletons: HashMap<SpecId, Shared>,
}

impl InitContext {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bundle of `spec`, building it (and its dependencies) if needed.
    ///
    /// # Errors
    ///
    /// Propagates the first constructor failure in the dependency tree.
    pub fn materialize<B>(&mut self, spec: &SystemSpec<B>) -> Result<Arc<B>>
    where
        B: Send + Sync + 'static,
    {
        let id = spec.id();
        if spec.is_singleton() {
            if let Some(bundle) = self.cached::<B>(id) {
                debug!("system {}: reusing singleton", id);
                return Ok(bundle);
            }
        }

        let bundle = Arc::new(spec.build(self)?);
        if spec.is_singleton() {
            self.singletons.insert(id, Arc::clone(&bundle) as Shared);
        }
        debug!(
            "system {}: materialized ({})",
            id,
            if spec.is_singleton() { "singleton" } else { "instance" }
        );
        Ok(bundle)
    }

    /// Number of singletons materialized so far.
    #[must_use]
    pub fn singleton_count(&self) -> usize {
        self.singletons.len()
    }

    fn cached<B: Send + Sync + 'static>(&self, id: SpecId) -> Option<Arc<B>> {
        let shared = Arc::clone(self.singletons.get(&id)?);
        shared.downcast::<B>().ok()
    }
}

impl fmt::Debug for InitContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitContext")
            .field("singletons", &self.singletons.len())
            .finish()
    }
}

/// Materializes `spec` and its whole dependency tree with a fresh [`InitContext`].
///
/// # Errors
///
/// Propagates the first constructor failure; nothing built so far is returned.
pub fn init<B: Send + Sync + 'static>(spec: &SystemSpec<B>) -> Result<Arc<B>> {
    InitContext::new().materialize(spec)
}
