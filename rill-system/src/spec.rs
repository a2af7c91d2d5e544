// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! System specifications: how to build a bundle and what it depends on.

use crate::{Dependencies, InitContext};
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use rill_core::Result;
use std::sync::Arc;

/// Identity of a [`SystemSpec`], unique per [`system`] / [`try_system`] call.
pub type SpecId = u64;

static NEXT_SPEC_ID: AtomicU64 = AtomicU64::new(0);

fn next_spec_id() -> SpecId {
    NEXT_SPEC_ID.fetch_add(1, Ordering::Relaxed)
}

type Build<B> = Arc<dyn Fn(&mut InitContext) -> Result<B> + Send + Sync>;

/// Options controlling how a spec is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemOptions {
    /// Materialize at most once per [`init`](crate::init) call and share the bundle
    /// between every dependent.
    pub singleton: bool,
}

impl Default for SystemOptions {
    fn default() -> Self {
        Self { singleton: true }
    }
}

/// A recipe for a system bundle.
///
/// Specs are immutable and cheap to clone; clones share the same identity. A spec can
/// only list specs that already exist as dependencies, so dependency graphs are
/// acyclic by construction.
pub struct SystemSpec<B> {
    id: SpecId,
    options: SystemOptions,
    build: Build<B>,
}

/// Defines a system from an infallible constructor.
///
/// `dependencies` is a tuple of specs (possibly `()`); the constructor receives the
/// tuple of their bundles, each as an `Arc`.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, StatefulStream, Stream};
/// use rill_stream::pipe;
/// use rill_system::{init, system};
/// use std::sync::Arc;
///
/// # fn main() -> rill_core::Result<()> {
/// let counter = system(|()| Stream::<u32>::new(), ());
/// let doubler = system(
///     |(counter,)| {
///         let doubled = StatefulStream::new(0);
///         pipe(Arc::clone(&counter))
///             .map(|value| value * 2)
///             .connect_to(doubled.clone());
///         (counter, doubled)
///     },
///     (counter,),
/// );
///
/// let bundle = init(&doubler)?;
/// let (counter, doubled) = &*bundle;
/// counter.publish(21);
/// assert_eq!(doubled.value(), 42);
/// # Ok(())
/// # }
/// ```
pub fn system<B, D, F>(constructor: F, dependencies: D) -> SystemSpec<B>
where
    B: Send + Sync + 'static,
    D: Dependencies,
    F: Fn(D::Bundles) -> B + Send + Sync + 'static,
{
    try_system(move |bundles| Ok(constructor(bundles)), dependencies)
}

/// Defines a system from a fallible constructor.
///
/// A constructor error aborts the surrounding [`init`](crate::init) call.
pub fn try_system<B, D, F>(constructor: F, dependencies: D) -> SystemSpec<B>
where
    B: Send + Sync + 'static,
    D: Dependencies,
    F: Fn(D::Bundles) -> Result<B> + Send + Sync + 'static,
{
    SystemSpec {
        id: next_spec_id(),
        options: SystemOptions::default(),
        build: Arc::new(move |context: &mut InitContext| {
            let bundles = dependencies.materialize(context)?;
            constructor(bundles)
        }),
    }
}

impl<B> SystemSpec<B> {
    /// Returns this spec's identity.
    #[must_use]
    pub const fn id(&self) -> SpecId {
        self.id
    }

    /// Returns `true` if the spec is materialized once per `init` call.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        self.options.singleton
    }

    /// Returns `options` applied to a new spec with the same constructor and
    /// dependencies.
    ///
    /// The result has a fresh identity: it is a different spec from `self`, and specs
    /// that already depend on `self` are unaffected.
    #[must_use]
    pub fn with_options(&self, options: SystemOptions) -> Self {
        Self {
            id: next_spec_id(),
            options,
            build: Arc::clone(&self.build),
        }
    }

    /// Shorthand for `with_options(SystemOptions { singleton: false })`.
    #[must_use]
    pub fn non_singleton(&self) -> Self {
        self.with_options(SystemOptions { singleton: false })
    }

    pub(crate) fn build(&self, context: &mut InitContext) -> Result<B> {
        (self.build)(context)
    }
}

impl<B> Clone for SystemSpec<B> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            options: self.options,
            build: Arc::clone(&self.build),
        }
    }
}

impl<B> fmt::Debug for SystemSpec<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemSpec")
            .field("id", &self.id)
            .field("singleton", &self.options.singleton)
            .finish_non_exhaustive()
    }
}
