// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{InitContext, SystemSpec};
use rill_core::Result;
use std::sync::Arc;

/// The dependency list of a system: `()`, a tuple of up to 8 specs, or a `Vec` of
/// same-typed specs.
///
/// Dependencies are materialized in list order, each one depth first.
pub trait Dependencies: Send + Sync + 'static {
    /// What the constructor receives: one `Arc`'d bundle per dependency.
    type Bundles;

    /// Materializes every dependency within `context`.
    ///
    /// # Errors
    ///
    /// Propagates the first constructor failure.
    fn materialize(&self, context: &mut InitContext) -> Result<Self::Bundles>;
}

impl Dependencies for () {
    type Bundles = ();

    fn materialize(&self, _context: &mut InitContext) -> Result<()> {
        Ok(())
    }
}

impl<B: Send + Sync + 'static> Dependencies for Vec<SystemSpec<B>> {
    type Bundles = Vec<Arc<B>>;

    fn materialize(&self, context: &mut InitContext) -> Result<Vec<Arc<B>>> {
        self.iter().map(|spec| context.materialize(spec)).collect()
    }
}

macro_rules! impl_dependencies {
    ($(($idx:tt, $B:ident)),+) => {
        impl<$($B: Send + Sync + 'static),+> Dependencies for ($(SystemSpec<$B>,)+) {
            type Bundles = ($(Arc<$B>,)+);

            fn materialize(&self, context: &mut InitContext) -> Result<Self::Bundles> {
                Ok(($(context.materialize(&self.$idx)?,)+))
            }
        }
    };
}

impl_dependencies!((0, B0));
impl_dependencies!((0, B0), (1, B1));
impl_dependencies!((0, B0), (1, B1), (2, B2));
impl_dependencies!((0, B0), (1, B1), (2, B2), (3, B3));
impl_dependencies!((0, B0), (1, B1), (2, B2), (3, B3), (4, B4));
impl_dependencies!((0, B0), (1, B1), (2, B2), (3, B3), (4, B4), (5, B5));
impl_dependencies!((0, B0), (1, B1), (2, B2), (3, B3), (4, B4), (5, B5), (6, B6));
impl_dependencies!((0, B0), (1, B1), (2, B2), (3, B3), (4, B4), (5, B5), (6, B6), (7, B7));
