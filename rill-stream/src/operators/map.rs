// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Operator;
use core::marker::PhantomData;
use rill_core::{StreamValue, Subscription};
use std::sync::Arc;

/// Operator returned by [`map`].
pub struct Map<T, U, F> {
    project: Arc<F>,
    _marker: PhantomData<fn(T) -> U>,
}

/// Transforms every value with `project`.
pub fn map<T, U, F>(project: F) -> Map<T, U, F>
where
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Map {
        project: Arc::new(project),
        _marker: PhantomData,
    }
}

impl<T, U, F> Operator for Map<T, U, F>
where
    T: StreamValue,
    U: StreamValue,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Input = T;
    type Output = U;

    fn apply(&self, downstream: Subscription<U>) -> Subscription<T> {
        let project = Arc::clone(&self.project);
        Arc::new(move |value| downstream(project(value)))
    }
}
