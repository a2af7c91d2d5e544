// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Operator;
use core::marker::PhantomData;
use rill_core::{StreamValue, Subscription};
use std::sync::Arc;

/// Operator returned by [`filter`].
pub struct Filter<T, P> {
    predicate: Arc<P>,
    _marker: PhantomData<fn(T)>,
}

/// Forwards only the values for which `predicate` returns `true`.
pub fn filter<T, P>(predicate: P) -> Filter<T, P>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Filter {
        predicate: Arc::new(predicate),
        _marker: PhantomData,
    }
}

impl<T, P> Operator for Filter<T, P>
where
    T: StreamValue,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    type Input = T;
    type Output = T;

    fn apply(&self, downstream: Subscription<T>) -> Subscription<T> {
        let predicate = Arc::clone(&self.predicate);
        Arc::new(move |value| {
            if predicate(&value) {
                downstream(value);
            }
        })
    }
}
