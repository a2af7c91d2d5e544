// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Operator;
use core::marker::PhantomData;
use rill_core::{StreamValue, Subscription};
use std::sync::Arc;

/// Operator returned by [`map_to`].
pub struct MapTo<T, U> {
    value: U,
    _marker: PhantomData<fn(T)>,
}

/// Replaces every value with a clone of `value`.
///
/// Useful to turn a signal stream (`()`, clicks, ticks) into a command carrying a
/// fixed payload.
pub fn map_to<T, U: StreamValue>(value: U) -> MapTo<T, U> {
    MapTo {
        value,
        _marker: PhantomData,
    }
}

impl<T: StreamValue, U: StreamValue> Operator for MapTo<T, U> {
    type Input = T;
    type Output = U;

    fn apply(&self, downstream: Subscription<U>) -> Subscription<T> {
        let value = self.value.clone();
        Arc::new(move |_| downstream(value.clone()))
    }
}
