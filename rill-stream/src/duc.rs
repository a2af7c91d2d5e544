// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shorthands for distinct pipes.

use crate::{pipe, Pipe};
use rill_core::{Emitter, StreamValue};

/// `pipe(source).distinct_until_changed()`.
pub fn duc<T, E>(source: E) -> Pipe<T>
where
    T: StreamValue + PartialEq,
    E: Emitter<T> + 'static,
{
    pipe(source).distinct_until_changed()
}

/// `pipe(source).distinct_until_changed_by(same)`.
pub fn duc_by<T, E, C>(source: E, same: C) -> Pipe<T>
where
    T: StreamValue,
    E: Emitter<T> + 'static,
    C: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    pipe(source).distinct_until_changed_by(same)
}
