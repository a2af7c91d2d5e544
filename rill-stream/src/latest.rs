// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Latest-value tracking shared by [`combine_latest`](crate::combine_latest) and
//! [`with_latest_from`](crate::with_latest_from).
//!
//! A [`LatestSources`] is a group of emitters observed together: one slot per source
//! and a readiness bit per slot. Once every source has emitted at least once, each
//! further emission yields the full group of latest values.
//!
//! Two shapes are supported:
//!
//! - tuples of emitters, arity 1 to 8, yielding typed tuples (`(A, B, C)`)
//! - a `Vec` of same-typed emitters, yielding `Vec<T>`; at most
//!   [`MAX_SOURCES`] entries

use parking_lot::Mutex;
use rill_core::{Emitter, Result, RillError, StreamValue, Unsubscribe};
use std::sync::Arc;

/// Largest number of sources a `Vec` group can track.
pub const MAX_SOURCES: usize = u64::BITS as usize;

/// One bit per source, set on the source's first emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyMask {
    ready: u64,
    complete: u64,
}

impl ReadyMask {
    /// Creates an empty mask for `count` sources.
    ///
    /// # Errors
    ///
    /// Returns [`RillError::TooManySources`] if `count` exceeds [`MAX_SOURCES`].
    pub fn new(count: usize) -> Result<Self> {
        let complete = match count {
            0 => 0,
            MAX_SOURCES => u64::MAX,
            count if count < MAX_SOURCES => (1u64 << count) - 1,
            count => {
                return Err(RillError::TooManySources {
                    count,
                    max: MAX_SOURCES,
                })
            }
        };
        Ok(Self { ready: 0, complete })
    }

    /// Marks source `index` as having emitted.
    pub fn mark(&mut self, index: usize) {
        self.ready |= 1u64 << index;
    }

    /// Returns `true` once every source has emitted.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.ready == self.complete
    }
}

/// A group of emitters whose latest values are tracked together.
///
/// `M` is the group's value shape (`(A, B)` for a tuple of emitters, `T` for a `Vec`);
/// it only drives type inference and never needs to be named.
pub trait LatestSources<M> {
    /// The combined latest values.
    type Output: StreamValue;

    /// The combined latest values prefixed by a leading value, flattened for tuples.
    type Prefixed<L: StreamValue>: StreamValue;

    /// Subscribes every source now.
    ///
    /// Once all sources have emitted, `on_ready` receives the full group on every
    /// emission of any source. Sources that replay on subscribe (stateful streams)
    /// may call `on_ready` before this function returns.
    ///
    /// # Errors
    ///
    /// Returns [`RillError::TooManySources`] if the group is larger than the readiness
    /// mask.
    fn observe<F>(self, on_ready: F) -> Result<Unsubscribe>
    where
        F: Fn(Self::Output) + Send + Sync + 'static;

    /// Puts `lead` in front of `latest`.
    fn prefix<L: StreamValue>(lead: L, latest: Self::Output) -> Self::Prefixed<L>;
}

impl<E, T> LatestSources<T> for Vec<E>
where
    T: StreamValue,
    E: Emitter<T>,
{
    type Output = Vec<T>;
    type Prefixed<L: StreamValue> = (L, Vec<T>);

    fn observe<F>(self, on_ready: F) -> Result<Unsubscribe>
    where
        F: Fn(Vec<T>) + Send + Sync + 'static,
    {
        let mask = ReadyMask::new(self.len())?;
        if self.is_empty() {
            // Nothing to wait for: the empty combination is ready right away.
            on_ready(Vec::new());
            return Ok(Unsubscribe::noop());
        }
        let state = Arc::new(Mutex::new((mask, vec![None; self.len()])));
        let on_ready = Arc::new(on_ready);

        let handles: Vec<Unsubscribe> = self
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let state = Arc::clone(&state);
                let on_ready = Arc::clone(&on_ready);
                source.subscribe(Arc::new(move |value: T| {
                    let combined = {
                        let mut guard = state.lock();
                        let (ready, values) = &mut *guard;
                        values[index] = Some(value);
                        ready.mark(index);
                        if ready.is_complete() {
                            values.iter().cloned().collect::<Option<Vec<T>>>()
                        } else {
                            None
                        }
                    };
                    if let Some(combined) = combined {
                        on_ready(combined);
                    }
                }))
            })
            .collect();

        Ok(Unsubscribe::join(handles))
    }

    fn prefix<L: StreamValue>(lead: L, latest: Vec<T>) -> (L, Vec<T>) {
        (lead, latest)
    }
}

macro_rules! impl_latest_sources {
    ($count:expr; $(($idx:tt, $E:ident, $T:ident)),+) => {
        impl<$($E, $T),+> LatestSources<($($T,)+)> for ($($E,)+)
        where
            $($T: StreamValue, $E: Emitter<$T>),+
        {
            type Output = ($($T,)+);
            type Prefixed<L: StreamValue> = (L, $($T,)+);

            fn observe<F>(self, on_ready: F) -> Result<Unsubscribe>
            where
                F: Fn(Self::Output) + Send + Sync + 'static,
            {
                fn snapshot<$($T: Clone),+>(values: &($(Option<$T>,)+)) -> Option<($($T,)+)> {
                    Some(($(values.$idx.clone()?,)+))
                }

                let state: Arc<Mutex<(ReadyMask, ($(Option<$T>,)+))>> =
                    Arc::new(Mutex::new((ReadyMask::new($count)?, Default::default())));
                let on_ready = Arc::new(on_ready);

                let handles = vec![$({
                    let state = Arc::clone(&state);
                    let on_ready = Arc::clone(&on_ready);
                    self.$idx.subscribe(Arc::new(move |value: $T| {
                        let combined = {
                            let mut guard = state.lock();
                            let (ready, values) = &mut *guard;
                            values.$idx = Some(value);
                            ready.mark($idx);
                            if ready.is_complete() {
                                snapshot(values)
                            } else {
                                None
                            }
                        };
                        if let Some(combined) = combined {
                            on_ready(combined);
                        }
                    }))
                }),+];

                Ok(Unsubscribe::join(handles))
            }

            fn prefix<L: StreamValue>(lead: L, latest: Self::Output) -> Self::Prefixed<L> {
                (lead, $(latest.$idx,)+)
            }
        }
    };
}

impl_latest_sources!(1; (0, E0, T0));
impl_latest_sources!(2; (0, E0, T0), (1, E1, T1));
impl_latest_sources!(3; (0, E0, T0), (1, E1, T1), (2, E2, T2));
impl_latest_sources!(4; (0, E0, T0), (1, E1, T1), (2, E2, T2), (3, E3, T3));
impl_latest_sources!(5; (0, E0, T0), (1, E1, T1), (2, E2, T2), (3, E3, T3), (4, E4, T4));
impl_latest_sources!(
    6;
    (0, E0, T0), (1, E1, T1), (2, E2, T2), (3, E3, T3), (4, E4, T4), (5, E5, T5)
);
impl_latest_sources!(
    7;
    (0, E0, T0), (1, E1, T1), (2, E2, T2), (3, E3, T3), (4, E4, T4), (5, E5, T5), (6, E6, T6)
);
impl_latest_sources!(
    8;
    (0, E0, T0), (1, E1, T1), (2, E2, T2), (3, E3, T3), (4, E4, T4), (5, E5, T5), (6, E6, T6),
    (7, E7, T7)
);
