// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The [`Operator`] trait and its left-to-right tuple composition.

use rill_core::{StreamValue, Subscription};

/// A subscription transformer.
///
/// Given the downstream subscription, an operator returns the upstream one: the
/// callback that will be registered on the source. Everything an operator does
/// (transforming, dropping, delaying, sampling other emitters) happens inside the
/// returned callback.
///
/// Operator state lives in the operator value. A [`Pipe`](crate::Pipe) owns its
/// operators, so that state is shared by all subscriptions to the same pipe and never
/// across pipes.
///
/// Tuples of operators compose left to right: `(a, b)` feeds `a`'s output into `b`.
///
/// ```
/// use rill_core::{EmitterExt, Publisher, Stream};
/// use rill_stream::{filter, map, pipe};
/// use std::sync::{Arc, Mutex};
///
/// let source = Stream::<i32>::new();
/// let doubled_evens = pipe(source.clone()).through((
///     filter(|value: &i32| value % 2 == 0),
///     map(|value: i32| value * 10),
/// ));
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// doubled_evens.subscribe_fn(move |value| sink.lock().unwrap().push(value));
///
/// for value in 1..=4 {
///     source.publish(value);
/// }
/// assert_eq!(*seen.lock().unwrap(), vec![20, 40]);
/// ```
pub trait Operator: Send + Sync {
    /// Values accepted from upstream.
    type Input: StreamValue;
    /// Values handed to the downstream subscription.
    type Output: StreamValue;

    /// Wraps `downstream` into the callback to register upstream.
    fn apply(&self, downstream: Subscription<Self::Output>) -> Subscription<Self::Input>;
}

impl<O: Operator + ?Sized> Operator for Box<O> {
    type Input = O::Input;
    type Output = O::Output;

    fn apply(&self, downstream: Subscription<Self::Output>) -> Subscription<Self::Input> {
        (**self).apply(downstream)
    }
}

// The last operator wraps the subscriber first, so values flow left to right.
macro_rules! impl_operator_tuple {
    (
        first: $first:ident,
        last: $last:ident,
        links: [$($prev:ident => $next:ident),+],
        reversed: [$($idx:tt),+]
    ) => {
        impl<$first, $($next),+> Operator for ($first, $($next),+)
        where
            $first: Operator,
            $($next: Operator<Input = <$prev as Operator>::Output>),+
        {
            type Input = <$first as Operator>::Input;
            type Output = <$last as Operator>::Output;

            fn apply(&self, downstream: Subscription<Self::Output>) -> Subscription<Self::Input> {
                let subscription = downstream;
                $(let subscription = self.$idx.apply(subscription);)+
                subscription
            }
        }
    };
}

impl_operator_tuple!(first: A, last: B, links: [A => B], reversed: [1, 0]);
impl_operator_tuple!(first: A, last: C, links: [A => B, B => C], reversed: [2, 1, 0]);
impl_operator_tuple!(
    first: A,
    last: D,
    links: [A => B, B => C, C => D],
    reversed: [3, 2, 1, 0]
);
impl_operator_tuple!(
    first: A,
    last: E,
    links: [A => B, B => C, C => D, D => E],
    reversed: [4, 3, 2, 1, 0]
);
impl_operator_tuple!(
    first: A,
    last: F,
    links: [A => B, B => C, C => D, D => E, E => F],
    reversed: [5, 4, 3, 2, 1, 0]
);
impl_operator_tuple!(
    first: A,
    last: G,
    links: [A => B, B => C, C => D, D => E, E => F, F => G],
    reversed: [6, 5, 4, 3, 2, 1, 0]
);
impl_operator_tuple!(
    first: A,
    last: H,
    links: [A => B, B => C, C => D, D => E, E => F, F => G, G => H],
    reversed: [7, 6, 5, 4, 3, 2, 1, 0]
);
