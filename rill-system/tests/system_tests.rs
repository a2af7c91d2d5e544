// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::Result;
use rill_core::{EmitterExt, Publisher, RillError, StatefulStream, Stream};
use rill_stream::pipe;
use rill_system::{init, system, try_system, InitContext, SystemOptions};
use rill_test_utils::Recorder;
use std::sync::Arc;

struct Source {
    a: Stream<i32>,
    b: Stream<i32>,
}

struct Doubled {
    a: Stream<i32>,
    c: Stream<i32>,
}

#[test]
fn dependent_system_receives_dependency_streams() -> Result<()> {
    // Arrange
    let source = system(
        |()| {
            let a = Stream::new();
            let b = Stream::new();
            pipe(a.clone()).map(|value| value * 2).connect_to(b.clone());
            Source { a, b }
        },
        (),
    );
    let doubled = system(
        |(source,): (Arc<Source>,)| {
            let c = Stream::new();
            pipe(source.b.clone())
                .map(|value| value * 2)
                .connect_to(c.clone());
            Doubled {
                a: source.a.clone(),
                c,
            }
        },
        (source,),
    );
    let recorder = Recorder::new();

    // Act
    let system = init(&doubled)?;
    system.c.subscribe_fn({
        let recorder = recorder.clone();
        move |value| recorder.record(value)
    });
    system.a.publish(2);

    // Assert
    assert_eq!(recorder.values(), vec![8]);
    Ok(())
}

#[test]
fn constructor_without_dependencies_runs_once_per_init() -> Result<()> {
    // Arrange
    let shared = StatefulStream::new(0);
    let calls = Recorder::new();
    let spec = {
        let shared = shared.clone();
        let calls = calls.clone();
        system(
            move |()| {
                calls.record(());
                shared.clone()
            },
            (),
        )
    };

    // Act
    let first = init(&spec)?;
    let second = init(&spec)?;

    // Assert
    assert_eq!(calls.len(), 2);
    assert!(first.ptr_eq(&shared));
    assert!(second.ptr_eq(&shared));
    assert!(!Arc::ptr_eq(&first, &second));
    Ok(())
}

#[test]
fn singleton_is_shared_across_dependents() -> Result<()> {
    // Arrange
    let first = system(|()| StatefulStream::new(0), ());
    let second = system(
        |(a,): (Arc<StatefulStream<i32>>,)| (StatefulStream::new(0), a),
        (first.clone(),),
    );
    let third = system(
        |(a,): (Arc<StatefulStream<i32>>,)| (StatefulStream::new(0), a),
        (first,),
    );
    let fourth = system(
        |(left, right)| Arc::ptr_eq(&left.1, &right.1) && left.1.ptr_eq(&right.1),
        (second, third),
    );

    // Act
    let shared = init(&fourth)?;

    // Assert
    assert!(*shared);
    Ok(())
}

#[test]
fn non_singleton_is_built_per_dependent() -> Result<()> {
    // Arrange
    let calls = Recorder::new();
    let upstream = {
        let calls = calls.clone();
        system(
            move |()| {
                calls.record("upstream");
                Stream::<i32>::new()
            },
            (),
        )
        .non_singleton()
    };
    let left = system(|(up,)| up, (upstream.clone(),));
    let right = system(|(up,)| up, (upstream,));
    let both = system(|(left, right)| (left, right), (left, right));

    // Act
    let bundle = init(&both)?;
    let (left, right) = &*bundle;

    // Assert
    assert_eq!(calls.len(), 2);
    assert!(!left.ptr_eq(right));
    Ok(())
}

#[test]
fn dependencies_are_built_depth_first_in_list_order() -> Result<()> {
    // Arrange
    let order = Recorder::new();
    let named = |name: &'static str| {
        let order = order.clone();
        system(move |()| order.record(name), ())
    };
    let a = named("a");
    let b = named("b");
    let ab = {
        let order = order.clone();
        system(move |_| order.record("ab"), (a.clone(), b))
    };
    let root = {
        let order = order.clone();
        system(move |_| order.record("root"), (ab, a, named("c")))
    };

    // Act
    init(&root)?;

    // Assert
    assert_eq!(order.values(), vec!["a", "b", "ab", "c", "root"]);
    Ok(())
}

#[test]
fn each_init_call_uses_a_fresh_registry() -> Result<()> {
    // Arrange
    let leaf = system(|()| Stream::<u8>::new(), ());
    let root = system(|(leaf,)| leaf, (leaf,));

    // Act
    let first = init(&root)?;
    let second = init(&root)?;

    // Assert
    assert!(!first.ptr_eq(&second));
    Ok(())
}

#[test]
fn shared_context_reuses_singletons_between_roots() -> Result<()> {
    // Arrange
    let leaf = system(|()| Stream::<u8>::new(), ());
    let left = system(|(leaf,)| leaf, (leaf.clone(),));
    let right = system(|(leaf,)| leaf, (leaf,));
    let mut context = InitContext::new();

    // Act
    let left = context.materialize(&left)?;
    let right = context.materialize(&right)?;

    // Assert
    assert!(left.ptr_eq(&right));
    assert_eq!(context.singleton_count(), 3);
    Ok(())
}

#[test]
fn with_options_creates_a_distinct_spec() {
    // Arrange
    let spec = system(|()| (), ());

    // Act
    let non_singleton = spec.with_options(SystemOptions { singleton: false });

    // Assert
    assert!(spec.is_singleton());
    assert!(!non_singleton.is_singleton());
    assert_ne!(spec.id(), non_singleton.id());
    assert_eq!(spec.clone().id(), spec.id());
    assert_eq!(SystemOptions::default(), SystemOptions { singleton: true });
}

#[test]
fn vec_of_dependencies_yields_vec_of_bundles() -> Result<()> {
    // Arrange
    let parts: Vec<_> = (1..=3)
        .map(|index| system(move |()| StatefulStream::new(index), ()))
        .collect();
    let total = system(
        |parts: Vec<Arc<StatefulStream<i32>>>| parts.iter().map(|part| part.value()).sum::<i32>(),
        parts,
    );

    // Act
    let total = init(&total)?;

    // Assert
    assert_eq!(*total, 6);
    Ok(())
}

#[test]
fn failing_constructor_aborts_init() {
    // Arrange
    let broken = try_system(
        |()| -> rill_core::Result<Stream<i32>> { Err(RillError::construction("no backend")) },
        (),
    );
    let built = Recorder::new();
    let dependent = {
        let built = built.clone();
        system(
            move |(stream,)| {
                built.record(());
                stream
            },
            (broken,),
        )
    };

    // Act
    let result = init(&dependent);

    // Assert
    assert!(matches!(result, Err(RillError::Construction { .. })));
    assert!(built.is_empty());
}

#[test]
fn try_system_can_use_question_mark_on_foreign_errors() {
    // Arrange
    let parsed = try_system(
        |()| {
            let value: i32 = "forty-two"
                .parse()
                .map_err(rill_core::IntoRillError::into_rill)?;
            Ok(StatefulStream::new(value))
        },
        (),
    );

    // Act
    let error = init(&parsed).err();

    // Assert
    assert!(matches!(error, Some(RillError::UserError(_))));
}
