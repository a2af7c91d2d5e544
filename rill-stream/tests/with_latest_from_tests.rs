// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::Result;
use rill_core::{Emitter, EmitterExt, Publisher, StatefulStream, Stream};
use rill_stream::{pipe, with_latest_from, Pipe};
use rill_test_utils::Recorder;

#[test]
fn picks_latest_value_of_single_source() -> Result<()> {
    // Arrange
    let primary = Stream::<&'static str>::new();
    let other = Stream::<&'static str>::new();
    let recorder = Recorder::new();
    pipe(primary.clone())
        .with_latest_from((other.clone(),))?
        .subscribe(recorder.subscription());

    // Act
    other.publish("bar");
    primary.publish("foo");

    // Assert
    assert_eq!(recorder.values(), vec![("foo", "bar")]);
    Ok(())
}

#[test]
fn drops_primary_values_until_every_source_emitted() -> Result<()> {
    // Arrange
    let primary = Stream::<i32>::new();
    let a = Stream::<char>::new();
    let b = Stream::<bool>::new();
    let recorder = Recorder::new();
    pipe(primary.clone())
        .with_latest_from((a.clone(), b.clone()))?
        .subscribe(recorder.subscription());

    // Act
    primary.publish(1);
    a.publish('x');
    primary.publish(2);
    b.publish(true);
    primary.publish(3);

    // Assert
    assert_eq!(recorder.values(), vec![(3, 'x', true)]);
    Ok(())
}

#[test]
fn source_emissions_alone_do_not_emit() -> Result<()> {
    // Arrange
    let primary = Stream::<i32>::new();
    let other = StatefulStream::new(0);
    let recorder = Recorder::new();
    pipe(primary.clone())
        .with_latest_from((other.clone(),))?
        .subscribe(recorder.subscription());

    // Act
    other.publish(1);
    other.publish(2);
    primary.publish(10);

    // Assert
    assert_eq!(recorder.values(), vec![(10, 2)]);
    Ok(())
}

#[test]
fn sources_are_subscribed_when_operator_is_created() -> Result<()> {
    // Arrange
    let primary = Stream::<i32>::new();
    let other = Stream::<i32>::new();

    // Act
    let operator = with_latest_from::<i32, _, _>((other.clone(),))?;
    other.publish(42);
    let recorder = Recorder::new();
    pipe(primary.clone())
        .through(operator)
        .subscribe(recorder.subscription());
    primary.publish(1);

    // Assert
    assert_eq!(other.subscriber_count(), 1);
    assert_eq!(recorder.values(), vec![(1, 42)]);
    Ok(())
}

#[test]
fn vec_of_sources_yields_vec_of_latest_values() -> Result<()> {
    // Arrange
    let primary = Stream::<&'static str>::new();
    let sources: Vec<StatefulStream<i32>> = (0..3).map(StatefulStream::new).collect();
    let recorder = Recorder::new();
    let piped: Pipe<(&'static str, Vec<i32>)> =
        pipe(primary.clone()).with_latest_from(sources.clone())?;
    piped.subscribe(recorder.subscription());

    // Act
    primary.publish("first");
    sources[1].publish(10);
    primary.publish("second");

    // Assert
    assert_eq!(
        recorder.values(),
        vec![("first", vec![0, 1, 2]), ("second", vec![0, 10, 2])]
    );
    Ok(())
}

#[test]
fn vec_with_too_many_sources_is_rejected() {
    // Arrange
    let sources: Vec<Stream<i32>> = (0..65).map(|_| Stream::new()).collect();

    // Act
    let result = with_latest_from::<u8, _, _>(sources);

    // Assert
    assert!(matches!(
        result,
        Err(rill_core::RillError::TooManySources { count: 65, max: 64 })
    ));
}

#[test]
fn disconnect_freezes_latest_values() -> Result<()> {
    // Arrange
    let primary = Stream::<i32>::new();
    let other = Stream::<i32>::new();
    let operator = with_latest_from::<i32, _, _>((other.clone(),))?;
    other.publish(1);
    operator.disconnect();
    let recorder = Recorder::new();
    pipe(primary.clone())
        .through(operator)
        .subscribe(recorder.subscription());

    // Act
    other.publish(2);
    primary.publish(0);

    // Assert
    assert_eq!(other.subscriber_count(), 0);
    assert_eq!(recorder.values(), vec![(0, 1)]);
    Ok(())
}

#[test]
fn latest_values_can_come_from_a_pipe() -> Result<()> {
    // Arrange
    let primary = Stream::<()>::new();
    let raw = Stream::<i32>::new();
    let recorder = Recorder::new();
    pipe(primary.clone())
        .with_latest_from((pipe(raw.clone()).map(|value| value * 2),))?
        .map(|(_, doubled)| doubled)
        .subscribe_fn({
            let recorder = recorder.clone();
            move |value| recorder.record(value)
        });

    // Act
    raw.publish(21);
    primary.publish(());

    // Assert
    assert_eq!(recorder.values(), vec![42]);
    Ok(())
}

#[test]
fn empty_vec_of_sources_forwards_every_primary_value() -> Result<()> {
    // Arrange
    let primary = Stream::<i32>::new();
    let recorder = Recorder::new();
    let piped: Pipe<(i32, Vec<u8>)> =
        pipe(primary.clone()).with_latest_from(Vec::<Stream<u8>>::new())?;
    piped.subscribe(recorder.subscription());

    // Act
    primary.publish(1);
    primary.publish(2);

    // Assert
    assert_eq!(recorder.values(), vec![(1, vec![]), (2, vec![])]);
    assert_eq!(recorder.last(), Some((2, vec![])));
    Ok(())
}
