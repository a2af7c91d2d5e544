// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{
    connect, get_value, handle_next, publish, reset, stateful_stream, stream, subscribe,
    EmitterExt,
};
use rill_test_utils::Recorder;

#[test]
fn connect_forwards_into_publisher() {
    // Arrange
    let a = stream::<i32>();
    let b = stream::<i32>();
    connect(&a, b.clone());
    let recorder = Recorder::new();
    subscribe(&b, {
        let recorder = recorder.clone();
        move |value| recorder.record(value)
    });

    // Act
    publish(&a, 4);

    // Assert
    assert_eq!(recorder.values(), vec![4]);
}

#[test]
fn connect_round_trips_into_stateful_stream() {
    // Arrange
    let a = stream::<&'static str>();
    let b = stateful_stream("initial");
    a.connect_to(b.clone());

    // Act
    publish(&a, "next");

    // Assert
    assert_eq!(get_value(&b), "next");
}

#[test]
fn connect_handle_disconnects() {
    // Arrange
    let a = stream::<i32>();
    let b = stateful_stream(0);
    let handle = connect(&a, b.clone());

    // Act
    publish(&a, 1);
    handle.unsubscribe();
    publish(&a, 2);

    // Assert
    assert_eq!(get_value(&b), 1);
}

#[test]
fn handle_next_delivers_once() {
    // Arrange
    let a = stream::<i32>();
    let recorder = Recorder::new();
    let sink = recorder.clone();
    let handle = handle_next(&a, move |value| sink.record(value));

    // Act
    publish(&a, 1);
    publish(&a, 2);

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert!(!handle.is_active());
}

#[test]
fn handle_next_on_stateful_stream_takes_replayed_value() {
    // Arrange
    let a = stateful_stream(10);
    let recorder = Recorder::new();
    let sink = recorder.clone();

    // Act
    a.handle_next(move |value| sink.record(value));
    publish(&a, 11);

    // Assert
    assert_eq!(recorder.values(), vec![10]);
    assert_eq!(a.subscriber_count(), 0);
}

#[test]
fn handle_next_can_be_cancelled_before_delivery() {
    // Arrange
    let a = stream::<i32>();
    let recorder = Recorder::new();
    let sink = recorder.clone();
    let handle = handle_next(&a, move |value| sink.record(value));

    // Act
    handle.unsubscribe();
    publish(&a, 1);

    // Assert
    assert!(recorder.is_empty());
}

#[test]
fn reset_function_clears_subscribers() {
    // Arrange
    let a = stream::<i32>();
    let recorder = Recorder::new();
    a.subscribe_fn({
        let recorder = recorder.clone();
        move |value| recorder.record(value)
    });

    // Act
    reset(&a);
    publish(&a, 1);

    // Assert
    assert!(recorder.is_empty());
}
