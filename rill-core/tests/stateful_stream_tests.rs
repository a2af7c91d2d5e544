// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Emitter, EmitterExt, Publisher, StatefulStream, Stream};
use rill_test_utils::{person_alice, Recorder};

#[test]
fn subscribe_replays_current_value() {
    // Arrange
    let foo = StatefulStream::new(5);
    let recorder = Recorder::new();

    // Act
    foo.subscribe(recorder.subscription());

    // Assert
    assert_eq!(recorder.values(), vec![5]);
}

#[test]
fn replay_precedes_later_values() {
    // Arrange
    let foo = StatefulStream::new(1);
    foo.publish(2);
    let recorder = Recorder::new();

    // Act
    foo.subscribe(recorder.subscription());
    foo.publish(3);

    // Assert
    assert_eq!(recorder.values(), vec![2, 3]);
}

#[test]
fn value_returns_latest_publish() {
    let foo = StatefulStream::new(5);
    assert_eq!(foo.value(), 5);

    foo.publish(9);
    assert_eq!(foo.value(), 9);
    assert_eq!(rill_core::get_value(&foo), 9);
}

#[test]
fn reset_keeps_retained_value() {
    // Arrange
    let foo = StatefulStream::new(person_alice());
    let recorder = Recorder::new();
    foo.subscribe(recorder.subscription());
    let older = person_alice().aged();

    // Act
    foo.reset();
    foo.publish(older.clone());

    // Assert
    assert_eq!(recorder.values(), vec![person_alice()]);
    assert_eq!(foo.value(), older);
    assert_eq!(foo.subscriber_count(), 0);
}

#[test]
fn replay_happens_before_registration() {
    // Arrange
    let foo = StatefulStream::new(0);
    let counts = Recorder::new();
    let observed = foo.clone();
    let sink = counts.clone();

    // Act: the replay call observes no registration yet
    foo.subscribe_fn(move |_| sink.record(observed.subscriber_count()));
    foo.publish(1);

    // Assert
    assert_eq!(counts.values(), vec![0, 1]);
}

#[test]
fn from_emitter_tracks_source() {
    // Arrange
    let source = Stream::<&'static str>::new();
    let state = StatefulStream::from_emitter(&source, "idle");

    // Act
    source.publish("busy");

    // Assert
    assert_eq!(state.value(), "busy");
}

#[test]
fn clones_share_value() {
    let foo = StatefulStream::new(1);
    let clone = foo.clone();
    clone.publish(2);

    assert!(foo.ptr_eq(&clone));
    assert_eq!(foo.value(), 2);
}
