// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Emitter, Publisher, StatefulStream, Stream};
use rill_stream::{duc, duc_by};
use rill_test_utils::Recorder;

#[test]
fn duc_replays_stateful_value_then_suppresses_repeats() {
    // Arrange
    let source = StatefulStream::new(1);
    let recorder = Recorder::new();
    duc(source.clone()).subscribe(recorder.subscription());

    // Act
    source.publish(1);
    source.publish(2);
    source.publish(2);
    source.publish(1);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2, 1]);
}

#[test]
fn duc_by_compares_with_custom_comparator() {
    // Arrange
    let source = Stream::<String>::new();
    let recorder = Recorder::new();
    duc_by(source.clone(), |previous: &String, next: &String| {
        previous.eq_ignore_ascii_case(next)
    })
    .subscribe(recorder.subscription());

    // Act
    for word in ["Hello", "HELLO", "world", "World"] {
        source.publish(word.to_string());
    }

    // Assert
    assert_eq!(
        recorder.values(),
        vec!["Hello".to_string(), "world".to_string()]
    );
}
