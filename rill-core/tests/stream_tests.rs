// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rill_core::{Emitter, EmitterExt, Publisher, Stream, Unsubscribe};
use rill_test_utils::Recorder;
use std::sync::Arc;

#[test]
fn publish_reaches_subscriber() {
    // Arrange
    let stream = Stream::<i32>::new();
    let recorder = Recorder::new();
    stream.subscribe(recorder.subscription());

    // Act
    stream.publish(4);

    // Assert
    assert_eq!(recorder.values(), vec![4]);
}

#[test]
fn subscribers_are_called_in_subscription_order() {
    // Arrange
    let stream = Stream::<&'static str>::new();
    let order = Recorder::new();
    for tag in ["first", "second", "third"] {
        let order = order.clone();
        stream.subscribe_fn(move |_| order.record(tag));
    }

    // Act
    stream.publish("go");

    // Assert
    assert_eq!(order.values(), vec!["first", "second", "third"]);
}

#[test]
fn late_subscriber_misses_past_values() {
    // Arrange
    let stream = Stream::<i32>::new();
    stream.publish(1);
    let recorder = Recorder::new();

    // Act
    stream.subscribe(recorder.subscription());
    stream.publish(2);

    // Assert
    assert_eq!(recorder.values(), vec![2]);
}

#[test]
fn unsubscribe_removes_only_its_registration() {
    // Arrange
    let stream = Stream::<i32>::new();
    let kept = Recorder::new();
    let removed = Recorder::new();
    stream.subscribe(kept.subscription());
    let handle = stream.subscribe(removed.subscription());

    // Act
    stream.publish(1);
    handle.unsubscribe();
    stream.publish(2);

    // Assert
    assert_eq!(kept.values(), vec![1, 2]);
    assert_eq!(removed.values(), vec![1]);
    assert_eq!(stream.subscriber_count(), 1);
}

#[test]
fn unsubscribe_twice_is_a_noop() {
    // Arrange
    let stream = Stream::<i32>::new();
    let first = Recorder::new();
    let second = Recorder::new();
    let handle = stream.subscribe(first.subscription());
    stream.subscribe(second.subscription());

    // Act
    handle.unsubscribe();
    handle.unsubscribe();
    stream.publish(7);

    // Assert
    assert!(first.is_empty());
    assert_eq!(second.values(), vec![7]);
    assert!(!handle.is_active());
}

#[test]
fn same_callback_subscribed_twice_is_two_registrations() {
    // Arrange
    let stream = Stream::<i32>::new();
    let recorder = Recorder::new();
    let subscription = recorder.subscription();
    let first = stream.subscribe(Arc::clone(&subscription));
    stream.subscribe(subscription);

    // Act
    stream.publish(1);
    first.unsubscribe();
    stream.publish(2);

    // Assert
    assert_eq!(recorder.values(), vec![1, 1, 2]);
}

#[test]
fn reset_clears_all_subscriptions() {
    // Arrange
    let stream = Stream::<i32>::new();
    let recorder = Recorder::new();
    stream.subscribe(recorder.subscription());
    stream.subscribe(recorder.subscription());

    // Act
    stream.reset();
    stream.publish(1);

    // Assert
    assert!(recorder.is_empty());
    assert_eq!(stream.subscriber_count(), 0);
}

#[test]
fn unsubscribe_during_publish_still_delivers_in_flight_value() {
    // Arrange
    let stream = Stream::<i32>::new();
    let recorder = Recorder::new();
    let later: Arc<Mutex<Option<Unsubscribe>>> = Arc::new(Mutex::new(None));

    let slot = Arc::clone(&later);
    stream.subscribe_fn(move |_| {
        let handle = slot.lock().take();
        if let Some(handle) = handle {
            handle.unsubscribe();
        }
    });
    *later.lock() = Some(stream.subscribe(recorder.subscription()));

    // Act
    stream.publish(1);
    stream.publish(2);

    // Assert: removed mid-flight, so it sees the first value only
    assert_eq!(recorder.values(), vec![1]);
}

#[test]
fn subscribe_during_publish_takes_effect_on_next_publish() {
    // Arrange
    let stream = Stream::<i32>::new();
    let recorder = Recorder::new();
    let attached = Arc::new(Mutex::new(false));

    let inner = stream.clone();
    let sink = recorder.clone();
    stream.subscribe_fn(move |_| {
        let mut attached = attached.lock();
        if !*attached {
            *attached = true;
            inner.subscribe(sink.subscription());
        }
    });

    // Act
    stream.publish(1);
    stream.publish(2);

    // Assert
    assert_eq!(recorder.values(), vec![2]);
}

#[test]
fn reentrant_publish_is_delivered_depth_first() {
    // Arrange
    let stream = Stream::<i32>::new();
    let recorder = Recorder::new();
    let inner = stream.clone();
    stream.subscribe_fn(move |value| {
        if value == 1 {
            inner.publish(2);
        }
    });
    stream.subscribe(recorder.subscription());

    // Act
    stream.publish(1);

    // Assert: the nested publish completes before the outer one reaches the recorder
    assert_eq!(recorder.values(), vec![2, 1]);
}

#[test]
#[should_panic(expected = "subscriber failed")]
fn panicking_subscriber_propagates_to_publisher() {
    let stream = Stream::<i32>::new();
    stream.subscribe_fn(|_| panic!("subscriber failed"));
    stream.publish(1);
}

#[test]
fn clones_share_subscribers() {
    // Arrange
    let stream = Stream::<i32>::new();
    let clone = stream.clone();
    let recorder = Recorder::new();
    clone.subscribe(recorder.subscription());

    // Act
    stream.publish(3);

    // Assert
    assert!(stream.ptr_eq(&clone));
    assert!(!stream.ptr_eq(&Stream::new()));
    assert_eq!(recorder.values(), vec![3]);
}

#[test]
fn from_emitter_republishes_source_values() {
    // Arrange
    let source = Stream::<i32>::new();
    let derived = Stream::from_emitter(&source);
    let recorder = Recorder::new();
    derived.subscribe(recorder.subscription());

    // Act
    source.publish(8);

    // Assert
    assert_eq!(recorder.values(), vec![8]);
}

#[test]
fn dyn_emitter_delegates() {
    // Arrange
    let stream = Stream::<i32>::new();
    let erased = stream.clone().into_dyn();
    let recorder = Recorder::new();
    erased.subscribe(recorder.subscription());

    // Act
    stream.publish(5);
    erased.reset();
    stream.publish(6);

    // Assert
    assert_eq!(recorder.values(), vec![5]);
}
