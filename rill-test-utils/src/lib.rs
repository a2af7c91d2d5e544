// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rill data-flow engine.
//!
//! This crate is for development and testing only.
//!
//! - [`Recorder`] - a subscription that keeps every value it receives
//! - [`test_data`] - small fixture types (`Person`) with pre-defined instances
//!
//! ```rust
//! use rill_core::{Emitter, Publisher, Stream};
//! use rill_test_utils::Recorder;
//!
//! let stream = Stream::new();
//! let recorder = Recorder::new();
//! stream.subscribe(recorder.subscription());
//!
//! stream.publish(1);
//! stream.publish(2);
//! assert_eq!(recorder.values(), vec![1, 2]);
//! ```

pub mod recorder;
pub mod test_data;

pub use recorder::Recorder;
pub use test_data::{person_alice, person_bob, person_charlie, Person};
