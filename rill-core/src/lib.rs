// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core push primitives for rill.
//!
//! - [`Stream`] - stateless dispatcher, both [`Emitter`] and [`Publisher`]
//! - [`StatefulStream`] - a stream retaining and replaying its last value
//! - [`EventHandler`] - a single-subscription slot over any emitter
//! - [`actions`] - the procedural surface (`subscribe`, `publish`, `connect`, ...)
//! - [`RillError`] - the error type shared by the workspace

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod actions;
pub mod emitter;
pub mod error;
pub mod event_handler;
pub mod stateful_stream;
pub mod stream;
pub mod subscription;
pub mod value;

pub use self::actions::{
    connect, event_handler, get_value, handle_next, publish, reset, stateful_stream, stream,
    subscribe,
};
pub use self::emitter::{DynEmitter, Emitter, EmitterExt, Publisher};
pub use self::error::{IntoRillError, Result, ResultExt, RillError};
pub use self::event_handler::EventHandler;
pub use self::stateful_stream::StatefulStream;
pub use self::stream::Stream;
pub use self::subscription::{subscription, Subscription, Unsubscribe};
pub use self::value::StreamValue;
