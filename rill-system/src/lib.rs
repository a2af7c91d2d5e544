// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Construction of stream graphs from interdependent systems.
//!
//! A *system* is a constructor that creates and connects streams and returns them as
//! a bundle. A [`SystemSpec`] pairs that constructor with the specs it depends on;
//! [`init`] builds the whole tree, depth first, in dependency-list order.
//!
//! Specs are singletons by default: within one [`init`] call, a spec reached through
//! several dependents is built once and every dependent receives the same bundle.
//!
//! ```text
//!   a
//!  / \
//! b   c
//!  \ /
//!   d
//! ```
//!
//! Initializing `d` builds `a` once, and `b` and `c` share its streams. Mark `a` with
//! [`SystemSpec::non_singleton`] to give `b` and `c` separate instances.
//!
//! ```
//! use rill_core::Stream;
//! use rill_system::{init, system};
//!
//! # fn main() -> rill_core::Result<()> {
//! let a = system(|()| Stream::<i32>::new(), ());
//! let b = system(|(a,)| a, (a.clone(),));
//! let c = system(|(a,)| a, (a.clone(),));
//! let d = system(|(b, c)| b.ptr_eq(&c), (b, c));
//!
//! assert!(*init(&d)?);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod bundle;
pub mod context;
pub mod dependencies;
pub mod spec;

pub use self::bundle::Bundle;
pub use self::context::{init, InitContext};
pub use self::dependencies::Dependencies;
pub use self::spec::{system, try_system, SpecId, SystemOptions, SystemSpec};
