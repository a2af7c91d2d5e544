// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rill data-flow engine
//!
//! Propagation itself never fails: a subscriber that panics unwinds straight to the
//! `publish` caller, and combinators that withhold output until every source has
//! emitted are gating, not failing. [`RillError`] covers what can actually go wrong
//! when building a graph: oversized combinator inputs, bundle lookups, and fallible
//! system constructors.
//!
//! # Examples
//!
//! ```
//! use rill_core::{Result, RillError};
//!
//! fn lookup() -> Result<()> {
//!     Err(RillError::missing_stream("count"))
//! }
//! assert!(lookup().is_err());
//! ```

/// Root error type for all rill operations
#[derive(Debug, thiserror::Error)]
pub enum RillError {
    /// A dynamically sized combinator was given more sources than its readiness mask can track
    #[error("Too many sources: {count} given, at most {max} supported")]
    TooManySources {
        /// Number of sources passed in
        count: usize,
        /// Capacity of the readiness mask
        max: usize,
    },

    /// A bundle has no entry under the requested name
    #[error("Missing stream: no entry named `{name}` in bundle")]
    MissingStream {
        /// Name that was looked up
        name: String,
    },

    /// A bundle entry exists but holds a different handle type
    #[error("Stream type mismatch: `{name}` is not a {expected}")]
    StreamTypeMismatch {
        /// Name that was looked up
        name: String,
        /// Type name of the handle the caller asked for
        expected: &'static str,
    },

    /// A system constructor reported a failure
    #[error("System construction error: {context}")]
    Construction {
        /// What the constructor was doing when it failed
        context: String,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RillError {
    /// Create a missing stream error for the given name
    pub fn missing_stream(name: impl Into<String>) -> Self {
        Self::MissingStream { name: name.into() }
    }

    /// Create a type mismatch error for the given name and expected handle type
    pub fn type_mismatch(name: impl Into<String>, expected: &'static str) -> Self {
        Self::StreamTypeMismatch {
            name: name.into(),
            expected,
        }
    }

    /// Create a construction error with the given context
    pub fn construction(context: impl Into<String>) -> Self {
        Self::Construction {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error comes from looking up a bundle entry
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::MissingStream { .. } | Self::StreamTypeMismatch { .. }
        )
    }
}

/// Specialized Result type for rill operations
pub type Result<T> = std::result::Result<T, RillError>;

/// Extension trait for converting errors into `RillError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, so system
/// constructors can use `?` on foreign errors.
pub trait IntoRillError {
    /// Convert this error into a `RillError`
    fn into_rill(self) -> RillError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRillError for E {
    fn into_rill(self) -> RillError {
        RillError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(RillError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(RillError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RillError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                RillError::Construction { context: inner } => RillError::Construction {
                    context: format!("{context}: {inner}"),
                },
                other => RillError::Construction {
                    context: format!("{context}: {other}"),
                },
            }
        })
    }
}
