// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{IntoRillError, Result, ResultExt, RillError};

#[derive(Debug, thiserror::Error)]
#[error("sensor offline")]
struct SensorError;

#[test]
fn display_messages() {
    assert_eq!(
        RillError::missing_stream("count").to_string(),
        "Missing stream: no entry named `count` in bundle"
    );
    assert_eq!(
        RillError::TooManySources { count: 65, max: 64 }.to_string(),
        "Too many sources: 65 given, at most 64 supported"
    );
    assert_eq!(
        RillError::type_mismatch("count", "Stream<i32>").to_string(),
        "Stream type mismatch: `count` is not a Stream<i32>"
    );
}

#[test]
fn lookup_errors_are_classified() {
    assert!(RillError::missing_stream("a").is_lookup());
    assert!(RillError::type_mismatch("a", "Stream<u8>").is_lookup());
    assert!(!RillError::construction("boom").is_lookup());
}

#[test]
fn user_errors_convert() {
    let error = SensorError.into_rill();
    assert!(matches!(error, RillError::UserError(_)));
    assert_eq!(error.to_string(), "User error: sensor offline");
}

#[test]
fn context_wraps_errors() {
    let result: Result<()> = Err(RillError::missing_stream("count"));
    let error = result.context("building counter").unwrap_err();

    assert_eq!(
        error.to_string(),
        "System construction error: building counter: Missing stream: no entry named `count` in bundle"
    );
}

#[test]
fn with_context_is_lazy_on_success() {
    let result: Result<u8> = Ok(1);
    let value = result
        .with_context(|| panic!("context must not be built"))
        .unwrap();
    assert_eq!(value, 1);
}
