// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The facade's runtime features decide which scheduler the member crates see.
//! Run with `--no-default-features --features runtime-smol` to cover the smol build.

#[cfg(feature = "runtime-tokio")]
#[test]
fn tokio_feature_selects_tokio_scheduler() {
    // Arrange / Act
    let scheduler: rill::TokioScheduler = rill::DefaultScheduler::default();

    // Assert
    assert_eq!(format!("{scheduler:?}"), "TokioScheduler");
}

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
#[test]
fn smol_only_build_does_not_pull_in_tokio() {
    // Arrange / Act
    let scheduler: rill::SmolScheduler = rill::DefaultScheduler::default();

    // Assert
    assert_eq!(format!("{scheduler:?}"), "SmolScheduler");
}
