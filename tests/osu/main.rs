//! Tests for `osu_rs::osu`.

#[cfg(feature = "diagnostics")]
mod diagnostics_test;
mod errors;
mod files;
mod parallel;
mod prelude_test;
mod roundtrip;
#[cfg(feature = "serde")]
mod serde_model;
