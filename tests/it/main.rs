//! Entry point for integration tests.
//!
//! Note: `cargo` "integration tests"
//! mean "tests as the library consumer uses the library",
//! not e.g. "tests using remote resources".
//!
//! # Debugging normalization
//!
//! Tests _should_ include a call to [`tracing::setup`].
//! This then configures the test to output tracing data to the terminal,
//! which can be debugged by running `cargo test` in the terminal with a `RUST_LOG`
//! setting. For details, see [filtering events with environment variables].
//!
mod properties;
mod tracing;
