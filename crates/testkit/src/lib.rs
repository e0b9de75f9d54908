//! # fieldlog-testkit
//!
//! Test doubles for sinks and loggers.
//! This crate depends on `ports` and `shared`.

pub mod errors;
pub mod in_memory;

pub use in_memory::{FailingSink, FlushCountingSink, MemorySink, NoopLogger, message_part};

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
