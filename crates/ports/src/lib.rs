//! # fieldlog-ports
//!
//! Boundary contracts for the fieldlog workspace: severity levels, structured
//! fields, the [`Logger`] capability set, and the [`LogSink`] output port.
//!
//! This crate depends only on `shared`.

pub mod fields;
pub mod level;
pub mod logger;
pub mod sink;

pub use fields::{Field, encode_fields_json, fields_to_json};
pub use level::{Level, Tag};
pub use logger::{FATAL_EXIT_CODE, Logger, Record};
pub use sink::LogSink;

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
