//! # fieldlog-adapters
//!
//! Concrete loggers and sinks for the `fieldlog` ports.
//! This crate depends on `ports` and `shared` only.

pub mod line;
pub mod log_sink;
pub mod logger;
pub mod tracing_logger;

pub use line::LineWriter;
pub use log_sink::{StderrLogSink, StdoutLogSink, WriterSink};
pub use logger::{FIELDS_SEPARATOR, SimpleLogger, SimpleLoggerBuilder};
pub use tracing_logger::TracingLogger;

/// Crate version, used by downstream smoke tests.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
