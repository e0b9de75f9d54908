//! # fieldlog
//!
//! Leveled, named, field-annotated logging with context propagation.
//!
//! ```no_run
//! use fieldlog::{Field, Logger};
//!
//! let logger = fieldlog::with_name("svc").with(vec![Field::new("region", "eu")]);
//! logger.info("ready");
//! fieldlog::infof!("{} workers", 4);
//! ```
//!
//! This crate depends on `adapters`, `config`, `ports`, and `shared`.

pub mod context;
pub mod global;
mod macros;
pub mod setup;

pub use context::{LOGGER_KEY, attach_logger, retrieve_logger};
pub use global::{
    current, debug, debugf, error, errorf, fatal, fatalf, info, infof, panic, panicf, printf,
    use_logger, warn, warnf, with, with_name,
};
pub use setup::{init_from_env, init_from_path, logger_from_config, logger_from_config_with_sink};

pub use fieldlog_adapters::{
    FIELDS_SEPARATOR, LineWriter, SimpleLogger, SimpleLoggerBuilder, StderrLogSink,
    StdoutLogSink, TracingLogger, WriterSink,
};
pub use fieldlog_config::{LogOutput, LoggerConfig, LoggerEnv};
pub use fieldlog_ports::{
    FATAL_EXIT_CODE, Field, Level, LogSink, Logger, Record, Tag, encode_fields_json,
    fields_to_json,
};
pub use fieldlog_shared::{
    Context, ContextKey, ContextRef, ContextStore, ContextValue, ErrorEnvelope, RequestStore,
    Result, background, with_value,
};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
