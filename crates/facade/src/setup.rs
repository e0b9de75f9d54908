//! Build and install loggers from [`LoggerConfig`].

use crate::global::use_logger;
use fieldlog_adapters::{SimpleLogger, StderrLogSink, StdoutLogSink};
use fieldlog_config::{LogOutput, LoggerConfig, load_logger_config_std_env};
use fieldlog_ports::{Field, LogSink, Logger};
use fieldlog_shared::Result;
use std::path::Path;
use std::sync::Arc;

/// Build a logger writing to the configured output stream.
pub fn logger_from_config(config: &LoggerConfig) -> Arc<dyn Logger> {
    let sink: Arc<dyn LogSink> = match config.output {
        LogOutput::Stdout => Arc::new(StdoutLogSink),
        LogOutput::Stderr => Arc::new(StderrLogSink),
    };
    logger_from_config_with_sink(config, sink)
}

/// Build a logger from `config` writing to `sink`; `config.output` is ignored.
pub fn logger_from_config_with_sink(
    config: &LoggerConfig,
    sink: Arc<dyn LogSink>,
) -> Arc<dyn Logger> {
    let fields = config
        .fields
        .iter()
        .map(|(key, value)| Field::new(key.as_str(), value.clone()));
    let mut builder = SimpleLogger::builder(sink)
        .level(config.level)
        .utc(config.utc)
        .redact_secrets(config.redact_secrets)
        .fields(fields);
    if let Some(name) = &config.name {
        builder = builder.name(name.as_str());
    }
    Arc::new(builder.build())
}

/// Load config from the `FIELDLOG_*` env vars, install the result as the
/// default logger, and return it.
pub fn init_from_env() -> Result<Arc<dyn Logger>> {
    init_from_path(None)
}

/// Like [`init_from_env`], with an optional TOML or JSON file underneath the
/// env overrides.
pub fn init_from_path(config_path: Option<&Path>) -> Result<Arc<dyn Logger>> {
    let config = load_logger_config_std_env(config_path)?;
    let logger = logger_from_config(&config);
    use_logger(Arc::clone(&logger));
    Ok(logger)
}
