//! Logger that forwards records to `tracing` events.
//!
//! Tags map onto tracing levels (`[P]` and `[F]` become `ERROR`); the logger
//! name, caller location, and encoded fields travel as event fields so any
//! installed subscriber can render or filter them.

use crate::line::short_file;
use crate::logger::report_failure;
use fieldlog_ports::{Field, Level, Logger, Record, Tag, fields_to_json};
use fieldlog_shared::Result;
use std::fmt;
use std::sync::Arc;

/// [`Logger`] backed by the current `tracing` dispatcher.
#[derive(Clone, Default)]
pub struct TracingLogger {
    name: Option<Arc<str>>,
    fields: Arc<[Field]>,
    encoded_fields: Arc<str>,
    level: Level,
    depth: i32,
}

impl TracingLogger {
    /// Unnamed logger with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logger with a name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(Arc::from(name)),
            ..Self::default()
        }
    }

    fn derive_fields(&self, fields: Vec<Field>) -> Self {
        let mut merged = self.fields.to_vec();
        merged.extend(fields);
        let encoded = match fields_to_json(&merged) {
            Ok(encoded) => encoded,
            Err(error) => {
                report_failure(Err(error));
                String::new()
            },
        };
        Self {
            fields: Arc::from(merged),
            encoded_fields: Arc::from(encoded),
            ..self.clone()
        }
    }
}

impl fmt::Debug for TracingLogger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TracingLogger")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .field("level", &self.level)
            .field("depth", &self.depth)
            .finish()
    }
}

impl Logger for TracingLogger {
    fn log(&self, record: Record<'_>) {
        let location = record.location();
        let caller = format!("{}:{}", short_file(location.file()), location.line());
        let logger = self.name.as_deref().unwrap_or_default();
        let fields = &*self.encoded_fields;
        let message = record.args();

        match record.tag() {
            Tag::Debug => tracing::debug!(logger, caller = %caller, fields = %fields, "{message}"),
            Tag::Info => tracing::info!(logger, caller = %caller, fields = %fields, "{message}"),
            Tag::Warning => tracing::warn!(logger, caller = %caller, fields = %fields, "{message}"),
            Tag::Error => tracing::error!(logger, caller = %caller, fields = %fields, "{message}"),
            Tag::Fatal => tracing::error!(logger, caller = %caller, fields = %fields, fatal = true, "{message}"),
            Tag::Panic => tracing::error!(logger, caller = %caller, fields = %fields, panic = true, "{message}"),
        }
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn with(&self, fields: Vec<Field>) -> Arc<dyn Logger> {
        Arc::new(self.derive_fields(fields))
    }

    fn with_name(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(Self {
            name: Some(Arc::from(name)),
            ..self.clone()
        })
    }

    fn with_level(&self, level: Level) -> Arc<dyn Logger> {
        Arc::new(Self {
            level,
            ..self.clone()
        })
    }

    fn add_depth(&self, delta: i32) -> Arc<dyn Logger> {
        Arc::new(Self {
            depth: self.depth.saturating_add(delta),
            ..self.clone()
        })
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn level(&self) -> Level {
        self.level
    }

    fn depth(&self) -> i32 {
        self.depth
    }
}
