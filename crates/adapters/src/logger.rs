//! Default text logger.
//!
//! [`SimpleLogger`] renders `[name][T] message # {fields}` and hands the line
//! to a shared [`LineWriter`]. Instances are immutable once built: every
//! derivation clones the (cheap, `Arc`-backed) state, changes one setting,
//! and returns a new logger that shares the writer with its parent.

use crate::line::LineWriter;
use crate::log_sink::StdoutLogSink;
use fieldlog_ports::{Field, Level, LogSink, Logger, Record, encode_fields_json};
use fieldlog_shared::redaction::{REDACTED, is_secret_key};
use fieldlog_shared::{ErrorEnvelope, Result};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Separator written between the message and the encoded fields.
pub const FIELDS_SEPARATOR: &str = " # ";

/// Default concrete logger writing formatted text lines.
#[derive(Clone)]
pub struct SimpleLogger {
    name: Option<Arc<str>>,
    prefix: Arc<str>,
    fields: Arc<[Field]>,
    encoded_fields: Arc<str>,
    depth: i32,
    level: Level,
    redact_secrets: bool,
    writer: Arc<LineWriter>,
}

/// Builder for [`SimpleLogger`].
#[derive(Clone)]
pub struct SimpleLoggerBuilder {
    sink: Arc<dyn LogSink>,
    name: Option<String>,
    fields: Vec<Field>,
    level: Level,
    depth: i32,
    redact_secrets: bool,
    utc: bool,
}

impl SimpleLoggerBuilder {
    /// Set the name rendered as `[name]` before every tag.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append fields to the initial field set.
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Append one field to the initial field set.
    #[must_use]
    pub fn field(mut self, key: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(key, value));
        self
    }

    /// Set the level used by `print`/`printf`.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the caller-frame depth offset.
    ///
    /// The depth is carried for bookkeeping; call sites come from
    /// `#[track_caller]`.
    #[must_use]
    pub const fn depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Add to the caller-frame depth offset.
    #[must_use]
    pub const fn add_depth(mut self, delta: i32) -> Self {
        self.depth = self.depth.saturating_add(delta);
        self
    }

    /// Encode secret-looking field keys as `[REDACTED]`.
    #[must_use]
    pub const fn redact_secrets(mut self, redact: bool) -> Self {
        self.redact_secrets = redact;
        self
    }

    /// Stamp lines in UTC instead of local time.
    #[must_use]
    pub const fn utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Build the logger.
    #[must_use]
    pub fn build(self) -> SimpleLogger {
        let fields: Arc<[Field]> = Arc::from(self.fields);
        let encoded_fields = encode_suffix(&fields, self.redact_secrets);
        let name: Option<Arc<str>> = self.name.map(Arc::from);
        SimpleLogger {
            prefix: render_prefix(name.as_deref()),
            name,
            fields,
            encoded_fields,
            depth: self.depth,
            level: self.level,
            redact_secrets: self.redact_secrets,
            writer: Arc::new(LineWriter::new(self.sink).with_utc(self.utc)),
        }
    }
}

impl SimpleLogger {
    /// Start building a logger over `sink`.
    #[must_use]
    pub fn builder(sink: Arc<dyn LogSink>) -> SimpleLoggerBuilder {
        SimpleLoggerBuilder {
            sink,
            name: None,
            fields: Vec::new(),
            level: Level::Info,
            depth: 0,
            redact_secrets: false,
            utc: false,
        }
    }

    /// Logger over `sink` with default settings.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::builder(sink).build()
    }

    /// Logger over stdout with default settings.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutLogSink))
    }

    /// The cached `" # {...}"` suffix, empty when there are no fields.
    #[must_use]
    pub fn encoded_fields(&self) -> &str {
        &self.encoded_fields
    }

    /// The underlying line writer shared with every derived logger.
    #[must_use]
    pub fn line_writer(&self) -> &LineWriter {
        &self.writer
    }

    /// Child logger with `fields` appended.
    #[must_use]
    pub fn child_with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut merged: Vec<Field> = self.fields.to_vec();
        merged.extend(fields);
        let fields: Arc<[Field]> = Arc::from(merged);
        Self {
            encoded_fields: encode_suffix(&fields, self.redact_secrets),
            fields,
            ..self.clone()
        }
    }

    /// Child logger with the name replaced.
    #[must_use]
    pub fn child_with_name(&self, name: &str) -> Self {
        Self {
            name: Some(Arc::from(name)),
            prefix: render_prefix(Some(name)),
            ..self.clone()
        }
    }

    /// Child logger with the print level replaced.
    #[must_use]
    pub fn child_with_level(&self, level: Level) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    /// Child logger with `delta` added to the depth.
    #[must_use]
    pub fn child_with_depth(&self, delta: i32) -> Self {
        Self {
            depth: self.depth.saturating_add(delta),
            ..self.clone()
        }
    }
}

impl fmt::Debug for SimpleLogger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SimpleLogger")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .field("depth", &self.depth)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger for SimpleLogger {
    fn log(&self, record: Record<'_>) {
        let body = format!("{}{}{}", record.tag(), record.args(), self.encoded_fields);
        report_failure(self.writer.output(record.location(), &self.prefix, &body));
    }

    fn flush(&self) -> Result<()> {
        self.writer.flush().map_err(ErrorEnvelope::from)
    }

    fn with(&self, fields: Vec<Field>) -> Arc<dyn Logger> {
        Arc::new(self.child_with_fields(fields))
    }

    fn with_name(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(self.child_with_name(name))
    }

    fn with_level(&self, level: Level) -> Arc<dyn Logger> {
        Arc::new(self.child_with_level(level))
    }

    fn add_depth(&self, delta: i32) -> Arc<dyn Logger> {
        Arc::new(self.child_with_depth(delta))
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

fn render_prefix(name: Option<&str>) -> Arc<str> {
    name.map_or_else(|| Arc::from(""), |name| Arc::from(format!("[{name}]")))
}

fn encode_suffix(fields: &[Field], redact_secrets: bool) -> Arc<str> {
    if fields.is_empty() {
        return Arc::from("");
    }

    let mut buffer = FIELDS_SEPARATOR.as_bytes().to_vec();
    let result = if redact_secrets {
        encode_fields_json(&redact_fields(fields), &mut buffer)
    } else {
        encode_fields_json(fields, &mut buffer)
    };
    // A failed encode keeps whatever was written before the failure.
    report_failure(result);
    Arc::from(String::from_utf8_lossy(&buffer).into_owned())
}

/// Report an output or encode failure on stderr and swallow it.
pub(crate) fn report_failure<E: fmt::Display>(result: Result<(), E>) {
    if let Err(error) = result {
        eprintln!("log output fail: {error}");
    }
}

fn redact_fields(fields: &[Field]) -> Vec<Field> {
    fields
        .iter()
        .map(|field| {
            if is_secret_key(field.key()) {
                field.with_value(Value::String(REDACTED.to_string()))
            } else {
                let mut value = field.value().clone();
                redact_value(&mut value);
                field.with_value(value)
            }
        })
        .collect()
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map.iter_mut() {
                if is_secret_key(key) {
                    *nested = Value::String(REDACTED.to_string());
                } else {
                    redact_value(nested);
                }
            }
        },
        Value::Array(items) => {
            for item in items {
                redact_value(item);
            }
        },
        _ => {},
    }
}
