//! In-memory sinks and loggers for tests.
//!
//! These implementations are intended for:
//! - Unit/integration tests of loggers and the global facade
//! - Asserting rendered lines without touching stdout
//! - Exercising output-failure paths deterministically

use crate::errors::sink_closed_error;
use fieldlog_ports::{Field, Level, LogSink, Logger, Record};
use fieldlog_shared::Result;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Strip the `date time file:line: ` header and trailing newline from a line.
pub fn message_part(line: &str) -> &str {
    line.splitn(4, ' ')
        .nth(3)
        .unwrap_or_default()
        .trim_end_matches('\n')
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    flushes: AtomicUsize,
}

impl MemorySink {
    /// Create an empty sink behind an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Drain the lines written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap())
    }

    /// Lines with the timestamp and caller header removed.
    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .iter()
            .map(|line| message_part(line).to_string())
            .collect()
    }

    /// The most recent line.
    pub fn last(&self) -> Option<String> {
        self.lines.lock().unwrap().last().cloned()
    }

    /// Number of flushes observed.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Sink whose writes and flushes always fail.
#[derive(Debug, Default)]
pub struct FailingSink {
    attempts: AtomicUsize,
}

impl FailingSink {
    /// Number of write attempts observed.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl LogSink for FailingSink {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(sink_closed_error())
    }

    fn flush(&self) -> io::Result<()> {
        Err(sink_closed_error())
    }
}

/// Sink that discards lines and counts writes and flushes.
#[derive(Debug, Default)]
pub struct FlushCountingSink {
    writes: AtomicUsize,
    flushes: AtomicUsize,
}

impl FlushCountingSink {
    /// Number of lines written.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of flushes observed.
    pub fn flushes(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl LogSink for FlushCountingSink {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A logger that drops every record.
///
/// Derivations are tracked so depth and name bookkeeping can still be
/// asserted.
#[derive(Debug, Clone, Default)]
pub struct NoopLogger {
    name: Option<Arc<str>>,
    fields: Arc<[Field]>,
    level: Level,
    depth: i32,
}

impl Logger for NoopLogger {
    fn log(&self, _record: Record<'_>) {}

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn with(&self, fields: Vec<Field>) -> Arc<dyn Logger> {
        let mut merged = self.fields.to_vec();
        merged.extend(fields);
        Arc::new(Self {
            fields: Arc::from(merged),
            ..self.clone()
        })
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
            depth: self.depth + delta,
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
