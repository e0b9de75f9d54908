//! Line stamping over a shared sink.
//!
//! Every line is rendered as
//! `YYYY/MM/DD HH:MM:SS.ffffff file.rs:LINE: [name][T] message # {fields}`
//! and handed to the sink in a single `write_line` call.

use chrono::{Local, Utc};
use fieldlog_ports::LogSink;
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

const STAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Writes stamped lines to a shared sink.
#[derive(Clone)]
pub struct LineWriter {
    sink: Arc<dyn LogSink>,
    utc: bool,
}

impl LineWriter {
    /// Create a writer stamping local time.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink, utc: false }
    }

    /// Stamp lines in UTC instead of local time.
    #[must_use]
    pub const fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Returns true when lines are stamped in UTC.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.utc
    }

    /// The shared sink.
    #[must_use]
    pub const fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Stamp and write one line.
    ///
    /// `prefix` is written between the caller location and `body`.
    pub fn output(&self, location: &Location<'_>, prefix: &str, body: &str) -> io::Result<()> {
        let stamp = if self.utc {
            Utc::now().format(STAMP_FORMAT).to_string()
        } else {
            Local::now().format(STAMP_FORMAT).to_string()
        };
        let line = render_line(&stamp, location.file(), location.line(), prefix, body);
        self.sink.write_line(&line)
    }

    /// Flush the sink.
    pub fn flush(&self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LineWriter")
            .field("utc", &self.utc)
            .finish_non_exhaustive()
    }
}

/// Final path component of a source file.
pub(crate) fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn render_line(stamp: &str, file: &str, line: u32, prefix: &str, body: &str) -> String {
    let mut rendered = format!("{stamp} {}:{line}: {prefix}{body}", short_file(file));
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}
