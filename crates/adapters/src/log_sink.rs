//! Log sink adapters over byte streams.

use fieldlog_ports::LogSink;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Sink over any writer; writes are serialized by a mutex so one line is
/// never interleaved with another.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Run `op` with exclusive access to the wrapped writer.
    pub fn with_inner<R>(&self, op: impl FnOnce(&mut W) -> R) -> R {
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        op(&mut *guard)
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("WriterSink").finish_non_exhaustive()
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.with_inner(|writer| writer.write_all(line.as_bytes()))
    }

    fn flush(&self) -> io::Result<()> {
        self.with_inner(Write::flush)
    }
}

/// Log sink that writes to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLogSink;

impl LogSink for StdoutLogSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        io::stdout().lock().write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Log sink that writes to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        io::stderr().lock().write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[derive(Debug, Default)]
    struct CountingWriter {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn writer_sink_captures_lines_and_flushes() -> io::Result<()> {
        let sink = WriterSink::new(CountingWriter::default());
        sink.write_line("hello\n")?;
        sink.write_line("world\n")?;
        sink.flush()?;

        let writer = sink.into_inner();
        assert_eq!(writer.bytes, b"hello\nworld\n");
        assert_eq!(writer.flushes, 1);
        Ok(())
    }

    #[test]
    fn concurrent_lines_are_not_interleaved() {
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for index in 0..50 {
                        let line = format!("worker-{worker}-line-{index}\n");
                        assert!(sink.write_line(&line).is_ok());
                    }
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok());
        }

        let text = sink.with_inner(|buffer| String::from_utf8_lossy(buffer).into_owned());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 200);
        assert!(lines.iter().all(|line| line.starts_with("worker-")));
    }
}
