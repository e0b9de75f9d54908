//! Output sink boundary contract.

use std::io;

/// A destination that receives fully formatted log lines.
///
/// Implementations must be safe to call from several threads at once; each
/// call carries one complete line including its trailing newline.
pub trait LogSink: Send + Sync {
    /// Write a line to the sink.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flush buffered output.
    ///
    /// Sinks without buffering keep the default, which reports success.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
