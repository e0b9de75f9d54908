//! Structured logging boundary contract.

use crate::fields::Field;
use crate::level::{Level, Tag};
use fieldlog_shared::Result;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Process exit status used by [`Logger::fatal`].
///
/// Any non-zero status satisfies the fatal contract. This is 1, not the 255
/// that `exit(-1)` reports on Unix.
pub const FATAL_EXIT_CODE: i32 = 1;

/// One emission handed to [`Logger::log`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    tag: Tag,
    args: fmt::Arguments<'a>,
    location: &'static Location<'static>,
}

impl<'a> Record<'a> {
    /// Create a record for a call site.
    #[must_use]
    pub const fn new(
        tag: Tag,
        args: fmt::Arguments<'a>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            tag,
            args,
            location,
        }
    }

    /// Line tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Message arguments.
    #[must_use]
    pub const fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    /// Source location of the caller that emitted the record.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// Boundary contract for leveled, named, field-annotated logging.
///
/// Implementors provide [`Logger::log`], [`Logger::flush`], the derivations,
/// and the accessors; every entry point is a provided method that records
/// the caller's location and forwards to `log`.
///
/// Derivations never mutate the receiver. They return a new logger that
/// shares the receiver's output and differs in exactly one setting.
///
/// # Caller location
///
/// The reported call site comes from `#[track_caller]`, not from walking the
/// stack. Every entry point is `#[track_caller]`, so a wrapper reports its
/// own caller only when the wrapper is `#[track_caller]` as well:
///
/// ```
/// use fieldlog_ports::Logger;
///
/// #[track_caller]
/// fn audit(logger: &dyn Logger, message: &str) {
///     // Reports the line that called `audit`.
///     logger.info(message);
/// }
/// ```
///
/// [`Logger::depth`] and [`Logger::add_depth`] are bookkeeping only. The
/// bundled loggers store the value and carry it through derivations but do
/// not use it to choose a frame.
pub trait Logger: Send + Sync + fmt::Debug {
    /// Write one record.
    ///
    /// Output failures are handled by the implementation and never reach the
    /// caller.
    fn log(&self, record: Record<'_>);

    /// Flush the underlying output.
    fn flush(&self) -> Result<()>;

    /// Derive a logger with `fields` appended to the current field set.
    fn with(&self, fields: Vec<Field>) -> Arc<dyn Logger>;

    /// Derive a logger with its name replaced.
    fn with_name(&self, name: &str) -> Arc<dyn Logger>;

    /// Derive a logger whose `print`/`printf` calls use `level`.
    fn with_level(&self, level: Level) -> Arc<dyn Logger>;

    /// Derive a logger with `delta` added to its caller-frame depth.
    ///
    /// The depth does not move the reported call site; mark wrappers with
    /// `#[track_caller]` for that. See the trait docs.
    fn add_depth(&self, delta: i32) -> Arc<dyn Logger>;

    /// Current name, if any.
    fn name(&self) -> Option<&str>;

    /// Accumulated field set.
    fn fields(&self) -> &[Field];

    /// Level used by `print`/`printf`.
    fn level(&self) -> Level;

    /// Caller-frame depth offset, tracked for bookkeeping only.
    fn depth(&self) -> i32;

    /// Log a message at debug level.
    #[track_caller]
    fn debug(&self, message: &str) {
        emit(self, Tag::Debug, format_args!("{message}"));
    }

    /// Log formatted arguments at debug level.
    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        emit(self, Tag::Debug, args);
    }

    /// Log a message at info level.
    #[track_caller]
    fn info(&self, message: &str) {
        emit(self, Tag::Info, format_args!("{message}"));
    }

    /// Log formatted arguments at info level.
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        emit(self, Tag::Info, args);
    }

    /// Log a message at warning level.
    #[track_caller]
    fn warn(&self, message: &str) {
        emit(self, Tag::Warning, format_args!("{message}"));
    }

    /// Log formatted arguments at warning level.
    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        emit(self, Tag::Warning, args);
    }

    /// Log a message at error level.
    #[track_caller]
    fn error(&self, message: &str) {
        emit(self, Tag::Error, format_args!("{message}"));
    }

    /// Log formatted arguments at error level.
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        emit(self, Tag::Error, args);
    }

    /// Log a message with the stored level's tag.
    #[track_caller]
    fn print(&self, message: &str) {
        emit(self, Tag::from(self.level()), format_args!("{message}"));
    }

    /// Log formatted arguments with the stored level's tag.
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        emit(self, Tag::from(self.level()), args);
    }

    /// Log at fatal level, flush, and exit the process with
    /// [`FATAL_EXIT_CODE`].
    #[track_caller]
    fn fatal(&self, message: &str) -> ! {
        emit(self, Tag::Fatal, format_args!("{message}"));
        terminate(self)
    }

    /// Formatted variant of [`Logger::fatal`].
    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        emit(self, Tag::Fatal, args);
        terminate(self)
    }

    /// Log with the panic tag, flush, and unwind with the message as the
    /// panic payload.
    ///
    /// This ends the current unit of work; it is not meant to be caught in
    /// normal control flow.
    #[track_caller]
    fn panic(&self, message: &str) -> ! {
        emit(self, Tag::Panic, format_args!("{message}"));
        unwind(self, message.to_owned())
    }

    /// Formatted variant of [`Logger::panic`].
    #[track_caller]
    fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        emit(self, Tag::Panic, format_args!("{message}"));
        unwind(self, message)
    }
}

#[track_caller]
fn emit<L: Logger + ?Sized>(logger: &L, tag: Tag, args: fmt::Arguments<'_>) {
    logger.log(Record::new(tag, args, Location::caller()));
}

fn terminate<L: Logger + ?Sized>(logger: &L) -> ! {
    // Best effort; the process is going away regardless.
    let _ = logger.flush();
    std::process::exit(FATAL_EXIT_CODE)
}

fn unwind<L: Logger + ?Sized>(logger: &L, message: String) -> ! {
    let _ = logger.flush();
    std::panic::panic_any(message)
}
